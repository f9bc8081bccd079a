use std::path::PathBuf;

use thiserror::Error;

use crate::network::ReactionNetwork;

/// Loads a reaction network from a JSON file.
///
/// # Arguments
///
/// * `path` - Path to the JSON file containing the network
///
/// # Errors
///
/// Returns an [`IOError`] if the file cannot be opened or its contents do not
/// parse as a [`ReactionNetwork`]. Loading performs no validation beyond
/// deserialization; run the network through validation before simulating.
pub fn load_network(path: impl Into<PathBuf>) -> Result<ReactionNetwork, IOError> {
    let path = path.into();
    let file = std::fs::File::open(path).map_err(IOError::FileNotFound)?;
    serde_json::from_reader(file).map_err(IOError::JsonParseError)
}

/// Saves a reaction network to a JSON file.
///
/// # Arguments
///
/// * `path` - Path of the JSON file to write
/// * `network` - The network to save
pub fn save_network(path: impl Into<PathBuf>, network: &ReactionNetwork) -> Result<(), IOError> {
    let path = path.into();
    let file = std::fs::File::create(path).map_err(IOError::FileNotFound)?;
    serde_json::to_writer_pretty(file, network).map_err(IOError::JsonParseError)
}

/// Errors that can occur while reading or writing network files.
#[derive(Error, Debug)]
pub enum IOError {
    /// The specified file could not be found, opened or created.
    #[error("File not found: {0}")]
    FileNotFound(#[from] std::io::Error),

    /// The file contents could not be parsed or written as JSON.
    #[error("Failed to parse JSON: {0}")]
    JsonParseError(#[from] serde_json::Error),
}
