//! Resampling of solver output onto a requested time grid.
//!
//! The integrator emits its trajectory at solver-chosen dense output points;
//! the caller asked for concentrations at the network's own time grid. Values
//! are interpolated with Catmull-Rom splines, falling back to linear
//! interpolation where the cubic spline is undefined (near the ends of the
//! data), so a sample always exists.

use nalgebra::DVector;
use splines::{Interpolation, Key, Spline};

/// Interpolates the per-species columns of `data` at `query_times`.
///
/// `data` holds one state vector per entry of `times`. Returns one state
/// vector per query time. Query times outside the data range clamp to the
/// nearest endpoint.
pub(crate) fn resample(
    data: &[DVector<f64>],
    times: &[f64],
    query_times: &[f64],
) -> Vec<DVector<f64>> {
    let n_cols = data.first().map_or(0, DVector::len);

    let cubic_splines = setup_splines(data, times, n_cols, Interpolation::CatmullRom);
    let linear_splines = setup_splines(data, times, n_cols, Interpolation::Linear);

    query_times
        .iter()
        .map(|&t| {
            DVector::from_iterator(
                n_cols,
                (0..n_cols).map(|col| match cubic_splines[col].sample(t) {
                    Some(value) => value,
                    None => linear_splines[col].clamped_sample(t).unwrap(),
                }),
            )
        })
        .collect()
}

/// Creates one spline per column of the trajectory data.
fn setup_splines(
    data: &[DVector<f64>],
    times: &[f64],
    n_cols: usize,
    interpolation: Interpolation<f64, f64>,
) -> Vec<Spline<f64, f64>> {
    (0..n_cols)
        .map(|col| {
            let keys = times
                .iter()
                .zip(data)
                .map(|(&t, row)| Key::new(t, row[col], interpolation))
                .collect();
            Spline::from_vec(keys)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_resample_hits_linear_data() {
        // columns are y = t and y = 2t; any interpolation must reproduce them
        let times: Vec<f64> = (0..=10).map(f64::from).collect();
        let data: Vec<DVector<f64>> = times
            .iter()
            .map(|&t| DVector::from_row_slice(&[t, 2.0 * t]))
            .collect();

        let resampled = resample(&data, &times, &[0.0, 0.5, 5.25, 10.0]);

        assert_eq!(resampled.len(), 4);
        for (row, &t) in resampled.iter().zip(&[0.0, 0.5, 5.25, 10.0]) {
            assert_relative_eq!(row[0], t, epsilon = 1e-12);
            assert_relative_eq!(row[1], 2.0 * t, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_resample_clamps_at_endpoints() {
        let times = vec![0.0, 1.0];
        let data = vec![
            DVector::from_row_slice(&[1.0]),
            DVector::from_row_slice(&[3.0]),
        ];

        let resampled = resample(&data, &times, &[-1.0, 2.0]);

        assert_relative_eq!(resampled[0][0], 1.0);
        assert_relative_eq!(resampled[1][0], 3.0);
    }
}
