//! Column scaling of merged weight matrices.

use ndarray::{Array2, ArrayView1, Axis};

/// Returns a copy of `matrix` with column `j` multiplied by `scales[j]`.
///
/// # Panics
///
/// Panics if `scales.len()` differs from the number of columns.
pub fn scale_columns(matrix: &Array2<f64>, scales: &[f64]) -> Array2<f64> {
    assert_eq!(
        matrix.ncols(),
        scales.len(),
        "Expected one scale per column"
    );
    let scales = ArrayView1::from(scales).insert_axis(Axis(0));
    matrix * &scales
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use ndarray::array;
    use test_log::test;

    use super::*;

    #[test]
    fn test_scale_columns() {
        let matrix = array![[1., 2., 3.], [4., 5., 6.]];
        let scaled = scale_columns(&matrix, &[2., 0., -1.]);
        assert_eq!(scaled, array![[2., 0., -3.], [8., 0., -6.]]);
        // The input is left untouched.
        assert_eq!(matrix, array![[1., 2., 3.], [4., 5., 6.]]);
    }

    #[test]
    fn test_scale_by_ones() {
        let matrix = array![[0.5, -2.0], [3.25, 1e-3]];
        assert_eq!(scale_columns(&matrix, &[1., 1.]), matrix);
    }

    #[test]
    fn test_scale_reciprocal() {
        let matrix = array![[0.3, 1.7], [-2.9, 4.1], [5.5, -0.1]];
        let scales = [3.0, 7.0];
        let back: Vec<f64> = scales.iter().map(|s| 1.0 / s).collect();
        let restored = scale_columns(&scale_columns(&matrix, &scales), &back);
        for (a, b) in restored.iter().zip(matrix.iter()) {
            assert_relative_eq!(*a, *b, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_scale_empty() {
        let matrix = Array2::<f64>::zeros((0, 0));
        assert_eq!(scale_columns(&matrix, &[]).shape(), &[0, 0]);
    }

    #[test]
    #[should_panic(expected = "Expected one scale per column")]
    fn test_scale_length_mismatch() {
        scale_columns(&array![[1., 2.]], &[1.]);
    }
}
