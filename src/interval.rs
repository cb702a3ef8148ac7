//! Interval-matrix abstract domain.
//!
//! The reference weight-set domain. A set of matrices is abstracted by the
//! entrywise interval hull: the lower bound is the entrywise minimum and the
//! upper bound the entrywise maximum over the set.
//!
//! # Example
//!
//! ```
//! use ann_rs::domain::AbstractDomain;
//! use ann_rs::interval::{IntervalDomain, IntervalMatrix};
//! use ndarray::array;
//!
//! let hull = IntervalDomain.alpha(&[array![[1., -2.]], array![[3., -4.]]]);
//! assert_eq!(hull, IntervalMatrix::new(array![[1., -4.]], array![[3., -2.]]));
//! assert_eq!(hull.to_string(), "[[1.0, 3.0], [-4.0, -2.0]]");
//! ```

use std::fmt;

use ndarray::{Array2, Zip};

use crate::domain::AbstractDomain;

/// Interval weight-set domain.
///
/// Always convex: the interval hull of a convex combination of matrices lies
/// within the interval hull of the matrices themselves.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq)]
pub struct IntervalDomain;

impl AbstractDomain for IntervalDomain {
    type Element = IntervalMatrix;

    fn is_convex(&self) -> bool {
        true
    }

    /// Entrywise interval hull of `matrices`.
    ///
    /// # Panics
    ///
    /// Panics if `matrices` is empty, the matrices differ in shape, or some
    /// entry is NaN.
    fn alpha(&self, matrices: &[Array2<f64>]) -> IntervalMatrix {
        let (first, rest) = matrices
            .split_first()
            .expect("Interval abstraction requires at least one matrix");
        // `f64::min`/`f64::max` skip NaN, which would drop it from the hull.
        assert!(
            matrices.iter().all(|m| m.iter().all(|x| !x.is_nan())),
            "Matrix entries must not be NaN"
        );
        let mut lower = first.clone();
        let mut upper = first.clone();
        for matrix in rest {
            assert_eq!(
                matrix.shape(),
                first.shape(),
                "All matrices must have the same shape"
            );
            Zip::from(&mut lower)
                .and(&mut upper)
                .and(matrix)
                .for_each(|l, u, &x| {
                    *l = l.min(x);
                    *u = u.max(x);
                });
        }
        IntervalMatrix::new(lower, upper)
    }
}

#[derive(Debug, Clone)]
struct Bounds {
    lower: Array2<f64>,
    upper: Array2<f64>,
}

/// A matrix whose entries are closed intervals.
///
/// Represented by two ordinary matrices holding the lower and upper bounds.
/// The empty set of matrices is an explicit bottom state rather than a
/// sentinel encoding in the bounds.
#[derive(Debug, Clone)]
pub struct IntervalMatrix {
    shape: (usize, usize),
    /// `None` for bottom.
    bounds: Option<Bounds>,
}

impl IntervalMatrix {
    /// Creates an interval matrix from its lower and upper bounds.
    ///
    /// Bounds that are uniformly `lower = +∞, upper = -∞` encode the empty
    /// interval matrix and yield [`IntervalMatrix::bottom`].
    ///
    /// # Panics
    ///
    /// Panics if the shapes differ or some entry has `lower > upper` (or is NaN).
    pub fn new(lower: Array2<f64>, upper: Array2<f64>) -> Self {
        assert_eq!(
            lower.shape(),
            upper.shape(),
            "Lower and upper bounds must have the same shape"
        );
        if !lower.is_empty()
            && Zip::from(&lower)
                .and(&upper)
                .all(|&l, &u| l == f64::INFINITY && u == f64::NEG_INFINITY)
        {
            let (rows, cols) = lower.dim();
            return IntervalMatrix::bottom(rows, cols);
        }
        assert!(
            Zip::from(&lower).and(&upper).all(|&l, &u| l <= u),
            "Lower bound must not exceed upper bound"
        );
        IntervalMatrix {
            shape: lower.dim(),
            bounds: Some(Bounds { lower, upper }),
        }
    }

    /// The empty interval matrix (⊥) of the given shape.
    pub fn bottom(rows: usize, cols: usize) -> Self {
        IntervalMatrix {
            shape: (rows, cols),
            bounds: None,
        }
    }

    /// The interval matrix with `(-∞, +∞)` in every entry.
    pub fn top(rows: usize, cols: usize) -> Self {
        IntervalMatrix::new(
            Array2::from_elem((rows, cols), f64::NEG_INFINITY),
            Array2::from_elem((rows, cols), f64::INFINITY),
        )
    }

    /// The degenerate interval matrix containing exactly `matrix`.
    pub fn point(matrix: Array2<f64>) -> Self {
        IntervalMatrix::new(matrix.clone(), matrix)
    }

    pub fn is_bottom(&self) -> bool {
        self.bounds.is_none()
    }

    /// `(rows, cols)`.
    pub fn shape(&self) -> (usize, usize) {
        self.shape
    }

    pub fn nrows(&self) -> usize {
        self.shape.0
    }

    pub fn ncols(&self) -> usize {
        self.shape.1
    }

    /// Lower bounds, or `None` for bottom.
    pub fn lower(&self) -> Option<&Array2<f64>> {
        self.bounds.as_ref().map(|b| &b.lower)
    }

    /// Upper bounds, or `None` for bottom.
    pub fn upper(&self) -> Option<&Array2<f64>> {
        self.bounds.as_ref().map(|b| &b.upper)
    }

    /// The interval at entry `(i, j)`.
    pub fn get(&self, i: usize, j: usize) -> Option<(f64, f64)> {
        let b = self.bounds.as_ref()?;
        Some((*b.lower.get((i, j))?, *b.upper.get((i, j))?))
    }

    /// Entrywise `upper - lower`, or `None` for bottom.
    pub fn width(&self) -> Option<Array2<f64>> {
        self.bounds.as_ref().map(|b| &b.upper - &b.lower)
    }

    /// Whether every entry of `matrix` lies within the corresponding interval.
    pub fn contains(&self, matrix: &Array2<f64>) -> bool {
        let Some(b) = &self.bounds else {
            return false;
        };
        if matrix.dim() != self.shape {
            return false;
        }
        Zip::from(&b.lower)
            .and(&b.upper)
            .and(matrix)
            .all(|&l, &u, &x| l <= x && x <= u)
    }

    /// Inclusion: every matrix in `self` is also in `other`.
    pub fn le(&self, other: &IntervalMatrix) -> bool {
        assert_eq!(self.shape, other.shape, "Shapes must match");
        match (&self.bounds, &other.bounds) {
            (None, _) => true,
            (Some(_), None) => false,
            (Some(a), Some(b)) => Zip::from(&a.lower)
                .and(&a.upper)
                .and(&b.lower)
                .and(&b.upper)
                .all(|&al, &au, &bl, &bu| bl <= al && au <= bu),
        }
    }

    /// Entrywise interval hull of `self` and `other`. Bottom is neutral.
    pub fn join(&self, other: &IntervalMatrix) -> IntervalMatrix {
        assert_eq!(self.shape, other.shape, "Shapes must match");
        match (&self.bounds, &other.bounds) {
            (None, _) => other.clone(),
            (_, None) => self.clone(),
            (Some(a), Some(b)) => {
                let lower = Zip::from(&a.lower).and(&b.lower).map_collect(|&x, &y| x.min(y));
                let upper = Zip::from(&a.upper).and(&b.upper).map_collect(|&x, &y| x.max(y));
                IntervalMatrix::new(lower, upper)
            }
        }
    }
}

impl PartialEq for IntervalMatrix {
    /// Exact entrywise equality of both bounds. Two bottoms are equal iff
    /// their shapes are.
    fn eq(&self, other: &Self) -> bool {
        if self.shape != other.shape {
            return false;
        }
        match (&self.bounds, &other.bounds) {
            (None, None) => true,
            (Some(a), Some(b)) => a.lower == b.lower && a.upper == b.upper,
            _ => false,
        }
    }
}

impl fmt::Display for IntervalMatrix {
    /// Renders rows of `[lower, upper]` pairs. Bounds use Rust's shortest
    /// float form, so exponents carry no sign padding (`1e-5`, `1e16`):
    ///
    /// ```text
    /// [[1.0, 7.0], [2.0, 8.0]
    ///  [3.0, 9.0], [4.0, 10.0]]
    /// ```
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Some(b) = &self.bounds else {
            return write!(f, "⊥");
        };
        write!(f, "[")?;
        for (i, (lower, upper)) in b.lower.rows().into_iter().zip(b.upper.rows()).enumerate() {
            if i > 0 {
                write!(f, "\n ")?;
            }
            for (j, (l, u)) in lower.iter().zip(upper.iter()).enumerate() {
                if j > 0 {
                    write!(f, ", ")?;
                }
                // Debug keeps the trailing `.0` on integral floats.
                write!(f, "[{:?}, {:?}]", l, u)?;
            }
        }
        write!(f, "]")
    }
}
