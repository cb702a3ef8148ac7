//! Abstract weight-set domains.

use std::fmt::Debug;

use ndarray::Array2;

/// Abstract domain over sets of weight matrices.
///
/// A domain reduces a finite set of equally-shaped matrices to a single
/// abstract element that over-approximates every one of them.
///
/// # Convexity
///
/// A domain is *convex* when the abstraction of the convex hull of a set of
/// matrices equals the abstraction of its vertices. Only convex domains can be
/// used with [`alpha_hat`][crate::abstraction::alpha_hat]: for them, merging
/// with binary PCMs (the vertices of the merge polytope) is exact.
pub trait AbstractDomain {
    /// The type representing abstract weight elements.
    type Element: Clone + Debug + PartialEq;

    /// Whether the domain is convex.
    fn is_convex(&self) -> bool;

    /// Abstraction (`α`) of a set of matrices.
    ///
    /// The slice is treated as a set: the result must not depend on the order
    /// of `matrices`. Behavior on an empty slice is domain-specific.
    fn alpha(&self, matrices: &[Array2<f64>]) -> Self::Element;
}
