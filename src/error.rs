//! Error type shared by the abstraction entry points.

use thiserror::Error;

/// Errors produced while abstracting a network.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AbstractionError {
    /// Non-binary PCMs form a continuum (convex combinations over each
    /// partition) and cannot be enumerated. Raised whenever binary-only
    /// generation is disabled, which is the case for every non-convex domain.
    #[error("non-binary partition combination matrices are not enumerable")]
    NonComputableEnumeration,

    /// Reported by [`Partitioning::validate`][crate::types::Partitioning::validate] only.
    #[error("malformed partitioning: {reason}")]
    MalformedPartitioning { reason: String },
}

pub type Result<T, E = AbstractionError> = std::result::Result<T, E>;
