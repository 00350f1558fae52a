use thiserror::Error;

use crate::point::Axis;

/// Errors returned by the clustering engine.
///
/// Empty clusters met during iteration are not errors: the engine stops in
/// [`Status::Stalled`](crate::Status::Stalled) and still returns an assignment.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    /// Input slice is empty.
    #[error("empty input")]
    EmptyInput,

    /// Invalid parameter value.
    #[error("invalid parameter {name}: {message}")]
    InvalidParameter {
        /// Parameter name.
        name: &'static str,
        /// Human-readable explanation.
        message: &'static str,
    },

    /// Every point shares the same coordinate along `axis`, so the data cannot be scaled.
    #[error("degenerate input: zero variance along the {axis} axis")]
    DegenerateInput {
        /// The axis with zero variance.
        axis: Axis,
    },

    /// The mean or variance along `axis` does not fit in an `f64`.
    #[error("numeric overflow: {axis} axis statistics are not finite")]
    NumericOverflow {
        /// The axis whose statistics overflowed.
        axis: Axis,
    },

    /// A point has a NaN or infinite coordinate.
    #[error("non-finite coordinate in point {index}")]
    NonFiniteInput {
        /// Position of the offending point.
        index: usize,
    },

    /// An assignment does not line up with the points it labels.
    #[error("length mismatch: expected {expected}, found {found}")]
    LengthMismatch {
        /// Number of points.
        expected: usize,
        /// Number of assignment entries.
        found: usize,
    },

    /// An assignment entry is outside `0..k`.
    #[error("invalid cluster id {cluster} at position {index} (k = {k})")]
    InvalidClusterId {
        /// Position in the assignment.
        index: usize,
        /// The offending id.
        cluster: usize,
        /// Number of clusters.
        k: usize,
    },
}

/// Result type used by this crate.
pub type Result<T> = std::result::Result<T, Error>;
