//! Error types for curve traversal.

use thiserror::Error;

/// Errors that can occur when sampling or traversing a curve.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TraversalError {
    /// Sampling needs at least the start and end points.
    #[error("invalid sample count: {length} (must be at least 2)")]
    InvalidLength {
        /// The requested number of samples.
        length: usize,
    },

    /// The path was traversed before any samples were created.
    #[error("no sampled path: call create_point_data first")]
    NotSampled,

    /// An external value does not name a repeat mode.
    #[error("invalid repeat mode: {0}")]
    InvalidRepeatMode(String),
}
