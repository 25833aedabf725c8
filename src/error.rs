//! Error types for the railfence library.

use thiserror::Error;

/// Errors produced by the railfence library.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RailFenceError {
    /// Rail count is zero or negative.
    #[error("Rail count must be at least 1, got {0}")]
    InvalidRailCount(i64),
    /// Rails x length exceeds the matrix cell limit.
    #[error("Fence matrix of {rails} rails x {length} columns exceeds the limit of {limit} cells")]
    MatrixTooLarge {
        rails: usize,
        length: usize,
        limit: usize,
    },
}
