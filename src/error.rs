//! Error types for grid construction.

use thiserror::Error;

/// Errors raised by fallible grid constructors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    #[error("walkable buffer holds {got} cells, grid is {width}x{height} = {expected}")]
    WalkableSizeMismatch {
        width: usize,
        height: usize,
        expected: usize,
        got: usize,
    },

    #[error("penalty buffer holds {got} cells, grid is {width}x{height} = {expected}")]
    PenaltySizeMismatch {
        width: usize,
        height: usize,
        expected: usize,
        got: usize,
    },

    #[error("grid dimensions {width}x{height} must be non-zero")]
    EmptyGrid { width: usize, height: usize },
}
