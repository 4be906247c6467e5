//! Simulation error types.

use thiserror::Error;

use crate::pos::Dimensions;

/// Simulation error type.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LifeError {
    /// A grid buffer could not be allocated.
    #[error("out of memory allocating a grid of {cells} cells")]
    OutOfMemory {
        /// Number of cells that were requested.
        cells: usize,
    },

    /// Two buffers that must share dimensions do not.
    #[error("dimension mismatch: expected {expected}, found {found}")]
    DimensionMismatch {
        expected: Dimensions,
        found: Dimensions,
    },

    /// Width or height is zero.
    #[error("grid dimensions must be non-zero")]
    EmptyDimensions,
}

/// Result type for simulation operations.
pub type LifeResult<T> = Result<T, LifeError>;
