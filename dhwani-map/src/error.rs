//! Error types for DhwaniMap

use thiserror::Error;

/// Result type alias
pub type Result<T> = std::result::Result<T, MapError>;

/// DhwaniMap error type
#[derive(Debug, Error)]
pub enum MapError {
    /// Configuration rejected at startup (grid dimensions, cell size, weights)
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Two grids that must share dimensions do not
    #[error("Dimension mismatch: expected {expected_width}x{expected_height}, got {width}x{height}")]
    DimensionMismatch {
        /// Expected width in cells
        expected_width: usize,
        /// Expected height in cells
        expected_height: usize,
        /// Actual width in cells
        width: usize,
        /// Actual height in cells
        height: usize,
    },

    /// Reading or pose that would put NaN/inf through the projection
    #[error("Degenerate input: {0}")]
    DegenerateInput(String),

    /// Malformed map dump
    #[error("Parse error at line {line}: {message}")]
    Parse {
        /// 1-based line number
        line: usize,
        /// What was wrong
        message: String,
    },

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
