use thiserror::Error;

/// Errors reported by [`crate::Grid`] and its configuration.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum GridError {
    /// Width or height is zero, or the cell count does not fit in memory.
    #[error("invalid grid dimensions {width}x{height}")]
    InvalidDimension { width: usize, height: usize },
    #[error("unknown border policy {0:?} (expected \"wrap\" or \"nowrap\")")]
    UnknownBorderPolicy(String),
    #[error("fill rate {0} is outside of [0, 1]")]
    InvalidFillRate(f64),
}
