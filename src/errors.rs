//! Crate-wide error type.

use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, PpmFilterError>;

#[derive(Error, Debug)]
pub enum PpmFilterError {
    #[error("usage error: {0}")]
    UsageError(String),

    #[error("IO error on {}: {source}", .path.display())]
    IOError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("format error: {0}")]
    FormatError(String),

    #[error("coordinate ({x},{y}) out of bounds for {width}x{height} image")]
    OutOfBounds { x: usize, y: usize, width: usize, height: usize },

    #[error("invalid image dimension {width}x{height}")]
    InvalidDimension { width: usize, height: usize },
}

pub fn usage_error(msg: impl ToString) -> PpmFilterError {
    PpmFilterError::UsageError(msg.to_string())
}

pub fn format_error(msg: impl ToString) -> PpmFilterError {
    PpmFilterError::FormatError(msg.to_string())
}

pub fn io_error(path: impl Into<PathBuf>, source: std::io::Error) -> PpmFilterError {
    PpmFilterError::IOError { path: path.into(), source }
}
