//! Error types for lumpline-core.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("parse error at line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error("invalid value: {0}")]
    InvalidValue(String),

    #[error("unknown unit suffix: {0}")]
    UnknownSuffix(String),

    #[error("invalid geometry: {0}")]
    InvalidGeometry(String),

    #[error("discretization error: {0}")]
    Discretization(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
