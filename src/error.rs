//! Error types for the patio engine

use thiserror::Error;

/// Main error type for engine operations
///
/// The layout pipeline itself is total over its input domain and never
/// fails; errors only arise at the I/O boundary (fixture loading, the
/// HTTP host, part-kind filters parsed from strings).
#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Unknown part kind '{0}'")]
    UnknownPartKind(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

/// Result type for engine operations
pub type EngineResult<T> = Result<T, EngineError>;
