use thiserror::Error;

/// Top-level error type for the shelfscan pipeline.
#[derive(Debug, Error)]
pub enum ScanError {
    /// The input image is missing, empty, or not usable. Recoverable:
    /// no record is produced and no artifact is written.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("vision provider error ({provider}): {message}")]
    Provider { provider: String, message: String },

    #[error("vision runtime is not initialized")]
    RuntimeUninitialized,

    #[error("vision runtime is already initialized")]
    RuntimeAlreadyInitialized,

    #[error("configuration error: {0}")]
    ConfigError(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
