//! Application layer errors

use thiserror::Error;

/// General bot errors
#[derive(Error, Debug)]
pub enum BotError {
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("Payload error: {0}")]
    Payload(String),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

/// Storage errors
#[derive(Error, Debug)]
pub enum StorageError {
    /// Missing model file. Kept separate from Io so the runner can report
    /// it with its own message and everything else stays generic.
    #[error("Model file '{0}' not found")]
    NotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Parse error: {0}")]
    Parse(String),
}
