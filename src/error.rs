//! Error types and Result aliases for blockclock
//!
//! Drawing itself is infallible: terminal writes that fail are dropped.
//! Everything that can fail happens during setup (configuration, thread
//! launch, signal handler installation) and is reported through [`Error`].

use std::path::PathBuf;

/// Result type alias for blockclock operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for blockclock
#[derive(Debug, thiserror::Error)]
pub enum Error {
    // === Configuration errors ===
    /// Failed to load configuration file
    #[error("Failed to load config from '{}': {reason}", .path.display())]
    ConfigLoad { path: PathBuf, reason: String },

    /// Failed to parse configuration
    #[error("Failed to parse {format} config: {reason}")]
    ConfigParse { format: String, reason: String },

    /// Failed to serialize configuration
    #[error("Failed to serialize config as {format}: {reason}")]
    ConfigSerialize { format: String, reason: String },

    /// Configuration validation failed
    #[error("Configuration validation failed for '{field}': {reason}")]
    ConfigValidation { field: String, reason: String },

    /// Color name outside the recognized palette
    #[error("Unknown color: '{name}'")]
    UnknownColor { name: String },

    // === Task errors ===
    /// The OS refused to create a worker thread
    #[error("Failed to spawn thread '{name}': {reason}")]
    ThreadSpawn { name: String, reason: String },

    /// A worker thread panicked before it was joined
    #[error("Task '{name}' panicked")]
    TaskPanicked { name: String },

    /// Installing the interrupt handler failed
    #[error("Failed to install interrupt handler: {reason}")]
    SignalHandler { reason: String },

    // === I/O errors ===
    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::ConfigParse {
            format: "TOML".to_string(),
            reason: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::ConfigParse {
            format: "JSON".to_string(),
            reason: err.to_string(),
        }
    }
}

impl From<ctrlc::Error> for Error {
    fn from(err: ctrlc::Error) -> Self {
        Error::SignalHandler {
            reason: err.to_string(),
        }
    }
}
