//! Structured error types for lightbnb-core.
//!
//! Library consumers get `CoreError`; the `lightbnb` binary wraps it in
//! `anyhow` with extra context.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for lightbnb-core operations
#[derive(Error, Debug)]
pub enum CoreError {
    /// I/O operation failed
    #[error("I/O error on {path:?}: {source}")]
    Io { path: PathBuf, source: io::Error },

    /// Fixture JSON could not be parsed
    #[error("JSON error in {context}: {source}")]
    Json {
        context: String,
        source: serde_json::Error,
    },

    /// Config file is not valid TOML
    #[error("Invalid config file {path:?}: {source}")]
    Toml {
        path: PathBuf,
        source: toml::de::Error,
    },

    /// Configuration error
    #[error("Configuration error: {reason}")]
    Config { reason: String },
}

/// Result type alias for lightbnb-core operations
pub type Result<T> = std::result::Result<T, CoreError>;

impl CoreError {
    /// Create an I/O error tagged with the path being read
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Create a JSON error with context
    pub fn json(context: impl Into<String>, source: serde_json::Error) -> Self {
        Self::Json {
            context: context.into(),
            source,
        }
    }

    /// Create a TOML error for a config file
    pub fn toml(path: impl Into<PathBuf>, source: toml::de::Error) -> Self {
        Self::Toml {
            path: path.into(),
            source,
        }
    }

    /// Create a config error
    pub fn config(reason: impl Into<String>) -> Self {
        Self::Config {
            reason: reason.into(),
        }
    }
}
