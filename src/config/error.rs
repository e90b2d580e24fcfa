//! Configuration loading errors.

use thiserror::Error;

/// Errors that can occur while loading persona configuration.
///
/// Only loading is fallible.  Once a table is built, every lookup succeeds.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// YAML (or JSON) parsing failed.
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// File I/O error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The document is readable but its root has the wrong shape.
    #[error("Invalid configuration document: {0}")]
    InvalidDocument(String),

    /// One persona entry could not be applied.  The loader skips these.
    #[error("Malformed persona entry '{persona}': {reason}")]
    MalformedPersona { persona: String, reason: String },
}
