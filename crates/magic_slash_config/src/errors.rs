//! Configuration store error types.
//!
//! Domain-specific errors for reading, mutating and persisting the
//! Magic Slash configuration file and the files it points at.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors raised by the configuration store and its validation helpers.
///
/// A missing or malformed configuration file is deliberately absent from this
/// list: it reads as the empty default configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Caller input failed validation. The message is safe to echo to clients.
    #[error("{0}")]
    Validation(String),

    #[error("Repository '{name}' not found")]
    NotFound { name: String },

    #[error("Repository '{name}' already exists")]
    AlreadyExists { name: String },

    #[error("No PR template found")]
    TemplateNotFound,

    #[error("Cannot determine the home directory")]
    HomeDirectoryUnavailable,

    /// The file parses but its repository table is not an object of objects.
    /// It is left as found rather than overwritten.
    #[error("Repository table in {} cannot be read", path.display())]
    UnreadableRepositories { path: PathBuf },

    /// Filesystem failure while writing configuration or template files.
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl ConfigError {
    /// Create a validation error with the given message.
    pub fn validation(message: impl Into<String>) -> Self {
        ConfigError::Validation(message.into())
    }

    pub fn not_found(name: impl Into<String>) -> Self {
        ConfigError::NotFound { name: name.into() }
    }

    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        ConfigError::Io {
            path: path.into(),
            source,
        }
    }
}

/// Result type alias for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;

#[cfg(test)]
#[path = "errors_tests.rs"]
mod tests;
