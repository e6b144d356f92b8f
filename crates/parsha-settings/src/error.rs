//! Settings error types.

use std::path::PathBuf;
use thiserror::Error;

/// Settings storage error.
#[derive(Debug, Error)]
pub enum SettingsError {
    /// File I/O error.
    #[error("Failed to {operation} settings file: {path}")]
    Io {
        operation: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Serialization error.
    #[error("Failed to serialize settings")]
    Serialization {
        #[source]
        source: serde_json::Error,
    },

    /// Stored value is not a valid settings document.
    #[error("Failed to deserialize settings stored under {key:?}")]
    Deserialization {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    /// Atomic write failed (temp file couldn't be renamed).
    #[error("Failed to complete settings save")]
    AtomicWriteFailed {
        temp_path: PathBuf,
        target_path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A thread panicked while holding the settings lock.
    #[error("Settings lock poisoned")]
    LockPoisoned,
}

impl SettingsError {
    /// Get a user-friendly message for this error.
    pub fn user_message(&self) -> String {
        match self {
            Self::Io {
                operation, path, ..
            } => format!(
                "The settings could not be accessed: failed to {} {}",
                operation,
                path.display()
            ),
            Self::Serialization { .. } => {
                "An error occurred while saving the settings.".to_string()
            }
            Self::Deserialization { .. } => {
                "The saved settings could not be read and were reset to defaults.".to_string()
            }
            Self::AtomicWriteFailed { target_path, .. } => format!(
                "Could not save the settings to {}. Please check disk space and permissions.",
                target_path.display()
            ),
            Self::LockPoisoned => {
                "The settings are unavailable after an internal failure.".to_string()
            }
        }
    }
}

/// Result type alias for settings operations.
pub type Result<T> = std::result::Result<T, SettingsError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn io_message_names_operation_and_path() {
        let error = SettingsError::Io {
            operation: "create directory",
            path: PathBuf::from("/tmp/settings"),
            source: std::io::Error::other("Not a directory"),
        };
        assert_eq!(
            error.user_message(),
            "The settings could not be accessed: failed to create directory /tmp/settings"
        );
        assert_eq!(
            error.source().map(ToString::to_string),
            Some("Not a directory".to_string())
        );
    }
}
