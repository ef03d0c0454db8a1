//! Error types for cutlog

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using CutlogError
pub type Result<T> = std::result::Result<T, CutlogError>;

/// Main error type for cutlog operations
#[derive(Debug, Error)]
pub enum CutlogError {
    /// Configuration-related errors
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Git-related errors
    #[error(transparent)]
    Git(#[from] GitError),

    /// Changelog-related errors
    #[error(transparent)]
    Changelog(#[from] ChangelogError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic errors
    #[error("{0}")]
    Other(String),
}

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Configuration file not found
    #[error("Configuration file not found at {0}")]
    NotFound(PathBuf),

    /// Invalid configuration value
    #[error("Invalid configuration: {field} - {message}")]
    InvalidValue { field: String, message: String },

    /// YAML parsing error
    #[error("YAML parsing error: {0}")]
    YamlError(#[from] serde_yaml::Error),

    /// TOML parsing error
    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    /// IO error
    #[error("IO error reading config: {0}")]
    Io(#[from] std::io::Error),
}

/// Git-related errors
///
/// The history reader absorbs these into empty output; they only surface in
/// debug logs.
#[derive(Debug, Error)]
pub enum GitError {
    /// The git executable could not be spawned
    #[error("Failed to run git: {0}")]
    SpawnFailed(#[source] std::io::Error),

    /// git exited with a non-zero status
    #[error("git {args} exited with {status}: {stderr}")]
    CommandFailed {
        args: String,
        status: String,
        stderr: String,
    },
}

/// Changelog-related errors
#[derive(Debug, Error)]
pub enum ChangelogError {
    /// Changelog file not found
    #[error("{} not found", .0.display())]
    FileNotFound(PathBuf),

    /// Release date could not be parsed
    #[error("Invalid release date '{0}': expected YYYY-MM-DD")]
    InvalidDate(String),

    /// Failed to write changelog
    #[error("Failed to write {}: {source}", path.display())]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl CutlogError {
    /// Create a new "other" error with a message
    pub fn other<S: Into<String>>(msg: S) -> Self {
        Self::Other(msg.into())
    }

    /// Whether this error means the target changelog does not exist
    pub fn is_missing_changelog(&self) -> bool {
        matches!(self, Self::Changelog(ChangelogError::FileNotFound(_)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_changelog_message() {
        let err: CutlogError = ChangelogError::FileNotFound(PathBuf::from("CHANGELOG.md")).into();
        assert_eq!(err.to_string(), "CHANGELOG.md not found");
        assert!(err.is_missing_changelog());
    }

    #[test]
    fn test_other_is_not_missing_changelog() {
        let err = CutlogError::other("boom");
        assert!(!err.is_missing_changelog());
    }
}
