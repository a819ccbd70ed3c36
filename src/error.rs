use std::path::PathBuf;

use thiserror::Error;

/// Unified error type for semver-bump operations
#[derive(Error, Debug)]
pub enum SemverBumpError {
    #[error("Repository unavailable at '{}': {reason}", .path.display())]
    RepositoryUnavailable { path: PathBuf, reason: String },

    #[error("Cannot parse tag '{tag}' as a semantic version: {source}")]
    TagParse {
        tag: String,
        #[source]
        source: semver::Error,
    },

    #[error("Cannot apply a {release_type} bump to {version}: component would overflow")]
    VersionOverflow {
        version: semver::Version,
        release_type: &'static str,
    },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Git operation failed: {0}")]
    Git(#[from] git2::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in semver-bump
pub type Result<T> = std::result::Result<T, SemverBumpError>;

impl SemverBumpError {
    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        SemverBumpError::Config(msg.into())
    }

    /// Create a repository error for the given path
    pub fn unavailable(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        SemverBumpError::RepositoryUnavailable {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Create an overflow error for a bump that does not fit in the version
    pub fn overflow(version: &semver::Version, release_type: &'static str) -> Self {
        SemverBumpError::VersionOverflow {
            version: version.clone(),
            release_type,
        }
    }

    /// Create a tag parse error
    pub fn tag_parse(tag: impl Into<String>, source: semver::Error) -> Self {
        SemverBumpError::TagParse {
            tag: tag.into(),
            source,
        }
    }
}
