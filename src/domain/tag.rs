use semver::Version;

use crate::error::{Result, SemverBumpError};

/// A git tag and the committer timestamp of the commit it points at
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tag {
    /// Raw tag name as stored in the repository (e.g. "v1.2.3", "release/v1.2.3")
    pub name: String,
    /// Commit time in seconds since the Unix epoch
    pub committed_at: i64,
}

impl Tag {
    /// Create a new tag
    pub fn new(name: impl Into<String>, committed_at: i64) -> Self {
        Tag {
            name: name.into(),
            committed_at,
        }
    }

    /// Version text of the tag: last path segment without a leading `v`.
    ///
    /// `refs/tags/release/v1.2.3` -> `1.2.3`
    pub fn version_part(&self) -> &str {
        let segment = self.name.rsplit('/').next().unwrap_or(&self.name);
        segment.strip_prefix('v').unwrap_or(segment)
    }

    /// Parse the tag name as a semantic version
    pub fn version(&self) -> Result<Version> {
        Version::parse(self.version_part())
            .map_err(|e| SemverBumpError::tag_parse(self.name.clone(), e))
    }
}
