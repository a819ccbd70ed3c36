use std::fmt;
use std::str::FromStr;

use semver::Version;

use crate::error::{Result, SemverBumpError};

/// Release signal carried by a single commit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReleaseSignal {
    Major,
    Minor,
    Patch,
    None,
}

impl ReleaseSignal {
    /// The release type this signal asks for, if any
    pub fn release_type(self) -> Option<ReleaseType> {
        match self {
            ReleaseSignal::Major => Some(ReleaseType::Major),
            ReleaseSignal::Minor => Some(ReleaseType::Minor),
            ReleaseSignal::Patch => Some(ReleaseType::Patch),
            ReleaseSignal::None => None,
        }
    }
}

/// Aggregated release decision for a set of commits
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ReleaseType {
    Patch,
    Minor,
    Major,
}

impl ReleaseType {
    pub fn as_str(self) -> &'static str {
        match self {
            ReleaseType::Major => "major",
            ReleaseType::Minor => "minor",
            ReleaseType::Patch => "patch",
        }
    }

    /// Apply this release type to `version`.
    ///
    /// Increments the matching component, resets the lower ones and drops
    /// any prerelease or build metadata:
    /// - **Major**: `(M+1, 0, 0)`
    /// - **Minor**: `(M, m+1, 0)`
    /// - **Patch**: `(M, m, p+1)`
    ///
    /// # Returns
    /// * `Err(VersionOverflow)` - If the incremented component exceeds `u64::MAX`
    pub fn apply(self, version: &Version) -> Result<Version> {
        let overflow = || SemverBumpError::overflow(version, self.as_str());

        let next = match self {
            ReleaseType::Major => {
                Version::new(version.major.checked_add(1).ok_or_else(overflow)?, 0, 0)
            }
            ReleaseType::Minor => Version::new(
                version.major,
                version.minor.checked_add(1).ok_or_else(overflow)?,
                0,
            ),
            ReleaseType::Patch => Version::new(
                version.major,
                version.minor,
                version.patch.checked_add(1).ok_or_else(overflow)?,
            ),
        };
        Ok(next)
    }
}

impl fmt::Display for ReleaseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ReleaseType {
    type Err = SemverBumpError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "major" => Ok(ReleaseType::Major),
            "minor" => Ok(ReleaseType::Minor),
            "patch" => Ok(ReleaseType::Patch),
            other => Err(SemverBumpError::config(format!(
                "Unknown release type '{}' - expected major, minor or patch",
                other
            ))),
        }
    }
}
