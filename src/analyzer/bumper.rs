use log::debug;
use semver::Version;

use crate::domain::ReleaseType;
use crate::error::Result;

/// Applies a release decision to a version.
///
/// `no_release_bump` is the increment used when the commit range carries no
/// signal at all; `None` leaves the version untouched.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct VersionBumper {
    no_release_bump: Option<ReleaseType>,
}

impl VersionBumper {
    pub fn new(no_release_bump: Option<ReleaseType>) -> Self {
        VersionBumper { no_release_bump }
    }

    pub fn no_release_bump(&self) -> Option<ReleaseType> {
        self.no_release_bump
    }

    /// Next version for `version` given the aggregated `release_type`
    ///
    /// Fails with `VersionOverflow` when the bumped component is already `u64::MAX`.
    pub fn bump(&self, version: &Version, release_type: Option<ReleaseType>) -> Result<Version> {
        match release_type.or(self.no_release_bump) {
            Some(release_type) => {
                let next = release_type.apply(version)?;
                debug!("{} bump: {} -> {}", release_type, version, next);
                Ok(next)
            }
            None => {
                debug!("no release, keeping {}", version);
                Ok(version.clone())
            }
        }
    }
}
