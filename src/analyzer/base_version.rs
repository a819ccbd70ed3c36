use std::cmp::Ordering;

use log::debug;
use semver::Version;

use crate::domain::Tag;
use crate::error::Result;

/// Version a release is computed from, and the tag it came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BaseVersion {
    pub version: Version,
    /// Raw name of the selected tag, `None` for an untagged repository
    pub tag: Option<String>,
}

impl BaseVersion {
    /// `0.0.0` with no tag
    pub fn initial() -> Self {
        BaseVersion {
            version: Version::new(0, 0, 0),
            tag: None,
        }
    }
}

/// Chronological order of tags: commit time, then semantic version, then name.
///
/// Tags on the same commit compare by their parsed version (`v10.0.0` after
/// `v2.0.0`), an unparsable name ranking below any version. Remaining ties
/// compare names so the latest tag never depends on listing order.
fn chronological(a: &Tag, b: &Tag) -> Ordering {
    a.committed_at
        .cmp(&b.committed_at)
        .then_with(|| a.version().ok().cmp(&b.version().ok()))
        .then_with(|| a.name.cmp(&b.name))
}

/// Most recent tag by commit time, never by name
pub fn latest_tag(tags: &[Tag]) -> Option<&Tag> {
    tags.iter().max_by(|a, b| chronological(a, b))
}

/// Resolve the base version from the repository's tags.
///
/// # Returns
/// * `Ok(BaseVersion)` - `0.0.0` without a tag when `tags` is empty
/// * `Err(TagParse)` - If the latest tag is not a semantic version
pub fn resolve_base(tags: &[Tag]) -> Result<BaseVersion> {
    let Some(tag) = latest_tag(tags) else {
        debug!("no tags found, starting from 0.0.0");
        return Ok(BaseVersion::initial());
    };

    let version = tag.version()?;
    debug!(
        "latest tag '{}' (committed at {}) -> {}",
        tag.name, tag.committed_at, version
    );

    Ok(BaseVersion {
        version,
        tag: Some(tag.name.clone()),
    })
}
