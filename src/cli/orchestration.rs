//! Main workflow orchestration logic
//!
//! Keeps the version computation apart from CLI argument parsing so it can
//! be driven by any [Repository] implementation.

use log::{info, warn};
use semver::Version;

use crate::analyzer::{resolve_base, BaseVersion, ReleaseAnalyzer, ReleaseSummary, VersionBumper};
use crate::boundary::BoundaryWarning;
use crate::domain::ReleaseType;
use crate::error::Result;
use crate::git::Repository;

/// Result of a successful bump workflow
#[derive(Debug, Clone, PartialEq)]
pub struct BumpOutcome {
    /// Version and tag the computation started from
    pub base: BaseVersion,

    /// Signal counts over the commits since the base tag
    pub summary: ReleaseSummary,

    /// Aggregated decision, `None` when no commit carries a signal
    pub release_type: Option<ReleaseType>,

    /// The computed next version
    pub next_version: Version,

    /// Non-fatal conditions met on the way
    pub warnings: Vec<BoundaryWarning>,
}

/// Compute the next version of `repo`
///
/// 1. Resolve the base version from the chronologically latest tag
/// 2. Collect commit messages since that tag
/// 3. Aggregate their release signals
/// 4. Bump the base version, falling back to the bumper's default
///
/// Nothing is written to the repository.
pub fn run_bump_workflow<R: Repository>(repo: &R, bumper: &VersionBumper) -> Result<BumpOutcome> {
    let mut warnings = Vec::new();

    let tags = repo.list_tags()?;
    let base = resolve_base(&tags)?;
    if base.tag.is_none() {
        warnings.push(BoundaryWarning::NoTags);
    }

    let messages = repo.list_commit_messages(base.tag.as_deref())?;
    let summary = ReleaseAnalyzer::new().summarize(&messages);
    let release_type = summary.release_type();

    match (&base.tag, messages.len()) {
        (Some(tag), 0) => warnings.push(BoundaryWarning::NoNewCommits {
            latest_tag: tag.clone(),
        }),
        (_, commits) if commits > 0 && release_type.is_none() => {
            warnings.push(BoundaryWarning::NoReleaseSignal { commits })
        }
        _ => {}
    }

    for warning in &warnings {
        warn!("{}", warning);
    }

    let next_version = bumper.bump(&base.version, release_type)?;
    info!(
        "{} -> {} ({})",
        base.version,
        next_version,
        release_type.map_or("no release", ReleaseType::as_str)
    );

    Ok(BumpOutcome {
        base,
        summary,
        release_type,
        next_version,
        warnings,
    })
}
