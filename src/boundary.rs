use std::fmt;

/// Conditions near the edges of the history that still yield a version.
/// These are non-fatal and reported to the user.
#[derive(Debug, Clone, PartialEq)]
pub enum BoundaryWarning {
    /// Repository has no tags, the base version is 0.0.0
    NoTags,
    /// No new commits since the latest tag
    NoNewCommits { latest_tag: String },
    /// Commits exist but none carries a release signal
    NoReleaseSignal { commits: usize },
}

impl fmt::Display for BoundaryWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoundaryWarning::NoTags => {
                write!(f, "No tags found, starting from 0.0.0")
            }
            BoundaryWarning::NoNewCommits { latest_tag } => {
                write!(f, "No new commits since tag '{}'", latest_tag)
            }
            BoundaryWarning::NoReleaseSignal { commits } => {
                write!(
                    f,
                    "None of the {} commits carries a release signal",
                    commits
                )
            }
        }
    }
}
