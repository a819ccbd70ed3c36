//! Pure formatting functions for UI output.
//!
//! Functions return the text to print so they can be tested without a
//! terminal; colors are dropped when stderr is not a tty.

use console::style;

use crate::boundary::BoundaryWarning;
use crate::cli::BumpOutcome;

/// Format an error message in red.
pub fn format_error(message: &str) -> String {
    format!("{} {}", style("ERROR:").for_stderr().red(), message)
}

/// Format a boundary warning with a yellow warning icon.
pub fn format_boundary_warning(warning: &BoundaryWarning) -> String {
    format!("{} {}", style("⚠").for_stderr().yellow(), warning)
}

/// Format the breakdown behind a computed version.
///
/// Lists the base version and tag, the signal counts and the decision.
pub fn format_explanation(outcome: &BumpOutcome) -> String {
    let base_tag = outcome.base.tag.as_deref().unwrap_or("(none)");
    let decision = outcome
        .release_type
        .map_or_else(|| "no release".to_string(), |t| t.to_string());
    let summary = &outcome.summary;

    let mut lines = vec![
        style("Version analysis").for_stderr().bold().to_string(),
        format!("  Base tag:     {}", base_tag),
        format!("  Base version: {}", outcome.base.version),
        format!(
            "  Commits:      {} (major {}, minor {}, patch {}, ignored {})",
            summary.total(),
            summary.major,
            summary.minor,
            summary.patch,
            summary.ignored
        ),
        format!("  Release type: {}", decision),
        format!(
            "  Next version: {}",
            style(&outcome.next_version).for_stderr().green()
        ),
    ];

    lines.extend(outcome.warnings.iter().map(format_boundary_warning));
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzer::{BaseVersion, ReleaseSummary};
    use crate::domain::ReleaseType;
    use semver::Version;

    fn outcome() -> BumpOutcome {
        BumpOutcome {
            base: BaseVersion {
                version: Version::new(0, 3, 7),
                tag: Some("v0.3.7".to_string()),
            },
            summary: ReleaseSummary {
                major: 0,
                minor: 1,
                patch: 1,
                ignored: 1,
            },
            release_type: Some(ReleaseType::Minor),
            next_version: Version::new(0, 4, 0),
            warnings: Vec::new(),
        }
    }

    #[test]
    fn test_format_error() {
        let text = console::strip_ansi_codes(&format_error("boom")).to_string();
        assert_eq!(text, "ERROR: boom");
    }

    #[test]
    fn test_format_explanation() {
        let text = console::strip_ansi_codes(&format_explanation(&outcome())).to_string();
        assert!(text.contains("Base tag:     v0.3.7"));
        assert!(text.contains("Commits:      3 (major 0, minor 1, patch 1, ignored 1)"));
        assert!(text.contains("Release type: minor"));
        assert!(text.contains("Next version: 0.4.0"));
    }

    #[test]
    fn test_format_explanation_without_tag_or_release() {
        let mut outcome = outcome();
        outcome.base = BaseVersion::initial();
        outcome.release_type = None;
        outcome.warnings = vec![BoundaryWarning::NoTags];

        let text = console::strip_ansi_codes(&format_explanation(&outcome)).to_string();
        assert!(text.contains("Base tag:     (none)"));
        assert!(text.contains("Release type: no release"));
        assert!(text.contains("No tags found"));
    }
}
