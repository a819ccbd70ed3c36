//! Analysis engine for turning tags and commits into the next version

pub mod base_version;
pub mod bumper;
pub mod release_analyzer;

pub use base_version::{latest_tag, resolve_base, BaseVersion};
pub use bumper::VersionBumper;
pub use release_analyzer::{ReleaseAnalyzer, ReleaseSummary};
