//! Domain logic - pure release rules independent of git operations

pub mod commit;
pub mod tag;
pub mod version;

pub use commit::{classify, CommitHeader};
pub use tag::Tag;
pub use version::{ReleaseSignal, ReleaseType};
