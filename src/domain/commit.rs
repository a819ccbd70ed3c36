use log::trace;
use regex::Regex;

use super::version::ReleaseSignal;

/// Prefix git gives to commits created with `git commit --fixup`
pub const FIXUP_MARKER: &str = "fixup!";

/// Footer token that marks a breaking change anywhere in the message
pub const BREAKING_CHANGE_TOKEN: &str = "BREAKING CHANGE:";

/// Greedy split: the first group runs up to the last colon of the line.
const HEADER_PATTERN: &str = r"^(.*):(.*)$";

/// Conventional commit header split out of a flattened message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitHeader {
    /// `type(scope)!` part, everything before the split colon
    pub prefix: String,
    /// Everything after the split colon
    pub description: String,
}

impl CommitHeader {
    /// Flatten `message` to one line and split it at its last colon.
    ///
    /// Returns `None` when the message holds no colon at all. A colon in the
    /// description or body moves the split point past the real header.
    pub fn split(message: &str) -> Option<Self> {
        let flattened = message.replace('\n', "");

        Regex::new(HEADER_PATTERN)
            .ok()
            .and_then(|re| {
                re.captures(&flattened).map(|captures| CommitHeader {
                    prefix: captures
                        .get(1)
                        .map(|m| m.as_str().to_string())
                        .unwrap_or_default(),
                    description: captures
                        .get(2)
                        .map(|m| m.as_str().to_string())
                        .unwrap_or_default(),
                })
            })
    }

    pub fn is_breaking(&self) -> bool {
        self.prefix.ends_with('!')
    }
}

/// Classify one raw commit message into the release signal it carries.
///
/// Rules, first match wins:
/// - `fixup!` commits never carry a signal
/// - no colon means not a conventional commit
/// - a `BREAKING CHANGE:` footer or a prefix ending in `!` is **major**
/// - a prefix starting with `feat` is **minor**
/// - a prefix starting with `fix` is **patch**
pub fn classify(message: &str) -> ReleaseSignal {
    if message.starts_with(FIXUP_MARKER) {
        return ReleaseSignal::None;
    }

    let Some(header) = CommitHeader::split(message) else {
        return ReleaseSignal::None;
    };

    let signal = if message.contains(BREAKING_CHANGE_TOKEN) || header.is_breaking() {
        ReleaseSignal::Major
    } else if header.prefix.starts_with("feat") {
        ReleaseSignal::Minor
    } else if header.prefix.starts_with("fix") {
        ReleaseSignal::Patch
    } else {
        ReleaseSignal::None
    };

    trace!("classified prefix '{}' as {:?}", header.prefix, signal);
    signal
}
