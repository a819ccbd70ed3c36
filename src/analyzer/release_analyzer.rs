use log::debug;

use crate::domain::{classify, ReleaseSignal, ReleaseType};

/// Per-bucket counts of the signals found in a commit range
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReleaseSummary {
    pub major: usize,
    pub minor: usize,
    pub patch: usize,
    /// Commits that carried no signal
    pub ignored: usize,
}

impl ReleaseSummary {
    /// Record one classified commit
    pub fn record(&mut self, signal: ReleaseSignal) {
        match signal {
            ReleaseSignal::Major => self.major += 1,
            ReleaseSignal::Minor => self.minor += 1,
            ReleaseSignal::Patch => self.patch += 1,
            ReleaseSignal::None => self.ignored += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.major + self.minor + self.patch + self.ignored
    }

    /// Strongest bucket with at least one commit: major > minor > patch
    pub fn release_type(&self) -> Option<ReleaseType> {
        if self.major > 0 {
            Some(ReleaseType::Major)
        } else if self.minor > 0 {
            Some(ReleaseType::Minor)
        } else if self.patch > 0 {
            Some(ReleaseType::Patch)
        } else {
            None
        }
    }
}

/// Reduces a commit range to one release decision
#[derive(Debug, Clone, Copy, Default)]
pub struct ReleaseAnalyzer;

impl ReleaseAnalyzer {
    pub fn new() -> Self {
        ReleaseAnalyzer
    }

    /// Classify every message and count the signals.
    ///
    /// All messages are scanned; order does not matter.
    pub fn summarize<S: AsRef<str>>(&self, messages: &[S]) -> ReleaseSummary {
        let mut summary = ReleaseSummary::default();

        for message in messages {
            let message = message.as_ref();
            let signal = classify(message);
            debug!(
                "{:?} <- {}",
                signal,
                message.lines().next().unwrap_or_default()
            );
            summary.record(signal);
        }

        summary
    }

    /// Release type of a commit range, `None` when no commit carries a signal
    pub fn aggregate<S: AsRef<str>>(&self, messages: &[S]) -> Option<ReleaseType> {
        self.summarize(messages).release_type()
    }
}
