use crate::domain::Tag;
use crate::error::{Result, SemverBumpError};
use crate::git::Repository;

/// Mock repository for testing without actual git operations
///
/// History is linear: every tag marks the commits added before it.
pub struct MockRepository {
    /// Commit messages, oldest first
    commits: Vec<String>,
    /// Tags with the number of commits reachable from them
    tags: Vec<(Tag, usize)>,
}

impl MockRepository {
    /// Create a new empty mock repository
    pub fn new() -> Self {
        MockRepository {
            commits: Vec::new(),
            tags: Vec::new(),
        }
    }

    /// Add a commit on top of the history
    pub fn add_commit(&mut self, message: impl Into<String>) {
        self.commits.push(message.into());
    }

    /// Tag the current head with the given commit timestamp
    pub fn add_tag(&mut self, name: impl Into<String>, committed_at: i64) {
        self.tags
            .push((Tag::new(name, committed_at), self.commits.len()));
    }
}

impl Default for MockRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl Repository for MockRepository {
    fn list_commit_messages(&self, since_tag: Option<&str>) -> Result<Vec<String>> {
        let start = match since_tag {
            Some(name) => self
                .tags
                .iter()
                .find(|(tag, _)| tag.name == name)
                .map(|(_, reachable)| *reachable)
                .ok_or_else(|| {
                    SemverBumpError::Git(git2::Error::from_str(&format!(
                        "reference 'refs/tags/{}' not found",
                        name
                    )))
                })?,
            None => 0,
        };

        Ok(self.commits[start..]
            .iter()
            .rev()
            .map(|message| message.trim().to_string())
            .collect())
    }

    fn list_tags(&self) -> Result<Vec<Tag>> {
        Ok(self.tags.iter().map(|(tag, _)| tag.clone()).collect())
    }
}
