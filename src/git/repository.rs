use std::path::Path;

use git2::Repository as Git2Repo;
use log::{debug, warn};

use crate::domain::Tag;
use crate::error::{Result, SemverBumpError};

/// Wrapper around git2::Repository with our trait interface
pub struct Git2Repository {
    repo: Git2Repo,
}

impl Git2Repository {
    /// Open the git repository at exactly `path`
    ///
    /// Parent directories are not searched.
    ///
    /// # Returns
    /// * `Ok(Git2Repository)` - Repository opened
    /// * `Err(RepositoryUnavailable)` - If the path does not exist or is not a repository
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(SemverBumpError::unavailable(path, "no such path"));
        }

        let repo = Git2Repo::open(path).map_err(|e| {
            SemverBumpError::unavailable(
                path,
                format!("invalid git repository: {}", e.message()),
            )
        })?;
        debug!("opened repository at {}", path.display());

        Ok(Git2Repository { repo })
    }

    /// Create from existing git2::Repository
    pub fn from_git2(repo: Git2Repo) -> Self {
        Git2Repository { repo }
    }
}

/// Tag name as text, or `None` with a warning when it is not valid UTF-8
fn tag_name(bytes: &[u8]) -> Option<&str> {
    match std::str::from_utf8(bytes) {
        Ok(name) => Some(name),
        Err(_) => {
            warn!(
                "skipping tag '{}': name is not valid UTF-8",
                String::from_utf8_lossy(bytes)
            );
            None
        }
    }
}

impl super::Repository for Git2Repository {
    fn list_commit_messages(&self, since_tag: Option<&str>) -> Result<Vec<String>> {
        if self.repo.is_empty()? {
            debug!("repository has no commits");
            return Ok(Vec::new());
        }

        let mut revwalk = self.repo.revwalk()?;
        revwalk.push_head()?;

        if let Some(tag_name) = since_tag {
            let tag_commit = self
                .repo
                .find_reference(&format!("refs/tags/{}", tag_name))?
                .peel_to_commit()?;
            revwalk.hide(tag_commit.id())?;
        }

        let mut messages = Vec::new();
        for oid in revwalk {
            let commit = self.repo.find_commit(oid?)?;
            let message = String::from_utf8_lossy(commit.message_bytes());
            messages.push(message.trim().to_string());
        }

        debug!(
            "{} commits since {}",
            messages.len(),
            since_tag.unwrap_or("the beginning of history")
        );
        Ok(messages)
    }

    fn list_tags(&self) -> Result<Vec<Tag>> {
        let names = self.repo.tag_names(None)?;
        let mut tags = Vec::new();

        for name in names.iter_bytes().filter_map(tag_name) {
            let reference = self.repo.find_reference(&format!("refs/tags/{}", name))?;

            match reference.peel_to_commit() {
                Ok(commit) => tags.push(Tag::new(name, commit.time().seconds())),
                Err(e) => warn!("skipping tag '{}': {}", name, e.message()),
            }
        }

        Ok(tags)
    }
}
