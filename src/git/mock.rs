use crate::domain::{CommitInfo, Tag};
use crate::error::{ReleaseNotesError, Result};
use crate::git::Repository;
use std::collections::HashMap;

/// In-memory repository for testing without actual git operations.
///
/// Commits belong to a single branch and are stored newest first: every
/// call to [MockRepository::add_commit] appends an older commit.
pub struct MockRepository {
    branch: String,
    commits: Vec<CommitInfo>,
    tags: Vec<Tag>,
    remotes: HashMap<String, String>,
}

impl MockRepository {
    /// Create a new empty mock repository whose only branch is `main`
    pub fn new() -> Self {
        MockRepository::with_branch("main")
    }

    pub fn with_branch(branch: impl Into<String>) -> Self {
        MockRepository {
            branch: branch.into(),
            commits: Vec::new(),
            tags: Vec::new(),
            remotes: HashMap::new(),
        }
    }

    /// Append a commit older than every commit added so far
    pub fn add_commit(&mut self, info: CommitInfo) {
        self.commits.push(info);
    }

    /// Add a tag pointing at a commit hash
    pub fn add_tag(&mut self, name: impl Into<String>, target: impl Into<String>) {
        self.tags.push(Tag::new(name, target));
    }

    pub fn set_remote(&mut self, name: impl Into<String>, url: impl Into<String>) {
        self.remotes.insert(name.into(), url.into());
    }
}

impl Default for MockRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl Repository for MockRepository {
    fn commits(&self, branch: &str, max_count: usize) -> Result<Vec<CommitInfo>> {
        if branch != self.branch {
            return Err(ReleaseNotesError::repository(format!(
                "cannot resolve branch '{}'",
                branch
            )));
        }
        Ok(self.commits.iter().take(max_count).cloned().collect())
    }

    fn tags(&self) -> Result<Vec<Tag>> {
        Ok(self.tags.clone())
    }

    fn remote_url(&self, remote: &str) -> Result<Option<String>> {
        Ok(self.remotes.get(remote).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::DiffStats;

    fn info(hash: &str, message: &str) -> CommitInfo {
        CommitInfo {
            hash: hash.to_string(),
            author: "Test Author".to_string(),
            email: "test@example.com".to_string(),
            timestamp: 0,
            utc_offset_minutes: 0,
            message: message.to_string(),
            stats: DiffStats::default(),
        }
    }

    #[test]
    fn test_mock_repository_commits_bounded_and_ordered() {
        let mut repo = MockRepository::new();
        repo.add_commit(info("c3", "third"));
        repo.add_commit(info("c2", "second"));
        repo.add_commit(info("c1", "first"));

        let commits = repo.commits("main", 2).unwrap();
        let hashes: Vec<&str> = commits.iter().map(|c| c.hash.as_str()).collect();
        assert_eq!(hashes, vec!["c3", "c2"]);
    }

    #[test]
    fn test_mock_repository_unknown_branch() {
        let repo = MockRepository::new();
        assert!(repo.commits("develop", 10).is_err());
    }

    #[test]
    fn test_mock_repository_tags_and_remote() {
        let mut repo = MockRepository::default();
        repo.add_tag("v1.0.0", "c1");
        repo.set_remote("origin", "git@github.com:acme/widgets.git");

        assert_eq!(repo.tags().unwrap(), vec![Tag::new("v1.0.0", "c1")]);
        assert_eq!(
            repo.remote_url("origin").unwrap().as_deref(),
            Some("git@github.com:acme/widgets.git")
        );
        assert_eq!(repo.remote_url("upstream").unwrap(), None);
    }
}
