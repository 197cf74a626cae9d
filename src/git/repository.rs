use crate::domain::{CommitInfo, DiffStats, Tag};
use crate::error::{ReleaseNotesError, Result};
use git2::{Repository as Git2Repo, Sort};
use std::path::Path;
use tracing::{debug, instrument};

/// Wrapper around git2::Repository with our trait interface
pub struct Git2Repository {
    repo: Git2Repo,
}

impl Git2Repository {
    /// Open or discover a git repository
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let repo = Git2Repo::discover(path).map_err(|e| {
            ReleaseNotesError::repository(format!(
                "cannot open repository at '{}': {}",
                path.display(),
                e
            ))
        })?;

        Ok(Git2Repository { repo })
    }

    /// Create from existing git2::Repository
    pub fn from_git2(repo: Git2Repo) -> Self {
        Git2Repository { repo }
    }

    /// Diff statistics against the first parent, or the empty tree for roots
    fn diff_stats(&self, commit: &git2::Commit<'_>) -> Result<DiffStats> {
        let tree = commit.tree()?;
        let parent_tree = if commit.parent_count() > 0 {
            Some(commit.parent(0)?.tree()?)
        } else {
            None
        };

        let diff = self
            .repo
            .diff_tree_to_tree(parent_tree.as_ref(), Some(&tree), None)?;
        let stats = diff.stats()?;

        Ok(DiffStats::new(
            stats.files_changed(),
            stats.insertions(),
            stats.deletions(),
        ))
    }
}

impl super::Repository for Git2Repository {
    #[instrument(skip(self))]
    fn commits(&self, branch: &str, max_count: usize) -> Result<Vec<CommitInfo>> {
        let head = self
            .repo
            .revparse_single(branch)
            .and_then(|object| object.peel_to_commit())
            .map_err(|e| {
                ReleaseNotesError::repository(format!("cannot resolve branch '{}': {}", branch, e))
            })?;

        let mut revwalk = self.repo.revwalk()?;
        revwalk.set_sorting(Sort::TIME)?;
        revwalk.push(head.id())?;

        let mut commits = Vec::new();

        for oid_result in revwalk.take(max_count) {
            let oid = oid_result?;
            let commit = self.repo.find_commit(oid)?;

            let author = commit.author();
            let when = author.when();

            commits.push(CommitInfo {
                hash: oid.to_string(),
                author: author.name().unwrap_or("unknown").to_string(),
                email: author.email().unwrap_or("").to_string(),
                timestamp: when.seconds(),
                utc_offset_minutes: when.offset_minutes(),
                message: String::from_utf8_lossy(commit.message_bytes()).into_owned(),
                stats: self.diff_stats(&commit)?,
            });
        }

        debug!(count = commits.len(), "read commits");
        Ok(commits)
    }

    fn tags(&self) -> Result<Vec<Tag>> {
        let names = self.repo.tag_names(None)?;
        let mut tags = Vec::new();

        for name in names.iter().flatten() {
            let reference_name = format!("refs/tags/{}", name);
            let target = self
                .repo
                .find_reference(&reference_name)
                .and_then(|reference| reference.peel_to_commit());

            match target {
                Ok(commit) => tags.push(Tag::new(name, commit.id().to_string())),
                Err(e) => debug!(tag = name, error = %e, "skipping tag without commit target"),
            }
        }

        debug!(count = tags.len(), "listed tags");
        Ok(tags)
    }

    fn remote_url(&self, remote: &str) -> Result<Option<String>> {
        match self.repo.find_remote(remote) {
            Ok(found) => Ok(found.url().map(|url| url.to_string())),
            Err(e) if e.code() == git2::ErrorCode::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }
}
