use chrono::{DateTime, TimeZone};
use serde::Serialize;
use std::path::Path;

use super::{Commit, DiffStats};

/// Fallback repository name when neither the path nor the remote yields one
pub const DEFAULT_REPOSITORY_NAME: &str = "Repository";

/// Repository metadata embedded in the exported document
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RepositoryInfo {
    pub name: String,
    pub branch: String,
    /// Normalized https URL, empty when no origin remote is known
    pub url: String,
}

impl RepositoryInfo {
    pub fn new(name: impl Into<String>, branch: impl Into<String>, url: impl Into<String>) -> Self {
        RepositoryInfo {
            name: name.into(),
            branch: branch.into(),
            url: url.into(),
        }
    }

    /// Derive the display name from the repository path, falling back to the
    /// last segment of the remote URL.
    pub fn resolve_name(repo_path: &Path, url: &str) -> String {
        if let Some(name) = repo_path.file_name().and_then(|n| n.to_str()) {
            if !name.is_empty() && name != "." {
                return name.to_string();
            }
        }

        url.rsplit('/')
            .next()
            .filter(|segment| !segment.is_empty())
            .unwrap_or(DEFAULT_REPOSITORY_NAME)
            .to_string()
    }

    pub fn url(&self) -> Option<&str> {
        if self.url.is_empty() {
            None
        } else {
            Some(&self.url)
        }
    }
}

/// The complete export: the JSON artifact and the input of every renderer
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReleaseData {
    pub generated_at: String,
    pub generated_at_iso: String,
    pub repository: RepositoryInfo,
    /// Newest-first
    pub commits: Vec<Commit>,
}

impl ReleaseData {
    pub fn new<Tz>(repository: RepositoryInfo, commits: Vec<Commit>, now: DateTime<Tz>) -> Self
    where
        Tz: TimeZone,
        Tz::Offset: std::fmt::Display,
    {
        ReleaseData {
            generated_at: now.format("%Y-%m-%d %H:%M:%S").to_string(),
            generated_at_iso: now.to_rfc3339(),
            repository,
            commits,
        }
    }

    /// Summed diff statistics across all commits
    pub fn stats(&self) -> DiffStats {
        let mut total = DiffStats::default();
        for commit in &self.commits {
            total += commit.stats;
        }
        total
    }

    /// Pretty-printed JSON, non-ASCII characters kept as-is
    pub fn to_json(&self) -> crate::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, TimeZone};
    use std::path::PathBuf;

    #[test]
    fn test_resolve_name_from_path() {
        let name = RepositoryInfo::resolve_name(&PathBuf::from("/work/my-project"), "");
        assert_eq!(name, "my-project");
    }

    #[test]
    fn test_resolve_name_from_url_when_path_is_dot() {
        let name = RepositoryInfo::resolve_name(
            &PathBuf::from("."),
            "https://github.com/acme/widgets",
        );
        assert_eq!(name, "widgets");
    }

    #[test]
    fn test_resolve_name_fallback() {
        let name = RepositoryInfo::resolve_name(&PathBuf::from("."), "");
        assert_eq!(name, DEFAULT_REPOSITORY_NAME);
    }

    #[test]
    fn test_document_json_shape() {
        let now = FixedOffset::east_opt(3600)
            .unwrap()
            .with_ymd_and_hms(2024, 5, 1, 12, 30, 0)
            .unwrap();
        let data = ReleaseData::new(
            RepositoryInfo::new("widgets", "main", "https://github.com/acme/widgets"),
            vec![],
            now,
        );

        let value: serde_json::Value = serde_json::from_str(&data.to_json().unwrap()).unwrap();

        assert_eq!(value["generated_at"], "2024-05-01 12:30:00");
        assert_eq!(value["generated_at_iso"], "2024-05-01T12:30:00+01:00");
        assert_eq!(value["repository"]["name"], "widgets");
        assert_eq!(value["repository"]["branch"], "main");
        assert_eq!(value["repository"]["url"], "https://github.com/acme/widgets");
        assert!(value["commits"].as_array().unwrap().is_empty());
    }
}
