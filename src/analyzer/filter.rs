use regex::{Regex, RegexBuilder};

use crate::config::FiltersConfig;
use crate::domain::CommitInfo;
use crate::error::{ReleaseNotesError, Result};

/// Compiled exclusion patterns for titles, authors and full messages.
///
/// Patterns are case-insensitive and match anywhere in the tested text.
#[derive(Debug, Clone, Default)]
pub struct CommitFilter {
    title: Vec<Regex>,
    author: Vec<Regex>,
    message: Vec<Regex>,
}

fn compile_all(field: &'static str, patterns: &[String]) -> Result<Vec<Regex>> {
    patterns
        .iter()
        .map(|pattern| {
            RegexBuilder::new(pattern)
                .case_insensitive(true)
                .build()
                .map_err(|source| ReleaseNotesError::Pattern {
                    field,
                    pattern: pattern.clone(),
                    source,
                })
        })
        .collect()
}

impl CommitFilter {
    /// Compile every pattern once. The first malformed pattern aborts
    /// compilation with an error naming it.
    pub fn compile(filters: &FiltersConfig) -> Result<Self> {
        Ok(CommitFilter {
            title: compile_all("title", &filters.exclude_title)?,
            author: compile_all("author", &filters.exclude_author)?,
            message: compile_all("message", &filters.exclude_message)?,
        })
    }

    /// True when no pattern of any kind is configured
    pub fn is_empty(&self) -> bool {
        self.title.is_empty() && self.author.is_empty() && self.message.is_empty()
    }

    /// Whether any title, author or message pattern matches.
    pub fn should_exclude(&self, first_line: &str, author: &str, message: &str) -> bool {
        self.title.iter().any(|re| re.is_match(first_line))
            || self.author.iter().any(|re| re.is_match(author))
            || self.message.iter().any(|re| re.is_match(message))
    }

    pub fn excludes(&self, commit: &CommitInfo) -> bool {
        self.should_exclude(commit.first_line(), &commit.author, &commit.message)
    }
}
