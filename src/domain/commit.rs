use chrono::{DateTime, FixedOffset, Offset, Utc};
use serde::Serialize;

use super::Category;

/// Length of the abbreviated commit hash
pub const SHORT_HASH_LEN: usize = 7;

/// Maximum number of characters kept in `message_short`
pub const SHORT_MESSAGE_LEN: usize = 100;

/// Per-commit diff statistics against the first parent
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DiffStats {
    pub files_changed: usize,
    pub insertions: usize,
    pub deletions: usize,
}

impl DiffStats {
    pub fn new(files_changed: usize, insertions: usize, deletions: usize) -> Self {
        DiffStats {
            files_changed,
            insertions,
            deletions,
        }
    }
}

impl std::ops::AddAssign for DiffStats {
    fn add_assign(&mut self, other: Self) {
        self.files_changed += other.files_changed;
        self.insertions += other.insertions;
        self.deletions += other.deletions;
    }
}

/// Raw commit as read from version control, before classification
#[derive(Debug, Clone, PartialEq)]
pub struct CommitInfo {
    /// Full commit hash
    pub hash: String,
    pub author: String,
    pub email: String,
    /// Authored time in epoch seconds
    pub timestamp: i64,
    /// Author's UTC offset at commit time
    pub utc_offset_minutes: i32,
    /// Raw message, possibly multi-line
    pub message: String,
    pub stats: DiffStats,
}

impl CommitInfo {
    /// First line of the trimmed message
    pub fn first_line(&self) -> &str {
        first_line(&self.message)
    }
}

/// A classified commit. Immutable once built.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Commit {
    pub hash: String,
    pub short_hash: String,
    pub author: String,
    pub email: String,
    pub timestamp: i64,
    #[serde(skip)]
    pub utc_offset_minutes: i32,
    pub message: String,
    pub message_short: String,
    #[serde(rename = "type")]
    pub category: Category,
    #[serde(flatten)]
    pub stats: DiffStats,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
}

impl Commit {
    /// Build the final record from raw commit data, its category, and the
    /// names of all tags pointing at it.
    pub fn new(info: CommitInfo, category: Category, mut tags: Vec<String>) -> Self {
        let message = info.message.trim().to_string();
        let message_short = first_line(&message)
            .chars()
            .take(SHORT_MESSAGE_LEN)
            .collect();
        let short_hash = info.hash.chars().take(SHORT_HASH_LEN).collect();
        tags.sort();

        Commit {
            hash: info.hash,
            short_hash,
            author: info.author,
            email: info.email,
            timestamp: info.timestamp,
            utc_offset_minutes: info.utc_offset_minutes,
            message,
            message_short,
            category,
            stats: info.stats,
            tags,
        }
    }

    /// Untruncated first line of the message
    pub fn title(&self) -> &str {
        first_line(&self.message)
    }

    /// Authored time in the author's own UTC offset
    pub fn authored_at(&self) -> DateTime<FixedOffset> {
        authored_at(self.timestamp, self.utc_offset_minutes)
    }

    /// `YYYY-MM-DD HH:MM:SS`
    pub fn formatted_date(&self) -> String {
        self.authored_at().format("%Y-%m-%d %H:%M:%S").to_string()
    }
}

/// First line of a message after trimming surrounding whitespace.
pub fn first_line(message: &str) -> &str {
    message.trim().lines().next().unwrap_or("")
}

/// Convert epoch seconds and an offset into a zoned timestamp.
/// Out-of-range values fall back to the epoch and UTC.
pub fn authored_at(timestamp: i64, utc_offset_minutes: i32) -> DateTime<FixedOffset> {
    let offset = FixedOffset::east_opt(utc_offset_minutes.saturating_mul(60))
        .unwrap_or_else(|| Utc.fix());
    DateTime::from_timestamp(timestamp, 0)
        .unwrap_or_default()
        .with_timezone(&offset)
}
