//! Text rendering of classified and segmented commits.
//!
//! - `markdown` - the by-release and by-type documents
//! - `timeline` - tree-style timeline of a release

pub mod markdown;
pub mod timeline;

pub use markdown::{generate_markdown, MarkdownOptions};
pub use timeline::render_timeline;

use crate::domain::{Category, Commit, DiffStats};

/// Commit reference: a link to `{url}/commit/{hash}` when the repository URL
/// is known, the short hash as inline code otherwise.
pub fn commit_link(commit: &Commit, repo_url: Option<&str>) -> String {
    match repo_url {
        Some(url) => format!("[`{}`]({}/commit/{})", commit.short_hash, url, commit.hash),
        None => format!("`{}`", commit.short_hash),
    }
}

/// Commits grouped per category, in display order, empty groups omitted
pub fn group_by_category<'a, I>(commits: I) -> Vec<(Category, Vec<&'a Commit>)>
where
    I: IntoIterator<Item = &'a Commit>,
{
    let mut groups: Vec<(Category, Vec<&'a Commit>)> =
        Category::all().map(|category| (category, Vec::new())).collect();

    for commit in commits {
        groups[commit.category as usize].1.push(commit);
    }

    groups.retain(|(_, commits)| !commits.is_empty());
    groups
}

/// `glyph label: count` for each non-empty category
pub fn category_counts(groups: &[(Category, Vec<&Commit>)]) -> Vec<String> {
    groups
        .iter()
        .map(|(category, commits)| {
            format!("{} {}: {}", category.glyph(), category.label(), commits.len())
        })
        .collect()
}

pub fn stats_line(stats: &DiffStats) -> String {
    format!(
        "📊 {} files, +{}/-{} lines",
        stats.files_changed, stats.insertions, stats.deletions
    )
}
