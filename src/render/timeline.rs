use std::collections::BTreeMap;

use crate::domain::{Commit, Release};

/// Maximum characters of a commit title shown on a timeline leaf
pub const MESSAGE_BUDGET: usize = 60;

const ELLIPSIS: &str = "...";

fn truncate(text: &str, budget: usize) -> String {
    if text.chars().count() <= budget {
        return text.to_string();
    }
    let kept: String = text
        .chars()
        .take(budget.saturating_sub(ELLIPSIS.len()))
        .collect();
    format!("{}{}", kept, ELLIPSIS)
}

fn plural(count: usize, word: &str) -> String {
    if count == 1 {
        format!("{} {}", count, word)
    } else {
        format!("{} {}s", count, word)
    }
}

/// Render a release as a tree: one branch per day, newest day first, with
/// that day's commits as leaves, oldest first.
///
/// ```text
/// v1.0.0 (3 commits)
/// ├─ 2024-03-02
/// │  ├─ 10:15:00 a1b2c3d ✨ add login
/// │  └─ 11:20:00 d4e5f6a 🐛 crash on start
/// └─ 2024-03-01
///    └─ 09:00:00 0a1b2c3 📚 update readme
/// 3 commits, 5 files changed, +120/-30
/// ```
pub fn render_timeline(release: &Release<'_>) -> Vec<String> {
    let mut days: BTreeMap<String, Vec<&Commit>> = BTreeMap::new();
    for commit in release.commits {
        let day = commit.authored_at().format("%Y-%m-%d").to_string();
        days.entry(day).or_default().push(commit);
    }

    let mut lines = vec![format!(
        "{} ({})",
        release.label,
        plural(release.commit_count(), "commit")
    )];

    let day_count = days.len();
    for (day_index, (day, mut commits)) in days.into_iter().rev().enumerate() {
        let last_day = day_index + 1 == day_count;
        lines.push(format!("{} {}", if last_day { "└─" } else { "├─" }, day));

        let indent = if last_day { "   " } else { "│  " };
        commits.sort_by_key(|c| c.timestamp);

        let commit_count = commits.len();
        for (index, commit) in commits.into_iter().enumerate() {
            let connector = if index + 1 == commit_count { "└─" } else { "├─" };
            lines.push(format!(
                "{}{} {} {} {} {}",
                indent,
                connector,
                commit.authored_at().format("%H:%M:%S"),
                commit.short_hash,
                commit.category.glyph(),
                truncate(commit.title(), MESSAGE_BUDGET)
            ));
        }
    }

    let stats = release.stats();
    lines.push(format!(
        "{}, {} changed, +{}/-{}",
        plural(release.commit_count(), "commit"),
        plural(stats.files_changed, "file"),
        stats.insertions,
        stats.deletions
    ));

    lines
}
