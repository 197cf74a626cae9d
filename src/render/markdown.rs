//! Markdown release notes.
//!
//! The document is structured by release when the history carries release
//! markers, and as a flat chronological list annotated by type otherwise.

use tracing::{debug, instrument};

use super::{category_counts, commit_link, group_by_category, stats_line, timeline};
use crate::domain::{
    latest_release_only, segment_releases, DiffStats, Release, ReleaseData, TagCurator,
};

/// Rendering switches
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MarkdownOptions {
    /// Keep only the most recent stable release
    pub latest_release_only: bool,
    /// Add a tree timeline per release (or one for the flat view)
    pub timeline: bool,
}

/// Generate the complete markdown document.
#[instrument(skip(data), fields(commit_count = data.commits.len()))]
pub fn generate_markdown(data: &ReleaseData, options: &MarkdownOptions) -> String {
    let mut lines = header(data);

    let curator = if options.latest_release_only {
        TagCurator::stable_only()
    } else {
        TagCurator::default()
    };

    let mut releases = segment_releases(&data.commits, &curator);

    if releases.is_empty() {
        debug!("no release markers, rendering flat view");
        lines.extend(by_type(data, options));
    } else {
        if options.latest_release_only {
            releases = latest_release_only(releases);
        }
        debug!(release_count = releases.len(), "rendering release view");
        lines.extend(by_release(&releases, data, options));
    }

    lines.join("\n")
}

fn header(data: &ReleaseData) -> Vec<String> {
    let mut lines = vec![
        format!("# Release Notes - {}", data.repository.name),
        String::new(),
        format!("**Generated:** {}", data.generated_at),
        format!("**Branch:** {}", data.repository.branch),
    ];
    if let Some(url) = data.repository.url() {
        lines.push(format!("**Repository:** {}", url));
    }
    lines.push(String::new());
    lines.push("---".to_string());
    lines.push(String::new());
    lines
}

fn timeline_section(heading: &str, release: &Release<'_>) -> Vec<String> {
    let mut lines = vec![heading.to_string(), String::new(), "```text".to_string()];
    lines.extend(timeline::render_timeline(release));
    lines.push("```".to_string());
    lines.push(String::new());
    lines
}

fn totals_lines(commit_count: usize, stats: &DiffStats) -> Vec<String> {
    vec![
        format!("- **Total Commits:** {}", commit_count),
        format!("- **Files Changed:** {}", stats.files_changed),
        format!("- **Insertions:** +{}", stats.insertions),
        format!("- **Deletions:** -{}", stats.deletions),
    ]
}

/// One section per release, then an overall summary.
pub fn by_release(
    releases: &[Release<'_>],
    data: &ReleaseData,
    options: &MarkdownOptions,
) -> Vec<String> {
    let repo_url = data.repository.url();
    let mut lines = Vec::new();

    for release in releases {
        let glyph = if release.is_virtual { "🚀" } else { "🏷️" };
        lines.push(format!("## {} {}", glyph, release.label));
        lines.push(String::new());
        lines.push(format!(
            "**Commits:** {} | **Period:** {} to {}",
            release.commit_count(),
            release.start_date,
            release.end_date
        ));
        lines.push(String::new());

        let groups = group_by_category(release.commits);
        let counts = category_counts(&groups);
        if !counts.is_empty() {
            lines.push(format!("**Summary:** {}", counts.join(" | ")));
            lines.push(String::new());
        }

        if options.timeline {
            lines.extend(timeline_section("### 🌳 Timeline", release));
        }

        for (category, commits) in &groups {
            lines.push(format!("### {} {}", category.glyph(), category.label()));
            lines.push(String::new());

            for commit in commits {
                lines.push(format!(
                    "- {} ({}) – *{}* – {}",
                    commit.title(),
                    commit_link(commit, repo_url),
                    commit.author,
                    commit.formatted_date()
                ));
                lines.push(format!("  - {}", stats_line(&commit.stats)));
                lines.push(String::new());
            }

            lines.push(String::new());
        }

        lines.push("---".to_string());
        lines.push(String::new());
    }

    let mut stats = DiffStats::default();
    for release in releases {
        stats += release.stats();
    }
    let commit_count: usize = releases.iter().map(Release::commit_count).sum();

    lines.push("## 📈 Overall Summary".to_string());
    lines.push(String::new());
    lines.push(format!("- **Total Releases:** {}", releases.len()));
    lines.extend(totals_lines(commit_count, &stats));
    lines.push(String::new());

    lines
}

/// All commits in history order, annotated with their type, followed by
/// totals and a per-category breakdown.
pub fn by_type(data: &ReleaseData, options: &MarkdownOptions) -> Vec<String> {
    let repo_url = data.repository.url();
    let mut lines = Vec::new();

    if options.timeline {
        let all = Release::synthetic(data.repository.name.clone(), &data.commits);
        lines.extend(timeline_section("## 🌳 Timeline", &all));
    }

    lines.push("## 📋 Commits".to_string());
    lines.push(String::new());

    for commit in &data.commits {
        let category = commit.category;
        lines.push(format!(
            "- {} **[{}]** {}",
            category.glyph(),
            category.key().to_uppercase(),
            commit.title()
        ));
        lines.push(format!(
            "  - {} – *{}* – {}",
            commit_link(commit, repo_url),
            commit.author,
            commit.formatted_date()
        ));

        if !commit.tags.is_empty() {
            let tags: Vec<String> = commit.tags.iter().map(|t| format!("`{}`", t)).collect();
            lines.push(format!("  - 🏷️ Tags: {}", tags.join(", ")));
        }

        lines.push(format!("  - {}", stats_line(&commit.stats)));
        lines.push(String::new());
    }

    lines.push("---".to_string());
    lines.push(String::new());
    lines.push("## 📈 Summary".to_string());
    lines.push(String::new());
    lines.extend(totals_lines(data.commits.len(), &data.stats()));
    lines.push(String::new());

    lines.push("### Breakdown by Type".to_string());
    lines.push(String::new());
    for count in category_counts(&group_by_category(&data.commits)) {
        lines.push(format!("- {}", count));
    }
    lines.push(String::new());

    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Category, Commit, CommitInfo, RepositoryInfo};
    use chrono::{TimeZone, Utc};
    use proptest::prelude::*;

    fn commit(index: usize, message: &str, category: Category, tags: &[&str]) -> Commit {
        let info = CommitInfo {
            hash: format!("{:040x}", index + 1),
            author: "Dev".to_string(),
            email: "dev@example.com".to_string(),
            timestamp: 1_700_000_000 - (index as i64) * 3600,
            utc_offset_minutes: 0,
            message: message.to_string(),
            stats: DiffStats::new(1, 5, 2),
        };
        Commit::new(info, category, tags.iter().map(|t| t.to_string()).collect())
    }

    fn data(commits: Vec<Commit>, url: &str) -> ReleaseData {
        let now = Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap();
        ReleaseData::new(RepositoryInfo::new("widgets", "main", url), commits, now)
    }

    fn sample() -> Vec<Commit> {
        vec![
            commit(0, "feat: add login", Category::Feat, &[]),
            commit(1, "v1.0.0 release", Category::Other, &["v1.0.0"]),
            commit(2, "fix: crash", Category::Fix, &[]),
        ]
    }

    #[test]
    fn test_header() {
        let md = generate_markdown(
            &data(vec![], "https://github.com/acme/widgets"),
            &MarkdownOptions::default(),
        );
        assert!(md.starts_with("# Release Notes - widgets\n\n**Generated:** 2024-01-02 03:04:05\n**Branch:** main\n**Repository:** https://github.com/acme/widgets\n"));
    }

    #[test]
    fn test_header_without_url() {
        let md = generate_markdown(&data(vec![], ""), &MarkdownOptions::default());
        assert!(!md.contains("**Repository:**"));
    }

    #[test]
    fn test_release_view_selected_when_markers_exist() {
        let md = generate_markdown(&data(sample(), ""), &MarkdownOptions::default());

        let incoming = md.find("## 🚀 Incoming").unwrap();
        let tagged = md.find("## 🏷️ v1.0.0").unwrap();
        assert!(incoming < tagged);
        assert!(md.contains("**Commits:** 2 | **Period:**"));
        assert!(md.contains("**Summary:** 🐛 Bug Fixes: 1 | 📌 Other Changes: 1"));
        assert!(md.contains("- **Total Releases:** 2"));
        assert!(md.contains("- **Total Commits:** 3"));
        assert!(md.contains("- **Files Changed:** 3"));
        assert!(md.contains("- **Insertions:** +15"));
        assert!(md.contains("- **Deletions:** -6"));
        assert!(!md.contains("## 📋 Commits"));
    }

    #[test]
    fn test_release_entries_link_to_commits() {
        let md = generate_markdown(
            &data(sample(), "https://github.com/acme/widgets"),
            &MarkdownOptions::default(),
        );
        let hash = format!("{:040x}", 3);
        assert!(md.contains(&format!(
            "- fix: crash ([`{}`](https://github.com/acme/widgets/commit/{})) – *Dev* – ",
            &hash[..7],
            hash
        )));
        assert!(md.contains("  - 📊 1 files, +5/-2 lines"));
    }

    #[test]
    fn test_category_sections_follow_display_order() {
        let commits = vec![
            commit(0, "chore: tidy", Category::Chore, &["v1.0.0"]),
            commit(1, "fix: bug", Category::Fix, &[]),
            commit(2, "feat: thing", Category::Feat, &[]),
        ];
        let md = generate_markdown(&data(commits, ""), &MarkdownOptions::default());

        let feat = md.find("### ✨ Features").unwrap();
        let fix = md.find("### 🐛 Bug Fixes").unwrap();
        let chore = md.find("### 🔧 Chores").unwrap();
        assert!(feat < fix && fix < chore);
        assert!(!md.contains("### 📚 Documentation"));
    }

    #[test]
    fn test_flat_view_without_markers() {
        let commits = vec![
            commit(0, "feat: add login", Category::Feat, &["nightly"]),
            commit(1, "fix: crash", Category::Fix, &[]),
        ];
        let md = generate_markdown(&data(commits, ""), &MarkdownOptions::default());

        assert!(md.contains("## 📋 Commits"));
        assert!(md.contains("- ✨ **[FEAT]** feat: add login"));
        assert!(md.contains("  - 🏷️ Tags: `nightly`"));
        assert!(md.contains("### Breakdown by Type"));
        assert!(md.contains("- ✨ Features: 1\n- 🐛 Bug Fixes: 1"));
        assert!(!md.contains("Overall Summary"));
        let login = md.find("feat: add login").unwrap();
        let crash = md.find("fix: crash").unwrap();
        assert!(login < crash);
    }

    #[test]
    fn test_empty_history_is_a_valid_flat_document() {
        let md = generate_markdown(&data(vec![], ""), &MarkdownOptions::default());
        assert!(md.contains("## 📋 Commits"));
        assert!(md.contains("- **Total Commits:** 0"));
    }

    #[test]
    fn test_latest_release_only() {
        let commits = vec![
            commit(0, "feat: unreleased", Category::Feat, &[]),
            commit(1, "feat: two", Category::Feat, &["v2.0.0"]),
            commit(2, "fix: one", Category::Fix, &["v1.0.0"]),
        ];
        let options = MarkdownOptions {
            latest_release_only: true,
            timeline: false,
        };
        let md = generate_markdown(&data(commits, ""), &options);

        assert!(md.contains("## 🏷️ v2.0.0"));
        assert!(!md.contains("Incoming"));
        assert!(!md.contains("v1.0.0"));
        assert!(md.contains("- **Total Releases:** 1"));
    }

    #[test]
    fn test_latest_release_only_with_prereleases_falls_back_to_flat() {
        let commits = vec![
            commit(0, "feat: a", Category::Feat, &["v1.0.0-rc.2"]),
            commit(1, "fix: b", Category::Fix, &["v1.0.0-rc.1"]),
        ];
        let options = MarkdownOptions {
            latest_release_only: true,
            timeline: false,
        };
        let md = generate_markdown(&data(commits, ""), &options);

        assert!(md.contains("## 📋 Commits"));
        assert!(!md.contains("## 🏷️"));
    }

    #[test]
    fn test_timeline_sections() {
        let options = MarkdownOptions {
            latest_release_only: false,
            timeline: true,
        };

        let md = generate_markdown(&data(sample(), ""), &options);
        assert_eq!(md.matches("### 🌳 Timeline").count(), 2);
        assert!(md.contains("```text\nv1.0.0 (2 commits)\n"));

        let flat = vec![commit(0, "fix: crash", Category::Fix, &[])];
        let md = generate_markdown(&data(flat, ""), &options);
        assert!(md.contains("## 🌳 Timeline"));
        assert!(md.contains("```text\nwidgets (1 commit)\n"));
    }

    fn arb_category() -> impl Strategy<Value = Category> {
        (0usize..10).prop_map(|i| Category::all().nth(i).unwrap())
    }

    proptest! {
        #[test]
        fn breakdown_counts_sum_to_total(categories in prop::collection::vec(arb_category(), 0..40)) {
            let commits: Vec<Commit> = categories
                .iter()
                .enumerate()
                .map(|(i, c)| commit(i, "msg", *c, &[]))
                .collect();
            let total = commits.len();
            let lines = by_type(&data(commits, ""), &MarkdownOptions::default());

            let breakdown = lines
                .iter()
                .position(|l| l == "### Breakdown by Type")
                .unwrap();
            let sum: usize = lines[breakdown + 1..]
                .iter()
                .filter_map(|l| l.rsplit(": ").next().and_then(|n| n.parse::<usize>().ok()))
                .sum();

            prop_assert_eq!(sum, total);
        }
    }
}
