use std::collections::BTreeMap;

use tracing::debug;

use super::{Commit, DiffStats, TagCurator};

/// Label of the virtual release holding commits newer than the first marker
pub const INCOMING_LABEL: &str = "Incoming";

/// A contiguous window of commits anchored at a release marker, or the
/// virtual `Incoming` window above the newest marker.
#[derive(Debug, Clone, PartialEq)]
pub struct Release<'a> {
    /// Marker names sharing the anchor commit, joined by " / "
    pub label: String,
    /// Newest-first, as in the input history
    pub commits: &'a [Commit],
    /// Date of the first commit of the window (the newest one)
    pub start_date: String,
    /// Date of the last commit of the window (the oldest one)
    pub end_date: String,
    pub is_virtual: bool,
    start_timestamp: i64,
}

impl<'a> Release<'a> {
    fn new(label: String, commits: &'a [Commit], is_virtual: bool) -> Self {
        let start = commits.first();
        let end = commits.last();

        Release {
            label,
            commits,
            start_date: start.map(Commit::formatted_date).unwrap_or_default(),
            end_date: end.map(Commit::formatted_date).unwrap_or_default(),
            is_virtual,
            start_timestamp: start.map(|c| c.timestamp).unwrap_or(i64::MIN),
        }
    }

    /// Treat an arbitrary commit list as one synthetic release.
    pub fn synthetic(label: impl Into<String>, commits: &'a [Commit]) -> Self {
        Release::new(label.into(), commits, true)
    }

    pub fn commit_count(&self) -> usize {
        self.commits.len()
    }

    /// Summed diff statistics of every commit in the window
    pub fn stats(&self) -> DiffStats {
        let mut total = DiffStats::default();
        for commit in self.commits {
            total += commit.stats;
        }
        total
    }
}

/// Whether authored timestamps never increase along the list.
///
/// Histories with rewritten author dates can violate this; segmentation only
/// relies on list positions, with index 0 taken as the most recent commit.
pub fn is_newest_first(commits: &[Commit]) -> bool {
    commits.windows(2).all(|w| w[0].timestamp >= w[1].timestamp)
}

/// Partition a newest-first commit list into release windows.
///
/// Returns an empty list when no commit carries a tag accepted by `curator`.
/// Otherwise every commit lands in exactly one release, and the result is
/// ordered by the window's newest commit, most recent first.
pub fn segment_releases<'a>(commits: &'a [Commit], curator: &TagCurator) -> Vec<Release<'a>> {
    if !is_newest_first(commits) {
        debug!("commit timestamps are not monotonic; segmenting by list position");
    }

    // First index at which each marker occurs, in the order markers are seen.
    let mut first_seen: Vec<(&str, usize)> = Vec::new();
    for (index, commit) in commits.iter().enumerate() {
        for tag in &commit.tags {
            if curator.accepts(tag) && !first_seen.iter().any(|(name, _)| name == tag) {
                first_seen.push((tag.as_str(), index));
            }
        }
    }

    let mut anchors: BTreeMap<usize, Vec<&str>> = BTreeMap::new();
    for (name, index) in first_seen {
        anchors.entry(index).or_default().push(name);
    }

    let Some((&first_anchor, _)) = anchors.iter().next() else {
        return Vec::new();
    };

    let mut releases = Vec::with_capacity(anchors.len() + 1);

    if first_anchor > 0 {
        releases.push(Release::new(
            INCOMING_LABEL.to_string(),
            &commits[..first_anchor],
            true,
        ));
    }

    let indices: Vec<usize> = anchors.keys().copied().collect();
    for (position, (&start, names)) in anchors.iter().enumerate() {
        let end = indices.get(position + 1).copied().unwrap_or(commits.len());
        releases.push(Release::new(names.join(" / "), &commits[start..end], false));
    }

    releases.sort_by(|a, b| b.start_timestamp.cmp(&a.start_timestamp));

    debug!(
        release_count = releases.len(),
        commit_count = commits.len(),
        "segmented commits into releases"
    );
    releases
}

/// Keep only the most recent tagged release; the list is returned unchanged
/// when it holds no tagged release.
pub fn latest_release_only(releases: Vec<Release<'_>>) -> Vec<Release<'_>> {
    match releases.iter().position(|r| !r.is_virtual) {
        Some(index) => releases.into_iter().skip(index).take(1).collect(),
        None => releases,
    }
}
