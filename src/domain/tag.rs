use regex::Regex;
use std::sync::OnceLock;

/// Semantic version with optional `v`/`V` prefix, pre-release and build suffixes
const RELEASE_MARKER_PATTERN: &str =
    r"^[vV]?\d+\.\d+\.\d+(?:-[0-9A-Za-z.-]+)?(?:\+[0-9A-Za-z.-]+)?$";

fn release_marker_regex() -> Option<&'static Regex> {
    static RE: OnceLock<Option<Regex>> = OnceLock::new();
    RE.get_or_init(|| Regex::new(RELEASE_MARKER_PATTERN).ok())
        .as_ref()
}

/// A tag name together with the commit it points at
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tag {
    pub name: String,
    /// Full hash of the peeled target commit
    pub target: String,
}

impl Tag {
    pub fn new(name: impl Into<String>, target: impl Into<String>) -> Self {
        Tag {
            name: name.into(),
            target: target.into(),
        }
    }
}

/// Whether `name` is a release marker (e.g. "v1.2.3", "1.0.0-rc.1+build.5").
pub fn is_release_marker(name: &str) -> bool {
    release_marker_regex().is_some_and(|re| re.is_match(name))
}

/// Whether `name` is a release marker without any pre-release suffix.
///
/// Any `-` disqualifies the tag, including one inside build metadata.
pub fn is_stable_release_marker(name: &str) -> bool {
    !name.contains('-') && is_release_marker(name)
}

/// Which tags count as release markers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CurationMode {
    /// Every semantic-version tag, pre-releases included
    #[default]
    AllReleases,
    /// Only tags without a pre-release suffix
    StableOnly,
}

/// Decides which version-control tags anchor release boundaries
#[derive(Debug, Clone, Copy, Default)]
pub struct TagCurator {
    mode: CurationMode,
}

impl TagCurator {
    pub fn new(mode: CurationMode) -> Self {
        TagCurator { mode }
    }

    pub fn stable_only() -> Self {
        TagCurator::new(CurationMode::StableOnly)
    }

    /// Test a single tag name against the current mode
    pub fn accepts(&self, name: &str) -> bool {
        match self.mode {
            CurationMode::AllReleases => is_release_marker(name),
            CurationMode::StableOnly => is_stable_release_marker(name),
        }
    }

    /// Retain accepted tags, preserving input order
    pub fn curate(&self, tags: &[Tag]) -> Vec<Tag> {
        tags.iter()
            .filter(|tag| self.accepts(&tag.name))
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_release_markers() {
        assert!(is_release_marker("v1.2.3"));
        assert!(is_release_marker("V1.2.3"));
        assert!(is_release_marker("1.2.3"));
        assert!(is_release_marker("v1.2.3-rc.1"));
        assert!(is_release_marker("v1.2.3+build.7"));
        assert!(is_release_marker("v1.2.3-beta.2+exp.sha.5114f85"));
        assert!(!is_release_marker("release-1"));
        assert!(!is_release_marker("v1.2"));
        assert!(!is_release_marker("v1.2.3.4"));
        assert!(!is_release_marker("latest"));
    }

    #[test]
    fn test_stable_release_markers() {
        assert!(is_stable_release_marker("v1.2.3"));
        assert!(is_stable_release_marker("1.2.3+build.7"));
        assert!(!is_stable_release_marker("v1.2.3-rc.1"));
        assert!(!is_stable_release_marker("1.2.3+build-7"));
        assert!(!is_stable_release_marker("release-1"));
    }

    #[test]
    fn test_curate_all_releases() {
        let tags = vec![
            Tag::new("v1.0.0", "a"),
            Tag::new("nightly", "b"),
            Tag::new("v1.1.0-rc.1", "c"),
        ];
        let names: Vec<String> = TagCurator::default()
            .curate(&tags)
            .into_iter()
            .map(|t| t.name)
            .collect();
        assert_eq!(names, vec!["v1.0.0", "v1.1.0-rc.1"]);
    }

    #[test]
    fn test_curate_stable_only() {
        let tags = vec![Tag::new("v1.0.0", "a"), Tag::new("v1.1.0-rc.1", "c")];
        let curated = TagCurator::stable_only().curate(&tags);
        assert_eq!(curated, vec![Tag::new("v1.0.0", "a")]);
    }

    #[test]
    fn test_curate_only_prereleases_in_stable_mode_is_empty() {
        let tags = vec![Tag::new("v2.0.0-alpha", "a"), Tag::new("v2.0.0-beta", "b")];
        assert!(TagCurator::stable_only().curate(&tags).is_empty());
    }
}
