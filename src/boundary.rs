use std::fmt;

/// Recoverable conditions met while reading repository metadata.
/// These are non-fatal: the run degrades gracefully and reports them.
#[derive(Debug, Clone, PartialEq)]
pub enum BoundaryWarning {
    /// The remote is not configured, so commits are not linked
    MissingRemote { remote: String },
    /// Tags could not be listed, so no release boundaries are known
    TagsUnavailable { reason: String },
    /// Tags exist but none of them is a release marker
    NoReleaseMarkers { tag_count: usize },
    /// The branch yielded no commits (possibly after exclusion)
    NoCommits { branch: String, excluded: usize },
}

impl fmt::Display for BoundaryWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoundaryWarning::MissingRemote { remote } => {
                write!(
                    f,
                    "Remote '{}' not found; commit references will not be linked",
                    remote
                )
            }
            BoundaryWarning::TagsUnavailable { reason } => {
                write!(
                    f,
                    "Could not read tags ({}); notes are listed by commit",
                    reason
                )
            }
            BoundaryWarning::NoReleaseMarkers { tag_count } => {
                write!(
                    f,
                    "{} tag(s) found but none is a release marker; notes are listed by commit",
                    tag_count
                )
            }
            BoundaryWarning::NoCommits { branch, excluded } => {
                if *excluded > 0 {
                    write!(
                        f,
                        "No commits left on branch '{}' ({} excluded by filters)",
                        branch, excluded
                    )
                } else {
                    write!(f, "No commits found on branch '{}'", branch)
                }
            }
        }
    }
}
