//! Domain logic - pure data and rules independent of git operations

pub mod category;
pub mod commit;
pub mod document;
pub mod release;
pub mod tag;

pub use category::{Category, CategoryInfo, CATEGORIES};
pub use commit::{Commit, CommitInfo, DiffStats};
pub use document::{ReleaseData, RepositoryInfo};
pub use release::{latest_release_only, segment_releases, Release, INCOMING_LABEL};
pub use tag::{is_release_marker, is_stable_release_marker, CurationMode, Tag, TagCurator};
