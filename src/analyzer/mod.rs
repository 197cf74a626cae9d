//! Commit analysis: exclusion filtering and category classification

pub mod classifier;
pub mod filter;

pub use classifier::{Classifier, Rule, Scope};
pub use filter::CommitFilter;
