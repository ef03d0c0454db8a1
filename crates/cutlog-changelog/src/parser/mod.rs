//! Commit parsing

mod conventional;

pub use conventional::ConventionalParser;

use crate::types::ClassifiedCommit;

/// Trait for commit classifiers
pub trait CommitParser: Send + Sync {
    /// Split a commit subject into category and raw description.
    ///
    /// Never fails: subjects the parser does not understand still produce a
    /// classification.
    fn classify(&self, subject: &str) -> ClassifiedCommit;
}
