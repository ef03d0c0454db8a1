//! Changelog formatters

mod markdown;

pub use markdown::MarkdownFormatter;

use crate::types::ReleaseSection;

/// Trait for release section formatters
pub trait ChangelogFormatter: Send + Sync {
    /// Render a release section to text
    fn format(&self, section: &ReleaseSection) -> String;
}
