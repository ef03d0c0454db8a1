//! Markdown changelog formatter

use tracing::{debug, instrument};

use super::ChangelogFormatter;
use crate::types::{Category, ReleaseSection};

/// Markdown release section formatter
#[derive(Debug, Default)]
pub struct MarkdownFormatter;

impl MarkdownFormatter {
    /// Create a new markdown formatter
    pub fn new() -> Self {
        Self
    }
}

impl ChangelogFormatter for MarkdownFormatter {
    #[instrument(skip(self, section), fields(label = %section.label, category_count = section.category_count()))]
    fn format(&self, section: &ReleaseSection) -> String {
        let mut lines = vec![format!("## [{}] - {}", section.label, section.date), String::new()];

        for category in Category::ALL {
            let entries = section.lines(category);
            if entries.is_empty() {
                continue;
            }

            lines.push(format!("### {}", category));
            lines.push(String::new());
            lines.extend(entries.iter().map(|entry| format!("- {}", entry)));
            lines.push(String::new());
        }

        if lines.last().is_some_and(String::is_empty) {
            lines.pop();
        }

        let output = lines.join("\n");
        debug!(output_len = output.len(), "markdown section formatted");
        output
    }
}
