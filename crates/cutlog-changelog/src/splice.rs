//! Splicing a rendered release section into the changelog document

use cutlog_core::config::ChangelogConfig;
use regex::Regex;
use tracing::{debug, warn};

/// Replaces the pending section of a changelog with a fresh placeholder
/// followed by a new release section.
#[derive(Debug, Clone)]
pub struct DocumentSplicer {
    heading: String,
    placeholder: String,
    pending: Regex,
}

impl DocumentSplicer {
    /// Create a splicer for the configured pending heading
    pub fn new(config: &ChangelogConfig) -> Self {
        Self::with_heading(&config.unreleased_heading, &config.placeholder)
    }

    /// Create a splicer with an explicit heading and placeholder line
    pub fn with_heading(heading: &str, placeholder: &str) -> Self {
        // Heading through to the next `## [` heading, or end of document
        let pattern = format!(r"{}(?s:.*?)(?P<end>\n## \[|\z)", regex::escape(heading));
        Self {
            heading: heading.to_string(),
            placeholder: placeholder.to_string(),
            pending: Regex::new(&pattern).expect("escaped heading is a valid regex"),
        }
    }

    fn replacement(&self, section: &str) -> String {
        format!("{}\n\n{}\n\n{}\n\n", self.heading, self.placeholder, section)
    }

    /// Insert `section` under the pending heading of `document`
    pub fn splice(&self, document: &str, section: &str) -> String {
        if let Some(updated) = self.splice_pending(document, section) {
            debug!("replaced pending section");
            return updated;
        }

        if let Some(updated) = self.splice_literal(document, section) {
            debug!("replaced pending section by literal search");
            return updated;
        }

        warn!(heading = %self.heading, "pending heading not found, appending release section");
        format!("{}\n\n{}\n", document, section)
    }

    /// Regex splice; `None` when nothing matched or nothing changed
    fn splice_pending(&self, document: &str, section: &str) -> Option<String> {
        let caps = self.pending.captures(document)?;
        let start = caps.get(0)?.start();
        let end = caps.name("end")?.start();

        let updated = format!(
            "{}{}{}",
            &document[..start],
            self.replacement(section),
            &document[end..]
        );
        (updated != document).then_some(updated)
    }

    /// Literal-search splice up to the next `\n## ` line
    fn splice_literal(&self, document: &str, section: &str) -> Option<String> {
        let start = document.find(&self.heading)?;
        let end = document[start + 1..]
            .find("\n## ")
            .map(|offset| start + 1 + offset)
            .unwrap_or(document.len());

        Some(format!(
            "{}{}{}",
            &document[..start],
            self.replacement(section),
            &document[end..]
        ))
    }
}

impl Default for DocumentSplicer {
    fn default() -> Self {
        Self::new(&ChangelogConfig::default())
    }
}
