//! Configuration types

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Changelog configuration
    pub changelog: ChangelogConfig,

    /// Git configuration
    pub git: GitConfig,
}

/// Changelog configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ChangelogConfig {
    /// Changelog file path, relative to the working directory
    pub file: PathBuf,

    /// Heading line of the pending section
    pub unreleased_heading: String,

    /// Line left under the pending heading after a release is cut
    pub placeholder: String,

    /// strftime format of the release date
    pub date_format: String,

    /// Soft limit for a single changelog line, in characters
    pub max_line_length: usize,

    /// A word break is only used when it falls past this many characters
    pub min_break_point: usize,

    /// Up to this many dependency bumps are listed one per line
    pub bump_group_threshold: usize,

    /// Packages named in a grouped dependency bump line
    pub bump_group_max_packages: usize,
}

impl Default for ChangelogConfig {
    fn default() -> Self {
        Self {
            file: PathBuf::from("CHANGELOG.md"),
            unreleased_heading: "## [Unreleased]".to_string(),
            placeholder: "- (Add new changes here)".to_string(),
            date_format: "%Y-%m-%d".to_string(),
            max_line_length: 80,
            min_break_point: 40,
            bump_group_threshold: 3,
            bump_group_max_packages: 5,
        }
    }
}

/// Git configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GitConfig {
    /// Pattern a tag must match to count as a release
    pub tag_pattern: String,

    /// Commit subjects starting with any of these are skipped
    pub merge_prefixes: Vec<String>,
}

impl Default for GitConfig {
    fn default() -> Self {
        Self {
            tag_pattern: r"^v?\d+\.\d+\.\d+".to_string(),
            merge_prefixes: vec!["Merge ".to_string(), "merge ".to_string()],
        }
    }
}

impl GitConfig {
    /// Whether a commit subject is merge noise
    pub fn is_merge_subject(&self, subject: &str) -> bool {
        self.merge_prefixes
            .iter()
            .any(|prefix| subject.starts_with(prefix.as_str()))
    }
}
