//! Conventional Commits parser
//!
//! Recognizes subjects of the form `type(scope)!: description`:
//! https://www.conventionalcommits.org/

use regex::Regex;
use std::sync::LazyLock;

use super::CommitParser;
use crate::types::{Category, ClassifiedCommit};

/// Regex for parsing conventional commit subjects
static CONVENTIONAL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(?P<type>\w+)(?:\([^)]+\))?!?:\s*(?P<description>.+)$")
        .expect("Invalid regex")
});

/// Parser for Conventional Commits subjects
#[derive(Debug, Default)]
pub struct ConventionalParser;

impl ConventionalParser {
    /// Create a new parser
    pub fn new() -> Self {
        Self
    }
}

impl CommitParser for ConventionalParser {
    fn classify(&self, subject: &str) -> ClassifiedCommit {
        let trimmed = subject.trim();

        match CONVENTIONAL_REGEX.captures(trimmed) {
            Some(caps) => {
                let commit_type = caps["type"].to_lowercase();
                ClassifiedCommit {
                    category: Category::from_commit_type(&commit_type),
                    commit_type: Some(commit_type),
                    description: caps["description"].trim().to_string(),
                }
            }
            None => ClassifiedCommit {
                category: Category::Other,
                commit_type: None,
                description: subject.to_string(),
            },
        }
    }
}
