//! Changelog types

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Changelog category a commit is filed under.
///
/// Declaration order is the display order of a release section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Category {
    /// New features
    Added,
    /// Refactoring, style and unknown commit types
    Changed,
    /// Bug fixes
    Fixed,
    /// Performance improvements
    Performance,
    /// Documentation
    Documentation,
    /// Tests
    Tests,
    /// Continuous integration
    #[serde(rename = "CI/CD")]
    CiCd,
    /// Build system
    Build,
    /// Chores
    Miscellaneous,
    /// Commits not following the conventional format
    Other,
}

impl Category {
    /// All categories in display order
    pub const ALL: [Category; 10] = [
        Self::Added,
        Self::Changed,
        Self::Fixed,
        Self::Performance,
        Self::Documentation,
        Self::Tests,
        Self::CiCd,
        Self::Build,
        Self::Miscellaneous,
        Self::Other,
    ];

    /// Heading title used in the changelog
    pub fn title(&self) -> &'static str {
        match self {
            Self::Added => "Added",
            Self::Changed => "Changed",
            Self::Fixed => "Fixed",
            Self::Performance => "Performance",
            Self::Documentation => "Documentation",
            Self::Tests => "Tests",
            Self::CiCd => "CI/CD",
            Self::Build => "Build",
            Self::Miscellaneous => "Miscellaneous",
            Self::Other => "Other",
        }
    }

    /// Map a conventional commit type to its category.
    ///
    /// Unknown types are filed under `Changed`.
    pub fn from_commit_type(commit_type: &str) -> Self {
        match commit_type.to_lowercase().as_str() {
            "feat" | "feature" => Self::Added,
            "fix" | "bugfix" => Self::Fixed,
            "perf" | "performance" => Self::Performance,
            "refactor" | "style" => Self::Changed,
            "docs" => Self::Documentation,
            "test" => Self::Tests,
            "ci" => Self::CiCd,
            "build" => Self::Build,
            "chore" => Self::Miscellaneous,
            _ => Self::Changed,
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.title())
    }
}

/// A commit subject split into category and description
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassifiedCommit {
    /// Category derived from the commit type
    pub category: Category,
    /// Lowercased commit type, `None` for non-conventional subjects
    pub commit_type: Option<String>,
    /// Raw description
    pub description: String,
}

/// A single automated dependency upgrade
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DependencyBump {
    /// Package name
    pub package: String,
    /// Version bumped to
    pub version: String,
}

impl DependencyBump {
    /// Create a new dependency bump
    pub fn new(package: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            package: package.into(),
            version: version.into(),
        }
    }

    /// Single-line changelog text for this bump
    pub fn line(&self) -> String {
        format!("Update `{}` to `{}`", self.package, self.version)
    }
}

/// Outcome of rewriting a commit description
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transformed {
    /// Nothing worth a changelog line
    Discard,
    /// A dependency bump, merged later with its siblings
    DependencyBump(DependencyBump),
    /// A finished changelog line
    Text(String),
}

impl Transformed {
    /// Attach a category, dropping discarded descriptions
    pub fn into_entry(self, category: Category) -> Option<ChangelogEntry> {
        let kind = match self {
            Self::Discard => return None,
            Self::DependencyBump(bump) => EntryKind::DependencyBump(bump),
            Self::Text(text) => EntryKind::Text(text),
        };
        Some(ChangelogEntry { category, kind })
    }
}

/// Content of a changelog entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryKind {
    /// Display line
    Text(String),
    /// Dependency bump awaiting merge
    DependencyBump(DependencyBump),
}

/// A categorized changelog entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangelogEntry {
    /// Category the entry is listed under
    pub category: Category,
    /// Entry content
    pub kind: EntryKind,
}

impl ChangelogEntry {
    /// Normalized form used to detect duplicates within a category.
    ///
    /// Lowercased, with whitespace and trailing sentence punctuation removed.
    pub fn dedup_key(&self) -> String {
        let text = match &self.kind {
            EntryKind::Text(text) => text.clone(),
            EntryKind::DependencyBump(bump) => {
                format!("Update {} to {}", bump.package, bump.version)
            }
        };

        let mut key: String = text
            .to_lowercase()
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect();
        while key.ends_with(['.', '!', '?']) {
            key.pop();
        }
        key
    }
}

/// One dated release section of the changelog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReleaseSection {
    /// Release label, with leading `v`
    pub label: String,
    /// Formatted release date
    pub date: String,
    /// Display lines per category, in display order
    pub categories: BTreeMap<Category, Vec<String>>,
}

impl ReleaseSection {
    /// Create an empty section
    pub fn new(label: impl Into<String>, date: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            date: date.into(),
            categories: BTreeMap::new(),
        }
    }

    /// Set the lines of a category; empty categories are not kept
    pub fn set_lines(&mut self, category: Category, lines: Vec<String>) {
        if lines.is_empty() {
            self.categories.remove(&category);
        } else {
            self.categories.insert(category, lines);
        }
    }

    /// Lines listed under a category
    pub fn lines(&self, category: Category) -> &[String] {
        self.categories
            .get(&category)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Number of categories with at least one line
    pub fn category_count(&self) -> usize {
        self.categories.len()
    }

    /// Check if the section has no lines
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}
