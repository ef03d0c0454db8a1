//! Core types for cutlog

use serde::{Deserialize, Serialize};
use tracing::warn;

/// The release being cut, as given on the command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleaseTag {
    /// Display label, always with a leading `v`
    pub label: String,
    /// Parsed version, when the tag is valid semver
    pub version: Option<semver::Version>,
}

impl ReleaseTag {
    /// Normalize a raw tag such as `1.2.3` or `v1.2.3`
    pub fn new(raw: &str) -> Self {
        let raw = raw.trim();
        let label = if raw.starts_with('v') {
            raw.to_string()
        } else {
            format!("v{}", raw)
        };

        let bare = label.trim_start_matches('v');
        let version = match semver::Version::parse(bare) {
            Ok(version) => Some(version),
            Err(e) => {
                warn!(tag = raw, error = %e, "release tag is not a semantic version");
                None
            }
        };

        Self { label, version }
    }

    /// The label without its leading `v`
    pub fn bare(&self) -> &str {
        self.label.trim_start_matches('v')
    }
}

impl std::fmt::Display for ReleaseTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.label)
    }
}

/// Result of one changelog update
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunSummary {
    /// Commits that survived merge and empty filtering
    pub commits: usize,
    /// Categories with at least one entry
    pub categories: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tag_gets_v_prefix() {
        let tag = ReleaseTag::new("1.2.3");
        assert_eq!(tag.label, "v1.2.3");
        assert_eq!(tag.bare(), "1.2.3");
        assert_eq!(tag.version, Some(semver::Version::new(1, 2, 3)));
    }

    #[test]
    fn test_tag_keeps_existing_prefix() {
        let tag = ReleaseTag::new("v2.0.0-rc.1");
        assert_eq!(tag.to_string(), "v2.0.0-rc.1");
        assert!(tag.version.as_ref().is_some_and(|v| !v.pre.is_empty()));
    }

    #[test]
    fn test_non_semver_tag_is_accepted() {
        let tag = ReleaseTag::new("2024.06");
        assert_eq!(tag.label, "v2024.06");
        assert!(tag.version.is_none());
    }
}
