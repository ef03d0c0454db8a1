//! Tag operations

use regex::Regex;
use tracing::{debug, instrument};

use crate::repository::GitRepo;

impl GitRepo {
    /// List tag names, highest version first
    pub fn tags_by_version(&self) -> Vec<String> {
        self.run_or_empty(&["tag", "-l", "--sort=-v:refname"])
            .split('\n')
            .map(str::to_string)
            .collect()
    }

    /// Find the most recent tag matching the release pattern.
    ///
    /// `None` means no release has been tagged yet.
    #[instrument(skip(self, pattern), fields(pattern = pattern.as_str()))]
    pub fn find_latest_tag(&self, pattern: &Regex) -> Option<String> {
        let latest = self
            .tags_by_version()
            .into_iter()
            .find(|tag| !tag.is_empty() && pattern.is_match(tag));
        debug!(latest = ?latest, "found latest tag");
        latest
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{init_repo, repo_with_commits, tag_head};

    fn release_pattern() -> Regex {
        Regex::new(r"^v?\d+\.\d+\.\d+").unwrap()
    }

    #[test]
    fn test_latest_tag_uses_version_order() {
        let (temp, repo) = repo_with_commits(&["feat: one"]);
        tag_head(temp.path(), "v1.2.0");
        tag_head(temp.path(), "v1.10.0");
        tag_head(temp.path(), "v1.9.3");

        assert_eq!(repo.find_latest_tag(&release_pattern()), Some("v1.10.0".to_string()));
    }

    #[test]
    fn test_latest_tag_skips_non_release_tags() {
        let (temp, repo) = repo_with_commits(&["feat: one"]);
        tag_head(temp.path(), "1.0.0");
        tag_head(temp.path(), "nightly");
        tag_head(temp.path(), "vnext");

        assert_eq!(repo.find_latest_tag(&release_pattern()), Some("1.0.0".to_string()));
    }

    #[test]
    fn test_no_tags() {
        let (_temp, repo) = repo_with_commits(&["feat: one"]);
        assert_eq!(repo.tags_by_version(), vec![String::new()]);
        assert!(repo.find_latest_tag(&release_pattern()).is_none());
    }

    #[test]
    fn test_not_a_repository_has_no_tags() {
        let temp = tempfile::TempDir::new().unwrap();
        let repo = GitRepo::open(temp.path().join("gone"));
        assert!(repo.find_latest_tag(&release_pattern()).is_none());
    }

    #[test]
    fn test_empty_repository_has_no_tags() {
        let (_temp, repo) = init_repo();
        assert!(repo.find_latest_tag(&release_pattern()).is_none());
    }
}
