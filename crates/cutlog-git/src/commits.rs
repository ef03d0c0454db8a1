//! Commit history operations

use tracing::{debug, instrument};

use crate::repository::GitRepo;

impl GitRepo {
    /// Get commit subjects reachable from HEAD, newest first.
    ///
    /// With a tag, only commits after that tag are listed. The result is
    /// the raw output split on newlines, so "no commits" comes back as a
    /// single empty string.
    #[instrument(skip(self))]
    pub fn commit_subjects(&self, since_tag: Option<&str>) -> Vec<String> {
        let range = match since_tag {
            Some(tag) => format!("{}..HEAD", tag),
            None => "HEAD".to_string(),
        };

        let subjects: Vec<String> = self
            .run_or_empty(&["log", "--pretty=format:%s", &range])
            .split('\n')
            .map(str::to_string)
            .collect();

        debug!(count = subjects.len(), range = %range, "listed commit subjects");
        subjects
    }
}
