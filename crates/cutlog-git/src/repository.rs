//! Git repository access through the git CLI

use std::path::{Path, PathBuf};
use std::process::Command;

use tracing::{debug, instrument};

use cutlog_core::error::GitError;

/// Git repository wrapper.
///
/// Every command runs with the repository root as working directory.
#[derive(Debug, Clone)]
pub struct GitRepo {
    path: PathBuf,
}

impl GitRepo {
    /// Use the repository at (or containing) the given path
    pub fn open(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Get the repository path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Run git and return its trimmed standard output
    pub(crate) fn run(&self, args: &[&str]) -> Result<String, GitError> {
        let start = std::time::Instant::now();
        let output = Command::new("git")
            .current_dir(&self.path)
            .args(args)
            .output()
            .map_err(GitError::SpawnFailed)?;

        debug!(
            args = %args.join(" "),
            duration_ms = start.elapsed().as_millis(),
            success = output.status.success(),
            "git (CLI)"
        );

        if !output.status.success() {
            return Err(GitError::CommandFailed {
                args: args.join(" "),
                status: output.status.to_string(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    }

    /// Run git, reading any failure as empty output
    #[instrument(skip(self), fields(path = %self.path.display()))]
    pub(crate) fn run_or_empty(&self, args: &[&str]) -> String {
        self.run(args).unwrap_or_else(|e| {
            debug!(error = %e, "git failed, treating output as empty");
            String::new()
        })
    }
}
