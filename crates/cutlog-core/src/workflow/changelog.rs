//! Changelog file operations

use std::path::Path;

use tracing::{debug, info, instrument};

use crate::error::{ChangelogError, Result};

/// Read the existing changelog.
///
/// A missing file is an error: the changelog must exist before a release
/// section can be spliced into it.
#[instrument(fields(path = %path.display()))]
pub fn read_changelog(path: &Path) -> Result<String> {
    if !path.is_file() {
        debug!(path = %path.display(), "changelog file not found");
        return Err(ChangelogError::FileNotFound(path.to_path_buf()).into());
    }

    let content = std::fs::read_to_string(path)?;
    debug!(path = %path.display(), bytes = content.len(), "read existing changelog");
    Ok(content)
}

/// Write the full changelog content back to disk
#[instrument(skip(content), fields(path = %path.display(), bytes = content.len()))]
pub fn write_changelog(path: &Path, content: &str) -> Result<()> {
    std::fs::write(path, content).map_err(|source| ChangelogError::WriteFailed {
        path: path.to_path_buf(),
        source,
    })?;
    info!(path = %path.display(), "changelog written");
    Ok(())
}
