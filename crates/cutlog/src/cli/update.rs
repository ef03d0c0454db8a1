//! Update workflow: git history in, spliced changelog out

use std::fmt::Write as _;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use regex::Regex;
use tracing::{debug, info, instrument};

use cutlog_changelog::{ChangelogGenerator, GeneratedRelease};
use cutlog_core::config::load_config_or_default;
use cutlog_core::error::ConfigError;
use cutlog_core::workflow::{read_changelog, write_changelog};
use cutlog_core::{ReleaseTag, Result};
use cutlog_git::GitRepo;

/// Options for a single update run
#[derive(Debug, Clone)]
pub struct UpdateOptions {
    /// Tag of the new release
    pub tag: ReleaseTag,
    /// Release date
    pub date: NaiveDate,
    /// Render only, leave the changelog untouched
    pub dry_run: bool,
}

/// Result of an update run
#[derive(Debug)]
pub struct UpdateOutcome {
    /// Generated section and summary
    pub release: GeneratedRelease,
    /// Rendered Markdown of the section
    pub rendered: String,
    /// Changelog file that was (or would be) written
    pub path: PathBuf,
    /// Latest release tag before this one
    pub previous_tag: Option<String>,
}

/// Generate a release section from history and splice it into the changelog
#[instrument(skip(options), fields(tag = %options.tag, dry_run = options.dry_run))]
pub fn run(cwd: &Path, options: &UpdateOptions) -> Result<UpdateOutcome> {
    let (config, config_path) = load_config_or_default(cwd)?;
    if let Some(path) = &config_path {
        debug!(path = %path.display(), "using config");
    }

    let path = cwd.join(&config.changelog.file);
    let document = read_changelog(&path)?;

    let tag_pattern = Regex::new(&config.git.tag_pattern).map_err(|e| ConfigError::InvalidValue {
        field: "git.tag_pattern".to_string(),
        message: e.to_string(),
    })?;
    let date = format_date(options.date, &config.changelog.date_format)?;

    let repo = GitRepo::open(cwd);
    let previous_tag = repo.find_latest_tag(&tag_pattern);
    let subjects = repo.commit_subjects(previous_tag.as_deref());
    info!(
        previous_tag = previous_tag.as_deref().unwrap_or("none"),
        subject_count = subjects.len(),
        "collected commit subjects"
    );

    let generator = ChangelogGenerator::new(config);
    let release = generator.generate(&options.tag, &date, &subjects);
    let rendered = generator.format(&release.section);

    if options.dry_run {
        info!("dry run, changelog not written");
    } else {
        let updated = generator.update_document(&document, &release.section);
        write_changelog(&path, &updated)?;
    }

    Ok(UpdateOutcome {
        release,
        rendered,
        path,
        previous_tag,
    })
}

fn format_date(date: NaiveDate, format: &str) -> Result<String> {
    let mut out = String::new();
    write!(out, "{}", date.format(format)).map_err(|_| ConfigError::InvalidValue {
        field: "changelog.date_format".to_string(),
        message: format!("unsupported format string '{}'", format),
    })?;
    Ok(out)
}
