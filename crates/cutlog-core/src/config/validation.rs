//! Configuration validation

use regex::Regex;
use tracing::debug;

use crate::error::{ConfigError, Result};

use super::types::Config;

/// Validate configuration
pub fn validate_config(config: &Config) -> Result<()> {
    debug!("validating configuration");
    validate_changelog(config)?;
    validate_git(config)?;
    debug!("configuration validation passed");
    Ok(())
}

fn invalid(field: &str, message: impl Into<String>) -> ConfigError {
    ConfigError::InvalidValue {
        field: field.to_string(),
        message: message.into(),
    }
}

fn validate_changelog(config: &Config) -> Result<()> {
    let changelog = &config.changelog;

    if changelog.file.as_os_str().is_empty() {
        return Err(invalid("changelog.file", "file cannot be empty").into());
    }

    if !changelog.unreleased_heading.starts_with("## ") {
        return Err(invalid(
            "changelog.unreleased_heading",
            "must be a level-two heading starting with '## '",
        )
        .into());
    }

    if changelog.max_line_length <= 3 {
        return Err(invalid("changelog.max_line_length", "must be greater than 3").into());
    }

    if changelog.min_break_point >= changelog.max_line_length {
        return Err(invalid(
            "changelog.min_break_point",
            "must be smaller than changelog.max_line_length",
        )
        .into());
    }

    if changelog.bump_group_threshold == 0 {
        return Err(invalid("changelog.bump_group_threshold", "must be at least 1").into());
    }

    if changelog.bump_group_max_packages == 0 {
        return Err(invalid("changelog.bump_group_max_packages", "must be at least 1").into());
    }

    Ok(())
}

fn validate_git(config: &Config) -> Result<()> {
    if let Err(e) = Regex::new(&config.git.tag_pattern) {
        return Err(invalid("git.tag_pattern", e.to_string()).into());
    }

    if config.git.merge_prefixes.iter().any(|p| p.is_empty()) {
        return Err(invalid("git.merge_prefixes", "prefixes cannot be empty").into());
    }

    Ok(())
}
