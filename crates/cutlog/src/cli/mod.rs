//! CLI definition and command handling

pub mod output;
mod update;

use std::path::PathBuf;

use chrono::{Local, NaiveDate};
use clap::Parser;
use console::style;
use serde::Serialize;
use tracing::info;

use cutlog_changelog::ReleaseSection;
use cutlog_core::error::ChangelogError;
use cutlog_core::{ReleaseTag, RunSummary};

use update::{UpdateOptions, UpdateOutcome};

/// cutlog - cut a release section into CHANGELOG.md from git history
#[derive(Debug, Parser)]
#[command(name = "cutlog")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Tag of the new release, e.g. 1.2.3 or v1.2.3
    #[arg(value_name = "TAG")]
    pub tag: String,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Suppress output except errors
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(long, default_value = "text")]
    pub format: OutputFormat,

    /// Working directory
    #[arg(short = 'C', long)]
    pub directory: Option<PathBuf>,

    /// Print the new release section instead of writing the changelog
    #[arg(long)]
    pub dry_run: bool,

    /// Release date (YYYY-MM-DD), defaults to today
    #[arg(long, value_parser = parse_date)]
    pub date: Option<NaiveDate>,
}

/// Output format for CLI
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text output
    #[default]
    Text,
    /// JSON output
    Json,
}

fn parse_date(value: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map_err(|_| ChangelogError::InvalidDate(value.to_string()).to_string())
}

/// JSON report of a run
#[derive(Debug, Serialize)]
struct Report<'a> {
    file: &'a std::path::Path,
    dry_run: bool,
    previous_tag: Option<&'a str>,
    summary: &'a RunSummary,
    section: &'a ReleaseSection,
}

impl Cli {
    /// Execute the CLI command
    pub fn execute(self) -> anyhow::Result<()> {
        if let Some(dir) = &self.directory {
            std::env::set_current_dir(dir)?;
        }
        let cwd = std::env::current_dir()?;

        let options = UpdateOptions {
            tag: ReleaseTag::new(&self.tag),
            date: self.date.unwrap_or_else(|| Local::now().date_naive()),
            dry_run: self.dry_run,
        };
        info!(tag = %options.tag, date = %options.date, dry_run = self.dry_run, "updating changelog");

        let outcome = update::run(&cwd, &options)?;
        self.report(&outcome)
    }

    fn report(&self, outcome: &UpdateOutcome) -> anyhow::Result<()> {
        let summary = &outcome.release.summary;

        match self.format {
            OutputFormat::Json => {
                let report = Report {
                    file: &outcome.path,
                    dry_run: self.dry_run,
                    previous_tag: outcome.previous_tag.as_deref(),
                    summary,
                    section: &outcome.release.section,
                };
                println!("{}", serde_json::to_string_pretty(&report)?);
            }
            OutputFormat::Text if self.dry_run => {
                println!("{}", outcome.rendered);
            }
            OutputFormat::Text => {
                if self.quiet {
                    return Ok(());
                }
                if outcome.previous_tag.is_none() {
                    output::info("No release tag found, using the full history");
                }
                let name = outcome
                    .path
                    .file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_else(|| outcome.path.display().to_string());
                println!(
                    "Updated {} with {} commits in {} categories",
                    style(name).cyan(),
                    summary.commits,
                    summary.categories
                );
            }
        }

        Ok(())
    }
}
