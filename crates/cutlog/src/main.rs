//! cutlog - cut a release section into CHANGELOG.md from git history

mod cli;
mod exit_codes;

use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use cli::{output, Cli};

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if e.kind() == ErrorKind::MissingRequiredArgument => {
            println!("{}", Cli::command().render_usage());
            std::process::exit(exit_codes::ERROR);
        }
        Err(e) => e.exit(),
    };

    let guard = init_tracing(cli.verbose);

    let code = match cli.execute() {
        Ok(()) => exit_codes::SUCCESS,
        Err(e) => {
            output::error(&format!("{:#}", e));
            exit_codes::ERROR
        }
    };

    // Flush the file logger before exiting
    drop(guard);
    std::process::exit(code);
}

/// Set up tracing with two layers:
/// - Console: controlled by RUST_LOG (default: warn, `--verbose`: debug)
/// - File: always debug-level JSON to ~/.cutlog/logs/
fn init_tracing(verbose: bool) -> Option<tracing_appender::non_blocking::WorkerGuard> {
    let console_filter = || {
        if verbose {
            EnvFilter::new("debug")
        } else {
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
        }
    };

    if let Some(log_dir) = log_directory() {
        let file_appender = tracing_appender::rolling::daily(&log_dir, "cutlog.log");
        let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

        tracing_subscriber::registry()
            .with(
                tracing_subscriber::fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(false)
                    .with_filter(console_filter()),
            )
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(non_blocking)
                    .with_target(true)
                    .with_filter(EnvFilter::new("debug")),
            )
            .init();

        return Some(guard);
    }

    // Fallback: console only
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_filter(console_filter()),
        )
        .init();

    None
}

/// Returns the log directory path, creating it if needed.
fn log_directory() -> Option<std::path::PathBuf> {
    let log_dir = dirs::home_dir()?.join(".cutlog").join("logs");
    std::fs::create_dir_all(&log_dir).ok()?;
    Some(log_dir)
}
