//! Output formatting utilities

use console::style;

/// Print an error message
pub fn error(message: &str) {
    eprintln!("{} {}", style("✗").red().bold(), message);
}

/// Print an info message to stderr, keeping stdout for results
pub fn info(message: &str) {
    eprintln!("{} {}", style("→").blue(), message);
}
