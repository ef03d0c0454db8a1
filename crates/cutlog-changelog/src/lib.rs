//! cutlog changelog - turning commit subjects into a changelog section
//!
//! Classifies conventional commit subjects, rewrites their descriptions into
//! short changelog lines, merges duplicates and dependency bumps, renders a
//! Markdown release section and splices it into an existing changelog.

pub mod formatter;
pub mod generator;
pub mod merge;
pub mod parser;
pub mod splice;
pub mod transform;
pub mod types;

pub use generator::{ChangelogGenerator, GeneratedRelease};
pub use parser::{CommitParser, ConventionalParser};
pub use types::{Category, ChangelogEntry, ReleaseSection, Transformed};
