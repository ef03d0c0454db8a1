//! cutlog core - shared types for changelog generation
//!
//! This crate provides configuration loading, error types, the release tag
//! type and reading/writing of the changelog file.

pub mod config;
pub mod error;
pub mod types;
pub mod workflow;

pub use error::{CutlogError, Result};
pub use types::{ReleaseTag, RunSummary};
