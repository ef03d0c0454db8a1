//! Changelog file workflow for cutlog

mod changelog;

pub use changelog::*;
