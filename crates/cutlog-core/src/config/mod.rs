//! Configuration system for cutlog

pub mod defaults;
mod loader;
mod types;
pub mod validation;

pub use defaults::*;
pub use loader::*;
pub use types::*;
pub use validation::*;
