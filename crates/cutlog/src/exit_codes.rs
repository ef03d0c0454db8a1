//! Exit codes for the CLI

/// Success
pub const SUCCESS: i32 = 0;

/// Missing argument, missing changelog or any other failure
pub const ERROR: i32 = 1;
