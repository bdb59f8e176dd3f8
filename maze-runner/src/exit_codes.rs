//! Stable exit codes for maze-runner CLI commands.

/// Command succeeded.
pub const OK: i32 = 0;
/// Command failed due to an invalid maze file, coordinate, or config.
pub const INVALID: i32 = 1;
/// `maze-runner solve` exhausted its step cap without reaching the goal.
pub const UNREACHABLE: i32 = 2;
