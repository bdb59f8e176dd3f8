//! Maze solving by left-hand wall following.
//!
//! This crate parses rectangular mazes from a character-grid text format,
//! walks a runner from a starting cell to a goal cell by hugging the left
//! wall, and reduces the wandering trace to a loop-free path. The
//! architecture enforces a strict separation:
//!
//! - **[`core`]**: Pure, deterministic logic (grid, policy, parsing, path
//!   trimming). No I/O, fully testable in isolation.
//! - **[`io`]**: Side-effecting operations (maze files, exploration log,
//!   statistics, config). Isolated to enable mocking in tests.
//!
//! Orchestration modules ([`explore`], [`solve`], [`coords`]) coordinate
//! core logic with I/O to implement CLI commands.

pub mod coords;
pub mod core;
pub mod exit_codes;
pub mod explore;
pub mod io;
pub mod logging;
pub mod solve;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;
