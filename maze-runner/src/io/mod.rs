//! I/O helpers for maze-runner commands.

pub mod config;
pub mod exploration_log;
pub mod maze_file;
pub mod statistics;
