//! Maze file access.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

/// Read a maze text file into memory.
pub fn read_maze_text(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("read maze file {}", path.display()))
}
