//! Statistics file output.
//!
//! The statistics file is plain text. Solving a maze first truncates the
//! file and writes the maze file name, then appends one block per run:
//! the score, the exploration step count, the loop-trimmed path as
//! space-separated `(x, y)` pairs, and the path length.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};

use crate::core::types::Coord;

/// Figures of one finished run.
#[derive(Debug, Clone, Copy)]
pub struct RunStats<'a> {
    pub score: f64,
    pub steps: usize,
    pub path: &'a [Coord],
}

/// Truncate the statistics file and write the maze file name.
pub fn write_stats_header(path: &Path, maze_file: &str) -> Result<()> {
    std::fs::write(path, format!("{maze_file}\n"))
        .with_context(|| format!("write statistics {}", path.display()))
}

/// Append one run block to the statistics file.
pub fn append_run_stats(path: &Path, stats: &RunStats<'_>) -> Result<()> {
    let mut file = OpenOptions::new()
        .append(true)
        .create(true)
        .open(path)
        .with_context(|| format!("open statistics {}", path.display()))?;

    let pairs = stats
        .path
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ");
    let block = format!(
        "{}\n{}\n{}\n{}\n",
        stats.score,
        stats.steps,
        pairs,
        stats.path.len()
    );
    file.write_all(block.as_bytes())
        .with_context(|| format!("write statistics {}", path.display()))
}
