//! Test-only helpers: maze fixtures and scripted step sinks.

use std::io;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::io::config::SolveConfig;
use crate::io::exploration_log::{StepRecord, StepSink};

/// A 2x2 maze with one wall, between `(0, 0)` and `(0, 1)`.
pub const MAZE_2X2: &str = "\
#####
#...#
###.#
#...#
#####";

/// A 4x3 maze with a dead end near the top-left corner.
///
/// Hugging the left wall from `(0, 0)` to `(3, 2)` takes 7 steps
/// (`FRFLFLFLLFFF`) and trims to the 6-cell path
/// `(0, 0) (0, 1) (1, 1) (1, 2) (2, 2) (3, 2)`, scoring 7.75.
pub const MAZE_4X3: &str = "\
#########
#.......#
###.#.#.#
#...#...#
#.#.###.#
#...#...#
#########";

/// Sink that keeps step records in memory.
#[derive(Debug, Default)]
pub struct RecordingSink {
    pub records: Vec<StepRecord>,
}

impl StepSink for RecordingSink {
    fn record_step(&mut self, record: &StepRecord) -> io::Result<()> {
        self.records.push(*record);
        Ok(())
    }
}

/// A temporary directory holding a maze file and the output paths of one run.
pub struct TestMaze {
    dir: tempfile::TempDir,
    maze_path: PathBuf,
}

impl TestMaze {
    pub fn new(text: &str) -> Result<Self> {
        let dir = tempfile::tempdir().context("create temp maze dir")?;
        let maze_path = dir.path().join("maze.txt");
        std::fs::write(&maze_path, text).context("write maze file")?;
        Ok(Self { dir, maze_path })
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    pub fn maze_path(&self) -> &Path {
        &self.maze_path
    }

    /// Config whose output files live inside the temp directory.
    pub fn config(&self) -> SolveConfig {
        SolveConfig {
            exploration_log: self.root().join("exploration.csv"),
            statistics_file: self.root().join("statistics.txt"),
            max_steps: 0,
        }
    }

    pub fn exploration_log(&self) -> Result<String> {
        std::fs::read_to_string(self.root().join("exploration.csv"))
            .context("read exploration log")
    }

    pub fn statistics(&self) -> Result<String> {
        std::fs::read_to_string(self.root().join("statistics.txt")).context("read statistics")
    }
}
