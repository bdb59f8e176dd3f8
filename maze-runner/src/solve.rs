//! End-to-end maze solving: read, parse, explore, trim, report.

use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::{debug, info, instrument};

use crate::coords;
use crate::core::parse;
use crate::core::path::{extract_path, score};
use crate::core::render;
use crate::core::runner::{Orientation, Runner};
use crate::core::types::Coord;
use crate::explore::explore;
use crate::io::config::SolveConfig;
use crate::io::exploration_log::CsvStepLog;
use crate::io::maze_file::read_maze_text;
use crate::io::statistics::{RunStats, append_run_stats, write_stats_header};

/// Parameters of one solve invocation.
#[derive(Debug, Clone)]
pub struct SolveRequest {
    /// Path of the maze text file.
    pub maze_path: PathBuf,
    /// Starting cell; the bottom-left corner when absent.
    pub starting: Option<Coord>,
    /// Goal cell; the top-right corner when absent.
    pub goal: Option<Coord>,
}

/// Everything a finished run reports.
#[derive(Debug, Clone, PartialEq)]
pub struct SolveOutcome {
    pub start: Coord,
    pub goal: Coord,
    pub steps: usize,
    pub actions: String,
    pub path: Vec<Coord>,
    pub score: f64,
}

/// Solve a maze end to end.
///
/// Reads and parses the maze file, explores from the starting cell to the
/// goal by wall following, trims loops out of the trace, and writes the
/// exploration log and statistics files named by `config`. The statistics
/// file is started (maze file name line) before parsing, matching the
/// file's role as a record of the attempt rather than of success.
#[instrument(skip_all, fields(maze = %request.maze_path.display()))]
pub fn solve(request: &SolveRequest, config: &SolveConfig) -> Result<SolveOutcome> {
    let text = read_maze_text(&request.maze_path)?;
    write_stats_header(
        &config.statistics_file,
        &request.maze_path.display().to_string(),
    )?;

    let grid = parse::build_grid(&text)
        .with_context(|| format!("parse maze file {}", request.maze_path.display()))?;
    info!(width = grid.width(), height = grid.height(), "maze parsed");

    let start = request.starting.unwrap_or_default();
    let goal = request
        .goal
        .unwrap_or_else(|| Coord::new(grid.width() - 1, grid.height() - 1));
    coords::ensure_in_bounds(start, grid.width(), grid.height()).context("starting position")?;
    coords::ensure_in_bounds(goal, grid.width(), grid.height()).context("goal position")?;

    let mut runner = Runner::new(start.x, start.y, Orientation::North);
    debug!(maze = %render::render_with_runner(&grid, &runner), "initial state");

    let mut log = CsvStepLog::create(&config.exploration_log)
        .with_context(|| format!("create exploration log {}", config.exploration_log.display()))?;
    let cap = config.step_cap(grid.width(), grid.height());
    let exploration = explore(&grid, &mut runner, goal, cap, &mut log)?;
    log.finish()
        .with_context(|| format!("flush exploration log {}", config.exploration_log.display()))?;

    let path = extract_path(&exploration.trace);
    let run_score = score(exploration.steps, &path);
    append_run_stats(
        &config.statistics_file,
        &RunStats {
            score: run_score,
            steps: exploration.steps,
            path: &path,
        },
    )?;
    info!(
        steps = exploration.steps,
        path_len = path.len(),
        score = run_score,
        "maze solved"
    );

    Ok(SolveOutcome {
        start,
        goal,
        steps: exploration.steps,
        actions: exploration.actions,
        path,
        score: run_score,
    })
}
