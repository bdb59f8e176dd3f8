//! Wall-following exploration of a maze.
//!
//! Drives a [`Runner`] from its current cell to a goal cell by hugging the
//! left wall, recording every step into an injected [`StepSink`]. The loop
//! is bounded: once the step cap is hit the goal is declared unreachable.

use thiserror::Error;
use tracing::{debug, instrument, trace};

use crate::core::grid::{Grid, GridError};
use crate::core::policy;
use crate::core::runner::Runner;
use crate::core::types::Coord;
use crate::io::exploration_log::{StepRecord, StepSink};

/// Reason why an exploration failed.
#[derive(Debug, Error)]
pub enum ExploreError {
    /// The step cap was exhausted without reaching the goal. With the
    /// automatic cap of four steps per cell this means no route exists.
    #[error("goal {goal} is unreachable from {start}: gave up after {steps} steps")]
    GoalUnreachable {
        start: Coord,
        goal: Coord,
        steps: usize,
    },
    /// A grid query failed mid-run. Walls cannot appear while exploring, so
    /// this means the runner was placed outside the maze or the maze has an
    /// inconsistent wall record.
    #[error("exploration violated a maze invariant: {0}")]
    Grid(#[from] GridError),
    #[error("write exploration log: {0}")]
    Log(#[from] std::io::Error),
}

/// Result of a completed exploration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Exploration {
    /// Every cell the runner occupied, in visit order, starting cell first.
    pub trace: Vec<Coord>,
    /// Concatenated action codes, one code per step.
    pub actions: String,
    /// Number of forward moves performed.
    pub steps: usize,
}

/// Explore until the runner stands on `goal`, or fail after `max_steps`.
///
/// Each step senses the walls around the runner, turns toward the first
/// opening in left-front-right order (reversing in a dead end), moves one
/// cell, and records the step. Records carry the pre-move cell and a step
/// number starting at 1; the returned trace carries the post-move cells,
/// starting cell included.
#[instrument(skip_all, fields(start = %runner.position(), goal = %goal, max_steps))]
pub fn explore<S: StepSink>(
    grid: &Grid,
    runner: &mut Runner,
    goal: Coord,
    max_steps: usize,
    sink: &mut S,
) -> Result<Exploration, ExploreError> {
    let start = runner.position();
    let mut trace = vec![start];
    let mut actions = String::new();
    let mut steps = 0usize;

    while runner.position() != goal {
        if steps >= max_steps {
            return Err(ExploreError::GoalUnreachable { start, goal, steps });
        }

        let before = runner.position();
        let sides = grid.sense_walls(runner)?;
        let mv = policy::decide(sides);
        for &turn in mv.turns {
            runner.turn(turn);
        }
        grid.move_forward(runner)?;
        steps += 1;

        sink.record_step(&StepRecord {
            step: steps,
            x: before.x,
            y: before.y,
            actions: mv.code,
        })?;
        trace.push(runner.position());
        actions.push_str(mv.code);
        trace!(step = steps, from = %before, to = %runner.position(), code = mv.code, "step");
    }

    debug!(steps, visited = trace.len(), "goal reached");
    Ok(Exploration {
        trace,
        actions,
        steps,
    })
}
