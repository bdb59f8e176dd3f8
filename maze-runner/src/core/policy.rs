//! Left-hand wall-following policy.
//!
//! Given the walls around the runner, pick the single move for this step.
//! Preference order: left opening, then straight ahead, then right opening,
//! then a 180-degree reversal. Hugging the left wall this way is guaranteed
//! to reach any goal in a maze whose walls are all connected to the border.

use crate::core::grid::SideWalls;
use crate::core::runner::Turn;

/// One decided step: the turns to apply before moving forward, plus the
/// action code recorded in the exploration log.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Move {
    pub turns: &'static [Turn],
    pub code: &'static str,
}

/// Decide the next move from the walls around the runner.
pub fn decide(sides: SideWalls) -> Move {
    if !sides.left {
        Move {
            turns: &[Turn::Left],
            code: "LF",
        }
    } else if !sides.front {
        Move {
            turns: &[],
            code: "F",
        }
    } else if !sides.right {
        Move {
            turns: &[Turn::Right],
            code: "RF",
        }
    } else {
        // Dead end: turn around with two left quarter turns.
        Move {
            turns: &[Turn::Left, Turn::Left],
            code: "LLF",
        }
    }
}
