//! Runner state: position plus facing direction.
//!
//! A [`Runner`] is a plain value with no knowledge of walls. All movement
//! rules live in the grid and the wall-following policy; the runner only
//! records where it is and which way it faces.

use std::fmt;

use crate::core::types::Coord;

/// Compass facing of the runner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Orientation {
    North,
    East,
    South,
    West,
}

impl Orientation {
    /// The orientation reached by rotating 90 degrees in place.
    pub fn turned(self, turn: Turn) -> Self {
        match turn {
            Turn::Left => match self {
                Orientation::North => Orientation::West,
                Orientation::West => Orientation::South,
                Orientation::South => Orientation::East,
                Orientation::East => Orientation::North,
            },
            Turn::Right => match self {
                Orientation::North => Orientation::East,
                Orientation::East => Orientation::South,
                Orientation::South => Orientation::West,
                Orientation::West => Orientation::North,
            },
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Orientation::North => "north",
            Orientation::East => "east",
            Orientation::South => "south",
            Orientation::West => "west",
        };
        f.write_str(name)
    }
}

/// A 90-degree in-place rotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Turn {
    Left,
    Right,
}

/// Mutable exploration state: current cell plus orientation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Runner {
    pub x: usize,
    pub y: usize,
    pub orientation: Orientation,
}

impl Runner {
    pub fn new(x: usize, y: usize, orientation: Orientation) -> Self {
        Self { x, y, orientation }
    }

    pub fn position(&self) -> Coord {
        Coord::new(self.x, self.y)
    }

    /// Rotate in place without moving.
    pub fn turn(&mut self, turn: Turn) {
        self.orientation = self.orientation.turned(turn);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn left_turn_cycles_through_all_orientations() {
        let mut runner = Runner::new(0, 0, Orientation::North);
        let mut seen = vec![runner.orientation];
        for _ in 0..3 {
            runner.turn(Turn::Left);
            seen.push(runner.orientation);
        }
        assert_eq!(
            seen,
            vec![
                Orientation::North,
                Orientation::West,
                Orientation::South,
                Orientation::East,
            ]
        );

        runner.turn(Turn::Left);
        assert_eq!(runner.orientation, Orientation::North);
    }

    #[test]
    fn right_turn_undoes_left_turn() {
        for orientation in [
            Orientation::North,
            Orientation::East,
            Orientation::South,
            Orientation::West,
        ] {
            assert_eq!(orientation.turned(Turn::Left).turned(Turn::Right), orientation);
        }
    }

    #[test]
    fn turning_leaves_position_untouched() {
        let mut runner = Runner::new(2, 5, Orientation::East);
        runner.turn(Turn::Right);
        assert_eq!(runner.position(), Coord::new(2, 5));
    }
}
