//! Shared deterministic types for maze core logic.
//!
//! These types define stable contracts between core components. They should not
//! depend on external state or I/O and must remain deterministic across runs.

use std::fmt;

/// A cell position on the maze grid.
///
/// The origin `(0, 0)` is the bottom-left cell; `x` grows to the right and
/// `y` grows upward. Positions address cells, never wall boundaries.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Coord {
    pub x: usize,
    pub y: usize,
}

impl Coord {
    pub fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_uses_parenthesized_pair() {
        assert_eq!(Coord::new(3, 12).to_string(), "(3, 12)");
    }
}
