//! Wall grid for rectangular mazes.
//!
//! The grid stores one [`Walls`] record per cell, addressed from a bottom-left
//! origin with `y` growing upward. Two invariants hold for every constructed
//! grid and survive every mutation:
//!
//! - the outer border is fully walled and stays that way;
//! - an interior wall is recorded on both cells that share it, so neighbours
//!   never disagree about the boundary between them.
//!
//! Wall insertion addresses boundaries, not cells: a horizontal wall sits on
//! row boundary `r` (between rows `r - 1` and `r`), a vertical wall on column
//! boundary `c` (between columns `c - 1` and `c`). Boundary indices are
//! 1-based; boundary `H` (or `W`) coincides with the outer border.

use thiserror::Error;

use crate::core::runner::{Orientation, Runner};
use crate::core::types::Coord;

/// Wall flags for a single cell, one per compass side.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Walls {
    pub north: bool,
    pub east: bool,
    pub south: bool,
    pub west: bool,
}

/// Walls around the runner, rotated into its frame of reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SideWalls {
    pub left: bool,
    pub front: bool,
    pub right: bool,
}

/// Errors from grid construction and access.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum GridError {
    #[error("invalid maze dimensions {width}x{height}: both sides must be at least 1")]
    InvalidDimension { width: usize, height: usize },
    #[error("position ({x}, {y}) is outside the maze")]
    OutOfBounds { x: usize, y: usize },
    #[error("wall ahead of runner at ({x}, {y}) facing {facing}")]
    WallCollision {
        x: usize,
        y: usize,
        facing: Orientation,
    },
}

/// A `width` x `height` maze with per-cell wall flags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Walls>,
}

impl Grid {
    /// Create a fully open maze with only the outer border walled.
    pub fn new(width: usize, height: usize) -> Result<Self, GridError> {
        if width == 0 || height == 0 {
            return Err(GridError::InvalidDimension { width, height });
        }

        let mut grid = Self {
            width,
            height,
            cells: vec![Walls::default(); width * height],
        };

        for x in 0..width {
            grid.cell_mut(x, 0).south = true;
            grid.cell_mut(x, height - 1).north = true;
        }
        for y in 0..height {
            grid.cell_mut(0, y).west = true;
            grid.cell_mut(width - 1, y).east = true;
        }

        Ok(grid)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// True if `coord` addresses a cell of this maze.
    pub fn contains(&self, coord: Coord) -> bool {
        coord.x < self.width && coord.y < self.height
    }

    /// Wall flags of the cell at `(x, y)`.
    pub fn walls(&self, x: usize, y: usize) -> Result<Walls, GridError> {
        self.index(x, y).map(|i| self.cells[i])
    }

    /// Insert a wall on the north/south boundary `row_boundary` under cell
    /// column `x`.
    ///
    /// `row_boundary` is 1-based and must lie in `1..=height`; the wall is
    /// recorded on the cell below it and, when one exists, the cell above it.
    pub fn add_horizontal_wall(&mut self, x: usize, row_boundary: usize) -> Result<(), GridError> {
        if x >= self.width || row_boundary == 0 || row_boundary > self.height {
            return Err(GridError::OutOfBounds {
                x,
                y: row_boundary,
            });
        }

        self.cell_mut(x, row_boundary - 1).north = true;
        if row_boundary < self.height {
            self.cell_mut(x, row_boundary).south = true;
        }
        Ok(())
    }

    /// Insert a wall on the east/west boundary `col_boundary` beside cell
    /// row `y`.
    ///
    /// `col_boundary` is 1-based and must lie in `1..=width`; the wall is
    /// recorded on the cell left of it and, when one exists, the cell right
    /// of it.
    pub fn add_vertical_wall(&mut self, y: usize, col_boundary: usize) -> Result<(), GridError> {
        if y >= self.height || col_boundary == 0 || col_boundary > self.width {
            return Err(GridError::OutOfBounds {
                x: col_boundary,
                y,
            });
        }

        self.cell_mut(col_boundary - 1, y).east = true;
        if col_boundary < self.width {
            self.cell_mut(col_boundary, y).west = true;
        }
        Ok(())
    }

    /// Walls around the runner's cell, rotated into (left, front, right)
    /// relative to its orientation.
    pub fn sense_walls(&self, runner: &Runner) -> Result<SideWalls, GridError> {
        let walls = self.walls(runner.x, runner.y)?;
        let sides = match runner.orientation {
            Orientation::North => SideWalls {
                left: walls.west,
                front: walls.north,
                right: walls.east,
            },
            Orientation::East => SideWalls {
                left: walls.north,
                front: walls.east,
                right: walls.south,
            },
            Orientation::South => SideWalls {
                left: walls.east,
                front: walls.south,
                right: walls.west,
            },
            Orientation::West => SideWalls {
                left: walls.south,
                front: walls.west,
                right: walls.north,
            },
        };
        Ok(sides)
    }

    /// Advance the runner one cell in its facing direction.
    ///
    /// Fails with [`GridError::WallCollision`] when a wall blocks the move.
    /// The walled border means a permitted move can never leave the maze.
    pub fn move_forward(&self, runner: &mut Runner) -> Result<(), GridError> {
        let walls = self.walls(runner.x, runner.y)?;
        let blocked = match runner.orientation {
            Orientation::North => walls.north,
            Orientation::East => walls.east,
            Orientation::South => walls.south,
            Orientation::West => walls.west,
        };
        if blocked {
            return Err(GridError::WallCollision {
                x: runner.x,
                y: runner.y,
                facing: runner.orientation,
            });
        }

        match runner.orientation {
            Orientation::North => runner.y += 1,
            Orientation::East => runner.x += 1,
            Orientation::South => runner.y -= 1,
            Orientation::West => runner.x -= 1,
        }
        Ok(())
    }

    fn index(&self, x: usize, y: usize) -> Result<usize, GridError> {
        if x >= self.width || y >= self.height {
            return Err(GridError::OutOfBounds { x, y });
        }
        Ok(y * self.width + x)
    }

    fn cell_mut(&mut self, x: usize, y: usize) -> &mut Walls {
        let i = y * self.width + x;
        &mut self.cells[i]
    }
}
