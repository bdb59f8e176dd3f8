//! ASCII rendering of a wall grid.
//!
//! Produces the same character layout the parser reads: `2H + 1` lines of
//! `2W + 1` characters with `#` walls and `.` openings, top text line first.
//! Rendering a grid and parsing the output reconstructs an equal grid.

use crate::core::grid::Grid;
use crate::core::parse::{OPEN, WALL};
use crate::core::runner::{Orientation, Runner};

/// Render the maze as text.
pub fn render(grid: &Grid) -> String {
    to_text(canvas(grid))
}

/// Render the maze with the runner drawn into its cell.
///
/// The glyph points along the runner's orientation. A runner outside the
/// maze is not drawn.
pub fn render_with_runner(grid: &Grid, runner: &Runner) -> String {
    let mut canvas = canvas(grid);
    if grid.contains(runner.position()) {
        let i = 2 * (grid.height() - 1 - runner.y) + 1;
        let j = 2 * runner.x + 1;
        canvas[i][j] = glyph(runner.orientation);
    }
    to_text(canvas)
}

fn glyph(orientation: Orientation) -> char {
    match orientation {
        Orientation::North => '^',
        Orientation::East => '>',
        Orientation::South => 'v',
        Orientation::West => '<',
    }
}

fn canvas(grid: &Grid) -> Vec<Vec<char>> {
    let total_rows = 2 * grid.height() + 1;
    let total_cols = 2 * grid.width() + 1;
    let mut canvas = vec![vec![OPEN; total_cols]; total_rows];

    // Junctions are always drawn as walls, so each wall marker below only
    // needs to fill the midpoint of its boundary segment.
    for row in canvas.iter_mut().step_by(2) {
        for ch in row.iter_mut().step_by(2) {
            *ch = WALL;
        }
    }

    for y in 0..grid.height() {
        let i = total_rows - 2 - 2 * y;
        for x in 0..grid.width() {
            let j = 2 * x + 1;
            let walls = grid
                .walls(x, y)
                .expect("render loop stays inside the grid");
            if walls.north {
                canvas[i - 1][j] = WALL;
            }
            if walls.south {
                canvas[i + 1][j] = WALL;
            }
            if walls.east {
                canvas[i][j + 1] = WALL;
            }
            if walls.west {
                canvas[i][j - 1] = WALL;
            }
        }
    }

    canvas
}

fn to_text(canvas: Vec<Vec<char>>) -> String {
    let mut lines: Vec<String> = Vec::with_capacity(canvas.len());
    for row in canvas {
        lines.push(row.into_iter().collect());
    }
    lines.join("\n")
}
