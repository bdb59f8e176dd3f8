//! Maze text parsing: character grid to wall grid.
//!
//! A `W` x `H` maze is written as `2H + 1` lines of `2W + 1` characters.
//! Odd-odd positions are cell centres, the characters between two centres
//! mark the boundary they share, and even-even positions are junctions.
//! `#` marks a wall, `.` an opening. Line 0 of the text is the top of the
//! maze, so text rows are flipped into the bottom-left cell origin.
//!
//! Parsing is two-phase: the whole text is validated first, then walls are
//! placed. A parse error therefore never yields a partially built grid.

use thiserror::Error;

use crate::core::grid::{Grid, GridError};

/// Character marking a wall in maze text.
pub const WALL: char = '#';
/// Character marking an opening in maze text.
pub const OPEN: char = '.';

/// Errors from maze text validation.
///
/// `line` and `column` are 1-based positions in the input text.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("maze text needs at least 3 rows and 3 columns, got {rows}x{cols}")]
    TooSmall { rows: usize, cols: usize },
    #[error("line {line} is {len} characters wide, expected {expected}")]
    Ragged {
        line: usize,
        len: usize,
        expected: usize,
    },
    #[error("maze text needs odd row and column counts, got {rows}x{cols}")]
    NotOddSized { rows: usize, cols: usize },
    #[error("maze border must be '{WALL}', found {found:?} at line {line} column {column}")]
    Border {
        line: usize,
        column: usize,
        found: char,
    },
    #[error("unexpected {found:?} at line {line} column {column}, expected '{WALL}' or '{OPEN}'")]
    Symbol {
        line: usize,
        column: usize,
        found: char,
    },
}

/// Parse maze text into a [`Grid`].
pub fn build_grid(text: &str) -> Result<Grid, ParseError> {
    let rows: Vec<Vec<char>> = text
        .lines()
        .map(|line| line.trim_end().chars().collect())
        .collect();
    let (width, height) = validate(&rows)?;
    let grid = place_walls(width, height, &rows)
        .expect("wall boundaries derived from validated text stay in range");
    Ok(grid)
}

/// Check layout, border, and symbols; on success return maze (width, height).
fn validate(rows: &[Vec<char>]) -> Result<(usize, usize), ParseError> {
    let row_count = rows.len();
    let col_count = rows.first().map_or(0, Vec::len);
    if row_count < 3 || col_count < 3 {
        return Err(ParseError::TooSmall {
            rows: row_count,
            cols: col_count,
        });
    }

    for (i, row) in rows.iter().enumerate() {
        if row.len() != col_count {
            return Err(ParseError::Ragged {
                line: i + 1,
                len: row.len(),
                expected: col_count,
            });
        }
    }

    if row_count % 2 == 0 || col_count % 2 == 0 {
        return Err(ParseError::NotOddSized {
            rows: row_count,
            cols: col_count,
        });
    }

    for (i, row) in rows.iter().enumerate() {
        for (j, &found) in row.iter().enumerate() {
            let on_border = i == 0 || i == row_count - 1 || j == 0 || j == col_count - 1;
            if on_border && found != WALL {
                return Err(ParseError::Border {
                    line: i + 1,
                    column: j + 1,
                    found,
                });
            }
            if found != WALL && found != OPEN {
                return Err(ParseError::Symbol {
                    line: i + 1,
                    column: j + 1,
                    found,
                });
            }
        }
    }

    Ok((col_count / 2, row_count / 2))
}

/// Walk every cell centre and record the wall markers around it.
///
/// Boundary indices 0 address the south and west borders, which
/// [`Grid::new`] has already walled; those markers are skipped.
fn place_walls(width: usize, height: usize, rows: &[Vec<char>]) -> Result<Grid, GridError> {
    let mut grid = Grid::new(width, height)?;
    let total = rows.len();

    for y in 0..height {
        let i = total - 2 - 2 * y;
        for x in 0..width {
            let j = 2 * x + 1;
            if rows[i - 1][j] == WALL {
                grid.add_horizontal_wall(x, y + 1)?;
            }
            if y > 0 && rows[i + 1][j] == WALL {
                grid.add_horizontal_wall(x, y)?;
            }
            if rows[i][j + 1] == WALL {
                grid.add_vertical_wall(y, x + 1)?;
            }
            if x > 0 && rows[i][j - 1] == WALL {
                grid.add_vertical_wall(y, x)?;
            }
        }
    }

    Ok(grid)
}

#[cfg(test)]
mod tests {
    use super::*;

    const TWO_BY_TWO: &str = "\
#####
#...#
###.#
#...#
#####";

    #[test]
    fn parses_dimensions_from_text_size() {
        let grid = build_grid(TWO_BY_TWO).unwrap();
        assert_eq!(grid.width(), 2);
        assert_eq!(grid.height(), 2);
    }

    #[test]
    fn interior_wall_lands_on_both_neighbouring_cells() {
        let grid = build_grid(TWO_BY_TWO).unwrap();
        assert!(grid.walls(0, 0).unwrap().north);
        assert!(grid.walls(0, 1).unwrap().south);
        assert!(!grid.walls(1, 0).unwrap().north);
        assert!(!grid.walls(1, 1).unwrap().south);
    }

    #[test]
    fn text_rows_are_flipped_into_the_bottom_left_origin() {
        // The opening in the wall row sits under the right column of the
        // text, so the unwalled boundary belongs to cell column 1.
        let grid = build_grid(TWO_BY_TWO).unwrap();
        assert!(!grid.walls(1, 0).unwrap().north);
        assert!(!grid.walls(1, 0).unwrap().west);
        assert!(grid.walls(0, 0).unwrap().west);
    }

    #[test]
    fn trailing_whitespace_is_tolerated() {
        let padded = TWO_BY_TWO
            .lines()
            .map(|line| format!("{line}  "))
            .collect::<Vec<_>>()
            .join("\n")
            + "\n";
        assert_eq!(build_grid(&padded), build_grid(TWO_BY_TWO));
    }

    #[test]
    fn rejects_too_small_text() {
        assert_eq!(
            build_grid("##\n##"),
            Err(ParseError::TooSmall { rows: 2, cols: 2 })
        );
        assert_eq!(
            build_grid(""),
            Err(ParseError::TooSmall { rows: 0, cols: 0 })
        );
    }

    #[test]
    fn rejects_ragged_rows() {
        assert_eq!(
            build_grid("#####\n#..#\n#####"),
            Err(ParseError::Ragged {
                line: 2,
                len: 4,
                expected: 5
            })
        );
    }

    #[test]
    fn rejects_even_row_or_column_counts() {
        assert_eq!(
            build_grid("####\n#..#\n####"),
            Err(ParseError::NotOddSized { rows: 3, cols: 4 })
        );
        assert_eq!(
            build_grid("#####\n#...#\n#...#\n#####"),
            Err(ParseError::NotOddSized { rows: 4, cols: 5 })
        );
    }

    #[test]
    fn rejects_openings_in_the_border() {
        assert_eq!(
            build_grid("#####\n#...#\n##.##\n....#\n#####"),
            Err(ParseError::Border {
                line: 4,
                column: 1,
                found: '.'
            })
        );
    }

    #[test]
    fn rejects_unknown_symbols() {
        assert_eq!(
            build_grid("#####\n#.x.#\n#####"),
            Err(ParseError::Symbol {
                line: 2,
                column: 3,
                found: 'x'
            })
        );
    }

    #[test]
    fn wall_markers_on_the_border_are_idempotent() {
        // A fully walled 1x1 maze parses to exactly the border walls.
        let grid = build_grid("###\n#.#\n###").unwrap();
        let walls = grid.walls(0, 0).unwrap();
        assert!(walls.north && walls.east && walls.south && walls.west);
    }
}
