//! Parsing of `"x, y"` coordinate arguments.

use thiserror::Error;

use crate::core::types::Coord;

/// Errors from coordinate argument handling.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CoordinateError {
    #[error("coordinate must look like \"x, y\" (digits, comma, single space), got {input:?}")]
    Malformed { input: String },
    #[error("coordinate component {component:?} is too large")]
    TooLarge { component: String },
    #[error("position {position} is outside the {width}x{height} maze")]
    OutOfRange {
        position: Coord,
        width: usize,
        height: usize,
    },
}

/// Parse a coordinate written as `"x, y"`.
///
/// Surrounding whitespace is ignored; the separator must be a comma followed
/// by a single space, and both components must be unsigned integers.
pub fn parse_coord(input: &str) -> Result<Coord, CoordinateError> {
    use std::sync::LazyLock;
    static COORD_RE: LazyLock<regex::Regex> =
        LazyLock::new(|| regex::Regex::new(r"^(\d+), (\d+)$").unwrap());

    let caps = COORD_RE
        .captures(input.trim())
        .ok_or_else(|| CoordinateError::Malformed {
            input: input.to_string(),
        })?;
    let x = parse_component(&caps[1])?;
    let y = parse_component(&caps[2])?;
    Ok(Coord::new(x, y))
}

fn parse_component(digits: &str) -> Result<usize, CoordinateError> {
    digits.parse().map_err(|_| CoordinateError::TooLarge {
        component: digits.to_string(),
    })
}

/// Check that a position addresses a cell of a `width` x `height` maze.
pub fn ensure_in_bounds(
    position: Coord,
    width: usize,
    height: usize,
) -> Result<(), CoordinateError> {
    if position.x < width && position.y < height {
        Ok(())
    } else {
        Err(CoordinateError::OutOfRange {
            position,
            width,
            height,
        })
    }
}
