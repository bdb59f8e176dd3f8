//! Loop trimming over an exploration trace.
//!
//! Wall following revisits cells whenever it backtracks out of a dead end or
//! walks a cycle. The trace is compacted in one pass: a cell already on the
//! output path cuts the path back to its earlier occurrence, discarding the
//! detour between the two visits; any other cell is appended. A cell an
//! earlier cut removed can therefore re-enter the path on a later visit.

use crate::core::types::Coord;

/// Compact a trace into a loop-free path from its first to its last entry.
pub fn extract_path(trace: &[Coord]) -> Vec<Coord> {
    let mut path: Vec<Coord> = Vec::new();

    for &position in trace {
        if let Some(i) = path.iter().position(|&p| p == position) {
            path.truncate(i + 1);
        } else {
            path.push(position);
        }
    }

    path
}

/// Run score: a quarter point per exploration step plus a point per path cell.
/// Lower is better.
pub fn score(steps: usize, path: &[Coord]) -> f64 {
    steps as f64 / 4.0 + path.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    fn c(x: usize, y: usize) -> Coord {
        Coord::new(x, y)
    }

    #[test]
    fn trace_without_revisits_is_kept_whole() {
        let trace = [c(0, 0), c(0, 1), c(1, 1), c(2, 1)];
        assert_eq!(extract_path(&trace), trace.to_vec());
    }

    #[test]
    fn backtracked_dead_end_is_cut_out() {
        let trace = [c(0, 0), c(0, 1), c(0, 0), c(1, 0)];
        assert_eq!(extract_path(&trace), vec![c(0, 0), c(1, 0)]);
    }

    #[test]
    fn cycle_is_cut_back_to_its_entry_cell() {
        let trace = [c(0, 0), c(1, 0), c(1, 1), c(0, 1), c(1, 0), c(2, 0)];
        assert_eq!(extract_path(&trace), vec![c(0, 0), c(1, 0), c(2, 0)]);
    }

    #[test]
    fn cut_cell_rejoins_the_path_when_visited_again() {
        // (1, 1) is removed by the cut back to (1, 0); the later visit
        // reaches it along a new route, so it is appended again.
        let trace = [
            c(0, 0),
            c(1, 0),
            c(1, 1),
            c(1, 0),
            c(2, 0),
            c(1, 1),
            c(2, 1),
        ];
        assert_eq!(
            extract_path(&trace),
            vec![c(0, 0), c(1, 0), c(2, 0), c(1, 1), c(2, 1)]
        );
    }

    #[test]
    fn nested_cuts_keep_only_the_final_route() {
        let trace = [
            c(0, 0),
            c(1, 0),
            c(1, 1),
            c(1, 0),
            c(0, 0),
            c(0, 1),
            c(1, 1),
        ];
        assert_eq!(extract_path(&trace), vec![c(0, 0), c(0, 1), c(1, 1)]);
    }

    #[test]
    fn empty_trace_yields_empty_path() {
        assert_eq!(extract_path(&[]), Vec::new());
    }

    #[test]
    fn score_mixes_steps_and_path_length() {
        let path = [c(0, 0), c(1, 0), c(1, 1), c(2, 1)];
        let value = score(12, &path);
        assert!((value - 7.0).abs() < f64::EPSILON);
    }
}
