//! ASCII rendering of a folded snake, one grid per z-layer.
//!
//! Layers run from the lowest z to the highest. Within a layer, rows go from
//! the highest x to the lowest and columns from the lowest y to the highest,
//! so Forward points up the page. Each cube shows the id of the segment that
//! placed it.

use std::fmt::Write;

use rustc_hash::FxHashMap;

use crate::geometry::{compute_bounds, materialize, Coord};
use crate::snake::Step;

/// Shown when more than one cube lands on a coordinate. Valid folds never
/// produce it.
pub const OVERLAP_MARKER: &str = "XX";

/// Groups the segment ids occupying each coordinate.
fn occupancy(solution: &[Step]) -> FxHashMap<Coord, Vec<usize>> {
    let mut cells: FxHashMap<Coord, Vec<usize>> = FxHashMap::default();
    for cell in materialize(solution) {
        cells.entry(cell.coordinate).or_default().push(cell.step.id);
    }
    cells
}

/// Formats a solution as stacked layer grids.
pub fn format_solution(solution: &[Step]) -> String {
    let bounds = compute_bounds(&materialize(solution));
    let cells = occupancy(solution);

    let mut output = String::new();
    for z in bounds.min.2..=bounds.max.2 {
        // writing to a String cannot fail
        let _ = writeln!(output, "=== layer {z} ===");
        for x in (bounds.min.0..=bounds.max.0).rev() {
            for y in bounds.min.1..=bounds.max.1 {
                output.push('[');
                match cells.get(&(x, y, z)).map(Vec::as_slice) {
                    None | Some([]) => output.push_str("  "),
                    Some([id]) => {
                        let _ = write!(output, "{id:>2}");
                    }
                    Some(_) => output.push_str(OVERLAP_MARKER),
                }
                output.push(']');
            }
            output.push('\n');
        }
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::direction::Direction::*;

    #[test]
    fn test_single_cube() {
        let output = format_solution(&[Step::new(1, Forward, 1)]);
        insta::assert_snapshot!(output, @r"
        === layer 0 ===
        [ 1]
        ");
    }

    #[test]
    fn test_layers_run_bottom_up() {
        let solution = [Step::new(1, Forward, 2), Step::new(2, Down, 2)];
        insta::assert_snapshot!(format_solution(&solution), @r"
        === layer -1 ===
        [ 2]
        [  ]
        === layer 0 ===
        [ 1]
        [ 1]
        ");
    }

    #[test]
    fn test_columns_follow_y() {
        let solution = [Step::new(1, Left, 3), Step::new(2, Forward, 2)];
        insta::assert_snapshot!(format_solution(&solution), @r"
        === layer 0 ===
        [  ][  ][ 2]
        [ 1][ 1][ 1]
        ");
    }

    #[test]
    fn test_overlap_marker() {
        let solution = [Step::new(1, Forward, 2), Step::new(2, Backward, 2)];
        insta::assert_snapshot!(format_solution(&solution), @r"
        === layer 0 ===
        [ 1]
        [XX]
        ");
    }

    #[test]
    fn test_wide_ids_are_not_truncated() {
        let mut solution = vec![Step::new(1, Forward, 1)];
        for id in 2..=10 {
            solution.push(Step::new(id, Forward, 1));
        }
        solution.push(Step::new(11, Up, 2));
        let output = format_solution(&solution);
        assert!(output.contains("[11]"), "{output}");
    }
}
