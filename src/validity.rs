//! Rejects folds that leave the target cube or pass through themselves.
//!
//! This is the only pruning the search does. Each check re-materializes the
//! whole candidate, so it costs O(cells) per call.

use rustc_hash::FxHashMap;
use thiserror::Error;

use crate::geometry::{compute_bounds, materialize, Cell, Coord};
use crate::snake::Step;

/// Why a fold was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Violation {
    /// No cube fits inside a zero-sized target.
    #[error("cube size must be positive")]
    InvalidSize,

    /// The fold is too wide along one axis.
    #[error("span {span} along {axis} does not fit a cube of size {size}")]
    OutOfBounds { axis: char, span: i32, size: u32 },

    /// Two cubes landed on the same coordinate.
    #[error("segments {first} and {second} both occupy {coordinate:?}")]
    Overlap {
        coordinate: Coord,
        first: usize,
        second: usize,
    },
}

/// Checks a fold against a `size x size x size` cube.
///
/// Bounds are checked before overlaps, so an out-of-bounds fold that also
/// overlaps reports [`Violation::OutOfBounds`].
pub fn check(solution: &[Step], size: u32) -> Result<(), Violation> {
    if size == 0 {
        return Err(Violation::InvalidSize);
    }

    // a straight segment alone spans length - 1; reject it before allocating its cells
    if let Some(step) = solution.iter().find(|step| step.length > size) {
        return Err(Violation::OutOfBounds {
            axis: step.direction.axis(),
            span: i32::try_from(step.length - 1).unwrap_or(i32::MAX),
            size,
        });
    }

    let path = materialize(solution);
    let (span_x, span_y, span_z) = compute_bounds(&path).span();

    for (axis, span) in [('x', span_x), ('y', span_y), ('z', span_z)] {
        // span must stay strictly below size
        if i64::from(span) >= i64::from(size) {
            return Err(Violation::OutOfBounds { axis, span, size });
        }
    }

    match find_overlap(&path) {
        Some(violation) => Err(violation),
        None => Ok(()),
    }
}

/// Returns true if the fold fits the cube without overlapping itself.
#[inline]
pub fn is_valid(solution: &[Step], size: u32) -> bool {
    check(solution, size).is_ok()
}

/// Finds the first coordinate occupied by two distinct cells of the path.
fn find_overlap(path: &[Cell]) -> Option<Violation> {
    let mut occupied: FxHashMap<Coord, usize> = FxHashMap::default();
    occupied.reserve(path.len());

    for cell in path {
        if let Some(&first) = occupied.get(&cell.coordinate) {
            return Some(Violation::Overlap {
                coordinate: cell.coordinate,
                first,
                second: cell.step.id,
            });
        }
        occupied.insert(cell.coordinate, cell.step.id);
    }

    None
}
