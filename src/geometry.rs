//! Folding a step sequence into concrete unit-cube coordinates.
//!
//! Materialization starts at the origin. The first step emits a cube at the
//! origin before moving (the seed cube); every further cube in any step is
//! emitted after advancing one unit in that step's direction. The result is
//! recomputed from scratch for each call and never cached.

use crate::direction::Direction;
use crate::snake::Step;

/// A 3D coordinate representing a unit cube position.
pub type Coord = (i32, i32, i32);

/// The seed cube position.
pub const ORIGIN: Coord = (0, 0, 0);

/// One occupied unit position, tagged with the step that produced it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Cell {
    pub coordinate: Coord,
    pub step: Step,
}

/// Moves one unit from `position` in `direction`.
#[inline(always)]
pub const fn advance(position: Coord, direction: Direction) -> Coord {
    let (dx, dy, dz) = direction.delta();
    (position.0 + dx, position.1 + dy, position.2 + dz)
}

/// Folds a step sequence into the ordered list of cubes it occupies.
///
/// A step of length `n` contributes `n - 1` cubes; step 1 additionally emits
/// the seed cube at the origin.
pub fn materialize(solution: &[Step]) -> Vec<Cell> {
    let capacity: usize = solution
        .iter()
        .map(|step| step.length.saturating_sub(1) as usize)
        .sum::<usize>()
        + 1;
    let mut path = Vec::with_capacity(capacity);
    let mut position = ORIGIN;

    for &step in solution {
        if step.id == 1 {
            path.push(Cell {
                coordinate: position,
                step,
            });
        }
        for _ in 1..step.length {
            position = advance(position, step.direction);
            path.push(Cell {
                coordinate: position,
                step,
            });
        }
    }

    path
}

/// Axis-aligned box around a set of coordinates, inclusive on both ends.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BoundingVolume {
    pub min: Coord,
    pub max: Coord,
}

impl BoundingVolume {
    /// Zero-extent box at the origin, which is always occupied.
    pub const AT_ORIGIN: Self = Self {
        min: ORIGIN,
        max: ORIGIN,
    };

    /// Grows the box to contain `coordinate`.
    #[inline]
    pub fn include(self, (x, y, z): Coord) -> Self {
        Self {
            min: (self.min.0.min(x), self.min.1.min(y), self.min.2.min(z)),
            max: (self.max.0.max(x), self.max.1.max(y), self.max.2.max(z)),
        }
    }

    /// `max - min` per axis. A single cube has span (0, 0, 0).
    #[inline]
    pub fn span(&self) -> Coord {
        (
            self.max.0 - self.min.0,
            self.max.1 - self.min.1,
            self.max.2 - self.min.2,
        )
    }
}

impl Default for BoundingVolume {
    fn default() -> Self {
        Self::AT_ORIGIN
    }
}

/// Computes the per-axis extents of a materialized path.
pub fn compute_bounds(path: &[Cell]) -> BoundingVolume {
    path.iter()
        .fold(BoundingVolume::AT_ORIGIN, |bounds, cell| {
            bounds.include(cell.coordinate)
        })
}
