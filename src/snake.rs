//! Snake definitions: steps, solutions, and the built-in puzzles.
//!
//! A snake is a chain of straight segments joined by elastic. Consecutive
//! segments share their joint cube, so a chain of lengths `l1..ln` holds
//! `l1 + (l2 - 1) + ... + (ln - 1)` unit cubes.

use crate::direction::Direction;
use crate::solver::{self, SolveError};

/// One segment of the snake with its chosen direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Step {
    /// 1-based position of the segment in solving order.
    pub id: usize,
    pub direction: Direction,
    /// Number of unit cubes in the segment, including the shared joint.
    pub length: u32,
}

impl Step {
    pub const fn new(id: usize, direction: Direction, length: u32) -> Self {
        Self {
            id,
            direction,
            length,
        }
    }
}

/// An ordered run of steps starting at `id == 1`.
pub type Solution = Vec<Step>;

/// Number of unit cubes a chain of segment lengths occupies.
///
/// Returns 0 for an empty chain.
pub const fn cell_count(lengths: &[u32]) -> u64 {
    if lengths.is_empty() {
        return 0;
    }
    let mut total = lengths[0] as u64;
    let mut i = 1;
    while i < lengths.len() {
        // a zero-length segment would saturate here; Puzzle::new rejects those
        total += (lengths[i] as u64).saturating_sub(1);
        i += 1;
    }
    total
}

/// A snake puzzle: segment lengths in solving order plus the target cube size.
#[derive(Clone, Copy, Debug)]
pub struct Puzzle {
    pub name: &'static str,
    pub lengths: &'static [u32],
    pub size: u32,
}

impl Puzzle {
    /// Creates a puzzle definition with compile-time validation.
    ///
    /// The chain must fill the cube exactly.
    pub const fn new(name: &'static str, lengths: &'static [u32], size: u32) -> Self {
        assert!(!lengths.is_empty(), "a snake needs at least one segment");
        assert!(size >= 1, "cube size must be positive");
        let mut i = 0;
        while i < lengths.len() {
            assert!(lengths[i] >= 1, "segment lengths must be positive");
            i += 1;
        }
        let volume = (size as u64) * (size as u64) * (size as u64);
        assert!(
            cell_count(lengths) == volume,
            "cell count must equal size^3"
        );
        Self {
            name,
            lengths,
            size,
        }
    }

    /// Number of unit cubes in the chain.
    pub const fn cell_count(&self) -> u64 {
        cell_count(self.lengths)
    }

    /// Runs the search with no iteration cap.
    pub fn solve(&self) -> Result<Solution, SolveError> {
        solver::solve(self.lengths, self.size)
    }
}

/// The common 27-cube snake, listed from the end that is folded first.
pub const CLASSIC_LENGTHS: &[u32] = &[3, 2, 2, 3, 2, 3, 2, 2, 3, 3, 2, 2, 2, 3, 3, 3, 3];

/// 3x3x3 snake cube.
pub const CLASSIC_PUZZLE: Puzzle = Puzzle::new("classic", CLASSIC_LENGTHS, 3);

/// Seven two-cube links folding into a 2x2x2 cube.
pub const TRAINER_LENGTHS: &[u32] = &[2, 2, 2, 2, 2, 2, 2];

/// 2x2x2 warm-up puzzle.
pub const TRAINER_PUZZLE: Puzzle = Puzzle::new("trainer", TRAINER_LENGTHS, 2);

/// All built-in puzzles.
pub const PUZZLES: &[Puzzle] = &[CLASSIC_PUZZLE, TRAINER_PUZZLE];

/// Looks up a built-in puzzle by name.
pub fn find_preset(name: &str) -> Option<&'static Puzzle> {
    PUZZLES.iter().find(|puzzle| puzzle.name == name)
}
