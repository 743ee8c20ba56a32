//! Depth-first backtracking search for a snake fold.
//!
//! The frontier is an explicit LIFO stack of partial solutions. Each popped
//! candidate is either complete (returned), already seen (dropped), or
//! expanded into one child per direction. Only children that pass the
//! validity check are pushed. The frontier and the discovered set belong to
//! a [`Solver`] value, so independent searches never share state.

use rustc_hash::FxHashSet;
use thiserror::Error;
use tracing::{debug, trace};

use crate::direction::Direction;
use crate::encoding::encode;
use crate::snake::{cell_count, Solution, Step};
use crate::validity::is_valid;

/// Ways a search can end without a fold.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SolveError {
    #[error("no segment lengths given")]
    EmptySequence,

    #[error("cube size must be positive")]
    InvalidSize,

    /// Index is 0-based into the input lengths.
    #[error("segment at index {index} has zero length")]
    ZeroLength { index: usize },

    /// The whole search space was explored.
    #[error("no solution found after exploring {explored} candidates")]
    Exhausted { explored: usize },

    #[error("gave up after {limit} iterations")]
    IterationLimit { limit: usize },
}

/// Counters collected while searching.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Candidates popped off the frontier.
    pub explored: usize,
    /// Candidates dropped because their encoding was already discovered.
    pub duplicates: usize,
    /// Children rejected by the validity check.
    pub pruned: usize,
    /// Largest frontier size seen.
    pub max_frontier: usize,
}

/// A single search over one length sequence and cube size.
pub struct Solver<'a> {
    lengths: &'a [u32],
    size: u32,
    max_iterations: Option<usize>,
    frontier: Vec<Solution>,
    discovered: FxHashSet<String>,
    stats: SearchStats,
}

impl<'a> Solver<'a> {
    /// Creates a solver for `lengths` (in solving order) and a `size`-cube.
    pub fn new(lengths: &'a [u32], size: u32) -> Self {
        Self {
            lengths,
            size,
            max_iterations: None,
            frontier: Vec::new(),
            discovered: FxHashSet::default(),
            stats: SearchStats::default(),
        }
    }

    /// Caps the number of candidates popped before giving up.
    pub fn with_max_iterations(mut self, limit: usize) -> Self {
        self.max_iterations = Some(limit);
        self
    }

    /// Counters from the most recent call to [`Solver::solve`].
    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    /// Runs the search from scratch.
    ///
    /// The first segment always points [`Direction::Forward`]; every other
    /// fold is a rotation of one that does.
    pub fn solve(&mut self) -> Result<Solution, SolveError> {
        self.validate_input()?;

        let n = self.lengths.len();
        self.frontier.clear();
        self.discovered.clear();
        self.stats = SearchStats::default();

        debug!(
            segments = n,
            size = self.size,
            cells = cell_count(self.lengths),
            "starting search"
        );

        let seed = vec![Step::new(1, Direction::Forward, self.lengths[0])];
        if is_valid(&seed, self.size) {
            self.frontier.push(seed);
        } else {
            self.stats.pruned += 1;
        }

        while let Some(current) = self.frontier.pop() {
            if let Some(limit) = self.max_iterations {
                if self.stats.explored >= limit {
                    debug!(limit, "iteration limit reached");
                    return Err(SolveError::IterationLimit { limit });
                }
            }
            self.stats.explored += 1;

            // completeness must be checked before reading the next length
            if current.len() == n {
                debug!(
                    explored = self.stats.explored,
                    duplicates = self.stats.duplicates,
                    pruned = self.stats.pruned,
                    max_frontier = self.stats.max_frontier,
                    "solution found"
                );
                return Ok(current);
            }

            let key = encode(&current);
            if !self.discovered.insert(key) {
                self.stats.duplicates += 1;
                continue;
            }

            self.expand(&current);
        }

        debug!(
            explored = self.stats.explored,
            pruned = self.stats.pruned,
            "search space exhausted"
        );
        Err(SolveError::Exhausted {
            explored: self.stats.explored,
        })
    }

    fn validate_input(&self) -> Result<(), SolveError> {
        if self.lengths.is_empty() {
            return Err(SolveError::EmptySequence);
        }
        if self.size == 0 {
            return Err(SolveError::InvalidSize);
        }
        if let Some(index) = self.lengths.iter().position(|&length| length == 0) {
            return Err(SolveError::ZeroLength { index });
        }
        Ok(())
    }

    /// Pushes every valid one-step extension of `current`.
    fn expand(&mut self, current: &[Step]) {
        // ids are 1-based, so the next segment's length sits at index `last.id`
        let Some(last) = current.last() else {
            return;
        };
        let Some(&length) = self.lengths.get(last.id) else {
            return;
        };
        let next_id = last.id + 1;

        for direction in Direction::ALL {
            let mut child = Vec::with_capacity(current.len() + 1);
            child.extend_from_slice(current);
            child.push(Step::new(next_id, direction, length));

            if is_valid(&child, self.size) {
                self.frontier.push(child);
            } else {
                self.stats.pruned += 1;
            }
        }

        self.stats.max_frontier = self.stats.max_frontier.max(self.frontier.len());
        trace!(
            depth = current.len(),
            frontier = self.frontier.len(),
            "expanded candidate"
        );
    }
}

/// Finds a fold of `lengths` into a `size`-cube with no iteration cap.
pub fn solve(lengths: &[u32], size: u32) -> Result<Solution, SolveError> {
    Solver::new(lengths, size).solve()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{compute_bounds, materialize};
    use crate::validity::check;
    use crate::direction::Direction::*;

    fn assert_solution_matches(solution: &[Step], lengths: &[u32], size: u32) {
        assert_eq!(solution.len(), lengths.len());
        for (i, step) in solution.iter().enumerate() {
            assert_eq!(step.id, i + 1, "step {i} has wrong id");
            assert_eq!(step.length, lengths[i], "step {i} has wrong length");
        }
        assert_eq!(check(solution, size), Ok(()));
    }

    #[test]
    fn test_single_unit_cube() {
        let solution = solve(&[1], 1).unwrap();
        assert_eq!(solution, vec![Step::new(1, Forward, 1)]);
        assert_eq!(encode(&solution), "1F");
    }

    #[test]
    fn test_two_segments_fit_2x2x2() {
        let solution = solve(&[2, 2], 2).unwrap();
        assert_solution_matches(&solution, &[2, 2], 2);
        // last direction pushed is explored first
        assert_eq!(encode(&solution), "2F/2D");
    }

    #[test]
    fn test_trainer_follows_depth_first_order() {
        let lengths = [2u32; 7];
        let mut solver = Solver::new(&lengths, 2);
        let solution = solver.solve().unwrap();

        assert_solution_matches(&solution, &lengths, 2);
        assert_eq!(encode(&solution), "2F/2D/2R/2U/2B/2D/2L");
        assert_eq!(solver.stats().explored, 7);
    }

    #[test]
    fn test_too_many_cells_exhausts() {
        // nine cubes cannot fit a 2x2x2 cube
        let lengths = [2u32; 8];
        let mut solver = Solver::new(&lengths, 2);
        let result = solver.solve();

        let explored = solver.stats().explored;
        assert!(explored > 0);
        assert_eq!(result, Err(SolveError::Exhausted { explored }));
    }

    #[test]
    fn test_oversized_first_segment_has_no_solution() {
        assert_eq!(solve(&[3], 2), Err(SolveError::Exhausted { explored: 0 }));
    }

    #[test]
    fn test_huge_segment_has_no_solution() {
        assert_eq!(
            solve(&[3_000_000_000], 2),
            Err(SolveError::Exhausted { explored: 0 })
        );
        assert!(matches!(
            solve(&[2, 3_000_000_000, 2], 3),
            Err(SolveError::Exhausted { .. })
        ));
    }

    #[test]
    fn test_seventeen_segments_fit_3x3x3() {
        let lengths: [u32; 17] = [2, 3, 2, 2, 3, 2, 3, 2, 2, 3, 3, 2, 2, 2, 3, 3, 3];
        let solution = solve(&lengths, 3).unwrap();

        assert_solution_matches(&solution, &lengths, 3);
        let (sx, sy, sz) = compute_bounds(&materialize(&solution)).span();
        assert!(sx < 3 && sy < 3 && sz < 3);
    }

    #[test]
    fn test_rejects_degenerate_input() {
        assert_eq!(solve(&[], 3), Err(SolveError::EmptySequence));
        assert_eq!(solve(&[2, 2], 0), Err(SolveError::InvalidSize));
        assert_eq!(solve(&[2, 0, 2], 3), Err(SolveError::ZeroLength { index: 1 }));
    }

    #[test]
    fn test_iteration_limit() {
        let lengths = [2u32; 8];
        let mut solver = Solver::new(&lengths, 2).with_max_iterations(3);
        assert_eq!(solver.solve(), Err(SolveError::IterationLimit { limit: 3 }));
        assert_eq!(solver.stats().explored, 3);
    }

    #[test]
    fn test_append_only_expansion_never_duplicates() {
        let lengths = [2u32; 8];
        let mut solver = Solver::new(&lengths, 2);
        let _ = solver.solve();
        assert_eq!(solver.stats().duplicates, 0);
    }

    #[test]
    fn test_solver_can_be_rerun() {
        let lengths = [2u32, 2];
        let mut solver = Solver::new(&lengths, 2);
        let first = solver.solve().unwrap();
        let first_stats = solver.stats();
        let second = solver.solve().unwrap();

        assert_eq!(first, second);
        assert_eq!(first_stats, solver.stats());
    }
}
