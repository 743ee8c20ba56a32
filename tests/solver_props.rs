//! Invariants every returned fold must satisfy, over random small puzzles.

use proptest::prelude::*;
use snake_cube::geometry::{compute_bounds, materialize};
use snake_cube::snake::cell_count;
use snake_cube::validity::check;
use snake_cube::{solve, SolveError, Solver};

/// Keeps exhaustive searches over unsolvable inputs short.
const ITERATION_CAP: usize = 20_000;

fn assert_fold_matches_input(solution: &[snake_cube::Step], lengths: &[u32], size: u32) {
    assert_eq!(solution.len(), lengths.len());
    for (i, step) in solution.iter().enumerate() {
        assert_eq!(step.id, i + 1);
        assert_eq!(step.length, lengths[i]);
    }
    assert_eq!(check(solution, size), Ok(()));
}

#[test]
fn single_unit_cube() {
    let solution = solve(&[1], 1).unwrap();
    assert_eq!(snake_cube::encode(&solution), "1F");
}

#[test]
fn two_segments_in_2x2x2() {
    let solution = solve(&[2, 2], 2).unwrap();
    assert_fold_matches_input(&solution, &[2, 2], 2);
}

#[test]
fn nine_cubes_cannot_fill_2x2x2() {
    let result = solve(&[2, 2, 2, 2, 2, 2, 2, 2], 2);
    assert!(matches!(result, Err(SolveError::Exhausted { .. })));
}

#[test]
fn seventeen_segments_fit_3x3x3() {
    let lengths: [u32; 17] = [2, 3, 2, 2, 3, 2, 3, 2, 2, 3, 3, 2, 2, 2, 3, 3, 3];
    let solution = solve(&lengths, 3).unwrap();

    assert_fold_matches_input(&solution, &lengths, 3);
    let path = materialize(&solution);
    assert_eq!(path.len() as u64, cell_count(&lengths));
    let (sx, sy, sz) = compute_bounds(&path).span();
    assert!(sx < 3 && sy < 3 && sz < 3);
}

#[test]
fn independent_solvers_agree() {
    let lengths: [u32; 17] = [2, 3, 2, 2, 3, 2, 3, 2, 2, 3, 3, 2, 2, 2, 3, 3, 3];
    let mut first = Solver::new(&lengths, 3);
    let mut second = Solver::new(&lengths, 3);

    assert_eq!(first.solve(), second.solve());
    assert_eq!(first.stats(), second.stats());
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn returned_folds_are_valid(
        lengths in prop::collection::vec(2u32..=3, 1..8),
        size in 2u32..=3,
    ) {
        let mut solver = Solver::new(&lengths, size).with_max_iterations(ITERATION_CAP);
        match solver.solve() {
            Ok(solution) => assert_fold_matches_input(&solution, &lengths, size),
            Err(SolveError::Exhausted { .. }) | Err(SolveError::IterationLimit { .. }) => {}
            Err(e) => prop_assert!(false, "unexpected error {e}"),
        }
    }

    #[test]
    fn overfull_chains_never_fold(
        lengths in prop::collection::vec(2u32..=3, 8..12),
    ) {
        prop_assume!(cell_count(&lengths) > 8);
        let mut solver = Solver::new(&lengths, 2).with_max_iterations(ITERATION_CAP);
        let result = solver.solve();
        prop_assert!(
            matches!(result, Err(SolveError::Exhausted { .. })),
            "expected exhaustion, got {:?}",
            result
        );
        prop_assert!(solver.stats().explored < ITERATION_CAP);
    }
}
