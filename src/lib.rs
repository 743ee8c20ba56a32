//! Snake Cube Solver Library
//!
//! Finds a fold of a snake cube: a chain of straight segments that must be
//! bent at every joint so the whole chain packs a solid cube. The search is a
//! depth-first backtracker pruned by bounding-box and self-overlap checks.

pub mod direction;
pub mod encoding;
pub mod geometry;
pub mod grid;
pub mod snake;
pub mod solver;
pub mod validity;

pub use direction::Direction;
pub use encoding::{decode, encode, DecodeError};
pub use snake::{Puzzle, Solution, Step};
pub use solver::{solve, SearchStats, SolveError, Solver};
pub use validity::{is_valid, Violation};
