//! The six axis-aligned moves a segment can take.
//!
//! Each direction is bound to exactly one unit vector, so folding a snake is
//! just repeated vector addition from the origin.

use std::fmt;

use crate::geometry::Coord;

/// An axis-aligned unit move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Direction {
    /// Away from the solver (+x).
    Forward,
    /// Towards the solver (-x).
    Backward,
    /// +y. Answers written with the opposite handedness (Right = +y) swap
    /// every `L` and `R`, and their grids come out mirrored left-to-right.
    Left,
    /// -y. See [`Direction::Left`] for the handedness note.
    Right,
    /// +z
    Up,
    /// -z
    Down,
}

impl Direction {
    /// Every direction, in the order the solver expands them.
    ///
    /// Children are pushed onto the frontier in this order, so the last entry
    /// is the first one explored.
    pub const ALL: [Direction; 6] = [
        Direction::Forward,
        Direction::Backward,
        Direction::Left,
        Direction::Right,
        Direction::Up,
        Direction::Down,
    ];

    /// Unit vector for this direction.
    #[inline(always)]
    pub const fn delta(self) -> Coord {
        match self {
            Direction::Forward => (1, 0, 0),
            Direction::Backward => (-1, 0, 0),
            Direction::Left => (0, 1, 0),
            Direction::Right => (0, -1, 0),
            Direction::Up => (0, 0, 1),
            Direction::Down => (0, 0, -1),
        }
    }

    /// Name of the axis this direction moves along.
    pub const fn axis(self) -> char {
        match self {
            Direction::Forward | Direction::Backward => 'x',
            Direction::Left | Direction::Right => 'y',
            Direction::Up | Direction::Down => 'z',
        }
    }

    /// Single-letter code used by the answer encoding.
    pub const fn letter(self) -> char {
        match self {
            Direction::Forward => 'F',
            Direction::Backward => 'B',
            Direction::Left => 'L',
            Direction::Right => 'R',
            Direction::Up => 'U',
            Direction::Down => 'D',
        }
    }

    /// Inverse of [`Direction::letter`]. Only upper-case letters are accepted.
    pub fn from_letter(letter: char) -> Option<Self> {
        Self::ALL.into_iter().find(|d| d.letter() == letter)
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}
