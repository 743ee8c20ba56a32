//! Textual answer format: `<length><letter>` per step, joined by `/`.
//!
//! The encoded text doubles as the search's dedup key, so it has to be
//! injective: a decimal length is always followed by exactly one direction
//! letter, and `/` never appears inside a step.

use std::fmt::Write;

use thiserror::Error;

use crate::direction::Direction;
use crate::snake::{Solution, Step};

/// Separator between encoded steps.
pub const SEPARATOR: char = '/';

/// Errors from parsing an encoded answer. Segment numbers are 1-based.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    #[error("empty answer")]
    Empty,

    #[error("segment {segment}: missing length")]
    MissingLength { segment: usize },

    #[error("segment {segment}: invalid length {text:?}")]
    InvalidLength { segment: usize, text: String },

    #[error("segment {segment}: missing direction letter")]
    MissingDirection { segment: usize },

    #[error("segment {segment}: unknown direction {letter:?}")]
    UnknownDirection { segment: usize, letter: String },
}

/// Encodes a step sequence, e.g. `3F/2D/2B`.
pub fn encode(solution: &[Step]) -> String {
    let mut key = String::with_capacity(solution.len() * 3);
    for (i, step) in solution.iter().enumerate() {
        if i > 0 {
            key.push(SEPARATOR);
        }
        // writing to a String cannot fail
        let _ = write!(key, "{}{}", step.length, step.direction.letter());
    }
    key
}

/// Parses an encoded answer back into steps, numbering them from 1.
///
/// Surrounding whitespace is ignored; lengths must be positive decimals.
pub fn decode(text: &str) -> Result<Solution, DecodeError> {
    let text = text.trim();
    if text.is_empty() {
        return Err(DecodeError::Empty);
    }

    text.split(SEPARATOR)
        .enumerate()
        .map(|(index, part)| decode_step(index + 1, part.trim()))
        .collect()
}

fn decode_step(segment: usize, part: &str) -> Result<Step, DecodeError> {
    let digits_end = part
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(part.len());
    let (digits, letter) = part.split_at(digits_end);

    if digits.is_empty() {
        return Err(DecodeError::MissingLength { segment });
    }
    let length = match digits.parse::<u32>() {
        Ok(length) if length > 0 => length,
        _ => {
            return Err(DecodeError::InvalidLength {
                segment,
                text: digits.to_string(),
            })
        }
    };

    let mut letters = letter.chars();
    let direction = match (letters.next(), letters.next()) {
        (None, _) => return Err(DecodeError::MissingDirection { segment }),
        (Some(c), None) => Direction::from_letter(c),
        (Some(_), Some(_)) => None,
    };

    direction
        .map(|direction| Step::new(segment, direction, length))
        .ok_or_else(|| DecodeError::UnknownDirection {
            segment,
            letter: letter.to_string(),
        })
}
