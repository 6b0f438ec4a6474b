//! Passage direction and the turnstile's "previous tick" state.

use std::fmt;
use std::str::FromStr;

use crate::CoreError;

/// Which way a person wants to pass through the turnstile.
///
/// The numeric codes (`Enter = 0`, `Exit = 1`) are the input encoding.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Direction {
    Enter,
    Exit,
}

impl Direction {
    /// Decode the numeric input code.
    pub fn from_code(code: u8) -> Result<Direction, CoreError> {
        match code {
            0 => Ok(Direction::Enter),
            1 => Ok(Direction::Exit),
            other => Err(CoreError::InvalidDirection(other.to_string())),
        }
    }

    /// The numeric input code.
    #[inline]
    pub fn code(self) -> u8 {
        match self {
            Direction::Enter => 0,
            Direction::Exit  => 1,
        }
    }

    /// Human-readable label, used for CSV column values.
    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Enter => "enter",
            Direction::Exit  => "exit",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Accepts `0`/`1` or `enter`/`exit` (case-insensitive).
impl FromStr for Direction {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("enter") {
            return Ok(Direction::Enter);
        }
        if s.eq_ignore_ascii_case("exit") {
            return Ok(Direction::Exit);
        }
        match s.parse::<u8>() {
            Ok(code) => Direction::from_code(code),
            Err(_)   => Err(CoreError::InvalidDirection(s.to_owned())),
        }
    }
}

/// What the turnstile did in the immediately preceding tick.
///
/// `Idle` is the initial state and the state after every idle gap.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LastDirection {
    #[default]
    Idle,
    Enter,
    Exit,
}

impl LastDirection {
    #[inline]
    pub fn is_idle(self) -> bool {
        matches!(self, LastDirection::Idle)
    }
}

impl From<Direction> for LastDirection {
    #[inline]
    fn from(d: Direction) -> Self {
        match d {
            Direction::Enter => LastDirection::Enter,
            Direction::Exit  => LastDirection::Exit,
        }
    }
}

impl fmt::Display for LastDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            LastDirection::Idle  => "idle",
            LastDirection::Enter => "enter",
            LastDirection::Exit  => "exit",
        })
    }
}
