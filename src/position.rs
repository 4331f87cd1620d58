//! Board coordinates.

use core::fmt;
use core::str::FromStr;

use crate::common::ParseError;

/// A (row, column) cell address.
///
/// Coordinates are signed: shots may be fired off the board and angular
/// shapes extend left of their anchor, so out-of-range values must be
/// representable. Board containment is checked by [`crate::Rules`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    row: i32,
    col: i32,
}

impl Position {
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    pub const fn row(&self) -> i32 {
        self.row
    }

    pub const fn col(&self) -> i32 {
        self.col
    }

    /// Position shifted by (`dr`, `dc`), `None` if either axis overflows.
    pub fn offset(&self, dr: i32, dc: i32) -> Option<Self> {
        Some(Self::new(self.row.checked_add(dr)?, self.col.checked_add(dc)?))
    }

    /// True when `other` is at most `clearance` cells away along both axes,
    /// so diagonal neighbours count. Equal positions are always within.
    pub fn is_within(&self, other: &Position, clearance: u32) -> bool {
        self.row.abs_diff(other.row) <= clearance && self.col.abs_diff(other.col) <= clearance
    }

    /// One of the eight surrounding cells, or the cell itself.
    pub fn is_adjacent_to(&self, other: &Position) -> bool {
        self.is_within(other, 1)
    }
}

impl From<(i32, i32)> for Position {
    fn from((row, col): (i32, i32)) -> Self {
        Self::new(row, col)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Parses `row,col`, surrounding whitespace allowed.
impl FromStr for Position {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (row, col) = s.split_once(',').ok_or(ParseError::BadPosition)?;
        let row = row.trim().parse().map_err(|_| ParseError::BadPosition)?;
        let col = col.trim().parse().map_err(|_| ParseError::BadPosition)?;
        Ok(Position::new(row, col))
    }
}
