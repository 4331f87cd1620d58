//! Ship bearings.

use core::fmt;
use core::str::FromStr;

use crate::common::ParseError;

/// Direction a ship is facing on the board.
///
/// `Unknown` is the fallback for unrecognised input; no shape other than the
/// single-cell barge can be laid out with it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "std", serde(rename_all = "lowercase"))]
pub enum Compass {
    North,
    South,
    East,
    West,
    Unknown,
}

impl Compass {
    /// The four directions a shaped ship can be laid out along.
    pub const CARDINALS: [Compass; 4] = [
        Compass::North,
        Compass::South,
        Compass::East,
        Compass::West,
    ];

    /// Single-character code of the direction (`o` is west).
    pub const fn direction(self) -> char {
        match self {
            Compass::North => 'n',
            Compass::South => 's',
            Compass::East => 'e',
            Compass::West => 'o',
            Compass::Unknown => 'u',
        }
    }

    /// Map a character code back to a direction, `Unknown` if unrecognised.
    /// Upper-case codes are accepted as well.
    pub fn from_char(ch: char) -> Self {
        match ch.to_ascii_lowercase() {
            'n' => Compass::North,
            's' => Compass::South,
            'e' => Compass::East,
            'o' => Compass::West,
            _ => Compass::Unknown,
        }
    }

    pub fn is_cardinal(self) -> bool {
        self != Compass::Unknown
    }
}

impl fmt::Display for Compass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.direction())
    }
}

/// Parses a single bearing code; unlike [`Compass::from_char`] anything
/// unrecognised is an error.
impl FromStr for Compass {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.trim().chars();
        match (chars.next(), chars.next()) {
            (Some(ch), None) if "nseou".contains(ch.to_ascii_lowercase()) => {
                Ok(Compass::from_char(ch))
            }
            _ => Err(ParseError::BadCompass),
        }
    }
}
