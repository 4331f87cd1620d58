//! Common types: construction errors, parse errors and shot outcomes.

use alloc::string::String;
use core::fmt;

use crate::compass::Compass;
use crate::position::Position;
use crate::ship::ShipKind;

/// Errors returned when building a ship.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShipError {
    /// The bearing cannot produce a footprint for this kind of ship.
    InvalidOrientation { kind: ShipKind, bearing: Compass },
    /// Some cell of the footprint cannot be addressed from this anchor.
    OutOfRange { kind: ShipKind, anchor: Position },
    /// No ship kind answers to the given category.
    UnknownCategory(String),
}

impl fmt::Display for ShipError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShipError::InvalidOrientation { kind, bearing } => {
                write!(f, "invalid bearing '{}' for a {}", bearing, kind.category())
            }
            ShipError::OutOfRange { kind, anchor } => {
                write!(f, "a {} anchored at {} leaves the coordinate range", kind.category(), anchor)
            }
            ShipError::UnknownCategory(category) => {
                write!(f, "unknown ship category '{}'", category)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ShipError {}

/// Errors returned when reading positions, bearings or ships from text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Expected `row,col` with two integers.
    BadPosition,
    /// Expected a single bearing code (`n`, `s`, `e`, `o`, `u`).
    BadCompass,
    /// Expected a ship category.
    BadKind,
    /// Expected `category:bearing:row,col`.
    BadShip,
    /// The descriptor parsed but the ship could not be built.
    Ship(ShipError),
}

impl From<ShipError> for ParseError {
    fn from(err: ShipError) -> Self {
        ParseError::Ship(err)
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::BadPosition => write!(f, "expected a position as 'row,col'"),
            ParseError::BadCompass => write!(f, "expected a bearing: one of n, s, e, o"),
            ParseError::BadKind => write!(f, "expected a ship category"),
            ParseError::BadShip => write!(f, "expected a ship as 'category:bearing:row,col'"),
            ParseError::Ship(e) => write!(f, "{}", e),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ParseError {}

/// Classification of a single fired shot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "std", serde(rename_all = "lowercase"))]
pub enum ShotOutcome {
    /// Outside the board; not recorded.
    Invalid,
    /// Already in the shot history; not recorded again.
    Repeated,
    /// Recorded, no ship there.
    Miss,
    /// Recorded, damaged a ship that is still afloat.
    Hit,
    /// Recorded, landed the last hit on the ship at this fleet index.
    Sunk(usize),
}

impl ShotOutcome {
    /// Whether the shot was appended to the shot history.
    pub fn is_recorded(self) -> bool {
        !matches!(self, ShotOutcome::Invalid | ShotOutcome::Repeated)
    }

    /// Whether the shot damaged a ship.
    pub fn is_hit(self) -> bool {
        matches!(self, ShotOutcome::Hit | ShotOutcome::Sunk(_))
    }
}
