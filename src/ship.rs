//! Ship kinds, footprint derivation and per-ship damage tracking.

use alloc::string::ToString;
use alloc::vec::Vec;
use core::fmt;
use core::str::FromStr;

use crate::common::{ParseError, ShipError};
use crate::compass::Compass;
use crate::position::Position;

/// Shape class of a ship. Each kind has a fixed size and lays out its
/// footprint from an anchor and a bearing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "std", serde(rename_all = "lowercase"))]
pub enum ShipKind {
    /// Single cell.
    Barge,
    /// Two cells in a straight run.
    Caravel,
    /// Three cells in a straight run.
    Carrack,
    /// Four cells in a straight run.
    Frigate,
    /// Five cells in an angular shape that depends on the bearing.
    Galleon,
}

/// Galleon offsets from the anchor, as (row, col), one set per bearing.
const GALLEON_NORTH: [(i32, i32); 5] = [(0, 0), (0, 1), (0, 2), (1, 1), (2, 1)];
const GALLEON_SOUTH: [(i32, i32); 5] = [(0, 0), (1, 0), (2, -1), (2, 0), (2, 1)];
const GALLEON_EAST: [(i32, i32); 5] = [(0, 0), (1, -2), (1, -1), (1, 0), (2, 0)];
const GALLEON_WEST: [(i32, i32); 5] = [(0, 0), (1, 0), (1, 1), (1, 2), (2, 0)];

impl ShipKind {
    pub const ALL: [ShipKind; 5] = [
        ShipKind::Barge,
        ShipKind::Caravel,
        ShipKind::Carrack,
        ShipKind::Frigate,
        ShipKind::Galleon,
    ];

    /// Number of cells the ship occupies.
    pub const fn size(self) -> usize {
        match self {
            ShipKind::Barge => 1,
            ShipKind::Caravel => 2,
            ShipKind::Carrack => 3,
            ShipKind::Frigate => 4,
            ShipKind::Galleon => 5,
        }
    }

    /// Category name used for grouping ships in a fleet.
    pub const fn category(self) -> &'static str {
        match self {
            ShipKind::Barge => "barge",
            ShipKind::Caravel => "caravel",
            ShipKind::Carrack => "carrack",
            ShipKind::Frigate => "frigate",
            ShipKind::Galleon => "galleon",
        }
    }

    /// Look up a kind by its category name.
    pub fn from_category(category: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.category().eq_ignore_ascii_case(category.trim()))
    }

    /// Cells occupied by a ship of this kind anchored at `anchor`.
    ///
    /// Straight ships run down from the anchor when facing north or south
    /// and to the right when facing east or west; the bearing only selects
    /// the axis. A barge ignores the bearing entirely.
    pub fn footprint(self, anchor: Position, bearing: Compass) -> Result<Vec<Position>, ShipError> {
        let invalid = ShipError::InvalidOrientation {
            kind: self,
            bearing,
        };
        let out_of_range = ShipError::OutOfRange { kind: self, anchor };
        match self {
            ShipKind::Barge => Ok(alloc::vec![anchor]),
            ShipKind::Caravel | ShipKind::Carrack | ShipKind::Frigate => {
                let (dr, dc) = match bearing {
                    Compass::North | Compass::South => (1, 0),
                    Compass::East | Compass::West => (0, 1),
                    Compass::Unknown => return Err(invalid),
                };
                (0..self.size() as i32)
                    .map(|i| anchor.offset(dr * i, dc * i))
                    .collect::<Option<Vec<_>>>()
                    .ok_or(out_of_range)
            }
            ShipKind::Galleon => {
                let offsets = match bearing {
                    Compass::North => &GALLEON_NORTH,
                    Compass::South => &GALLEON_SOUTH,
                    Compass::East => &GALLEON_EAST,
                    Compass::West => &GALLEON_WEST,
                    Compass::Unknown => return Err(invalid),
                };
                offsets
                    .iter()
                    .map(|&(dr, dc)| anchor.offset(dr, dc))
                    .collect::<Option<Vec<_>>>()
                    .ok_or(out_of_range)
            }
        }
    }
}

impl fmt::Display for ShipKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.category())
    }
}

impl FromStr for ShipKind {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_category(s).ok_or(ParseError::BadKind)
    }
}

/// A ship laid out on the board, tracking which of its cells have been hit.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub struct Ship {
    kind: ShipKind,
    bearing: Compass,
    anchor: Position,
    positions: Vec<Position>,
    hits: Vec<Position>,
}

impl Ship {
    /// Lay out a ship of `kind` at `anchor` facing `bearing`.
    pub fn new(kind: ShipKind, bearing: Compass, anchor: Position) -> Result<Self, ShipError> {
        let positions = kind.footprint(anchor, bearing)?;
        Ok(Ship {
            kind,
            bearing,
            anchor,
            positions,
            hits: Vec::with_capacity(kind.size()),
        })
    }

    /// Build a ship from its category name.
    pub fn build(category: &str, bearing: Compass, anchor: Position) -> Result<Self, ShipError> {
        let kind = ShipKind::from_category(category)
            .ok_or_else(|| ShipError::UnknownCategory(category.to_string()))?;
        Ship::new(kind, bearing, anchor)
    }

    pub fn kind(&self) -> ShipKind {
        self.kind
    }

    pub fn category(&self) -> &'static str {
        self.kind.category()
    }

    pub fn bearing(&self) -> Compass {
        self.bearing
    }

    /// Position the footprint was derived from.
    pub fn anchor(&self) -> Position {
        self.anchor
    }

    pub fn size(&self) -> usize {
        self.positions.len()
    }

    /// Occupied cells in derivation order.
    pub fn positions(&self) -> &[Position] {
        &self.positions
    }

    /// Occupied cells that have been shot, in the order they were hit.
    pub fn hits(&self) -> &[Position] {
        &self.hits
    }

    pub fn occupies(&self, pos: &Position) -> bool {
        self.positions.contains(pos)
    }

    pub fn is_hit(&self, pos: &Position) -> bool {
        self.hits.contains(pos)
    }

    /// Record a shot at `pos`. Returns `true` if it damaged a previously
    /// intact cell; shots elsewhere or on damaged cells change nothing.
    pub fn shoot(&mut self, pos: &Position) -> bool {
        if self.occupies(pos) && !self.is_hit(pos) {
            self.hits.push(*pos);
            true
        } else {
            false
        }
    }

    /// At least one cell is still intact.
    pub fn is_afloat(&self) -> bool {
        self.hits.len() < self.positions.len()
    }

    pub fn top_most(&self) -> i32 {
        self.positions
            .iter()
            .map(Position::row)
            .min()
            .unwrap_or(self.anchor.row())
    }

    pub fn bottom_most(&self) -> i32 {
        self.positions
            .iter()
            .map(Position::row)
            .max()
            .unwrap_or(self.anchor.row())
    }

    pub fn left_most(&self) -> i32 {
        self.positions
            .iter()
            .map(Position::col)
            .min()
            .unwrap_or(self.anchor.col())
    }

    pub fn right_most(&self) -> i32 {
        self.positions
            .iter()
            .map(Position::col)
            .max()
            .unwrap_or(self.anchor.col())
    }

    /// Whether any cell of this ship is within `clearance` of `pos`.
    pub fn too_close_to_position(&self, pos: &Position, clearance: u32) -> bool {
        self.positions.iter().any(|p| p.is_within(pos, clearance))
    }

    /// Whether the two footprints overlap or come within `clearance` cells
    /// of each other, diagonals included.
    pub fn too_close_to(&self, other: &Ship, clearance: u32) -> bool {
        other
            .positions
            .iter()
            .any(|p| self.too_close_to_position(p, clearance))
    }
}

impl fmt::Display for Ship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{} {} {}]", self.kind, self.bearing, self.anchor)
    }
}

/// Parses `category:bearing:row,col`, e.g. `galleon:n:0,0`.
impl FromStr for Ship {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.splitn(3, ':');
        let (kind, bearing, anchor) = match (parts.next(), parts.next(), parts.next()) {
            (Some(k), Some(b), Some(a)) => (k, b, a),
            _ => return Err(ParseError::BadShip),
        };
        let kind: ShipKind = kind.parse()?;
        let bearing: Compass = bearing.parse()?;
        let anchor: Position = anchor.parse()?;
        Ok(Ship::new(kind, bearing, anchor)?)
    }
}
