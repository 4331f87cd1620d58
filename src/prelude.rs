//! Commonly used types and utilities for ease of import.

pub use crate::{Compass, Fleet, Game, Position, Rules, Ship, ShipKind, ShotOutcome};
