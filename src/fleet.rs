//! Fleet container and placement validation.

use alloc::vec::Vec;

use crate::config::Rules;
use crate::position::Position;
use crate::ship::Ship;

/// Ships placed on one board, in insertion order.
///
/// Every accepted ship lies on the board and keeps the configured clearance
/// from every other ship; the fleet never holds more than
/// `rules.max_fleet_size` ships.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fleet {
    rules: Rules,
    ships: Vec<Ship>,
}

impl Fleet {
    /// Empty fleet under the default rules.
    pub fn new() -> Self {
        Self::with_rules(Rules::default())
    }

    pub fn with_rules(rules: Rules) -> Self {
        Self {
            rules,
            ships: Vec::with_capacity(rules.max_fleet_size),
        }
    }

    pub fn rules(&self) -> &Rules {
        &self.rules
    }

    pub fn ships(&self) -> &[Ship] {
        &self.ships
    }

    pub fn len(&self) -> usize {
        self.ships.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ships.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.ships.len() >= self.rules.max_fleet_size
    }

    /// Add `ship` if the fleet has room, it lies on the board and it keeps
    /// clear of every ship already placed. Returns whether it was accepted.
    pub fn try_add(&mut self, ship: Ship) -> bool {
        if self.is_full() {
            log::debug!("rejected {}: fleet already holds {} ships", ship, self.len());
            return false;
        }
        if !self.is_inside_board(&ship) {
            log::debug!("rejected {}: outside the board", ship);
            return false;
        }
        if self.collision_risk(&ship) {
            log::debug!("rejected {}: too close to another ship", ship);
            return false;
        }
        log::debug!("placed {}", ship);
        self.ships.push(ship);
        true
    }

    /// Whether every cell of `ship` lies on the board.
    pub fn is_inside_board(&self, ship: &Ship) -> bool {
        ship.positions().iter().all(|p| self.rules.contains(p))
    }

    /// Whether `ship` overlaps or comes within the minimum spacing of any
    /// ship already in the fleet.
    pub fn collision_risk(&self, ship: &Ship) -> bool {
        self.ships
            .iter()
            .any(|placed| placed.too_close_to(ship, self.rules.min_spacing))
    }

    /// First ship, in insertion order, occupying `pos`.
    pub fn ship_at(&self, pos: &Position) -> Option<&Ship> {
        self.ships.iter().find(|s| s.occupies(pos))
    }

    /// First ship occupying `pos`, with its index in the fleet.
    pub(crate) fn ship_at_mut(&mut self, pos: &Position) -> Option<(usize, &mut Ship)> {
        self.ships
            .iter_mut()
            .enumerate()
            .find(|(_, s)| s.occupies(pos))
    }

    pub fn ships_of_category(&self, category: &str) -> Vec<&Ship> {
        self.ships
            .iter()
            .filter(|s| s.category() == category)
            .collect()
    }

    /// Ships with at least one intact cell.
    pub fn afloat_ships(&self) -> Vec<&Ship> {
        self.ships.iter().filter(|s| s.is_afloat()).collect()
    }
}

impl Default for Fleet {
    fn default() -> Self {
        Self::new()
    }
}
