use alloc::vec::Vec;

use crate::{common::ShotOutcome, fleet::Fleet, position::Position, ship::Ship};

/// Snapshot of a game's shot statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct GameStats {
    pub invalid_shots: usize,
    pub repeated_shots: usize,
    pub hits: usize,
    pub sunk_ships: usize,
    pub remaining_ships: usize,
}

/// Resolves shots fired at a fleet and keeps the shot history and counters.
#[derive(Debug, Clone)]
pub struct Game {
    fleet: Fleet,
    shots: Vec<Position>,
    invalid_shots: usize,
    repeated_shots: usize,
    hits: usize,
    sunk_ships: usize,
}

impl Game {
    pub fn new(fleet: Fleet) -> Self {
        Self {
            fleet,
            shots: Vec::new(),
            invalid_shots: 0,
            repeated_shots: 0,
            hits: 0,
            sunk_ships: 0,
        }
    }

    /// Classify a shot at `pos` and apply it.
    ///
    /// Checks run in a fixed order: off-board shots count as invalid, shots
    /// already in the history count as repeated, and neither is recorded.
    /// Any other shot is appended to the history and then resolved against
    /// the fleet as a miss, a hit or a sinking hit.
    pub fn shoot(&mut self, pos: Position) -> ShotOutcome {
        let outcome = self.resolve(pos);
        log::debug!("shot at {}: {:?}", pos, outcome);
        outcome
    }

    fn resolve(&mut self, pos: Position) -> ShotOutcome {
        if !self.fleet.rules().contains(&pos) {
            self.invalid_shots += 1;
            return ShotOutcome::Invalid;
        }
        if self.shots.contains(&pos) {
            self.repeated_shots += 1;
            return ShotOutcome::Repeated;
        }
        self.shots.push(pos);

        let Some((index, ship)) = self.fleet.ship_at_mut(&pos) else {
            return ShotOutcome::Miss;
        };
        ship.shoot(&pos);
        self.hits += 1;
        if ship.is_afloat() {
            return ShotOutcome::Hit;
        }
        self.sunk_ships += 1;
        log::info!("sunk {}", ship);
        ShotOutcome::Sunk(index)
    }

    /// Fire at `pos`, returning the ship sunk by this shot, if any.
    pub fn fire(&mut self, pos: Position) -> Option<&Ship> {
        match self.shoot(pos) {
            ShotOutcome::Sunk(index) => self.fleet.ships().get(index),
            _ => None,
        }
    }

    pub fn fleet(&self) -> &Fleet {
        &self.fleet
    }

    /// Recorded shots in firing order; off-board and repeated shots are absent.
    pub fn shots(&self) -> &[Position] {
        &self.shots
    }

    pub fn invalid_shots(&self) -> usize {
        self.invalid_shots
    }

    pub fn repeated_shots(&self) -> usize {
        self.repeated_shots
    }

    pub fn hits(&self) -> usize {
        self.hits
    }

    pub fn sunk_ships(&self) -> usize {
        self.sunk_ships
    }

    /// Ships still afloat, counted from the fleet on each call.
    pub fn remaining_ships(&self) -> usize {
        self.fleet.afloat_ships().len()
    }

    /// No ship is left afloat.
    pub fn is_over(&self) -> bool {
        self.remaining_ships() == 0
    }

    pub fn stats(&self) -> GameStats {
        GameStats {
            invalid_shots: self.invalid_shots,
            repeated_shots: self.repeated_shots,
            hits: self.hits,
            sunk_ships: self.sunk_ships,
            remaining_ships: self.remaining_ships(),
        }
    }
}
