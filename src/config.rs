use crate::position::Position;

/// Side length of the square board.
pub const BOARD_SIZE: u8 = 10;
/// Upper bound on the number of ships in a fleet.
pub const FLEET_SIZE: usize = 10;
/// Clearance required between the footprints of two distinct ships.
pub const MIN_SPACING: u32 = 1;

/// Board geometry and placement limits shared by the fleet and the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Rules {
    pub board_size: u8,
    pub max_fleet_size: usize,
    pub min_spacing: u32,
}

impl Rules {
    pub const fn new(board_size: u8, max_fleet_size: usize, min_spacing: u32) -> Self {
        Self {
            board_size,
            max_fleet_size,
            min_spacing,
        }
    }

    /// Whether `pos` lies on the board; `board_size - 1` is the last row and column.
    pub fn contains(&self, pos: &Position) -> bool {
        let size = i32::from(self.board_size);
        (0..size).contains(&pos.row()) && (0..size).contains(&pos.col())
    }
}

impl Default for Rules {
    fn default() -> Self {
        Self::new(BOARD_SIZE, FLEET_SIZE, MIN_SPACING)
    }
}
