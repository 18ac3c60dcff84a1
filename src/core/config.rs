//! Game configuration.
//!
//! The board geometry is fixed at 9×9. What a game may vary:
//! - `starting_walls`: walls each side starts with
//! - `starting_player`: a fixed side, or `None` to draw one from the game RNG

use serde::{Deserialize, Serialize};

use super::player::Side;

/// Walls each side receives in a standard two-player game.
pub const DEFAULT_STARTING_WALLS: u8 = 10;

/// Complete game configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Walls each side starts with.
    pub starting_walls: u8,

    /// Side that moves first. `None` draws it from the RNG at setup.
    pub starting_player: Option<Side>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            starting_walls: DEFAULT_STARTING_WALLS,
            starting_player: None,
        }
    }
}

impl GameConfig {
    /// Create the standard configuration with a random starting side.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of walls each side starts with.
    #[must_use]
    pub fn with_starting_walls(mut self, walls: u8) -> Self {
        self.starting_walls = walls;
        self
    }

    /// Fix the side that moves first.
    #[must_use]
    pub fn with_starting_player(mut self, side: Side) -> Self {
        self.starting_player = Some(side);
        self
    }
}
