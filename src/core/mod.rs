//! Core types: positions, sides, pieces, moves, state, RNG, configuration.
//!
//! Everything here is a plain value. Rules live in `crate::rules`.

pub mod action;
pub mod config;
pub mod piece;
pub mod player;
pub mod position;
pub mod rng;
pub mod state;

pub use action::Move;
pub use config::{GameConfig, DEFAULT_STARTING_WALLS};
pub use piece::{Orientation, Pawn, Piece, Wall, WallSet};
pub use player::{Side, SideMap};
pub use position::{Direction, Position, BOARD_SIZE, CELL_COUNT, WALL_GRID_SIZE};
pub use rng::GameRng;
pub use state::GameState;
