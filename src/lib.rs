//! # rust-quoridor
//!
//! A Quoridor rules engine built for search: legal move generation, immutable
//! state transitions and terminal detection on the 9×9 pawn-and-wall board.
//!
//! ## Design Principles
//!
//! 1. **Immutable States**: `apply` returns a new `GameState`; the old one is
//!    untouched and stays valid. Walls live in a persistent `im` set, so a
//!    state clones in O(1).
//!
//! 2. **Path Invariant**: No wall may cut either pawn off from its goal row.
//!    Every candidate wall is checked with a BFS before it is offered.
//!
//! 3. **Deterministic**: Move order is fixed and randomness only enters
//!    through an injected, seeded `GameRng`.
//!
//! ## Modules
//!
//! - `core`: Positions, sides, pawns, walls, moves, state, RNG, configuration
//! - `rules`: Reachability, move generation, transitions, `RulesEngine`
//! - `error`: Error types
//!
//! ## Usage
//!
//! ```
//! use rust_quoridor::{apply, is_terminal, legal_moves, GameState, Move, Position, Side};
//!
//! let state = GameState::initial(Side::Max);
//! let moves = legal_moves(&state);
//! assert_eq!(moves[0], Move::Pawn(Position::new(2, 5)));
//!
//! let next = apply(&state, moves[0]).unwrap();
//! assert_eq!(next.active_player(), Side::Min);
//! assert!(!is_terminal(&next));
//! ```

pub mod core;
pub mod error;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{
    Direction, GameConfig, GameRng, GameState, Move, Orientation, Pawn, Piece, Position, Side,
    SideMap, Wall, WallSet,
};

pub use crate::error::{EngineError, EngineResult, InvalidWallError};

pub use crate::rules::{
    apply, apply_unchecked, checked_legal_moves, has_path, is_terminal, legal_moves, winner,
    Quoridor, RulesEngine,
};
