//! Game rules.
//!
//! - `reachability`: BFS path checks over the wall graph
//! - `walls`: edge blocking, anchor conflicts, wall move generation
//! - `movegen`: pawn moves and the full legal move list
//! - `transition`: applying moves, terminal detection
//! - `engine`: the `RulesEngine` trait search layers program against
//! - `quoridor`: the standard rules as a `RulesEngine`

pub mod engine;
pub mod movegen;
pub mod quoridor;
pub mod reachability;
pub mod transition;
pub mod walls;

pub use engine::RulesEngine;
pub use movegen::{checked_legal_moves, legal_moves, pawn_moves, PawnMoves};
pub use quoridor::Quoridor;
pub use reachability::{has_path, shortest_path_len};
pub use transition::{apply, apply_unchecked, is_legal, is_terminal, winner};
pub use walls::{conflicts, edge_blocked, is_wall_placement_legal, preserves_paths, wall_moves};
