//! State transitions and terminal detection.

use tracing::{debug, instrument, trace};

use crate::core::{GameState, Move, Side};
use crate::error::{EngineError, EngineResult};

use super::movegen::pawn_moves;
use super::walls::is_wall_placement_legal;

/// Check if either pawn stands on its goal row.
#[must_use]
pub fn is_terminal(state: &GameState) -> bool {
    winner(state).is_some()
}

/// The side whose pawn reached its goal row, if any.
#[must_use]
pub fn winner(state: &GameState) -> Option<Side> {
    Side::BOTH.into_iter().find(|&side| state.pawn(side).at_goal())
}

/// Check if `mv` is in `legal_moves(state)` without generating the full list.
#[must_use]
pub fn is_legal(state: &GameState, mv: &Move) -> bool {
    match mv {
        Move::Pawn(to) => pawn_moves(state).contains(to),
        Move::Wall(wall) => is_wall_placement_legal(state, wall),
    }
}

/// Apply a legal move, returning the successor state.
///
/// The input state is never modified. Fails with `GameOver` on a terminal
/// state and `IllegalMove` for anything `legal_moves` would not produce.
#[instrument(level = "trace", skip_all, fields(side = %state.active_player(), mv = %mv))]
pub fn apply(state: &GameState, mv: Move) -> EngineResult<GameState> {
    if is_terminal(state) {
        return Err(EngineError::GameOver);
    }
    if !is_legal(state, &mv) {
        debug!("rejected illegal move");
        return Err(EngineError::IllegalMove {
            mv,
            side: state.active_player(),
        });
    }
    Ok(apply_unchecked(state, mv))
}

/// Apply a move without validating it.
///
/// `mv` must come from `legal_moves(state)`. Intended for search layers that
/// only ever apply generated moves.
#[must_use]
pub fn apply_unchecked(state: &GameState, mv: Move) -> GameState {
    trace!(side = %state.active_player(), mv = %mv, "apply");
    match mv {
        Move::Pawn(to) => state.with_active_pawn_at(to),
        Move::Wall(wall) => state.with_wall_placed(wall),
    }
}
