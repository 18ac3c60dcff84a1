//! Legal move generation for the side to move.
//!
//! ## Pawn moves
//!
//! 1. One step in each direction (Up, Down, Left, Right) onto a free cell
//!    across an open edge.
//! 2. When the opponent is adjacent across an open edge, a straight jump over
//!    it. If the board edge or a wall stops the straight jump, the two cells
//!    beside the opponent (perpendicular to the approach) become reachable
//!    instead.
//!
//! ## Wall moves
//!
//! See [`super::walls`]. Pawn moves come first, then walls.

use smallvec::SmallVec;
use tracing::{error, instrument, trace};

use crate::core::{Direction, GameState, Move, Position};
use crate::error::{EngineError, EngineResult};

use super::transition::is_terminal;
use super::walls::wall_moves;

/// Pawn destinations. At most three steps plus two side-steps.
pub type PawnMoves = SmallVec<[Position; 5]>;

/// Every cell the active pawn may move to, plain steps first in
/// `Direction::ALL` order, then jump destinations.
#[must_use]
pub fn pawn_moves(state: &GameState) -> PawnMoves {
    let me = state.active_pawn().position();
    let opp = state.opponent_pawn().position();
    let mut moves = PawnMoves::new();

    for dir in Direction::ALL {
        if let Some(next) = me.step(dir) {
            if next != opp && !state.edge_blocked(me, next) {
                moves.push(next);
            }
        }
    }

    let Some(toward) = Direction::between(me, opp) else {
        return moves;
    };
    if state.edge_blocked(me, opp) {
        return moves;
    }

    match opp.step(toward).filter(|&jump| !state.edge_blocked(opp, jump)) {
        Some(jump) => moves.push(jump),
        None => {
            for side in toward.perpendicular() {
                if let Some(diag) = opp.step(side) {
                    if !state.edge_blocked(opp, diag) {
                        moves.push(diag);
                    }
                }
            }
        }
    }

    moves
}

/// Every legal move for the side to move.
///
/// Deterministic order: pawn moves (steps, then jumps), then walls with
/// anchors row-major and horizontal before vertical.
#[instrument(level = "trace", skip_all, fields(side = %state.active_player()))]
pub fn legal_moves(state: &GameState) -> Vec<Move> {
    let pawns = pawn_moves(state);
    let walls = wall_moves(state);

    let mut moves = Vec::with_capacity(pawns.len() + walls.len());
    moves.extend(pawns.into_iter().map(Move::Pawn));
    moves.extend(walls.into_iter().map(Move::Wall));

    trace!(count = moves.len(), "generated legal moves");
    moves
}

/// Legal moves, refusing terminal states and surfacing an empty move set.
///
/// An empty set in a live game means the path invariant was broken somewhere;
/// it is reported as `NoLegalMoves`, never treated as a draw.
pub fn checked_legal_moves(state: &GameState) -> EngineResult<Vec<Move>> {
    if is_terminal(state) {
        return Err(EngineError::GameOver);
    }
    let moves = legal_moves(state);
    if moves.is_empty() {
        error!(side = %state.active_player(), "no legal moves in a non-terminal state");
        return Err(EngineError::NoLegalMoves(state.active_player()));
    }
    Ok(moves)
}
