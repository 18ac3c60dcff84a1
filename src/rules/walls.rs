//! Wall placement rules.
//!
//! A wall may be placed when the side to move has one left, its anchor is
//! free (no wall of either orientation sits on the same intersection), and
//! after placing it both pawns can still reach their goal rows.

use tracing::{debug, instrument};

use crate::core::{GameState, Orientation, Position, Side, Wall, WallSet};

use super::reachability::has_path;

/// Check if `walls` blocks the edge between adjacent cells `a` and `b`.
///
/// Equivalent to asking every wall in the set whether it `blocks_edge`, but
/// only looks up the two walls that could.
#[must_use]
pub fn edge_blocked(walls: &WallSet, a: Position, b: Position) -> bool {
    Wall::blockers(a, b).iter().any(|w| walls.contains(w))
}

/// Check if a wall already occupies `candidate`'s anchor, in either
/// orientation.
#[must_use]
pub fn conflicts(walls: &WallSet, candidate: &Wall) -> bool {
    Orientation::ALL
        .into_iter()
        .any(|o| walls.contains(&Wall::new_unchecked(candidate.row(), candidate.col(), o)))
}

/// Check if both pawns keep a path to their goal rows with `candidate` added.
///
/// Probes a private copy of the wall set; `state` is untouched.
#[must_use]
pub fn preserves_paths(state: &GameState, candidate: Wall) -> bool {
    let probe = state.walls().update(candidate);
    Side::BOTH
        .into_iter()
        .all(|side| has_path(state.pawn(side).position(), side.goal_row(), &probe))
}

/// Check if the side to move may place `wall`.
#[must_use]
pub fn is_wall_placement_legal(state: &GameState, wall: &Wall) -> bool {
    state.walls_remaining(state.active_player()) > 0
        && !conflicts(state.walls(), wall)
        && preserves_paths(state, *wall)
}

/// Every wall the side to move may place, anchors row-major, horizontal
/// before vertical.
#[instrument(level = "trace", skip_all, fields(side = %state.active_player()))]
pub fn wall_moves(state: &GameState) -> Vec<Wall> {
    if state.walls_remaining(state.active_player()) == 0 {
        return Vec::new();
    }

    let moves: Vec<Wall> = Wall::all()
        .filter(|w| !conflicts(state.walls(), w))
        .filter(|w| preserves_paths(state, *w))
        .collect();

    debug!(count = moves.len(), placed = state.walls().len(), "generated wall moves");
    moves
}
