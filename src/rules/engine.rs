//! Rules engine trait for search layers.
//!
//! A search layer (minimax, MCTS, a UI loop) programs against `RulesEngine`:
//! - What moves are legal
//! - How a move produces the next state
//! - Whether the game is over and who won
//!
//! States are immutable values, so every method takes `&GameState` and
//! transitions return a fresh state.

use tracing::error;

use crate::core::{GameConfig, GameRng, GameState, Move, Side};
use crate::error::{EngineError, EngineResult};

/// Rules engine trait.
///
/// ## Implementation Notes
///
/// - `legal_moves`: Must be deterministic for reproducible search
/// - `apply`: Must reject moves not returned by `legal_moves`
/// - `winner`: Return `None` while the game continues
pub trait RulesEngine {
    /// Get the game configuration.
    fn config(&self) -> &GameConfig;

    /// Build the opening position, drawing randomness from `rng` only.
    fn initial_state(&self, rng: &mut GameRng) -> GameState;

    /// Every legal move for the side to move.
    fn legal_moves(&self, state: &GameState) -> Vec<Move>;

    /// Apply a move, returning the successor state.
    fn apply(&self, state: &GameState, mv: Move) -> EngineResult<GameState>;

    /// The winning side, or `None` if the game continues.
    fn winner(&self, state: &GameState) -> Option<Side>;

    // === Convenience Methods ===

    /// Check if the game is over.
    fn is_terminal(&self, state: &GameState) -> bool {
        self.winner(state).is_some()
    }

    /// Legal moves for a live game.
    ///
    /// Errors with `GameOver` on a terminal state and `NoLegalMoves` if a live
    /// state produced nothing.
    fn checked_legal_moves(&self, state: &GameState) -> EngineResult<Vec<Move>> {
        if self.is_terminal(state) {
            return Err(EngineError::GameOver);
        }
        let moves = self.legal_moves(state);
        if moves.is_empty() {
            error!(side = %state.active_player(), "no legal moves in a non-terminal state");
            return Err(EngineError::NoLegalMoves(state.active_player()));
        }
        Ok(moves)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// An engine that never offers a move, to exercise the defaults.
    struct Stuck(GameConfig);

    impl RulesEngine for Stuck {
        fn config(&self) -> &GameConfig {
            &self.0
        }

        fn initial_state(&self, _rng: &mut GameRng) -> GameState {
            GameState::initial(Side::Max)
        }

        fn legal_moves(&self, _state: &GameState) -> Vec<Move> {
            Vec::new()
        }

        fn apply(&self, _state: &GameState, mv: Move) -> EngineResult<GameState> {
            Err(EngineError::IllegalMove { mv, side: Side::Max })
        }

        fn winner(&self, _state: &GameState) -> Option<Side> {
            None
        }
    }

    #[test]
    fn test_empty_move_set_is_surfaced() {
        let engine = Stuck(GameConfig::default());
        let state = engine.initial_state(&mut GameRng::new(0));

        assert!(!engine.is_terminal(&state));
        assert_eq!(
            engine.checked_legal_moves(&state),
            Err(EngineError::NoLegalMoves(Side::Max))
        );
    }
}
