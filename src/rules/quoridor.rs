//! The standard Quoridor rules as a `RulesEngine`.

use crate::core::{GameConfig, GameRng, GameState, Move, Side};
use crate::error::EngineResult;

use super::engine::RulesEngine;
use super::{movegen, transition};

/// Two-player Quoridor on a 9×9 board.
///
/// ```
/// use rust_quoridor::core::{GameConfig, GameRng, Side};
/// use rust_quoridor::rules::{Quoridor, RulesEngine};
///
/// let game = Quoridor::new(GameConfig::new().with_starting_player(Side::Max));
/// let state = game.initial_state(&mut GameRng::new(42));
/// let moves = game.legal_moves(&state);
/// let next = game.apply(&state, moves[0]).unwrap();
/// assert_eq!(next.active_player(), Side::Min);
/// ```
#[derive(Clone, Debug, Default)]
pub struct Quoridor {
    config: GameConfig,
}

impl Quoridor {
    #[must_use]
    pub fn new(config: GameConfig) -> Self {
        Self { config }
    }
}

impl RulesEngine for Quoridor {
    fn config(&self) -> &GameConfig {
        &self.config
    }

    fn initial_state(&self, rng: &mut GameRng) -> GameState {
        GameState::initial_with(&self.config, rng)
    }

    fn legal_moves(&self, state: &GameState) -> Vec<Move> {
        movegen::legal_moves(state)
    }

    fn apply(&self, state: &GameState, mv: Move) -> EngineResult<GameState> {
        transition::apply(state, mv)
    }

    fn winner(&self, state: &GameState) -> Option<Side> {
        transition::winner(state)
    }
}
