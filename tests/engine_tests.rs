//! Transition, terminal and engine-trait contracts.

use rust_quoridor::core::{GameConfig, GameRng, Move, Orientation, Pawn, Position, Side, Wall};
use rust_quoridor::rules::{apply, apply_unchecked, is_terminal, legal_moves, winner, Quoridor, RulesEngine};
use rust_quoridor::{EngineError, GameState};

fn fixed_start(side: Side) -> Quoridor {
    Quoridor::new(GameConfig::new().with_starting_player(side))
}

// =============================================================================
// Transitions
// =============================================================================

#[test]
fn test_apply_leaves_input_unchanged() {
    let state = GameState::initial(Side::Max);
    let snapshot = state.clone();

    for mv in legal_moves(&state) {
        let next = apply(&state, mv).unwrap();
        assert_ne!(next, state);
    }

    assert_eq!(state, snapshot);
    assert_eq!(legal_moves(&state), legal_moves(&snapshot));
}

#[test]
fn test_turn_alternates() {
    let mut state = GameState::initial(Side::Min);
    for expected in [Side::Min, Side::Max, Side::Min, Side::Max] {
        assert_eq!(state.active_player(), expected);
        let mv = legal_moves(&state)[0];
        state = apply(&state, mv).unwrap();
    }
}

#[test]
fn test_wall_count_conservation() {
    let state = GameState::initial(Side::Max);
    let wall = Wall::new(2, 2, Orientation::Horizontal).unwrap();

    let after_max = apply(&state, Move::Wall(wall)).unwrap();
    assert_eq!(after_max.p1_walls_remaining(), 9);
    assert_eq!(after_max.p2_walls_remaining(), 10);

    let other = Wall::new(7, 7, Orientation::Vertical).unwrap();
    let after_min = apply(&after_max, Move::Wall(other)).unwrap();
    assert_eq!(after_min.p1_walls_remaining(), 9);
    assert_eq!(after_min.p2_walls_remaining(), 9);
    assert_eq!(after_min.walls().len(), 2);
}

#[test]
fn test_last_wall_then_none() {
    let game = Quoridor::new(GameConfig::new().with_starting_walls(1).with_starting_player(Side::Max));
    let state = game.initial_state(&mut GameRng::new(0));

    let wall = Wall::new(5, 5, Orientation::Vertical).unwrap();
    let after = game.apply(&state, Move::Wall(wall)).unwrap();
    // MIN still has its wall; MAX is out.
    let min_moves = game.legal_moves(&after);
    assert!(min_moves.iter().any(Move::is_wall_move));

    let back = game.apply(&after, Move::Pawn(Position::new(8, 5))).unwrap();
    let max_moves = game.legal_moves(&back);
    assert!(max_moves.iter().all(Move::is_pawn_move));

    let retry = Move::Wall(Wall::new(1, 1, Orientation::Vertical).unwrap());
    assert_eq!(
        game.apply(&back, retry),
        Err(EngineError::IllegalMove { mv: retry, side: Side::Max })
    );
}

#[test]
fn test_apply_unchecked_matches_apply_for_legal_moves() {
    let state = GameState::initial(Side::Max);
    for mv in legal_moves(&state).into_iter().take(10) {
        assert_eq!(apply(&state, mv).unwrap(), apply_unchecked(&state, mv));
    }
}

#[test]
fn test_applied_move_is_not_replayed_by_the_same_side() {
    let state = GameState::initial(Side::Max);
    let mv = Move::Pawn(Position::new(2, 5));
    let next = apply(&state, mv).unwrap();

    assert_ne!(next.active_player(), state.active_player());
    // MIN moves next; MAX's step is no longer on offer.
    assert!(!legal_moves(&next).contains(&mv));
}

// =============================================================================
// Terminal States
// =============================================================================

#[test]
fn test_reaching_goal_row_wins() {
    let state = GameState::new(
        Pawn::new(Position::new(8, 2), Side::Max),
        Pawn::new(Position::new(5, 5), Side::Min),
        0,
        0,
        [],
        Side::Max,
    )
    .unwrap();
    assert!(!is_terminal(&state));

    let won = apply(&state, Move::Pawn(Position::new(9, 2))).unwrap();
    assert!(is_terminal(&won));
    assert_eq!(winner(&won), Some(Side::Max));

    let game = Quoridor::default();
    assert!(game.is_terminal(&won));
    assert_eq!(game.winner(&won), Some(Side::Max));
    assert_eq!(game.checked_legal_moves(&won), Err(EngineError::GameOver));
}

#[test]
fn test_side_step_onto_goal_row_wins() {
    // The straight jump over MAX at (1,5) would leave the board, so MIN
    // side-steps around it onto row 1.
    let state = GameState::new(
        Pawn::new(Position::new(1, 5), Side::Max),
        Pawn::new(Position::new(2, 5), Side::Min),
        10,
        10,
        [],
        Side::Min,
    )
    .unwrap();

    let moves = legal_moves(&state);
    assert!(moves.contains(&Move::Pawn(Position::new(1, 4))));
    assert!(moves.contains(&Move::Pawn(Position::new(1, 6))));

    let won = apply(&state, Move::Pawn(Position::new(1, 4))).unwrap();
    assert_eq!(winner(&won), Some(Side::Min));
}

// =============================================================================
// Engine Trait
// =============================================================================

#[test]
fn test_starting_player_from_rng_is_deterministic() {
    let game = Quoridor::default();
    let a = game.initial_state(&mut GameRng::new(2024));
    let b = game.initial_state(&mut GameRng::new(2024));
    assert_eq!(a.active_player(), b.active_player());

    let sides: Vec<_> = (0..32)
        .map(|seed| game.initial_state(&mut GameRng::new(seed)).active_player())
        .collect();
    assert!(sides.contains(&Side::Max));
    assert!(sides.contains(&Side::Min));
}

#[test]
fn test_fixed_starting_player() {
    for side in Side::BOTH {
        let state = fixed_start(side).initial_state(&mut GameRng::new(9));
        assert_eq!(state.active_player(), side);
    }
}

#[test]
fn test_engine_through_trait_object() {
    let game: Box<dyn RulesEngine> = Box::new(fixed_start(Side::Max));
    let state = game.initial_state(&mut GameRng::new(0));
    let moves = game.checked_legal_moves(&state).unwrap();

    assert_eq!(moves.len(), 131);
    let next = game.apply(&state, moves[0]).unwrap();
    assert_eq!(next.p1().position(), Position::new(2, 5));
}

// =============================================================================
// Sharing States Across Threads
// =============================================================================

#[test]
fn test_state_is_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<GameState>();
    assert_send_sync::<Quoridor>();
}

#[test]
fn test_parallel_probes_share_one_state() {
    let game = fixed_start(Side::Max);
    let mut rng = GameRng::new(77);
    let root = game.initial_state(&mut rng);
    let expected = legal_moves(&root);

    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let mut branch_rng = rng.fork();
                let (root, game) = (&root, &game);
                scope.spawn(move || {
                    let mut state = root.clone();
                    for _ in 0..6 {
                        let moves = game.legal_moves(&state);
                        let mv = *branch_rng.choose(&moves).unwrap();
                        state = game.apply(&state, mv).unwrap();
                    }
                    legal_moves(root)
                })
            })
            .collect();

        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    });

    assert!(root.walls().is_empty());
}
