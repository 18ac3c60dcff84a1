//! Move generation benchmarks.
//!
//! Wall generation runs two BFS probes per candidate, so it dominates a ply.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use rust_quoridor::core::{Orientation, Pawn, Position, Side, Wall};
use rust_quoridor::rules::{has_path, legal_moves, wall_moves};
use rust_quoridor::GameState;

fn midgame() -> GameState {
    let walls = [
        (3, 4, Orientation::Horizontal),
        (3, 6, Orientation::Horizontal),
        (5, 2, Orientation::Vertical),
        (6, 5, Orientation::Horizontal),
        (7, 7, Orientation::Vertical),
        (4, 8, Orientation::Vertical),
    ]
    .map(|(r, c, o)| Wall::new(r, c, o).unwrap());

    GameState::new(
        Pawn::new(Position::new(4, 5), Side::Max),
        Pawn::new(Position::new(6, 4), Side::Min),
        7,
        7,
        walls,
        Side::Max,
    )
    .unwrap()
}

fn bench_legal_moves(c: &mut Criterion) {
    let opening = GameState::initial(Side::Max);
    let mid = midgame();

    c.bench_function("legal_moves/opening", |b| b.iter(|| legal_moves(black_box(&opening))));
    c.bench_function("legal_moves/midgame", |b| b.iter(|| legal_moves(black_box(&mid))));
    c.bench_function("wall_moves/midgame", |b| b.iter(|| wall_moves(black_box(&mid))));
}

fn bench_has_path(c: &mut Criterion) {
    let mid = midgame();
    let start = mid.p1().position();

    c.bench_function("has_path/midgame", |b| {
        b.iter(|| has_path(black_box(start), Side::Max.goal_row(), mid.walls()))
    });
}

criterion_group!(benches, bench_legal_moves, bench_has_path);
criterion_main!(benches);
