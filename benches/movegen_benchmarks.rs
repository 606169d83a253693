//! Benchmarks for move generation and apply/undo.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use chess_rules::board::GameState;

/// Italian game after 3...Nf6, White to move.
fn middlegame() -> GameState {
    let mut game = GameState::new();
    for notation in "e2e4 e7e5 g1f3 b8c6 f1c4 g8f6".split_whitespace() {
        if let Err(err) = game.play(notation) {
            panic!("setup move {notation} rejected: {err}");
        }
    }
    game
}

fn bench_perft(c: &mut Criterion) {
    let mut group = c.benchmark_group("perft");

    let mut startpos = GameState::new();
    for depth in 1..=4 {
        group.bench_with_input(BenchmarkId::new("startpos", depth), &depth, |b, &depth| {
            b.iter(|| startpos.perft(black_box(depth)))
        });
    }

    let mut middle = middlegame();
    for depth in 1..=3 {
        group.bench_with_input(BenchmarkId::new("middlegame", depth), &depth, |b, &depth| {
            b.iter(|| middle.perft(black_box(depth)))
        });
    }

    group.finish();
}

fn bench_movegen(c: &mut Criterion) {
    let mut group = c.benchmark_group("movegen");

    let mut startpos = GameState::new();
    group.bench_function("startpos", |b| {
        b.iter(|| black_box(startpos.legal_moves()))
    });

    let mut middle = middlegame();
    group.bench_function("middlegame", |b| {
        b.iter(|| black_box(middle.legal_moves()))
    });

    group.finish();
}

fn bench_apply_undo(c: &mut Criterion) {
    let mut game = middlegame();
    let moves = game.legal_moves();

    c.bench_function("apply_undo_all", |b| {
        b.iter(|| {
            for &mv in &moves {
                game.apply_move(black_box(mv));
                game.undo_move();
            }
        })
    });
}

criterion_group!(benches, bench_perft, bench_movegen, bench_apply_undo);
criterion_main!(benches);
