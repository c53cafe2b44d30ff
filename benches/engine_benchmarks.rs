//! Benchmarks for evaluation, fingerprinting and fixed-depth search.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use move_selector::board::{Game, Position};
use move_selector::{evaluate, EngineOptions, KeyTable, SearchContext};

const KIWIPETE: &str = "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1";

fn positions() -> Vec<(&'static str, Game)> {
    vec![
        ("startpos", Game::startpos()),
        ("kiwipete", Game::from_fen(KIWIPETE).expect("valid fen")),
    ]
}

fn bench_evaluate(c: &mut Criterion) {
    let mut group = c.benchmark_group("evaluate");
    for (name, game) in positions() {
        group.bench_function(name, |b| b.iter(|| evaluate(black_box(&game))));
    }
    group.finish();
}

fn bench_fingerprint(c: &mut Criterion) {
    let mut group = c.benchmark_group("fingerprint");
    let keys = KeyTable::default();
    for (name, game) in positions() {
        group.bench_function(name, |b| b.iter(|| keys.fingerprint(black_box(&game))));
    }
    group.finish();
}

fn bench_apply_undo(c: &mut Criterion) {
    let mut game = Game::from_fen(KIWIPETE).expect("valid fen");
    let moves = game.legal_moves();
    c.bench_function("apply_undo/kiwipete", |b| {
        b.iter(|| {
            for &mv in &moves {
                game.apply(black_box(mv)).expect("legal move");
                game.undo();
            }
        })
    });
}

fn bench_search_depth(c: &mut Criterion) {
    let mut group = c.benchmark_group("search_depth");
    group.sample_size(10);

    for (name, game) in positions() {
        for depth in 1..=3 {
            group.bench_with_input(BenchmarkId::new(name, depth), &depth, |b, &depth| {
                b.iter(|| {
                    let mut context = SearchContext::new(EngineOptions::default());
                    black_box(context.search_depth(&game, depth))
                })
            });
        }
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_evaluate,
    bench_fingerprint,
    bench_apply_undo,
    bench_search_depth
);
criterion_main!(benches);
