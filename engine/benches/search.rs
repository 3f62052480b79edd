use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use reversi_engine::{compute_move, Board, EngineConfig, BLACK, EMPTY, WHITE};

fn opening_board() -> Board {
    let mut board = [EMPTY; 64];
    board[27] = WHITE;
    board[28] = BLACK;
    board[35] = BLACK;
    board[36] = WHITE;
    board
}

/// Selection cost from the opening position across depth budgets.
fn bench_depths(c: &mut Criterion) {
    let board = opening_board();
    let mut group = c.benchmark_group("select_from_opening");

    for depth in 1..=4u32 {
        let config = EngineConfig {
            max_depth: depth,
            ..EngineConfig::default()
        };
        group.bench_with_input(BenchmarkId::new("depth", depth), &config, |b, config| {
            b.iter(|| compute_move(black_box(&board), BLACK, config));
        });
    }

    group.finish();
}

/// Alpha-beta savings at the default depth.
fn bench_pruning(c: &mut Criterion) {
    let board = opening_board();
    let pruned = EngineConfig::default();
    let unpruned = EngineConfig {
        pruning: false,
        ..EngineConfig::default()
    };

    c.bench_function("pruned_depth4", |b| {
        b.iter(|| compute_move(black_box(&board), BLACK, &pruned));
    });
    c.bench_function("unpruned_depth4", |b| {
        b.iter(|| compute_move(black_box(&board), BLACK, &unpruned));
    });
}

criterion_group!(benches, bench_depths, bench_pruning);
criterion_main!(benches);
