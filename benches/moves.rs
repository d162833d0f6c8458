use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use seahaven::board::Board;
use seahaven::moves::{all_moves, Move};

fn bench_deal(c: &mut Criterion) {
    c.bench_function("deal_seeded", |b| b.iter(|| Board::deal_seeded(black_box(100))));
}

fn bench_moves(c: &mut Criterion) {
    let dealt = Board::deal_seeded(100);
    let mut g = c.benchmark_group("moves");
    g.bench_with_input(BenchmarkId::new("legal_moves", "seed 100"), &dealt, |b, board| {
        b.iter(|| black_box(board).legal_moves())
    });
    g.bench_with_input(BenchmarkId::new("validate_all", "seed 100"), &dealt, |b, board| {
        b.iter(|| all_moves().filter(|mv| black_box(board).validate(*mv).is_ok()).count())
    });
    g.bench_with_input(BenchmarkId::new("apply", "MTC 1 1"), &dealt, |b, board| {
        b.iter(|| {
            let mut board = board.clone();
            board.apply(black_box(Move::TableauToCell { from: 0, cell: 0 }))
        })
    });
    g.finish();
}

criterion_group!(benches, bench_deal, bench_moves);
criterion_main!(benches);
