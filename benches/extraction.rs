use criterion::{black_box, criterion_group, criterion_main, Criterion};
use switcheroo::{shift_toward, spawn_row, Board, Card, CardKind, GameSession, GridCoord, PlayerId};

fn bench_deal(c: &mut Criterion) {
    c.bench_function("deal_fresh_session", |b| {
        b.iter(|| GameSession::new(black_box(12345)))
    });
}

fn bench_shift_column(c: &mut Criterion) {
    c.bench_function("shift_column_with_barrier", |b| {
        b.iter(|| {
            let mut board = Board::empty();
            for row in 0..4 {
                for col in 0..3 {
                    board.set(GridCoord::new(row, col), Some(Card::new(CardKind::Boost, 1)));
                }
            }
            board.set(GridCoord::new(1, 1), Some(Card::new(CardKind::Barrier, 0)));
            board.take(GridCoord::new(3, 1));

            shift_toward(&mut board, 1, PlayerId::ZERO);
            black_box(spawn_row(&board, 1, PlayerId::ZERO))
        })
    });
}

fn bench_snapshot(c: &mut Criterion) {
    let session = GameSession::new(12345);

    c.bench_function("snapshot", |b| b.iter(|| black_box(session.snapshot())));
}

criterion_group!(benches, bench_deal, bench_shift_column, bench_snapshot);
criterion_main!(benches);
