use criterion::{
    black_box,
    criterion_group,
    criterion_main,
    Criterion,
};
use std::time::Duration;
use tic_tac_toe::{
    Board,
    Team,
    MAX_BOUND,
    MIN_BOUND,
};

fn criterion_benchmark(c: &mut Criterion) {
    c.bench_function("alpha-beta all", |b| {
        b.iter(|| {
            tic_tac_toe::search(
                black_box(Board::new()),
                black_box(Team::X),
                MIN_BOUND,
                MAX_BOUND,
            )
        })
    });
    c.bench_function("minimax all", |b| {
        b.iter(|| tic_tac_toe::minimax(black_box(Board::new()), black_box(Team::X)))
    });
    c.bench_function("best move empty board", |b| {
        b.iter(|| tic_tac_toe::best_move(black_box(Board::new()), black_box(Team::X)))
    });
}

criterion_group! {
    name = benches;
    config = Criterion::default().measurement_time(Duration::from_secs(10));
    targets = criterion_benchmark
}
criterion_main!(benches);
