use criterion::{criterion_group, criterion_main, Criterion};
use common::games::SessionRng;
use common::games::snake::{Direction, SnakeGameState, TickOutcome};

const TICKS: usize = 1_000;

fn random_play(board_size: usize, seed: u64) {
    let mut session_rng = SessionRng::new(seed);
    let mut state = SnakeGameState::new(board_size, 0.3);

    for _ in 0..TICKS {
        let direction = Direction::ALL[session_rng.random_range(0..Direction::ALL.len())];
        state.set_direction(direction);
        if let TickOutcome::GameOver(_) = state.update(&mut session_rng) {
            state.restart();
        }
    }
}

fn tick_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("snake_tick");

    group.bench_function("random_play_15", |b| {
        b.iter(|| random_play(15, 42))
    });

    group.bench_function("random_play_50", |b| {
        b.iter(|| random_play(50, 42))
    });

    group.finish();
}

criterion_group!(benches, tick_bench);
criterion_main!(benches);
