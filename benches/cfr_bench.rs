//! Benchmarks for CFR solver.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use leduc_cfr::cfr::{CFRConfig, CFRSolver};
use leduc_cfr::games::leduc::{GameConfig, LeducPoker};

fn kuhn_iteration_benchmark(c: &mut Criterion) {
    let game = LeducPoker::new(GameConfig::kuhn()).unwrap();
    let mut solver = CFRSolver::new(game, CFRConfig::default());

    c.bench_function("kuhn_single_iteration", |b| {
        b.iter(|| {
            solver.run_iteration();
            black_box(solver.iteration())
        })
    });
}

fn kuhn_1000_iterations_benchmark(c: &mut Criterion) {
    c.bench_function("kuhn_1000_iterations", |b| {
        b.iter(|| {
            let game = LeducPoker::new(GameConfig::kuhn()).unwrap();
            let mut solver = CFRSolver::new(game, CFRConfig::default());
            solver.train(black_box(1000)).expected_value
        })
    });
}

fn leduc_iteration_benchmark(c: &mut Criterion) {
    let game = LeducPoker::new(GameConfig::default()).unwrap();
    let mut solver = CFRSolver::new(game, CFRConfig::default());

    c.bench_function("leduc_single_iteration", |b| {
        b.iter(|| black_box(solver.run_iteration()))
    });
}

criterion_group!(
    benches,
    kuhn_iteration_benchmark,
    kuhn_1000_iterations_benchmark,
    leduc_iteration_benchmark
);
criterion_main!(benches);
