use criterion::{criterion_group, criterion_main, Criterion};
use life_grid::{BorderPolicy, Grid};

const N: usize = 1 << 9;
const SEED: u64 = 42;

fn random_grid() -> Grid {
    let mut grid = Grid::with_seed(N, N, SEED).unwrap();
    grid.randomize_with_rate(0.3).unwrap();
    grid
}

fn bench_step_wrap(c: &mut Criterion) {
    let mut grid = random_grid();
    c.bench_function("step_wrap", |b| b.iter(|| grid.step(BorderPolicy::Wrap)));
}

fn bench_step_nowrap(c: &mut Criterion) {
    let mut grid = random_grid();
    c.bench_function("step_nowrap", |b| b.iter(|| grid.step(BorderPolicy::NoWrap)));
}

fn bench_randomize(c: &mut Criterion) {
    let mut grid = random_grid();
    c.bench_function("randomize", |b| b.iter(|| grid.randomize()));
}

criterion_group!(benches, bench_step_wrap, bench_step_nowrap, bench_randomize);
criterion_main!(benches);
