use criterion::{black_box, criterion_group, criterion_main, Criterion};
use glyphgrid::{Alphabet, GridEngine, Neighborhood};

fn bench_majority_step(c: &mut Criterion) {
    let mut engine = GridEngine::new(Alphabet::mnality(), Neighborhood::Moore, Some(7));
    let grid = engine.seed(64, 64).unwrap();

    c.bench_function("majority_step_64x64", |b| {
        b.iter(|| black_box(engine.step(&grid)))
    });
}

fn bench_life_step(c: &mut Criterion) {
    let mut engine = GridEngine::new(Alphabet::binary(), Neighborhood::Moore, Some(7));
    let grid = engine.seed_life(64, 64, 0.3).unwrap();

    c.bench_function("life_step_64x64", |b| {
        b.iter(|| black_box(engine.step_life(&grid)))
    });
}

fn bench_line_step(c: &mut Criterion) {
    let mut engine = GridEngine::new(Alphabet::mnality(), Neighborhood::Line, Some(7));
    let gene = engine.seed(120, 1).unwrap();

    c.bench_function("line_step_120", |b| b.iter(|| black_box(engine.step(&gene))));
}

criterion_group!(
    benches,
    bench_majority_step,
    bench_life_step,
    bench_line_step
);
criterion_main!(benches);
