use criterion::{BatchSize, Criterion, criterion_group, criterion_main};
use minefield_core::*;
use std::hint::black_box;

fn bench_generate(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate");
    for (name, config) in [
        ("default", GameConfig::DEFAULT),
        ("expert", GameConfig::new_unchecked((16, 30), 99)),
        ("dense", GameConfig::new_unchecked((10, 10), 90)),
    ] {
        group.bench_function(name, |b| {
            let mut seed = 0;
            b.iter(|| {
                seed += 1;
                black_box(Board::initialize(config, seed).unwrap())
            })
        });
    }
    group.finish();
}

fn bench_cascade(c: &mut Criterion) {
    let mut group = c.benchmark_group("cascade");
    for size in [10, 64, 255] {
        let layout = MineLayout::from_mine_coords((size, size), &[(size - 1, size - 1)]).unwrap();
        group.bench_function(format!("open_{size}x{size}"), |b| {
            b.iter_batched(
                || Board::new(layout.clone()),
                |mut board| black_box(board.reveal_cell((0, 0)).unwrap()),
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

criterion_group!(benches, bench_generate, bench_cascade);
criterion_main!(benches);
