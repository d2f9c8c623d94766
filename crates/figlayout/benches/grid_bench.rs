//! Criterion benchmarks for grid cell geometry and merging.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use figlayout::grid::{Grid, GridSpec, Span};
use figlayout::{AxesOpts, Canvas, SubplotParams};

fn bench_grid(c: &mut Criterion) {
    let mut group = c.benchmark_group("grid");
    let cfg = SubplotParams::default();
    for &side in &[1usize, 4, 16, 64] {
        let spec = GridSpec::new(side, side).unwrap();
        group.bench_with_input(BenchmarkId::new("cell_rects", side), &spec, |b, spec| {
            b.iter(|| spec.cell_rects(&cfg).unwrap())
        });
        group.bench_with_input(BenchmarkId::new("build_and_merge", side), &spec, |b, spec| {
            let opts = AxesOpts::default();
            b.iter(|| {
                let mut fig = Canvas::default();
                let grid = Grid::new(&mut fig, *spec, &cfg, &opts).unwrap();
                grid.merged(&mut fig, Span::All, &opts).unwrap()
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_grid);
criterion_main!(benches);
