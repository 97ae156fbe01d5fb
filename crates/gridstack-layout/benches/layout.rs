//! Benchmark tests for grid layout operations.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use gridstack_core::HorizontalAlignment;
use gridstack_layout::{calculate, chunk_items, compute_grid_layout, place_cells};

fn bench_calculate(c: &mut Criterion) {
    c.bench_function("calculate", |b| {
        b.iter(|| calculate(black_box(1234.5), black_box(120.0), black_box(8.0)));
    });
}

fn bench_chunk(c: &mut Criterion) {
    let mut group = c.benchmark_group("chunk_items");
    for &count in &[100usize, 1_000, 10_000] {
        group.bench_with_input(BenchmarkId::from_parameter(count), &count, |b, &count| {
            b.iter(|| chunk_items(black_box(count), black_box(7)));
        });
    }
    group.finish();
}

fn bench_resize(c: &mut Criterion) {
    c.bench_function("resize_sweep_1000_items", |b| {
        b.iter(|| {
            for width in (200..2000).step_by(50) {
                let grid = compute_grid_layout(1_000, width as f32, 120.0, 8.0);
                black_box(grid);
            }
        });
    });
}

fn bench_place(c: &mut Criterion) {
    let grid = compute_grid_layout(10_000, 1280.0, 120.0, 8.0);
    c.bench_function("place_cells_10000", |b| {
        b.iter(|| place_cells(black_box(&grid), 8.0, 90.0, HorizontalAlignment::Center));
    });
}

criterion_group!(benches, bench_calculate, bench_chunk, bench_resize, bench_place);
criterion_main!(benches);
