//! Benchmarks for the sizing resolver and the box stack.
//!
//! Run with: cargo bench -p imbox-layout --bench layout_bench

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use imbox_layout::{BoxConfig, BoxStack, LayoutCursor, MAX_CHILDREN, Rect, SizeSpec, resolve_sizes};
use std::hint::black_box;

fn mixed_specs(n: usize) -> Vec<SizeSpec> {
    (0..n)
        .map(|i| match i % 4 {
            0 => SizeSpec::fixed(40.0),
            1 => SizeSpec::percent(0.05),
            2 => SizeSpec::grow(1.0).max(60.0),
            _ => SizeSpec::grow(2.0).min(30.0),
        })
        .collect()
}

fn staircase_specs(n: usize) -> Vec<SizeSpec> {
    let mut specs: Vec<SizeSpec> = (0..n - 1)
        .map(|i| SizeSpec::grow(1.0).max(20.0 + i as f32 * 3.0))
        .collect();
    specs.push(SizeSpec::grow(1.0));
    specs
}

fn bench_resolve(c: &mut Criterion) {
    let mut group = c.benchmark_group("resolve_sizes");

    for n in [4, 16, MAX_CHILDREN] {
        group.throughput(Throughput::Elements(n as u64));

        group.bench_with_input(BenchmarkId::new("equal_split", n), &n, |b, &n| {
            b.iter(|| resolve_sizes(black_box(1200.0), 8.0, None, n))
        });

        let mixed = mixed_specs(n);
        group.bench_with_input(BenchmarkId::new("mixed", n), &mixed, |b, specs| {
            b.iter(|| resolve_sizes(black_box(1200.0), 8.0, Some(specs), specs.len()))
        });

        let staircase = staircase_specs(n);
        group.bench_with_input(BenchmarkId::new("staircase", n), &staircase, |b, specs| {
            b.iter(|| resolve_sizes(black_box(4000.0), 0.0, Some(specs), specs.len()))
        });
    }

    group.finish();
}

fn bench_frame(c: &mut Criterion) {
    let mut group = c.benchmark_group("box_stack");
    let specs = mixed_specs(8);

    // One window frame: a column of rows, each row holding eight widgets.
    for rows in [4usize, 16] {
        group.throughput(Throughput::Elements((rows * 8) as u64));
        group.bench_with_input(BenchmarkId::new("column_of_rows", rows), &rows, |b, &rows| {
            b.iter(|| {
                let mut cursor = LayoutCursor::new(Rect::from_size(1280.0, 800.0));
                let mut stack = BoxStack::new();
                stack.begin(&mut cursor, &BoxConfig::column(rows).gap(4.0).padding(8.0));
                for _ in 0..rows {
                    stack.next(&mut cursor);
                    stack.begin(&mut cursor, &BoxConfig::row(8).sizes(&specs).gap(4.0));
                    for _ in 0..8 {
                        black_box(stack.next(&mut cursor));
                    }
                    stack.end(&mut cursor);
                }
                stack.end(&mut cursor);
                black_box(cursor.slot())
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_resolve, bench_frame);
criterion_main!(benches);
