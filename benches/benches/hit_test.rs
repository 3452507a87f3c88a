// Copyright 2025 the Orrery Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::{Circle, Point};
use orrery_hit::{HitParams, hit_test_indexed};

/// Planets on a square lattice, 120 world units apart.
fn lattice(len: usize) -> Vec<Circle> {
    let side = (len as f64).sqrt().ceil() as usize;
    (0..len)
        .map(|i| {
            let x = (i % side) as f64 * 120.0;
            let y = (i / side) as f64 * 120.0;
            Circle::new((x, y), 40.0)
        })
        .collect()
}

fn bench_hit_test(c: &mut Criterion) {
    let mut group = c.benchmark_group("hit_test");
    let params = HitParams::default();

    for len in [16usize, 256, 4_096] {
        let planets = lattice(len);
        group.throughput(Throughput::Elements(len as u64));

        // Worst case: nothing under the pointer, every planet is scanned.
        group.bench_with_input(BenchmarkId::new("miss", len), &planets, |b, planets| {
            b.iter(|| {
                black_box(hit_test_indexed(
                    black_box(Point::new(-1_000.0, -1_000.0)),
                    planets,
                    &params,
                ))
            });
        });

        // Best case: the top-most planet is hit first.
        let top = planets[len - 1].center;
        group.bench_with_input(BenchmarkId::new("top_hit", len), &planets, |b, planets| {
            b.iter(|| black_box(hit_test_indexed(black_box(top), planets, &params)));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_hit_test);
criterion_main!(benches);
