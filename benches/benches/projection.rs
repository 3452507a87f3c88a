// Copyright 2025 the Orrery Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::{Circle, Point, Size, Vec2};
use orrery_projection::{GridSpec, ProjectionParams, Projector, project};
use orrery_universe::{PlanetData, Universe};
use orrery_view2d::Viewport;

fn scattered(len: usize) -> Vec<Circle> {
    // Deterministic spread over a 20k x 20k world.
    let mut state = 0x9e37_79b9_u32;
    (0..len)
        .map(|_| {
            state ^= state << 13;
            state ^= state >> 17;
            state ^= state << 5;
            let x = f64::from(state % 20_000);
            let y = f64::from((state / 20_000) % 20_000);
            Circle::new((x, y), 30.0)
        })
        .collect()
}

fn bench_project(c: &mut Criterion) {
    let mut group = c.benchmark_group("projection");
    let params = ProjectionParams::new(Size::new(1_280.0, 800.0));

    for len in [256usize, 4_096, 65_536] {
        let planets = scattered(len);
        group.throughput(Throughput::Elements(len as u64));

        for (label, viewport) in [
            ("zoomed_in", Viewport::new(Vec2::new(-5_000.0, -5_000.0), 2.0)),
            ("zoomed_out", Viewport::IDENTITY.with_scale(0.1)),
        ] {
            group.bench_with_input(
                BenchmarkId::new(format!("alloc/{label}"), len),
                &planets,
                |b, planets| b.iter(|| black_box(project(black_box(&viewport), &params, planets))),
            );

            let mut projector = Projector::new(params, GridSpec::default());
            group.bench_with_input(
                BenchmarkId::new(format!("reused/{label}"), len),
                &planets,
                |b, planets| {
                    b.iter(|| black_box(projector.project(black_box(&viewport), planets).len()));
                },
            );
        }
    }

    group.finish();
}

fn bench_tick(c: &mut Criterion) {
    let mut group = c.benchmark_group("universe/tick");

    for len in [256usize, 4_096] {
        let mut universe = Universe::new(Size::new(1_280.0, 800.0));
        for (i, circle) in scattered(len).into_iter().enumerate() {
            let data = PlanetData::new(format!("planet {i}"), circle.center, circle.radius);
            universe
                .add_planet(data)
                .expect("scattered planets are valid");
        }
        let centered = universe.planet_at(Point::new(640.0, 400.0)).map(|p| p.id());
        universe
            .select(centered)
            .expect("the id came from the universe");
        group.throughput(Throughput::Elements(len as u64));
        group.bench_function(BenchmarkId::from_parameter(len), |b| {
            b.iter(|| black_box(universe.tick(black_box(16))));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_project, bench_tick);
criterion_main!(benches);
