// Copyright 2025 the Orrery Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use kurbo::Point;
use orrery_input::{InputEvent, PointerEvent, Reconciler};
use orrery_view2d::{ViewportController, ZoomLimits};

/// A press, a 60-sample drag and a release, as a 60 Hz mouse would report it.
fn drag_gesture() -> Vec<InputEvent> {
    let mut events = vec![InputEvent::PointerDown(PointerEvent::new(
        1,
        Point::new(100.0, 100.0),
        0,
    ))];
    for i in 1..=60_u32 {
        let t = u64::from(i) * 16;
        let pos = Point::new(100.0 + f64::from(i) * 3.0, 100.0 + f64::from(i));
        events.push(InputEvent::PointerMove(PointerEvent::new(1, pos, t)));
    }
    events.push(InputEvent::PointerUp(PointerEvent::new(
        1,
        Point::new(280.0, 160.0),
        976,
    )));
    events
}

fn bench_drag(c: &mut Criterion) {
    let events = drag_gesture();
    c.bench_function("input/drag_gesture", |b| {
        b.iter(|| {
            let mut input = Reconciler::default();
            let mut view = ViewportController::new(ZoomLimits::default());
            for event in &events {
                for intent in input.handle(*event) {
                    if let orrery_input::Intent::Pan(delta) = intent {
                        view.pan_by(delta);
                    }
                }
            }
            black_box(view.viewport())
        });
    });
}

criterion_group!(benches, bench_drag);
criterion_main!(benches);
