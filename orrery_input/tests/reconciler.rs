// Copyright 2025 the Orrery Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! End-to-end tests driving a reconciler, a viewport controller and the hit
//! tester together, the way a canvas host does.

use kurbo::{Circle, Point, Vec2};
use orrery_event_state::drag::DragPhase;
use orrery_hit::hit_test;
use orrery_input::{DeviceCaps, InputEvent, Intent, PointerEvent, Reconciler, Tunables};
use orrery_view2d::{ViewportController, ZoomLimits};

/// Minimal host: applies intents to a controller and resolves taps with the
/// hit tester.
struct Host {
    input: Reconciler,
    view: ViewportController,
    planets: Vec<(&'static str, Circle)>,
    selected: Option<&'static str>,
    hover_at: Option<Point>,
}

impl Host {
    fn new(caps: DeviceCaps) -> Self {
        Self {
            input: Reconciler::new(Tunables::default(), caps),
            view: ViewportController::new(ZoomLimits::default()),
            planets: vec![("a", Circle::new((50.0, 50.0), 20.0))],
            selected: None,
            hover_at: None,
        }
    }

    fn feed(&mut self, event: InputEvent) {
        for intent in self.input.handle(event) {
            match intent {
                Intent::Pan(delta) => {
                    self.view.pan_by(delta);
                }
                Intent::ZoomAt { anchor, factor } => {
                    self.view.zoom_at_point(anchor, factor);
                }
                Intent::Select(at) => {
                    let world = self.view.viewport().screen_to_world(at);
                    let circles: Vec<Circle> = self.planets.iter().map(|(_, c)| *c).collect();
                    self.selected = hit_test(world, &circles).and_then(|hit| {
                        self.planets
                            .iter()
                            .find(|(_, c)| c == hit)
                            .map(|(id, _)| *id)
                    });
                }
                Intent::Hover(at) => self.hover_at = Some(at),
                Intent::ClearHover => self.hover_at = None,
                Intent::LongPress(_) => {}
            }
        }
    }
}

fn ptr(x: f64, y: f64, t: u64) -> PointerEvent {
    PointerEvent::new(1, Point::new(x, y), t)
}

#[test]
fn tap_selects_planet_under_pointer() {
    let mut host = Host::new(DeviceCaps::DESKTOP);
    host.feed(InputEvent::PointerDown(ptr(50.0, 50.0, 0)));
    host.feed(InputEvent::PointerUp(ptr(50.0, 50.0, 80)));
    assert_eq!(host.selected, Some("a"));
    assert_eq!(host.view.offset(), Vec2::ZERO);
}

#[test]
fn drag_pans_by_sensitivity_and_does_not_select() {
    let mut host = Host::new(DeviceCaps::DESKTOP);
    host.feed(InputEvent::PointerDown(ptr(50.0, 50.0, 0)));
    host.feed(InputEvent::PointerMove(ptr(60.0, 60.0, 16)));
    host.feed(InputEvent::PointerUp(ptr(60.0, 60.0, 32)));
    assert_eq!(host.selected, None);
    let expected = Vec2::new(10.0, 10.0) * 0.7;
    assert!((host.view.offset() - expected).hypot() < 1e-9);
}

#[test]
fn small_jitter_is_still_a_tap() {
    let mut host = Host::new(DeviceCaps::DESKTOP);
    host.feed(InputEvent::PointerDown(ptr(50.0, 50.0, 0)));
    // Exactly on the threshold does not cross it.
    host.feed(InputEvent::PointerMove(ptr(58.0, 50.0, 10)));
    assert_eq!(host.input.phase(), DragPhase::Pressed);
    host.feed(InputEvent::PointerUp(ptr(58.0, 50.0, 20)));
    assert_eq!(host.selected, Some("a"));
    assert_eq!(host.view.offset(), Vec2::ZERO);
}

#[test]
fn release_far_from_press_is_a_drag_even_without_moves() {
    let mut host = Host::new(DeviceCaps::DESKTOP);
    host.feed(InputEvent::PointerDown(ptr(50.0, 50.0, 0)));
    host.feed(InputEvent::PointerUp(ptr(150.0, 150.0, 40)));
    assert_eq!(host.selected, None);
    let expected = Vec2::new(100.0, 100.0) * 0.7;
    assert!((host.view.offset() - expected).hypot() < 1e-9);
    assert_eq!(host.input.phase(), DragPhase::Idle);
}

#[test]
fn release_adds_movement_since_last_move() {
    let mut input = Reconciler::default();
    input.handle(InputEvent::PointerDown(ptr(0.0, 0.0, 0)));
    input.handle(InputEvent::PointerMove(ptr(20.0, 0.0, 10)));
    assert_eq!(
        input
            .handle(InputEvent::PointerUp(ptr(30.0, 0.0, 20)))
            .as_slice(),
        &[Intent::Pan(Vec2::new(10.0 * 0.7, 0.0))]
    );
}

#[test]
fn background_tap_clears_selection() {
    let mut host = Host::new(DeviceCaps::DESKTOP);
    host.feed(InputEvent::PointerDown(ptr(50.0, 50.0, 0)));
    host.feed(InputEvent::PointerUp(ptr(50.0, 50.0, 10)));
    assert_eq!(host.selected, Some("a"));
    host.feed(InputEvent::PointerDown(ptr(300.0, 300.0, 20)));
    host.feed(InputEvent::PointerUp(ptr(300.0, 300.0, 30)));
    assert_eq!(host.selected, None);
}

#[test]
fn drag_pans_on_every_move_after_threshold() {
    let mut input = Reconciler::default();
    assert!(input.handle(InputEvent::PointerDown(ptr(0.0, 0.0, 0))).is_empty());
    let first = input.handle(InputEvent::PointerMove(ptr(20.0, 0.0, 10)));
    assert_eq!(first.as_slice(), &[Intent::Pan(Vec2::new(20.0 * 0.7, 0.0))]);
    let second = input.handle(InputEvent::PointerMove(ptr(25.0, 0.0, 20)));
    assert_eq!(second.as_slice(), &[Intent::Pan(Vec2::new(5.0 * 0.7, 0.0))]);
    assert!(input.is_dragging());
    assert!(input.handle(InputEvent::PointerUp(ptr(25.0, 0.0, 30))).is_empty());
    assert_eq!(input.phase(), DragPhase::Idle);
}

#[test]
fn up_without_down_is_ignored() {
    let mut input = Reconciler::default();
    assert!(input.handle(InputEvent::PointerUp(ptr(1.0, 1.0, 0))).is_empty());
}

#[test]
fn second_pointer_cannot_hijack_session() {
    let mut input = Reconciler::new(Tunables::default(), DeviceCaps::TOUCH);
    input.handle(InputEvent::PointerDown(ptr(10.0, 10.0, 0)));
    let other = PointerEvent::new(2, Point::new(200.0, 200.0), 5);
    assert!(input.handle(InputEvent::PointerDown(other)).is_empty());
    assert!(input.handle(InputEvent::PointerMove(other)).is_empty());
    assert!(input.handle(InputEvent::PointerUp(other)).is_empty());
    assert_eq!(input.active_pointer(), Some(1));
    assert_eq!(
        input
            .handle(InputEvent::PointerUp(ptr(10.0, 10.0, 50)))
            .as_slice(),
        &[Intent::Select(Point::new(10.0, 10.0))]
    );
}

#[test]
fn wheel_zooms_about_cursor() {
    let mut host = Host::new(DeviceCaps::DESKTOP);
    let anchor = Point::new(120.0, 80.0);
    let world_before = host.view.viewport().screen_to_world(anchor);
    host.feed(InputEvent::Wheel {
        position: anchor,
        delta_y: -3.0,
    });
    assert!((host.view.scale() - 1.1).abs() < 1e-12);
    let world_after = host.view.viewport().screen_to_world(anchor);
    assert!((world_after - world_before).hypot() < 1e-9);

    host.feed(InputEvent::Wheel {
        position: anchor,
        delta_y: 3.0,
    });
    assert!((host.view.scale() - 1.0).abs() < 1e-12);
}

#[test]
fn zero_wheel_delta_is_a_no_op() {
    let mut input = Reconciler::default();
    let out = input.handle(InputEvent::Wheel {
        position: Point::ZERO,
        delta_y: 0.0,
    });
    assert!(out.is_empty());
}

#[test]
fn wheel_is_ignored_mid_drag_and_on_touch() {
    let mut input = Reconciler::default();
    input.handle(InputEvent::PointerDown(ptr(0.0, 0.0, 0)));
    input.handle(InputEvent::PointerMove(ptr(30.0, 0.0, 10)));
    let wheel = InputEvent::Wheel {
        position: Point::ZERO,
        delta_y: 1.0,
    };
    assert!(input.handle(wheel).is_empty());

    let mut touch = Reconciler::new(Tunables::default(), DeviceCaps::TOUCH);
    assert!(touch.handle(wheel).is_empty());
}

#[test]
fn wheel_during_pending_press_still_zooms() {
    let mut input = Reconciler::default();
    input.handle(InputEvent::PointerDown(ptr(0.0, 0.0, 0)));
    let out = input.handle(InputEvent::Wheel {
        position: Point::new(5.0, 5.0),
        delta_y: -1.0,
    });
    assert_eq!(out.len(), 1);
}

#[test]
fn hover_follows_pointer_on_desktop_only() {
    let mut host = Host::new(DeviceCaps::DESKTOP);
    host.feed(InputEvent::PointerMove(ptr(10.0, 20.0, 0)));
    assert_eq!(host.hover_at, Some(Point::new(10.0, 20.0)));
    host.feed(InputEvent::PointerLeave(ptr(-1.0, 20.0, 5)));
    assert_eq!(host.hover_at, None);

    let mut touch = Reconciler::new(Tunables::default(), DeviceCaps::TOUCH);
    assert!(
        touch
            .handle(InputEvent::PointerMove(ptr(10.0, 20.0, 0)))
            .is_empty()
    );
}

#[test]
fn no_hover_while_dragging() {
    let mut input = Reconciler::default();
    input.handle(InputEvent::PointerDown(ptr(0.0, 0.0, 0)));
    let out = input.handle(InputEvent::PointerMove(ptr(30.0, 0.0, 10)));
    assert!(out.iter().all(|i| matches!(i, Intent::Pan(_))));
}

#[test]
fn leave_mid_press_abandons_tap() {
    let mut input = Reconciler::default();
    input.handle(InputEvent::PointerDown(ptr(0.0, 0.0, 0)));
    input.handle(InputEvent::PointerLeave(ptr(0.0, 0.0, 5)));
    assert!(input.handle(InputEvent::PointerUp(ptr(0.0, 0.0, 10))).is_empty());
}

#[test]
fn cancel_ends_session_silently() {
    let mut input = Reconciler::default();
    input.handle(InputEvent::PointerDown(ptr(0.0, 0.0, 0)));
    assert!(
        input
            .handle(InputEvent::PointerCancel(ptr(0.0, 0.0, 5)))
            .is_empty()
    );
    assert_eq!(input.phase(), DragPhase::Idle);
}

#[test]
fn non_finite_events_are_dropped() {
    let mut host = Host::new(DeviceCaps::DESKTOP);
    host.feed(InputEvent::PointerDown(ptr(f64::NAN, 0.0, 0)));
    assert_eq!(host.input.phase(), DragPhase::Idle);
    host.feed(InputEvent::Wheel {
        position: Point::ZERO,
        delta_y: f64::INFINITY,
    });
    host.feed(InputEvent::Pinch {
        center: Point::ZERO,
        scale_ratio: f64::NAN,
    });
    assert_eq!(host.view.scale(), 1.0);
    assert!(host.view.viewport().is_finite());
}

#[test]
fn pinch_zoom_respects_limits() {
    let mut host = Host::new(DeviceCaps::TOUCH);
    for _ in 0..20 {
        host.feed(InputEvent::Pinch {
            center: Point::new(100.0, 100.0),
            scale_ratio: 2.0,
        });
    }
    assert_eq!(host.view.scale(), 5.0);
    for _ in 0..40 {
        host.feed(InputEvent::Pinch {
            center: Point::new(100.0, 100.0),
            scale_ratio: 0.5,
        });
    }
    assert_eq!(host.view.scale(), 0.1);
}

#[test]
fn custom_threshold_is_honored() {
    let tunables = Tunables {
        drag_threshold_px: 2.0,
        ..Tunables::default()
    };
    let mut input = Reconciler::new(tunables, DeviceCaps::DESKTOP);
    input.handle(InputEvent::PointerDown(ptr(0.0, 0.0, 0)));
    let out = input.handle(InputEvent::PointerMove(ptr(3.0, 0.0, 10)));
    assert_eq!(out.len(), 1);
    assert!(input.is_dragging());
}

fn drag_then(end: InputEvent) -> Host {
    let mut host = Host::new(DeviceCaps::DESKTOP);
    host.feed(InputEvent::PointerDown(ptr(50.0, 50.0, 0)));
    host.feed(InputEvent::PointerUp(ptr(50.0, 50.0, 10)));
    assert_eq!(host.selected, Some("a"));

    host.feed(InputEvent::PointerDown(ptr(300.0, 300.0, 20)));
    host.feed(InputEvent::PointerMove(ptr(320.0, 300.0, 30)));
    host.feed(InputEvent::PointerMove(ptr(330.0, 310.0, 40)));
    host.feed(end);
    assert_eq!(host.input.phase(), DragPhase::Idle);
    // The release after the session ended is ignored, wherever it lands.
    host.feed(InputEvent::PointerUp(ptr(500.0, 500.0, 60)));
    host
}

#[test]
fn cancel_mid_drag_keeps_last_pan_and_selection() {
    let host = drag_then(InputEvent::PointerCancel(ptr(400.0, 400.0, 50)));
    let expected = Vec2::new(30.0, 10.0) * 0.7;
    assert!((host.view.offset() - expected).hypot() < 1e-9);
    assert_eq!(host.selected, Some("a"));
}

#[test]
fn leave_mid_drag_keeps_last_pan_and_selection() {
    let host = drag_then(InputEvent::PointerLeave(ptr(400.0, 400.0, 50)));
    let expected = Vec2::new(30.0, 10.0) * 0.7;
    assert!((host.view.offset() - expected).hypot() < 1e-9);
    assert_eq!(host.selected, Some("a"));
    assert_eq!(host.hover_at, None);
}
