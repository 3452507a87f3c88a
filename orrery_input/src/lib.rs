// Copyright 2025 the Orrery Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Orrery Input: reconcile pointer, wheel and pinch input into view intents.
//!
//! A canvas receives overlapping event streams. A mouse press may turn into a
//! tap or a drag; touch screens emit synthetic mouse and wheel events next to
//! their touch stream; a second finger turns a drag into a pinch. The
//! [`Reconciler`] reduces all of this to an ordered list of [`Intent`]s:
//!
//! - a press that stays within the drag threshold selects on release;
//! - a press that crosses it pans on every move and never selects;
//! - wheel steps and pinches zoom about their anchor;
//! - desktop moves hover, and leaving the canvas clears the hover.
//!
//! The host owns the viewport, the entity collection and the selection, and
//! applies each intent in order.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Vec2};
//! use orrery_input::{InputEvent, Intent, PointerEvent, Reconciler};
//! use orrery_view2d::{ViewportController, ZoomLimits};
//!
//! let mut input = Reconciler::default();
//! let mut view = ViewportController::new(ZoomLimits::default());
//!
//! let events = [
//!     InputEvent::PointerDown(PointerEvent::new(1, Point::new(50.0, 50.0), 0)),
//!     InputEvent::PointerMove(PointerEvent::new(1, Point::new(60.0, 60.0), 16)),
//!     InputEvent::PointerUp(PointerEvent::new(1, Point::new(60.0, 60.0), 32)),
//! ];
//! for event in events {
//!     for intent in input.handle(event) {
//!         match intent {
//!             Intent::Pan(delta) => {
//!                 view.pan_by(delta);
//!             }
//!             Intent::ZoomAt { anchor, factor } => {
//!                 view.zoom_at_point(anchor, factor);
//!             }
//!             _ => {}
//!         }
//!     }
//! }
//! // Mouse drags pan at 0.7 of the pointer travel.
//! assert!((view.offset() - Vec2::new(7.0, 7.0)).hypot() < 1e-9);
//! ```
//!
//! ## Configuration
//!
//! [`Tunables`] gathers every constant the interaction depends on: zoom
//! bounds and steps, the drag threshold, pan sensitivity, touch damping and
//! the long-press delay. With the `serde` feature it deserializes from partial
//! configuration, missing fields taking their defaults.
//!
//! This crate is `no_std`.

#![no_std]

mod event;
mod intent;
mod reconciler;
mod tunables;

pub use event::{DeviceCaps, InputEvent, PointerEvent, PointerId};
pub use intent::{Intent, Intents};
pub use reconciler::Reconciler;
pub use tunables::{
    DEFAULT_DRAG_THRESHOLD_PX, DEFAULT_LONG_PRESS_MS, DEFAULT_SENSITIVITY,
    DEFAULT_TOUCH_SENSITIVITY, DEFAULT_WHEEL_ZOOM_STEP, FlingDamping, Tunables, TunablesError,
};
