// Copyright 2025 the Orrery Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Orrery View 2D: the pan/zoom viewport over an unbounded world plane.
//!
//! This crate provides a small, headless model of the camera used by a
//! zoomable 2D canvas. It focuses on:
//! - [`Viewport`]: an offset + uniform scale value mapping world space into
//!   screen (pixel) space, with exact inverse conversions.
//! - [`ViewportController`]: the sole writer of a viewport, exposing toolbar
//!   zoom, pointer-anchored zoom, unbounded panning and reset while keeping the
//!   scale inside [`ZoomLimits`].
//!
//! It does **not** interpret input events or own any scene. Callers are
//! expected to:
//! - Translate pointer, wheel and pinch events into controller calls (see
//!   `orrery_input`).
//! - Use [`Viewport::screen_to_world`] to hit test pointer positions against
//!   world-space entities.
//! - Use [`Viewport::world_to_screen`] or [`Viewport::to_affine`] when drawing.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Vec2};
//! use orrery_view2d::{Viewport, ViewportController};
//!
//! let mut view = ViewportController::default();
//!
//! // Wheel-zoom about the cursor: the world point under the cursor stays put.
//! let cursor = Point::new(400.0, 300.0);
//! let before = view.viewport().screen_to_world(cursor);
//! view.zoom_at_point(cursor, 1.1);
//! let after = view.viewport().screen_to_world(cursor);
//! assert!((before - after).hypot() < 1e-9);
//!
//! // Drag-pan by a screen-space delta.
//! view.pan_by(Vec2::new(-25.0, 10.0));
//!
//! // Toolbar reset.
//! view.reset();
//! assert_eq!(view.viewport(), Viewport::IDENTITY);
//! ```
//!
//! ## Design notes
//!
//! - The transform is axis-aligned with a **uniform** scale; there is no
//!   rotation.
//! - Zoom is always multiplicative so that repeated steps feel linear.
//! - Scale limits default to `[SCALE_MIN, SCALE_MAX]` = `[0.1, 5.0]`.
//! - Every mutation is validated: a non-finite result is dropped and the last
//!   good viewport is kept, so a misbehaving event source cannot poison the
//!   camera.
//!
//! This crate is `no_std`.

#![no_std]

mod controller;
mod limits;
mod viewport;

pub use controller::{DEFAULT_ZOOM_STEP, ViewportController, ViewportDebugInfo};
pub use limits::{SCALE_MAX, SCALE_MIN, ZoomLimits, ZoomLimitsError};
pub use viewport::{Viewport, screen_to_world, world_to_screen};
