// Copyright 2025 the Orrery Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Orrery Projection: screen-space draw parameters for a zoomable canvas.
//!
//! Once per frame a renderer needs to know where each entity lands on screen,
//! how big it is, and whether it is worth drawing at all. This crate computes
//! that from the current [`Viewport`](orrery_view2d::Viewport) and the entity
//! list without ever mutating either:
//!
//! - [`project`] / [`project_into`]: map every entity's center and radius to
//!   screen space and drop those whose bounding box lies entirely outside the
//!   view grown by [`ProjectionParams::margin`].
//! - [`Projector`]: the same, with a reusable output buffer for render loops.
//! - [`DetailLevel`]: which decorations (labels, ratings) to draw at the
//!   current zoom.
//! - [`GridSpec`]: a world-aligned debug grid that hides itself when zoomed
//!   far out.
//!
//! Entities are anything implementing [`HitArea`](orrery_hit::HitArea), so the
//! geometry drawn is exactly the geometry hit-tested.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Circle, Size, Vec2};
//! use orrery_projection::{ProjectionParams, project};
//! use orrery_view2d::Viewport;
//!
//! let planets = [
//!     Circle::new((100.0, 100.0), 30.0),
//!     Circle::new((10_000.0, 0.0), 30.0),
//! ];
//! let params = ProjectionParams::new(Size::new(800.0, 600.0));
//! let viewport = Viewport::new(Vec2::new(50.0, 0.0), 2.0);
//!
//! let visible = project(&viewport, &params, &planets);
//! assert_eq!(visible.len(), 1);
//! assert_eq!(visible[0].center, (250.0, 200.0).into());
//! assert_eq!(visible[0].radius, 60.0);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod grid;
mod params;
mod project;
mod projector;

pub use grid::{GridLines, GridSpec};
pub use params::{DEFAULT_CULL_MARGIN, DetailLevel, DetailThresholds, ProjectionParams};
pub use project::{Projected, project, project_into, project_one};
pub use projector::Projector;
