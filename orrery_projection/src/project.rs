// Copyright 2025 the Orrery Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;

use kurbo::{Circle, Point, Rect};
use orrery_hit::HitArea;
use orrery_view2d::Viewport;

use crate::ProjectionParams;

/// Screen-space draw parameters for one entity.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Projected {
    /// Index of the entity in the projected slice.
    pub index: usize,
    /// Center in screen pixels.
    pub center: Point,
    /// Radius in screen pixels.
    pub radius: f64,
}

impl Projected {
    /// Screen-space circle.
    #[must_use]
    pub fn circle(&self) -> Circle {
        Circle::new(self.center, self.radius)
    }

    /// Screen-space bounding box.
    #[must_use]
    pub fn bounds(&self) -> Rect {
        Rect::from_center_size(self.center, (2.0 * self.radius, 2.0 * self.radius))
    }
}

/// Projects one entity, returning `None` if it is culled.
#[must_use]
pub fn project_one<T: HitArea>(
    viewport: &Viewport,
    params: &ProjectionParams,
    index: usize,
    entity: &T,
) -> Option<Projected> {
    let projected = Projected {
        index,
        center: viewport.world_to_screen(entity.hit_center()),
        radius: viewport.world_to_screen_length(entity.hit_radius()),
    };
    (!params.is_culled(projected.bounds())).then_some(projected)
}

/// Clears `out` and fills it with the visible entities, in slice order.
///
/// Slice order is draw order, so the last element is drawn on top, matching
/// hit-test priority.
pub fn project_into<T: HitArea>(
    viewport: &Viewport,
    params: &ProjectionParams,
    entities: &[T],
    out: &mut Vec<Projected>,
) {
    out.clear();
    out.extend(
        entities
            .iter()
            .enumerate()
            .filter_map(|(i, e)| project_one(viewport, params, i, e)),
    );
}

/// Projects the visible entities into a new vector.
#[must_use]
pub fn project<T: HitArea>(
    viewport: &Viewport,
    params: &ProjectionParams,
    entities: &[T],
) -> Vec<Projected> {
    let mut out = Vec::new();
    project_into(viewport, params, entities, &mut out);
    out
}
