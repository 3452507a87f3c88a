// Copyright 2025 the Orrery Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Orrery Hit: resolve which world-space entity a point lands on.
//!
//! Entities expose a circular hit area through [`HitArea`]. A point hits an
//! entity when its distance to the entity center is at most the radius (plus
//! an optional [`HitParams::tolerance`]); the boundary counts as inside.
//!
//! When several entities overlap, the **last** one in the slice wins: slices
//! are expected in draw order, so the last entity is the one drawn on top.
//!
//! ```rust
//! use kurbo::{Circle, Point};
//! use orrery_hit::hit_test;
//!
//! let a = Circle::new((0.0, 0.0), 50.0);
//! let b = Circle::new((10.0, 0.0), 50.0);
//! let bodies = [a, b];
//!
//! // Both contain (10, 0); `b` is drawn after `a`, so it wins.
//! assert_eq!(hit_test(Point::new(10.0, 0.0), &bodies), Some(&b));
//! assert_eq!(hit_test(Point::new(500.0, 0.0), &bodies), None);
//! ```
//!
//! All functions are pure: they never mutate the entities or any selection.
//!
//! This crate is `no_std`.

#![no_std]

use kurbo::{Circle, Point};

/// Something with a circular hit area in world space.
pub trait HitArea {
    /// Center of the hit area.
    fn hit_center(&self) -> Point;

    /// Radius of the hit area. Expected to be positive.
    fn hit_radius(&self) -> f64;

    /// Scores a hit at `pt`, or returns `None` on a miss.
    fn hit_score(&self, pt: Point, params: &HitParams) -> Option<HitScore> {
        let distance = (pt - self.hit_center()).hypot();
        if distance <= self.hit_radius() + params.tolerance {
            Some(HitScore { distance })
        } else {
            None
        }
    }
}

impl HitArea for Circle {
    fn hit_center(&self) -> Point {
        self.center
    }

    fn hit_radius(&self) -> f64 {
        self.radius
    }
}

impl<T: HitArea + ?Sized> HitArea for &T {
    fn hit_center(&self) -> Point {
        (**self).hit_center()
    }

    fn hit_radius(&self) -> f64 {
        (**self).hit_radius()
    }
}

/// Parameters shared by all hit queries.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HitParams {
    /// Extra world-space slack added to every radius. Defaults to `0.0`.
    pub tolerance: f64,
}

impl Default for HitParams {
    fn default() -> Self {
        Self { tolerance: 0.0 }
    }
}

/// Result of a successful hit.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HitScore {
    /// Distance from the query point to the hit area's center.
    pub distance: f64,
}

/// Result of [`hit_test_indexed`]: the winning entity and its slice index.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hit<'a, T> {
    /// Index of the entity in the queried slice.
    pub index: usize,
    /// The entity itself.
    pub entity: &'a T,
    /// How the entity was hit.
    pub score: HitScore,
}

/// Returns the top-most entity containing `pt`, using default [`HitParams`].
///
/// Returns `None` for an empty slice.
#[must_use]
pub fn hit_test<T: HitArea>(pt: Point, entities: &[T]) -> Option<&T> {
    hit_test_indexed(pt, entities, &HitParams::default()).map(|hit| hit.entity)
}

/// Returns the top-most entity containing `pt` along with its index.
///
/// Entities are scanned from the end of the slice, so the first match is the
/// one drawn last.
#[must_use]
pub fn hit_test_indexed<'a, T: HitArea>(
    pt: Point,
    entities: &'a [T],
    params: &HitParams,
) -> Option<Hit<'a, T>> {
    if !pt.is_finite() {
        return None;
    }
    entities
        .iter()
        .enumerate()
        .rev()
        .find_map(|(index, entity)| {
            entity.hit_score(pt, params).map(|score| Hit {
                index,
                entity,
                score,
            })
        })
}

#[cfg(test)]
mod tests {
    use kurbo::{Circle, Point};

    use super::{HitArea, HitParams, hit_test, hit_test_indexed};

    struct Body {
        id: &'static str,
        center: Point,
        radius: f64,
    }

    impl HitArea for Body {
        fn hit_center(&self) -> Point {
            self.center
        }

        fn hit_radius(&self) -> f64 {
            self.radius
        }
    }

    fn body(id: &'static str, x: f64, y: f64, radius: f64) -> Body {
        Body {
            id,
            center: Point::new(x, y),
            radius,
        }
    }

    #[test]
    fn distance_against_radius() {
        let a = [body("a", 100.0, 100.0, 30.0)];
        assert_eq!(hit_test(Point::new(100.0, 100.0), &a).map(|b| b.id), Some("a"));
        assert!(hit_test(Point::new(140.0, 100.0), &a).is_none());
        assert_eq!(hit_test(Point::new(129.0, 100.0), &a).map(|b| b.id), Some("a"));
    }

    #[test]
    fn boundary_is_inside() {
        let a = [body("a", 0.0, 0.0, 5.0)];
        assert!(hit_test(Point::new(3.0, 4.0), &a).is_some());
        assert!(hit_test(Point::new(3.0, 4.001), &a).is_none());
    }

    #[test]
    fn last_drawn_wins_on_overlap() {
        let bodies = [body("a", 0.0, 0.0, 50.0), body("b", 10.0, 0.0, 50.0)];
        assert_eq!(hit_test(Point::new(10.0, 0.0), &bodies).map(|b| b.id), Some("b"));
        // Only `a` reaches this far left.
        assert_eq!(hit_test(Point::new(-45.0, 0.0), &bodies).map(|b| b.id), Some("a"));
    }

    #[test]
    fn empty_collection_misses() {
        let none: [Body; 0] = [];
        assert!(hit_test(Point::ZERO, &none).is_none());
    }

    #[test]
    fn non_finite_query_misses() {
        let a = [Circle::new((0.0, 0.0), 1e300)];
        assert!(hit_test(Point::new(f64::NAN, 0.0), &a).is_none());
        assert!(hit_test(Point::new(f64::INFINITY, 0.0), &a).is_none());
    }

    #[test]
    fn tolerance_widens_hit_area() {
        let a = [Circle::new((0.0, 0.0), 10.0)];
        let pt = Point::new(12.0, 0.0);
        assert!(hit_test(pt, &a).is_none());
        let hit = hit_test_indexed(pt, &a, &HitParams { tolerance: 2.0 }).unwrap();
        assert_eq!(hit.index, 0);
        assert_eq!(hit.score.distance, 12.0);
    }

    #[test]
    fn references_are_hit_areas() {
        let a = body("a", 1.0, 1.0, 1.0);
        let refs = [&a];
        assert_eq!(hit_test(Point::new(1.0, 1.5), &refs).map(|b| b.id), Some("a"));
    }
}
