// Copyright 2025 the Orrery Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Affine, Point, Rect, Size, Vec2};

/// Uniform pan + zoom transform from world space into screen space.
///
/// A world point `w` lands on screen at `w * scale + offset`. The inverse maps
/// a screen point `s` back to `(s - offset) / scale`.
///
/// `Viewport` is a plain value. It does not enforce any bounds on `scale`;
/// [`crate::ViewportController`] is the component that keeps `scale` inside
/// its [`crate::ZoomLimits`] and rejects non-finite states. Converting with a
/// viewport whose `scale` is zero yields non-finite coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Viewport {
    /// Screen-space position of the world origin.
    pub offset: Vec2,
    /// Uniform world-to-screen scale factor.
    pub scale: f64,
}

impl Viewport {
    /// The identity viewport: no offset, scale `1.0`.
    pub const IDENTITY: Self = Self {
        offset: Vec2::ZERO,
        scale: 1.0,
    };

    /// Creates a viewport from an offset and a scale.
    #[must_use]
    pub const fn new(offset: Vec2, scale: f64) -> Self {
        Self { offset, scale }
    }

    /// Returns a copy of this viewport with a different scale.
    #[must_use]
    pub const fn with_scale(self, scale: f64) -> Self {
        Self {
            offset: self.offset,
            scale,
        }
    }

    /// Converts a screen-space point into world coordinates.
    #[must_use]
    pub fn screen_to_world(&self, pt: Point) -> Point {
        Point::new(
            (pt.x - self.offset.x) / self.scale,
            (pt.y - self.offset.y) / self.scale,
        )
    }

    /// Converts a world-space point into screen coordinates.
    #[must_use]
    pub fn world_to_screen(&self, pt: Point) -> Point {
        Point::new(
            pt.x * self.scale + self.offset.x,
            pt.y * self.scale + self.offset.y,
        )
    }

    /// Converts a world-space length (for example a radius) into pixels.
    #[must_use]
    pub fn world_to_screen_length(&self, len: f64) -> f64 {
        len * self.scale
    }

    /// Converts a screen-space rectangle into world coordinates.
    #[must_use]
    pub fn screen_to_world_rect(&self, rect: Rect) -> Rect {
        // Scale is positive for every viewport the controller produces, so the
        // corners keep their order.
        Rect::from_points(
            self.screen_to_world(rect.origin()),
            self.screen_to_world(Point::new(rect.x1, rect.y1)),
        )
    }

    /// Converts a world-space rectangle into screen coordinates.
    #[must_use]
    pub fn world_to_screen_rect(&self, rect: Rect) -> Rect {
        Rect::from_points(
            self.world_to_screen(rect.origin()),
            self.world_to_screen(Point::new(rect.x1, rect.y1)),
        )
    }

    /// Returns the world-space rectangle visible through a view of `size`
    /// pixels whose top-left corner is the screen origin.
    #[must_use]
    pub fn visible_world_rect(&self, size: Size) -> Rect {
        self.screen_to_world_rect(size.to_rect())
    }

    /// Returns the world → screen transform as an [`Affine`].
    ///
    /// Useful for renderers that draw world geometry under a transform rather
    /// than projecting every point by hand.
    #[must_use]
    pub fn to_affine(&self) -> Affine {
        Affine::translate(self.offset) * Affine::scale(self.scale)
    }

    /// Returns `true` if both offset components and the scale are finite.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.offset.is_finite() && self.scale.is_finite()
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Converts `pt` from screen space into world space under `viewport`.
///
/// Free-function form of [`Viewport::screen_to_world`].
#[must_use]
pub fn screen_to_world(pt: Point, viewport: &Viewport) -> Point {
    viewport.screen_to_world(pt)
}

/// Converts `pt` from world space into screen space under `viewport`.
///
/// Free-function form of [`Viewport::world_to_screen`].
#[must_use]
pub fn world_to_screen(pt: Point, viewport: &Viewport) -> Point {
    viewport.world_to_screen(pt)
}
