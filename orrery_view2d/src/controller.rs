// Copyright 2025 the Orrery Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Size, Vec2};

use crate::limits::ZoomLimits;
use crate::viewport::Viewport;

/// Default multiplicative step used by [`ViewportController::zoom_in`] and
/// [`ViewportController::zoom_out`].
pub const DEFAULT_ZOOM_STEP: f64 = 1.2;

/// Owner and sole writer of a [`Viewport`].
///
/// Every mutation is synchronous and immediately visible through
/// [`ViewportController::viewport`]. The controller maintains two
/// invariants:
/// - `scale` always lies within the configured [`ZoomLimits`] (so it is
///   never zero or negative);
/// - offset and scale are always finite. A mutation that would produce a
///   non-finite state is rejected and the previous viewport is kept.
///
/// Panning is unbounded: the world has no edges.
///
/// Mutating methods return `true` when the viewport actually changed, so
/// hosts can skip redundant redraws.
#[derive(Clone, Debug)]
pub struct ViewportController {
    viewport: Viewport,
    limits: ZoomLimits,
    zoom_step: f64,
}

impl ViewportController {
    /// Creates a controller holding the identity viewport.
    #[must_use]
    pub fn new(limits: ZoomLimits) -> Self {
        Self {
            viewport: Viewport::IDENTITY.with_scale(limits.clamp(1.0)),
            limits,
            zoom_step: DEFAULT_ZOOM_STEP,
        }
    }

    /// Sets the factor used by [`Self::zoom_in`] / [`Self::zoom_out`].
    ///
    /// Steps that are not finite or not greater than `1.0` are ignored.
    #[must_use]
    pub fn with_zoom_step(mut self, step: f64) -> Self {
        self.set_zoom_step(step);
        self
    }

    /// Sets the factor used by [`Self::zoom_in`] / [`Self::zoom_out`].
    ///
    /// Steps that are not finite or not greater than `1.0` are ignored.
    pub fn set_zoom_step(&mut self, step: f64) {
        if step.is_finite() && step > 1.0 {
            self.zoom_step = step;
        } else {
            log::warn!("ignoring zoom step {step}");
        }
    }

    /// Returns the toolbar zoom step.
    #[must_use]
    pub fn zoom_step(&self) -> f64 {
        self.zoom_step
    }

    /// Returns the current viewport.
    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Returns the current scale.
    #[must_use]
    pub fn scale(&self) -> f64 {
        self.viewport.scale
    }

    /// Returns the current offset.
    #[must_use]
    pub fn offset(&self) -> Vec2 {
        self.viewport.offset
    }

    /// Returns the zoom limits.
    #[must_use]
    pub fn limits(&self) -> ZoomLimits {
        self.limits
    }

    /// Replaces the zoom limits and clamps the current scale into them.
    ///
    /// The offset is left untouched, so a clamp here zooms about the screen
    /// origin.
    pub fn set_limits(&mut self, limits: ZoomLimits) -> bool {
        self.limits = limits;
        self.commit(self.viewport)
    }

    /// Replaces the viewport wholesale.
    ///
    /// The scale is clamped into the limits. Non-finite or non-positive input
    /// is rejected.
    pub fn set(&mut self, viewport: Viewport) -> bool {
        if !(viewport.scale > 0.0) {
            log::warn!("rejecting viewport with scale {}", viewport.scale);
            return false;
        }
        self.commit(viewport)
    }

    /// Zooms in by the zoom step, keeping the offset.
    ///
    /// This zooms about the screen origin, which suits toolbar buttons but not
    /// pointer-driven zoom; use [`Self::zoom_at_point`] for those.
    pub fn zoom_in(&mut self) -> bool {
        let scale = self.viewport.scale * self.zoom_step;
        self.commit(self.viewport.with_scale(scale))
    }

    /// Zooms out by the zoom step, keeping the offset.
    pub fn zoom_out(&mut self) -> bool {
        let scale = self.viewport.scale / self.zoom_step;
        self.commit(self.viewport.with_scale(scale))
    }

    /// Multiplies the scale by `factor` while keeping the world point under
    /// `anchor` (a screen-space position) fixed on screen.
    ///
    /// The new scale is clamped before the compensating offset is computed,
    /// so the anchor stays put even when the zoom hits a limit. Factors that
    /// are not finite and positive are ignored.
    pub fn zoom_at_point(&mut self, anchor: Point, factor: f64) -> bool {
        if !(factor.is_finite() && factor > 0.0) {
            log::warn!("ignoring zoom factor {factor}");
            return false;
        }
        let scale = self.limits.clamp(self.viewport.scale * factor);
        if scale == self.viewport.scale {
            return false;
        }
        let world = self.viewport.screen_to_world(anchor);
        let offset = Vec2::new(anchor.x - world.x * scale, anchor.y - world.y * scale);
        self.commit(Viewport::new(offset, scale))
    }

    /// Pans by a screen-space delta. No clamping is applied.
    pub fn pan_by(&mut self, delta: Vec2) -> bool {
        self.commit(Viewport::new(self.viewport.offset + delta, self.viewport.scale))
    }

    /// Pans so that `world_pt` lands at the center of a view of `view_size`
    /// pixels. The scale is unchanged.
    pub fn center_on(&mut self, world_pt: Point, view_size: Size) -> bool {
        let scale = self.viewport.scale;
        let offset = Vec2::new(
            view_size.width / 2.0 - world_pt.x * scale,
            view_size.height / 2.0 - world_pt.y * scale,
        );
        self.commit(Viewport::new(offset, scale))
    }

    /// Restores the identity viewport.
    pub fn reset(&mut self) -> bool {
        log::debug!("viewport reset");
        self.commit(Viewport::IDENTITY)
    }

    /// Snapshot of the controller state for debugging and inspection.
    #[must_use]
    pub fn debug_info(&self) -> ViewportDebugInfo {
        ViewportDebugInfo {
            viewport: self.viewport,
            min_scale: self.limits.min(),
            max_scale: self.limits.max(),
            zoom_step: self.zoom_step,
            world_units_per_pixel: 1.0 / self.viewport.scale,
        }
    }

    fn commit(&mut self, candidate: Viewport) -> bool {
        let candidate = candidate.with_scale(self.limits.clamp(candidate.scale));
        if !candidate.is_finite() {
            log::warn!("rejecting non-finite viewport {candidate:?}");
            return false;
        }
        if candidate == self.viewport {
            return false;
        }
        self.viewport = candidate;
        true
    }
}

impl Default for ViewportController {
    fn default() -> Self {
        Self::new(ZoomLimits::default())
    }
}

/// Debug snapshot of a [`ViewportController`] state.
#[derive(Clone, Copy, Debug)]
pub struct ViewportDebugInfo {
    /// Current viewport.
    pub viewport: Viewport,
    /// Minimum scale.
    pub min_scale: f64,
    /// Maximum scale.
    pub max_scale: f64,
    /// Toolbar zoom step.
    pub zoom_step: f64,
    /// World units covered by one screen pixel.
    pub world_units_per_pixel: f64,
}
