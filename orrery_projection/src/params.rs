// Copyright 2025 the Orrery Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Rect, Size};

/// Default distance, in pixels, the cull region extends past each view edge.
pub const DEFAULT_CULL_MARGIN: f64 = 50.0;

/// Frame-independent inputs to the projection.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct ProjectionParams {
    /// Size of the drawing surface in pixels.
    pub view_size: Size,
    /// Extra pixels kept around the view so entities near an edge are not
    /// dropped while they are still partly visible.
    pub margin: f64,
    /// Scales above which extra per-entity detail is drawn.
    pub detail: DetailThresholds,
}

impl Default for ProjectionParams {
    fn default() -> Self {
        Self {
            view_size: Size::ZERO,
            margin: DEFAULT_CULL_MARGIN,
            detail: DetailThresholds::default(),
        }
    }
}

impl ProjectionParams {
    /// Parameters for a view of `view_size` pixels with the default margin.
    #[must_use]
    pub fn new(view_size: Size) -> Self {
        Self {
            view_size,
            ..Self::default()
        }
    }

    /// The screen rectangle an entity's bounds must touch to be kept.
    ///
    /// A negative or non-finite margin is treated as zero.
    #[must_use]
    pub fn keep_rect(&self) -> Rect {
        let m = if self.margin.is_finite() {
            self.margin.max(0.0)
        } else {
            0.0
        };
        Rect::new(-m, -m, self.view_size.width + m, self.view_size.height + m)
    }

    /// Returns `true` if a screen-space box lies entirely outside the keep
    /// rectangle. Boxes touching its edge are kept.
    #[must_use]
    pub fn is_culled(&self, bounds: Rect) -> bool {
        let keep = self.keep_rect();
        // Written so that NaN bounds are culled too.
        !(bounds.x1 >= keep.x0
            && bounds.x0 <= keep.x1
            && bounds.y1 >= keep.y0
            && bounds.y0 <= keep.y1)
    }

    /// Detail to draw at `scale`.
    #[must_use]
    pub fn detail_level(&self, scale: f64) -> DetailLevel {
        self.detail.level(scale)
    }
}

/// Scales above which labels and ratings are drawn.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DetailThresholds {
    /// Names are drawn when the scale is strictly above this.
    pub label_scale: f64,
    /// Ratings are drawn when the scale is strictly above this.
    pub rating_scale: f64,
}

impl Default for DetailThresholds {
    fn default() -> Self {
        Self {
            label_scale: 0.5,
            rating_scale: 0.8,
        }
    }
}

impl DetailThresholds {
    /// Detail to draw at `scale`.
    #[must_use]
    pub fn level(&self, scale: f64) -> DetailLevel {
        DetailLevel {
            label: scale > self.label_scale,
            rating: scale > self.rating_scale,
        }
    }
}

/// Which optional decorations an entity gets at the current zoom.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DetailLevel {
    /// Draw the entity's name.
    pub label: bool,
    /// Draw the entity's rating.
    pub rating: bool,
}
