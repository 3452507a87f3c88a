// Copyright 2025 the Orrery Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! World-aligned debug grid.
//!
//! Lines sit at integer multiples of [`GridSpec::spacing`] in world space and
//! are reported as screen coordinates, so they move with pans and zooms.

use alloc::vec::Vec;

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _; // for `floor`
use kurbo::{Line, Point, Size};
use orrery_view2d::Viewport;

/// Upper bound on lines per axis; past it the grid is treated as hidden.
const MAX_LINES_PER_AXIS: usize = 4096;

/// Debug grid configuration.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct GridSpec {
    /// World units between adjacent lines.
    pub spacing: f64,
    /// The grid is hidden below this scale.
    pub min_scale: f64,
}

impl Default for GridSpec {
    fn default() -> Self {
        Self {
            spacing: 100.0,
            min_scale: 0.3,
        }
    }
}

impl GridSpec {
    /// Returns `true` if the grid is drawn at `scale`.
    #[must_use]
    pub fn is_visible_at(&self, scale: f64) -> bool {
        self.spacing.is_finite() && self.spacing > 0.0 && scale >= self.min_scale
    }

    /// Screen positions of the grid lines covering a view of `view_size`.
    ///
    /// Returns empty lines when the grid is hidden at the viewport's scale.
    #[must_use]
    pub fn lines(&self, viewport: &Viewport, view_size: Size) -> GridLines {
        if !self.is_visible_at(viewport.scale) || !viewport.is_finite() {
            return GridLines::default();
        }
        let step = self.spacing * viewport.scale;
        let (Some(vertical), Some(horizontal)) = (
            axis_lines(viewport.offset.x, step, view_size.width),
            axis_lines(viewport.offset.y, step, view_size.height),
        ) else {
            log::debug!("grid too dense at scale {}, hiding it", viewport.scale);
            return GridLines::default();
        };
        GridLines {
            vertical,
            horizontal,
        }
    }
}

/// Screen positions along one axis, from the first line at or before the
/// view start to the first line at or past its end.
#[allow(
    clippy::cast_possible_truncation,
    reason = "count is a small non-negative integer checked against the cap"
)]
fn axis_lines(offset: f64, step: f64, extent: f64) -> Option<Vec<f64>> {
    if !(extent.is_finite() && extent >= 0.0) {
        return Some(Vec::new());
    }
    // Index of the first world line left of (or on) screen position 0.
    let first = (-offset / step).floor();
    let count = (extent / step).floor() + 2.0;
    if !(count.is_finite() && count <= MAX_LINES_PER_AXIS as f64) {
        return None;
    }
    Some(
        (0..count as usize)
            .map(|i| (first + i as f64) * step + offset)
            .collect(),
    )
}

/// Grid lines in screen coordinates.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GridLines {
    /// X positions of vertical lines, ascending.
    pub vertical: Vec<f64>,
    /// Y positions of horizontal lines, ascending.
    pub horizontal: Vec<f64>,
}

impl GridLines {
    /// Returns `true` if there is nothing to draw.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vertical.is_empty() && self.horizontal.is_empty()
    }

    /// Line segments spanning a view of `view_size`, vertical lines first.
    pub fn segments(&self, view_size: Size) -> impl Iterator<Item = Line> + '_ {
        let vertical = self
            .vertical
            .iter()
            .map(move |&x| Line::new(Point::new(x, 0.0), Point::new(x, view_size.height)));
        let horizontal = self
            .horizontal
            .iter()
            .map(move |&y| Line::new(Point::new(0.0, y), Point::new(view_size.width, y)));
        vertical.chain(horizontal)
    }
}
