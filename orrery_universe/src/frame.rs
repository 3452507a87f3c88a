// Copyright 2025 the Orrery Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;
use alloc::vec::Vec;

use kurbo::Vec2;
use orrery_projection::{DetailLevel, GridLines, Projected};
use orrery_view2d::Viewport;

use crate::PlanetId;

/// Everything needed to draw one frame.
#[derive(Clone, Debug, PartialEq)]
pub struct Frame {
    /// Timestamp passed to [`Universe::tick`](crate::Universe::tick).
    pub timestamp_ms: u64,
    /// Viewport the frame was projected with.
    pub viewport: Viewport,
    /// Decorations to draw on every planet.
    pub detail: DetailLevel,
    /// Visible planets in draw order.
    pub sprites: Vec<Sprite>,
    /// Debug grid, empty when hidden.
    pub grid: GridLines,
    /// Status panel contents.
    pub status: Status,
}

/// One visible planet.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sprite {
    /// Which planet.
    pub id: PlanetId,
    /// Screen geometry.
    pub projected: Projected,
    /// The planet is selected.
    pub selected: bool,
    /// The pointer is over the planet.
    pub hovered: bool,
}

/// Summary of the universe for a status panel.
#[derive(Clone, Debug, PartialEq)]
pub struct Status {
    /// Current scale.
    pub scale: f64,
    /// Current offset in pixels.
    pub offset: Vec2,
    /// Number of planets, visible or not.
    pub planet_count: usize,
    /// Name of the selected planet.
    pub selected_name: Option<String>,
}
