// Copyright 2025 the Orrery Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Intents produced by the reconciler for the host to apply.

use kurbo::{Point, Vec2};
use smallvec::SmallVec;

/// One requested change to the view or to the interaction state.
///
/// Positions are in screen pixels. The host resolves them against the current
/// viewport and entity collection when it applies the intent.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Intent {
    /// Translate the viewport offset by a screen-space delta.
    Pan(Vec2),
    /// Zoom by `factor` keeping the world point under `anchor` fixed.
    ZoomAt {
        /// Screen-space anchor.
        anchor: Point,
        /// Multiplicative scale change.
        factor: f64,
    },
    /// A tap: select whatever is under the point, or clear on background.
    Select(Point),
    /// The pointer hovers at the point.
    Hover(Point),
    /// The pointer left the canvas; nothing is hovered.
    ClearHover,
    /// A touch press was held still at the point.
    LongPress(Point),
}

/// Intents from one event, in application order.
pub type Intents = SmallVec<[Intent; 2]>;
