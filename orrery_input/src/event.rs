// Copyright 2025 the Orrery Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Raw input events in screen coordinates.

use kurbo::Point;

/// Identifies one pointer (a mouse, a pen, or a single finger).
pub type PointerId = u64;

/// Shared payload of the pointer events.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerEvent {
    /// Which pointer produced the event.
    pub pointer_id: PointerId,
    /// Position in screen pixels relative to the canvas origin.
    pub position: Point,
    /// Event timestamp in milliseconds, from any monotonic clock.
    pub time_ms: u64,
}

impl PointerEvent {
    /// Creates a pointer payload.
    #[must_use]
    pub const fn new(pointer_id: PointerId, position: Point, time_ms: u64) -> Self {
        Self {
            pointer_id,
            position,
            time_ms,
        }
    }
}

/// One raw input event delivered to the canvas.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum InputEvent {
    /// A pointer went down.
    PointerDown(PointerEvent),
    /// A pointer moved, pressed or not.
    PointerMove(PointerEvent),
    /// A pointer went up.
    PointerUp(PointerEvent),
    /// A pointer left the canvas.
    PointerLeave(PointerEvent),
    /// The platform abandoned a pointer (for example, a touch was stolen by a
    /// system gesture).
    PointerCancel(PointerEvent),
    /// A wheel step. Positive `delta_y` scrolls down, which zooms out.
    Wheel {
        /// Pointer position when the wheel turned.
        position: Point,
        /// Vertical wheel delta; only its sign matters.
        delta_y: f64,
    },
    /// A two-finger pinch update.
    Pinch {
        /// Midpoint of the two fingers.
        center: Point,
        /// Scale change since the previous pinch update.
        scale_ratio: f64,
    },
}

impl InputEvent {
    /// The pointer payload, for the pointer variants.
    #[must_use]
    pub fn pointer(&self) -> Option<&PointerEvent> {
        match self {
            Self::PointerDown(p)
            | Self::PointerMove(p)
            | Self::PointerUp(p)
            | Self::PointerLeave(p)
            | Self::PointerCancel(p) => Some(p),
            Self::Wheel { .. } | Self::Pinch { .. } => None,
        }
    }

    /// Returns `true` if every coordinate and scalar in the event is finite.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        match self {
            Self::Wheel { position, delta_y } => position.is_finite() && delta_y.is_finite(),
            Self::Pinch {
                center,
                scale_ratio,
            } => center.is_finite() && scale_ratio.is_finite(),
            _ => self.pointer().is_some_and(|p| p.position.is_finite()),
        }
    }
}

/// What the host device can do.
///
/// Touch-capable devices deliver synthetic mouse and wheel events alongside
/// their touch stream, so the reconciler drops the desktop-only paths when
/// `has_touch` is set.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DeviceCaps {
    /// The device has a touch screen.
    pub has_touch: bool,
}

impl DeviceCaps {
    /// Mouse and wheel only.
    pub const DESKTOP: Self = Self { has_touch: false };
    /// Touch screen.
    pub const TOUCH: Self = Self { has_touch: true };
}
