// Copyright 2025 the Orrery Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drag state helper: tell taps from drags and compute incremental movement.
//!
//! ## Usage
//!
//! 1) On pointer down, call [`DragState::press`] with the position and time.
//! 2) On each move, call [`DragState::update`]. Nothing is reported until the
//!    pointer has travelled further than the threshold from the press origin;
//!    after that every move yields the delta since the previous report.
//! 3) Optionally call [`DragState::total_offset`] to get the offset from the
//!    press origin.
//! 4) On pointer up, call [`DragState::release`] to learn whether the session
//!    was a tap or a drag. Use [`DragState::cancel`] for leave/cancel.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::{Point, Vec2};
//! use orrery_event_state::drag::{DragRelease, DragState};
//!
//! let mut drag = DragState::new(8.0);
//!
//! drag.press(Point::new(10.0, 20.0), 0);
//! assert!(drag.is_pressed());
//!
//! // 3 px of jitter stays below the threshold.
//! assert!(drag.update(Point::new(13.0, 20.0), 16).is_none());
//!
//! // Crossing the threshold reports everything since the press origin.
//! let step = drag.update(Point::new(25.0, 20.0), 32).unwrap();
//! assert!(step.started);
//! assert_eq!(step.delta, Vec2::new(15.0, 0.0));
//!
//! // Later moves are incremental.
//! let step = drag.update(Point::new(27.0, 21.0), 48).unwrap();
//! assert_eq!(step.delta, Vec2::new(2.0, 1.0));
//!
//! assert_eq!(drag.release(), Some(DragRelease::Drag));
//! ```

use kurbo::{Point, Vec2};

/// Where a pointer session is in its lifecycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum DragPhase {
    /// No pointer is down.
    #[default]
    Idle,
    /// A pointer is down but has not moved past the threshold.
    Pressed,
    /// The pointer moved past the threshold; moves are reported as drags.
    Dragging,
}

/// One reported drag movement.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragStep {
    /// Movement since the previous report (or since the press origin for the
    /// first report).
    pub delta: Vec2,
    /// `true` for the move that crossed the threshold.
    pub started: bool,
    /// Pointer speed in pixels per millisecond, measured between the last two
    /// samples. Zero when the samples share a timestamp.
    pub velocity: f64,
}

/// How a pointer session ended.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DragRelease {
    /// The pointer never crossed the threshold.
    Tap {
        /// Where the pointer went down.
        start_pos: Point,
    },
    /// The pointer crossed the threshold at some point.
    Drag,
}

/// Tracks one pointer session from press to release.
#[derive(Debug, Clone, Copy)]
pub struct DragState {
    /// Start position of the pointer session.
    start_pos: Option<Point>,
    /// Position of the last reported drag step.
    last_pos: Option<Point>,
    /// Most recent raw sample, used for velocity.
    last_sample: Option<(Point, u64)>,
    dragging: bool,
    threshold: f64,
}

impl DragState {
    /// Creates an idle drag state with the given threshold in pixels.
    ///
    /// A negative or non-finite threshold is treated as `0.0`.
    #[must_use]
    pub fn new(threshold: f64) -> Self {
        Self {
            start_pos: None,
            last_pos: None,
            last_sample: None,
            dragging: false,
            threshold: if threshold.is_finite() {
                threshold.max(0.0)
            } else {
                0.0
            },
        }
    }

    /// Returns the drag threshold in pixels.
    #[must_use]
    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Start tracking a new pointer session at `pos`.
    ///
    /// Any session in progress is discarded.
    pub fn press(&mut self, pos: Point, time_ms: u64) {
        self.start_pos = Some(pos);
        self.last_pos = Some(pos);
        self.last_sample = Some((pos, time_ms));
        self.dragging = false;
    }

    /// Feed a pointer move, returning a drag step once past the threshold.
    ///
    /// Returns `None` while idle and while the pointer is still within the
    /// threshold of the press origin.
    pub fn update(&mut self, pos: Point, time_ms: u64) -> Option<DragStep> {
        let start_pos = self.start_pos?;
        let velocity = match self.last_sample {
            Some((prev, prev_time)) if time_ms > prev_time => {
                (pos - prev).hypot() / (time_ms - prev_time) as f64
            }
            _ => 0.0,
        };
        self.last_sample = Some((pos, time_ms));

        let started = if self.dragging {
            false
        } else if (pos - start_pos).hypot() > self.threshold {
            self.dragging = true;
            true
        } else {
            return None;
        };

        let last_pos = self.last_pos.unwrap_or(start_pos);
        self.last_pos = Some(pos);
        Some(DragStep {
            delta: pos - last_pos,
            started,
            velocity,
        })
    }

    /// Get total offset from the press origin.
    #[must_use]
    pub fn total_offset(&self, current_pos: Point) -> Option<Vec2> {
        self.start_pos.map(|start_pos| current_pos - start_pos)
    }

    /// End the session normally (pointer up) and report how it ended.
    ///
    /// Returns `None` if no session was active.
    pub fn release(&mut self) -> Option<DragRelease> {
        let start_pos = self.start_pos?;
        let outcome = if self.dragging {
            DragRelease::Drag
        } else {
            DragRelease::Tap { start_pos }
        };
        self.cancel();
        Some(outcome)
    }

    /// Abandon the session without an outcome (pointer leave or cancel).
    pub fn cancel(&mut self) {
        self.start_pos = None;
        self.last_pos = None;
        self.last_sample = None;
        self.dragging = false;
    }

    /// Current phase of the session.
    #[must_use]
    pub fn phase(&self) -> DragPhase {
        match (self.start_pos, self.dragging) {
            (None, _) => DragPhase::Idle,
            (Some(_), false) => DragPhase::Pressed,
            (Some(_), true) => DragPhase::Dragging,
        }
    }

    /// Returns `true` while a pointer session is active.
    #[must_use]
    pub fn is_pressed(&self) -> bool {
        self.start_pos.is_some()
    }

    /// Returns `true` once the active session crossed the threshold.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Start position of the active session.
    #[must_use]
    pub fn start_pos(&self) -> Option<Point> {
        self.start_pos
    }
}

impl Default for DragState {
    fn default() -> Self {
        Self::new(0.0)
    }
}
