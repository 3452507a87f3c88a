// Copyright 2025 the Orrery Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Long-press recognizer driven by caller-supplied timestamps.
//!
//! The recognizer owns no clock. Feed it the press, any motion, and poll it
//! with the current time; it fires at most once per press.
//!
//! ```
//! use kurbo::Point;
//! use orrery_event_state::long_press::LongPressState;
//!
//! let mut lp = LongPressState::new(500, 8.0);
//! lp.press(Point::new(40.0, 40.0), 1_000);
//!
//! assert_eq!(lp.poll(1_499), None);
//! assert_eq!(lp.poll(1_500), Some(Point::new(40.0, 40.0)));
//! // Fires only once.
//! assert_eq!(lp.poll(2_000), None);
//! // The release is consumed by the long press.
//! assert!(lp.release());
//! ```

use kurbo::Point;

/// Tracks a potential long press.
#[derive(Clone, Copy, Debug)]
pub struct LongPressState {
    pressed: Option<(Point, u64)>,
    fired: bool,
    delay_ms: u64,
    slop: f64,
}

impl LongPressState {
    /// Creates a recognizer firing after `delay_ms` of holding still within
    /// `slop` pixels of the press position.
    #[must_use]
    pub fn new(delay_ms: u64, slop: f64) -> Self {
        Self {
            pressed: None,
            fired: false,
            delay_ms,
            slop: slop.max(0.0),
        }
    }

    /// Delay before a held press fires.
    #[must_use]
    pub fn delay_ms(&self) -> u64 {
        self.delay_ms
    }

    /// Arms the recognizer.
    pub fn press(&mut self, pos: Point, time_ms: u64) {
        self.pressed = Some((pos, time_ms));
        self.fired = false;
    }

    /// Disarms the recognizer if the pointer wandered beyond the slop.
    pub fn motion(&mut self, pos: Point) {
        if let Some((origin, _)) = self.pressed
            && !self.fired
            && (pos - origin).hypot() > self.slop
        {
            self.pressed = None;
        }
    }

    /// Returns the press position if the hold just reached the delay.
    pub fn poll(&mut self, now_ms: u64) -> Option<Point> {
        let (origin, since) = self.pressed?;
        if self.fired || now_ms.saturating_sub(since) < self.delay_ms {
            return None;
        }
        self.fired = true;
        Some(origin)
    }

    /// Ends the press. Returns `true` if it had already fired, meaning the
    /// release belongs to the long press and should not be treated as a tap.
    pub fn release(&mut self) -> bool {
        let fired = self.pressed.is_some() && self.fired;
        self.cancel();
        fired
    }

    /// Disarms the recognizer.
    pub fn cancel(&mut self) {
        self.pressed = None;
        self.fired = false;
    }

    /// Returns `true` while armed and not yet fired.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pressed.is_some() && !self.fired
    }
}
