// Copyright 2025 the Orrery Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The input reconciler state machine.

use kurbo::{Point, Vec2};
use log::{debug, trace, warn};
use orrery_event_state::drag::{DragPhase, DragRelease, DragState};
use orrery_event_state::long_press::LongPressState;
use smallvec::smallvec;

use crate::{DeviceCaps, InputEvent, Intent, Intents, PointerEvent, PointerId, Tunables};

/// Turns raw input into an ordered stream of [`Intent`]s.
///
/// One pointer owns the press session from down to up; events from other
/// pointers are ignored until it ends. A press that never travels further than
/// the drag threshold is a tap and yields [`Intent::Select`] on release. Once
/// the threshold is crossed every move yields [`Intent::Pan`]. The release
/// position counts as a final move, so a release beyond the threshold is a
/// drag even if the moves in between were dropped.
///
/// The reconciler never touches the viewport itself. Apply the intents in the
/// order they are returned.
#[derive(Clone, Debug)]
pub struct Reconciler {
    tunables: Tunables,
    caps: DeviceCaps,
    drag: DragState,
    long_press: LongPressState,
    owner: Option<PointerId>,
    pinched: bool,
}

impl Default for Reconciler {
    fn default() -> Self {
        Self::new(Tunables::default(), DeviceCaps::default())
    }
}

impl Reconciler {
    /// Creates an idle reconciler.
    #[must_use]
    pub fn new(tunables: Tunables, caps: DeviceCaps) -> Self {
        Self {
            drag: DragState::new(tunables.drag_threshold_px),
            long_press: LongPressState::new(tunables.long_press_ms, tunables.drag_threshold_px),
            tunables,
            caps,
            owner: None,
            pinched: false,
        }
    }

    /// Current tunables.
    #[must_use]
    pub fn tunables(&self) -> &Tunables {
        &self.tunables
    }

    /// Replaces the tunables, abandoning any press session in progress.
    pub fn set_tunables(&mut self, tunables: Tunables) {
        *self = Self::new(tunables, self.caps);
    }

    /// Current device capabilities.
    #[must_use]
    pub fn device_caps(&self) -> DeviceCaps {
        self.caps
    }

    /// Switches device capabilities, abandoning any press session in progress.
    pub fn set_device_caps(&mut self, caps: DeviceCaps) {
        if caps != self.caps {
            debug!("device caps changed: has_touch = {}", caps.has_touch);
            self.caps = caps;
            self.end_session();
        }
    }

    /// Phase of the current press session.
    #[must_use]
    pub fn phase(&self) -> DragPhase {
        self.drag.phase()
    }

    /// Returns `true` while the owning pointer is dragging the view.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.drag.is_dragging()
    }

    /// The pointer that owns the current press session.
    #[must_use]
    pub fn active_pointer(&self) -> Option<PointerId> {
        self.owner
    }

    /// Abandons any press session without producing intents.
    pub fn reset(&mut self) {
        self.end_session();
    }

    /// Feeds one event and returns the intents it produces.
    ///
    /// Events with non-finite coordinates are dropped.
    pub fn handle(&mut self, event: InputEvent) -> Intents {
        if !event.is_finite() {
            warn!("dropping input event with non-finite values: {event:?}");
            return Intents::new();
        }
        let intents = match event {
            InputEvent::PointerDown(p) => self.pointer_down(p),
            InputEvent::PointerMove(p) => self.pointer_move(p),
            InputEvent::PointerUp(p) => self.pointer_up(p),
            InputEvent::PointerLeave(p) => self.pointer_leave(p),
            InputEvent::PointerCancel(p) => {
                if self.owns(p.pointer_id) {
                    debug!("pointer {} cancelled", p.pointer_id);
                    self.end_session();
                }
                Intents::new()
            }
            InputEvent::Wheel { position, delta_y } => self.wheel(position, delta_y),
            InputEvent::Pinch {
                center,
                scale_ratio,
            } => self.pinch(center, scale_ratio),
        };
        for intent in &intents {
            trace!("intent {intent:?}");
        }
        intents
    }

    /// Advances the clock, firing a long press if a touch has been held still
    /// long enough.
    ///
    /// After a long press fires, the release of that touch does not select.
    pub fn advance(&mut self, now_ms: u64) -> Option<Intent> {
        if !self.caps.has_touch || self.pinched || self.drag.is_dragging() {
            return None;
        }
        let origin = self.long_press.poll(now_ms)?;
        debug!("long press at {origin:?}");
        Some(Intent::LongPress(origin))
    }

    fn owns(&self, pointer_id: PointerId) -> bool {
        self.owner == Some(pointer_id)
    }

    fn end_session(&mut self) {
        self.owner = None;
        self.pinched = false;
        self.drag.cancel();
        self.long_press.cancel();
    }

    fn pointer_down(&mut self, p: PointerEvent) -> Intents {
        if let Some(owner) = self.owner
            && owner != p.pointer_id
        {
            trace!("ignoring pointer {} while {owner} is down", p.pointer_id);
            return Intents::new();
        }
        self.owner = Some(p.pointer_id);
        self.pinched = false;
        self.drag.press(p.position, p.time_ms);
        if self.caps.has_touch {
            self.long_press.press(p.position, p.time_ms);
        }
        Intents::new()
    }

    fn pointer_move(&mut self, p: PointerEvent) -> Intents {
        let mut intents = Intents::new();
        match self.owner {
            Some(owner) if owner != p.pointer_id => return intents,
            Some(_) if !self.pinched => {
                self.long_press.motion(p.position);
                if let Some(step) = self.drag.update(p.position, p.time_ms) {
                    if step.started {
                        debug!("drag started from {:?}", self.drag.start_pos());
                    }
                    intents.push(Intent::Pan(step.delta * self.pan_factor(step.velocity)));
                }
            }
            _ => {}
        }
        if !self.caps.has_touch && !self.drag.is_dragging() {
            intents.push(Intent::Hover(p.position));
        }
        intents
    }

    fn pointer_up(&mut self, p: PointerEvent) -> Intents {
        if !self.owns(p.pointer_id) {
            return Intents::new();
        }
        let mut intents = Intents::new();
        if !self.pinched
            && let Some(step) = self.drag.update(p.position, p.time_ms)
            && step.delta != Vec2::ZERO
        {
            intents.push(Intent::Pan(step.delta * self.pan_factor(step.velocity)));
        }
        let held = self.long_press.release();
        let pinched = self.pinched;
        let outcome = self.drag.release();
        self.end_session();
        match outcome {
            Some(DragRelease::Tap { .. }) if !held && !pinched => {
                intents.push(Intent::Select(p.position));
            }
            Some(DragRelease::Drag) => debug!("drag ended at {:?}", p.position),
            _ => {}
        }
        intents
    }

    fn pointer_leave(&mut self, p: PointerEvent) -> Intents {
        if self.owns(p.pointer_id) {
            debug!("pointer {} left the canvas mid-press", p.pointer_id);
            self.end_session();
        }
        if self.caps.has_touch {
            Intents::new()
        } else {
            smallvec![Intent::ClearHover]
        }
    }

    fn wheel(&mut self, position: Point, delta_y: f64) -> Intents {
        if self.caps.has_touch || self.drag.is_dragging() || delta_y == 0.0 {
            return Intents::new();
        }
        let step = self.tunables.wheel_zoom_step;
        let factor = if delta_y > 0.0 { 1.0 / step } else { step };
        smallvec![Intent::ZoomAt {
            anchor: position,
            factor,
        }]
    }

    fn pinch(&mut self, center: Point, scale_ratio: f64) -> Intents {
        if scale_ratio <= 0.0 {
            warn!("ignoring pinch with non-positive ratio {scale_ratio}");
            return Intents::new();
        }
        if self.owner.is_some() && !self.pinched {
            debug!("pinch took over the press session");
            self.pinched = true;
            self.long_press.cancel();
        }
        if scale_ratio == 1.0 {
            return Intents::new();
        }
        smallvec![Intent::ZoomAt {
            anchor: center,
            factor: scale_ratio,
        }]
    }

    fn pan_factor(&self, velocity: f64) -> f64 {
        if self.caps.has_touch {
            let damping = self
                .tunables
                .fling_damping
                .map_or(1.0, |fling| fling.factor(velocity));
            self.tunables.touch_sensitivity * damping
        } else {
            self.tunables.sensitivity
        }
    }
}
