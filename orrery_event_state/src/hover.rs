// Copyright 2025 the Orrery Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Hover state helper: track the single hovered target and report enter/leave
//! transitions.
//!
//! On a flat canvas at most one entity is hovered at a time, so the state is a
//! single optional key. Each update yields at most two events: a `Leave` for
//! the previous target followed by an `Enter` for the new one.
//!
//! ```
//! use orrery_event_state::hover::{HoverEvent, HoverState};
//!
//! let mut hover = HoverState::new();
//!
//! assert_eq!(hover.update(Some("mars")).as_slice(), &[HoverEvent::Enter("mars")]);
//! // Staying on the same target is silent.
//! assert!(hover.update(Some("mars")).is_empty());
//! assert_eq!(
//!     hover.update(Some("io")).as_slice(),
//!     &[HoverEvent::Leave("mars"), HoverEvent::Enter("io")]
//! );
//! assert_eq!(hover.clear().as_slice(), &[HoverEvent::Leave("io")]);
//! ```

use smallvec::SmallVec;

/// A hover transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HoverEvent<K> {
    /// The pointer entered this target.
    Enter(K),
    /// The pointer left this target.
    Leave(K),
}

/// Events produced by one hover update; never more than two.
pub type HoverEvents<K> = SmallVec<[HoverEvent<K>; 2]>;

/// Tracks which target, if any, is under the pointer.
#[derive(Clone, Debug)]
pub struct HoverState<K> {
    current: Option<K>,
}

impl<K> HoverState<K> {
    /// Creates a state with nothing hovered.
    #[must_use]
    pub const fn new() -> Self {
        Self { current: None }
    }

    /// The hovered target, if any.
    #[must_use]
    pub fn current(&self) -> Option<&K> {
        self.current.as_ref()
    }
}

impl<K: Clone + PartialEq> HoverState<K> {
    /// Replaces the hovered target and returns the resulting transitions.
    pub fn update(&mut self, target: Option<K>) -> HoverEvents<K> {
        let mut events = HoverEvents::new();
        if self.current == target {
            return events;
        }
        if let Some(old) = self.current.take() {
            events.push(HoverEvent::Leave(old));
        }
        if let Some(new) = &target {
            events.push(HoverEvent::Enter(new.clone()));
        }
        self.current = target;
        events
    }

    /// Clears the hovered target, e.g. when the pointer leaves the canvas.
    pub fn clear(&mut self) -> HoverEvents<K> {
        self.update(None)
    }

    /// Clears the hover if it is on `key`, e.g. when that entity is removed.
    pub fn forget(&mut self, key: &K) -> HoverEvents<K> {
        if self.current.as_ref() == Some(key) {
            self.clear()
        } else {
            HoverEvents::new()
        }
    }
}

impl<K> Default for HoverState<K> {
    fn default() -> Self {
        Self::new()
    }
}
