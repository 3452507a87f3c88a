// Copyright 2025 the Orrery Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Orrery Selection: single-item selection bookkeeping.
//!
//! A canvas of planets selects at most one entity at a time. [`Selection`]
//! tracks that optional key plus a monotonically increasing **revision**
//! counter that bumps whenever the selection changes, so renderers and panels
//! can cheaply tell whether they need to refresh.
//!
//! The container does not know how keys map to entities or how input is
//! interpreted; callers decide when a pointer gesture selects or clears.
//!
//! ## Minimal example
//!
//! ```rust
//! use orrery_selection::Selection;
//!
//! let mut selection = Selection::new();
//!
//! // Tap on a planet.
//! selection.select("planet_1");
//! assert_eq!(selection.selected(), Some(&"planet_1"));
//!
//! // Tap on empty space.
//! selection.clear();
//! assert!(selection.is_empty());
//! assert_eq!(selection.revision(), 2);
//! ```
//!
//! ## Keeping selection valid
//!
//! When the entity collection changes, call [`Selection::retain`] with a
//! membership test (or [`Selection::remove`] for a single removal) so that a
//! removed entity never stays selected.
//!
//! This crate is `no_std`.

#![no_std]

/// At most one selected key plus a change revision.
#[derive(Clone, Debug, Default)]
pub struct Selection<T> {
    selected: Option<T>,
    revision: u64,
}

impl<T> Selection<T> {
    /// Creates an empty selection.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            selected: None,
            revision: 0,
        }
    }

    /// Returns `true` if nothing is selected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.selected.is_none()
    }

    /// Returns the selected key, if any.
    #[must_use]
    pub fn selected(&self) -> Option<&T> {
        self.selected.as_ref()
    }

    /// Returns the current revision counter.
    ///
    /// The revision is local to this `Selection` and bumps once per observable
    /// change. Operations that leave the selection as it was do not bump it.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Clears the selection.
    pub fn clear(&mut self) {
        if self.selected.take().is_some() {
            self.bump_revision();
        }
    }

    /// Drops the selection if `keep` rejects the selected key.
    pub fn retain(&mut self, keep: impl FnOnce(&T) -> bool) {
        if self.selected.as_ref().is_some_and(|key| !keep(key)) {
            self.clear();
        }
    }

    fn bump_revision(&mut self) {
        self.revision = self.revision.wrapping_add(1);
    }
}

impl<T: PartialEq> Selection<T> {
    /// Returns `true` if `key` is the selected key.
    #[must_use]
    pub fn contains(&self, key: &T) -> bool {
        self.selected.as_ref() == Some(key)
    }

    /// Selects `key`, replacing any previous selection.
    pub fn select(&mut self, key: T) {
        if self.contains(&key) {
            return;
        }
        self.selected = Some(key);
        self.bump_revision();
    }

    /// Applies the outcome of a pointer tap: select the hit key, or clear on a
    /// background tap.
    pub fn set(&mut self, key: Option<T>) {
        match key {
            Some(key) => self.select(key),
            None => self.clear(),
        }
    }

    /// Clears the selection if `key` is the selected key.
    pub fn remove(&mut self, key: &T) {
        if self.contains(key) {
            self.clear();
        }
    }
}
