// Copyright 2025 the Orrery Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Orrery Universe: a pannable, zoomable canvas of planets.
//!
//! [`Universe`] ties the Orrery building blocks together into one host:
//!
//! - an [`orrery_view2d::ViewportController`] that is the only writer of the
//!   viewport;
//! - an [`orrery_input::Reconciler`] that turns raw input into pan, zoom,
//!   select and hover intents;
//! - a planet collection in draw order, hit-tested with [`orrery_hit`];
//! - an [`orrery_selection::Selection`] and a hover tracker, both kept
//!   consistent when planets are removed;
//! - per-frame output via [`Universe::tick`], built with
//!   [`orrery_projection`].
//!
//! The host calls [`Universe::handle`] for each input event,
//! [`Universe::advance`] with the current time so long presses can fire, and
//! [`Universe::tick`] once per display refresh. `tick` only reads.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Size};
//! use orrery_input::{InputEvent, PointerEvent};
//! use orrery_universe::{PlanetData, Universe, UniverseEvent};
//!
//! let mut universe = Universe::new(Size::new(800.0, 600.0));
//! let earth = universe
//!     .add_planet(PlanetData::new("Earth", Point::new(50.0, 50.0), 10.0))
//!     .unwrap();
//!
//! universe.handle(InputEvent::PointerDown(PointerEvent::new(1, Point::new(50.0, 50.0), 0)));
//! let events = universe.handle(InputEvent::PointerUp(PointerEvent::new(1, Point::new(50.0, 50.0), 90)));
//! assert!(events.contains(&UniverseEvent::SelectionChanged(Some(earth))));
//!
//! let frame = universe.tick(16);
//! assert_eq!(frame.sprites.len(), 1);
//! assert!(frame.sprites[0].selected);
//! assert_eq!(frame.status.selected_name.as_deref(), Some("Earth"));
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod config;
mod frame;
mod planet;
mod universe;

pub use config::{ConfigError, UniverseConfig};
pub use frame::{Frame, Sprite, Status};
pub use planet::{PALETTE, Planet, PlanetData, PlanetError, PlanetId, palette_index};
pub use universe::{Universe, UniverseEvent, UniverseEvents};
