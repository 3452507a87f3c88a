// Copyright 2025 the Orrery Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Orrery Event State: small pointer-gesture state machines for canvas UIs.
//!
//! Each module handles one interaction pattern that needs state carried
//! across several events:
//!
//! - [`drag`]: tell a tap from a drag with a distance threshold, and report
//!   incremental movement (plus speed) once dragging.
//! - [`hover`]: track the single hovered target and report enter/leave
//!   transitions.
//! - [`long_press`]: recognize a press held still for a delay.
//!
//! The managers accept raw positions, timestamps and pre-resolved targets;
//! they know nothing about viewports, hit testing or the event source. The
//! reconciler in `orrery_input` composes them.
//!
//! ## Drag vs. tap
//!
//! ```rust
//! use kurbo::Point;
//! use orrery_event_state::drag::{DragRelease, DragState};
//!
//! let mut drag = DragState::new(8.0);
//! drag.press(Point::new(50.0, 50.0), 0);
//! assert!(drag.update(Point::new(52.0, 51.0), 10).is_none());
//! assert_eq!(
//!     drag.release(),
//!     Some(DragRelease::Tap { start_pos: Point::new(50.0, 50.0) })
//! );
//! ```
//!
//! This crate is `no_std`.

#![no_std]

pub mod drag;
pub mod hover;
pub mod long_press;
