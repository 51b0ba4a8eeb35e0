// Copyright 2025 the Waypoint Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Waypoint Focus: a single focus cursor driven by directional input.
//!
//! [`FocusController`] owns:
//! - a [`Registry`] of [`FocusElement`]s supplied by the host (id, bounds, focusability,
//!   and an [`ElementKind`]),
//! - the [`AdjacencyTable`](waypoint_adjacency::AdjacencyTable) computed from them by
//!   [`FocusController::rebuild`],
//! - the focused element and, when that element is a list, its row cursor.
//!
//! Moves follow the table. Lists are one element from the outside, but once focused the
//! up/down moves step through their rows (rolling across sections), and only the first
//! or last row, or a sideways move, leaves the list. Entering a list from below lands on
//! its last row; any other direction lands on the first row.
//!
//! Side effects (highlighting, row selection, scrolling, simulated taps) are emitted to a
//! host-provided [`FocusSink`]. The controller never fails on navigation: missing focus,
//! edges, or stale targets turn into no-ops.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::Rect;
//! use waypoint_adjacency::Direction;
//! use waypoint_focus::{
//!     ElementKind, FocusController, FocusElement, FocusEvent, FocusState, IndexPath, ListShape,
//! };
//!
//! let mut controller = FocusController::new();
//! controller
//!     .register(FocusElement::new("search", Rect::new(0.0, 0.0, 200.0, 30.0)))
//!     .unwrap();
//! controller
//!     .register(
//!         FocusElement::new("results", Rect::new(0.0, 50.0, 200.0, 400.0))
//!             .with_kind(ElementKind::List(ListShape::single_section(10))),
//!     )
//!     .unwrap();
//!
//! let mut effects: Vec<FocusEvent<&str>> = Vec::new();
//! controller.rebuild(&mut effects);
//! controller.set_initial_focus(&mut effects);
//! assert_eq!(controller.state(), FocusState::Focused("search"));
//!
//! // Moving down enters the list on its first row.
//! controller.move_focus(Direction::Down, &mut effects);
//! assert_eq!(
//!     controller.state(),
//!     FocusState::InContainer { container: "results", cell: IndexPath::new(0, 0) }
//! );
//!
//! // The next move steps inside the list.
//! controller.move_focus(Direction::Down, &mut effects);
//! assert_eq!(controller.sub_cursor(&"results"), Some(IndexPath::new(1, 0)));
//! ```
//!
//! ## Features
//!
//! - `std` (default): enables `std` support for `kurbo`.
//! - `libm`: enables `no_std` + `alloc` builds that rely on `libm` for floating-point math.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod controller;
mod element;
mod registry;
mod sink;

pub use controller::{FocusController, FocusState};
pub use element::{Activation, ElementKind, FocusElement, IndexPath, ListShape};
pub use registry::{Registry, RegistryError};
pub use sink::{FocusEvent, FocusSink};
