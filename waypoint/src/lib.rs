// Copyright 2025 the Waypoint Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Waypoint: D-pad and analog-stick focus navigation.
//!
//! Waypoint lets an application move a single focus cursor between arbitrary on-screen
//! elements with directional input. It is split into three layers, re-exported here:
//!
//! - [`adjacency`] (`waypoint_adjacency`): computes, from element bounds alone, each
//!   element's nearest neighbor in the four cardinal directions.
//! - [`focus`] (`waypoint_focus`): a [`FocusController`] that owns the cursor, walks the
//!   adjacency table, steps through list rows, and emits focus effects to a
//!   [`FocusSink`].
//! - [`input`] (`waypoint_input`): edge-triggered translation of gamepad events into
//!   navigation commands, plus callback bindings.
//!
//! [`Navigator`] glues input to focus for hosts that want a single call per device event.
//!
//! ## Example
//!
//! ```rust
//! use waypoint::kurbo::Rect;
//! use waypoint::{
//!     Button, FocusElement, FocusEvent, InputEvent, Navigator,
//! };
//!
//! let mut nav: Navigator<u32> = Navigator::default();
//! let mut effects: Vec<FocusEvent<u32>> = Vec::new();
//!
//! let focus = nav.focus_mut();
//! focus.register(FocusElement::new(1, Rect::new(0.0, 0.0, 50.0, 20.0))).unwrap();
//! focus.register(FocusElement::new(2, Rect::new(70.0, 0.0, 120.0, 20.0))).unwrap();
//! focus.rebuild(&mut effects);
//! focus.set_initial_focus(&mut effects);
//!
//! nav.handle(InputEvent::Button { button: Button::DpadRight, pressed: true }, &mut effects);
//! assert_eq!(nav.focus().current(), Some(2));
//! assert_eq!(
//!     effects,
//!     vec![FocusEvent::Focus(1), FocusEvent::Unfocus(1), FocusEvent::Focus(2)]
//! );
//! ```
//!
//! ## Features
//!
//! - `std` (default): enables `std` support for `kurbo` and the member crates.
//! - `libm`: enables `no_std` + `alloc` builds that rely on `libm` for floating-point math.
//!
//! This crate is `no_std` and uses `alloc`.
//!
//! The minimum supported Rust version is 1.88.

#![no_std]

extern crate alloc;

mod navigator;

pub use kurbo;
pub use waypoint_adjacency as adjacency;
pub use waypoint_focus as focus;
pub use waypoint_input as input;

pub use navigator::Navigator;
pub use waypoint_adjacency::{AdjacencyTable, Direction, FocusEntry, Neighbor, Neighbors};
pub use waypoint_focus::{
    Activation, ElementKind, FocusController, FocusElement, FocusEvent, FocusSink, FocusState,
    IndexPath, ListShape, RegistryError,
};
pub use waypoint_input::{
    Button, ButtonPhase, Command, InputBindings, InputConfig, InputEvent, InputState, Stick,
    Trigger,
};
