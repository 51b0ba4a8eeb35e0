// Copyright 2025 the Waypoint Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Waypoint Input: gamepad events in, navigation commands out.
//!
//! The host's controller abstraction reports three kinds of [`InputEvent`]: digital
//! button changes, trigger pulls in `[0, 1]`, and thumbstick positions in `[-1, 1]`.
//! This crate turns them into two things:
//!
//! - **Commands** ([`Command`]) via [`InputState`]: a move in a [`Direction`] or an
//!   activation. Commands fire only on transitions into "pressed", so holding the D-pad
//!   moves focus once, and the navigation stick uses a press/release threshold pair so
//!   a stick hovering near the threshold does not stutter. The mapping lives in
//!   [`InputConfig`].
//! - **Callbacks** via [`InputBindings`]: arbitrary handlers bound to individual buttons,
//!   triggers, or sticks, called with the raw phase or analog value.
//!
//! ```rust
//! use waypoint_input::{Button, Command, Direction, InputEvent, InputState};
//!
//! let mut input = InputState::default();
//! let down = InputEvent::Button { button: Button::DpadDown, pressed: true };
//!
//! assert_eq!(input.on_event(down), Some(Command::Move(Direction::Down)));
//! // Still held: no repeat.
//! assert_eq!(input.on_event(down), None);
//! ```
//!
//! ## Features
//!
//! - `std` (default): enables `std` support for dependencies.
//! - `libm`: enables `no_std` + `alloc` builds that rely on `libm` for floating-point math.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod bindings;
mod event;
mod state;

pub use bindings::{ButtonPhase, InputBindings};
pub use event::{Button, Buttons, InputEvent, Stick, Trigger};
pub use state::{Command, InputConfig, InputState};

pub use waypoint_adjacency::Direction;
