// Copyright 2025 the Waypoint Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Callbacks bound to individual buttons, triggers, and sticks.
//!
//! Bindings see raw events, not navigation commands: a button handler is told about
//! every press and release report, and analog handlers receive every value update.
//! Trigger phase handlers are the exception: they fire only when the pull crosses the
//! bindings' trigger threshold.
//!
//! ```
//! use std::cell::Cell;
//! use std::rc::Rc;
//! use waypoint_input::{Button, ButtonPhase, InputBindings, InputEvent};
//!
//! let presses = Rc::new(Cell::new(0));
//! let mut bindings = InputBindings::new();
//! let counter = Rc::clone(&presses);
//! bindings.bind_button(Button::X, move |phase| {
//!     if phase == ButtonPhase::Pressed {
//!         counter.set(counter.get() + 1);
//!     }
//! });
//!
//! let called = bindings.dispatch(&InputEvent::Button { button: Button::X, pressed: true });
//! assert_eq!(called, 1);
//! assert_eq!(presses.get(), 1);
//! ```

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt;

use crate::event::{Button, InputEvent, Stick, Trigger};

/// Whether a button went down or up.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ButtonPhase {
    /// The button is down.
    Pressed,
    /// The button is up.
    Released,
}

type ButtonHandler<'a> = Box<dyn FnMut(ButtonPhase) + 'a>;
type TriggerHandler<'a> = Box<dyn FnMut(f32) + 'a>;
type StickHandler<'a> = Box<dyn FnMut(f32, f32) + 'a>;

/// A table of input callbacks.
///
/// Several handlers may be bound to the same source; [`dispatch`](Self::dispatch) calls
/// them in binding order.
pub struct InputBindings<'a> {
    buttons: Vec<(Button, ButtonHandler<'a>)>,
    triggers: Vec<(Trigger, TriggerHandler<'a>)>,
    trigger_phases: Vec<(Trigger, ButtonHandler<'a>)>,
    sticks: Vec<(Stick, StickHandler<'a>)>,
    trigger_threshold: f32,
    triggers_pressed: [bool; 2],
}

impl Default for InputBindings<'_> {
    fn default() -> Self {
        Self::with_trigger_threshold(0.5)
    }
}

impl fmt::Debug for InputBindings<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InputBindings")
            .field("buttons", &self.buttons.len())
            .field("triggers", &self.triggers.len())
            .field("trigger_phases", &self.trigger_phases.len())
            .field("sticks", &self.sticks.len())
            .field("trigger_threshold", &self.trigger_threshold)
            .field("triggers_pressed", &self.triggers_pressed)
            .finish()
    }
}

impl<'a> InputBindings<'a> {
    /// No bindings; triggers count as pressed from a pull of `0.5`.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// No bindings; triggers count as pressed once their pull reaches `threshold`.
    #[must_use]
    pub fn with_trigger_threshold(threshold: f32) -> Self {
        Self {
            buttons: Vec::new(),
            triggers: Vec::new(),
            trigger_phases: Vec::new(),
            sticks: Vec::new(),
            trigger_threshold: threshold,
            triggers_pressed: [false; 2],
        }
    }

    /// Call `handler` on every press and release of `button`.
    pub fn bind_button(&mut self, button: Button, handler: impl FnMut(ButtonPhase) + 'a) {
        self.buttons.push((button, Box::new(handler)));
    }

    /// Call `handler` with every value reported by `trigger`.
    pub fn bind_trigger(&mut self, trigger: Trigger, handler: impl FnMut(f32) + 'a) {
        self.triggers.push((trigger, Box::new(handler)));
    }

    /// Call `handler` when `trigger` crosses the press threshold in either direction.
    pub fn bind_trigger_phase(&mut self, trigger: Trigger, handler: impl FnMut(ButtonPhase) + 'a) {
        self.trigger_phases.push((trigger, Box::new(handler)));
    }

    /// Call `handler` with every `(x, y)` reported by `stick`.
    pub fn bind_stick(&mut self, stick: Stick, handler: impl FnMut(f32, f32) + 'a) {
        self.sticks.push((stick, Box::new(handler)));
    }

    /// Drop every handler bound to `button`.
    pub fn unbind_button(&mut self, button: Button) {
        self.buttons.retain(|(b, _)| *b != button);
    }

    /// Drop every handler bound to `trigger`.
    pub fn unbind_trigger(&mut self, trigger: Trigger) {
        self.triggers.retain(|(t, _)| *t != trigger);
        self.trigger_phases.retain(|(t, _)| *t != trigger);
    }

    /// Drop every handler bound to `stick`.
    pub fn unbind_stick(&mut self, stick: Stick) {
        self.sticks.retain(|(s, _)| *s != stick);
    }

    /// Drop every handler.
    pub fn clear(&mut self) {
        self.buttons.clear();
        self.triggers.clear();
        self.trigger_phases.clear();
        self.sticks.clear();
    }

    /// Returns `true` if no handler is bound.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buttons.is_empty()
            && self.triggers.is_empty()
            && self.trigger_phases.is_empty()
            && self.sticks.is_empty()
    }

    /// Call every handler bound to the source of `event`; returns how many ran.
    ///
    /// Analog values are clamped into range before handlers see them.
    pub fn dispatch(&mut self, event: &InputEvent) -> usize {
        let mut called = 0;
        match event.sanitized() {
            InputEvent::Button { button, pressed } => {
                let phase = if pressed {
                    ButtonPhase::Pressed
                } else {
                    ButtonPhase::Released
                };
                for (_, handler) in self.buttons.iter_mut().filter(|(b, _)| *b == button) {
                    handler(phase);
                    called += 1;
                }
            }
            InputEvent::Trigger { trigger, value } => {
                for (_, handler) in self.triggers.iter_mut().filter(|(t, _)| *t == trigger) {
                    handler(value);
                    called += 1;
                }
                let pressed = value >= self.trigger_threshold;
                let was_pressed = core::mem::replace(
                    &mut self.triggers_pressed[trigger.index()],
                    pressed,
                );
                if pressed != was_pressed {
                    let phase = if pressed {
                        ButtonPhase::Pressed
                    } else {
                        ButtonPhase::Released
                    };
                    for (_, handler) in self
                        .trigger_phases
                        .iter_mut()
                        .filter(|(t, _)| *t == trigger)
                    {
                        handler(phase);
                        called += 1;
                    }
                }
            }
            InputEvent::Thumbstick { stick, x, y } => {
                for (_, handler) in self.sticks.iter_mut().filter(|(s, _)| *s == stick) {
                    handler(x, y);
                    called += 1;
                }
            }
        }
        if called == 0 {
            tracing::trace!(?event, "no binding for input event");
        }
        called
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;
    use core::cell::RefCell;

    #[test]
    fn handlers_run_in_binding_order() {
        let log = RefCell::new(Vec::new());
        let mut bindings = InputBindings::new();
        bindings.bind_button(Button::B, |p| log.borrow_mut().push((1, p)));
        bindings.bind_button(Button::B, |p| log.borrow_mut().push((2, p)));
        bindings.bind_button(Button::Y, |p| log.borrow_mut().push((3, p)));

        let n = bindings.dispatch(&InputEvent::Button {
            button: Button::B,
            pressed: false,
        });
        assert_eq!(n, 2);
        drop(bindings);
        assert_eq!(
            log.into_inner(),
            vec![(1, ButtonPhase::Released), (2, ButtonPhase::Released)]
        );
    }

    #[test]
    fn analog_handlers_receive_clamped_values() {
        let seen = RefCell::new(Vec::new());
        let mut bindings = InputBindings::new();
        bindings.bind_trigger(Trigger::Left, |v| seen.borrow_mut().push((v, 0.0)));
        bindings.bind_stick(Stick::Right, |x, y| seen.borrow_mut().push((x, y)));

        bindings.dispatch(&InputEvent::Trigger {
            trigger: Trigger::Left,
            value: 1.5,
        });
        bindings.dispatch(&InputEvent::Thumbstick {
            stick: Stick::Right,
            x: -0.25,
            y: -2.0,
        });
        assert_eq!(
            bindings.dispatch(&InputEvent::Thumbstick {
                stick: Stick::Left,
                x: 0.0,
                y: 0.0,
            }),
            0
        );
        drop(bindings);
        assert_eq!(seen.into_inner(), vec![(1.0, 0.0), (-0.25, -1.0)]);
    }

    #[test]
    fn trigger_phase_fires_on_threshold_crossings() {
        let phases = RefCell::new(Vec::new());
        let mut bindings = InputBindings::with_trigger_threshold(0.6);
        bindings.bind_trigger_phase(Trigger::Right, |p| phases.borrow_mut().push(p));

        for value in [0.2, 0.7, 0.9, 0.4, 0.1, 1.0] {
            bindings.dispatch(&InputEvent::Trigger {
                trigger: Trigger::Right,
                value,
            });
        }
        // The other trigger has its own state.
        bindings.dispatch(&InputEvent::Trigger {
            trigger: Trigger::Left,
            value: 0.0,
        });
        drop(bindings);
        assert_eq!(
            phases.into_inner(),
            vec![
                ButtonPhase::Pressed,
                ButtonPhase::Released,
                ButtonPhase::Pressed
            ]
        );
    }

    #[test]
    fn unbinding_removes_only_that_source() {
        let mut bindings = InputBindings::new();
        bindings.bind_button(Button::A, |_| {});
        bindings.bind_trigger(Trigger::Right, |_| {});
        bindings.unbind_button(Button::A);
        assert!(!bindings.is_empty());
        assert_eq!(
            bindings.dispatch(&InputEvent::Button {
                button: Button::A,
                pressed: true,
            }),
            0
        );
        bindings.unbind_trigger(Trigger::Right);
        assert!(bindings.is_empty());
    }
}
