// Copyright 2025 the Waypoint Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! One entry point per device event: input state plus focus controller.

use core::fmt::Debug;
use core::hash::Hash;

use waypoint_focus::{FocusController, FocusSink};
use waypoint_input::{Command, InputConfig, InputEvent, InputState};

/// Routes device events to a [`FocusController`].
///
/// Each event goes through an [`InputState`]; the resulting [`Command`], if any, is
/// applied to the controller. Element registration and rebuilds still go through
/// [`focus_mut`](Self::focus_mut).
#[derive(Clone, Debug)]
pub struct Navigator<K>
where
    K: Copy + Eq + Hash + Debug,
{
    input: InputState,
    focus: FocusController<K>,
}

impl<K> Default for Navigator<K>
where
    K: Copy + Eq + Hash + Debug,
{
    fn default() -> Self {
        Self::new(InputConfig::default())
    }
}

impl<K> Navigator<K>
where
    K: Copy + Eq + Hash + Debug,
{
    /// A navigator with an empty controller and the given input mapping.
    #[must_use]
    pub fn new(config: InputConfig) -> Self {
        Self::with_controller(config, FocusController::new())
    }

    /// A navigator driving an existing controller.
    #[must_use]
    pub fn with_controller(config: InputConfig, focus: FocusController<K>) -> Self {
        Self {
            input: InputState::new(config),
            focus,
        }
    }

    /// The input state machine.
    #[must_use]
    pub fn input(&self) -> &InputState {
        &self.input
    }

    /// Mutable access to the input state machine.
    pub fn input_mut(&mut self) -> &mut InputState {
        &mut self.input
    }

    /// The focus controller.
    #[must_use]
    pub fn focus(&self) -> &FocusController<K> {
        &self.focus
    }

    /// Mutable access to the focus controller.
    pub fn focus_mut(&mut self) -> &mut FocusController<K> {
        &mut self.focus
    }

    /// Feed one device event.
    ///
    /// Returns the command the event produced, even if applying it changed nothing (for
    /// example a move toward an edge).
    pub fn handle<S>(&mut self, event: InputEvent, sink: &mut S) -> Option<Command>
    where
        S: FocusSink<K> + ?Sized,
    {
        let command = self.input.on_event(event)?;
        self.apply(command, sink);
        Some(command)
    }

    /// Apply a command directly; returns `true` if focus state changed or an
    /// activation fired.
    pub fn apply<S>(&mut self, command: Command, sink: &mut S) -> bool
    where
        S: FocusSink<K> + ?Sized,
    {
        let applied = match command {
            Command::Move(direction) => self.focus.move_focus(direction, sink),
            Command::Activate => self.focus.simulate_activation(sink),
        };
        if !applied {
            tracing::trace!(?command, "command had no effect");
        }
        applied
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;
    use alloc::vec::Vec;
    use kurbo::Rect;
    use waypoint_focus::{
        Activation, ElementKind, FocusElement, FocusEvent, IndexPath, ListShape,
    };
    use waypoint_input::{Button, Direction, Stick};

    type Events = Vec<FocusEvent<u8>>;

    fn press(button: Button) -> InputEvent {
        InputEvent::Button {
            button,
            pressed: true,
        }
    }

    fn release(button: Button) -> InputEvent {
        InputEvent::Button {
            button,
            pressed: false,
        }
    }

    fn settings_screen() -> Navigator<u8> {
        let mut nav = Navigator::default();
        let focus = nav.focus_mut();
        focus
            .register(
                FocusElement::new(1, Rect::new(0.0, 0.0, 80.0, 20.0))
                    .with_kind(ElementKind::Switch),
            )
            .unwrap();
        focus
            .register(FocusElement::new(2, Rect::new(100.0, 0.0, 180.0, 20.0)))
            .unwrap();
        focus
            .register(
                FocusElement::new(3, Rect::new(0.0, 40.0, 180.0, 200.0))
                    .with_kind(ElementKind::List(ListShape::new([2, 1]))),
            )
            .unwrap();
        let mut events = Events::new();
        focus.rebuild(&mut events);
        focus.set_initial_focus(&mut events);
        nav
    }

    #[test]
    fn dpad_drives_focus_once_per_press() {
        let mut nav = settings_screen();
        let mut events = Events::new();

        assert_eq!(
            nav.handle(press(Button::DpadRight), &mut events),
            Some(Command::Move(Direction::Right))
        );
        assert_eq!(nav.focus().current(), Some(2));
        // Held: no repeat.
        assert_eq!(nav.handle(press(Button::DpadRight), &mut events), None);
        assert_eq!(nav.handle(release(Button::DpadRight), &mut events), None);
        assert_eq!(
            events,
            vec![FocusEvent::Unfocus(1), FocusEvent::Focus(2)]
        );
    }

    #[test]
    fn activate_button_toggles_switch() {
        let mut nav = settings_screen();
        let mut events = Events::new();
        assert_eq!(
            nav.handle(press(Button::A), &mut events),
            Some(Command::Activate)
        );
        assert_eq!(
            events,
            vec![FocusEvent::Activate(1, Activation::ToggleSwitch)]
        );
    }

    #[test]
    fn stick_walks_into_list_rows() {
        let mut nav = settings_screen();
        let mut events = Events::new();
        let tilt = |y| InputEvent::Thumbstick {
            stick: Stick::Left,
            x: 0.0,
            y,
        };

        // Down (negative y) from the switch enters the list.
        nav.handle(tilt(-0.9), &mut events);
        assert_eq!(nav.focus().sub_cursor(&3), Some(IndexPath::new(0, 0)));
        nav.handle(tilt(0.0), &mut events);
        nav.handle(tilt(-0.9), &mut events);
        nav.handle(tilt(0.0), &mut events);
        nav.handle(tilt(-0.9), &mut events);
        assert_eq!(nav.focus().sub_cursor(&3), Some(IndexPath::new(0, 1)));

        events.clear();
        nav.handle(press(Button::A), &mut events);
        assert_eq!(
            events,
            vec![FocusEvent::ActivateRow(3, IndexPath::new(0, 1))]
        );
    }

    #[test]
    fn edge_moves_report_command_but_change_nothing() {
        let mut nav = settings_screen();
        let mut events = Events::new();
        assert_eq!(
            nav.handle(press(Button::DpadUp), &mut events),
            Some(Command::Move(Direction::Up))
        );
        assert!(events.is_empty());
        assert_eq!(nav.focus().current(), Some(1));
        assert!(!nav.apply(Command::Move(Direction::Left), &mut events));
    }
}
