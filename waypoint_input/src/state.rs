// Copyright 2025 the Waypoint Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Edge-triggered translation of device events into navigation commands.

use smallvec::{SmallVec, smallvec};
use waypoint_adjacency::Direction;

use crate::event::{Button, Buttons, InputEvent, Stick, Trigger};

/// A navigation request derived from input.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Command {
    /// Move focus one step.
    Move(Direction),
    /// Simulate a tap on the focused element.
    Activate,
}

/// How device events map onto navigation commands.
#[derive(Clone, Debug, PartialEq)]
pub struct InputConfig {
    /// Buttons that move focus, and the direction each one moves it.
    pub directional: SmallVec<[(Button, Direction); 4]>,
    /// Button that simulates a tap.
    pub activate: Button,
    /// Trigger that also simulates a tap, if any.
    pub activate_trigger: Option<Trigger>,
    /// Stick that moves focus, if any.
    pub navigation_stick: Option<Stick>,
    /// Axis deflection at which the stick starts a move.
    pub stick_press_threshold: f32,
    /// Axis deflection below which a held stick direction is released.
    ///
    /// Keeping this below [`stick_press_threshold`](Self::stick_press_threshold) stops a
    /// stick resting near the threshold from producing a burst of moves.
    pub stick_release_threshold: f32,
    /// Pull at which a trigger counts as pressed.
    pub trigger_press_threshold: f32,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            directional: smallvec![
                (Button::DpadUp, Direction::Up),
                (Button::DpadDown, Direction::Down),
                (Button::DpadLeft, Direction::Left),
                (Button::DpadRight, Direction::Right),
            ],
            activate: Button::A,
            activate_trigger: None,
            navigation_stick: Some(Stick::Left),
            stick_press_threshold: 0.5,
            stick_release_threshold: 0.3,
            trigger_press_threshold: 0.5,
        }
    }
}

impl InputConfig {
    /// Direction bound to `button`, if any.
    #[must_use]
    pub fn direction_for(&self, button: Button) -> Option<Direction> {
        self.directional
            .iter()
            .find(|(b, _)| *b == button)
            .map(|&(_, d)| d)
    }
}

/// Tracks held inputs and emits a [`Command`] only on transitions into "pressed".
///
/// Repeated `pressed = true` reports for a held button, a trigger that stays past its
/// threshold, and a stick that stays deflected all produce nothing.
#[derive(Clone, Debug)]
pub struct InputState {
    config: InputConfig,
    held: Buttons,
    triggers: [bool; 2],
    sticks: [Option<Direction>; 2],
}

impl Default for InputState {
    fn default() -> Self {
        Self::new(InputConfig::default())
    }
}

impl InputState {
    /// Create a state machine with the given mapping.
    #[must_use]
    pub fn new(config: InputConfig) -> Self {
        Self {
            config,
            held: Buttons::empty(),
            triggers: [false; 2],
            sticks: [None; 2],
        }
    }

    /// The active mapping.
    #[must_use]
    pub fn config(&self) -> &InputConfig {
        &self.config
    }

    /// Buttons currently held.
    #[must_use]
    pub fn held(&self) -> Buttons {
        self.held
    }

    /// Returns `true` if `button` is held.
    #[must_use]
    pub fn is_held(&self, button: Button) -> bool {
        self.held.contains(button.flag())
    }

    /// Forget everything that is held, for example after the controller disconnects.
    pub fn reset(&mut self) {
        self.held = Buttons::empty();
        self.triggers = [false; 2];
        self.sticks = [None; 2];
    }

    /// Feed one device event; returns the command it triggers, if any.
    pub fn on_event(&mut self, event: InputEvent) -> Option<Command> {
        let command = match event.sanitized() {
            InputEvent::Button { button, pressed } => self.on_button(button, pressed),
            InputEvent::Trigger { trigger, value } => self.on_trigger(trigger, value),
            InputEvent::Thumbstick { stick, x, y } => self.on_stick(stick, x, y),
        };
        if let Some(command) = command {
            tracing::trace!(?event, ?command, "input produced command");
        }
        command
    }

    fn on_button(&mut self, button: Button, pressed: bool) -> Option<Command> {
        let flag = button.flag();
        let was_held = self.held.contains(flag);
        self.held.set(flag, pressed);
        if !pressed || was_held {
            return None;
        }
        if let Some(direction) = self.config.direction_for(button) {
            Some(Command::Move(direction))
        } else if button == self.config.activate {
            Some(Command::Activate)
        } else {
            None
        }
    }

    fn on_trigger(&mut self, trigger: Trigger, value: f32) -> Option<Command> {
        let slot = &mut self.triggers[trigger.index()];
        let pressed = value >= self.config.trigger_press_threshold;
        let rising = pressed && !*slot;
        *slot = pressed;
        (rising && self.config.activate_trigger == Some(trigger)).then_some(Command::Activate)
    }

    fn on_stick(&mut self, stick: Stick, x: f32, y: f32) -> Option<Command> {
        if self.config.navigation_stick != Some(stick) {
            return None;
        }
        let candidate = stick_direction(x, y, self.config.stick_press_threshold);
        let slot = &mut self.sticks[stick.index()];
        if let Some(held) = *slot
            && deflection(held, x, y) >= self.config.stick_release_threshold
        {
            // Still held; only a swing into a different direction counts.
            return match candidate {
                Some(next) if next != held => {
                    *slot = Some(next);
                    Some(Command::Move(next))
                }
                _ => None,
            };
        }
        *slot = candidate;
        candidate.map(Command::Move)
    }
}

/// Dominant-axis direction of a stick, or `None` inside the dead zone.
fn stick_direction(x: f32, y: f32, threshold: f32) -> Option<Direction> {
    let (ax, ay) = (x.abs(), y.abs());
    if ax.max(ay) < threshold {
        return None;
    }
    Some(if ay >= ax {
        if y > 0.0 { Direction::Up } else { Direction::Down }
    } else if x > 0.0 {
        Direction::Right
    } else {
        Direction::Left
    })
}

/// Deflection of the stick along `direction` (negative when pushed the other way).
fn deflection(direction: Direction, x: f32, y: f32) -> f32 {
    match direction {
        Direction::Up => y,
        Direction::Down => -y,
        Direction::Left => -x,
        Direction::Right => x,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

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

    fn stick(x: f32, y: f32) -> InputEvent {
        InputEvent::Thumbstick {
            stick: Stick::Left,
            x,
            y,
        }
    }

    #[test]
    fn dpad_press_moves_once_until_released() {
        let mut state = InputState::default();
        assert_eq!(
            state.on_event(press(Button::DpadDown)),
            Some(Command::Move(Direction::Down))
        );
        assert_eq!(state.on_event(press(Button::DpadDown)), None);
        assert!(state.is_held(Button::DpadDown));
        assert_eq!(state.on_event(release(Button::DpadDown)), None);
        assert!(!state.is_held(Button::DpadDown));
        assert_eq!(
            state.on_event(press(Button::DpadDown)),
            Some(Command::Move(Direction::Down))
        );
    }

    #[test]
    fn activate_button_and_unmapped_buttons() {
        let mut state = InputState::default();
        assert_eq!(state.on_event(press(Button::A)), Some(Command::Activate));
        assert_eq!(state.on_event(press(Button::Menu)), None);
        assert!(state.held().contains(Buttons::A | Buttons::MENU));
    }

    #[test]
    fn custom_directional_mapping() {
        let mut config = InputConfig::default();
        config
            .directional
            .push((Button::RightShoulder, Direction::Right));
        let mut state = InputState::new(config);
        assert_eq!(
            state.on_event(press(Button::RightShoulder)),
            Some(Command::Move(Direction::Right))
        );
    }

    #[test]
    fn stick_moves_on_crossing_and_releases_with_hysteresis() {
        let mut state = InputState::default();
        assert_eq!(state.on_event(stick(0.0, 0.4)), None);
        assert_eq!(
            state.on_event(stick(0.0, 0.6)),
            Some(Command::Move(Direction::Up))
        );
        // Dipping between the thresholds keeps the direction held.
        assert_eq!(state.on_event(stick(0.0, 0.4)), None);
        assert_eq!(state.on_event(stick(0.0, 0.7)), None);
        // Dropping below the release threshold re-arms it.
        assert_eq!(state.on_event(stick(0.0, 0.1)), None);
        assert_eq!(
            state.on_event(stick(0.0, 0.9)),
            Some(Command::Move(Direction::Up))
        );
    }

    #[test]
    fn stick_swing_to_new_direction_moves_immediately() {
        let mut state = InputState::default();
        assert_eq!(
            state.on_event(stick(0.8, 0.0)),
            Some(Command::Move(Direction::Right))
        );
        assert_eq!(
            state.on_event(stick(-0.8, 0.0)),
            Some(Command::Move(Direction::Left))
        );
        assert_eq!(
            state.on_event(stick(0.0, -0.9)),
            Some(Command::Move(Direction::Down))
        );
    }

    #[test]
    fn other_stick_is_ignored() {
        let mut state = InputState::default();
        let ev = InputEvent::Thumbstick {
            stick: Stick::Right,
            x: 1.0,
            y: 0.0,
        };
        assert_eq!(state.on_event(ev), None);
    }

    #[test]
    fn trigger_activates_on_rising_edge_when_configured() {
        let mut state = InputState::new(InputConfig {
            activate_trigger: Some(Trigger::Right),
            ..InputConfig::default()
        });
        let pull = |value| InputEvent::Trigger {
            trigger: Trigger::Right,
            value,
        };
        assert_eq!(state.on_event(pull(0.2)), None);
        assert_eq!(state.on_event(pull(0.6)), Some(Command::Activate));
        assert_eq!(state.on_event(pull(1.0)), None);
        assert_eq!(state.on_event(pull(0.0)), None);
        assert_eq!(state.on_event(pull(0.9)), Some(Command::Activate));

        let left = InputEvent::Trigger {
            trigger: Trigger::Left,
            value: 1.0,
        };
        assert_eq!(state.on_event(left), None);
    }

    #[test]
    fn reset_forgets_held_inputs() {
        let mut state = InputState::default();
        state.on_event(press(Button::DpadUp));
        state.on_event(stick(1.0, 0.0));
        state.reset();
        assert_eq!(
            state.on_event(press(Button::DpadUp)),
            Some(Command::Move(Direction::Up))
        );
        assert_eq!(
            state.on_event(stick(1.0, 0.0)),
            Some(Command::Move(Direction::Right))
        );
    }
}
