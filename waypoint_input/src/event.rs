// Copyright 2025 the Waypoint Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Device events as reported by the host's controller abstraction.

/// A digital gamepad button.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Button {
    /// D-pad up.
    DpadUp,
    /// D-pad down.
    DpadDown,
    /// D-pad left.
    DpadLeft,
    /// D-pad right.
    DpadRight,
    /// Bottom face button.
    A,
    /// Right face button.
    B,
    /// Left face button.
    X,
    /// Top face button.
    Y,
    /// Left shoulder.
    LeftShoulder,
    /// Right shoulder.
    RightShoulder,
    /// Left thumbstick click.
    LeftThumb,
    /// Right thumbstick click.
    RightThumb,
    /// Menu / start.
    Menu,
    /// Options / select.
    Options,
}

impl Button {
    /// The bit for this button in a [`Buttons`] set.
    #[must_use]
    pub const fn flag(self) -> Buttons {
        match self {
            Self::DpadUp => Buttons::DPAD_UP,
            Self::DpadDown => Buttons::DPAD_DOWN,
            Self::DpadLeft => Buttons::DPAD_LEFT,
            Self::DpadRight => Buttons::DPAD_RIGHT,
            Self::A => Buttons::A,
            Self::B => Buttons::B,
            Self::X => Buttons::X,
            Self::Y => Buttons::Y,
            Self::LeftShoulder => Buttons::LEFT_SHOULDER,
            Self::RightShoulder => Buttons::RIGHT_SHOULDER,
            Self::LeftThumb => Buttons::LEFT_THUMB,
            Self::RightThumb => Buttons::RIGHT_THUMB,
            Self::Menu => Buttons::MENU,
            Self::Options => Buttons::OPTIONS,
        }
    }
}

bitflags::bitflags! {
    /// A set of held buttons.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct Buttons: u16 {
        /// D-pad up.
        const DPAD_UP        = 1 << 0;
        /// D-pad down.
        const DPAD_DOWN      = 1 << 1;
        /// D-pad left.
        const DPAD_LEFT      = 1 << 2;
        /// D-pad right.
        const DPAD_RIGHT     = 1 << 3;
        /// Bottom face button.
        const A              = 1 << 4;
        /// Right face button.
        const B              = 1 << 5;
        /// Left face button.
        const X              = 1 << 6;
        /// Top face button.
        const Y              = 1 << 7;
        /// Left shoulder.
        const LEFT_SHOULDER  = 1 << 8;
        /// Right shoulder.
        const RIGHT_SHOULDER = 1 << 9;
        /// Left thumbstick click.
        const LEFT_THUMB     = 1 << 10;
        /// Right thumbstick click.
        const RIGHT_THUMB    = 1 << 11;
        /// Menu / start.
        const MENU           = 1 << 12;
        /// Options / select.
        const OPTIONS        = 1 << 13;
    }
}

/// An analog trigger reporting values in `[0, 1]`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Trigger {
    /// Left trigger.
    Left,
    /// Right trigger.
    Right,
}

/// An analog thumbstick reporting axes in `[-1, 1]`, `y` positive up.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Stick {
    /// Left stick.
    Left,
    /// Right stick.
    Right,
}

impl Trigger {
    pub(crate) const fn index(self) -> usize {
        match self {
            Self::Left => 0,
            Self::Right => 1,
        }
    }
}

impl Stick {
    pub(crate) const fn index(self) -> usize {
        match self {
            Self::Left => 0,
            Self::Right => 1,
        }
    }
}

/// One discrete event from the input device.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum InputEvent {
    /// A button changed state.
    Button {
        /// Which button.
        button: Button,
        /// `true` while held.
        pressed: bool,
    },
    /// A trigger moved.
    Trigger {
        /// Which trigger.
        trigger: Trigger,
        /// Pull amount in `[0, 1]`.
        value: f32,
    },
    /// A thumbstick moved.
    Thumbstick {
        /// Which stick.
        stick: Stick,
        /// Horizontal axis in `[-1, 1]`, positive right.
        x: f32,
        /// Vertical axis in `[-1, 1]`, positive up.
        y: f32,
    },
}

impl InputEvent {
    /// A copy with analog values clamped into their documented ranges; NaN becomes zero.
    #[must_use]
    pub fn sanitized(self) -> Self {
        match self {
            Self::Button { .. } => self,
            Self::Trigger { trigger, value } => Self::Trigger {
                trigger,
                value: clean(value, 0.0),
            },
            Self::Thumbstick { stick, x, y } => Self::Thumbstick {
                stick,
                x: clean(x, -1.0),
                y: clean(y, -1.0),
            },
        }
    }
}

fn clean(v: f32, min: f32) -> f32 {
    if v.is_nan() { 0.0 } else { v.clamp(min, 1.0) }
}
