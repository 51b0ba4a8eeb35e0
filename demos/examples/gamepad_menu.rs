// Copyright 2025 the Waypoint Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drive a small settings screen with a scripted gamepad session.
//!
//! This example shows how to combine:
//! - a host-side `FocusSink` that "renders" highlights by printing them,
//! - `FocusController` for registration, rebuilds, and list traversal,
//! - `Navigator` for turning D-pad, stick, and button events into moves,
//! - `InputBindings` for a callback that is not part of navigation.
//!
//! Run:
//! - `cargo run -p waypoint_demos --example gamepad_menu`
//! - `RUST_LOG=waypoint_focus=debug cargo run -p waypoint_demos --example gamepad_menu`

use std::collections::HashMap;

use kurbo::Rect;
use tracing_subscriber::EnvFilter;
use waypoint::{
    Activation, Button, ButtonPhase, ElementKind, FocusElement, FocusSink, IndexPath,
    InputBindings, InputEvent, ListShape, Navigator, Stick,
};

/// Host widget ids.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
enum Widget {
    WifiSwitch,
    Brightness,
    Theme,
    Networks,
    Back,
}

/// Minimal host state: widget values plus what is highlighted.
#[derive(Default)]
struct Screen {
    wifi: bool,
    brightness: u8,
    theme: usize,
    highlighted: Option<Widget>,
    selected_row: Option<IndexPath>,
    labels: HashMap<Widget, &'static str>,
}

impl Screen {
    fn label(&self, id: Widget) -> &'static str {
        self.labels.get(&id).copied().unwrap_or("?")
    }
}

impl FocusSink<Widget> for Screen {
    fn focus(&mut self, id: Widget) {
        self.highlighted = Some(id);
        println!("  focus    -> {}", self.label(id));
    }

    fn unfocus(&mut self, id: Widget) {
        if self.highlighted == Some(id) {
            self.highlighted = None;
        }
        println!("  unfocus  -> {}", self.label(id));
    }

    fn select_row(&mut self, list: Widget, cell: IndexPath) {
        self.selected_row = Some(cell);
        println!(
            "  select   -> {} row {} section {}",
            self.label(list),
            cell.row,
            cell.section
        );
    }

    fn scroll_to_row(&mut self, _list: Widget, cell: IndexPath) {
        println!("  scroll   -> row {} section {}", cell.row, cell.section);
    }

    fn deselect_row(&mut self, _list: Widget, cell: IndexPath) {
        if self.selected_row == Some(cell) {
            self.selected_row = None;
        }
    }

    fn activate_row(&mut self, list: Widget, cell: IndexPath) {
        println!(
            "  tap row  -> {} row {} section {}",
            self.label(list),
            cell.row,
            cell.section
        );
    }

    fn activate(&mut self, id: Widget, activation: Activation) {
        match activation {
            Activation::ToggleSwitch => self.wifi = !self.wifi,
            Activation::IncrementStepper => self.brightness = self.brightness.saturating_add(1),
            Activation::NextSegment => self.theme = (self.theme + 1) % 3,
            _ => {}
        }
        println!("  activate -> {} ({activation:?})", self.label(id));
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    // Layout (logical pixels):
    //
    //   [ Wi-Fi switch ] [ Brightness ]
    //   [ Theme (segmented)          ]
    //   [ Networks list (2 + 3 rows) ]
    //   [ Back ]
    let widgets = [
        (Widget::WifiSwitch, "Wi-Fi", Rect::new(0.0, 0.0, 140.0, 40.0), ElementKind::Switch),
        (Widget::Brightness, "Brightness", Rect::new(160.0, 0.0, 300.0, 40.0), ElementKind::Stepper),
        (Widget::Theme, "Theme", Rect::new(0.0, 60.0, 300.0, 100.0), ElementKind::SegmentedControl),
        (
            Widget::Networks,
            "Networks",
            Rect::new(0.0, 120.0, 300.0, 320.0),
            ElementKind::List(ListShape::new([2, 3])),
        ),
        (Widget::Back, "Back", Rect::new(0.0, 340.0, 80.0, 380.0), ElementKind::Plain),
    ];

    let mut screen = Screen::default();
    let mut nav: Navigator<Widget> = Navigator::default();
    for (id, label, rect, kind) in widgets {
        screen.labels.insert(id, label);
        if let Err(err) = nav
            .focus_mut()
            .register(FocusElement::new(id, rect).with_kind(kind))
        {
            eprintln!("skipping widget: {err}");
        }
    }
    nav.focus_mut().rebuild(&mut screen);
    nav.focus_mut().set_initial_focus(&mut screen);

    let mut menu_presses = 0_u32;
    let mut bindings = InputBindings::new();
    bindings.bind_button(Button::Menu, |phase| {
        if phase == ButtonPhase::Pressed {
            menu_presses += 1;
        }
    });

    let press = |button| InputEvent::Button {
        button,
        pressed: true,
    };
    let release = |button| InputEvent::Button {
        button,
        pressed: false,
    };
    let tilt = |x, y| InputEvent::Thumbstick {
        stick: Stick::Left,
        x,
        y,
    };

    let session = [
        press(Button::A),
        release(Button::A),
        press(Button::DpadRight),
        release(Button::DpadRight),
        press(Button::A),
        release(Button::A),
        tilt(0.0, -0.9),
        tilt(0.0, 0.0),
        press(Button::A),
        release(Button::A),
        tilt(0.0, -0.8),
        tilt(0.0, -0.4),
        tilt(0.0, 0.1),
        tilt(0.0, -0.8),
        tilt(0.0, 0.0),
        press(Button::DpadDown),
        release(Button::DpadDown),
        press(Button::A),
        release(Button::A),
        press(Button::Menu),
        release(Button::Menu),
    ];

    for event in session {
        bindings.dispatch(&event);
        if let Some(command) = nav.handle(event, &mut screen) {
            println!("{command:?}");
        }
    }
    drop(bindings);

    println!();
    println!(
        "wifi={} brightness={} theme={} focused={:?} row={:?} menu presses={}",
        screen.wifi,
        screen.brightness,
        screen.theme,
        screen.highlighted,
        nav.focus().sub_cursor(&Widget::Networks),
        menu_presses
    );
}
