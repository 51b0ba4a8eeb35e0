// Copyright 2025 the Waypoint Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Effect sink: how the controller tells the host what to draw and trigger.
//!
//! Every call is fire-and-forget. The host is responsible for guarding against
//! elements that have left its view hierarchy before handing them to the controller.
//!
//! Hosts that prefer to apply effects in a batch can pass a `Vec<FocusEvent<K>>` as
//! the sink and drain it afterwards:
//!
//! ```
//! use kurbo::Rect;
//! use waypoint_focus::{FocusController, FocusElement, FocusEvent};
//!
//! let mut controller = FocusController::new();
//! controller
//!     .register(FocusElement::new(1_u32, Rect::new(0.0, 0.0, 10.0, 10.0)))
//!     .unwrap();
//!
//! let mut events: Vec<FocusEvent<u32>> = Vec::new();
//! controller.rebuild(&mut events);
//! controller.set_initial_focus(&mut events);
//! assert_eq!(events, vec![FocusEvent::Focus(1)]);
//! ```

use alloc::vec::Vec;

use crate::element::{Activation, IndexPath};

/// Receiver of focus side effects.
///
/// Only [`FocusSink::focus`] and [`FocusSink::unfocus`] are required; hosts without
/// list containers or activation handling can ignore the rest.
pub trait FocusSink<K> {
    /// Draw the focus highlight on `id`.
    fn focus(&mut self, id: K);

    /// Remove the focus highlight from `id`.
    fn unfocus(&mut self, id: K);

    /// Highlight `cell` inside the list `list`.
    fn select_row(&mut self, list: K, cell: IndexPath) {
        let _ = (list, cell);
    }

    /// Scroll `list` so that `cell` is visible.
    fn scroll_to_row(&mut self, list: K, cell: IndexPath) {
        let _ = (list, cell);
    }

    /// Remove the highlight from `cell` inside `list`.
    fn deselect_row(&mut self, list: K, cell: IndexPath) {
        let _ = (list, cell);
    }

    /// The user tapped `cell` inside `list` (the list delegate's selection hook).
    fn activate_row(&mut self, list: K, cell: IndexPath) {
        let _ = (list, cell);
    }

    /// The user tapped `id` itself.
    fn activate(&mut self, id: K, activation: Activation) {
        let _ = (id, activation);
    }
}

/// A recorded side effect, one per [`FocusSink`] method.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum FocusEvent<K> {
    /// See [`FocusSink::focus`].
    Focus(K),
    /// See [`FocusSink::unfocus`].
    Unfocus(K),
    /// See [`FocusSink::select_row`].
    SelectRow(K, IndexPath),
    /// See [`FocusSink::scroll_to_row`].
    ScrollToRow(K, IndexPath),
    /// See [`FocusSink::deselect_row`].
    DeselectRow(K, IndexPath),
    /// See [`FocusSink::activate_row`].
    ActivateRow(K, IndexPath),
    /// See [`FocusSink::activate`].
    Activate(K, Activation),
}

impl<K> FocusSink<K> for Vec<FocusEvent<K>> {
    fn focus(&mut self, id: K) {
        self.push(FocusEvent::Focus(id));
    }

    fn unfocus(&mut self, id: K) {
        self.push(FocusEvent::Unfocus(id));
    }

    fn select_row(&mut self, list: K, cell: IndexPath) {
        self.push(FocusEvent::SelectRow(list, cell));
    }

    fn scroll_to_row(&mut self, list: K, cell: IndexPath) {
        self.push(FocusEvent::ScrollToRow(list, cell));
    }

    fn deselect_row(&mut self, list: K, cell: IndexPath) {
        self.push(FocusEvent::DeselectRow(list, cell));
    }

    fn activate_row(&mut self, list: K, cell: IndexPath) {
        self.push(FocusEvent::ActivateRow(list, cell));
    }

    fn activate(&mut self, id: K, activation: Activation) {
        self.push(FocusEvent::Activate(id, activation));
    }
}
