// Copyright 2025 the Waypoint Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The focus controller: one cursor walking the adjacency table.

use alloc::vec::Vec;
use core::fmt::Debug;
use core::hash::Hash;

use hashbrown::HashMap;
use waypoint_adjacency::{AdjacencyTable, Direction, vertical_order};

use crate::element::{FocusElement, IndexPath, ListShape};
use crate::registry::{Registry, RegistryError};
use crate::sink::FocusSink;

/// Observable state of a [`FocusController`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum FocusState<K> {
    /// Nothing is focused.
    NoFocus,
    /// A plain element (or an empty list) is focused.
    Focused(K),
    /// A list container is focused with its row cursor on `cell`.
    InContainer {
        /// The focused list.
        container: K,
        /// The selected cell.
        cell: IndexPath,
    },
}

/// Owns the focus cursor and moves it in response to directional input.
///
/// The controller holds a [`Registry`] of elements, the [`AdjacencyTable`] and list
/// shapes captured from it by the last [`rebuild`](Self::rebuild), the focused element,
/// and the row cursor of the focused list container. Registry edits do not affect
/// navigation until the next rebuild. All side effects go to the [`FocusSink`] passed to each
/// call.
///
/// Navigation never fails: with no focus, no neighbor, or no row cursor, an operation
/// simply leaves the state unchanged and returns `false`.
#[derive(Clone, Debug)]
pub struct FocusController<K>
where
    K: Copy + Eq + Hash + Debug,
{
    registry: Registry<K>,
    table: AdjacencyTable<K>,
    shapes: HashMap<K, ListShape>,
    current: Option<K>,
    cursors: HashMap<K, IndexPath>,
}

impl<K> Default for FocusController<K>
where
    K: Copy + Eq + Hash + Debug,
{
    fn default() -> Self {
        Self {
            registry: Registry::new(),
            table: AdjacencyTable::new(),
            shapes: HashMap::new(),
            current: None,
            cursors: HashMap::new(),
        }
    }
}

impl<K> FocusController<K>
where
    K: Copy + Eq + Hash + Debug,
{
    /// A controller with no elements and no focus.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an element for the next rebuild.
    pub fn register(&mut self, element: FocusElement<K>) -> Result<(), RegistryError<K>> {
        self.registry.register(element)
    }

    /// The registered elements.
    #[must_use]
    pub fn registry(&self) -> &Registry<K> {
        &self.registry
    }

    /// Mutable access to the registered elements. Call [`rebuild`](Self::rebuild) after
    /// changing them.
    pub fn registry_mut(&mut self) -> &mut Registry<K> {
        &mut self.registry
    }

    /// The table computed by the last rebuild.
    #[must_use]
    pub fn table(&self) -> &AdjacencyTable<K> {
        &self.table
    }

    /// The focused element.
    #[must_use]
    pub fn current(&self) -> Option<K> {
        self.current
    }

    /// The row cursor of `container`, if it is the focused list.
    #[must_use]
    pub fn sub_cursor(&self, container: &K) -> Option<IndexPath> {
        self.cursors.get(container).copied()
    }

    /// Current state.
    #[must_use]
    pub fn state(&self) -> FocusState<K> {
        match self.current {
            None => FocusState::NoFocus,
            Some(id) => match self.cursors.get(&id) {
                Some(&cell) => FocusState::InContainer {
                    container: id,
                    cell,
                },
                None => FocusState::Focused(id),
            },
        }
    }

    /// Recompute the adjacency table from the registry.
    ///
    /// The table is rebuilt from scratch. If the focused element is no longer focusable
    /// it loses focus (an `unfocus` effect is emitted only if it is still registered). A
    /// focused list that shrank keeps its cursor on the nearest remaining row; one that
    /// lost all its rows (or stopped being a list) has its row deselected, and a focused
    /// list that gained rows while it had none gets a cursor on its first row.
    pub fn rebuild<S>(&mut self, sink: &mut S)
    where
        S: FocusSink<K> + ?Sized,
    {
        self.table = AdjacencyTable::build(&self.registry.entries());
        self.shapes = self
            .registry
            .iter()
            .filter(|e| self.table.contains(&e.id))
            .filter_map(|e| e.kind.list_shape().map(|shape| (e.id, shape.clone())))
            .collect();
        tracing::debug!(
            elements = self.table.len(),
            lists = self.shapes.len(),
            "rebuilt focus graph"
        );

        if let Some(current) = self.current {
            if !self.table.contains(&current) {
                let cell = self.cursors.remove(&current);
                if self.registry.get(&current).is_some() {
                    if let Some(cell) = cell {
                        sink.deselect_row(current, cell);
                    }
                    sink.unfocus(current);
                }
                self.current = None;
                tracing::debug!(element = ?current, "focused element left the focus graph");
            } else {
                let cursor = self.cursors.get(&current).copied();
                let shape = self.list_shape(&current);
                let next = match cursor {
                    Some(cell) => shape.and_then(|s| s.clamp(cell)),
                    None => shape.and_then(ListShape::first_cell),
                };
                match (cursor, next) {
                    (Some(cell), Some(next)) if next == cell => {}
                    (_, Some(next)) => {
                        sink.select_row(current, next);
                        sink.scroll_to_row(current, next);
                        self.cursors.insert(current, next);
                    }
                    (Some(cell), None) => {
                        self.cursors.remove(&current);
                        sink.deselect_row(current, cell);
                    }
                    (None, None) => {}
                }
            }
        }

        let current = self.current;
        self.cursors.retain(|id, _| Some(*id) == current);
    }

    /// Focus the topmost element.
    ///
    /// Elements are ordered top-to-bottom (ties broken by right edge), the same ordering
    /// the vertical pass of the builder uses. Does nothing if the table is empty.
    pub fn set_initial_focus<S>(&mut self, sink: &mut S) -> bool
    where
        S: FocusSink<K> + ?Sized,
    {
        let order: Vec<K> = vertical_order(&self.registry.entries());
        let Some(first) = order.into_iter().find(|id| self.table.contains(id)) else {
            tracing::trace!("no focusable elements for initial focus");
            return false;
        };
        self.focus_element(first, Direction::Down, sink);
        true
    }

    /// Focus `id` if it is part of the focus graph, otherwise fall back to
    /// [`set_initial_focus`](Self::set_initial_focus).
    pub fn set_initial_focus_to<S>(&mut self, id: K, sink: &mut S) -> bool
    where
        S: FocusSink<K> + ?Sized,
    {
        if self.table.contains(&id) {
            self.focus_element(id, Direction::Down, sink);
            true
        } else {
            tracing::debug!(element = ?id, "initial focus target unavailable, falling back");
            self.set_initial_focus(sink)
        }
    }

    /// Drop focus entirely.
    pub fn clear_focus<S>(&mut self, sink: &mut S)
    where
        S: FocusSink<K> + ?Sized,
    {
        self.release_current(sink);
    }

    /// Move focus one step in `direction`.
    ///
    /// Inside a focused list the row cursor moves first; the list is left only through
    /// its boundary rows or sideways. Returns `true` if focus or the row cursor moved.
    pub fn move_focus<S>(&mut self, direction: Direction, sink: &mut S) -> bool
    where
        S: FocusSink<K> + ?Sized,
    {
        let Some(current) = self.current else {
            tracing::trace!(?direction, "move ignored: nothing focused");
            return false;
        };

        if let Some(cell) = self.sub_cursor(&current) {
            return self.step_within_container(current, direction, cell, sink);
        }

        let Some(target) = self.table.neighbor(&current, direction).node() else {
            tracing::trace!(element = ?current, ?direction, "move ignored: edge");
            return false;
        };
        self.focus_element(target, direction, sink);
        true
    }

    /// Simulate a tap on whatever is focused.
    ///
    /// A focused list with a row cursor activates that row; any other element gets the
    /// activation of its kind. Returns `false` if nothing is focused.
    pub fn simulate_activation<S>(&mut self, sink: &mut S) -> bool
    where
        S: FocusSink<K> + ?Sized,
    {
        let Some(current) = self.current else {
            return false;
        };
        if let Some(cell) = self.sub_cursor(&current) {
            tracing::debug!(list = ?current, ?cell, "activating row");
            sink.activate_row(current, cell);
            return true;
        }
        let Some(element) = self.registry.get(&current) else {
            return false;
        };
        let activation = element.kind.activation();
        tracing::debug!(element = ?current, ?activation, "activating element");
        sink.activate(current, activation);
        true
    }

    fn list_shape(&self, id: &K) -> Option<&ListShape> {
        self.shapes.get(id)
    }

    /// Unfocus the current element, deselecting its row first if it is a list.
    fn release_current<S>(&mut self, sink: &mut S)
    where
        S: FocusSink<K> + ?Sized,
    {
        let Some(current) = self.current.take() else {
            return;
        };
        if let Some(cell) = self.cursors.remove(&current) {
            sink.deselect_row(current, cell);
        }
        sink.unfocus(current);
    }

    /// Move focus to `target`, arriving from `direction`.
    fn focus_element<S>(&mut self, target: K, direction: Direction, sink: &mut S)
    where
        S: FocusSink<K> + ?Sized,
    {
        let from = self.current;
        if from == Some(target) {
            tracing::trace!(element = ?target, "already focused");
            return;
        }
        if self.list_shape(&target).is_some() {
            self.enter_container(target, direction, sink);
        } else {
            self.release_current(sink);
            sink.focus(target);
            self.current = Some(target);
        }
        tracing::debug!(?from, to = ?target, ?direction, "focus moved");
    }

    /// Focus a list and place its row cursor on the entry cell for `direction`.
    ///
    /// Moving up enters at the last row of the last section; any other direction enters
    /// at row 0 of section 0. An empty list is focused like a plain element.
    fn enter_container<S>(&mut self, container: K, direction: Direction, sink: &mut S)
    where
        S: FocusSink<K> + ?Sized,
    {
        let entry = self.list_shape(&container).and_then(|shape| match direction {
            Direction::Up => shape.last_cell(),
            Direction::Down | Direction::Left | Direction::Right => shape.first_cell(),
        });

        self.release_current(sink);
        if let Some(cell) = entry {
            sink.select_row(container, cell);
            sink.scroll_to_row(container, cell);
            self.cursors.insert(container, cell);
            tracing::debug!(list = ?container, ?cell, "entered list");
        }
        sink.focus(container);
        self.current = Some(container);
    }

    /// Step the row cursor of the focused list, leaving the list at its boundaries.
    fn step_within_container<S>(
        &mut self,
        container: K,
        direction: Direction,
        cell: IndexPath,
        sink: &mut S,
    ) -> bool
    where
        S: FocusSink<K> + ?Sized,
    {
        debug_assert!(
            self.list_shape(&container).is_some(),
            "row cursor on non-list element {container:?}"
        );
        let Some(shape) = self.list_shape(&container) else {
            return false;
        };

        let next = match direction {
            Direction::Up => shape.prev_cell(cell),
            Direction::Down => shape.next_cell(cell),
            Direction::Left | Direction::Right => None,
        };

        if let Some(next) = next {
            sink.deselect_row(container, cell);
            sink.select_row(container, next);
            sink.scroll_to_row(container, next);
            self.cursors.insert(container, next);
            tracing::trace!(list = ?container, ?next, "row cursor moved");
            return true;
        }

        let Some(target) = self.table.neighbor(&container, direction).node() else {
            tracing::trace!(list = ?container, ?direction, "list exit ignored: edge");
            return false;
        };
        tracing::debug!(list = ?container, ?cell, "leaving list");
        self.focus_element(target, direction, sink);
        true
    }
}
