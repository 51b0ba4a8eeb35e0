// Copyright 2025 the Waypoint Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Element registry: the host-maintained set of candidates for the next rebuild.

use alloc::vec::Vec;
use core::fmt::Debug;
use core::hash::Hash;

use hashbrown::HashMap;
use kurbo::Rect;
use waypoint_adjacency::FocusEntry;

use crate::element::{ElementKind, FocusElement};

/// Misuse of the [`Registry`] API.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError<K: Debug> {
    /// An element with this id is already registered.
    #[error("element {0:?} is already registered")]
    Duplicate(K),
    /// No element with this id is registered.
    #[error("element {0:?} is not registered")]
    Unknown(K),
}

/// Registered elements, in registration order.
///
/// Changes only take effect on the next
/// [`FocusController::rebuild`](crate::FocusController::rebuild). Registration order is
/// preserved because it decides exact geometric ties during a build.
#[derive(Clone, Debug)]
pub struct Registry<K>
where
    K: Copy + Eq + Hash + Debug,
{
    elements: Vec<FocusElement<K>>,
    index: HashMap<K, usize>,
}

impl<K> Default for Registry<K>
where
    K: Copy + Eq + Hash + Debug,
{
    fn default() -> Self {
        Self {
            elements: Vec::new(),
            index: HashMap::new(),
        }
    }
}

impl<K> Registry<K>
where
    K: Copy + Eq + Hash + Debug,
{
    /// An empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an element. Ids must be unique.
    pub fn register(&mut self, element: FocusElement<K>) -> Result<(), RegistryError<K>> {
        if self.index.contains_key(&element.id) {
            return Err(RegistryError::Duplicate(element.id));
        }
        self.index.insert(element.id, self.elements.len());
        self.elements.push(element);
        Ok(())
    }

    /// Remove an element, returning it.
    pub fn remove(&mut self, id: K) -> Result<FocusElement<K>, RegistryError<K>> {
        let pos = self.index.remove(&id).ok_or(RegistryError::Unknown(id))?;
        let element = self.elements.remove(pos);
        for slot in self.index.values_mut() {
            if *slot > pos {
                *slot -= 1;
            }
        }
        Ok(element)
    }

    /// Remove every element.
    pub fn clear(&mut self) {
        self.elements.clear();
        self.index.clear();
    }

    /// Move an element.
    pub fn update_rect(&mut self, id: K, rect: Rect) -> Result<(), RegistryError<K>> {
        self.get_mut(id)?.rect = rect;
        Ok(())
    }

    /// Change whether an element can receive focus.
    pub fn set_focusable(&mut self, id: K, focusable: bool) -> Result<(), RegistryError<K>> {
        self.get_mut(id)?.focusable = focusable;
        Ok(())
    }

    /// Change an element's kind, for example when a list's row count changes.
    pub fn set_kind(&mut self, id: K, kind: ElementKind) -> Result<(), RegistryError<K>> {
        self.get_mut(id)?.kind = kind;
        Ok(())
    }

    /// Look up an element.
    #[must_use]
    pub fn get(&self, id: &K) -> Option<&FocusElement<K>> {
        self.index.get(id).map(|&i| &self.elements[i])
    }

    /// Number of registered elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Returns `true` if nothing is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Registered elements in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &FocusElement<K>> + '_ {
        self.elements.iter()
    }

    /// Snapshot of every element as a builder candidate.
    #[must_use]
    pub fn entries(&self) -> Vec<FocusEntry<K>> {
        self.elements
            .iter()
            .map(|e| FocusEntry {
                id: e.id,
                rect: e.rect,
                enabled: e.focusable,
            })
            .collect()
    }

    fn get_mut(&mut self, id: K) -> Result<&mut FocusElement<K>, RegistryError<K>> {
        let pos = *self.index.get(&id).ok_or(RegistryError::Unknown(id))?;
        Ok(&mut self.elements[pos])
    }
}
