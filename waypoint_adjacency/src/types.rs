// Copyright 2025 the Waypoint Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Public types: directions, neighbor slots, and focus candidates.

use kurbo::Rect;

/// A cardinal navigation direction.
///
/// Directions are expressed in screen space, where `y` grows downward: [`Direction::Down`]
/// points toward larger `y` values.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Toward smaller `y`.
    Up,
    /// Toward larger `y`.
    Down,
    /// Toward smaller `x`.
    Left,
    /// Toward larger `x`.
    Right,
}

impl Direction {
    /// All four directions, vertical first.
    pub const ALL: [Self; 4] = [Self::Up, Self::Down, Self::Left, Self::Right];

    /// The direction pointing the other way along the same axis.
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }

    /// Returns `true` for [`Direction::Up`] and [`Direction::Down`].
    #[must_use]
    pub const fn is_vertical(self) -> bool {
        matches!(self, Self::Up | Self::Down)
    }
}

/// Classify where `to` lies as seen from `from`.
///
/// The checks run in a fixed order, so the result is always exactly one direction:
///
/// 1. `from.y1 <= to.y0` → [`Direction::Down`]
/// 2. `from.y0 >= to.y1` → [`Direction::Up`]
/// 3. `from.x1 <= to.x0` → [`Direction::Right`]
/// 4. otherwise → [`Direction::Left`]
///
/// Vertical separation therefore wins over horizontal separation: a box that sits
/// diagonally below-right of `from` is classified as purely `Down`. Overlapping boxes
/// fall through to `Left`.
///
/// ```
/// use kurbo::Rect;
/// use waypoint_adjacency::{Direction, relative_position};
///
/// let a = Rect::new(0.0, 0.0, 10.0, 10.0);
/// let below_right = Rect::new(20.0, 20.0, 30.0, 30.0);
/// assert_eq!(relative_position(&a, &below_right), Direction::Down);
/// ```
#[must_use]
pub fn relative_position(from: &Rect, to: &Rect) -> Direction {
    if from.y1 <= to.y0 {
        Direction::Down
    } else if from.y0 >= to.y1 {
        Direction::Up
    } else if from.x1 <= to.x0 {
        Direction::Right
    } else {
        Direction::Left
    }
}

/// One directional slot of an element's adjacency.
///
/// `Unset` and `Edge` are distinct: `Unset` means the slot has not been computed yet,
/// while `Edge` means it was computed and nothing lies in that direction. The edge is
/// a variant rather than an element, so it can never be focused.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Neighbor<K> {
    /// Not computed.
    #[default]
    Unset,
    /// Boundary of the navigable area.
    Edge,
    /// The nearest element in this direction.
    Node(K),
}

impl<K> Neighbor<K> {
    /// The neighboring element, if any.
    #[must_use]
    pub fn node(self) -> Option<K> {
        match self {
            Self::Node(id) => Some(id),
            Self::Unset | Self::Edge => None,
        }
    }

    /// Returns `true` if this slot is the edge sentinel.
    #[must_use]
    pub const fn is_edge(&self) -> bool {
        matches!(self, Self::Edge)
    }

    /// Returns `true` if this slot has not been computed.
    #[must_use]
    pub const fn is_unset(&self) -> bool {
        matches!(self, Self::Unset)
    }

    /// Map the referenced element while keeping `Unset` and `Edge` as they are.
    #[must_use]
    pub fn map<U>(self, f: impl FnOnce(K) -> U) -> Neighbor<U> {
        match self {
            Self::Unset => Neighbor::Unset,
            Self::Edge => Neighbor::Edge,
            Self::Node(id) => Neighbor::Node(f(id)),
        }
    }
}

/// The four neighbor slots of one element.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Neighbors<K> {
    /// Nearest element above.
    pub up: Neighbor<K>,
    /// Nearest element below.
    pub down: Neighbor<K>,
    /// Nearest element to the left.
    pub left: Neighbor<K>,
    /// Nearest element to the right.
    pub right: Neighbor<K>,
}

impl<K> Neighbors<K> {
    /// All four slots unset.
    #[must_use]
    pub const fn unset() -> Self {
        Self {
            up: Neighbor::Unset,
            down: Neighbor::Unset,
            left: Neighbor::Unset,
            right: Neighbor::Unset,
        }
    }

    /// All four slots set to the edge sentinel.
    #[must_use]
    pub const fn edges() -> Self {
        Self {
            up: Neighbor::Edge,
            down: Neighbor::Edge,
            left: Neighbor::Edge,
            right: Neighbor::Edge,
        }
    }

    /// Slot for `direction`.
    #[must_use]
    pub fn get(&self, direction: Direction) -> Neighbor<K>
    where
        K: Copy,
    {
        match direction {
            Direction::Up => self.up,
            Direction::Down => self.down,
            Direction::Left => self.left,
            Direction::Right => self.right,
        }
    }

    /// Overwrite the slot for `direction`.
    pub fn set(&mut self, direction: Direction, neighbor: Neighbor<K>) {
        match direction {
            Direction::Up => self.up = neighbor,
            Direction::Down => self.down = neighbor,
            Direction::Left => self.left = neighbor,
            Direction::Right => self.right = neighbor,
        }
    }

    /// Replace every unset slot with the edge sentinel.
    pub fn close_unset(&mut self) {
        for slot in [
            &mut self.up,
            &mut self.down,
            &mut self.left,
            &mut self.right,
        ] {
            if slot.is_unset() {
                *slot = Neighbor::Edge;
            }
        }
    }

    /// Map every referenced element.
    #[must_use]
    pub fn map<U>(self, mut f: impl FnMut(K) -> U) -> Neighbors<U> {
        Neighbors {
            up: self.up.map(&mut f),
            down: self.down.map(&mut f),
            left: self.left.map(&mut f),
            right: self.right.map(&mut f),
        }
    }
}

impl<K> Default for Neighbors<K> {
    fn default() -> Self {
        Self::unset()
    }
}

/// A single focus candidate handed to the builder.
///
/// `FocusEntry` bundles the element identifier with its bounds and the host-computed
/// focusability flag. Disabled entries are ignored by [`AdjacencyTable::build`] and never
/// appear in the resulting table.
///
/// [`AdjacencyTable::build`]: crate::AdjacencyTable::build
#[derive(Clone, Debug)]
pub struct FocusEntry<K> {
    /// Identifier for this element. Must be unique within one build.
    pub id: K,
    /// Bounds in the shared global coordinate space.
    pub rect: Rect,
    /// Whether this element can currently receive focus.
    pub enabled: bool,
}

impl<K> FocusEntry<K> {
    /// An enabled entry.
    pub const fn new(id: K, rect: Rect) -> Self {
        Self {
            id,
            rect,
            enabled: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn position_prefers_vertical_separation() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        // Diagonally below-right: separated on both axes.
        let b = Rect::new(20.0, 20.0, 30.0, 30.0);
        assert_eq!(relative_position(&a, &b), Direction::Down);
        assert_eq!(relative_position(&b, &a), Direction::Up);
    }

    #[test]
    fn position_falls_back_to_horizontal() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let right = Rect::new(10.0, 5.0, 20.0, 15.0);
        assert_eq!(relative_position(&a, &right), Direction::Right);
        assert_eq!(relative_position(&right, &a), Direction::Left);
    }

    #[test]
    fn position_of_overlapping_boxes_is_left() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(5.0, 5.0, 15.0, 15.0);
        assert_eq!(relative_position(&a, &b), Direction::Left);
        assert_eq!(relative_position(&a, &a), Direction::Left);
    }

    #[test]
    fn touching_edges_count_as_separated() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let below = Rect::new(0.0, 10.0, 10.0, 20.0);
        assert_eq!(relative_position(&a, &below), Direction::Down);
    }

    #[test]
    fn close_unset_keeps_computed_slots() {
        let mut n: Neighbors<u32> = Neighbors::unset();
        n.set(Direction::Right, Neighbor::Node(7));
        n.close_unset();
        assert_eq!(n.right, Neighbor::Node(7));
        assert!(n.up.is_edge());
        assert!(n.down.is_edge());
        assert!(n.left.is_edge());
    }

    #[test]
    fn opposite_round_trips() {
        for d in Direction::ALL {
            assert_eq!(d.opposite().opposite(), d);
            assert_eq!(d.is_vertical(), d.opposite().is_vertical());
        }
    }
}
