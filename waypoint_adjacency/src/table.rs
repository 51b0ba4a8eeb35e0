// Copyright 2025 the Waypoint Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Adjacency table and the builder that fills it.

use alloc::vec::Vec;
use core::cmp::Ordering;
use core::hash::Hash;

use hashbrown::HashMap;
use kurbo::{Point, Rect};

use crate::types::{Direction, FocusEntry, Neighbor, Neighbors, relative_position};

/// Per-element nearest neighbors in the four cardinal directions.
///
/// A table is an immutable snapshot of one layout. It is never patched: when elements
/// move, appear, or disappear, build a new table with [`AdjacencyTable::build`]. Every
/// slot of every element in a built table is either [`Neighbor::Edge`] or a reference to
/// another element of the same table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AdjacencyTable<K>
where
    K: Copy + Eq + Hash,
{
    slots: HashMap<K, Neighbors<K>>,
}

impl<K> Default for AdjacencyTable<K>
where
    K: Copy + Eq + Hash,
{
    fn default() -> Self {
        Self {
            slots: HashMap::new(),
        }
    }
}

impl<K> AdjacencyTable<K>
where
    K: Copy + Eq + Hash,
{
    /// An empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Compute the adjacency of every enabled entry.
    ///
    /// Disabled entries are skipped. Ids must be unique among enabled entries.
    ///
    /// - No entries: an empty table.
    /// - One entry: all four slots are [`Neighbor::Edge`].
    /// - Two entries: they are wired to each other along the single direction given by
    ///   [`relative_position`]; every other slot is an edge.
    /// - Three or more: a vertical pass fills `up`/`down` and a horizontal pass fills
    ///   `left`/`right`, each choosing the nearest candidate via [`is_nearer`]. Slots
    ///   that stay unset after both passes become edges.
    ///
    /// The result depends only on the geometry and order of the enabled entries, so
    /// building twice from the same input yields equal tables.
    #[must_use]
    pub fn build(entries: &[FocusEntry<K>]) -> Self {
        let nodes: Vec<&FocusEntry<K>> = entries.iter().filter(|e| e.enabled).collect();
        let mut slots = HashMap::with_capacity(nodes.len());

        match nodes.as_slice() {
            [] => {}
            [only] => {
                slots.insert(only.id, Neighbors::edges());
            }
            [a, b] => {
                let direction = relative_position(&a.rect, &b.rect);
                let mut na = Neighbors::edges();
                na.set(direction, Neighbor::Node(b.id));
                let mut nb = Neighbors::edges();
                nb.set(direction.opposite(), Neighbor::Node(a.id));
                slots.insert(a.id, na);
                slots.insert(b.id, nb);
            }
            _ => {
                let rects: Vec<Rect> = nodes.iter().map(|e| e.rect).collect();
                let mut scratch: Vec<Neighbors<usize>> = (0..rects.len())
                    .map(|_| Neighbors::unset())
                    .collect();
                vertical_pass(&rects, &mut scratch);
                horizontal_pass(&rects, &mut scratch);
                for (node, mut neighbors) in nodes.iter().zip(scratch) {
                    neighbors.close_unset();
                    slots.insert(node.id, neighbors.map(|i| nodes[i].id));
                }
            }
        }

        tracing::trace!(elements = slots.len(), "built adjacency table");
        Self { slots }
    }

    /// Number of elements in the table.
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Returns `true` if the table holds no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Returns `true` if `id` was part of the build.
    #[must_use]
    pub fn contains(&self, id: &K) -> bool {
        self.slots.contains_key(id)
    }

    /// All four slots of `id`, if it was part of the build.
    #[must_use]
    pub fn get(&self, id: &K) -> Option<&Neighbors<K>> {
        self.slots.get(id)
    }

    /// The neighbor of `id` in `direction`.
    ///
    /// Unknown ids yield [`Neighbor::Unset`].
    #[must_use]
    pub fn neighbor(&self, id: &K, direction: Direction) -> Neighbor<K> {
        self.slots
            .get(id)
            .map_or(Neighbor::Unset, |n| n.get(direction))
    }

    /// Iterate over every element and its slots, in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&K, &Neighbors<K>)> + '_ {
        self.slots.iter()
    }
}

/// Decide whether `candidate` beats the current `best` for the slot `direction` of `from`.
///
/// - An unset slot is always replaced.
/// - An edge is never displaced.
/// - Otherwise the candidate whose facing edge is closest along the direction axis wins:
///   the smaller top edge for `Down`, the larger bottom edge for `Up`, the smaller left
///   edge for `Right`, the larger right edge for `Left`.
/// - On an exact tie, the candidate whose facing-edge midpoint is closer to the anchor
///   corner of `from` wins. Anchors are the top-right corner for `Right`, the top-left
///   corner for `Left` and `Up`, and the bottom-left corner for `Down`.
/// - On an exact distance tie the incumbent stays, so the first candidate in scan order
///   keeps the slot.
///
/// ```
/// use kurbo::Rect;
/// use waypoint_adjacency::{Direction, Neighbor, is_nearer};
///
/// let from = Rect::new(0.0, 0.0, 10.0, 40.0);
/// let near = Rect::new(20.0, 0.0, 30.0, 10.0);
/// let far = Rect::new(20.0, 25.0, 30.0, 35.0);
/// assert!(is_nearer(&near, Neighbor::Node(far), Direction::Right, &from));
/// assert!(!is_nearer(&far, Neighbor::Node(near), Direction::Right, &from));
/// assert!(!is_nearer(&near, Neighbor::Edge, Direction::Right, &from));
/// ```
#[must_use]
pub fn is_nearer(
    candidate: &Rect,
    best: Neighbor<Rect>,
    direction: Direction,
    from: &Rect,
) -> bool {
    let best = match best {
        Neighbor::Unset => return true,
        Neighbor::Edge => return false,
        Neighbor::Node(rect) => rect,
    };

    let leading = match direction {
        Direction::Down => candidate.y0.total_cmp(&best.y0),
        Direction::Up => best.y1.total_cmp(&candidate.y1),
        Direction::Right => candidate.x0.total_cmp(&best.x0),
        Direction::Left => best.x1.total_cmp(&candidate.x1),
    };

    match leading {
        Ordering::Less => true,
        Ordering::Greater => false,
        Ordering::Equal => {
            let anchor = anchor(from, direction);
            let d_candidate = (facing_midpoint(candidate, direction) - anchor).hypot2();
            let d_best = (facing_midpoint(&best, direction) - anchor).hypot2();
            d_candidate < d_best
        }
    }
}

/// Order ids top-to-bottom using the same ordering as the vertical pass.
///
/// Disabled entries are skipped. Useful for picking an initial focus target.
#[must_use]
pub fn vertical_order<K: Copy>(entries: &[FocusEntry<K>]) -> Vec<K> {
    let mut enabled: Vec<&FocusEntry<K>> = entries.iter().filter(|e| e.enabled).collect();
    enabled.sort_by(|a, b| compare_vertical(&a.rect, &b.rect));
    enabled.into_iter().map(|e| e.id).collect()
}

fn anchor(from: &Rect, direction: Direction) -> Point {
    match direction {
        Direction::Right => Point::new(from.x1, from.y0),
        Direction::Left | Direction::Up => Point::new(from.x0, from.y0),
        Direction::Down => Point::new(from.x0, from.y1),
    }
}

/// Midpoint of the edge of `rect` that faces back toward the origin of a move.
fn facing_midpoint(rect: &Rect, direction: Direction) -> Point {
    let c = rect.center();
    match direction {
        Direction::Right => Point::new(rect.x0, c.y),
        Direction::Left => Point::new(rect.x1, c.y),
        Direction::Down => Point::new(c.x, rect.y0),
        Direction::Up => Point::new(c.x, rect.y1),
    }
}

// Top edge, then right edge.
fn compare_vertical(a: &Rect, b: &Rect) -> Ordering {
    a.y0.total_cmp(&b.y0).then_with(|| a.x1.total_cmp(&b.x1))
}

// Left edge, then bottom edge.
fn compare_horizontal(a: &Rect, b: &Rect) -> Ordering {
    a.x0.total_cmp(&b.x0).then_with(|| a.y1.total_cmp(&b.y1))
}

fn offer(
    rects: &[Rect],
    slots: &mut [Neighbors<usize>],
    from: usize,
    candidate: usize,
    direction: Direction,
) {
    let best = slots[from].get(direction).map(|i| rects[i]);
    if is_nearer(&rects[candidate], best, direction, &rects[from]) {
        slots[from].set(direction, Neighbor::Node(candidate));
    }
}

fn sorted_indices(rects: &[Rect], cmp: fn(&Rect, &Rect) -> Ordering) -> Vec<usize> {
    let mut order: Vec<usize> = (0..rects.len()).collect();
    // Stable: exact geometric ties keep input order.
    order.sort_by(|&a, &b| cmp(&rects[a], &rects[b]));
    order
}

fn vertical_pass(rects: &[Rect], slots: &mut [Neighbors<usize>]) {
    let order = sorted_indices(rects, compare_vertical);
    for (pos, &i) in order.iter().enumerate() {
        // Every later element is considered, not only the next row, so a misaligned
        // element directly after `i` in sort order cannot hide an aligned one.
        for &j in &order[pos + 1..] {
            if relative_position(&rects[i], &rects[j]) != Direction::Down {
                continue;
            }
            offer(rects, slots, i, j, Direction::Down);
            offer(rects, slots, j, i, Direction::Up);
        }
    }
}

fn horizontal_pass(rects: &[Rect], slots: &mut [Neighbors<usize>]) {
    let order = sorted_indices(rects, compare_horizontal);
    for (pos, &i) in order.iter().enumerate() {
        let rest = &order[pos + 1..];
        let Some(first) = rest
            .iter()
            .position(|&j| relative_position(&rects[i], &rects[j]) == Direction::Right)
        else {
            continue;
        };
        // The first candidate fixes the column; anything stacked in the same column
        // competes with it.
        let column = rects[rest[first]].x0;
        for &j in rest[first..]
            .iter()
            .take_while(|&&j| rects[j].x0 == column)
        {
            if relative_position(&rects[i], &rects[j]) != Direction::Right {
                continue;
            }
            offer(rects, slots, i, j, Direction::Right);
            offer(rects, slots, j, i, Direction::Left);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    fn entry(id: u32, x0: f64, y0: f64, x1: f64, y1: f64) -> FocusEntry<u32> {
        FocusEntry::new(id, Rect::new(x0, y0, x1, y1))
    }

    #[test]
    fn empty_input_builds_empty_table() {
        let table = AdjacencyTable::<u32>::build(&[]);
        assert!(table.is_empty());
        assert_eq!(table.neighbor(&1, Direction::Up), Neighbor::Unset);
    }

    #[test]
    fn single_element_is_surrounded_by_edges() {
        let table = AdjacencyTable::build(&[entry(1, 0.0, 0.0, 10.0, 10.0)]);
        assert_eq!(table.get(&1), Some(&Neighbors::edges()));
    }

    #[test]
    fn two_stacked_elements_link_vertically() {
        let entries = vec![
            entry(1, 0.0, 0.0, 10.0, 10.0),
            entry(2, 0.0, 20.0, 10.0, 30.0),
        ];
        let table = AdjacencyTable::build(&entries);
        assert_eq!(table.neighbor(&1, Direction::Down), Neighbor::Node(2));
        assert_eq!(table.neighbor(&2, Direction::Up), Neighbor::Node(1));
        for id in [1, 2] {
            assert!(table.neighbor(&id, Direction::Left).is_edge());
            assert!(table.neighbor(&id, Direction::Right).is_edge());
        }
        assert!(table.neighbor(&1, Direction::Up).is_edge());
        assert!(table.neighbor(&2, Direction::Down).is_edge());
    }

    #[test]
    fn two_diagonal_elements_collapse_to_vertical_axis() {
        let entries = vec![
            entry(1, 0.0, 0.0, 10.0, 10.0),
            entry(2, 50.0, 50.0, 60.0, 60.0),
        ];
        let table = AdjacencyTable::build(&entries);
        assert_eq!(table.neighbor(&1, Direction::Down), Neighbor::Node(2));
        assert_eq!(table.neighbor(&2, Direction::Up), Neighbor::Node(1));
        assert!(table.neighbor(&1, Direction::Right).is_edge());
        assert!(table.neighbor(&2, Direction::Left).is_edge());
    }

    #[test]
    fn disabled_entries_are_excluded() {
        let mut hidden = entry(2, 0.0, 20.0, 10.0, 30.0);
        hidden.enabled = false;
        let entries = vec![entry(1, 0.0, 0.0, 10.0, 10.0), hidden];
        let table = AdjacencyTable::build(&entries);
        assert!(!table.contains(&2));
        assert_eq!(table.get(&1), Some(&Neighbors::edges()));
    }

    #[test]
    fn two_by_two_grid_links_all_sides() {
        // 1 2
        // 3 4
        let entries = vec![
            entry(1, 0.0, 0.0, 10.0, 10.0),
            entry(2, 20.0, 0.0, 30.0, 10.0),
            entry(3, 0.0, 20.0, 10.0, 30.0),
            entry(4, 20.0, 20.0, 30.0, 30.0),
        ];
        let table = AdjacencyTable::build(&entries);

        assert_eq!(table.neighbor(&1, Direction::Right), Neighbor::Node(2));
        assert_eq!(table.neighbor(&1, Direction::Down), Neighbor::Node(3));
        assert!(table.neighbor(&1, Direction::Up).is_edge());
        assert!(table.neighbor(&1, Direction::Left).is_edge());

        assert_eq!(table.neighbor(&2, Direction::Left), Neighbor::Node(1));
        assert_eq!(table.neighbor(&2, Direction::Down), Neighbor::Node(4));
        assert!(table.neighbor(&2, Direction::Right).is_edge());

        assert_eq!(table.neighbor(&3, Direction::Up), Neighbor::Node(1));
        assert_eq!(table.neighbor(&3, Direction::Right), Neighbor::Node(4));
        assert!(table.neighbor(&3, Direction::Down).is_edge());

        assert_eq!(table.neighbor(&4, Direction::Up), Neighbor::Node(2));
        assert_eq!(table.neighbor(&4, Direction::Left), Neighbor::Node(3));
        assert!(table.neighbor(&4, Direction::Right).is_edge());
        assert!(table.neighbor(&4, Direction::Down).is_edge());
    }

    #[test]
    fn vertical_column_picks_adjacent_rows() {
        let entries = vec![
            entry(3, 0.0, 40.0, 10.0, 50.0),
            entry(1, 0.0, 0.0, 10.0, 10.0),
            entry(2, 0.0, 20.0, 10.0, 30.0),
        ];
        let table = AdjacencyTable::build(&entries);
        assert_eq!(table.neighbor(&1, Direction::Down), Neighbor::Node(2));
        assert_eq!(table.neighbor(&2, Direction::Down), Neighbor::Node(3));
        assert_eq!(table.neighbor(&3, Direction::Up), Neighbor::Node(2));
        assert_eq!(table.neighbor(&2, Direction::Up), Neighbor::Node(1));
        assert!(table.neighbor(&1, Direction::Up).is_edge());
        assert!(table.neighbor(&3, Direction::Down).is_edge());
    }

    #[test]
    fn misaligned_element_does_not_hide_a_later_row() {
        // 2 sorts right after 1 but overlaps it vertically; 3 is still reached.
        let entries = vec![
            entry(1, 0.0, 0.0, 10.0, 10.0),
            entry(2, 20.0, 5.0, 30.0, 15.0),
            entry(3, 0.0, 30.0, 10.0, 40.0),
        ];
        let table = AdjacencyTable::build(&entries);
        assert_eq!(table.neighbor(&1, Direction::Down), Neighbor::Node(3));
        assert_eq!(table.neighbor(&2, Direction::Down), Neighbor::Node(3));
        assert_eq!(table.neighbor(&1, Direction::Right), Neighbor::Node(2));
        assert_eq!(table.neighbor(&2, Direction::Left), Neighbor::Node(1));
    }

    #[test]
    fn stacked_column_candidates_break_ties_by_anchor_distance() {
        // A tall element with two stacked buttons in the column to its right.
        let entries = vec![
            entry(1, 0.0, 0.0, 10.0, 40.0),
            entry(3, 20.0, 25.0, 30.0, 35.0),
            entry(2, 20.0, 0.0, 30.0, 10.0),
        ];
        let table = AdjacencyTable::build(&entries);
        // Measured from the top-right corner, the upper button is nearer.
        assert_eq!(table.neighbor(&1, Direction::Right), Neighbor::Node(2));
        // Both buttons lead back to the tall element.
        assert_eq!(table.neighbor(&2, Direction::Left), Neighbor::Node(1));
        assert_eq!(table.neighbor(&3, Direction::Left), Neighbor::Node(1));
        assert_eq!(table.neighbor(&2, Direction::Down), Neighbor::Node(3));
    }

    #[test]
    fn exact_distance_tie_keeps_first_in_scan_order() {
        let from = Rect::new(0.0, 0.0, 10.0, 10.0);
        let a = Rect::new(20.0, 0.0, 30.0, 10.0);
        let b = a;
        assert!(!is_nearer(&b, Neighbor::Node(a), Direction::Right, &from));
        assert!(is_nearer(&b, Neighbor::Unset, Direction::Right, &from));
    }

    #[test]
    fn edge_is_never_displaced() {
        let from = Rect::new(0.0, 0.0, 10.0, 10.0);
        let below = Rect::new(0.0, 20.0, 10.0, 30.0);
        assert!(!is_nearer(&below, Neighbor::Edge, Direction::Down, &from));
    }

    #[test]
    fn leading_edge_wins_over_distance() {
        let from = Rect::new(0.0, 0.0, 10.0, 10.0);
        // Closer row but far off to the side.
        let offset = Rect::new(100.0, 20.0, 110.0, 30.0);
        let aligned = Rect::new(0.0, 21.0, 10.0, 31.0);
        assert!(is_nearer(&offset, Neighbor::Node(aligned), Direction::Down, &from));
        // Up compares bottom edges: the larger one is nearer.
        let from = Rect::new(0.0, 50.0, 10.0, 60.0);
        let high = Rect::new(0.0, 0.0, 10.0, 10.0);
        let low = Rect::new(0.0, 20.0, 10.0, 30.0);
        assert!(is_nearer(&low, Neighbor::Node(high), Direction::Up, &from));
        assert!(!is_nearer(&high, Neighbor::Node(low), Direction::Up, &from));
    }

    #[test]
    fn build_is_idempotent() {
        let entries = vec![
            entry(1, 0.0, 0.0, 100.0, 10.0),
            entry(2, 0.0, 20.0, 40.0, 30.0),
            entry(3, 60.0, 20.0, 100.0, 30.0),
            entry(4, 0.0, 40.0, 100.0, 90.0),
            entry(5, 0.0, 100.0, 30.0, 110.0),
            entry(6, 35.0, 100.0, 65.0, 110.0),
            entry(7, 70.0, 100.0, 100.0, 110.0),
        ];
        let first = AdjacencyTable::build(&entries);
        let second = AdjacencyTable::build(&entries);
        assert_eq!(first, second);
    }

    #[test]
    fn every_slot_is_computed_and_live() {
        let entries = vec![
            entry(1, 0.0, 0.0, 100.0, 10.0),
            entry(2, 0.0, 20.0, 40.0, 30.0),
            entry(3, 60.0, 20.0, 100.0, 30.0),
            entry(4, 0.0, 40.0, 100.0, 90.0),
        ];
        let table = AdjacencyTable::build(&entries);
        assert_eq!(table.len(), 4);
        for (_, neighbors) in table.iter() {
            for d in Direction::ALL {
                match neighbors.get(d) {
                    Neighbor::Unset => panic!("slot left unset"),
                    Neighbor::Edge => {}
                    Neighbor::Node(id) => assert!(table.contains(&id)),
                }
            }
        }
    }

    #[test]
    fn vertical_order_sorts_top_then_right_edge() {
        let entries = vec![
            entry(3, 0.0, 20.0, 10.0, 30.0),
            entry(2, 20.0, 0.0, 30.0, 10.0),
            entry(1, 0.0, 0.0, 10.0, 10.0),
        ];
        assert_eq!(vertical_order(&entries), vec![1, 2, 3]);
    }
}
