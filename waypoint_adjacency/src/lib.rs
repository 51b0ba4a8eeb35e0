// Copyright 2025 the Waypoint Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Waypoint Adjacency: nearest-neighbor graphs for directional focus navigation.
//!
//! Given the screen-space bounds of a set of focusable elements, this crate computes for
//! every element its nearest neighbor above, below, to the left and to the right. The
//! resulting [`AdjacencyTable`] is what a D-pad or analog-stick focus cursor walks.
//!
//! The model has three pieces:
//! - **Candidates** ([`FocusEntry`]): an id, an axis-aligned [`kurbo::Rect`] in a shared
//!   coordinate space (y grows downward), and an `enabled` flag computed by the host.
//! - **Slots** ([`Neighbor`] / [`Neighbors`]): each direction is either another element,
//!   the [`Neighbor::Edge`] sentinel ("nothing this way"), or [`Neighbor::Unset`]
//!   ("not computed"). Tables produced by [`AdjacencyTable::build`] never contain unset
//!   slots.
//! - **Rules**: [`relative_position`] classifies one box relative to another, preferring
//!   vertical separation; [`is_nearer`] decides which of two candidates is the closer
//!   neighbor.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::Rect;
//! use waypoint_adjacency::{AdjacencyTable, Direction, FocusEntry, Neighbor};
//!
//! // Two buttons side by side, and a wide one below them.
//! let entries = [
//!     FocusEntry::new(1_u32, Rect::new(0.0, 0.0, 40.0, 20.0)),
//!     FocusEntry::new(2_u32, Rect::new(60.0, 0.0, 100.0, 20.0)),
//!     FocusEntry::new(3_u32, Rect::new(0.0, 40.0, 100.0, 60.0)),
//! ];
//! let table = AdjacencyTable::build(&entries);
//!
//! assert_eq!(table.neighbor(&1, Direction::Right), Neighbor::Node(2));
//! assert_eq!(table.neighbor(&2, Direction::Down), Neighbor::Node(3));
//! assert_eq!(table.neighbor(&3, Direction::Up), Neighbor::Node(1));
//! assert_eq!(table.neighbor(&1, Direction::Up), Neighbor::Edge);
//! ```
//!
//! Tables are snapshots. When elements move, appear, or change focusability, build a new
//! table; nothing is patched in place, so a table never refers to an element that was not
//! part of its build.
//!
//! ## Features
//!
//! - `std` (default): enables `std` support for `kurbo`.
//! - `libm`: enables `no_std` + `alloc` builds that rely on `libm` for floating-point math.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod table;
mod types;

pub use table::{AdjacencyTable, is_nearer, vertical_order};
pub use types::{Direction, FocusEntry, Neighbor, Neighbors, relative_position};
