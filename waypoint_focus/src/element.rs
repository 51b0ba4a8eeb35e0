// Copyright 2025 the Waypoint Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Registered elements: bounds, focusability, and the closed set of element kinds.

use kurbo::Rect;
use smallvec::SmallVec;

/// A cell inside a list container.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct IndexPath {
    /// Section index.
    pub section: usize,
    /// Row index within the section.
    pub row: usize,
}

impl IndexPath {
    /// A cell at `row` of `section`.
    #[must_use]
    pub const fn new(row: usize, section: usize) -> Self {
        Self { section, row }
    }
}

/// Rows per section of a list container.
///
/// Sections may be empty; cursor stepping skips over them.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct ListShape {
    rows: SmallVec<[usize; 4]>,
}

impl ListShape {
    /// A list whose section `i` has `rows_per_section[i]` rows.
    pub fn new(rows_per_section: impl IntoIterator<Item = usize>) -> Self {
        Self {
            rows: rows_per_section.into_iter().collect(),
        }
    }

    /// A list with a single section.
    #[must_use]
    pub fn single_section(rows: usize) -> Self {
        Self::new([rows])
    }

    /// Number of sections.
    #[must_use]
    pub fn section_count(&self) -> usize {
        self.rows.len()
    }

    /// Number of rows in `section`; zero for sections that do not exist.
    #[must_use]
    pub fn row_count(&self, section: usize) -> usize {
        self.rows.get(section).copied().unwrap_or(0)
    }

    /// Returns `true` if the list has no rows at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.iter().all(|&r| r == 0)
    }

    /// Returns `true` if `cell` addresses an existing row.
    #[must_use]
    pub fn contains(&self, cell: IndexPath) -> bool {
        cell.row < self.row_count(cell.section)
    }

    /// Row 0 of the first non-empty section.
    #[must_use]
    pub fn first_cell(&self) -> Option<IndexPath> {
        let section = self.rows.iter().position(|&r| r > 0)?;
        Some(IndexPath::new(0, section))
    }

    /// Last row of the last non-empty section.
    #[must_use]
    pub fn last_cell(&self) -> Option<IndexPath> {
        let section = self.rows.iter().rposition(|&r| r > 0)?;
        Some(IndexPath::new(self.rows[section] - 1, section))
    }

    /// The cell after `cell`, rolling into row 0 of the next non-empty section.
    ///
    /// Returns `None` at the last row of the last non-empty section.
    #[must_use]
    pub fn next_cell(&self, cell: IndexPath) -> Option<IndexPath> {
        if cell.row + 1 < self.row_count(cell.section) {
            return Some(IndexPath::new(cell.row + 1, cell.section));
        }
        let offset = self
            .rows
            .iter()
            .skip(cell.section + 1)
            .position(|&r| r > 0)?;
        Some(IndexPath::new(0, cell.section + 1 + offset))
    }

    /// The cell before `cell`, rolling into the last row of the previous non-empty section.
    ///
    /// Returns `None` at row 0 of the first non-empty section.
    #[must_use]
    pub fn prev_cell(&self, cell: IndexPath) -> Option<IndexPath> {
        if cell.row > 0 {
            let row = (cell.row - 1).min(self.row_count(cell.section).saturating_sub(1));
            return Some(IndexPath::new(row, cell.section));
        }
        let end = cell.section.min(self.rows.len());
        let section = self.rows[..end].iter().rposition(|&r| r > 0)?;
        Some(IndexPath::new(self.rows[section] - 1, section))
    }

    /// The nearest existing cell to `cell`, for lists that shrank.
    #[must_use]
    pub fn clamp(&self, cell: IndexPath) -> Option<IndexPath> {
        if self.contains(cell) {
            return Some(cell);
        }
        if cell.section < self.rows.len() && self.rows[cell.section] > 0 {
            return Some(IndexPath::new(self.rows[cell.section] - 1, cell.section));
        }
        let end = cell.section.min(self.rows.len());
        match self.rows[..end].iter().rposition(|&r| r > 0) {
            Some(section) => Some(IndexPath::new(self.rows[section] - 1, section)),
            None => self.first_cell(),
        }
    }
}

/// What a simulated tap does to an element.
///
/// The controller decides the activation from the element's [`ElementKind`]; the host
/// applies it to its own widget state.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Activation {
    /// A plain activation signal (button press, link follow).
    Generic,
    /// Flip a binary switch.
    ToggleSwitch,
    /// Increase a stepper by one step.
    IncrementStepper,
    /// Advance a page indicator by one page.
    AdvancePage,
    /// Select the next segment, wrapping after the last.
    NextSegment,
    /// Set a date picker to the current date.
    SetDateToNow,
}

/// The closed set of element kinds the controller knows how to drive.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum ElementKind {
    /// Anything without special activation semantics.
    #[default]
    Plain,
    /// A binary on/off switch.
    Switch,
    /// A numeric stepper.
    Stepper,
    /// A page indicator.
    PageIndicator,
    /// A segmented control.
    SegmentedControl,
    /// A date picker.
    DatePicker,
    /// A scrollable list with its own row cursor.
    List(ListShape),
}

impl ElementKind {
    /// Returns `true` for list containers.
    #[must_use]
    pub const fn is_container(&self) -> bool {
        matches!(self, Self::List(_))
    }

    /// Shape of a list container.
    #[must_use]
    pub fn list_shape(&self) -> Option<&ListShape> {
        match self {
            Self::List(shape) => Some(shape),
            _ => None,
        }
    }

    /// Activation fired by a simulated tap on the element itself.
    #[must_use]
    pub const fn activation(&self) -> Activation {
        match self {
            Self::Plain | Self::List(_) => Activation::Generic,
            Self::Switch => Activation::ToggleSwitch,
            Self::Stepper => Activation::IncrementStepper,
            Self::PageIndicator => Activation::AdvancePage,
            Self::SegmentedControl => Activation::NextSegment,
            Self::DatePicker => Activation::SetDateToNow,
        }
    }
}

/// A focusable element as registered by the host.
#[derive(Clone, Debug, PartialEq)]
pub struct FocusElement<K> {
    /// Stable, caller-supplied identifier.
    pub id: K,
    /// Bounds in the shared global coordinate space.
    pub rect: Rect,
    /// Whether the element can currently receive focus.
    pub focusable: bool,
    /// What kind of control this is.
    pub kind: ElementKind,
}

impl<K> FocusElement<K> {
    /// A focusable plain element.
    pub const fn new(id: K, rect: Rect) -> Self {
        Self {
            id,
            rect,
            focusable: true,
            kind: ElementKind::Plain,
        }
    }

    /// Replace the kind.
    #[must_use]
    pub fn with_kind(mut self, kind: ElementKind) -> Self {
        self.kind = kind;
        self
    }

    /// Replace the focusability flag.
    #[must_use]
    pub fn with_focusable(mut self, focusable: bool) -> Self {
        self.focusable = focusable;
        self
    }
}
