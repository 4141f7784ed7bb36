//! Interface to the list widget the editable grid is layered on.
//!
//! The host owns rows, display values, pixel geometry, hit-testing and
//! scrolling. The grid owns edit modes, the edit session and the two
//! transient editors; it tells the host when to show, hide or focus them.

use editgrid_core::{CellRect, ColumnId, RowId};

use crate::editor::{EditorKind, TransientEditor};

/// Hit-test classification of a point in the widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    /// A data cell.
    Cell,
    /// Column heading.
    Heading,
    /// Column separator between headings.
    Separator,
    /// Tree column (the `#0` column).
    Tree,
    /// Empty area below the last row or right of the last column.
    Nothing,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollUnit {
    Units,
    Pages,
}

/// Scroll request, as issued by a scrollbar or the mouse wheel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ScrollCommand {
    /// Absolute position: fraction of the content above/left of the viewport.
    MoveTo(f64),
    /// Relative scroll by `amount` units or pages. Negative scrolls up/left.
    Scroll { amount: i32, unit: ScrollUnit },
}

impl ScrollCommand {
    pub fn units(amount: i32) -> Self {
        Self::Scroll { amount, unit: ScrollUnit::Units }
    }

    pub fn pages(amount: i32) -> Self {
        Self::Scroll { amount, unit: ScrollUnit::Pages }
    }
}

/// Per-column display options forwarded to the host.
///
/// `None` fields leave the host's current setting untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ColumnOptions {
    pub width: Option<u32>,
    pub min_width: Option<u32>,
    pub stretch: Option<bool>,
}

impl ColumnOptions {
    pub fn width(mut self, width: u32) -> Self {
        self.width = Some(width);
        self
    }

    pub fn min_width(mut self, min_width: u32) -> Self {
        self.min_width = Some(min_width);
        self
    }

    pub fn stretch(mut self, stretch: bool) -> Self {
        self.stretch = Some(stretch);
        self
    }
}

/// The list widget services the editable grid depends on.
pub trait GridHost {
    // Rows

    /// Live row ids, in display order.
    fn row_ids(&self) -> Vec<RowId>;

    fn row_exists(&self, row: &RowId) -> bool {
        self.row_ids().iter().any(|r| r == row)
    }

    /// Display values of a row, one per configured column.
    fn row_values(&self, row: &RowId) -> Option<Vec<String>>;

    fn set_row_values(&mut self, row: &RowId, values: Vec<String>);

    // Columns

    fn set_columns(&mut self, columns: &[ColumnId]);

    fn set_column_options(&mut self, column: &ColumnId, options: ColumnOptions);

    // Geometry and hit-testing

    /// Pixel bounds of a cell, or `None` when it is not currently laid out
    /// on screen (scrolled away, zero-sized, not yet mapped).
    fn cell_bounds(&self, row: &RowId, column: &ColumnId) -> Option<CellRect>;

    fn identify_region(&self, x: i32, y: i32) -> Region;

    fn identify_row(&self, y: i32) -> Option<RowId>;

    /// Display column under `x`, as a `#N` id.
    fn identify_column(&self, x: i32) -> Option<ColumnId>;

    // Scrolling

    fn yview(&mut self, command: ScrollCommand);

    fn xview(&mut self, command: ScrollCommand);

    // Transient editors

    /// Show `editor` at its placement with its current text (and choices).
    fn place_editor(&mut self, editor: &TransientEditor);

    fn hide_editor(&mut self, kind: EditorKind);

    fn focus_editor(&mut self, kind: EditorKind);
}
