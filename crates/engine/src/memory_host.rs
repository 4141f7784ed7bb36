//! In-memory `GridHost` for headless use and tests.
//!
//! Lays rows out top to bottom under a heading strip, every column the same
//! width, and records each mutating host call in a journal so tests can
//! check what the grid asked the widget to do, and in what order.

use editgrid_core::{CellRect, ColumnId, RowId};
use rustc_hash::FxHashMap;

use crate::editor::{EditorKind, TransientEditor};
use crate::host::{ColumnOptions, GridHost, Region, ScrollCommand, ScrollUnit};

/// A mutating call the grid made on the host.
#[derive(Debug, Clone, PartialEq)]
pub enum HostCall {
    SetColumns(Vec<ColumnId>),
    SetColumnOptions(ColumnId, ColumnOptions),
    SetRowValues(RowId, Vec<String>),
    PlaceEditor { kind: EditorKind, rect: CellRect, text: String, choices: Vec<String> },
    HideEditor(EditorKind),
    FocusEditor(EditorKind),
    YView(ScrollCommand),
    XView(ScrollCommand),
}

#[derive(Debug, Clone)]
pub struct MemoryHost {
    rows: Vec<(RowId, Vec<String>)>,
    columns: Vec<ColumnId>,
    column_options: FxHashMap<ColumnId, ColumnOptions>,
    pub heading_height: u32,
    pub row_height: u32,
    pub column_width: u32,
    /// Rows that fit in the viewport. `None` shows every row.
    pub viewport_rows: Option<usize>,
    /// Index of the first visible row
    top_row: usize,
    /// Horizontal scroll offset, in columns
    left_column: usize,
    /// When false, `cell_bounds` always reports unavailable.
    pub mapped: bool,
    calls: Vec<HostCall>,
}

impl Default for MemoryHost {
    fn default() -> Self {
        Self {
            rows: Vec::new(),
            columns: Vec::new(),
            column_options: FxHashMap::default(),
            heading_height: 20,
            row_height: 20,
            column_width: 100,
            viewport_rows: None,
            top_row: 0,
            left_column: 0,
            mapped: true,
            calls: Vec::new(),
        }
    }
}

impl MemoryHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a row. Replaces the values if the id already exists.
    pub fn insert_row(&mut self, id: impl Into<RowId>, values: &[&str]) {
        let id = id.into();
        let values: Vec<String> = values.iter().map(|s| s.to_string()).collect();
        match self.rows.iter_mut().find(|(r, _)| *r == id) {
            Some((_, existing)) => *existing = values,
            None => self.rows.push((id, values)),
        }
    }

    pub fn delete_row(&mut self, id: &RowId) {
        self.rows.retain(|(r, _)| r != id);
        self.top_row = self.top_row.min(self.max_top_row());
    }

    pub fn top_row(&self) -> usize {
        self.top_row
    }

    pub fn left_column(&self) -> usize {
        self.left_column
    }

    pub fn column_options(&self, column: &ColumnId) -> Option<ColumnOptions> {
        self.column_options.get(column).copied()
    }

    pub fn calls(&self) -> &[HostCall] {
        &self.calls
    }

    pub fn clear_calls(&mut self) {
        self.calls.clear();
    }

    fn visible_rows(&self) -> usize {
        self.viewport_rows.unwrap_or(self.rows.len())
    }

    fn max_top_row(&self) -> usize {
        self.rows.len().saturating_sub(self.visible_rows())
    }

    fn row_index(&self, row: &RowId) -> Option<usize> {
        self.rows.iter().position(|(r, _)| r == row)
    }

    fn scroll(offset: usize, max: usize, command: ScrollCommand, page: usize) -> usize {
        let target = match command {
            ScrollCommand::MoveTo(fraction) => {
                let total = max as f64;
                (fraction.clamp(0.0, 1.0) * total).round() as i64
            }
            ScrollCommand::Scroll { amount, unit } => {
                let step = match unit {
                    ScrollUnit::Units => 1,
                    ScrollUnit::Pages => page.max(1) as i64,
                };
                offset as i64 + amount as i64 * step
            }
        };
        target.clamp(0, max as i64) as usize
    }
}

impl GridHost for MemoryHost {
    fn row_ids(&self) -> Vec<RowId> {
        self.rows.iter().map(|(r, _)| r.clone()).collect()
    }

    fn row_exists(&self, row: &RowId) -> bool {
        self.row_index(row).is_some()
    }

    fn row_values(&self, row: &RowId) -> Option<Vec<String>> {
        self.rows.iter().find(|(r, _)| r == row).map(|(_, v)| v.clone())
    }

    fn set_row_values(&mut self, row: &RowId, values: Vec<String>) {
        self.calls.push(HostCall::SetRowValues(row.clone(), values.clone()));
        if let Some((_, existing)) = self.rows.iter_mut().find(|(r, _)| r == row) {
            *existing = values;
        }
    }

    fn set_columns(&mut self, columns: &[ColumnId]) {
        self.calls.push(HostCall::SetColumns(columns.to_vec()));
        self.columns = columns.to_vec();
        self.left_column = self.left_column.min(self.columns.len().saturating_sub(1));
    }

    fn set_column_options(&mut self, column: &ColumnId, options: ColumnOptions) {
        self.calls.push(HostCall::SetColumnOptions(column.clone(), options));
        self.column_options.insert(column.clone(), options);
    }

    fn cell_bounds(&self, row: &RowId, column: &ColumnId) -> Option<CellRect> {
        if !self.mapped {
            return None;
        }
        let row_index = self.row_index(row)?;
        let col_index = column.index().ok()?;
        if col_index >= self.columns.len() || col_index < self.left_column {
            return None;
        }
        if row_index < self.top_row || row_index >= self.top_row + self.visible_rows() {
            return None;
        }

        let x = (col_index - self.left_column) as u32 * self.column_width;
        let y = self.heading_height + (row_index - self.top_row) as u32 * self.row_height;
        Some(CellRect::new(x as i32, y as i32, self.column_width, self.row_height))
    }

    fn identify_region(&self, x: i32, y: i32) -> Region {
        if x < 0 || y < 0 {
            return Region::Nothing;
        }
        if (y as u32) < self.heading_height {
            return if x as u32 % self.column_width == 0 && x > 0 {
                Region::Separator
            } else {
                Region::Heading
            };
        }
        match (self.identify_row(y), self.identify_column(x)) {
            (Some(_), Some(_)) => Region::Cell,
            _ => Region::Nothing,
        }
    }

    fn identify_row(&self, y: i32) -> Option<RowId> {
        let below_heading = y.checked_sub(self.heading_height as i32)?;
        if below_heading < 0 {
            return None;
        }
        let offset = below_heading as usize / self.row_height.max(1) as usize;
        if offset >= self.visible_rows() {
            return None;
        }
        self.rows.get(self.top_row + offset).map(|(r, _)| r.clone())
    }

    fn identify_column(&self, x: i32) -> Option<ColumnId> {
        if x < 0 {
            return None;
        }
        let index = self.left_column + x as usize / self.column_width.max(1) as usize;
        (index < self.columns.len()).then(|| ColumnId::from_index(index))
    }

    fn yview(&mut self, command: ScrollCommand) {
        self.calls.push(HostCall::YView(command));
        let page = self.visible_rows();
        self.top_row = Self::scroll(self.top_row, self.max_top_row(), command, page);
    }

    fn xview(&mut self, command: ScrollCommand) {
        self.calls.push(HostCall::XView(command));
        let max = self.columns.len().saturating_sub(1);
        self.left_column = Self::scroll(self.left_column, max, command, 1);
    }

    fn place_editor(&mut self, editor: &TransientEditor) {
        if let Some(rect) = editor.placement() {
            self.calls.push(HostCall::PlaceEditor {
                kind: editor.kind(),
                rect,
                text: editor.text().to_string(),
                choices: editor.choices().to_vec(),
            });
        }
    }

    fn hide_editor(&mut self, kind: EditorKind) {
        self.calls.push(HostCall::HideEditor(kind));
    }

    fn focus_editor(&mut self, kind: EditorKind) {
        self.calls.push(HostCall::FocusEditor(kind));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn host() -> MemoryHost {
        let mut host = MemoryHost::new();
        host.set_columns(&["#1".into(), "#2".into(), "#3".into()]);
        host.insert_row("row1", &["A1", "B1", "C1"]);
        host.insert_row("row2", &["A2", "B2", "C2"]);
        host.insert_row("row3", &["A3", "B3", "C3"]);
        host
    }

    #[test]
    fn test_hit_testing() {
        let h = host();
        assert_eq!(h.identify_region(50, 5), Region::Heading);
        assert_eq!(h.identify_region(100, 5), Region::Separator);
        assert_eq!(h.identify_region(50, 25), Region::Cell);
        assert_eq!(h.identify_region(50, 200), Region::Nothing);
        assert_eq!(h.identify_region(350, 25), Region::Nothing);

        assert_eq!(h.identify_row(45), Some(RowId::new("row2")));
        assert_eq!(h.identify_column(250), Some(ColumnId::new("#3")));
    }

    #[test]
    fn test_cell_bounds() {
        let h = host();
        assert_eq!(
            h.cell_bounds(&"row2".into(), &"#2".into()),
            Some(CellRect::new(100, 40, 100, 20))
        );
        assert_eq!(h.cell_bounds(&"row9".into(), &"#1".into()), None);
        assert_eq!(h.cell_bounds(&"row1".into(), &"#4".into()), None);
    }

    #[test]
    fn test_scrolling_hides_rows() {
        let mut h = host();
        h.viewport_rows = Some(2);

        h.yview(ScrollCommand::units(5));
        assert_eq!(h.top_row(), 1);
        assert_eq!(h.cell_bounds(&"row1".into(), &"#1".into()), None);
        assert_eq!(
            h.cell_bounds(&"row3".into(), &"#1".into()),
            Some(CellRect::new(0, 40, 100, 20))
        );

        h.yview(ScrollCommand::MoveTo(0.0));
        assert_eq!(h.top_row(), 0);
    }

    #[test]
    fn test_journal() {
        let mut h = host();
        h.clear_calls();
        h.set_row_values(&"row1".into(), vec!["x".into()]);
        h.hide_editor(EditorKind::Text);
        assert_eq!(
            h.calls(),
            &[
                HostCall::SetRowValues("row1".into(), vec!["x".into()]),
                HostCall::HideEditor(EditorKind::Text),
            ]
        );
        assert_eq!(h.row_values(&"row1".into()).unwrap(), ["x"]);
    }
}
