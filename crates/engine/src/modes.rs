//! Edit mode overrides.
//!
//! Two independent modes (read-only, choice) can each be declared at row,
//! column or cell granularity. Choice declarations may carry a value list.
//!
//! ## Stale lists
//!
//! A value list only means something while its key is in the choice set.
//! Disabling choice mode for a key drops the list too, so re-enabling it
//! without values never resurrects old choices.

use std::hash::Hash;

use editgrid_core::{CellAddress, ColumnId, RowId};
use rustc_hash::{FxHashMap, FxHashSet};

/// Membership sets for one mode at all three granularities.
#[derive(Debug, Clone, Default)]
pub(crate) struct ScopedSet {
    pub(crate) rows: FxHashSet<RowId>,
    pub(crate) columns: FxHashSet<ColumnId>,
    pub(crate) cells: FxHashSet<CellAddress>,
}

impl ScopedSet {
    /// True if the row, the column or the cell itself is a member.
    pub(crate) fn covers(&self, cell: &CellAddress) -> bool {
        self.rows.contains(&cell.row)
            || self.columns.contains(&cell.column)
            || self.cells.contains(cell)
    }

    fn is_empty(&self) -> bool {
        self.rows.is_empty() && self.columns.is_empty() && self.cells.is_empty()
    }
}

/// Choice value lists keyed per granularity.
#[derive(Debug, Clone, Default)]
pub(crate) struct ScopedValues {
    pub(crate) rows: FxHashMap<RowId, Vec<String>>,
    pub(crate) columns: FxHashMap<ColumnId, Vec<String>>,
    pub(crate) cells: FxHashMap<CellAddress, Vec<String>>,
}

fn toggle<K: Hash + Eq>(set: &mut FxHashSet<K>, key: K, enabled: bool) {
    if enabled {
        set.insert(key);
    } else {
        set.remove(&key);
    }
}

fn toggle_choice<K: Hash + Eq + Clone>(
    set: &mut FxHashSet<K>,
    lists: &mut FxHashMap<K, Vec<String>>,
    key: K,
    values: Option<Vec<String>>,
    enabled: bool,
) {
    if enabled {
        if let Some(values) = values {
            lists.insert(key.clone(), values);
        }
        set.insert(key);
    } else {
        lists.remove(&key);
        set.remove(&key);
    }
}

/// Per-grid edit mode configuration.
#[derive(Debug, Clone, Default)]
pub struct ModeRegistry {
    pub(crate) readonly: ScopedSet,
    pub(crate) choice: ScopedSet,
    pub(crate) choice_values: ScopedValues,
}

impl ModeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    // =========================================================================
    // Read-only
    // =========================================================================

    pub fn set_readonly_row(&mut self, row: RowId, readonly: bool) {
        toggle(&mut self.readonly.rows, row, readonly);
    }

    pub fn set_readonly_column(&mut self, column: ColumnId, readonly: bool) {
        toggle(&mut self.readonly.columns, column, readonly);
    }

    pub fn set_readonly_cell(&mut self, cell: CellAddress, readonly: bool) {
        toggle(&mut self.readonly.cells, cell, readonly);
    }

    pub fn is_readonly_row(&self, row: &RowId) -> bool {
        self.readonly.rows.contains(row)
    }

    pub fn is_readonly_column(&self, column: &ColumnId) -> bool {
        self.readonly.columns.contains(column)
    }

    pub fn is_readonly_cell(&self, cell: &CellAddress) -> bool {
        self.readonly.cells.contains(cell)
    }

    // =========================================================================
    // Choice
    // =========================================================================

    /// Enable or disable choice mode for a row.
    ///
    /// `values` replaces the row's list when enabling; `None` keeps any list
    /// already stored. Disabling always drops the list.
    pub fn set_choice_row(&mut self, row: RowId, values: Option<Vec<String>>, enabled: bool) {
        toggle_choice(&mut self.choice.rows, &mut self.choice_values.rows, row, values, enabled);
    }

    pub fn set_choice_column(&mut self, column: ColumnId, values: Option<Vec<String>>, enabled: bool) {
        toggle_choice(
            &mut self.choice.columns,
            &mut self.choice_values.columns,
            column,
            values,
            enabled,
        );
    }

    pub fn set_choice_cell(&mut self, cell: CellAddress, values: Option<Vec<String>>, enabled: bool) {
        toggle_choice(&mut self.choice.cells, &mut self.choice_values.cells, cell, values, enabled);
    }

    pub fn is_choice_row(&self, row: &RowId) -> bool {
        self.choice.rows.contains(row)
    }

    pub fn is_choice_column(&self, column: &ColumnId) -> bool {
        self.choice.columns.contains(column)
    }

    pub fn is_choice_cell(&self, cell: &CellAddress) -> bool {
        self.choice.cells.contains(cell)
    }

    pub fn row_choices(&self, row: &RowId) -> Option<&[String]> {
        self.choice_values.rows.get(row).map(Vec::as_slice)
    }

    pub fn column_choices(&self, column: &ColumnId) -> Option<&[String]> {
        self.choice_values.columns.get(column).map(Vec::as_slice)
    }

    pub fn cell_choices(&self, cell: &CellAddress) -> Option<&[String]> {
        self.choice_values.cells.get(cell).map(Vec::as_slice)
    }

    /// True if no override of any kind is declared.
    pub fn is_empty(&self) -> bool {
        self.readonly.is_empty() && self.choice.is_empty()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn values(items: &[&str]) -> Option<Vec<String>> {
        Some(items.iter().map(|s| s.to_string()).collect())
    }

    #[test]
    fn test_readonly_toggles() {
        let mut reg = ModeRegistry::new();
        let cell = CellAddress::new("row1", "#1");

        reg.set_readonly_row("row1".into(), true);
        reg.set_readonly_column("#2".into(), true);
        reg.set_readonly_cell(cell.clone(), true);
        assert!(reg.is_readonly_row(&"row1".into()));
        assert!(reg.is_readonly_column(&"#2".into()));
        assert!(reg.is_readonly_cell(&cell));

        reg.set_readonly_row("row1".into(), false);
        reg.set_readonly_column("#2".into(), false);
        reg.set_readonly_cell(cell.clone(), false);
        assert!(!reg.is_readonly_row(&"row1".into()));
        assert!(!reg.is_readonly_column(&"#2".into()));
        assert!(!reg.is_readonly_cell(&cell));
        assert!(reg.is_empty());
    }

    #[test]
    fn test_disable_unknown_key_is_noop() {
        let mut reg = ModeRegistry::new();
        reg.set_readonly_row("ghost".into(), false);
        reg.set_choice_column("#9".into(), None, false);
        reg.set_choice_cell(CellAddress::new("ghost", "#1"), values(&["x"]), false);
        assert!(reg.is_empty());
        assert!(reg.cell_choices(&CellAddress::new("ghost", "#1")).is_none());
    }

    #[test]
    fn test_enable_twice_keeps_latest_list() {
        let mut reg = ModeRegistry::new();
        reg.set_choice_row("row1".into(), values(&["a", "b"]), true);
        reg.set_choice_row("row1".into(), values(&["c"]), true);
        assert_eq!(reg.row_choices(&"row1".into()).unwrap(), ["c"]);
    }

    #[test]
    fn test_enable_without_values_keeps_existing_list() {
        let mut reg = ModeRegistry::new();
        reg.set_choice_column("#1".into(), values(&["x", "y"]), true);
        reg.set_choice_column("#1".into(), None, true);
        assert_eq!(reg.column_choices(&"#1".into()).unwrap(), ["x", "y"]);
    }

    #[test]
    fn test_disable_choice_drops_list() {
        let mut reg = ModeRegistry::new();
        let cell = CellAddress::new("row1", "#1");

        reg.set_choice_cell(cell.clone(), values(&["S1", "S2"]), true);
        assert!(reg.is_choice_cell(&cell));
        assert_eq!(reg.cell_choices(&cell).unwrap(), ["S1", "S2"]);

        reg.set_choice_cell(cell.clone(), None, false);
        assert!(!reg.is_choice_cell(&cell));
        assert!(reg.cell_choices(&cell).is_none());

        // Re-enabling without values must not bring the old list back
        reg.set_choice_cell(cell.clone(), None, true);
        assert!(reg.is_choice_cell(&cell));
        assert!(reg.cell_choices(&cell).is_none());
    }

    #[test]
    fn test_modes_are_independent() {
        let mut reg = ModeRegistry::new();
        reg.set_readonly_row("row1".into(), true);
        reg.set_choice_row("row1".into(), values(&["a"]), true);

        reg.set_readonly_row("row1".into(), false);
        assert!(reg.is_choice_row(&"row1".into()));
        assert_eq!(reg.row_choices(&"row1".into()).unwrap(), ["a"]);
    }

    #[test]
    fn test_clear_drops_modes_and_lists() {
        let mut reg = ModeRegistry::new();
        let cell = CellAddress::new("row2", "#3");
        reg.set_readonly_column("#1".into(), true);
        reg.set_choice_row("row1".into(), values(&["a"]), true);
        reg.set_choice_cell(cell.clone(), values(&["x"]), true);

        reg.clear();
        assert!(reg.is_empty());
        assert!(!reg.is_readonly_column(&"#1".into()));
        assert!(!reg.is_choice_row(&"row1".into()));
        assert!(reg.row_choices(&"row1".into()).is_none());
        assert!(reg.cell_choices(&cell).is_none());
    }
}
