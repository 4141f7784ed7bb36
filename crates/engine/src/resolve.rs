//! Cell-type resolution.
//!
//! Two precedence schemes live here and must stay separate:
//!
//! - **Mode**: read-only outranks choice, which outranks free text. Within a
//!   mode, row, column and cell membership are OR'd with no tie-break.
//! - **Choice list**: exactly one list is picked, most specific first:
//!   cell, then row, then column, then empty.

use editgrid_core::{CellAddress, CellType};

use crate::modes::ModeRegistry;

/// Resolve the edit affordance of a cell. First match wins.
pub fn resolve_cell_type(modes: &ModeRegistry, cell: &CellAddress) -> CellType {
    if modes.readonly.covers(cell) {
        CellType::ReadOnly
    } else if modes.choice.covers(cell) {
        CellType::Choice
    } else {
        CellType::FreeText
    }
}

/// Resolve the working value list of a choice cell.
pub fn resolve_choices(modes: &ModeRegistry, cell: &CellAddress) -> Vec<String> {
    let values = &modes.choice_values;
    values
        .cells
        .get(cell)
        .or_else(|| values.rows.get(&cell.row))
        .or_else(|| values.columns.get(&cell.column))
        .cloned()
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn list(items: &[&str]) -> Option<Vec<String>> {
        Some(items.iter().map(|s| s.to_string()).collect())
    }

    fn cell() -> CellAddress {
        CellAddress::new("row1", "#1")
    }

    #[test]
    fn test_default_is_free_text() {
        assert_eq!(resolve_cell_type(&ModeRegistry::new(), &cell()), CellType::FreeText);
    }

    #[test]
    fn test_readonly_row_outranks_choice_cell() {
        let mut modes = ModeRegistry::new();
        modes.set_choice_cell(cell(), list(&["S1"]), true);
        modes.set_readonly_row("row1".into(), true);
        assert_eq!(resolve_cell_type(&modes, &cell()), CellType::ReadOnly);
    }

    #[test]
    fn test_each_granularity_triggers_mode() {
        let mut modes = ModeRegistry::new();
        modes.set_choice_column("#1".into(), None, true);
        assert_eq!(resolve_cell_type(&modes, &cell()), CellType::Choice);
        assert_eq!(resolve_cell_type(&modes, &CellAddress::new("row2", "#1")), CellType::Choice);
        assert_eq!(resolve_cell_type(&modes, &CellAddress::new("row1", "#2")), CellType::FreeText);

        modes.set_readonly_cell(cell(), true);
        assert_eq!(resolve_cell_type(&modes, &cell()), CellType::ReadOnly);
        assert_eq!(resolve_cell_type(&modes, &CellAddress::new("row2", "#1")), CellType::Choice);
    }

    #[test]
    fn test_choice_list_precedence() {
        let mut modes = ModeRegistry::new();
        modes.set_choice_column("#1".into(), list(&["col"]), true);
        assert_eq!(resolve_choices(&modes, &cell()), ["col"]);

        modes.set_choice_row("row1".into(), list(&["row"]), true);
        assert_eq!(resolve_choices(&modes, &cell()), ["row"]);

        modes.set_choice_cell(cell(), list(&["cell"]), true);
        assert_eq!(resolve_choices(&modes, &cell()), ["cell"]);

        modes.set_choice_cell(cell(), None, false);
        assert_eq!(resolve_choices(&modes, &cell()), ["row"]);
    }

    #[test]
    fn test_choice_without_list_is_empty() {
        let mut modes = ModeRegistry::new();
        modes.set_choice_row("row1".into(), None, true);
        assert_eq!(resolve_cell_type(&modes, &cell()), CellType::Choice);
        assert!(resolve_choices(&modes, &cell()).is_empty());
    }

    #[test]
    fn test_list_from_other_granularity_without_own_list() {
        // Cell is choice via its cell entry (no list); the column supplies one.
        let mut modes = ModeRegistry::new();
        modes.set_choice_cell(cell(), None, true);
        modes.set_choice_column("#1".into(), list(&["c1", "c2"]), true);
        assert_eq!(resolve_choices(&modes, &cell()), ["c1", "c2"]);
    }

    // Flags: readonly row/col/cell, choice row/col/cell
    fn apply(flags: [bool; 6]) -> ModeRegistry {
        let mut modes = ModeRegistry::new();
        modes.set_readonly_row("row1".into(), flags[0]);
        modes.set_readonly_column("#1".into(), flags[1]);
        modes.set_readonly_cell(cell(), flags[2]);
        modes.set_choice_row("row1".into(), list(&["r"]), flags[3]);
        modes.set_choice_column("#1".into(), list(&["c"]), flags[4]);
        modes.set_choice_cell(cell(), list(&["x"]), flags[5]);
        modes
    }

    proptest! {
        #[test]
        fn prop_mode_precedence(flags in proptest::array::uniform6(any::<bool>())) {
            let modes = apply(flags);
            let expected = if flags[0] || flags[1] || flags[2] {
                CellType::ReadOnly
            } else if flags[3] || flags[4] || flags[5] {
                CellType::Choice
            } else {
                CellType::FreeText
            };
            prop_assert_eq!(resolve_cell_type(&modes, &cell()), expected);
        }

        #[test]
        fn prop_list_precedence(flags in proptest::array::uniform6(any::<bool>())) {
            let modes = apply(flags);
            let expected: Vec<String> = if flags[5] {
                vec!["x".into()]
            } else if flags[3] {
                vec!["r".into()]
            } else if flags[4] {
                vec!["c".into()]
            } else {
                Vec::new()
            };
            prop_assert_eq!(resolve_choices(&modes, &cell()), expected);
        }
    }
}
