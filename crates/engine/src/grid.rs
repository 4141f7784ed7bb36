//! The editable grid.
//!
//! `EditableGrid` wraps a host list widget and layers edit modes and an
//! in-place edit session on top of it. Pointer and editor event routing lives
//! in `interaction.rs`.

use editgrid_config::GridSettings;
use editgrid_core::{column_id_to_index, CellAddress, CellType, ColumnId, GridError, RowId};
use rustc_hash::FxHashSet;

use crate::editor::{EditorKind, Editors, TransientEditor};
use crate::events::{EventBindings, PointerEvent};
use crate::host::{ColumnOptions, GridHost};
use crate::modes::ModeRegistry;
use crate::resolve::{resolve_cell_type, resolve_choices};
use crate::session::{CommitOutcome, EditOutcome, EditSession, EditState};

/// Replacement for the grid's own double-click behavior.
pub type DoubleClickHook<H> = Box<dyn FnMut(&mut EditableGrid<H>, &PointerEvent) -> Result<(), GridError>>;

pub struct EditableGrid<H: GridHost> {
    pub(crate) host: H,
    pub(crate) settings: GridSettings,
    columns: Vec<ColumnId>,
    modes: ModeRegistry,
    state: EditState,
    editors: Editors,
    pub(crate) bindings: EventBindings,
    pub(crate) double_click_hook: Option<DoubleClickHook<H>>,
}

impl<H: GridHost> EditableGrid<H> {
    pub fn new(host: H) -> Self {
        Self::with_settings(host, GridSettings::default())
    }

    pub fn with_settings(host: H, settings: GridSettings) -> Self {
        Self::with_bindings(host, settings, EventBindings::new())
    }

    /// Wrap a host that already has pointer handlers bound.
    ///
    /// `existing` handlers keep running after the grid's own behavior.
    pub fn with_bindings(host: H, settings: GridSettings, existing: EventBindings) -> Self {
        Self {
            host,
            settings,
            columns: Vec::new(),
            modes: ModeRegistry::new(),
            state: EditState::Idle,
            editors: Editors::default(),
            bindings: existing,
            double_click_hook: None,
        }
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn into_host(self) -> H {
        self.host
    }

    pub fn settings(&self) -> &GridSettings {
        &self.settings
    }

    // =========================================================================
    // Columns
    // =========================================================================

    /// Set the display columns. Cancels any active edit.
    pub fn configure(&mut self, columns: impl IntoIterator<Item = ColumnId>) -> Result<(), GridError> {
        let columns: Vec<ColumnId> = columns.into_iter().collect();

        let mut seen = FxHashSet::default();
        for column in &columns {
            if column.is_empty() {
                return Err(GridError::InvalidColumnId(String::new()));
            }
            if !seen.insert(column) {
                return Err(GridError::DuplicateColumn(column.clone()));
            }
        }

        self.cancel_edit();
        self.host.set_columns(&columns);
        self.columns = columns;
        Ok(())
    }

    pub fn columns(&self) -> &[ColumnId] {
        &self.columns
    }

    /// Forward column options to the host. Stretch defaults to the
    /// `columns.stretchByDefault` setting when the caller leaves it unset.
    pub fn column(&mut self, column: &ColumnId, mut options: ColumnOptions) {
        if options.stretch.is_none() {
            options.stretch = Some(self.settings.stretch_columns_by_default);
        }
        self.host.set_column_options(column, options);
    }

    // =========================================================================
    // Modes
    // =========================================================================

    pub fn modes(&self) -> &ModeRegistry {
        &self.modes
    }

    pub fn set_readonly_row(&mut self, row: impl Into<RowId>, readonly: bool) {
        self.modes.set_readonly_row(row.into(), readonly);
    }

    pub fn set_readonly_column(&mut self, column: impl Into<ColumnId>, readonly: bool) {
        self.modes.set_readonly_column(column.into(), readonly);
    }

    pub fn set_readonly_cell(&mut self, cell: CellAddress, readonly: bool) {
        self.modes.set_readonly_cell(cell, readonly);
    }

    pub fn set_choice_row(&mut self, row: impl Into<RowId>, values: Option<Vec<String>>, enabled: bool) {
        self.modes.set_choice_row(row.into(), values, enabled);
    }

    pub fn set_choice_column(&mut self, column: impl Into<ColumnId>, values: Option<Vec<String>>, enabled: bool) {
        self.modes.set_choice_column(column.into(), values, enabled);
    }

    pub fn set_choice_cell(&mut self, cell: CellAddress, values: Option<Vec<String>>, enabled: bool) {
        self.modes.set_choice_cell(cell, values, enabled);
    }

    pub fn cell_type(&self, cell: &CellAddress) -> CellType {
        resolve_cell_type(&self.modes, cell)
    }

    // =========================================================================
    // Cells
    // =========================================================================

    /// True iff the column id parses, the row is live in the host, and the
    /// column index is within the configured columns.
    pub fn is_valid_cell(&self, cell: &CellAddress) -> bool {
        let Ok(index) = column_id_to_index(&cell.column) else {
            return false;
        };
        index < self.columns.len() && self.host.row_exists(&cell.row)
    }

    fn checked_index(&self, cell: &CellAddress) -> Result<usize, GridError> {
        if !self.is_valid_cell(cell) {
            return Err(GridError::InvalidCell(cell.clone()));
        }
        column_id_to_index(&cell.column)
    }

    fn stored_row(&self, row: &RowId) -> Result<Vec<String>, GridError> {
        self.host
            .row_values(row)
            .ok_or_else(|| GridError::RowValuesMissing(row.clone()))
    }

    /// Display value of a cell. Rows shorter than the column count read as
    /// empty in the missing trailing columns.
    pub fn get_cell_value(&self, cell: &CellAddress) -> Result<String, GridError> {
        let index = self.checked_index(cell)?;
        let values = self.stored_row(&cell.row)?;
        Ok(values.get(index).cloned().unwrap_or_default())
    }

    // =========================================================================
    // Editors
    // =========================================================================

    pub fn editor(&self, kind: EditorKind) -> &TransientEditor {
        self.editors.get(kind)
    }

    /// Mutable editor access, for hosts forwarding typed input.
    pub fn editor_mut(&mut self, kind: EditorKind) -> &mut TransientEditor {
        self.editors.get_mut(kind)
    }

    pub fn visible_editor(&self) -> Option<EditorKind> {
        self.editors.visible()
    }

    // =========================================================================
    // Edit session
    // =========================================================================

    pub fn state(&self) -> &EditState {
        &self.state
    }

    pub fn session(&self) -> Option<&EditSession> {
        self.state.as_editing()
    }

    pub fn editing_cell(&self) -> Option<&CellAddress> {
        self.state.cell()
    }

    pub fn is_editing(&self) -> bool {
        self.state.is_editing()
    }

    /// Open an in-place editor over `cell`.
    ///
    /// Invalid cells are an error and leave any active session untouched.
    /// Otherwise the active session is cancelled first. Read-only cells are
    /// declined silently; a cell without on-screen bounds is an error and
    /// leaves the grid idle.
    pub fn start_edit(&mut self, cell: &CellAddress) -> Result<EditOutcome, GridError> {
        if !self.is_valid_cell(cell) {
            return Err(GridError::InvalidCell(cell.clone()));
        }

        self.cancel_edit();

        let cell_type = self.cell_type(cell);
        let Some(kind) = EditorKind::for_cell_type(cell_type) else {
            log::debug!("start_edit declined for read-only cell {cell}");
            return Ok(EditOutcome::Declined);
        };

        let value = self.get_cell_value(cell)?;
        let rect = self
            .host
            .cell_bounds(&cell.row, &cell.column)
            .ok_or_else(|| GridError::GeometryUnavailable(cell.clone()))?;

        let choices = match cell_type {
            CellType::Choice => resolve_choices(&self.modes, cell),
            _ => Vec::new(),
        };

        let editor = self.editors.get_mut(kind);
        editor.set_text(value);
        editor.set_choices(choices.clone());
        editor.place(rect);
        self.host.place_editor(self.editors.get(kind));
        self.host.focus_editor(kind);

        self.state.open(EditSession {
            cell: cell.clone(),
            cell_type,
            choices,
        });
        log::debug!("edit opened on {cell} ({cell_type}) at {rect:?}");
        Ok(EditOutcome::Opened(kind))
    }

    /// Commit the text of `editor` into `cell` and end the session.
    ///
    /// Validity is checked whether or not a session is active. A cell that
    /// became read-only since the edit opened discards the input. The row is
    /// only written when the text differs from the stored value. Once the
    /// cell is known valid the session ends, even if the host fails.
    pub fn update_cell(&mut self, cell: &CellAddress, editor: EditorKind) -> Result<CommitOutcome, GridError> {
        let index = self.checked_index(cell)?;

        if self.cell_type(cell) == CellType::ReadOnly {
            log::debug!("update_cell discarded input for read-only cell {cell}");
            self.cancel_edit();
            return Ok(CommitOutcome::Discarded);
        }

        let new_value = self.editors.get(editor).text().to_string();
        let mut values = match self.stored_row(&cell.row) {
            Ok(values) => values,
            Err(e) => {
                log::warn!("update_cell {cell}: host has no values for a live row, edit dropped");
                self.cancel_edit();
                return Err(e);
            }
        };
        let unchanged = values.get(index).map(String::as_str).unwrap_or("") == new_value;

        let outcome = if unchanged {
            CommitOutcome::Unchanged
        } else {
            if values.len() <= index {
                values.resize(index + 1, String::new());
            }
            values[index] = new_value;
            self.host.set_row_values(&cell.row, values);
            CommitOutcome::Written
        };

        self.cancel_edit();
        log::debug!("update_cell {cell}: {outcome:?}");
        Ok(outcome)
    }

    /// Hide both editors and drop the session. Safe to call when idle.
    pub fn cancel_edit(&mut self) {
        for editor in self.editors.iter_mut() {
            editor.hide();
            self.host.hide_editor(editor.kind());
        }
        if let Some(session) = self.state.close() {
            log::debug!("edit session on {} closed", session.cell);
        }
    }
}
