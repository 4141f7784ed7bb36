//! Pointer, editor and scroll event routing.
//!
//! Handles:
//! - Double-click: own open-edit behavior, then externally bound handlers
//! - Editor keys: Return / FocusOut / ChoiceSelected commit, Escape cancels
//! - Scrollbars and mouse wheel: cancel any edit before scrolling, since the
//!   editor overlay is placed in absolute coordinates

use editgrid_core::{CellAddress, GridError};

use crate::editor::EditorKind;
use crate::events::{EditorEventKind, GridEventKind, PointerEvent};
use crate::grid::EditableGrid;
use crate::host::{GridHost, Region, ScrollCommand};
use crate::session::CommitOutcome;

impl<H: GridHost> EditableGrid<H> {
    // =========================================================================
    // Pointer
    // =========================================================================

    /// Cell under a point, or `CellAddress::none()` outside data cells.
    pub fn clicked_cell(&self, x: i32, y: i32) -> CellAddress {
        if self.host.identify_region(x, y) != Region::Cell {
            return CellAddress::none();
        }
        match (self.host.identify_row(y), self.host.identify_column(x)) {
            (Some(row), Some(column)) => CellAddress { row, column },
            _ => CellAddress::none(),
        }
    }

    /// Default double-click behavior: open an editor on the clicked cell.
    pub fn on_double_click(&mut self, event: &PointerEvent) -> Result<(), GridError> {
        let cell = self.clicked_cell(event.x, event.y);
        if cell.is_none() {
            return Ok(());
        }
        self.start_edit(&cell).map(|_| ())
    }

    /// Replace the grid's own double-click behavior.
    ///
    /// Externally bound handlers still run after the hook.
    pub fn set_double_click_hook(
        &mut self,
        hook: impl FnMut(&mut EditableGrid<H>, &PointerEvent) -> Result<(), GridError> + 'static,
    ) {
        self.double_click_hook = Some(Box::new(hook));
    }

    pub fn clear_double_click_hook(&mut self) {
        self.double_click_hook = None;
    }

    fn run_double_click(&mut self, event: &PointerEvent) -> Result<(), GridError> {
        match self.double_click_hook.take() {
            Some(mut hook) => {
                let result = hook(self, event);
                // The hook may have installed a replacement for itself.
                if self.double_click_hook.is_none() {
                    self.double_click_hook = Some(hook);
                }
                result
            }
            None => self.on_double_click(event),
        }
    }

    /// Append an external handler. The grid's own behavior is never replaced.
    pub fn bind(&mut self, kind: GridEventKind, handler: impl FnMut(&PointerEvent) + 'static) {
        self.bindings.bind(kind, handler);
    }

    /// Deliver a pointer event: the grid's own behavior first, then every
    /// bound handler in bind order. External handlers run even when the own
    /// behavior fails; its error is returned afterwards.
    pub fn dispatch(&mut self, kind: GridEventKind, event: &PointerEvent) -> Result<(), GridError> {
        let own = match kind {
            GridEventKind::DoubleClick => self.run_double_click(event),
            GridEventKind::MouseWheel => {
                self.on_mouse_wheel(event.delta);
                Ok(())
            }
        };
        self.bindings.dispatch(kind, event);
        own
    }

    pub fn dispatch_double_click(&mut self, event: &PointerEvent) -> Result<(), GridError> {
        self.dispatch(GridEventKind::DoubleClick, event)
    }

    // =========================================================================
    // Editors
    // =========================================================================

    /// Route an event raised by one of the transient editors.
    ///
    /// Returns the commit outcome when the event committed an edit, `None`
    /// when it cancelled, was ignored, or no session was active.
    pub fn handle_editor_event(
        &mut self,
        editor: EditorKind,
        kind: EditorEventKind,
    ) -> Result<Option<CommitOutcome>, GridError> {
        if !kind.is_bound_for(editor) {
            return Ok(None);
        }

        match kind {
            EditorEventKind::Escape => {
                self.cancel_edit();
                Ok(None)
            }
            EditorEventKind::Return | EditorEventKind::FocusOut | EditorEventKind::ChoiceSelected => {
                let Some(cell) = self.editing_cell().cloned() else {
                    return Ok(None);
                };
                self.update_cell(&cell, editor).map(Some)
            }
        }
    }

    // =========================================================================
    // Scrolling
    // =========================================================================

    fn cancel_before_scroll(&mut self) {
        if self.is_editing() {
            log::debug!("scroll cancels edit on {:?}", self.editing_cell());
            self.cancel_edit();
        }
    }

    /// Vertical scrollbar command.
    pub fn on_scroll_y(&mut self, command: ScrollCommand) {
        self.cancel_before_scroll();
        self.host.yview(command);
    }

    /// Horizontal scrollbar command.
    pub fn on_scroll_x(&mut self, command: ScrollCommand) {
        self.cancel_before_scroll();
        self.host.xview(command);
    }

    /// Mouse wheel. Positive delta scrolls content up.
    pub fn on_mouse_wheel(&mut self, delta: i32) {
        self.cancel_before_scroll();
        let units = self.settings.wheel_units(delta);
        self.host.yview(ScrollCommand::units(units));
    }
}
