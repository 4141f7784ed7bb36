//! Edit session state machine.
//!
//! `Idle` -> `Editing` -> `Idle`. At most one session exists; opening a new
//! one first cancels whatever was active, sessions never stack.

use editgrid_core::{CellAddress, CellType};

use crate::editor::EditorKind;

/// The single active edit.
#[derive(Debug, Clone, PartialEq)]
pub struct EditSession {
    /// Cell being edited
    pub cell: CellAddress,

    /// Type resolved when the session opened (never `ReadOnly`)
    pub cell_type: CellType,

    /// Working choice list. Empty for free-text sessions.
    pub choices: Vec<String>,
}

impl EditSession {
    /// Editor the session is shown in.
    pub fn editor(&self) -> EditorKind {
        match self.cell_type {
            CellType::Choice => EditorKind::Choice,
            CellType::FreeText | CellType::ReadOnly => EditorKind::Text,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum EditState {
    /// No edit in progress
    #[default]
    Idle,

    /// An editor is open over a cell
    Editing(EditSession),
}

impl EditState {
    pub fn is_editing(&self) -> bool {
        matches!(self, Self::Editing(_))
    }

    pub fn as_editing(&self) -> Option<&EditSession> {
        match self {
            Self::Editing(session) => Some(session),
            Self::Idle => None,
        }
    }

    /// Cell of the active session, if any
    pub fn cell(&self) -> Option<&CellAddress> {
        self.as_editing().map(|s| &s.cell)
    }

    pub(crate) fn open(&mut self, session: EditSession) {
        debug_assert!(!self.is_editing(), "open over an active session; cancel first");
        *self = Self::Editing(session);
    }

    /// End the session, returning it if one was active.
    pub(crate) fn close(&mut self) -> Option<EditSession> {
        match std::mem::take(self) {
            Self::Editing(session) => Some(session),
            Self::Idle => None,
        }
    }
}

/// Result of `start_edit` on a valid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditOutcome {
    /// The editor of this kind is now shown and focused.
    Opened(EditorKind),
    /// The cell is read-only; nothing was opened.
    Declined,
}

/// Result of `update_cell` on a valid cell. The session is over in every case.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommitOutcome {
    /// The editor text differed and was written to the row.
    Written,
    /// The editor text equalled the stored value; nothing written.
    Unchanged,
    /// The cell is read-only; pending input discarded.
    Discarded,
}
