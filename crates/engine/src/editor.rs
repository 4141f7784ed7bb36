//! Transient in-place editors.
//!
//! The grid owns exactly two editors, a text box and a choice box. They are
//! created once and reused for every edit session; only their content,
//! placement and visibility change.

use editgrid_core::{CellRect, CellType};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EditorKind {
    /// Free text entry box.
    Text,
    /// Choice box pre-seeded with a value list.
    Choice,
}

impl EditorKind {
    /// Editor used for a cell type. `ReadOnly` cells never open an editor.
    pub fn for_cell_type(cell_type: CellType) -> Option<EditorKind> {
        match cell_type {
            CellType::ReadOnly => None,
            CellType::Choice => Some(EditorKind::Choice),
            CellType::FreeText => Some(EditorKind::Text),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TransientEditor {
    kind: EditorKind,
    text: String,
    /// Value list shown in the choice box popdown. Always empty for `Text`.
    choices: Vec<String>,
    /// Where the editor is placed. `None` while hidden.
    placement: Option<CellRect>,
}

impl TransientEditor {
    pub fn new(kind: EditorKind) -> Self {
        Self {
            kind,
            text: String::new(),
            choices: Vec::new(),
            placement: None,
        }
    }

    pub fn kind(&self) -> EditorKind {
        self.kind
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Replace the editor content (what a user typing into it would produce).
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    pub fn choices(&self) -> &[String] {
        &self.choices
    }

    pub fn set_choices(&mut self, choices: Vec<String>) {
        if self.kind == EditorKind::Choice {
            self.choices = choices;
        }
    }

    /// Pick the choice at `index` as the editor text.
    ///
    /// Returns false if the index is out of range.
    pub fn select(&mut self, index: usize) -> bool {
        match self.choices.get(index) {
            Some(value) => {
                self.text = value.clone();
                true
            }
            None => false,
        }
    }

    pub fn placement(&self) -> Option<CellRect> {
        self.placement
    }

    pub fn is_visible(&self) -> bool {
        self.placement.is_some()
    }

    pub(crate) fn place(&mut self, rect: CellRect) {
        self.placement = Some(rect);
    }

    pub(crate) fn hide(&mut self) {
        self.placement = None;
    }
}

/// The text box / choice box pair.
#[derive(Debug, Clone, PartialEq)]
pub struct Editors {
    text: TransientEditor,
    choice: TransientEditor,
}

impl Default for Editors {
    fn default() -> Self {
        Self {
            text: TransientEditor::new(EditorKind::Text),
            choice: TransientEditor::new(EditorKind::Choice),
        }
    }
}

impl Editors {
    pub fn get(&self, kind: EditorKind) -> &TransientEditor {
        match kind {
            EditorKind::Text => &self.text,
            EditorKind::Choice => &self.choice,
        }
    }

    pub fn get_mut(&mut self, kind: EditorKind) -> &mut TransientEditor {
        match kind {
            EditorKind::Text => &mut self.text,
            EditorKind::Choice => &mut self.choice,
        }
    }

    /// The editor currently shown, if any.
    pub fn visible(&self) -> Option<EditorKind> {
        [EditorKind::Text, EditorKind::Choice]
            .into_iter()
            .find(|&kind| self.get(kind).is_visible())
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut TransientEditor> {
        [&mut self.text, &mut self.choice].into_iter()
    }
}
