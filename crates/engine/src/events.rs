//! Event names and handler bindings.
//!
//! Bindings are an ordered subscriber list per event. Binding appends; it
//! never replaces a handler that was already there, including handlers a
//! host had installed before the grid wrapped it.

use std::str::FromStr;

use rustc_hash::FxHashMap;

use crate::editor::EditorKind;

/// Pointer events on the grid body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GridEventKind {
    /// `<Double-1>`
    DoubleClick,
    /// `<MouseWheel>`
    MouseWheel,
}

impl GridEventKind {
    pub fn sequence(&self) -> &'static str {
        match self {
            Self::DoubleClick => "<Double-1>",
            Self::MouseWheel => "<MouseWheel>",
        }
    }
}

impl FromStr for GridEventKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "<Double-1>" | "<Double-Button-1>" => Ok(Self::DoubleClick),
            "<MouseWheel>" => Ok(Self::MouseWheel),
            _ => Err(format!("unsupported event sequence: {s}")),
        }
    }
}

/// Events raised by a transient editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EditorEventKind {
    /// Enter pressed
    Return,
    /// Editor lost keyboard focus
    FocusOut,
    /// Escape pressed
    Escape,
    /// A value was picked from the choice box popdown
    ChoiceSelected,
}

impl EditorEventKind {
    /// Whether `editor` listens for this event.
    ///
    /// The choice box does not commit on focus-out: opening its popdown
    /// list moves focus away without ending the edit.
    pub fn is_bound_for(&self, editor: EditorKind) -> bool {
        match (self, editor) {
            (Self::Return | Self::Escape, _) => true,
            (Self::FocusOut, EditorKind::Text) => true,
            (Self::ChoiceSelected, EditorKind::Choice) => true,
            _ => false,
        }
    }
}

/// Pointer position and wheel delta, in widget coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PointerEvent {
    pub x: i32,
    pub y: i32,
    /// Wheel delta (multiples of the platform notch). Zero for clicks.
    pub delta: i32,
}

impl PointerEvent {
    pub fn at(x: i32, y: i32) -> Self {
        Self { x, y, delta: 0 }
    }

    pub fn wheel(delta: i32) -> Self {
        Self { x: 0, y: 0, delta }
    }
}

/// Callback type for externally bound pointer handlers.
pub type EventHandler = Box<dyn FnMut(&PointerEvent)>;

/// Ordered handler lists keyed by event.
#[derive(Default)]
pub struct EventBindings {
    handlers: FxHashMap<GridEventKind, Vec<EventHandler>>,
}

impl EventBindings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a handler for `kind`.
    pub fn bind(&mut self, kind: GridEventKind, handler: impl FnMut(&PointerEvent) + 'static) {
        self.handlers.entry(kind).or_default().push(Box::new(handler));
    }

    /// Remove every handler for `kind`.
    pub fn unbind(&mut self, kind: GridEventKind) {
        self.handlers.remove(&kind);
    }

    pub fn handler_count(&self, kind: GridEventKind) -> usize {
        self.handlers.get(&kind).map_or(0, Vec::len)
    }

    /// Run every handler for `kind`, in bind order.
    pub fn dispatch(&mut self, kind: GridEventKind, event: &PointerEvent) {
        if let Some(handlers) = self.handlers.get_mut(&kind) {
            for handler in handlers.iter_mut() {
                handler(event);
            }
        }
    }
}

impl std::fmt::Debug for EventBindings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut map = f.debug_map();
        for (kind, handlers) in &self.handlers {
            map.entry(kind, &handlers.len());
        }
        map.finish()
    }
}
