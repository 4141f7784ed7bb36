pub mod editor;
pub mod events;
pub mod grid;
pub mod host;
pub mod interaction;
pub mod memory_host;
pub mod modes;
pub mod resolve;
pub mod session;

pub use editgrid_core::{CellAddress, CellRect, CellType, ColumnId, GridError, RowId};
pub use editor::{EditorKind, TransientEditor};
pub use events::{EditorEventKind, EventBindings, GridEventKind, PointerEvent};
pub use grid::EditableGrid;
pub use host::{ColumnOptions, GridHost, Region, ScrollCommand, ScrollUnit};
pub use modes::ModeRegistry;
pub use session::{CommitOutcome, EditOutcome, EditSession, EditState};
