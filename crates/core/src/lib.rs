//! `editgrid-core`: addressing and shared types for the editable grid.
//!
//! Pure types crate: no host, toolkit, or IO dependencies.

pub mod cell_id;
pub mod cell_type;
pub mod error;
pub mod geometry;

pub use cell_id::{column_id_to_index, CellAddress, ColumnId, RowId};
pub use cell_type::CellType;
pub use error::GridError;
pub use geometry::CellRect;
