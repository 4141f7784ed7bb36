use std::fmt;

use crate::cell_id::{CellAddress, ColumnId, RowId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// Column token is not `#N` with N >= 1.
    InvalidColumnId(String),
    /// Well-formed address naming a missing row or an out-of-range column.
    InvalidCell(CellAddress),
    /// Editable cell whose on-screen bounds are unknown (scrolled away, not laid out).
    GeometryUnavailable(CellAddress),
    /// Host reports the row as live but holds no values for it.
    RowValuesMissing(RowId),
    /// `configure` was given the same column twice.
    DuplicateColumn(ColumnId),
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidColumnId(id) => write!(f, "invalid column id: '{id}'"),
            Self::InvalidCell(cell) => write!(f, "invalid cell specified: {cell}"),
            Self::GeometryUnavailable(cell) => {
                write!(f, "cannot determine the position of the cell: {cell}")
            }
            Self::RowValuesMissing(row) => write!(f, "row '{row}' has no stored values"),
            Self::DuplicateColumn(column) => write!(f, "duplicate column id: '{column}'"),
        }
    }
}

impl std::error::Error for GridError {}
