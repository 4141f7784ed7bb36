//! Cell identity for the editable grid.
//!
//! A `CellAddress` pairs a host-assigned row id with a symbolic column id.
//! Column ids follow the list widget's `#N` scheme: `#1` is the first data
//! column, `#0` is the tree column (which carries no editable value).

use serde::{Deserialize, Serialize};

use crate::error::GridError;

/// Leading marker of every symbolic column id.
pub const COLUMN_MARKER: char = '#';

/// Opaque row identifier assigned by the host widget.
///
/// Existence is owned by the host; never cache it.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RowId(String);

impl RowId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<&str> for RowId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for RowId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for RowId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Symbolic column identifier (`"#1"`, `"#2"`, ...).
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ColumnId(String);

impl ColumnId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Column id for a 0-based data column index.
    pub fn from_index(index: usize) -> Self {
        Self(format!("{COLUMN_MARKER}{}", index + 1))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// 0-based data column index. See [`column_id_to_index`].
    pub fn index(&self) -> Result<usize, GridError> {
        column_id_to_index(self)
    }
}

impl From<&str> for ColumnId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for ColumnId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for ColumnId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Convert a symbolic column id to a 0-based index.
///
/// Strips the `#` marker, parses the rest as a non-negative integer and
/// subtracts one. `#0` has no data column and is rejected like any other
/// malformed token.
pub fn column_id_to_index(column: &ColumnId) -> Result<usize, GridError> {
    let invalid = || GridError::InvalidColumnId(column.as_str().to_string());

    let digits = column.as_str().strip_prefix(COLUMN_MARKER).ok_or_else(invalid)?;
    // `usize::from_str` accepts a leading '+'; the id scheme does not.
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }
    let number: usize = digits.parse().map_err(|_| invalid())?;
    number.checked_sub(1).ok_or_else(invalid)
}

/// A (row, column) pair addressing a single cell.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
pub struct CellAddress {
    pub row: RowId,
    pub column: ColumnId,
}

impl CellAddress {
    #[inline]
    pub fn new(row: impl Into<RowId>, column: impl Into<ColumnId>) -> Self {
        Self { row: row.into(), column: column.into() }
    }

    /// The "no cell" sentinel: two empty ids.
    pub fn none() -> Self {
        Self::default()
    }

    pub fn is_none(&self) -> bool {
        self.row.is_empty() && self.column.is_empty()
    }
}

impl std::fmt::Display for CellAddress {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.column)
    }
}
