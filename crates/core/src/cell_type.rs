use serde::{Deserialize, Serialize};

/// Edit affordance resolved for a single cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CellType {
    /// No edit interaction permitted.
    ReadOnly,
    /// Constrained selection from a value list.
    Choice,
    /// Free text entry.
    FreeText,
}

impl CellType {
    pub fn is_editable(&self) -> bool {
        !matches!(self, CellType::ReadOnly)
    }
}

impl std::fmt::Display for CellType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ReadOnly => write!(f, "readonly"),
            Self::Choice => write!(f, "choice"),
            Self::FreeText => write!(f, "free_text"),
        }
    }
}
