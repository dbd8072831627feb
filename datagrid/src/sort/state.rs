//! Sort direction and sort state types.

use serde::{Deserialize, Serialize};

/// Sort direction for an active sort.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    /// Ascending order (A-Z, 0-9).
    Asc,
    /// Descending order (Z-A, 9-0).
    Desc,
}

/// The active sort: a column and a direction, or neither.
///
/// When no sort is active the view keeps insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SortState {
    column_id: Option<String>,
    direction: Option<SortDirection>,
}

impl SortState {
    /// No active sort.
    pub fn none() -> Self {
        Self::default()
    }

    /// Sort by `column_id` in `direction`.
    pub fn new(column_id: impl Into<String>, direction: SortDirection) -> Self {
        Self {
            column_id: Some(column_id.into()),
            direction: Some(direction),
        }
    }

    /// The sorted column, if any.
    pub fn column_id(&self) -> Option<&str> {
        self.column_id.as_deref()
    }

    /// The sort direction, if any.
    pub fn direction(&self) -> Option<SortDirection> {
        self.direction
    }

    /// Returns `true` if a sort is active.
    pub fn is_active(&self) -> bool {
        self.column_id.is_some()
    }

    /// Direction for `column_id` if it is the sorted column.
    pub fn direction_for(&self, column_id: &str) -> Option<SortDirection> {
        match self.column_id.as_deref() {
            Some(id) if id == column_id => self.direction,
            _ => None,
        }
    }

    /// The state after clicking `column_id`.
    ///
    /// The active column cycles asc, desc, none. Any other column starts at
    /// ascending regardless of its history.
    pub fn toggled(&self, column_id: &str) -> Self {
        match self.direction_for(column_id) {
            None => Self::new(column_id, SortDirection::Asc),
            Some(SortDirection::Asc) => Self::new(column_id, SortDirection::Desc),
            Some(SortDirection::Desc) => Self::none(),
        }
    }
}
