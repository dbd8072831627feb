//! Column registry keyed by column id.

use std::collections::BTreeMap;
use std::collections::HashMap;

use crate::error::GridError;
use crate::error::Result;
use crate::filter::FilterSet;
use crate::filter::FilterState;
use crate::row::Row;
use crate::value::Value;

use super::Column;

/// Ordered set of column definitions with lookup by id.
///
/// Built once when the grid is constructed and never mutated afterwards.
#[derive(Debug, Clone)]
pub struct ColumnRegistry<T> {
    columns: Vec<Column<T>>,
    index: HashMap<String, usize>,
}

impl<T> ColumnRegistry<T> {
    /// Register columns in display order.
    ///
    /// Fails if two columns share an id.
    pub fn new(columns: Vec<Column<T>>) -> Result<Self> {
        let mut index = HashMap::with_capacity(columns.len());
        for (i, column) in columns.iter().enumerate() {
            if index.insert(column.id.clone(), i).is_some() {
                return Err(GridError::duplicate_column(&column.id));
            }
        }
        Ok(Self { columns, index })
    }

    /// Resolve a column definition by id.
    pub fn resolve(&self, id: &str) -> Option<&Column<T>> {
        self.index.get(id).map(|&i| &self.columns[i])
    }

    /// Returns `true` if a column with this id is registered.
    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// Columns in display order.
    pub fn columns(&self) -> &[Column<T>] {
        &self.columns
    }

    /// Column ids in display order.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|c| c.id.as_str())
    }

    /// Number of registered columns.
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// Returns `true` if no columns are registered.
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Seed one filter set per column.
    ///
    /// Columns named in `initial` start with those values; every other
    /// column starts with an empty set. Unknown ids in `initial` are ignored.
    pub fn initialize_filter_state(&self, initial: &BTreeMap<String, Vec<Value>>) -> FilterState {
        for id in initial.keys().filter(|id| !self.contains(id)) {
            log::warn!("Ignoring initial filter for unknown column '{}'", id);
        }

        let mut state = FilterState::default();
        for column in &self.columns {
            let set = initial
                .get(&column.id)
                .map(|values| values.iter().cloned().collect())
                .unwrap_or_else(FilterSet::new);
            state.insert(column.id.clone(), set);
        }
        state
    }
}

impl<T: Row> ColumnRegistry<T> {
    /// Resolve a row's value for the column `id`.
    ///
    /// Unknown ids resolve to [`Value::Null`].
    pub fn value_of(&self, row: &T, id: &str) -> Value {
        self.resolve(id)
            .map(|column| column.value_of(row))
            .unwrap_or(Value::Null)
    }
}
