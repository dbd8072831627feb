//! Column definition type.

use std::cmp::Ordering;
use std::fmt;
use std::sync::Arc;

use crate::row::Row;
use crate::value::Value;

/// Accessor deriving a column value from a whole row.
pub type ValueFn<T> = Arc<dyn Fn(&T) -> Value + Send + Sync>;

/// Ascending comparator: `(value_a, value_b, row_a, row_b)`.
pub type SorterFn<T> = Arc<dyn Fn(&Value, &Value, &T, &T) -> Ordering + Send + Sync>;

/// Filter predicate: `(value, filter_value, row)`.
pub type FilterFn<T> = Arc<dyn Fn(&Value, &Value, &T) -> bool + Send + Sync>;

/// A grid column definition.
///
/// The `id` is the column's identity in sort and filter state. The `key`
/// selects the underlying row field and defaults to the id, so several
/// columns may read the same field while keeping independent state.
///
/// # Example
///
/// ```
/// use datagrid::{Column, Value};
/// use serde_json::json;
///
/// let age = Column::<serde_json::Value>::new("age", "Age");
/// let age_group = Column::<serde_json::Value>::new("age_group", "Age group")
///     .key("age")
///     .value(|row| {
///         let age = row["age"].as_i64().unwrap_or(0);
///         Value::from(if age < 30 { "young" } else { "adult" })
///     });
///
/// assert_eq!(age_group.value_of(&json!({ "age": 25 })), Value::from("young"));
/// assert_eq!(age.value_of(&json!({ "age": 25 })), Value::from(25));
/// ```
pub struct Column<T> {
    /// Unique identifier for this column.
    pub id: String,
    /// Field selected from the row when no value accessor is set.
    pub key: String,
    /// Header text; display only.
    pub name: String,
    /// Whether this column responds to sort toggles.
    pub sortable: bool,
    value: Option<ValueFn<T>>,
    sorter: Option<SorterFn<T>>,
    filter: Option<FilterFn<T>>,
}

impl<T> Column<T> {
    /// Create a sortable column whose key equals its id.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        let id = id.into();
        Self {
            key: id.clone(),
            id,
            name: name.into(),
            sortable: true,
            value: None,
            sorter: None,
            filter: None,
        }
    }

    /// Select a different row field than the id.
    pub fn key(mut self, key: impl Into<String>) -> Self {
        self.key = key.into();
        self
    }

    /// Set whether the column is sortable.
    pub fn sortable(mut self, sortable: bool) -> Self {
        self.sortable = sortable;
        self
    }

    /// Derive the column value from the whole row instead of the keyed field.
    pub fn value<F>(mut self, f: F) -> Self
    where
        F: Fn(&T) -> Value + Send + Sync + 'static,
    {
        self.value = Some(Arc::new(f));
        self
    }

    /// Use a custom ascending comparator.
    ///
    /// The comparator receives both resolved values and both rows, so ties
    /// can be broken on other fields. Descending order calls it with the
    /// arguments swapped.
    pub fn sorter<F>(mut self, f: F) -> Self
    where
        F: Fn(&Value, &Value, &T, &T) -> Ordering + Send + Sync + 'static,
    {
        self.sorter = Some(Arc::new(f));
        self
    }

    /// Use a custom filter predicate.
    ///
    /// A row passes the column filter if the predicate holds for any value
    /// in the column's filter set.
    pub fn filter<F>(mut self, f: F) -> Self
    where
        F: Fn(&Value, &Value, &T) -> bool + Send + Sync + 'static,
    {
        self.filter = Some(Arc::new(f));
        self
    }

    /// Returns the custom comparator, if any.
    pub fn custom_sorter(&self) -> Option<&SorterFn<T>> {
        self.sorter.as_ref()
    }

    /// Returns the custom filter predicate, if any.
    pub fn custom_filter(&self) -> Option<&FilterFn<T>> {
        self.filter.as_ref()
    }

    /// Returns `true` if the column derives its value through an accessor.
    pub fn has_accessor(&self) -> bool {
        self.value.is_some()
    }
}

impl<T: Row> Column<T> {
    /// Resolve this column's value for a row.
    pub fn value_of(&self, row: &T) -> Value {
        match &self.value {
            Some(f) => f(row),
            None => row.field(&self.key),
        }
    }
}

impl<T> Clone for Column<T> {
    fn clone(&self) -> Self {
        Self {
            id: self.id.clone(),
            key: self.key.clone(),
            name: self.name.clone(),
            sortable: self.sortable,
            value: self.value.clone(),
            sorter: self.sorter.clone(),
            filter: self.filter.clone(),
        }
    }
}

impl<T> fmt::Debug for Column<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Column")
            .field("id", &self.id)
            .field("key", &self.key)
            .field("name", &self.name)
            .field("sortable", &self.sortable)
            .field("value", &self.value.is_some())
            .field("sorter", &self.sorter.is_some())
            .field("filter", &self.filter.is_some())
            .finish()
    }
}
