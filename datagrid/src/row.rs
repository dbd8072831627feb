//! Row trait for records displayed by the grid.

use std::collections::BTreeMap;
use std::collections::HashMap;

use crate::value::Value;

/// Trait for records that can be displayed as rows in a [`DataGrid`](crate::DataGrid).
///
/// The grid only looks at a row through this trait (field selection by a
/// column's `key`) or through a column's own value accessor.
///
/// # Example
///
/// ```
/// use datagrid::{Row, Value};
///
/// #[derive(Clone)]
/// struct User {
///     name: String,
///     age: u32,
/// }
///
/// impl Row for User {
///     fn field(&self, key: &str) -> Value {
///         match key {
///             "name" => Value::from(&self.name),
///             "age" => Value::from(self.age),
///             _ => Value::Null,
///         }
///     }
/// }
/// ```
pub trait Row {
    /// Return the value of the field selected by `key`.
    ///
    /// Missing fields resolve to [`Value::Null`].
    fn field(&self, key: &str) -> Value;
}

impl Row for serde_json::Value {
    fn field(&self, key: &str) -> Value {
        self.get(key).map(Value::from).unwrap_or(Value::Null)
    }
}

impl Row for serde_json::Map<String, serde_json::Value> {
    fn field(&self, key: &str) -> Value {
        self.get(key).map(Value::from).unwrap_or(Value::Null)
    }
}

impl Row for HashMap<String, Value> {
    fn field(&self, key: &str) -> Value {
        self.get(key).cloned().unwrap_or(Value::Null)
    }
}

impl Row for BTreeMap<String, Value> {
    fn field(&self, key: &str) -> Value {
        self.get(key).cloned().unwrap_or(Value::Null)
    }
}
