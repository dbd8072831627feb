//! Per-column filter sets.

use std::collections::BTreeMap;
use std::collections::HashSet;

use serde::Serialize;

use crate::value::Value;

/// The accepted values of one column's filter.
///
/// Values are unique; order carries no meaning. An empty set means the
/// column is not filtered. Membership checks are hashed, so large sets stay
/// cheap to test against every row.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct FilterSet {
    /// Insertion order, for display and serialization.
    values: Vec<Value>,
    #[serde(skip)]
    index: HashSet<Value>,
}

impl FilterSet {
    /// Creates an empty filter set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if the value is accepted by this set.
    pub fn contains(&self, value: &Value) -> bool {
        self.index.contains(value)
    }

    /// Adds a value. Returns `false` if it was already present.
    pub fn insert(&mut self, value: Value) -> bool {
        if !self.index.insert(value.clone()) {
            return false;
        }
        self.values.push(value);
        true
    }

    /// Removes a value. Returns `true` if it was present.
    pub fn remove(&mut self, value: &Value) -> bool {
        if !self.index.remove(value) {
            return false;
        }
        if let Some(pos) = self.values.iter().position(|v| v == value) {
            self.values.remove(pos);
        }
        true
    }

    /// Adds the value if absent, removes it otherwise.
    ///
    /// Returns `true` if the value is in the set afterwards.
    pub fn toggle(&mut self, value: Value) -> bool {
        if self.remove(&value) {
            false
        } else {
            self.insert(value)
        }
    }

    /// Removes every value.
    pub fn clear(&mut self) {
        self.values.clear();
        self.index.clear();
    }

    /// Returns `true` if the set has no values.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Number of accepted values.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Iterates over the accepted values.
    pub fn iter(&self) -> impl Iterator<Item = &Value> {
        self.values.iter()
    }
}

impl PartialEq for FilterSet {
    fn eq(&self, other: &Self) -> bool {
        self.index == other.index
    }
}

impl FromIterator<Value> for FilterSet {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        let mut set = FilterSet::new();
        for value in iter {
            set.insert(value);
        }
        set
    }
}

/// Filter sets for every registered column, keyed by column id.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct FilterState {
    sets: BTreeMap<String, FilterSet>,
}

impl FilterState {
    /// Returns the filter set of a column.
    pub fn get(&self, column_id: &str) -> Option<&FilterSet> {
        self.sets.get(column_id)
    }

    pub(crate) fn get_mut(&mut self, column_id: &str) -> Option<&mut FilterSet> {
        self.sets.get_mut(column_id)
    }

    pub(crate) fn insert(&mut self, column_id: String, set: FilterSet) {
        self.sets.insert(column_id, set);
    }

    /// Columns whose filter set is non-empty.
    pub fn active(&self) -> impl Iterator<Item = (&str, &FilterSet)> {
        self.sets
            .iter()
            .filter(|(_, set)| !set.is_empty())
            .map(|(id, set)| (id.as_str(), set))
    }

    /// Returns `true` if any column is filtered.
    pub fn is_active(&self) -> bool {
        self.active().next().is_some()
    }

    /// Number of columns tracked.
    pub fn len(&self) -> usize {
        self.sets.len()
    }

    /// Returns `true` if no columns are tracked.
    pub fn is_empty(&self) -> bool {
        self.sets.is_empty()
    }

    /// Iterates over every column's filter set.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &FilterSet)> {
        self.sets.iter().map(|(id, set)| (id.as_str(), set))
    }

    pub(crate) fn clear_all(&mut self) {
        self.sets.values_mut().for_each(FilterSet::clear);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_keeps_values_unique() {
        let set: FilterSet = [Value::from(30), Value::from(30), Value::from(35)]
            .into_iter()
            .collect();
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_toggle() {
        let mut set = FilterSet::new();
        assert!(set.toggle(Value::from("Alice")));
        assert!(set.contains(&Value::from("Alice")));
        assert!(!set.toggle(Value::from("Alice")));
        assert!(set.is_empty());
    }

    #[test]
    fn test_toggle_nan_removes_it_again() {
        let mut set = FilterSet::new();
        assert!(set.toggle(Value::from(f64::NAN)));
        assert!(set.contains(&Value::from(f64::NAN)));
        assert!(!set.toggle(Value::from(f64::NAN)));
        assert!(set.is_empty());
    }

    #[test]
    fn test_equality_ignores_order() {
        let a: FilterSet = [Value::from(1), Value::from(2)].into_iter().collect();
        let b: FilterSet = [Value::from(2), Value::from(1)].into_iter().collect();
        assert_eq!(a, b);
    }

    #[test]
    fn test_active_skips_empty_sets() {
        let mut state = FilterState::default();
        state.insert("name".into(), FilterSet::new());
        state.insert("age".into(), [Value::from(30)].into_iter().collect());

        let active: Vec<&str> = state.active().map(|(id, _)| id).collect();
        assert_eq!(active, vec!["age"]);

        state.clear_all();
        assert!(!state.is_active());
        assert_eq!(state.len(), 2);
    }
}
