//! Filter pass over the raw rows.

use crate::column::Column;
use crate::column::ColumnRegistry;
use crate::row::Row;

use super::FilterSet;
use super::FilterState;
use super::GlobalFilter;

/// Run the global and per-column filters over `rows`.
///
/// Returns the indices of passing rows in their original order. Per-column
/// filters combine with AND across columns; within one column the set is
/// an OR of accepted values.
pub(crate) fn apply_filters<T: Row>(
    rows: &[T],
    registry: &ColumnRegistry<T>,
    filters: &FilterState,
    global: &GlobalFilter,
) -> Vec<usize> {
    let active: Vec<(&Column<T>, &FilterSet)> = filters
        .active()
        .filter_map(|(id, set)| registry.resolve(id).map(|column| (column, set)))
        .collect();
    let mut session = global.session();

    rows.iter()
        .enumerate()
        .filter(|(_, row)| {
            let global_pass = match session.as_mut() {
                None => true,
                Some(session) => registry.columns().iter().any(|column| {
                    column
                        .value_of(row)
                        .as_str()
                        .is_some_and(|s| session.is_match(s))
                }),
            };
            global_pass && active.iter().all(|(column, set)| column_passes(column, set, row))
        })
        .map(|(i, _)| i)
        .collect()
}

fn column_passes<T: Row>(column: &Column<T>, set: &FilterSet, row: &T) -> bool {
    let value = column.value_of(row);
    match column.custom_filter() {
        Some(filter) => set.iter().any(|filter_value| filter(&value, filter_value, row)),
        None => set.contains(&value),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use serde_json::json;

    use super::*;
    use crate::filter::GlobalFilterMode;
    use crate::value::Value;

    fn people() -> Vec<serde_json::Value> {
        vec![
            json!({ "name": "Alice", "age": 30 }),
            json!({ "name": "Bob", "age": 25 }),
            json!({ "name": "Charlie", "age": 35 }),
        ]
    }

    fn registry() -> ColumnRegistry<serde_json::Value> {
        ColumnRegistry::new(vec![
            Column::new("name", "Name"),
            Column::new("age", "Age"),
            Column::new("min_age", "Min age")
                .key("age")
                .filter(|value, threshold, _| {
                    value.compare(threshold).is_some_and(|o| o.is_ge())
                }),
        ])
        .unwrap()
    }

    #[test]
    fn test_no_filters_keeps_everything() {
        let registry = registry();
        let filters = registry.initialize_filter_state(&BTreeMap::new());
        let kept = apply_filters(&people(), &registry, &filters, &GlobalFilter::default());
        assert_eq!(kept, vec![0, 1, 2]);
    }

    #[test]
    fn test_custom_predicate() {
        let registry = registry();
        let mut initial = BTreeMap::new();
        initial.insert("min_age".to_string(), vec![Value::from(30)]);
        let filters = registry.initialize_filter_state(&initial);

        let kept = apply_filters(&people(), &registry, &filters, &GlobalFilter::default());
        assert_eq!(kept, vec![0, 2]);
    }

    #[test]
    fn test_global_only_matches_strings() {
        let registry = registry();
        let filters = registry.initialize_filter_state(&BTreeMap::new());

        let global = GlobalFilter::new("li", GlobalFilterMode::Regex);
        let kept = apply_filters(&people(), &registry, &filters, &global);
        assert_eq!(kept, vec![0, 2]);

        let global = GlobalFilter::new("25", GlobalFilterMode::Regex);
        let kept = apply_filters(&people(), &registry, &filters, &global);
        assert!(kept.is_empty());
    }
}
