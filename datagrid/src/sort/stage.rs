//! Sort pass over the filtered rows.

use std::cmp::Ordering;

use crate::column::ColumnRegistry;
use crate::row::Row;
use crate::value::Value;

use super::SortDirection;
use super::SortState;

/// Order the filtered row indices by the active sort.
///
/// Without an active sort the filtered order is kept as is. The sort is
/// stable: rows that compare equal keep their filtered order.
pub(crate) fn apply_sort<T: Row>(
    rows: &[T],
    registry: &ColumnRegistry<T>,
    filtered: &[usize],
    sort: &SortState,
) -> Vec<usize> {
    let (Some(column_id), Some(direction)) = (sort.column_id(), sort.direction()) else {
        return filtered.to_vec();
    };
    let Some(column) = registry.resolve(column_id) else {
        log::warn!("Sort column '{}' is not registered", column_id);
        return filtered.to_vec();
    };

    // Resolve each value once rather than on every comparison.
    let values: Vec<Value> = filtered.iter().map(|&i| column.value_of(&rows[i])).collect();
    let mut order: Vec<usize> = (0..filtered.len()).collect();

    match column.custom_sorter() {
        Some(sorter) => stable_sort_by(&mut order, |a, b| {
            let (a, b) = match direction {
                SortDirection::Asc => (a, b),
                SortDirection::Desc => (b, a),
            };
            sorter(&values[a], &values[b], &rows[filtered[a]], &rows[filtered[b]])
        }),
        None => stable_sort_by(&mut order, |a, b| {
            let ordering = values[a].compare(&values[b]).unwrap_or(Ordering::Equal);
            match direction {
                SortDirection::Asc => ordering,
                SortDirection::Desc => ordering.reverse(),
            }
        }),
    }
    order.into_iter().map(|p| filtered[p]).collect()
}

/// Bottom-up merge sort over positions.
///
/// Incomparable values compare equal, so comparators here are not total
/// orders, and `slice::sort_by` may panic on those. This merge only ever
/// takes from the right run on a strict `Less`, which keeps it stable and
/// well-defined for any comparator.
fn stable_sort_by<F>(items: &mut [usize], mut compare: F)
where
    F: FnMut(usize, usize) -> Ordering,
{
    let len = items.len();
    let mut buf = items.to_vec();
    let mut width = 1;
    while width < len {
        let mut start = 0;
        while start < len {
            let mid = (start + width).min(len);
            let end = (start + 2 * width).min(len);
            let (mut i, mut j, mut k) = (start, mid, start);
            while i < mid && j < end {
                if compare(items[j], items[i]) == Ordering::Less {
                    buf[k] = items[j];
                    j += 1;
                } else {
                    buf[k] = items[i];
                    i += 1;
                }
                k += 1;
            }
            buf[k..k + (mid - i)].copy_from_slice(&items[i..mid]);
            k += mid - i;
            buf[k..k + (end - j)].copy_from_slice(&items[j..end]);
            start = end;
        }
        items.copy_from_slice(&buf);
        width *= 2;
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::column::Column;

    fn rows() -> Vec<serde_json::Value> {
        vec![
            json!({ "id": 1, "value": "A" }),
            json!({ "id": 2, "value": "B" }),
            json!({ "id": 3, "value": "A" }),
            json!({ "id": 4, "value": "C" }),
            json!({ "id": 5, "value": "B" }),
        ]
    }

    fn registry() -> ColumnRegistry<serde_json::Value> {
        ColumnRegistry::new(vec![Column::new("id", "Id"), Column::new("value", "Value")]).unwrap()
    }

    #[test]
    fn test_no_sort_keeps_filtered_order() {
        let sorted = apply_sort(&rows(), &registry(), &[4, 0, 2], &SortState::none());
        assert_eq!(sorted, vec![4, 0, 2]);
    }

    #[test]
    fn test_ascending_is_stable() {
        let sort = SortState::new("value", SortDirection::Asc);
        let sorted = apply_sort(&rows(), &registry(), &[0, 1, 2, 3, 4], &sort);
        assert_eq!(sorted, vec![0, 2, 1, 4, 3]);
    }

    #[test]
    fn test_descending_is_stable() {
        let sort = SortState::new("value", SortDirection::Desc);
        let sorted = apply_sort(&rows(), &registry(), &[0, 1, 2, 3, 4], &sort);
        assert_eq!(sorted, vec![3, 1, 4, 0, 2]);
    }

    #[test]
    fn test_merge_sort_handles_inconsistent_comparator() {
        let keys = [3, 0, 1, 0, 2, 0];
        let mut order: Vec<usize> = (0..keys.len()).collect();
        // Zero is "incomparable" with everything, like a null value.
        stable_sort_by(&mut order, |a, b| {
            if keys[a] == 0 || keys[b] == 0 {
                Ordering::Equal
            } else {
                keys[a].cmp(&keys[b])
            }
        });
        order.sort_unstable();
        assert_eq!(order, vec![0, 1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_unknown_column_keeps_order() {
        let sort = SortState::new("ghost", SortDirection::Asc);
        let sorted = apply_sort(&rows(), &registry(), &[2, 1], &sort);
        assert_eq!(sorted, vec![2, 1]);
    }
}
