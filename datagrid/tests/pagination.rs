mod common;

use common::{columns, grid, grid_with, ids, people, Person};
use datagrid::{DataGrid, GridOptions};

// ============================================================================
// Page count and clamping
// ============================================================================

#[test]
fn test_total_pages_and_clamping() {
    let mut grid = grid_with(GridOptions::default().with_page_size(2));
    assert_eq!(grid.total_pages(), 3);

    grid.set_current_page(10);
    assert_eq!(grid.current_page(), 3);
    assert_eq!(ids(&grid.rows()), vec![5]);

    grid.set_current_page(0);
    assert_eq!(grid.current_page(), 1);
}

#[test]
fn test_filtering_shrinks_page_count() {
    let mut grid = grid_with(GridOptions::default().with_page_size(2));
    grid.set_current_page(3);
    assert_eq!(grid.current_page(), 3);

    grid.set_filter("age", [30]);
    assert_eq!(grid.filtered_count(), 2);
    assert_eq!(grid.total_pages(), 1);
    assert_eq!(grid.current_page(), 1);
    assert_eq!(ids(&grid.rows()), vec![1, 4]);
}

#[test]
fn test_filter_changes_reset_page() {
    let mut grid = grid_with(GridOptions::default().with_page_size(1));

    grid.set_current_page(4);
    grid.toggle_filter("city", "Berlin");
    assert_eq!(grid.current_page(), 1);

    grid.set_current_page(2);
    grid.set_global_filter("r");
    assert_eq!(grid.current_page(), 1);

    grid.set_current_page(2);
    grid.clear_filter("city");
    assert_eq!(grid.current_page(), 1);
}

#[test]
fn test_replacing_rows_resets_page() {
    let mut grid = grid_with(GridOptions::default().with_page_size(2));
    grid.set_current_page(3);
    grid.set_base_rows(people());
    assert_eq!(grid.current_page(), 1);
}

// ============================================================================
// Empty data
// ============================================================================

#[test]
fn test_empty_data() {
    let grid = DataGrid::<Person>::new(Vec::new(), columns()).unwrap();
    assert!(grid.rows().is_empty());
    assert_eq!(grid.total_pages(), 1);
    assert_eq!(grid.current_page(), 1);
    assert!(!grid.can_go_back());
    assert!(!grid.can_go_forward());
}

#[test]
fn test_empty_filter_result_disables_navigation() {
    let mut grid = grid_with(GridOptions::default().with_page_size(1));
    grid.set_filter("name", ["Nobody"]);
    assert!(grid.rows().is_empty());
    assert_eq!(grid.total_pages(), 1);
    assert!(!grid.can_go_back());
    assert!(!grid.can_go_forward());
}

// ============================================================================
// Navigation
// ============================================================================

#[test]
fn test_navigation_flags() {
    let mut grid = grid_with(GridOptions::default().with_page_size(2));
    assert!(!grid.can_go_back());
    assert!(grid.can_go_forward());

    grid.set_current_page(2);
    assert!(grid.can_go_back());
    assert!(grid.can_go_forward());

    grid.set_current_page(3);
    assert!(grid.can_go_back());
    assert!(!grid.can_go_forward());
}

#[test]
fn test_page_navigation_helpers() {
    let mut grid = grid_with(GridOptions::default().with_page_size(2));
    assert!(!grid.prev_page());
    assert!(grid.next_page());
    assert_eq!(grid.current_page(), 2);
    assert!(grid.last_page());
    assert_eq!(grid.current_page(), 3);
    assert!(!grid.next_page());
    assert!(grid.first_page());
    assert_eq!(grid.current_page(), 1);
}

#[test]
fn test_page_info() {
    let mut grid = grid_with(GridOptions::default().with_page_size(2));
    grid.set_current_page(2);
    let info = grid.page_info();
    assert_eq!(info.current_page, 2);
    assert_eq!(info.total_pages, 3);
    assert_eq!(info.total_rows, 5);
    assert_eq!(info.range(), 2..4);
    assert_eq!(info.len(), 2);
}

#[test]
fn test_zero_page_size_is_unbounded() {
    let mut grid = grid_with(GridOptions::default().with_page_size(0));
    assert_eq!(grid.total_pages(), 1);
    assert_eq!(grid.rows().len(), 5);

    grid.set_current_page(5);
    assert_eq!(grid.current_page(), 1);
    assert!(!grid.can_go_forward());
}

#[test]
fn test_set_page_size() {
    let mut grid = grid();
    assert_eq!(grid.page_size(), 10);
    grid.set_page_size(2);
    grid.set_current_page(3);
    grid.set_page_size(4);
    assert_eq!(grid.current_page(), 1);
    assert_eq!(grid.total_pages(), 2);
}

// ============================================================================
// Idempotent reads
// ============================================================================

#[test]
fn test_reads_are_idempotent() {
    let mut grid = grid_with(GridOptions::default().with_page_size(2));
    grid.toggle_sort("score");
    grid.set_current_page(2);

    let first = ids(&grid.rows());
    let pages = grid.total_pages();
    assert_eq!(ids(&grid.rows()), first);
    assert_eq!(grid.total_pages(), pages);
    assert_eq!(grid.current_page(), 2);
}
