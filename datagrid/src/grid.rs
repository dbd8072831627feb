//! The grid engine: raw rows in, one sorted and filtered page out.
//!
//! Mutators only update small state objects and mark stages dirty. Reads of
//! page-dependent data rerun the dirty stages once and cache the result
//! until the next mutation.

use std::cell::Cell;
use std::cell::RefCell;
use std::collections::HashSet;

use crate::column::Column;
use crate::column::ColumnRegistry;
use crate::error::Result;
use crate::filter::{apply_filters, FilterState, GlobalFilter, GlobalFilterMode};
use crate::options::GridOptions;
use crate::page::{self, PageInfo};
use crate::row::Row;
use crate::sort::{apply_sort, SortDirection, SortState};
use crate::value::Value;

// =============================================================================
// View cache
// =============================================================================

/// Derived row indices and the flags that mark them stale.
#[derive(Debug, Clone)]
struct ViewCache {
    /// Indices into the raw rows that pass every filter, in raw order.
    filtered: Vec<usize>,
    /// `filtered` reordered by the active sort.
    sorted: Vec<usize>,
    filter_dirty: bool,
    sort_dirty: bool,
}

impl ViewCache {
    fn stale() -> Self {
        Self {
            filtered: Vec::new(),
            sorted: Vec::new(),
            filter_dirty: true,
            sort_dirty: true,
        }
    }
}

// =============================================================================
// DataGrid
// =============================================================================

/// A filtered, sorted and paginated view over an owned collection of rows.
///
/// The grid takes ownership of the rows it is given, so the caller cannot
/// change them behind its back; replacing data goes through
/// [`set_base_rows`](Self::set_base_rows).
///
/// # Example
///
/// ```
/// use datagrid::{Column, DataGrid, GridOptions, SortDirection};
/// use serde_json::json;
///
/// let rows = vec![
///     json!({ "name": "Alice", "age": 30 }),
///     json!({ "name": "Bob", "age": 25 }),
///     json!({ "name": "Charlie", "age": 35 }),
/// ];
/// let columns = vec![Column::new("name", "Name"), Column::new("age", "Age")];
/// let options = GridOptions::default()
///     .with_page_size(2)
///     .with_sort("age", SortDirection::Asc);
///
/// let mut grid = DataGrid::with_options(rows, columns, options).unwrap();
/// assert_eq!(grid.total_pages(), 2);
/// assert_eq!(grid.rows()[0]["name"], "Bob");
///
/// grid.set_current_page(2);
/// assert_eq!(grid.rows()[0]["name"], "Charlie");
/// ```
#[derive(Debug, Clone)]
pub struct DataGrid<T> {
    rows: Vec<T>,
    registry: ColumnRegistry<T>,
    filters: FilterState,
    sort: SortState,
    global: GlobalFilter,
    page_size: usize,
    /// 1-based; clamped on every write and when a refresh shrinks the page count.
    current_page: Cell<usize>,
    cache: RefCell<ViewCache>,
}

impl<T: Row> DataGrid<T> {
    /// Create a grid with default options.
    pub fn new(rows: Vec<T>, columns: Vec<Column<T>>) -> Result<Self> {
        Self::with_options(rows, columns, GridOptions::default())
    }

    /// Create a grid with the given options.
    ///
    /// Fails only if two columns share an id. Unknown column ids in the
    /// options are ignored.
    pub fn with_options(rows: Vec<T>, columns: Vec<Column<T>>, options: GridOptions) -> Result<Self> {
        let registry = ColumnRegistry::new(columns)?;
        let filters = registry.initialize_filter_state(&options.initial_filters);

        let sort = match options.initial_sort {
            Some(id) if registry.resolve(&id).is_some_and(|c| c.sortable) => SortState::new(
                id,
                options.initial_sort_direction.unwrap_or(SortDirection::Asc),
            ),
            Some(id) => {
                log::warn!("Ignoring initial sort on unknown or unsortable column '{}'", id);
                SortState::none()
            }
            None => SortState::none(),
        };

        let global = GlobalFilter::new(options.global_filter, options.global_filter_mode);

        log::debug!(
            "DataGrid created: {} rows, {} columns, page size {}",
            rows.len(),
            registry.len(),
            options.page_size
        );

        Ok(Self {
            rows,
            registry,
            filters,
            sort,
            global,
            page_size: options.page_size,
            current_page: Cell::new(1),
            cache: RefCell::new(ViewCache::stale()),
        })
    }

    // -------------------------------------------------------------------------
    // Pipeline
    // -------------------------------------------------------------------------

    /// Rerun dirty stages and clamp the current page.
    fn refresh(&self) {
        let mut guard = self.cache.borrow_mut();
        let cache = &mut *guard;

        if cache.filter_dirty {
            cache.filtered = apply_filters(&self.rows, &self.registry, &self.filters, &self.global);
            cache.filter_dirty = false;
            // Sorting works on the filtered set, so it must follow every filter pass.
            cache.sort_dirty = true;
            log::debug!("Filter pass: {} of {} rows kept", cache.filtered.len(), self.rows.len());
        }

        if cache.sort_dirty {
            cache.sorted = apply_sort(&self.rows, &self.registry, &cache.filtered, &self.sort);
            cache.sort_dirty = false;
            log::debug!(
                "Sort pass: {} rows by {:?} {:?}",
                cache.sorted.len(),
                self.sort.column_id(),
                self.sort.direction()
            );
        }

        let total = page::total_pages(cache.filtered.len(), self.page_size);
        if self.current_page.get() > total {
            self.current_page.set(total);
        }
    }

    fn mark_filter_dirty(&mut self) {
        self.cache.get_mut().filter_dirty = true;
    }

    fn mark_sort_dirty(&mut self) {
        self.cache.get_mut().sort_dirty = true;
    }

    // -------------------------------------------------------------------------
    // Rows
    // -------------------------------------------------------------------------

    /// Rows of the current page, filtered and sorted.
    pub fn rows(&self) -> Vec<&T> {
        self.refresh();
        let cache = self.cache.borrow();
        let range = page::page_range(self.current_page.get(), self.page_size, cache.sorted.len());
        cache.sorted[range].iter().map(|&i| &self.rows[i]).collect()
    }

    /// Every filtered row in sorted order, ignoring pagination.
    pub fn all_rows(&self) -> Vec<&T> {
        self.refresh();
        let cache = self.cache.borrow();
        cache.sorted.iter().map(|&i| &self.rows[i]).collect()
    }

    /// The raw rows in insertion order.
    pub fn base_rows(&self) -> &[T] {
        &self.rows
    }

    /// Replace the raw rows.
    ///
    /// Filter and sort criteria are kept and applied to the new rows; the
    /// page goes back to 1.
    pub fn set_base_rows(&mut self, rows: Vec<T>) {
        log::trace!("Replacing {} rows with {}", self.rows.len(), rows.len());
        self.rows = rows;
        self.current_page.set(1);
        self.mark_filter_dirty();
    }

    /// Number of raw rows.
    pub fn total_count(&self) -> usize {
        self.rows.len()
    }

    /// Number of rows that pass the filters.
    pub fn filtered_count(&self) -> usize {
        self.refresh();
        self.cache.borrow().filtered.len()
    }

    // -------------------------------------------------------------------------
    // Columns
    // -------------------------------------------------------------------------

    /// Column definitions in display order.
    pub fn columns(&self) -> &[Column<T>] {
        self.registry.columns()
    }

    /// Resolve a column definition by id.
    pub fn column(&self, column_id: &str) -> Option<&Column<T>> {
        self.registry.resolve(column_id)
    }

    /// The column registry.
    pub fn registry(&self) -> &ColumnRegistry<T> {
        &self.registry
    }

    /// Resolve a row's value for a column; `Null` for unknown ids.
    pub fn value_of(&self, row: &T, column_id: &str) -> Value {
        self.registry.value_of(row, column_id)
    }

    /// Distinct values of a column over the raw rows, in first-seen order.
    ///
    /// Useful as the option list for a column's filter chips. Returns an
    /// empty list for unknown ids.
    pub fn unique_values(&self, column_id: &str) -> Vec<Value> {
        let Some(column) = self.registry.resolve(column_id) else {
            return Vec::new();
        };
        let mut seen: HashSet<Value> = HashSet::new();
        let mut values: Vec<Value> = Vec::new();
        for row in &self.rows {
            let value = column.value_of(row);
            if seen.insert(value.clone()) {
                values.push(value);
            }
        }
        values
    }

    // -------------------------------------------------------------------------
    // Sorting
    // -------------------------------------------------------------------------

    /// The active sort.
    pub fn sort_state(&self) -> &SortState {
        &self.sort
    }

    /// Sort direction of a column, or `None` if it is not the sorted column.
    pub fn sort_direction(&self, column_id: &str) -> Option<SortDirection> {
        self.sort.direction_for(column_id)
    }

    /// Returns `true` if the column exists and is sortable.
    pub fn is_sortable(&self, column_id: &str) -> bool {
        self.registry.resolve(column_id).is_some_and(|c| c.sortable)
    }

    /// Toggle sort for a column.
    ///
    /// The sorted column cycles ascending, descending, unsorted. A different
    /// column starts ascending. Unknown or unsortable columns are ignored.
    /// Returns the column's direction afterwards. The page is kept.
    pub fn toggle_sort(&mut self, column_id: &str) -> Option<SortDirection> {
        if !self.is_sortable(column_id) {
            log::warn!("Ignoring sort toggle on unknown or unsortable column '{}'", column_id);
            return None;
        }
        self.sort = self.sort.toggled(column_id);
        self.mark_sort_dirty();
        log::trace!("Sort toggled: {:?}", self.sort);
        self.sort.direction_for(column_id)
    }

    /// Return to insertion order.
    pub fn clear_sort(&mut self) {
        if self.sort.is_active() {
            self.sort = SortState::none();
            self.mark_sort_dirty();
        }
    }

    // -------------------------------------------------------------------------
    // Filtering
    // -------------------------------------------------------------------------

    /// Filter sets of every column.
    pub fn filter_state(&self) -> &FilterState {
        &self.filters
    }

    /// Replace a column's accepted values. Resets the page.
    pub fn set_filter<V: Into<Value>>(&mut self, column_id: &str, values: impl IntoIterator<Item = V>) {
        let Some(set) = self.filters.get_mut(column_id) else {
            log::warn!("Ignoring filter on unknown column '{}'", column_id);
            return;
        };
        *set = values.into_iter().map(Into::into).collect();
        log::trace!("Filter on '{}' set to {} values", column_id, set.len());
        self.filters_changed();
    }

    /// Remove every accepted value of a column. Resets the page.
    pub fn clear_filter(&mut self, column_id: &str) {
        let Some(set) = self.filters.get_mut(column_id) else {
            log::warn!("Ignoring filter clear on unknown column '{}'", column_id);
            return;
        };
        set.clear();
        self.filters_changed();
    }

    /// Add or remove one accepted value of a column. Resets the page.
    ///
    /// Returns `true` if the value is accepted afterwards.
    pub fn toggle_filter(&mut self, column_id: &str, value: impl Into<Value>) -> bool {
        let Some(set) = self.filters.get_mut(column_id) else {
            log::warn!("Ignoring filter toggle on unknown column '{}'", column_id);
            return false;
        };
        let active = set.toggle(value.into());
        self.filters_changed();
        active
    }

    /// Returns `true` if `value` is in the column's filter set.
    pub fn is_filter_active(&self, column_id: &str, value: &Value) -> bool {
        self.filters.get(column_id).is_some_and(|set| set.contains(value))
    }

    /// Empty every column's filter set. Resets the page.
    pub fn clear_all_filters(&mut self) {
        self.filters.clear_all();
        self.filters_changed();
    }

    /// Returns `true` if any column filter or the global filter is active.
    pub fn has_active_filters(&self) -> bool {
        self.filters.is_active() || self.global.is_active()
    }

    fn filters_changed(&mut self) {
        self.current_page.set(1);
        self.mark_filter_dirty();
    }

    // -------------------------------------------------------------------------
    // Global filter
    // -------------------------------------------------------------------------

    /// The global filter text.
    pub fn global_filter(&self) -> &str {
        self.global.text()
    }

    /// How the global filter text is interpreted.
    pub fn global_filter_mode(&self) -> GlobalFilterMode {
        self.global.mode()
    }

    /// Set the global filter text. Resets the page when the text changes.
    ///
    /// In regex mode, text that is not a valid pattern is matched literally.
    pub fn set_global_filter(&mut self, text: impl Into<String>) {
        let text = text.into();
        if text == self.global.text() {
            return;
        }
        self.global = GlobalFilter::new(text, self.global.mode());
        self.filters_changed();
    }

    /// Set the global filter text, rejecting invalid regex patterns.
    ///
    /// On error the previous filter stays in place.
    pub fn try_set_global_filter(&mut self, text: impl Into<String>) -> Result<()> {
        let text = text.into();
        if text == self.global.text() {
            return Ok(());
        }
        self.global = GlobalFilter::try_new(text, self.global.mode())?;
        self.filters_changed();
        Ok(())
    }

    /// Change how the global filter text is interpreted.
    pub fn set_global_filter_mode(&mut self, mode: GlobalFilterMode) {
        if mode == self.global.mode() {
            return;
        }
        self.global = GlobalFilter::new(self.global.text(), mode);
        self.filters_changed();
    }

    // -------------------------------------------------------------------------
    // Pagination
    // -------------------------------------------------------------------------

    /// Rows per page; 0 means unbounded.
    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Change the page size. Resets the page.
    pub fn set_page_size(&mut self, page_size: usize) {
        self.page_size = page_size;
        self.current_page.set(1);
    }

    /// Current page, 1-based.
    pub fn current_page(&self) -> usize {
        self.current_page.get()
    }

    /// Go to a page, clamped into `[1, total_pages]`.
    pub fn set_current_page(&mut self, page: usize) {
        let clamped = page::clamp_page(page, self.total_pages());
        if clamped != page {
            log::trace!("Page {} clamped to {}", page, clamped);
        }
        self.current_page.set(clamped);
    }

    /// Number of pages, at least 1.
    pub fn total_pages(&self) -> usize {
        page::total_pages(self.filtered_count(), self.page_size)
    }

    /// Returns `true` if there is data and a previous page.
    pub fn can_go_back(&self) -> bool {
        self.page_info().has_previous()
    }

    /// Returns `true` if there is data and a next page.
    pub fn can_go_forward(&self) -> bool {
        self.page_info().has_next()
    }

    /// Snapshot of the current page.
    pub fn page_info(&self) -> PageInfo {
        let total_rows = self.filtered_count();
        PageInfo::new(self.current_page.get(), self.page_size, total_rows)
    }

    /// Advance one page. Returns `true` if the page changed.
    pub fn next_page(&mut self) -> bool {
        self.go_to(self.current_page.get().saturating_add(1))
    }

    /// Go back one page. Returns `true` if the page changed.
    pub fn prev_page(&mut self) -> bool {
        self.go_to(self.current_page.get().saturating_sub(1))
    }

    /// Go to the first page. Returns `true` if the page changed.
    pub fn first_page(&mut self) -> bool {
        self.go_to(1)
    }

    /// Go to the last page. Returns `true` if the page changed.
    pub fn last_page(&mut self) -> bool {
        self.go_to(self.total_pages())
    }

    fn go_to(&mut self, page: usize) -> bool {
        let before = self.current_page();
        self.set_current_page(page);
        self.current_page() != before
    }
}
