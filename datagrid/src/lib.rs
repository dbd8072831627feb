//! Client-side tabular view engine
//!
//! Turns an in-memory collection of rows plus a set of column definitions
//! into a filtered, sorted and paginated view. Derived state is recomputed
//! lazily: mutators only mark stages dirty, and the next read of a
//! page-dependent accessor reruns whatever is stale.
//!
//! # Example
//!
//! ```
//! use datagrid::{Column, DataGrid, Value};
//! use serde_json::json;
//!
//! let rows = vec![
//!     json!({ "name": "Alice", "age": 30 }),
//!     json!({ "name": "Bob", "age": 25 }),
//! ];
//! let columns = vec![Column::new("name", "Name"), Column::new("age", "Age")];
//!
//! let mut grid = DataGrid::new(rows, columns).unwrap();
//! grid.toggle_sort("age");
//! grid.set_filter("name", [Value::from("Bob")]);
//!
//! assert_eq!(grid.rows().len(), 1);
//! ```

pub mod column;
pub mod error;
pub mod filter;
pub mod options;
pub mod page;
pub mod row;
pub mod sort;
pub mod value;

mod grid;

pub use column::{Column, ColumnRegistry};
pub use error::{GridError, Result};
pub use filter::{FilterSet, FilterState, GlobalFilter, GlobalFilterMode};
pub use grid::DataGrid;
pub use options::GridOptions;
pub use page::PageInfo;
pub use row::Row;
pub use sort::{SortDirection, SortState};
pub use value::Value;
