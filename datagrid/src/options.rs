//! Grid configuration

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};

use crate::filter::GlobalFilterMode;
use crate::sort::SortDirection;
use crate::value::Value;

/// Rows per page unless configured otherwise.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Initial configuration for a [`DataGrid`](crate::DataGrid).
///
/// Options can be built in code or deserialized, e.g. from JSON. Missing
/// fields take their defaults.
///
/// # Example
///
/// ```
/// use datagrid::{GridOptions, SortDirection};
///
/// let options = GridOptions::default()
///     .with_page_size(25)
///     .with_sort("age", SortDirection::Desc)
///     .with_filter("name", ["Alice", "Bob"]);
/// assert_eq!(options.initial_filters["name"].len(), 2);
///
/// let from_json: GridOptions =
///     serde_json::from_str(r#"{ "page_size": 25, "initial_sort": "age" }"#).unwrap();
/// assert_eq!(from_json.page_size, 25);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridOptions {
    /// Rows per page. `0` puts every row on a single page; negative values
    /// in deserialized input mean the same.
    ///
    /// Default: 10
    #[serde(deserialize_with = "deserialize_page_size")]
    pub page_size: usize,

    /// Column to sort by initially.
    pub initial_sort: Option<String>,

    /// Initial sort direction. Defaults to ascending when only
    /// `initial_sort` is given; ignored without `initial_sort`.
    pub initial_sort_direction: Option<SortDirection>,

    /// Accepted values per column id.
    pub initial_filters: BTreeMap<String, Vec<Value>>,

    /// Initial global filter text.
    pub global_filter: String,

    /// How the global filter text is interpreted.
    pub global_filter_mode: GlobalFilterMode,
}

impl Default for GridOptions {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            initial_sort: None,
            initial_sort_direction: None,
            initial_filters: BTreeMap::new(),
            global_filter: String::new(),
            global_filter_mode: GlobalFilterMode::default(),
        }
    }
}

impl GridOptions {
    /// Creates options with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the page size.
    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size;
        self
    }

    /// Sets the initial sort.
    pub fn with_sort(mut self, column_id: impl Into<String>, direction: SortDirection) -> Self {
        self.initial_sort = Some(column_id.into());
        self.initial_sort_direction = Some(direction);
        self
    }

    /// Seeds the filter set of a column.
    pub fn with_filter<V: Into<Value>>(
        mut self,
        column_id: impl Into<String>,
        values: impl IntoIterator<Item = V>,
    ) -> Self {
        self.initial_filters
            .insert(column_id.into(), values.into_iter().map(Into::into).collect());
        self
    }

    /// Sets the initial global filter text.
    pub fn with_global_filter(mut self, text: impl Into<String>) -> Self {
        self.global_filter = text.into();
        self
    }

    /// Sets the global filter mode.
    pub fn with_global_filter_mode(mut self, mode: GlobalFilterMode) -> Self {
        self.global_filter_mode = mode;
        self
    }
}

/// Deserializes a page size, mapping negative values to unbounded.
fn deserialize_page_size<'de, D>(deserializer: D) -> Result<usize, D::Error>
where
    D: Deserializer<'de>,
{
    let size = i64::deserialize(deserializer)?;
    Ok(usize::try_from(size).unwrap_or(0))
}
