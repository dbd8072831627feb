//! Error types

/// Errors raised by the grid engine.
///
/// Most misuse degrades silently (unknown column ids become no-ops, page
/// numbers are clamped), so only a few conditions surface here.
#[derive(Debug, thiserror::Error)]
pub enum GridError {
    /// Two column definitions share the same id.
    #[error("Duplicate column id '{id}'")]
    DuplicateColumn { id: String },

    /// The global filter text is not a valid regular expression.
    #[error("Invalid global filter pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },
}

impl GridError {
    /// Creates a new duplicate column error.
    pub fn duplicate_column(id: impl Into<String>) -> Self {
        Self::DuplicateColumn { id: id.into() }
    }

    /// Creates a new invalid pattern error.
    pub fn invalid_pattern(pattern: impl Into<String>, source: regex::Error) -> Self {
        Self::InvalidPattern {
            pattern: pattern.into(),
            source,
        }
    }
}

/// Result alias for grid operations.
pub type Result<T> = std::result::Result<T, GridError>;
