//! Table configuration

use serde::Deserialize;
use serde::Serialize;

use crate::query::ParamStyle;

/// Immutable table configuration.
///
/// Constructed once, before the controller; all later access goes through
/// getters.
///
/// # Example
///
/// ```
/// use gridstate::TableConfig;
/// use gridstate::query::ParamStyle;
///
/// let config = TableConfig::default()
///     .with_page_size(25)
///     .with_param_style(ParamStyle::PagePerPage);
///
/// assert_eq!(config.page_size(), 25);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableConfig {
    /// Initial page length.
    ///
    /// Default: 10
    page_size: usize,

    /// Record field that carries the row identity.
    ///
    /// Default: `"id"`
    id_field: String,

    /// Pagination encoding for outgoing fetch parameters.
    ///
    /// Default: [`ParamStyle::Offset`]
    param_style: ParamStyle,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            page_size: 10,
            id_field: "id".to_string(),
            param_style: ParamStyle::Offset,
        }
    }
}

impl TableConfig {
    /// Creates a new config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the initial page size (minimum 1).
    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size.max(1);
        self
    }

    /// Sets the id field.
    pub fn with_id_field(mut self, id_field: impl Into<String>) -> Self {
        self.id_field = id_field.into();
        self
    }

    /// Sets the pagination parameter style.
    pub fn with_param_style(mut self, style: ParamStyle) -> Self {
        self.param_style = style;
        self
    }

    /// Returns the initial page size.
    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Returns the id field.
    pub fn id_field(&self) -> &str {
        &self.id_field
    }

    /// Returns the pagination parameter style.
    pub fn param_style(&self) -> ParamStyle {
        self.param_style
    }
}
