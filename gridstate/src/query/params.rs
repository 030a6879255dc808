//! Outgoing fetch parameter assembly.

use serde::Deserialize;
use serde::Serialize;

use super::Filters;
use super::Sort;

/// How pagination is encoded in outgoing fetch parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParamStyle {
    /// Zero-based `start` offset plus `size` page length.
    #[default]
    Offset,
    /// One-based `page` number plus `per_page` page length.
    PagePerPage,
}

/// A flat key/value parameter map for a remote fetch.
///
/// Reserved keys are the pagination pair (per [`ParamStyle`]) and `sort`
/// (descending sorts are prefixed with `-`). Every active filter contributes
/// one additional pair, in filter insertion order.
///
/// # Example
///
/// ```
/// use gridstate::query::{FetchParams, Filters, ParamStyle, Sort};
///
/// let mut filters = Filters::new();
/// filters.set("status", "active");
///
/// let params = FetchParams::assemble(
///     20,
///     10,
///     Some(&Sort::desc("name")),
///     &filters,
///     ParamStyle::Offset,
/// );
/// assert_eq!(params.get("start"), Some("20"));
/// assert_eq!(params.get("sort"), Some("-name"));
/// assert_eq!(params.to_query_string(), "start=20&size=10&sort=-name&status=active");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FetchParams {
    pairs: Vec<(String, String)>,
}

impl FetchParams {
    /// Assembles the full parameter map for the current paging, sort, and
    /// filter state.
    pub fn assemble(
        start: usize,
        size: usize,
        sort: Option<&Sort>,
        filters: &Filters,
        style: ParamStyle,
    ) -> Self {
        let mut pairs = Vec::new();

        match style {
            ParamStyle::Offset => {
                pairs.push(("start".to_string(), start.to_string()));
                pairs.push(("size".to_string(), size.to_string()));
            }
            ParamStyle::PagePerPage => {
                // start is always a multiple of size, so this is exact
                pairs.push(("page".to_string(), (start / size + 1).to_string()));
                pairs.push(("per_page".to_string(), size.to_string()));
            }
        }

        if let Some(sort) = sort {
            pairs.push(("sort".to_string(), sort.param_value()));
        }

        for (key, value) in filters.iter() {
            pairs.push((key.to_string(), value.to_string()));
        }

        Self { pairs }
    }

    /// Returns the parameter pairs in emission order.
    pub fn pairs(&self) -> &[(String, String)] {
        &self.pairs
    }

    /// Returns the value for a parameter key, if present.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Returns `true` if no parameters are set.
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Encodes the parameters as a percent-encoded query string.
    pub fn to_query_string(&self) -> String {
        self.pairs
            .iter()
            .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
            .collect::<Vec<_>>()
            .join("&")
    }
}
