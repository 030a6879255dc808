//! Sort types for table queries.

use serde::Deserialize;
use serde::Serialize;

/// Sort direction for ordering rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Ascending order (A-Z, 0-9).
    Asc,
    /// Descending order (Z-A, 9-0).
    Desc,
}

impl Direction {
    /// Returns the lowercase name of this direction.
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Asc => "asc",
            Direction::Desc => "desc",
        }
    }

    /// Parses `"asc"` or `"desc"` (case-insensitive).
    ///
    /// Returns `None` for anything else, including `"none"` — callers that
    /// accept `"none"` to clear the sort map it to an absent direction first.
    pub fn parse(s: &str) -> Option<Direction> {
        match s.to_ascii_lowercase().as_str() {
            "asc" => Some(Direction::Asc),
            "desc" => Some(Direction::Desc),
            _ => None,
        }
    }
}

/// The active single-column sort.
///
/// # Example
///
/// ```
/// use gridstate::query::Sort;
///
/// let sort = Sort::desc("revenue");
/// assert_eq!(sort.param_value(), "-revenue");
/// assert_eq!(Sort::asc("name").param_value(), "name");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sort {
    /// The column key being sorted on.
    pub field: String,
    /// The sort direction.
    pub direction: Direction,
}

impl Sort {
    /// Creates an ascending sort on a field.
    pub fn asc(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            direction: Direction::Asc,
        }
    }

    /// Creates a descending sort on a field.
    pub fn desc(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            direction: Direction::Desc,
        }
    }

    /// Encodes this sort as a fetch parameter value.
    ///
    /// Descending sorts are prefixed with `-`, ascending sorts are the bare
    /// field name.
    pub fn param_value(&self) -> String {
        match self.direction {
            Direction::Asc => self.field.clone(),
            Direction::Desc => format!("-{}", self.field),
        }
    }
}
