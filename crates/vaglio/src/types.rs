//! Request and result types for the pagination boundary.
//!
//! Provides the transport-facing types:
//! - `PageRequest`: untrusted, string-typed client parameters
//! - `FilterOperator`: supported string-match strategies
//! - `SortDirection`: canonicalized sort direction
//! - `Page`: a fixed page of records plus pagination metadata

use serde::{Deserialize, Serialize};

/// String-match strategies for single-column filtering.
///
/// Applied to the resolved field's text rendering against the filter query
/// verbatim, with no case folding and no trimming. Callers wanting
/// case-insensitive matching normalize on their own side.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum FilterOperator {
    /// Prefix match.
    #[default]
    StartsWith,
    /// Substring match.
    Contains,
    /// Suffix match.
    EndsWith,
}

impl FilterOperator {
    /// Whether `value` satisfies this operator against `query`.
    pub fn matches(&self, value: &str, query: &str) -> bool {
        match self {
            Self::StartsWith => value.starts_with(query),
            Self::Contains => value.contains(query),
            Self::EndsWith => value.ends_with(query),
        }
    }
}

/// Sort direction.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    /// Canonicalize a caller-supplied direction string.
    ///
    /// Only an exact case-insensitive `"ASC"` yields [`Asc`]; absent or
    /// malformed input yields [`Desc`]. The asymmetric default is
    /// load-bearing: every client that omits the direction gets descending
    /// order, and changing it would silently reorder their results.
    ///
    /// [`Asc`]: Self::Asc
    /// [`Desc`]: Self::Desc
    pub fn normalize(raw: Option<&str>) -> Self {
        match raw {
            Some(raw) if raw.eq_ignore_ascii_case("ASC") => Self::Asc,
            _ => Self::Desc,
        }
    }

    /// Transport spelling of this direction.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Asc => "ASC",
            Self::Desc => "DESC",
        }
    }
}

impl std::fmt::Display for SortDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Untrusted client parameters for one paged query.
///
/// Constructed per request and never persisted. Column names and the sort
/// order arrive as raw strings; validation and normalization happen during
/// plan building, not here.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PageRequest {
    /// Zero-based page index.
    pub page_index: u32,

    /// Records per page. Must be positive; validated upstream.
    pub page_size: u32,

    /// Field to sort by, if any.
    pub sort_column: Option<String>,

    /// Raw sort direction; anything but `"ASC"` means descending.
    pub sort_order: Option<String>,

    /// Field to filter on, if any.
    pub filter_column: Option<String>,

    /// Filter text, matched verbatim.
    pub filter_query: Option<String>,

    /// String-match strategy for the filter.
    pub filter_operator: FilterOperator,
}

fn default_page_size() -> u32 {
    10
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page_index: 0,
            page_size: default_page_size(),
            sort_column: None,
            sort_order: None,
            filter_column: None,
            filter_query: None,
            filter_operator: FilterOperator::default(),
        }
    }
}

impl PageRequest {
    /// Create a request for the given page window.
    pub fn new(page_index: u32, page_size: u32) -> Self {
        Self {
            page_index,
            page_size,
            ..Self::default()
        }
    }

    /// Set the sort column.
    pub fn with_sort(mut self, column: &str) -> Self {
        self.sort_column = Some(column.to_string());
        self
    }

    /// Set the raw sort direction string.
    pub fn with_sort_order(mut self, order: &str) -> Self {
        self.sort_order = Some(order.to_string());
        self
    }

    /// Set the filter column and query.
    pub fn with_filter(mut self, column: &str, query: &str) -> Self {
        self.filter_column = Some(column.to_string());
        self.filter_query = Some(query.to_string());
        self
    }

    /// Set the filter operator.
    pub fn with_operator(mut self, operator: FilterOperator) -> Self {
        self.filter_operator = operator;
        self
    }
}

/// One page of records plus pagination metadata.
///
/// The echoed sort/filter parameters are the *resolved* ones (canonical
/// field names and the normalized direction), not the raw caller strings.
/// Immutable after construction; serialized to the caller and discarded.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    /// Records in this page, at most `page_size` of them.
    pub data: Vec<T>,

    /// Zero-based page index.
    pub page_index: u32,

    /// Requested page size.
    pub page_size: u32,

    /// Records matching the filter, counted before windowing.
    pub total_count: u64,

    /// Total pages, always derived from `total_count` and `page_size`.
    pub total_pages: u32,

    /// Whether a previous page exists.
    pub has_previous_page: bool,

    /// Whether a next page exists.
    pub has_next_page: bool,

    /// Canonical name of the applied sort column.
    pub sort_column: Option<String>,

    /// Normalized direction of the applied sort.
    pub sort_order: Option<SortDirection>,

    /// Canonical name of the applied filter column.
    pub filter_column: Option<String>,

    /// Applied filter text.
    pub filter_query: Option<String>,
}

impl<T> Page<T> {
    /// Assemble a page with derived pagination metadata.
    ///
    /// `total_pages` comes from `total_count` and `page_size`, never from
    /// `data.len()`: a short or empty final window must not shrink the
    /// page count.
    pub fn new(data: Vec<T>, total_count: u64, page_index: u32, page_size: u32) -> Self {
        let total_pages = total_count.div_ceil(u64::from(page_size.max(1))) as u32;

        Self {
            data,
            page_index,
            page_size,
            total_count,
            total_pages,
            has_previous_page: page_index > 0,
            has_next_page: page_index + 1 < total_pages,
            sort_column: None,
            sort_order: None,
            filter_column: None,
            filter_query: None,
        }
    }
}
