//! Query plan construction.
//!
//! Untrusted request parameters become a small data-only plan,
//! `{filter?, sort?, skip, take}` over resolved field handles, which a
//! record source then interprets. Building the plan is where column names
//! are validated: a blank column is "no preference", a non-blank column
//! that fails to resolve fails the whole request. There is no fallback to
//! an unfiltered or unsorted query for a column the caller actually named.

use crate::error::Result;
use crate::field::{FieldSpec, Queryable, resolve_field};
use crate::types::{FilterOperator, PageRequest, SortDirection};
use std::cmp::Ordering;

/// A resolved single-column string-match filter.
#[derive(Debug)]
pub struct FilterClause<T: 'static> {
    field: &'static FieldSpec<T>,
    operator: FilterOperator,
    query: String,
}

impl<T: 'static> FilterClause<T> {
    /// The resolved target field.
    pub fn field(&self) -> &'static FieldSpec<T> {
        self.field
    }

    /// The string-match strategy.
    pub fn operator(&self) -> FilterOperator {
        self.operator
    }

    /// The filter text, kept verbatim.
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Whether a record satisfies this filter.
    pub fn matches(&self, record: &T) -> bool {
        self.operator
            .matches(&self.field.read(record).as_text(), &self.query)
    }
}

/// A resolved single-column sort.
#[derive(Debug)]
pub struct SortClause<T: 'static> {
    field: &'static FieldSpec<T>,
    direction: SortDirection,
}

impl<T: 'static> SortClause<T> {
    /// The resolved sort field.
    pub fn field(&self) -> &'static FieldSpec<T> {
        self.field
    }

    /// The normalized direction.
    pub fn direction(&self) -> SortDirection {
        self.direction
    }

    /// Compare two records by the sort field's natural ordering, reversed
    /// for descending sorts.
    pub fn compare(&self, a: &T, b: &T) -> Ordering {
        let ordering = self.field.read(a).cmp(&self.field.read(b));
        match self.direction {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    }
}

/// A validated, data-only query plan.
///
/// Interpretation order is fixed: filter, count, sort, window. Reversing
/// sort and window would change which records land in the page, so record
/// sources must honor it.
#[derive(Debug)]
pub struct QueryPlan<T: 'static> {
    filter: Option<FilterClause<T>>,
    sort: Option<SortClause<T>>,
    skip: u64,
    take: u64,
}

impl<T: Queryable + 'static> QueryPlan<T> {
    /// Build a plan from untrusted request parameters.
    ///
    /// # Errors
    ///
    /// [`Error::UnknownField`](crate::Error::UnknownField) when a non-blank
    /// filter or sort column does not resolve against `T`.
    pub fn from_request(request: &PageRequest) -> Result<Self> {
        let filter = match (
            non_blank(request.filter_column.as_deref()),
            non_blank(request.filter_query.as_deref()),
        ) {
            (Some(column), Some(query)) => Some(FilterClause {
                field: resolve_field::<T>(column)?,
                operator: request.filter_operator,
                query: query.to_string(),
            }),
            // A filter needs both a column and a query; anything less is
            // "no filter requested".
            _ => None,
        };

        let sort = match non_blank(request.sort_column.as_deref()) {
            Some(column) => Some(SortClause {
                field: resolve_field::<T>(column)?,
                direction: SortDirection::normalize(request.sort_order.as_deref()),
            }),
            None => None,
        };

        tracing::debug!(
            record = T::RECORD,
            filter = filter.as_ref().map(|f| f.field.name),
            sort = sort.as_ref().map(|s| s.field.name),
            page_index = request.page_index,
            page_size = request.page_size,
            "query plan built"
        );

        Ok(Self {
            filter,
            sort,
            skip: u64::from(request.page_index) * u64::from(request.page_size),
            take: u64::from(request.page_size),
        })
    }
}

impl<T: 'static> QueryPlan<T> {
    /// The filter clause, if a filter was requested.
    pub fn filter(&self) -> Option<&FilterClause<T>> {
        self.filter.as_ref()
    }

    /// The sort clause, if a sort was requested.
    pub fn sort(&self) -> Option<&SortClause<T>> {
        self.sort.as_ref()
    }

    /// Records to skip before the page window.
    pub fn skip(&self) -> u64 {
        self.skip
    }

    /// Window size.
    pub fn take(&self) -> u64 {
        self.take
    }

    /// Whether a record passes the plan's filter (trivially true without
    /// one).
    pub fn matches(&self, record: &T) -> bool {
        self.filter.as_ref().is_none_or(|f| f.matches(record))
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::queryable;

    #[derive(Debug, Clone)]
    struct Town {
        name: String,
        population: i64,
    }

    queryable!(Town { name, population });

    fn town(name: &str, population: i64) -> Town {
        Town {
            name: name.to_string(),
            population,
        }
    }

    #[test]
    fn bare_request_builds_window_only_plan() {
        let plan = QueryPlan::<Town>::from_request(&PageRequest::new(2, 10)).unwrap();

        assert!(plan.filter().is_none());
        assert!(plan.sort().is_none());
        assert_eq!(plan.skip(), 20);
        assert_eq!(plan.take(), 10);
    }

    #[test]
    fn blank_columns_mean_no_preference() {
        let request = PageRequest {
            sort_column: Some("   ".to_string()),
            filter_column: Some(String::new()),
            filter_query: Some("x".to_string()),
            ..PageRequest::default()
        };

        let plan = QueryPlan::<Town>::from_request(&request).unwrap();
        assert!(plan.filter().is_none());
        assert!(plan.sort().is_none());
    }

    #[test]
    fn unknown_filter_column_fails_the_request() {
        let request = PageRequest::default().with_filter("Name; DROP", "San");

        let err = QueryPlan::<Town>::from_request(&request).unwrap_err();
        assert_eq!(
            err,
            Error::UnknownField {
                field: "Name; DROP".to_string(),
                record: "Town",
            }
        );
    }

    #[test]
    fn unknown_sort_column_fails_even_with_valid_filter() {
        let request = PageRequest::default()
            .with_filter("name", "San")
            .with_sort("../passwd");

        assert!(QueryPlan::<Town>::from_request(&request).is_err());
    }

    #[test]
    fn filter_column_without_query_is_not_validated() {
        // No query means no filter is requested, so the column is never
        // resolved and cannot fail the request.
        let request = PageRequest {
            filter_column: Some("bogus".to_string()),
            filter_query: None,
            ..PageRequest::default()
        };

        let plan = QueryPlan::<Town>::from_request(&request).unwrap();
        assert!(plan.filter().is_none());
    }

    #[test]
    fn resolved_clauses_carry_canonical_names() {
        let request = PageRequest::default()
            .with_filter("NAME", "San")
            .with_sort("Population")
            .with_sort_order("asc");

        let plan = QueryPlan::<Town>::from_request(&request).unwrap();
        assert_eq!(plan.filter().unwrap().field().name, "name");
        assert_eq!(plan.sort().unwrap().field().name, "population");
        assert_eq!(plan.sort().unwrap().direction(), SortDirection::Asc);
    }

    #[test]
    fn sort_direction_defaults_to_desc() {
        let plan =
            QueryPlan::<Town>::from_request(&PageRequest::default().with_sort("name")).unwrap();
        assert_eq!(plan.sort().unwrap().direction(), SortDirection::Desc);

        let plan = QueryPlan::<Town>::from_request(
            &PageRequest::default().with_sort("name").with_sort_order("xyz"),
        )
        .unwrap();
        assert_eq!(plan.sort().unwrap().direction(), SortDirection::Desc);
    }

    #[test]
    fn filter_clause_matches_records() {
        let request = PageRequest::default().with_filter("name", "San");
        let plan = QueryPlan::<Town>::from_request(&request).unwrap();
        let clause = plan.filter().unwrap();

        assert!(clause.matches(&town("San Diego", 1)));
        assert!(clause.matches(&town("Santiago", 1)));
        assert!(!clause.matches(&town("Oakland", 1)));
        assert!(!clause.matches(&town("san diego", 1))); // verbatim, no case folding
    }

    #[test]
    fn sort_clause_compares_by_field() {
        let request = PageRequest::default().with_sort("population").with_sort_order("ASC");
        let plan = QueryPlan::<Town>::from_request(&request).unwrap();
        let clause = plan.sort().unwrap();

        let small = town("A", 10);
        let large = town("B", 1_000);
        assert_eq!(clause.compare(&small, &large), Ordering::Less);

        let request = PageRequest::default().with_sort("population");
        let plan = QueryPlan::<Town>::from_request(&request).unwrap();
        assert_eq!(plan.sort().unwrap().compare(&small, &large), Ordering::Greater);
    }
}
