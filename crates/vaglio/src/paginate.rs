//! Pagination entry point.

use crate::error::Result;
use crate::field::Queryable;
use crate::plan::QueryPlan;
use crate::source::RecordSource;
use crate::types::{Page, PageRequest};

/// Execute one paged query against a record source.
///
/// Builds the validated plan, counts the filtered set, materializes the
/// page window, and assembles the page with its metadata. The echoed
/// sort/filter parameters come from the resolved plan (canonical field
/// names, normalized direction), not the raw caller strings.
///
/// Reads the source exactly twice (one counting pass, one fetch) and
/// mutates nothing.
///
/// # Errors
///
/// [`Error::UnknownField`](crate::Error::UnknownField) when a non-blank
/// sort or filter column does not resolve against `T`.
pub fn paginate<T, S>(source: &S, request: &PageRequest) -> Result<Page<T>>
where
    T: Queryable + 'static,
    S: RecordSource<T> + ?Sized,
{
    let plan = QueryPlan::from_request(request)?;

    let total_count = source.count(&plan);
    let data = source.fetch(&plan);

    tracing::debug!(
        record = T::RECORD,
        total_count,
        rows = data.len(),
        page_index = request.page_index,
        page_size = request.page_size,
        "paged query executed"
    );

    let mut page = Page::new(data, total_count, request.page_index, request.page_size);
    if let Some(sort) = plan.sort() {
        page.sort_column = Some(sort.field().name.to_string());
        page.sort_order = Some(sort.direction());
    }
    if let Some(filter) = plan.filter() {
        page.filter_column = Some(filter.field().name.to_string());
        page.filter_query = Some(filter.query().to_string());
    }

    Ok(page)
}
