//! Record sources.
//!
//! A record source is an abstract, lazily-evaluated sequence of typed
//! records that interprets a [`QueryPlan`]: a filtered count and a
//! filtered, sorted, windowed fetch. Database-backed adapters live with
//! their storage layer; the in-memory adapter here serves slice-backed
//! collections and tests.

use crate::field::Queryable;
use crate::plan::QueryPlan;

/// An abstract record sequence that can interpret a query plan.
///
/// Implementations must honor the plan's fixed interpretation order:
/// filter, then count or sort, then window. `count` reflects the filter but
/// never the window.
pub trait RecordSource<T: Queryable> {
    /// Count the records matching the plan's filter, pre-window.
    fn count(&self, plan: &QueryPlan<T>) -> u64;

    /// Materialize the plan's page window: filter, sort, skip, take.
    fn fetch(&self, plan: &QueryPlan<T>) -> Vec<T>;
}

/// In-memory record source over a borrowed slice.
///
/// Read-only: concurrent requests may share one source without
/// coordination. Writers synchronizing with readers is the owning
/// collection's concern.
#[derive(Debug)]
pub struct MemorySource<'a, T> {
    records: &'a [T],
}

impl<'a, T> MemorySource<'a, T> {
    /// Wrap a slice of records.
    pub fn new(records: &'a [T]) -> Self {
        Self { records }
    }
}

impl<T: Queryable + Clone> RecordSource<T> for MemorySource<'_, T> {
    fn count(&self, plan: &QueryPlan<T>) -> u64 {
        match plan.filter() {
            Some(filter) => self.records.iter().filter(|r| filter.matches(r)).count() as u64,
            None => self.records.len() as u64,
        }
    }

    fn fetch(&self, plan: &QueryPlan<T>) -> Vec<T> {
        let skip = plan.skip() as usize;
        let take = plan.take() as usize;

        match plan.sort() {
            Some(sort) => {
                // Sorting forces the filtered set into memory, never the
                // unfiltered source. The sort is stable, so equal keys keep
                // their source order.
                let mut rows: Vec<&T> =
                    self.records.iter().filter(|r| plan.matches(r)).collect();
                rows.sort_by(|a, b| sort.compare(a, b));
                rows.into_iter().skip(skip).take(take).cloned().collect()
            }
            None => self
                .records
                .iter()
                .filter(|r| plan.matches(r))
                .skip(skip)
                .take(take)
                .cloned()
                .collect(),
        }
    }
}
