//! Vaglio: paged, sorted, filtered views over typed record collections.
//!
//! Turns untrusted, string-typed client parameters (page index, page size,
//! sort column, sort direction, filter column, filter text) into a safe,
//! correctly ordered query against a typed record collection, then packages
//! the result with pagination metadata.
//!
//! Column names resolve against a per-type allow-list declared with
//! [`queryable!`]; anything that is not a declared field fails the request
//! with [`Error::UnknownField`] instead of being silently ignored. Filter,
//! count, sort, and window compose in that fixed order through a data-only
//! [`QueryPlan`](plan::QueryPlan) interpreted by a
//! [`RecordSource`](source::RecordSource).
//!
//! ```
//! use vaglio::{MemorySource, PageRequest, paginate, queryable};
//!
//! #[derive(Debug, Clone)]
//! struct City {
//!     id: i64,
//!     name: String,
//!     population: i64,
//! }
//!
//! queryable!(City { id, name, population });
//!
//! let cities = vec![
//!     City { id: 1, name: "San Diego".into(), population: 1_386_932 },
//!     City { id: 2, name: "Santiago".into(), population: 6_310_000 },
//!     City { id: 3, name: "Oslo".into(), population: 709_037 },
//! ];
//!
//! let request = PageRequest::new(0, 10)
//!     .with_filter("name", "San")
//!     .with_sort("population")
//!     .with_sort_order("ASC");
//!
//! let page = paginate(&MemorySource::new(&cities), &request)?;
//! assert_eq!(page.total_count, 2);
//! assert_eq!(page.data[0].name, "San Diego");
//! # Ok::<(), vaglio::Error>(())
//! ```

pub mod error;
pub mod field;
pub mod paginate;
pub mod plan;
pub mod source;
pub mod types;
pub mod value;

pub use error::{Error, Result};
pub use field::{FieldSpec, Queryable, resolve_field};
pub use paginate::paginate;
pub use source::{MemorySource, RecordSource};
pub use types::{FilterOperator, Page, PageRequest, SortDirection};
pub use value::FieldValue;

pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::field::{FieldSpec, Queryable, resolve_field};
    pub use crate::paginate::paginate;
    pub use crate::plan::{FilterClause, QueryPlan, SortClause};
    pub use crate::queryable;
    pub use crate::source::{MemorySource, RecordSource};
    pub use crate::types::{FilterOperator, Page, PageRequest, SortDirection};
    pub use crate::value::FieldValue;
}
