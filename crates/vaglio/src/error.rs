//! Library error types.

use thiserror::Error;

/// Errors raised while turning untrusted request parameters into a query.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum Error {
    /// A caller-supplied sort or filter column does not name any field of
    /// the record type. Propagated to the caller as-is: an unresolvable
    /// column is a malformed request or a probing attempt, never an
    /// implicit "no sort/filter requested".
    #[error("unknown field `{field}` on record type `{record}`")]
    UnknownField {
        /// The column name exactly as the caller supplied it.
        field: String,
        /// The record type the name failed to resolve against.
        record: &'static str,
    },
}

/// Result type alias using [`Error`].
pub type Result<T, E = Error> = std::result::Result<T, E>;
