//! Field resolution.
//!
//! The sole trust boundary between untrusted strings and structural field
//! access. Every queryable record type declares an allow-list of
//! name → accessor pairs, built at compile time and shared read-only; a
//! caller-supplied column name either resolves case-insensitively against
//! that list or the request fails. A name outside the list can never become
//! the target of a comparison, which is what closes the injection vector.

use crate::error::{Error, Result};
use crate::value::FieldValue;

/// One entry in a record type's field allow-list: the declared name and the
/// accessor that reads the field from a record.
#[derive(Debug)]
pub struct FieldSpec<T> {
    /// Canonical field name as declared on the record type.
    pub name: &'static str,
    /// Accessor reading this field from a record.
    pub get: fn(&T) -> FieldValue,
}

impl<T> FieldSpec<T> {
    /// Read this field's value from a record.
    pub fn read(&self, record: &T) -> FieldValue {
        (self.get)(record)
    }
}

/// A record type whose fields may be targeted by sort and filter columns.
///
/// Implemented with the [`queryable!`](crate::queryable) macro; the field
/// table is `'static` immutable data, so concurrent requests share it
/// without coordination.
pub trait Queryable: Sized {
    /// Record type name, used in diagnostics.
    const RECORD: &'static str;

    /// The field allow-list for this record type.
    fn fields() -> &'static [FieldSpec<Self>];
}

/// Resolve a caller-supplied column name against `T`'s field allow-list.
///
/// Matching is ASCII-case-insensitive; declared field names are Rust
/// identifiers, so ASCII folding is exact for every name that can resolve.
/// No match fails closed with [`Error::UnknownField`].
///
/// Blank names never reach this function; the plan builder treats them as
/// "no preference".
pub fn resolve_field<T: Queryable>(name: &str) -> Result<&'static FieldSpec<T>> {
    T::fields()
        .iter()
        .find(|spec| spec.name.eq_ignore_ascii_case(name))
        .ok_or_else(|| Error::UnknownField {
            field: name.to_string(),
            record: T::RECORD,
        })
}

/// Declare a record type's field allow-list.
///
/// Generates the [`Queryable`] impl with one accessor per listed field;
/// each field must be readable through `FieldValue::from(&record.field)`.
///
/// ```
/// use vaglio::queryable;
///
/// #[derive(Clone)]
/// struct City {
///     id: i64,
///     name: String,
///     lat: f64,
/// }
///
/// queryable!(City { id, name, lat });
/// ```
#[macro_export]
macro_rules! queryable {
    ($ty:ty { $($field:ident),+ $(,)? }) => {
        impl $crate::field::Queryable for $ty {
            const RECORD: &'static str = stringify!($ty);

            fn fields() -> &'static [$crate::field::FieldSpec<Self>] {
                const FIELDS: &[$crate::field::FieldSpec<$ty>] = &[
                    $($crate::field::FieldSpec {
                        name: stringify!($field),
                        get: |record| $crate::value::FieldValue::from(&record.$field),
                    },)+
                ];
                FIELDS
            }
        }
    };
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct Probe {
        id: i64,
        name: String,
    }

    queryable!(Probe { id, name });

    #[test]
    fn resolves_declared_fields() {
        let spec = resolve_field::<Probe>("name").unwrap();
        assert_eq!(spec.name, "name");

        let probe = Probe {
            id: 3,
            name: "Lisbon".to_string(),
        };
        assert_eq!(spec.read(&probe), FieldValue::Text("Lisbon".to_string()));
        assert_eq!(
            resolve_field::<Probe>("id").unwrap().read(&probe),
            FieldValue::Int(3)
        );
    }

    #[test]
    fn resolution_is_case_insensitive() {
        for candidate in ["name", "Name", "NAME", "nAmE"] {
            let spec = resolve_field::<Probe>(candidate).unwrap();
            assert_eq!(spec.name, "name", "candidate {candidate:?}");
        }
    }

    #[test]
    fn unknown_names_fail_closed() {
        for probe in ["nope", "../passwd", "name; DROP", "name ", " name"] {
            let err = resolve_field::<Probe>(probe).unwrap_err();
            assert_eq!(
                err,
                Error::UnknownField {
                    field: probe.to_string(),
                    record: "Probe",
                },
                "probe {probe:?} must not resolve"
            );
        }
    }

    #[test]
    fn record_name_reported_in_error() {
        let err = resolve_field::<Probe>("bogus").unwrap_err();
        assert_eq!(
            err.to_string(),
            "unknown field `bogus` on record type `Probe`"
        );
    }
}
