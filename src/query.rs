//! Query engine - structural predicates over pet records.
//!
//! A query is an explicit tagged value rather than an opaque closure, so
//! the store's matching logic stays inspectable and testable on its own.
//! Two shapes exist:
//!
//! - a *fragment*: a record matches when every named field is present and
//!   equal. The empty fragment matches everything and is how "list all
//!   records" is expressed.
//! - a *single-field equality*: used for identity lookups (`id == n`), but
//!   general over any field name.
//!
//! Building a query has no side effects and touches no shared state; the
//! same query against the same record always answers the same way.
//!
//! ## Example
//!
//! ```
//! use std::collections::HashMap;
//! use pethappy::{FieldValue, Pet, Query, FIELD_RACA};
//!
//! let rex = Pet::new(0, "Rex", "Labrador");
//!
//! let mut fields = HashMap::new();
//! fields.insert(FIELD_RACA.to_string(), FieldValue::from("Labrador"));
//! assert!(Query::fragment(fields).matches(&rex));
//! assert!(Query::id(0).matches(&rex));
//! assert!(Query::all().matches(&rex));
//! ```

use std::collections::HashMap;

use crate::pet::{FieldValue, Pet, FIELD_ID};

/// A predicate over a single pet record.
#[derive(Debug, Clone, PartialEq)]
pub enum Query {
    /// Matches when every named field is present on the record and equal
    /// to the required value. Absent names impose no constraint, so the
    /// empty fragment matches every record.
    Fragment(HashMap<String, FieldValue>),
    /// Matches when the single named field is present and equal, type and
    /// value exactly.
    Equals { field: String, value: FieldValue },
}

impl Query {
    /// The always-true query: an empty fragment.
    pub fn all() -> Self {
        Query::Fragment(HashMap::new())
    }

    /// A fragment query over the given field mapping. The caller has
    /// already stripped the fields it does not want to constrain.
    pub fn fragment(fields: HashMap<String, FieldValue>) -> Self {
        Query::Fragment(fields)
    }

    /// An equality query over one named field.
    pub fn equals(field: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        Query::Equals {
            field: field.into(),
            value: value.into(),
        }
    }

    /// The identity lookup: `id == id`.
    pub fn id(id: u64) -> Self {
        Query::equals(FIELD_ID, id)
    }

    /// Evaluate this query against one record.
    pub fn matches(&self, pet: &Pet) -> bool {
        match self {
            Query::Fragment(fields) => fields
                .iter()
                .all(|(name, value)| pet.field(name).as_ref() == Some(value)),
            Query::Equals { field, value } => pet.field(field).as_ref() == Some(value),
        }
    }
}
