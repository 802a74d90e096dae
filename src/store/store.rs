//! PetStore - Abstract CRUD storage for pet records.

use crate::pet::{Pet, PetPatch};
use crate::query::Query;

use super::StoreError;

/// Abstract CRUD storage for pet records.
///
/// All four operations are total over well-formed inputs: none of them
/// fails for "not found". The only error any backend may surface is its own
/// storage failure.
pub trait PetStore: Send + Sync {
    /// Append a record to the collection and hand back the stored copy.
    ///
    /// The caller has already resolved the id, drawing from an
    /// `IdSequence` when the input had none. No uniqueness check is
    /// performed: a caller-supplied id may collide with a live record, in
    /// which case searches surface every holder in insertion order.
    fn insert(&self, pet: Pet) -> Result<Pet, StoreError>;

    /// Every record matching `query`, in insertion order. Empty when
    /// nothing matches; `Query::all()` retrieves the whole collection.
    fn search(&self, query: &Query) -> Result<Vec<Pet>, StoreError>;

    /// Merge `patch` into every record matching `query`. Returns how many
    /// records were touched; zero matches is a no-op, not an error.
    fn update(&self, patch: &PetPatch, query: &Query) -> Result<usize, StoreError>;

    /// Delete every record matching `query`. Returns how many records were
    /// removed; zero matches is a no-op, not an error.
    fn remove(&self, query: &Query) -> Result<usize, StoreError>;
}
