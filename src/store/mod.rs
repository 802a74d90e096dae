//! Document store - the in-memory collection of pet records.
//!
//! `PetStore` is the CRUD seam; `InMemoryPetStore` is the backend: a plain
//! vector of records behind a lock, kept in insertion order. All state is
//! process-memory-resident and gone on exit - there is no durability layer
//! and no explicit clear.
//!
//! Absence is never an error here: a search that matches nothing returns an
//! empty vec, a mutation that matches nothing reports zero touched records.
//! Callers that need "not found" semantics (the HTTP layer's single-pet
//! lookup) derive them from the empty result.
//!
//! ## Example
//!
//! ```
//! use pethappy::{InMemoryPetStore, Pet, PetStore, Query};
//!
//! let store = InMemoryPetStore::new();
//! store.insert(Pet::new(0, "Rex", "Labrador"))?;
//!
//! let all = store.search(&Query::all())?;
//! assert_eq!(all.len(), 1);
//! # Ok::<(), pethappy::StoreError>(())
//! ```

mod in_memory;
mod store;

use std::fmt;

/// Error type for store operations.
///
/// "Not found" is not represented here - it is an empty result, not a
/// failure. The only thing that can go wrong is a poisoned lock.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    LockPoisoned(&'static str),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::LockPoisoned(operation) => {
                write!(f, "store lock poisoned during {}", operation)
            }
        }
    }
}

impl std::error::Error for StoreError {}

pub use in_memory::InMemoryPetStore;
pub use store::PetStore;
