//! InMemoryPetStore - Vec-backed pet store.

use std::sync::{Arc, RwLock};

use crate::pet::{Pet, PetPatch};
use crate::query::Query;

use super::{PetStore, StoreError};

/// In-memory pet store backed by a vector.
///
/// Records keep their insertion order; searches report matches in that
/// order. Clone-friendly via Arc: clones share the same collection.
///
/// Every operation holds the lock for its full duration, so each call
/// evaluates its predicate against a consistent snapshot of the collection.
/// Lock hold times stay short because the collection is expected to remain
/// small; nothing here suspends, times out, or cancels.
#[derive(Clone)]
pub struct InMemoryPetStore {
    pets: Arc<RwLock<Vec<Pet>>>,
}

impl Default for InMemoryPetStore {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryPetStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        InMemoryPetStore {
            pets: Arc::new(RwLock::new(Vec::new())),
        }
    }
}

impl PetStore for InMemoryPetStore {
    fn insert(&self, pet: Pet) -> Result<Pet, StoreError> {
        let mut pets = self
            .pets
            .write()
            .map_err(|_| StoreError::LockPoisoned("insert"))?;

        pets.push(pet.clone());
        Ok(pet)
    }

    fn search(&self, query: &Query) -> Result<Vec<Pet>, StoreError> {
        let pets = self
            .pets
            .read()
            .map_err(|_| StoreError::LockPoisoned("search"))?;

        Ok(pets
            .iter()
            .filter(|pet| query.matches(pet))
            .cloned()
            .collect())
    }

    fn update(&self, patch: &PetPatch, query: &Query) -> Result<usize, StoreError> {
        let mut pets = self
            .pets
            .write()
            .map_err(|_| StoreError::LockPoisoned("update"))?;

        let mut touched = 0;
        for pet in pets.iter_mut() {
            if query.matches(pet) {
                patch.apply(pet);
                touched += 1;
            }
        }

        Ok(touched)
    }

    fn remove(&self, query: &Query) -> Result<usize, StoreError> {
        let mut pets = self
            .pets
            .write()
            .map_err(|_| StoreError::LockPoisoned("remove"))?;

        let before = pets.len();
        pets.retain(|pet| !query.matches(pet));
        Ok(before - pets.len())
    }
}
