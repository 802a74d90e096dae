mod ids;
mod pet;
mod query;
mod store;

pub use ids::IdSequence;
pub use pet::{FieldValue, NewPet, Pet, PetPatch, FIELD_ID, FIELD_NOME, FIELD_RACA};
pub use query::Query;
pub use store::{InMemoryPetStore, PetStore, StoreError};

// The HTTP surface pulls in axum and tokio, so it stays behind a feature
// for callers that only want the store.
#[cfg(feature = "http")]
pub mod api;
