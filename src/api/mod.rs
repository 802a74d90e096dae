//! HTTP surface over a [`PetStore`].
//!
//! Routes:
//!
//! - `GET    /health`    - liveness plus the stored pet count
//! - `GET    /pets`      - list pets, optionally filtered by field values
//! - `POST   /pets`      - store a pet, drawing an id when the body has none
//! - `GET    /pets/{id}` - fetch one pet by id
//! - `PUT    /pets/{id}` - merge fields into the pet holding this id
//! - `DELETE /pets/{id}` - remove by id, 204 either way
//!
//! The router is generic over the store so tests can run against any
//! [`PetStore`] implementation:
//!
//! ```ignore
//! let state = Arc::new(AppState::new(InMemoryPetStore::new()));
//! api::serve(state, "127.0.0.1:5000").await?;
//! ```

mod error;
mod handlers;

pub use error::ApiError;
pub use handlers::{PetFilter, PetList};

use std::sync::Arc;

use axum::routing::get;
use axum::Router;
use tokio::net::TcpListener;
use tracing::info;

use crate::ids::IdSequence;
use crate::store::PetStore;

/// Shared state handed to every handler: the store plus the id sequence
/// that feeds creations without an explicit id.
pub struct AppState<S> {
    pub store: S,
    pub ids: IdSequence,
}

impl<S: PetStore> AppState<S> {
    /// State with a fresh id sequence starting at zero.
    pub fn new(store: S) -> Self {
        Self::with_ids(store, IdSequence::new())
    }

    /// State with a pre-seeded id sequence.
    pub fn with_ids(store: S, ids: IdSequence) -> Self {
        AppState { store, ids }
    }
}

/// Build the application router around shared state.
pub fn router<S: PetStore + 'static>(state: Arc<AppState<S>>) -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        .route("/pets", get(handlers::list_pets).post(handlers::create_pet))
        .route(
            "/pets/:id",
            get(handlers::get_pet)
                .put(handlers::update_pet)
                .delete(handlers::delete_pet),
        )
        .with_state(state)
}

/// Bind `addr` and serve the API until the task is cancelled.
pub async fn serve<S: PetStore + 'static>(
    state: Arc<AppState<S>>,
    addr: &str,
) -> Result<(), std::io::Error> {
    let listener = TcpListener::bind(addr).await?;
    info!(addr = %listener.local_addr()?, "pethappy listening");
    axum::serve(listener, router(state)).await
}
