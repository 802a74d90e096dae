//! Route handlers - parse caller input, delegate to the store, shape the
//! response. No storage or matching semantics live here.

use std::collections::HashMap;
use std::sync::Arc;

use axum::extract::{Path, Query as UrlQuery, State};
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::debug;

use crate::pet::{FieldValue, NewPet, Pet, PetPatch, FIELD_ID, FIELD_NOME, FIELD_RACA};
use crate::query::Query;
use crate::store::PetStore;

use super::error::ApiError;
use super::AppState;

/// Inbound filter criteria for `GET /pets`.
///
/// Every field is optional; absent entries impose no constraint and are
/// stripped before the fragment query is built.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PetFilter {
    pub id: Option<u64>,
    pub nome: Option<String>,
    pub raca: Option<String>,
}

impl PetFilter {
    /// The field mapping with absent entries stripped.
    pub fn into_fields(self) -> HashMap<String, FieldValue> {
        let mut fields = HashMap::new();
        if let Some(id) = self.id {
            fields.insert(FIELD_ID.to_string(), FieldValue::Int(id));
        }
        if let Some(nome) = self.nome {
            fields.insert(FIELD_NOME.to_string(), FieldValue::Str(nome));
        }
        if let Some(raca) = self.raca {
            fields.insert(FIELD_RACA.to_string(), FieldValue::Str(raca));
        }
        fields
    }
}

/// Response envelope for `GET /pets`.
#[derive(Debug, Serialize)]
pub struct PetList {
    pub pets: Vec<Pet>,
    pub count: usize,
}

/// `GET /health` - liveness plus how many pets are stored.
pub(super) async fn health<S: PetStore>(
    State(state): State<Arc<AppState<S>>>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let count = state.store.search(&Query::all())?.len();
    Ok(Json(json!({ "ok": true, "pets": count })))
}

/// `GET /pets` - list pets, optionally narrowed by a fragment filter.
pub(super) async fn list_pets<S: PetStore>(
    State(state): State<Arc<AppState<S>>>,
    UrlQuery(filter): UrlQuery<PetFilter>,
) -> Result<Json<PetList>, ApiError> {
    let query = Query::fragment(filter.into_fields());
    let pets = state.store.search(&query)?;
    let count = pets.len();
    Ok(Json(PetList { pets, count }))
}

/// `GET /pets/{id}` - single pet by id, 404 when no record holds it.
pub(super) async fn get_pet<S: PetStore>(
    State(state): State<Arc<AppState<S>>>,
    Path(id): Path<u64>,
) -> Result<Json<Pet>, ApiError> {
    let pet = state
        .store
        .search(&Query::id(id))?
        .into_iter()
        .next()
        .ok_or(ApiError::PetNotFound(id))?;
    Ok(Json(pet))
}

/// `POST /pets` - store a new pet, drawing an id when the body has none.
pub(super) async fn create_pet<S: PetStore>(
    State(state): State<Arc<AppState<S>>>,
    Json(new): Json<NewPet>,
) -> Result<Json<Pet>, ApiError> {
    let pet = state.store.insert(new.resolve(&state.ids))?;
    debug!(id = pet.id, "pet stored");
    Ok(Json(pet))
}

/// `PUT /pets/{id}` - merge the body's fields into the pet holding this id.
///
/// Responds with the updated record, or 404 when the id matched nothing.
pub(super) async fn update_pet<S: PetStore>(
    State(state): State<Arc<AppState<S>>>,
    Path(id): Path<u64>,
    Json(patch): Json<PetPatch>,
) -> Result<Json<Pet>, ApiError> {
    let touched = state.store.update(&patch, &Query::id(id))?;
    if touched == 0 {
        return Err(ApiError::PetNotFound(id));
    }
    debug!(id, touched, "pet updated");

    // The patch itself may have moved the record to a new id.
    let current = patch.id.unwrap_or(id);
    let pet = state
        .store
        .search(&Query::id(current))?
        .into_iter()
        .next()
        .ok_or(ApiError::PetNotFound(current))?;
    Ok(Json(pet))
}

/// `DELETE /pets/{id}` - remove by id. Removing a missing id is a silent
/// no-op; either way the response is 204 with no body.
pub(super) async fn delete_pet<S: PetStore>(
    State(state): State<Arc<AppState<S>>>,
    Path(id): Path<u64>,
) -> Result<StatusCode, ApiError> {
    let removed = state.store.remove(&Query::id(id))?;
    debug!(id, removed, "pet removed");
    Ok(StatusCode::NO_CONTENT)
}
