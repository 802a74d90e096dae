//! Pet records - the fixed-shape documents held by the store.
//!
//! A record has exactly three fields: `id`, `nome`, and `raca`. The shape is
//! fixed, so records are plain typed structs; the open "field name to value"
//! view survives only at the query boundary, where callers constrain a
//! subset of fields by name.

use serde::{Deserialize, Serialize};

use crate::ids::IdSequence;

/// Field name for a pet's id.
pub const FIELD_ID: &str = "id";
/// Field name for a pet's name.
pub const FIELD_NOME: &str = "nome";
/// Field name for a pet's breed.
pub const FIELD_RACA: &str = "raca";

/// One pet record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pet {
    /// Unique among live records; assigned at creation when the caller
    /// supplied none.
    pub id: u64,
    /// The pet's name.
    pub nome: String,
    /// The pet's breed.
    pub raca: String,
}

/// The value a record field can hold: an integer or a string.
///
/// Equality is type-and-value exact: `Int(0)` never equals `Str("0")`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Int(u64),
    Str(String),
}

impl From<u64> for FieldValue {
    fn from(value: u64) -> Self {
        FieldValue::Int(value)
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Str(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Str(value)
    }
}

impl Pet {
    /// Create a record from already-resolved parts.
    pub fn new(id: u64, nome: impl Into<String>, raca: impl Into<String>) -> Self {
        Pet {
            id,
            nome: nome.into(),
            raca: raca.into(),
        }
    }

    /// Look up a field by name.
    ///
    /// Returns `None` for any name other than `id`, `nome`, or `raca` -
    /// the record does not contain such a field, so predicates over it
    /// never match.
    pub fn field(&self, name: &str) -> Option<FieldValue> {
        match name {
            FIELD_ID => Some(FieldValue::Int(self.id)),
            FIELD_NOME => Some(FieldValue::Str(self.nome.clone())),
            FIELD_RACA => Some(FieldValue::Str(self.raca.clone())),
            _ => None,
        }
    }
}

/// Caller input for creating a pet. The `id` is optional; a missing one is
/// resolved through the id sequence before the record reaches the store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewPet {
    pub id: Option<u64>,
    pub nome: String,
    pub raca: String,
}

impl NewPet {
    /// Resolve into a full record, drawing a fresh id from `ids` only when
    /// the caller did not supply one. A caller-supplied id never advances
    /// the sequence.
    pub fn resolve(self, ids: &IdSequence) -> Pet {
        let id = self.id.unwrap_or_else(|| ids.next_id());
        Pet {
            id,
            nome: self.nome,
            raca: self.raca,
        }
    }
}

/// Partial field set merged into matching records on update.
///
/// Fields present here overwrite the record's; absent fields are left
/// untouched. An all-`None` patch is a valid no-op.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PetPatch {
    pub id: Option<u64>,
    pub nome: Option<String>,
    pub raca: Option<String>,
}

impl PetPatch {
    /// Overwrite exactly the fields this patch names.
    pub fn apply(&self, pet: &mut Pet) {
        if let Some(id) = self.id {
            pet.id = id;
        }
        if let Some(nome) = &self.nome {
            pet.nome = nome.clone();
        }
        if let Some(raca) = &self.raca {
            pet.raca = raca.clone();
        }
    }
}
