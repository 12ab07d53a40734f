//! Contact domain model.
//!
//! # Responsibility
//! - Define the normalized contact shape held by the directory.
//!
//! # Invariants
//! - `id` is opaque and unique within one loaded contact list.
//! - `name` and `phone` are stored exactly as received; no formatting is
//!   applied to phone numbers.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Opaque identifier for one selectable contact.
pub type ContactId = Uuid;

/// Selectable contact in the directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    pub id: ContactId,
    pub name: String,
    /// Raw phone string, punctuation preserved.
    pub phone: String,
}

impl Contact {
    /// Creates a contact with a generated identifier.
    pub fn new(name: impl Into<String>, phone: impl Into<String>) -> Self {
        Self::with_id(Uuid::new_v4(), name, phone)
    }

    /// Creates a contact with a caller-provided identifier.
    ///
    /// Used for built-in seed data where ids must be stable across runs.
    pub fn with_id(id: ContactId, name: impl Into<String>, phone: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            phone: phone.into(),
        }
    }
}
