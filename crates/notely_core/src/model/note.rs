//! Note domain model.
//!
//! # Responsibility
//! - Define the single persisted record shape shared by core, bridge and CLI.
//!
//! # Invariants
//! - `id` is assigned by storage on insert and never reused for another note.
//! - A `Note` value always carries a valid id; unsaved input lives in
//!   `NoteDraft` instead.

use serde::{Deserialize, Serialize};

/// Stable storage-assigned identifier for a note.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type NoteId = i64;

/// Persisted note record.
///
/// Serialized field names (`id`, `title`, `content`) are the bridge payload
/// contract and must stay stable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    /// Stable row id assigned by storage on creation.
    pub id: NoteId,
    /// User-supplied title. No uniqueness constraint, may be empty.
    pub title: String,
    /// User-supplied body text. May be empty.
    pub content: String,
}

/// Input shape for note creation, before storage assigns an id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoteDraft {
    pub title: String,
    pub content: String,
}

impl NoteDraft {
    /// Creates a draft from user-supplied fields. No validation: empty title
    /// and content are accepted by contract.
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
        }
    }
}
