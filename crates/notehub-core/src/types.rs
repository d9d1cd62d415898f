//! Core data types for the notehub platform.
//!
//! Identifiers are sequential integers assigned by the stores, wrapped in
//! newtypes so a note id can never be passed where a user id is expected.
//!
//! All types derive `Debug`, `Clone`, `Serialize`, and `Deserialize` for
//! inspection, copying, and JSON serialization.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// ID Types
// ============================================================================

/// Unique identifier for a user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(pub i64);

impl UserId {
    /// Creates a UserId from a raw integer.
    #[must_use]
    pub const fn from_i64(id: i64) -> Self {
        Self(id)
    }

    /// Returns the raw integer value.
    #[must_use]
    pub const fn as_i64(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Unique identifier for a note.
///
/// Assigned once at creation and never reused, so a deleted note's id can
/// never resurrect stale index entries or share grants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NoteId(pub i64);

impl NoteId {
    /// Creates a NoteId from a raw integer.
    #[must_use]
    pub const fn from_i64(id: i64) -> Self {
        Self(id)
    }

    /// Returns the raw integer value.
    #[must_use]
    pub const fn as_i64(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for NoteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ============================================================================
// Records
// ============================================================================

/// A registered user.
///
/// Users are created once at signup and never mutated or deleted by the
/// core. The password hash is opaque here; hashing and verification live in
/// the server's auth module.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// Stable identifier.
    pub id: UserId,
    /// Unique email, stored lowercased and trimmed.
    pub email: String,
    /// Opaque credential owned by the auth provider.
    pub password_hash: String,
    /// When the user signed up.
    pub created: DateTime<Utc>,
}

/// A text note owned by a single user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Note {
    /// Stable identifier, assigned at creation.
    pub id: NoteId,
    /// Arbitrary text body.
    pub content: String,
    /// Normalized, deduplicated keywords in first-occurrence order.
    ///
    /// Immutable after creation; the keyword index is derived from this set.
    pub keywords: Vec<String>,
    /// The creating user. Ownership is never transferred.
    pub owner: UserId,
    /// When the note was created.
    pub created: DateTime<Utc>,
}

impl Note {
    /// Returns the caller-facing view of this note.
    #[must_use]
    pub fn view(&self) -> NoteView {
        NoteView {
            id: self.id,
            content: self.content.clone(),
            keywords: self.keywords.clone(),
        }
    }
}

/// The note shape returned to callers: `{id, content, keywords}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoteView {
    pub id: NoteId,
    pub content: String,
    pub keywords: Vec<String>,
}

/// A read permission on a single note for a non-owner user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShareGrant {
    /// The shared note.
    pub note_id: NoteId,
    /// The user granted read access.
    pub user_id: UserId,
}

// ============================================================================
// Tests
// ============================================================================
