//! Service layer orchestrating identity, notes, index, and shares.
//!
//! `NoteService` is the only public mutation entry point. Every call
//! resolves authorization before touching state, and every multi-step
//! mutation runs under a single write guard:
//!
//! - create: verify user, create note, index it
//! - delete: remove index entries, revoke grants, remove the note
//!
//! Readers therefore never observe a note that exists but is unsearchable,
//! or index entries for a note that is gone.

use std::collections::BTreeSet;
use std::sync::Arc;

use notehub_core::{Note, NoteId, NoteView, User, UserId};
use tokio::sync::RwLock;

use crate::error::{StoreError, StoreResult};
use crate::identity::IdentityStore;
use crate::index::KeywordIndex;
use crate::notes::NoteStore;
use crate::share::ShareRegistry;

/// The tables guarded by the service lock.
#[derive(Debug, Default)]
struct Tables {
    identity: IdentityStore,
    notes: NoteStore,
    index: KeywordIndex,
    shares: ShareRegistry,
}

/// Orchestrates the note subsystem and enforces authorization policy.
///
/// Cloning is cheap; clones share the same underlying tables.
#[derive(Debug, Clone, Default)]
pub struct NoteService {
    tables: Arc<RwLock<Tables>>,
}

impl NoteService {
    /// Creates a service with empty tables.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // ========================================================================
    // Identity Operations
    // ========================================================================

    /// Registers a user. The password hash is opaque to this layer.
    ///
    /// Propagates `AlreadyExists` unchanged when the email is taken.
    pub async fn create_user(&self, email: &str, password_hash: &str) -> StoreResult<User> {
        let mut tables = self.tables.write().await;
        let user = tables.identity.create(email, password_hash)?.clone();
        tracing::info!(user_id = %user.id, "user registered");
        Ok(user)
    }

    /// Looks up a user by email, for the login path.
    pub async fn user_by_email(&self, email: &str) -> Option<User> {
        let tables = self.tables.read().await;
        tables.identity.get_by_email(email).cloned()
    }

    // ========================================================================
    // Note Operations
    // ========================================================================

    /// All notes owned by `user`, ascending by id.
    ///
    /// Notes shared with `user` are not listed; they are reachable only via
    /// direct fetch.
    pub async fn list_notes(&self, user: UserId) -> StoreResult<Vec<NoteView>> {
        let tables = self.tables.read().await;
        if !tables.identity.exists(user) {
            return Err(StoreError::UserNotFound(user));
        }
        Ok(tables.notes.owned_by(user).map(Note::view).collect())
    }

    /// Fetches a single note.
    ///
    /// Existence is checked before authorization, so an unknown id reports
    /// `NoteNotFound` rather than `Forbidden`. The owner and any share
    /// recipient may read; everyone else is rejected.
    pub async fn get_note(&self, user: UserId, note_id: NoteId) -> StoreResult<NoteView> {
        let tables = self.tables.read().await;
        let note = tables
            .notes
            .get(note_id)
            .ok_or(StoreError::NoteNotFound(note_id))?;

        if note.owner != user && !tables.shares.is_shared_with(note_id, user) {
            return Err(StoreError::Forbidden {
                user,
                note: note_id,
                operation: "view",
            });
        }

        Ok(note.view())
    }

    /// Creates a note and indexes its keywords in one step.
    pub async fn create_note(
        &self,
        user: UserId,
        content: &str,
        keywords: &[String],
    ) -> StoreResult<NoteView> {
        let mut tables = self.tables.write().await;
        if !tables.identity.exists(user) {
            return Err(StoreError::UserNotFound(user));
        }

        let Tables { notes, index, .. } = &mut *tables;
        let note = notes.create(content, user, keywords);
        index.index_note(note);

        tracing::info!(note_id = %note.id, owner = %user, "note created");
        Ok(note.view())
    }

    /// Replaces a note's content. Owner only.
    ///
    /// Keywords are immutable once set, so the index needs no update here.
    pub async fn update_note(
        &self,
        user: UserId,
        note_id: NoteId,
        content: &str,
    ) -> StoreResult<NoteView> {
        let mut tables = self.tables.write().await;
        let note = tables
            .notes
            .get(note_id)
            .ok_or(StoreError::NoteNotFound(note_id))?;
        if note.owner != user {
            return Err(StoreError::Forbidden {
                user,
                note: note_id,
                operation: "update",
            });
        }

        let note = tables.notes.update_content(note_id, content)?;
        tracing::info!(note_id = %note_id, owner = %user, "note updated");
        Ok(note.view())
    }

    /// Deletes a note. Owner only.
    ///
    /// Index entries and share grants go first, the record last, all under
    /// the same write guard; no observer can see the note via search or
    /// share once it is gone via direct fetch.
    pub async fn delete_note(&self, user: UserId, note_id: NoteId) -> StoreResult<NoteView> {
        let mut tables = self.tables.write().await;
        let note = tables
            .notes
            .get(note_id)
            .ok_or(StoreError::NoteNotFound(note_id))?;
        if note.owner != user {
            return Err(StoreError::Forbidden {
                user,
                note: note_id,
                operation: "delete",
            });
        }

        tables.index.remove_note(note_id);
        tables.shares.revoke_all_for_note(note_id);
        let note = tables.notes.remove(note_id)?;

        tracing::info!(note_id = %note_id, owner = %user, "note deleted");
        Ok(note.view())
    }

    /// Shares a note with another user. Owner only.
    ///
    /// Re-sharing an already-shared note is a no-op.
    pub async fn share_note(
        &self,
        owner: UserId,
        recipient: UserId,
        note_id: NoteId,
    ) -> StoreResult<NoteView> {
        if owner == recipient {
            return Err(StoreError::InvalidOperation(
                "cannot share a note with its owner".to_string(),
            ));
        }

        let mut tables = self.tables.write().await;
        let note = tables
            .notes
            .get(note_id)
            .ok_or(StoreError::NoteNotFound(note_id))?;
        if !tables.identity.exists(recipient) {
            return Err(StoreError::UserNotFound(recipient));
        }
        if note.owner != owner {
            return Err(StoreError::Forbidden {
                user: owner,
                note: note_id,
                operation: "share",
            });
        }

        let view = note.view();
        let note_owner = note.owner;
        tables.shares.grant(note_id, note_owner, recipient)?;

        tracing::info!(note_id = %note_id, owner = %owner, recipient = %recipient, "note shared");
        Ok(view)
    }

    /// Searches the caller's own notes by keyword substring.
    ///
    /// Shared notes are not searchable; the index is scoped to the owner.
    /// Queries shorter than the minimum length yield an empty result.
    pub async fn search_notes(&self, query: &str, user: UserId) -> Vec<NoteView> {
        let tables = self.tables.read().await;
        let hits: BTreeSet<NoteId> = tables.index.search(query, user);
        hits.into_iter()
            .filter_map(|id| tables.notes.get(id))
            .map(Note::view)
            .collect()
    }
}
