//! Per-note read grants.
//!
//! A grant is a (note id, user id) pair meaning the user may read the note
//! without owning it. At most one grant exists per pair: re-sharing is an
//! idempotent upsert. There is no unshare operation; grants live until the
//! note is deleted, at which point the service layer revokes them all.

use std::collections::{BTreeMap, BTreeSet};

use notehub_core::{NoteId, ShareGrant, UserId};

use crate::error::{StoreError, StoreResult};

/// Tracks which notes are shared with which non-owner users.
#[derive(Debug, Default)]
pub struct ShareRegistry {
    grants: BTreeMap<NoteId, BTreeSet<UserId>>,
}

impl ShareRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a share of `note_id` (owned by `owner`) with `user`.
    ///
    /// Fails with `InvalidOperation` when `user` is the note's owner;
    /// a self-share grants nothing the owner does not already have.
    /// Granting an existing pair again is a no-op.
    pub fn grant(&mut self, note_id: NoteId, owner: UserId, user: UserId) -> StoreResult<()> {
        if user == owner {
            return Err(StoreError::InvalidOperation(
                "cannot share a note with its owner".to_string(),
            ));
        }

        self.grants.entry(note_id).or_default().insert(user);
        tracing::debug!(note_id = %note_id, user_id = %user, "share granted");
        Ok(())
    }

    /// Whether `note_id` has been shared with `user`.
    #[must_use]
    pub fn is_shared_with(&self, note_id: NoteId, user: UserId) -> bool {
        self.grants
            .get(&note_id)
            .is_some_and(|users| users.contains(&user))
    }

    /// Drops every grant for `note_id`. Called during the deletion cascade.
    pub fn revoke_all_for_note(&mut self, note_id: NoteId) {
        if self.grants.remove(&note_id).is_some() {
            tracing::debug!(note_id = %note_id, "all shares revoked");
        }
    }

    /// All grants for `note_id`, in ascending user id order.
    #[must_use]
    pub fn grants_for_note(&self, note_id: NoteId) -> Vec<ShareGrant> {
        self.grants
            .get(&note_id)
            .into_iter()
            .flatten()
            .map(|user_id| ShareGrant {
                note_id,
                user_id: *user_id,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grant_and_lookup() {
        let mut registry = ShareRegistry::new();
        registry.grant(NoteId(1), UserId(1), UserId(2)).unwrap();

        assert!(registry.is_shared_with(NoteId(1), UserId(2)));
        assert!(!registry.is_shared_with(NoteId(1), UserId(3)));
        assert!(!registry.is_shared_with(NoteId(2), UserId(2)));
    }

    #[test]
    fn test_self_share_rejected() {
        let mut registry = ShareRegistry::new();
        let err = registry.grant(NoteId(1), UserId(1), UserId(1)).unwrap_err();
        assert!(matches!(err, StoreError::InvalidOperation(_)));
        assert!(!registry.is_shared_with(NoteId(1), UserId(1)));
    }

    #[test]
    fn test_regrant_is_idempotent() {
        let mut registry = ShareRegistry::new();
        registry.grant(NoteId(1), UserId(1), UserId(2)).unwrap();
        registry.grant(NoteId(1), UserId(1), UserId(2)).unwrap();

        assert_eq!(registry.grants_for_note(NoteId(1)).len(), 1);
    }

    #[test]
    fn test_revoke_all_for_note() {
        let mut registry = ShareRegistry::new();
        registry.grant(NoteId(1), UserId(1), UserId(2)).unwrap();
        registry.grant(NoteId(1), UserId(1), UserId(3)).unwrap();
        registry.grant(NoteId(2), UserId(1), UserId(2)).unwrap();

        registry.revoke_all_for_note(NoteId(1));
        assert!(registry.grants_for_note(NoteId(1)).is_empty());
        assert!(registry.is_shared_with(NoteId(2), UserId(2)));
    }
}
