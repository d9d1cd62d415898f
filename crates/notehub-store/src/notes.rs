//! Note records and their lifecycle.
//!
//! `NoteStore` exclusively owns note records. The keyword index and the
//! share registry hold back-references by note id; cascading their cleanup
//! on deletion is the service layer's job, which keeps this module free of
//! knowledge about either component.

use std::collections::BTreeMap;

use chrono::Utc;
use notehub_core::{Note, NoteId, UserId, dedup_keywords};

use crate::error::{StoreError, StoreResult};

/// Owns note records; the mutation entry point for note content.
#[derive(Debug, Default)]
pub struct NoteStore {
    notes: BTreeMap<NoteId, Note>,
    // Monotonic; ids are never reused after deletion.
    next_id: i64,
}

impl NoteStore {
    /// Creates an empty note store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a note owned by `owner`.
    ///
    /// Keywords are normalized and deduplicated, preserving first-occurrence
    /// order. The caller is responsible for having verified that `owner`
    /// refers to an existing user.
    pub fn create(&mut self, content: &str, owner: UserId, keywords: &[String]) -> &Note {
        self.next_id += 1;
        let id = NoteId(self.next_id);
        let note = Note {
            id,
            content: content.to_string(),
            keywords: dedup_keywords(keywords),
            owner,
            created: Utc::now(),
        };

        tracing::debug!(note_id = %id, owner = %owner, "note created");
        self.notes.entry(id).or_insert(note)
    }

    /// Fetches a note by id.
    #[must_use]
    pub fn get(&self, id: NoteId) -> Option<&Note> {
        self.notes.get(&id)
    }

    /// Replaces a note's content. Keywords and owner are untouched.
    pub fn update_content(&mut self, id: NoteId, content: &str) -> StoreResult<&Note> {
        let note = self.notes.get_mut(&id).ok_or(StoreError::NoteNotFound(id))?;
        note.content = content.to_string();
        tracing::debug!(note_id = %id, "note content updated");
        Ok(note)
    }

    /// Removes a note and returns its final record.
    pub fn remove(&mut self, id: NoteId) -> StoreResult<Note> {
        let note = self.notes.remove(&id).ok_or(StoreError::NoteNotFound(id))?;
        tracing::debug!(note_id = %id, "note removed");
        Ok(note)
    }

    /// All notes owned by `owner`, in ascending id order.
    pub fn owned_by(&self, owner: UserId) -> impl Iterator<Item = &Note> {
        self.notes.values().filter(move |note| note.owner == owner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_assigns_sequential_ids_and_dedups_keywords() {
        let mut store = NoteStore::new();
        let keywords = vec!["Rust".to_string(), " rust ".to_string(), "wasm".to_string()];
        let id = store.create("first", UserId(1), &keywords).id;
        assert_eq!(id, NoteId(1));

        let note = store.get(id).unwrap();
        assert_eq!(note.keywords, vec!["rust".to_string(), "wasm".to_string()]);
        assert_eq!(note.owner, UserId(1));

        let second = store.create("second", UserId(1), &[]).id;
        assert_eq!(second, NoteId(2));
    }

    #[test]
    fn test_update_content_leaves_keywords_and_owner() {
        let mut store = NoteStore::new();
        let id = store.create("before", UserId(3), &["tag".to_string()]).id;

        let note = store.update_content(id, "after").unwrap();
        assert_eq!(note.content, "after");
        assert_eq!(note.keywords, vec!["tag".to_string()]);
        assert_eq!(note.owner, UserId(3));
    }

    #[test]
    fn test_update_and_remove_unknown_note() {
        let mut store = NoteStore::new();
        assert_eq!(
            store.update_content(NoteId(7), "x").unwrap_err(),
            StoreError::NoteNotFound(NoteId(7))
        );
        assert_eq!(
            store.remove(NoteId(7)).unwrap_err(),
            StoreError::NoteNotFound(NoteId(7))
        );
    }

    #[test]
    fn test_ids_not_reused_after_removal() {
        let mut store = NoteStore::new();
        let first = store.create("a", UserId(1), &[]).id;
        store.remove(first).unwrap();
        let second = store.create("b", UserId(1), &[]).id;
        assert_ne!(first, second);
    }

    #[test]
    fn test_owned_by_filters_and_orders() {
        let mut store = NoteStore::new();
        store.create("mine", UserId(1), &[]);
        store.create("theirs", UserId(2), &[]);
        store.create("also mine", UserId(1), &[]);

        let owned: Vec<NoteId> = store.owned_by(UserId(1)).map(|n| n.id).collect();
        assert_eq!(owned, vec![NoteId(1), NoteId(3)]);
    }
}
