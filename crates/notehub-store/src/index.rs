//! Inverted keyword index.
//!
//! Maps normalized keyword → set of (note id, owner id) pairs, enabling
//! substring search without scanning every note's content. Entries are
//! derived data: always re-derivable from `Note.keywords`, never the source
//! of truth. The service layer re-indexes on every note mutation so the
//! index stays consistent with note content.

use std::collections::{BTreeMap, BTreeSet};

use notehub_core::{MIN_QUERY_LEN, Note, NoteId, UserId};

/// Inverted mapping from normalized keyword to the notes carrying it.
#[derive(Debug, Default)]
pub struct KeywordIndex {
    entries: BTreeMap<String, BTreeSet<(NoteId, UserId)>>,
}

impl KeywordIndex {
    /// Creates an empty index.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts one entry per (keyword, note) pair.
    ///
    /// Set semantics make this idempotent: indexing the same note twice with
    /// an identical keyword set leaves the entry set unchanged.
    pub fn index_note(&mut self, note: &Note) {
        for keyword in &note.keywords {
            self.entries
                .entry(keyword.clone())
                .or_default()
                .insert((note.id, note.owner));
        }
    }

    /// Deletes all entries referencing `note_id`, across all keywords.
    ///
    /// Buckets left empty are dropped so the keyword itself no longer
    /// matches any query.
    pub fn remove_note(&mut self, note_id: NoteId) {
        self.entries.retain(|_, notes| {
            notes.retain(|(id, _)| *id != note_id);
            !notes.is_empty()
        });
    }

    /// Searches for notes owned by `owner` whose keywords contain `query`
    /// as a substring.
    ///
    /// The query is lowercased before matching. Queries shorter than
    /// [`MIN_QUERY_LEN`] characters return an empty set; this bounds match
    /// fan-out and is not an error. The result is de-duplicated by note id
    /// even when a note matches via several keywords.
    #[must_use]
    pub fn search(&self, query: &str, owner: UserId) -> BTreeSet<NoteId> {
        let query = query.to_lowercase();
        if query.chars().count() < MIN_QUERY_LEN {
            return BTreeSet::new();
        }

        let mut hits = BTreeSet::new();
        for (keyword, notes) in &self.entries {
            if !keyword.contains(&query) {
                continue;
            }
            for (note_id, owner_id) in notes {
                if *owner_id == owner {
                    hits.insert(*note_id);
                }
            }
        }
        hits
    }

    /// The distinct keywords currently indexed for `note_id`.
    ///
    /// Used to assert the index ↔ note consistency invariant in tests.
    #[must_use]
    pub fn keywords_for_note(&self, note_id: NoteId) -> BTreeSet<String> {
        self.entries
            .iter()
            .filter(|(_, notes)| notes.iter().any(|(id, _)| *id == note_id))
            .map(|(keyword, _)| keyword.clone())
            .collect()
    }

    /// Total number of (keyword, note) entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.values().map(BTreeSet::len).sum()
    }

    /// Whether the index holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
