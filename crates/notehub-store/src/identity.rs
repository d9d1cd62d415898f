//! User records.
//!
//! Users are created once at signup and never mutated or deleted. Emails are
//! normalized (lowercased, trimmed) before storage and lookup, so uniqueness
//! is case-insensitive.

use std::collections::{BTreeMap, HashMap};

use chrono::Utc;
use notehub_core::{User, UserId};

use crate::error::{StoreError, StoreResult};

/// Holds user records; leaf dependency for ownership checks.
#[derive(Debug, Default)]
pub struct IdentityStore {
    users: BTreeMap<UserId, User>,
    by_email: HashMap<String, UserId>,
    next_id: i64,
}

/// Normalize an email for storage and comparison.
fn normalize_email(raw: &str) -> String {
    raw.trim().to_lowercase()
}

impl IdentityStore {
    /// Creates an empty identity store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a new user.
    ///
    /// Fails with `AlreadyExists` when another user holds the same
    /// normalized email. The password hash is stored opaquely.
    pub fn create(&mut self, email: &str, password_hash: &str) -> StoreResult<&User> {
        let email = normalize_email(email);
        if self.by_email.contains_key(&email) {
            return Err(StoreError::AlreadyExists(email));
        }

        self.next_id += 1;
        let id = UserId(self.next_id);
        let user = User {
            id,
            email: email.clone(),
            password_hash: password_hash.to_string(),
            created: Utc::now(),
        };

        self.by_email.insert(email, id);
        tracing::debug!(user_id = %id, "user created");
        Ok(self.users.entry(id).or_insert(user))
    }

    /// Resolves a user id to its record.
    #[must_use]
    pub fn get(&self, id: UserId) -> Option<&User> {
        self.users.get(&id)
    }

    /// Whether a user with this id exists.
    #[must_use]
    pub fn exists(&self, id: UserId) -> bool {
        self.users.contains_key(&id)
    }

    /// Looks up a user by email (normalized before comparison).
    #[must_use]
    pub fn get_by_email(&self, email: &str) -> Option<&User> {
        let id = self.by_email.get(&normalize_email(email))?;
        self.users.get(id)
    }
}
