//! Error types for the storage layer.

use notehub_core::{NoteId, UserId};
use thiserror::Error;

/// Result type alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors that can occur during store operations.
///
/// Every failure is synchronous and local to the call; nothing is retried
/// inside this crate. Operations either complete their full
/// invariant-preserving sequence or return one of these and leave state
/// untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// Referenced note does not exist.
    #[error("note not found: {0}")]
    NoteNotFound(NoteId),

    /// Referenced user does not exist.
    #[error("user not found: {0}")]
    UserNotFound(UserId),

    /// Caller lacks rights over the target note.
    #[error("forbidden: user {user} may not {operation} note {note}")]
    Forbidden {
        user: UserId,
        note: NoteId,
        operation: &'static str,
    },

    /// Logically nonsensical request, e.g. sharing a note with its owner.
    #[error("invalid operation: {0}")]
    InvalidOperation(String),

    /// A unique constraint was violated, e.g. a signup email already taken.
    #[error("already exists: {0}")]
    AlreadyExists(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            StoreError::NoteNotFound(NoteId(4)).to_string(),
            "note not found: 4"
        );
        assert_eq!(
            StoreError::Forbidden {
                user: UserId(2),
                note: NoteId(9),
                operation: "delete",
            }
            .to_string(),
            "forbidden: user 2 may not delete note 9"
        );
    }
}
