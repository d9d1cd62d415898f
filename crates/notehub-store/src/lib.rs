//! notehub-store: note ownership, sharing, and keyword search
//!
//! This crate provides:
//! - `IdentityStore`: user records, resolved by id or email
//! - `NoteStore`: note records and their lifecycle
//! - `KeywordIndex`: inverted keyword → note mapping for substring search
//! - `ShareRegistry`: per-note read grants for non-owner users
//! - `NoteService`: the orchestration layer enforcing authorization policy
//!
//! # Architecture
//!
//! The four table structs are plain synchronous containers with no interior
//! locking; `NoteService` owns them behind a single `RwLock` and acquires the
//! guard exactly once per call. That makes every multi-step mutation
//! (create + index, delete + unindex + revoke) all-or-nothing with respect
//! to concurrent readers.
//!
//! # Usage
//!
//! ```rust,ignore
//! use notehub_store::NoteService;
//!
//! let service = NoteService::new();
//! let user = service.create_user("a@example.com", "<hash>").await?;
//! let note = service
//!     .create_note(user.id, "borrow checker notes", &["rust".to_string()])
//!     .await?;
//! let hits = service.search_notes("rus", user.id).await;
//! ```

pub mod error;
pub mod identity;
pub mod index;
pub mod notes;
pub mod service;
pub mod share;

pub use error::{StoreError, StoreResult};
pub use identity::IdentityStore;
pub use index::KeywordIndex;
pub use notes::NoteStore;
pub use service::NoteService;
pub use share::ShareRegistry;

// Re-export notehub-core for downstream crates
pub use notehub_core;
