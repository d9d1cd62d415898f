//! notehub-core: domain types for the notehub platform
//!
//! This crate provides:
//! - Typed identifiers for users and notes
//! - The `User`, `Note`, and `ShareGrant` records
//! - Keyword normalization shared by the store and the search index
//!
//! It is a leaf crate with no knowledge of storage or transport; the
//! storage and server crates build on these types.

pub mod keyword;
pub mod types;

pub use keyword::{MIN_QUERY_LEN, dedup_keywords, normalize};
pub use types::{Note, NoteId, NoteView, ShareGrant, User, UserId};
