//! notehub-server: HTTP API server for the notehub platform
//!
//! This crate provides:
//! - REST API endpoints for notes, sharing, and keyword search
//! - Signup/login with Argon2 password hashing and JWT sessions
//! - A process-wide fixed-window rate limiter
//! - JSON error responses with stable error codes
//!
//! # Architecture
//!
//! The server is built on Axum with a middleware stack for:
//! - Request tracing and logging
//! - CORS handling
//! - Rate limiting keyed by client identity
//!
//! The domain logic lives entirely in `notehub-store`; handlers translate
//! between HTTP shapes and the service API and map `StoreError` kinds onto
//! status codes.
//!
//! # Usage
//!
//! ```rust,ignore
//! use notehub_server::{config::ServerConfig, routes, state::AppState};
//! use notehub_store::NoteService;
//!
//! let config = ServerConfig::from_env()?;
//! let state = AppState::new(NoteService::new(), config);
//! let app = routes::build_router(state);
//! ```

pub mod auth;
pub mod config;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod state;

// Re-exports for convenience
pub use config::{ConfigError, ServerConfig};
pub use error::{ApiError, ApiResult};
pub use state::AppState;

// Re-export the domain crate
pub use notehub_store;
