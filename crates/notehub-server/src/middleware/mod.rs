//! Axum middleware for the HTTP API.

pub mod rate_limit;
