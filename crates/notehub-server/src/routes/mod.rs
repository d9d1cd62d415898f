//! Route definitions for the HTTP API.

pub mod auth;
pub mod health;
pub mod notes;
pub mod share;

use axum::Router;
use axum::middleware::from_fn_with_state;

use crate::middleware::rate_limit::rate_limit;
use crate::state::AppState;

/// Build the complete router with all routes.
///
/// The rate limiter wraps every route, matching the process-wide limit the
/// deployment applies in front of all endpoints.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .merge(health::routes())
        .merge(auth::routes())
        .merge(notes::routes())
        .merge(share::routes())
        .layer(from_fn_with_state(state.clone(), rate_limit))
        .with_state(state)
}
