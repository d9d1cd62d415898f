//! Share routes.
//!
//! Sharing grants another user read access to a single note. Only the owner
//! can share, a note cannot be shared with its owner, and grants disappear
//! when the note is deleted. There is no unshare endpoint.

use axum::{
    Json, Router,
    extract::{Path, State},
    routing::post,
};
use notehub_core::{NoteId, UserId};
use serde::{Deserialize, Serialize};

use crate::auth::AuthenticatedUser;
use crate::error::ApiResult;
use crate::state::AppState;

// ============================================================================
// Request/Response Types
// ============================================================================

/// Request body for sharing a note.
#[derive(Debug, Deserialize)]
pub struct ShareRequest {
    /// The user to grant read access to.
    pub user_id: UserId,
}

/// Response for a successful share.
#[derive(Debug, Serialize)]
pub struct ShareResponse {
    /// Whether the grant is in place.
    pub shared: bool,
    /// The shared note.
    pub note_id: NoteId,
    /// The user granted read access.
    pub user_id: UserId,
}

// ============================================================================
// Route Handlers
// ============================================================================

/// POST /notes/{id}/share - Grant read access to another user.
///
/// # Response
///
/// - 200 OK: `{ "shared": true, "note_id": 1, "user_id": 2 }`
/// - 403 Forbidden: caller does not own the note
/// - 404 Not Found: note or target user missing
/// - 422 Unprocessable Entity: sharing a note with its owner
async fn share_note(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    Path(note_id): Path<i64>,
    Json(request): Json<ShareRequest>,
) -> ApiResult<Json<ShareResponse>> {
    let note_id = NoteId(note_id);
    state
        .service()
        .share_note(user.user_id, request.user_id, note_id)
        .await?;

    tracing::info!(
        note_id = %note_id,
        owner = %user.user_id,
        recipient = %request.user_id,
        "note shared"
    );

    Ok(Json(ShareResponse {
        shared: true,
        note_id,
        user_id: request.user_id,
    }))
}

/// Build share routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/notes/{id}/share", post(share_note))
}
