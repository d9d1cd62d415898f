//! Note routes: list, fetch, create, update, delete, search.

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    routing::get,
};
use notehub_core::{NoteId, NoteView};
use serde::Deserialize;

use crate::auth::AuthenticatedUser;
use crate::error::{ApiError, ApiResult};
use crate::state::AppState;

/// Minimum accepted note content length, enforced at the HTTP boundary.
const MIN_CONTENT_LEN: usize = 3;

// ============================================================================
// Request Types
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct CreateNoteRequest {
    pub content: String,
    #[serde(default)]
    pub keywords: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateNoteRequest {
    pub content: String,
}

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub q: String,
}

// ============================================================================
// Helper Functions
// ============================================================================

/// Reject content shorter than the validation minimum.
fn validate_content(content: &str) -> Result<(), ApiError> {
    if content.chars().count() < MIN_CONTENT_LEN {
        return Err(ApiError::BadRequest(format!(
            "content must be at least {} characters",
            MIN_CONTENT_LEN
        )));
    }
    Ok(())
}

// ============================================================================
// Route Handlers
// ============================================================================

/// GET /notes - List the caller's own notes.
///
/// Notes shared with the caller are not listed; fetch them by id.
async fn list_notes(
    State(state): State<AppState>,
    user: AuthenticatedUser,
) -> ApiResult<Json<Vec<NoteView>>> {
    let notes = state.service().list_notes(user.user_id).await?;
    Ok(Json(notes))
}

/// GET /notes/search?q=... - Search the caller's notes by keyword substring.
///
/// Queries shorter than three characters yield an empty list.
async fn search_notes(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    Query(params): Query<SearchParams>,
) -> ApiResult<Json<Vec<NoteView>>> {
    let notes = state.service().search_notes(&params.q, user.user_id).await;
    Ok(Json(notes))
}

/// GET /notes/{id} - Fetch a single note.
///
/// # Response
///
/// - 200 OK: the note view
/// - 403 Forbidden: caller is neither owner nor share recipient
/// - 404 Not Found: no such note
async fn get_note(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    Path(note_id): Path<i64>,
) -> ApiResult<Json<NoteView>> {
    let note = state
        .service()
        .get_note(user.user_id, NoteId(note_id))
        .await?;
    Ok(Json(note))
}

/// POST /notes - Create a note.
///
/// Keywords are optional; they are normalized and deduplicated before
/// storage, and indexed for search in the same step.
async fn create_note(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    Json(request): Json<CreateNoteRequest>,
) -> ApiResult<Json<NoteView>> {
    validate_content(&request.content)?;
    let note = state
        .service()
        .create_note(user.user_id, &request.content, &request.keywords)
        .await?;
    Ok(Json(note))
}

/// PUT /notes/{id} - Replace a note's content. Owner only.
async fn update_note(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    Path(note_id): Path<i64>,
    Json(request): Json<UpdateNoteRequest>,
) -> ApiResult<Json<NoteView>> {
    validate_content(&request.content)?;
    let note = state
        .service()
        .update_note(user.user_id, NoteId(note_id), &request.content)
        .await?;
    Ok(Json(note))
}

/// DELETE /notes/{id} - Delete a note. Owner only.
///
/// Returns the deleted note's final view. Index entries and share grants
/// are removed in the same step.
async fn delete_note(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    Path(note_id): Path<i64>,
) -> ApiResult<Json<NoteView>> {
    let note = state
        .service()
        .delete_note(user.user_id, NoteId(note_id))
        .await?;
    Ok(Json(note))
}

/// Build note routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/notes", get(list_notes).post(create_note))
        .route("/notes/search", get(search_notes))
        .route(
            "/notes/{id}",
            get(get_note).put(update_note).delete(delete_note),
        )
}
