//! Authentication routes: signup and login.

use axum::{Json, Router, extract::State, routing::post};
use notehub_core::UserId;
use serde::{Deserialize, Serialize};

use crate::auth;
use crate::error::{ApiError, ApiResult};
use crate::state::AppState;

/// Minimum accepted password length.
const MIN_PASSWORD_LEN: usize = 8;

// ============================================================================
// Request/Response Types
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct CredentialsRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub token: String,
    pub user_id: UserId,
}

// ============================================================================
// Route Handlers
// ============================================================================

/// POST /auth/signup
///
/// Registers a new user and returns a session token.
///
/// # Response
///
/// - 200 OK: `{ "token": "...", "user_id": 1 }`
/// - 400 Bad Request: malformed email or short password
/// - 409 Conflict: email already registered
async fn signup(
    State(state): State<AppState>,
    Json(request): Json<CredentialsRequest>,
) -> ApiResult<Json<AuthResponse>> {
    if !request.email.contains('@') {
        return Err(ApiError::BadRequest(
            "email must be a valid address".to_string(),
        ));
    }
    if request.password.len() < MIN_PASSWORD_LEN {
        return Err(ApiError::BadRequest(format!(
            "password must be at least {} characters",
            MIN_PASSWORD_LEN
        )));
    }

    let hash = auth::hash_password(&request.password)?;
    let user = state.service().create_user(&request.email, &hash).await?;

    let config = state.config();
    let token = auth::create_token(user.id, &config.jwt_secret, config.jwt_expiry_hours)?;

    tracing::info!(user_id = %user.id, "user signed up");

    Ok(Json(AuthResponse {
        token,
        user_id: user.id,
    }))
}

/// POST /auth/login
///
/// # Response
///
/// - 200 OK: `{ "token": "...", "user_id": 1 }`
/// - 401 Unauthorized: unknown email or wrong password
async fn login(
    State(state): State<AppState>,
    Json(request): Json<CredentialsRequest>,
) -> ApiResult<Json<AuthResponse>> {
    let user = state
        .service()
        .user_by_email(&request.email)
        .await
        .ok_or_else(|| ApiError::Unauthorized("Invalid email or password".to_string()))?;

    let valid = auth::verify_password(&request.password, &user.password_hash)?;
    if !valid {
        return Err(ApiError::Unauthorized(
            "Invalid email or password".to_string(),
        ));
    }

    let config = state.config();
    let token = auth::create_token(user.id, &config.jwt_secret, config.jwt_expiry_hours)?;

    tracing::info!(user_id = %user.id, "user logged in");

    Ok(Json(AuthResponse {
        token,
        user_id: user.id,
    }))
}

/// Build auth routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/auth/signup", post(signup))
        .route("/auth/login", post(login))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_credentials_request_deserialize() {
        let json = r#"{"email": "a@example.com", "password": "secret123"}"#;
        let request: CredentialsRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.email, "a@example.com");
        assert_eq!(request.password, "secret123");
    }

    #[test]
    fn test_auth_response_serialize() {
        let response = AuthResponse {
            token: "jwt.token.here".to_string(),
            user_id: UserId(1),
        };
        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains("token"));
        assert!(json.contains("user_id"));
    }
}
