use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use serde::{Deserialize, Serialize};

use crate::{
    error::AppError, middleware::auth::AuthGuard, service::user::UserService, session::scopes,
    state::AppState,
};

/// Body of a login request.
///
/// # Fields
/// - `username` / `password` - Credentials to verify
/// - `scopes` - Scopes to grant the session; the standard set when omitted
#[derive(Deserialize)]
pub struct LoginDto {
    pub username: String,
    pub password: String,
    pub scopes: Option<Vec<String>>,
}

/// Body returned by a successful login.
#[derive(Serialize)]
pub struct SessionDto {
    /// Opaque bearer token for the `Authorization` header.
    pub token: String,
    /// Seconds until the session expires.
    #[serde(rename = "expiresIn")]
    pub expires_in: u64,
}

/// POST /api/auth/login
/// Verify credentials and issue a bearer session.
pub async fn login(
    State(state): State<AppState>,
    Json(dto): Json<LoginDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = UserService::new(&state.db)
        .verify_login(&dto.username, &dto.password)
        .await?;

    let granted = dto.scopes.unwrap_or_else(scopes::default_scopes);
    let token = state
        .sessions
        .issue(&user.username, granted, state.session_ttl)
        .await;

    Ok((
        StatusCode::OK,
        Json(SessionDto {
            token,
            expires_in: state.session_ttl.as_secs(),
        }),
    ))
}

/// POST /api/auth/logout
/// Revoke the presented bearer token. Idempotent: revoking an unknown or
/// already-revoked token succeeds the same way.
pub async fn logout(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    if let Some(token) = AuthGuard::new(&state.sessions, &headers).token() {
        state.sessions.revoke(token).await;
    }

    Ok(StatusCode::NO_CONTENT)
}
