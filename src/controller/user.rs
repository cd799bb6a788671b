use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use serde::Deserialize;

use crate::{
    error::AppError,
    middleware::auth::AuthGuard,
    model::api::{DataDto, DeletedDto},
    service::user::UserService,
    session::scopes,
    state::AppState,
};

/// Body of a user registration request.
#[derive(Deserialize)]
pub struct CreateUserDto {
    pub username: String,
    pub password: String,
    /// Scopes to grant; the standard set when omitted.
    pub scopes: Option<Vec<String>>,
}

/// POST /api/users
/// Register a new user account. Open endpoint; the very first account on a
/// fresh deployment has to come from somewhere.
pub async fn create(
    State(state): State<AppState>,
    Json(dto): Json<CreateUserDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = UserService::new(&state.db)
        .create(&dto.username, &dto.password, dto.scopes)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(DataDto {
            data: user.into_dto(),
        }),
    ))
}

/// GET /api/users/{username}
/// Get a user's public profile.
pub async fn get(
    State(state): State<AppState>,
    Path(username): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let user = UserService::new(&state.db).get(&username).await?;

    Ok(Json(DataDto {
        data: user.into_dto(),
    }))
}

/// DELETE /api/users/{username}
/// Soft-delete a user account. The username stays reserved.
pub async fn remove(
    State(state): State<AppState>,
    Path(username): Path<String>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.sessions, &headers)
        .require(&[scopes::USER_DELETE])
        .await?;

    UserService::new(&state.db).delete(&username).await?;

    Ok(Json(DeletedDto { deleted: true }))
}
