use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use serde::Deserialize;

use crate::{
    data::channel::ChannelRepository,
    error::AppError,
    middleware::auth::AuthGuard,
    model::api::{DataDto, DeletedDto, UpdatedDto},
    session::scopes,
    state::AppState,
};

/// Body of a channel update request.
#[derive(Deserialize)]
pub struct UpdateChannelDto {
    pub enabled: bool,
}

/// GET /api/channels/{channel}
/// Get a channel.
pub async fn get(
    State(state): State<AppState>,
    Path(channel): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let found = ChannelRepository::new(&state.db)
        .find(&channel)
        .await?
        .ok_or_else(|| channel_not_found(&channel))?;

    Ok(Json(DataDto {
        data: found.into_dto(),
    }))
}

/// POST /api/channels/{channel}
/// Register a channel. A name stays reserved even after soft deletion.
pub async fn create(
    State(state): State<AppState>,
    Path(channel): Path<String>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.sessions, &headers)
        .require(&[scopes::CHANNEL_CREATE])
        .await?;

    let repo = ChannelRepository::new(&state.db);

    if repo.find_any(&channel).await?.is_some() {
        return Err(AppError::Conflict(format!(
            "Channel {:?} already exists",
            channel
        )));
    }

    let created = repo.insert(&channel).await?;

    Ok((
        StatusCode::CREATED,
        Json(DataDto {
            data: created.into_dto(),
        }),
    ))
}

/// PATCH /api/channels/{channel}
/// Enable or disable a channel.
pub async fn update(
    State(state): State<AppState>,
    Path(channel): Path<String>,
    headers: HeaderMap,
    Json(dto): Json<UpdateChannelDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.sessions, &headers)
        .require(&[scopes::CHANNEL_EDIT])
        .await?;

    let updated = ChannelRepository::new(&state.db)
        .set_enabled(&channel, dto.enabled)
        .await?;

    if updated {
        Ok(Json(UpdatedDto { updated: true }))
    } else {
        Err(channel_not_found(&channel))
    }
}

/// DELETE /api/channels/{channel}
/// Soft-delete a channel.
pub async fn remove(
    State(state): State<AppState>,
    Path(channel): Path<String>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.sessions, &headers)
        .require(&[scopes::CHANNEL_DELETE])
        .await?;

    let deleted = ChannelRepository::new(&state.db).soft_delete(&channel).await?;

    if deleted {
        Ok(Json(DeletedDto { deleted: true }))
    } else {
        Err(channel_not_found(&channel))
    }
}

fn channel_not_found(channel: &str) -> AppError {
    AppError::NotFound(format!("Channel {:?} not found", channel))
}
