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
    model::{
        api::{DataDto, DeletedDto, UpdatedDto},
        command::{CommandDto, CommandUpdate, CreateCommandParams, Role},
        message::MessageComponent,
    },
    service::command::CommandService,
    session::scopes,
    state::AppState,
};

/// Body of a command creation request.
#[derive(Deserialize)]
pub struct CreateCommandDto {
    pub response: Vec<MessageComponent>,
    #[serde(default)]
    pub services: Vec<String>,
    /// Role restriction; defaults to `user` when omitted.
    pub role: Option<Role>,
}

/// Body of a command update request: one named attribute and its new value.
#[derive(Deserialize)]
pub struct UpdateCommandDto {
    pub attribute: String,
    pub value: serde_json::Value,
}

/// GET /api/channels/{channel}/commands
/// List the active commands of a channel.
pub async fn list(
    State(state): State<AppState>,
    Path(channel): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let commands = CommandService::new(&state.db).list(&channel).await?;
    let dtos: Vec<CommandDto> = commands.into_iter().map(|c| c.into_dto()).collect();

    Ok((
        [("x-total-count", dtos.len().to_string())],
        Json(DataDto { data: dtos }),
    ))
}

/// GET /api/channels/{channel}/commands/{name}
/// Get a single active command.
pub async fn get(
    State(state): State<AppState>,
    Path((channel, name)): Path<(String, String)>,
) -> Result<impl IntoResponse, AppError> {
    let command = CommandService::new(&state.db).get(&channel, &name).await?;

    Ok(Json(DataDto {
        data: command.into_dto(),
    }))
}

/// POST /api/channels/{channel}/commands/{name}
/// Create a command. Conflicts with an active command under the same name;
/// replaces a soft-deleted one.
pub async fn create(
    State(state): State<AppState>,
    Path((channel, name)): Path<(String, String)>,
    headers: HeaderMap,
    Json(dto): Json<CreateCommandDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.sessions, &headers)
        .require(&[scopes::COMMAND_CREATE])
        .await?;

    let command = CommandService::new(&state.db)
        .create(CreateCommandParams {
            channel,
            name,
            response: dto.response,
            services: dto.services,
            role: dto.role.unwrap_or(Role::User),
        })
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(DataDto {
            data: command.into_dto(),
        }),
    ))
}

/// PATCH /api/channels/{channel}/commands/{name}
/// Update one attribute of a command. Unknown attributes are rejected here,
/// before any storage access.
pub async fn update(
    State(state): State<AppState>,
    Path((channel, name)): Path<(String, String)>,
    headers: HeaderMap,
    Json(dto): Json<UpdateCommandDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.sessions, &headers)
        .require(&[scopes::COMMAND_EDIT])
        .await?;

    let update = CommandUpdate::from_attribute(&dto.attribute, dto.value)?;

    let applied = CommandService::new(&state.db)
        .update_attribute(&channel, &name, update)
        .await?;

    if applied {
        Ok(Json(UpdatedDto { updated: true }))
    } else {
        // The record vanished between the engine's read and its write.
        Err(AppError::NotFound(format!(
            "Command {:?} not found in channel {:?}",
            name, channel
        )))
    }
}

/// DELETE /api/channels/{channel}/commands/{name}
/// Soft-delete a command.
pub async fn remove(
    State(state): State<AppState>,
    Path((channel, name)): Path<(String, String)>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.sessions, &headers)
        .require(&[scopes::COMMAND_DELETE])
        .await?;

    CommandService::new(&state.db).delete(&channel, &name).await?;

    Ok(Json(DeletedDto { deleted: true }))
}
