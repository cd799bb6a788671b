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
        message::MessageComponent,
        quote::{CreateQuoteParams, QuoteDto},
    },
    service::quote::QuoteService,
    session::scopes,
    state::AppState,
};

/// Body of a quote creation request.
#[derive(Deserialize)]
pub struct CreateQuoteDto {
    /// Who the quote is attributed to.
    pub quoted: String,
    /// Message components making up the quote.
    pub quote: Vec<MessageComponent>,
}

/// Body of a quote update request. Omitted fields stay unchanged.
#[derive(Deserialize)]
pub struct UpdateQuoteDto {
    pub quoted: Option<String>,
    pub quote: Option<Vec<MessageComponent>>,
}

/// GET /api/channels/{channel}/quotes
/// List the active quotes of a channel.
pub async fn list(
    State(state): State<AppState>,
    Path(channel): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let quotes = QuoteService::new(&state.db).list(&channel).await?;
    let dtos: Vec<QuoteDto> = quotes.into_iter().map(|q| q.into_dto()).collect();

    Ok((
        [("x-total-count", dtos.len().to_string())],
        Json(DataDto { data: dtos }),
    ))
}

/// GET /api/channels/{channel}/quotes/random
/// Pick a uniformly random active quote.
pub async fn random(
    State(state): State<AppState>,
    Path(channel): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let quote = QuoteService::new(&state.db).random(&channel).await?;

    Ok(Json(DataDto {
        data: quote.into_dto(),
    }))
}

/// GET /api/channels/{channel}/quotes/{id}
/// Get a single active quote by its per-channel id.
pub async fn get(
    State(state): State<AppState>,
    Path((channel, quote_id)): Path<(String, i64)>,
) -> Result<impl IntoResponse, AppError> {
    let quote = QuoteService::new(&state.db).get(&channel, quote_id).await?;

    Ok(Json(DataDto {
        data: quote.into_dto(),
    }))
}

/// POST /api/channels/{channel}/quotes
/// Create a quote; the per-channel id is assigned by the server.
pub async fn create(
    State(state): State<AppState>,
    Path(channel): Path<String>,
    headers: HeaderMap,
    Json(dto): Json<CreateQuoteDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.sessions, &headers)
        .require(&[scopes::QUOTE_CREATE])
        .await?;

    let quote = QuoteService::new(&state.db)
        .create(CreateQuoteParams {
            channel,
            quoted: dto.quoted,
            quote: dto.quote,
        })
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(DataDto {
            data: quote.into_dto(),
        }),
    ))
}

/// PATCH /api/channels/{channel}/quotes/{id}
/// Replace the body and/or attribution of a quote.
pub async fn update(
    State(state): State<AppState>,
    Path((channel, quote_id)): Path<(String, i64)>,
    headers: HeaderMap,
    Json(dto): Json<UpdateQuoteDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.sessions, &headers)
        .require(&[scopes::QUOTE_EDIT])
        .await?;

    let applied = QuoteService::new(&state.db)
        .update(&channel, quote_id, dto.quoted, dto.quote)
        .await?;

    if applied {
        Ok(Json(UpdatedDto { updated: true }))
    } else {
        Err(AppError::NotFound(format!(
            "Quote {} not found in channel {:?}",
            quote_id, channel
        )))
    }
}

/// DELETE /api/channels/{channel}/quotes/{id}
/// Soft-delete a quote.
pub async fn remove(
    State(state): State<AppState>,
    Path((channel, quote_id)): Path<(String, i64)>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.sessions, &headers)
        .require(&[scopes::QUOTE_DELETE])
        .await?;

    QuoteService::new(&state.db).delete(&channel, quote_id).await?;

    Ok(Json(DeletedDto { deleted: true }))
}
