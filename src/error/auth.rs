use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// Request carried no `Authorization: Bearer` header.
    ///
    /// Results in a 401 Unauthorized response.
    #[error("Request is missing a bearer token")]
    MissingToken,

    /// Bearer token is unknown, revoked, invalidated, or expired.
    ///
    /// The session store intentionally does not distinguish these cases;
    /// all of them result in a 401 Unauthorized response.
    #[error("Bearer token is not a valid session")]
    InvalidToken,

    /// Session is valid but its effective scopes lack a required scope.
    ///
    /// Results in a 403 Forbidden response naming the missing scope.
    #[error("Session lacks required scope {0:?}")]
    MissingScope(String),

    /// Login attempt with an unknown username or a wrong password.
    ///
    /// The two cases are deliberately indistinguishable to the client.
    /// Results in a 401 Unauthorized response.
    #[error("Invalid username or password")]
    InvalidCredentials,
}

/// Converts authentication errors into HTTP responses.
///
/// Maps authentication errors to appropriate HTTP status codes and client-safe
/// error messages:
/// - `MissingToken` / `InvalidToken` → 401 Unauthorized
/// - `InvalidCredentials` → 401 Unauthorized
/// - `MissingScope` → 403 Forbidden
///
/// Details are logged at debug level while client-facing messages stay generic.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("auth error: {}", self);

        match self {
            Self::MissingToken | Self::InvalidToken => (
                StatusCode::UNAUTHORIZED,
                Json(ErrorDto {
                    error: "Authentication required".to_string(),
                }),
            )
                .into_response(),
            Self::InvalidCredentials => (
                StatusCode::UNAUTHORIZED,
                Json(ErrorDto {
                    error: "Invalid username or password".to_string(),
                }),
            )
                .into_response(),
            Self::MissingScope(scope) => (
                StatusCode::FORBIDDEN,
                Json(ErrorDto {
                    error: format!("Missing required scope {:?}", scope),
                }),
            )
                .into_response(),
        }
    }
}
