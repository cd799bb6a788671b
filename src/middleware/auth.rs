use axum::http::{header, HeaderMap};

use crate::{
    error::{auth::AuthError, AppError},
    session::store::SessionStore,
};

/// Authorization guard for request handlers.
///
/// Wraps the session store and the request headers; handlers call
/// [`AuthGuard::require`] with the scopes an operation needs. The guard
/// extracts the bearer token, validates the session, and checks every
/// required scope against the session's effective scope set (with the
/// `admin:full` marker already expanded by the store).
pub struct AuthGuard<'a> {
    sessions: &'a SessionStore,
    headers: &'a HeaderMap,
}

impl<'a> AuthGuard<'a> {
    pub fn new(sessions: &'a SessionStore, headers: &'a HeaderMap) -> Self {
        Self { sessions, headers }
    }

    /// Requires a live session holding all of the given scopes.
    ///
    /// # Arguments
    /// - `required` - Scopes the operation needs; empty means any live session
    ///
    /// # Returns
    /// - `Ok(String)` - Principal of the authenticated session
    /// - `Err(AppError::AuthErr(MissingToken))` - No bearer token on the request
    /// - `Err(AppError::AuthErr(InvalidToken))` - Token is not a live session
    /// - `Err(AppError::AuthErr(MissingScope))` - A required scope is absent
    pub async fn require(&self, required: &[&str]) -> Result<String, AppError> {
        let token = bearer_token(self.headers).ok_or(AuthError::MissingToken)?;

        let Some(effective) = self.sessions.effective_scopes(token).await else {
            return Err(AuthError::InvalidToken.into());
        };

        for scope in required {
            if !effective.iter().any(|held| held == scope) {
                return Err(AuthError::MissingScope(scope.to_string()).into());
            }
        }

        let principal = self
            .sessions
            .principal(token)
            .await
            .ok_or(AuthError::InvalidToken)?;

        Ok(principal)
    }

    /// The raw bearer token on the request, if any.
    ///
    /// Used by logout, which revokes whatever token was presented without
    /// requiring it to still be valid.
    pub fn token(&self) -> Option<&'a str> {
        bearer_token(self.headers)
    }
}

/// Extracts the token from an `Authorization: Bearer` header.
fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(header::AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::scopes;
    use axum::http::HeaderValue;
    use std::time::Duration;

    const HOUR: Duration = Duration::from_secs(3600);

    fn headers_with_token(token: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::AUTHORIZATION,
            HeaderValue::from_str(&format!("Bearer {}", token)).unwrap(),
        );
        headers
    }

    /// Tests that a request without a bearer token is rejected.
    ///
    /// Expected: Err(AuthError::MissingToken)
    #[tokio::test]
    async fn rejects_request_without_token() {
        let sessions = SessionStore::new();
        let headers = HeaderMap::new();

        let result = AuthGuard::new(&sessions, &headers).require(&[]).await;

        assert!(matches!(
            result,
            Err(AppError::AuthErr(AuthError::MissingToken))
        ));
    }

    /// Tests that a token the store never issued is rejected.
    ///
    /// Expected: Err(AuthError::InvalidToken)
    #[tokio::test]
    async fn rejects_unknown_token() {
        let sessions = SessionStore::new();
        let headers = headers_with_token("nosuchtoken");

        let result = AuthGuard::new(&sessions, &headers).require(&[]).await;

        assert!(matches!(
            result,
            Err(AppError::AuthErr(AuthError::InvalidToken))
        ));
    }

    /// Tests that a live session lacking a required scope is denied.
    ///
    /// Expected: Err(AuthError::MissingScope) naming the absent scope
    #[tokio::test]
    async fn denies_session_missing_required_scope() {
        let sessions = SessionStore::new();
        let token = sessions
            .issue("somebody", vec![scopes::QUOTE_CREATE.to_string()], HOUR)
            .await;
        let headers = headers_with_token(&token);

        let result = AuthGuard::new(&sessions, &headers)
            .require(&[scopes::COMMAND_EDIT])
            .await;

        match result {
            Err(AppError::AuthErr(AuthError::MissingScope(scope))) => {
                assert_eq!(scope, scopes::COMMAND_EDIT);
            }
            other => panic!("Expected MissingScope error, got: {:?}", other),
        }
    }

    /// Tests that a session holding the required scope passes.
    ///
    /// Expected: Ok with the session's principal
    #[tokio::test]
    async fn grants_session_with_required_scope() {
        let sessions = SessionStore::new();
        let token = sessions
            .issue("somebody", vec![scopes::COMMAND_EDIT.to_string()], HOUR)
            .await;
        let headers = headers_with_token(&token);

        let principal = AuthGuard::new(&sessions, &headers)
            .require(&[scopes::COMMAND_EDIT])
            .await
            .unwrap();

        assert_eq!(principal, "somebody");
    }

    /// Tests that an admin:full session passes every scope check.
    ///
    /// Expected: Ok even for scopes never granted individually
    #[tokio::test]
    async fn admin_full_session_passes_all_scopes() {
        let sessions = SessionStore::new();
        let token = sessions
            .issue("somebody", vec![scopes::ADMIN_FULL.to_string()], HOUR)
            .await;
        let headers = headers_with_token(&token);

        let result = AuthGuard::new(&sessions, &headers)
            .require(&[scopes::CHANNEL_DELETE, scopes::USER_DELETE])
            .await;

        assert!(result.is_ok());
    }

    /// Tests that an empty scope list only requires a live session.
    #[tokio::test]
    async fn empty_scope_list_requires_live_session_only() {
        let sessions = SessionStore::new();
        let token = sessions.issue("somebody", vec![], HOUR).await;
        let headers = headers_with_token(&token);

        let result = AuthGuard::new(&sessions, &headers).require(&[]).await;

        assert!(result.is_ok());
    }
}
