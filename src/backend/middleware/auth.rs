/**
 * Authentication Middleware
 *
 * This module provides the only authorization gate of the API. It extracts
 * the bearer token from the Authorization header, verifies it, resolves the
 * user it names and attaches that user to the request extensions. Handlers
 * behind it read the user through the `AuthUser` extractor and never accept
 * a user id from the request body.
 */

use axum::{
    extract::{FromRequestParts, Request, State},
    http::{header::AUTHORIZATION, request::Parts, HeaderMap},
    middleware::Next,
    response::Response,
};

use crate::backend::auth::users::get_user_by_id;
use crate::backend::error::BackendError;
use crate::backend::server::state::AppState;
use crate::shared::UserSummary;

pub const MISSING_TOKEN_MESSAGE: &str = "Not authorized, no token";
pub const INVALID_TOKEN_MESSAGE: &str = "Not authorized, token failed";

/// Authenticated user resolved from the bearer token
#[derive(Clone, Debug, PartialEq)]
pub struct AuthenticatedUser {
    pub id: String,
    pub username: String,
}

impl From<AuthenticatedUser> for UserSummary {
    fn from(user: AuthenticatedUser) -> Self {
        Self {
            id: user.id,
            username: user.username,
        }
    }
}

/// Pull the token out of `Authorization: Bearer <token>`
pub fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .map(str::trim)
        .filter(|token| !token.is_empty())
}

/// Authentication middleware
///
/// 1. Extracts the bearer token (401 if absent)
/// 2. Verifies signature and expiry (401 if invalid)
/// 3. Loads the user named by the token (401 if it no longer exists)
/// 4. Attaches an [`AuthenticatedUser`] to the request extensions
pub async fn auth_middleware(
    State(app_state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, BackendError> {
    let token = bearer_token(request.headers()).ok_or_else(|| {
        tracing::warn!("Missing or malformed Authorization header");
        BackendError::unauthenticated(MISSING_TOKEN_MESSAGE)
    })?;

    let user_id = app_state.tokens.verify(token).map_err(|e| {
        tracing::warn!("Invalid token: {}", e);
        BackendError::unauthenticated(INVALID_TOKEN_MESSAGE)
    })?;

    let user = get_user_by_id(&app_state.db, &user_id).await?.ok_or_else(|| {
        tracing::warn!("Token names unknown user: {}", user_id);
        BackendError::unauthenticated(INVALID_TOKEN_MESSAGE)
    })?;

    request.extensions_mut().insert(AuthenticatedUser {
        id: user.id,
        username: user.username,
    });

    Ok(next.run(request).await)
}

/// Axum extractor for the user attached by [`auth_middleware`]
#[derive(Clone, Debug)]
pub struct AuthUser(pub AuthenticatedUser);

impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = BackendError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let user = parts
            .extensions
            .get::<AuthenticatedUser>()
            .cloned()
            .ok_or_else(|| {
                tracing::warn!("AuthenticatedUser not found in request extensions");
                BackendError::unauthenticated(MISSING_TOKEN_MESSAGE)
            })?;

        Ok(AuthUser(user))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn headers_with(value: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, HeaderValue::from_str(value).unwrap());
        headers
    }

    #[test]
    fn test_bearer_token_extracted() {
        let headers = headers_with("Bearer abc.def.ghi");
        assert_eq!(bearer_token(&headers), Some("abc.def.ghi"));
    }

    #[test]
    fn test_bearer_token_missing_or_malformed() {
        assert_eq!(bearer_token(&HeaderMap::new()), None);
        assert_eq!(bearer_token(&headers_with("Basic dXNlcjpwYXNz")), None);
        assert_eq!(bearer_token(&headers_with("Bearer ")), None);
        assert_eq!(bearer_token(&headers_with("abc.def.ghi")), None);
    }

    #[tokio::test]
    async fn test_extractor_requires_attached_user() {
        let request = axum::http::Request::builder().uri("/api/tasks").body(()).unwrap();
        let (mut parts, _) = request.into_parts();
        let result = AuthUser::from_request_parts(&mut parts, &()).await;
        assert!(matches!(result, Err(BackendError::Unauthenticated { .. })));
    }

    #[tokio::test]
    async fn test_extractor_reads_attached_user() {
        let mut request = axum::http::Request::builder().uri("/api/tasks").body(()).unwrap();
        let user = AuthenticatedUser {
            id: "u1".to_string(),
            username: "ada".to_string(),
        };
        request.extensions_mut().insert(user.clone());
        let (mut parts, _) = request.into_parts();

        let AuthUser(extracted) = AuthUser::from_request_parts(&mut parts, &()).await.unwrap();
        assert_eq!(extracted, user);
    }
}
