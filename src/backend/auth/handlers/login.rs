/**
 * Login Handler
 *
 * This module implements the user authentication handler for
 * POST /api/auth/login.
 *
 * # Security
 *
 * - Passwords are verified using bcrypt
 * - Unknown user and wrong password produce the same 401 response
 * - Passwords are never logged or returned
 */

use axum::{
    extract::{rejection::JsonRejection, State},
    response::Json,
};

use crate::backend::auth::users::get_user_by_username;
use crate::backend::error::BackendError;
use crate::backend::server::state::AppState;
use crate::shared::{AuthResponse, LoginRequest};

pub const INVALID_CREDENTIALS_MESSAGE: &str = "Invalid username or password";

/// Login handler
///
/// # Errors
///
/// * `401 Unauthorized` - user not found or password incorrect
/// * `500 Internal Server Error` - storage, hash verification or signing failed
pub async fn login(
    State(app_state): State<AppState>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<Json<AuthResponse>, BackendError> {
    let Json(request) = payload?;
    tracing::info!("Login request for: {}", request.username);

    let user = get_user_by_username(&app_state.db, &request.username)
        .await?
        .ok_or_else(|| {
            tracing::warn!("User not found: {}", request.username);
            BackendError::unauthenticated(INVALID_CREDENTIALS_MESSAGE)
        })?;

    let valid = bcrypt::verify(&request.password, &user.password_hash)
        .map_err(|e| BackendError::internal(format!("Password verification error: {e}")))?;

    if !valid {
        tracing::warn!("Invalid password for user: {}", request.username);
        return Err(BackendError::unauthenticated(INVALID_CREDENTIALS_MESSAGE));
    }

    let token = app_state
        .tokens
        .issue(&user.id)
        .map_err(|e| BackendError::internal(format!("Failed to create token: {e}")))?;

    tracing::info!("User logged in successfully: {}", user.username);

    Ok(Json(AuthResponse {
        id: user.id,
        username: user.username,
        token,
    }))
}
