/**
 * Register Handler
 *
 * This module implements the account creation handler for
 * POST /api/auth/register.
 *
 * # Registration Process
 *
 * The route is wrapped by the registration rate limiter, so by the time
 * this handler runs the attempt has already been counted.
 *
 * 1. Verify the arithmetic CAPTCHA
 * 2. Require a non-empty username and password
 * 3. Reject a username that is already taken
 * 4. Hash the password with bcrypt
 * 5. Create the user and issue a token
 * 6. Return 201 with `{id, username, token}`
 */

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::Json,
};

use crate::backend::auth::captcha;
use crate::backend::auth::users::{create_user, get_user_by_username, is_unique_violation};
use crate::backend::error::BackendError;
use crate::backend::server::state::AppState;
use crate::shared::{AuthResponse, RegisterRequest};

pub const MISSING_CREDENTIALS_MESSAGE: &str = "Username and password are required";
pub const USER_EXISTS_MESSAGE: &str = "User already exists";

/// Register handler
///
/// # Errors
///
/// * `400 Bad Request` - CAPTCHA missing or wrong, missing credentials,
///   or the username is taken
/// * `429 Too Many Requests` - raised by the rate limit layer, not here
/// * `500 Internal Server Error` - hashing, storage or signing failed
pub async fn register(
    State(app_state): State<AppState>,
    payload: Result<Json<RegisterRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<AuthResponse>), BackendError> {
    let Json(request) = payload?;

    captcha::verify(
        request.captcha_question.as_deref(),
        request.captcha_answer.as_ref(),
    )
    .inspect_err(|e| tracing::debug!("CAPTCHA rejected: {}", e))?;

    if request.username.is_empty() || request.password.is_empty() {
        return Err(BackendError::validation(MISSING_CREDENTIALS_MESSAGE));
    }

    tracing::info!("Register request for username: {}", request.username);

    if get_user_by_username(&app_state.db, &request.username)
        .await?
        .is_some()
    {
        tracing::warn!("Username already exists: {}", request.username);
        return Err(BackendError::validation(USER_EXISTS_MESSAGE));
    }

    let password_hash = bcrypt::hash(&request.password, app_state.bcrypt_cost)
        .map_err(|e| BackendError::internal(format!("Failed to hash password: {e}")))?;

    // A concurrent registration can still win the race past the lookup above.
    let user = create_user(&app_state.db, &request.username, &password_hash)
        .await
        .map_err(|e| {
            if is_unique_violation(&e) {
                BackendError::validation(USER_EXISTS_MESSAGE)
            } else {
                BackendError::from(e)
            }
        })?;

    let token = app_state
        .tokens
        .issue(&user.id)
        .map_err(|e| BackendError::internal(format!("Failed to create token: {e}")))?;

    tracing::info!("User created successfully: {}", user.username);

    Ok((
        StatusCode::CREATED,
        Json(AuthResponse {
            id: user.id,
            username: user.username,
            token,
        }),
    ))
}
