/**
 * Get Current User Handler
 *
 * GET /api/auth/me returns the user named by the bearer token. The route
 * sits behind the auth middleware, which has already resolved the user.
 */

use axum::response::Json;

use crate::backend::middleware::auth::AuthUser;
use crate::shared::UserSummary;

/// Get current user handler
pub async fn get_me(AuthUser(user): AuthUser) -> Json<UserSummary> {
    Json(user.into())
}
