/**
 * API Route Handlers
 *
 * This module wires the REST endpoints to their handlers and attaches the
 * per-group middleware.
 *
 * # Routes
 *
 * ## Public
 * - `POST /api/auth/register` - Registration (rate limited, CAPTCHA)
 * - `POST /api/auth/login` - Login
 *
 * ## Protected (bearer token required)
 * - `GET /api/auth/me` - Current user
 * - `GET|POST /api/tasks`, `PUT|DELETE /api/tasks/{id}`
 * - `GET|POST /api/expenses`, `PUT|DELETE /api/expenses/{id}`
 * - `GET|POST /api/moods`
 */

use axum::{
    middleware,
    routing::{get, post, put},
    Router,
};

use crate::backend::auth::{get_me, login, register};
use crate::backend::middleware::{auth_middleware, register_rate_limit};
use crate::backend::resources::{expenses, moods, tasks};
use crate::backend::server::state::AppState;

/// Configure API routes
///
/// `route_layer` is used for both middleware groups so that the limiter
/// and the token check only run for requests that matched one of the
/// group's routes.
pub fn configure_api_routes(router: Router<AppState>, app_state: &AppState) -> Router<AppState> {
    let registration = Router::new()
        .route("/api/auth/register", post(register))
        .route_layer(middleware::from_fn_with_state(
            app_state.clone(),
            register_rate_limit,
        ));

    let public = Router::new().route("/api/auth/login", post(login));

    let protected = Router::new()
        .route("/api/auth/me", get(get_me))
        // Tasks
        .route(
            "/api/tasks",
            get(tasks::list_tasks).post(tasks::create_task),
        )
        .route(
            "/api/tasks/{id}",
            put(tasks::update_task).delete(tasks::delete_task),
        )
        // Expenses
        .route(
            "/api/expenses",
            get(expenses::list_expenses).post(expenses::create_expense),
        )
        .route(
            "/api/expenses/{id}",
            put(expenses::update_expense).delete(expenses::delete_expense),
        )
        // Moods
        .route("/api/moods", get(moods::list_moods).post(moods::set_mood))
        .route_layer(middleware::from_fn_with_state(
            app_state.clone(),
            auth_middleware,
        ));

    router.merge(registration).merge(public).merge(protected)
}
