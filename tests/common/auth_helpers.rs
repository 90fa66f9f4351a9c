//! Helpers for creating users and tokens directly against the state

use daylog::backend::auth::users::create_user;
use daylog::backend::AppState;

pub struct TestUser {
    pub id: String,
    pub username: String,
    pub password: String,
    pub token: String,
}

/// Insert a user and mint a token for it without going through the API
pub async fn create_test_user(state: &AppState, username: &str, password: &str) -> TestUser {
    let hash = bcrypt::hash(password, 4).expect("Failed to hash password");
    let user = create_user(&state.db, username, &hash)
        .await
        .expect("Failed to create test user");
    let token = state.tokens.issue(&user.id).expect("Failed to issue token");

    TestUser {
        id: user.id,
        username: user.username,
        password: password.to_string(),
        token,
    }
}

pub fn auth_header(token: &str) -> String {
    format!("Bearer {}", token)
}
