/**
 * Registration Rate Limiting
 *
 * Account creation is limited to 5 attempts per caller address per hour.
 * Each address gets a fixed window that opens on its first attempt; every
 * request to the guarded route counts, whether it succeeds or not.
 *
 * The number of tracked addresses is capped. A new address arriving at the
 * cap first triggers a sweep of expired windows and is refused if the map
 * is still full.
 */

use axum::{
    extract::{ConnectInfo, Request, State},
    middleware::Next,
    response::Response,
};
use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use crate::backend::error::BackendError;
use crate::backend::server::state::AppState;

/// Registration attempts allowed per window
pub const REGISTER_MAX_ATTEMPTS: u32 = 5;

/// Length of one registration window
pub const REGISTER_WINDOW: Duration = Duration::from_secs(60 * 60);

pub const RATE_LIMITED_MESSAGE: &str =
    "Too many accounts created from this IP, please try again after an hour.";

/// Bucket key for requests without a known peer address
const UNKNOWN_PEER: &str = "unknown";

/// Default cap on distinct addresses held at once
pub const DEFAULT_MAX_TRACKED: usize = 10_000;

#[derive(Debug, Clone, Copy)]
struct Window {
    started: Instant,
    count: u32,
}

/// Fixed-window counter keyed by caller address
#[derive(Debug, Clone)]
pub struct RateLimiter {
    max_attempts: u32,
    window: Duration,
    max_tracked: usize,
    windows: Arc<Mutex<HashMap<String, Window>>>,
}

impl RateLimiter {
    pub fn new(max_attempts: u32, window: Duration) -> Self {
        Self {
            max_attempts,
            window,
            max_tracked: DEFAULT_MAX_TRACKED,
            windows: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    pub fn with_max_tracked(mut self, max_tracked: usize) -> Self {
        self.max_tracked = max_tracked;
        self
    }

    /// The limiter guarding `POST /api/auth/register`
    pub fn for_registration() -> Self {
        Self::new(REGISTER_MAX_ATTEMPTS, REGISTER_WINDOW)
    }

    /// Record one attempt for `key`; returns whether it is allowed
    pub fn check(&self, key: &str) -> bool {
        self.check_at(key, Instant::now())
    }

    pub fn check_at(&self, key: &str, now: Instant) -> bool {
        let mut windows = self.windows.lock().unwrap_or_else(|poisoned| poisoned.into_inner());

        if !windows.contains_key(key) && windows.len() >= self.max_tracked {
            let window = self.window;
            windows.retain(|_, w| now.duration_since(w.started) < window);

            if windows.len() >= self.max_tracked {
                tracing::warn!(
                    "Refusing {}: {} addresses already tracked",
                    key,
                    windows.len()
                );
                return false;
            }
        }

        let entry = windows
            .entry(key.to_string())
            .or_insert(Window { started: now, count: 0 });
        if now.duration_since(entry.started) >= self.window {
            *entry = Window { started: now, count: 0 };
        }
        entry.count = entry.count.saturating_add(1);
        entry.count <= self.max_attempts
    }
}

/// Middleware applying the registration limiter to the wrapped route
pub async fn register_rate_limit(
    State(app_state): State<AppState>,
    request: Request,
    next: Next,
) -> Result<Response, BackendError> {
    let key = request
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ConnectInfo(addr)| addr.ip().to_string())
        .unwrap_or_else(|| UNKNOWN_PEER.to_string());

    if !app_state.register_limiter.check(&key) {
        tracing::warn!("Registration rate limit exceeded for {}", key);
        return Err(BackendError::rate_limited(RATE_LIMITED_MESSAGE));
    }

    Ok(next.run(request).await)
}
