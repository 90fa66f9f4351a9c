/**
 * Session Tokens
 *
 * This module issues and verifies the signed bearer tokens handed out by
 * register and login. Tokens are HS256 JWTs carrying the user id and an
 * absolute expiry 30 days after issuance. Nothing is stored server-side:
 * a token is valid until it expires or the client discards it.
 */

use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};
use thiserror::Error;

/// Token lifetime: 30 days
pub const TOKEN_TTL_SECS: u64 = 30 * 24 * 60 * 60;

/// JWT claims structure
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// User ID
    pub sub: String,
    /// Expiration time (Unix timestamp)
    pub exp: u64,
    /// Issued at time (Unix timestamp)
    pub iat: u64,
}

#[derive(Debug, Error)]
pub enum TokenError {
    /// Bad signature, malformed payload or expired
    #[error("invalid token")]
    InvalidToken,
    #[error("failed to sign token: {0}")]
    Encoding(#[from] jsonwebtoken::errors::Error),
}

/// Issues and verifies bearer tokens with one shared secret
#[derive(Clone)]
pub struct TokenService {
    encoding: EncodingKey,
    decoding: DecodingKey,
    ttl_secs: u64,
}

impl TokenService {
    pub fn new(secret: &str) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
            ttl_secs: TOKEN_TTL_SECS,
        }
    }

    /// Create a token for `user_id`, valid for 30 days from now
    pub fn issue(&self, user_id: &str) -> Result<String, TokenError> {
        self.issue_at(user_id, unix_now())
    }

    /// Create a token as if issued at `now` (Unix seconds)
    pub fn issue_at(&self, user_id: &str, now: u64) -> Result<String, TokenError> {
        let claims = Claims {
            sub: user_id.to_string(),
            exp: now + self.ttl_secs,
            iat: now,
        };
        Ok(encode(&Header::new(Algorithm::HS256), &claims, &self.encoding)?)
    }

    /// Verify a token and return the user id it carries
    pub fn verify(&self, token: &str) -> Result<String, TokenError> {
        self.verify_at(token, unix_now())
    }

    /// Verify a token against the clock value `now` (Unix seconds).
    ///
    /// A token stops being valid at the exact second of its expiry.
    pub fn verify_at(&self, token: &str, now: u64) -> Result<String, TokenError> {
        let mut validation = Validation::new(Algorithm::HS256);
        // Expiry is checked below against the supplied clock, without leeway.
        validation.validate_exp = false;
        validation.set_required_spec_claims(&["exp", "sub"]);

        let claims = decode::<Claims>(token, &self.decoding, &validation)
            .map_err(|e| {
                tracing::debug!("Token rejected: {:?}", e);
                TokenError::InvalidToken
            })?
            .claims;

        if now >= claims.exp {
            tracing::debug!("Token expired at {} (now {})", claims.exp, now);
            return Err(TokenError::InvalidToken);
        }
        Ok(claims.sub)
    }
}

fn unix_now() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}
