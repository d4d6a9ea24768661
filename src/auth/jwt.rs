//! JWT issue and validation.

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::models::UserId;

/// Fixed validity window of an issued token, in seconds.
pub const TOKEN_TTL_SECS: i64 = 2 * 60 * 60;

const ALGORITHM: Algorithm = Algorithm::HS256;

#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String, // user id
    pub iat: i64,
    pub exp: i64,
}

/// Token failures. Verification collapses every cause into `Invalid`.
#[derive(Debug, thiserror::Error)]
pub enum TokenError {
    #[error("invalid token")]
    Invalid,
    #[error("token signing failed: {0}")]
    Signing(String),
}

/// Issues and verifies session tokens with a symmetric key.
#[derive(Clone)]
pub struct TokenService {
    encoding: EncodingKey,
    decoding: DecodingKey,
    validation: Validation,
}

impl TokenService {
    pub fn new(secret: &[u8]) -> Self {
        let mut validation = Validation::new(ALGORITHM);
        validation.leeway = 0;
        validation.set_required_spec_claims(&["exp", "sub"]);
        Self {
            encoding: EncodingKey::from_secret(secret),
            decoding: DecodingKey::from_secret(secret),
            validation,
        }
    }

    pub fn issue(&self, user_id: UserId) -> Result<String, TokenError> {
        self.issue_at(user_id, Utc::now())
    }

    /// Issue a token as if it had been signed at `issued_at`.
    pub fn issue_at(&self, user_id: UserId, issued_at: DateTime<Utc>) -> Result<String, TokenError> {
        let claims = Claims {
            sub: user_id.to_string(),
            iat: issued_at.timestamp(),
            exp: (issued_at + Duration::seconds(TOKEN_TTL_SECS)).timestamp(),
        };
        encode(&Header::new(ALGORITHM), &claims, &self.encoding)
            .map_err(|e| TokenError::Signing(e.to_string()))
    }

    /// Verify signature, algorithm and expiry, returning the subject.
    pub fn verify(&self, token: &str) -> Result<UserId, TokenError> {
        let data = decode::<Claims>(token, &self.decoding, &self.validation).map_err(|e| {
            debug!(kind = ?e.kind(), "token rejected");
            TokenError::Invalid
        })?;
        match data.claims.sub.parse::<UserId>() {
            Ok(id) if id > 0 => Ok(id),
            _ => {
                debug!("token rejected: malformed subject");
                Err(TokenError::Invalid)
            }
        }
    }
}
