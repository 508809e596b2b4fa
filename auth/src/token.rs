use chrono::DateTime;
use chrono::Duration;
use chrono::Utc;
use thiserror::Error;

use crate::jwt::Claims;
use crate::jwt::JwtHandler;

/// Token service errors.
///
/// Parsing and validation failures all collapse into `Invalid`; the caller
/// never learns which check failed.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TokenError {
    #[error("Token is invalid")]
    Invalid,

    #[error("Failed to issue token: {0}")]
    IssueFailed(String),
}

/// Mints, parses and validates signed bearer tokens.
///
/// Holds the process-wide signing secret and the configured time-to-live.
/// Both are fixed at construction.
pub struct TokenService {
    jwt_handler: JwtHandler,
    ttl: Duration,
}

impl TokenService {
    /// Create a token service.
    ///
    /// # Arguments
    /// * `secret` - HMAC key (at least 32 bytes)
    /// * `ttl` - Lifetime of every issued token
    pub fn new(secret: &[u8], ttl: Duration) -> Self {
        Self {
            jwt_handler: JwtHandler::new(secret),
            ttl,
        }
    }

    /// Lifetime of issued tokens.
    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Issue a token for `subject`, valid from now for the configured TTL.
    ///
    /// # Errors
    /// * `IssueFailed` - Signing failed
    pub fn issue(&self, subject: &str) -> Result<String, TokenError> {
        self.issue_at(subject, Utc::now())
    }

    /// Issue a token as if it had been minted at `issued_at`.
    ///
    /// # Errors
    /// * `IssueFailed` - Signing failed
    pub fn issue_at(&self, subject: &str, issued_at: DateTime<Utc>) -> Result<String, TokenError> {
        let claims = Claims::for_subject(subject, issued_at, self.ttl);

        self.jwt_handler
            .encode(&claims)
            .map_err(|e| TokenError::IssueFailed(e.to_string()))
    }

    /// Verify the signature and decode the claims.
    ///
    /// # Errors
    /// * `Invalid` - Bad signature, wrong algorithm, expired or malformed token
    pub fn parse(&self, token: &str) -> Result<Claims, TokenError> {
        self.jwt_handler.decode::<Claims>(token).map_err(|e| {
            tracing::debug!(error = %e, "Token rejected");
            TokenError::Invalid
        })
    }

    /// Extract the subject of a verified token.
    ///
    /// # Errors
    /// * `Invalid` - Token does not parse
    pub fn subject_of(&self, token: &str) -> Result<String, TokenError> {
        self.parse(token).map(|claims| claims.sub)
    }

    /// True when the token parses, belongs to `expected_subject` and has not expired.
    pub fn is_valid(&self, token: &str, expected_subject: &str) -> bool {
        match self.parse(token) {
            Ok(claims) => {
                claims.sub == expected_subject && !claims.is_expired(Utc::now().timestamp())
            }
            Err(_) => false,
        }
    }
}
