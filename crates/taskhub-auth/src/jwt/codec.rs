//! Stateless signing and verification of identity claims.

use std::collections::HashSet;
use std::sync::Arc;

use chrono::Duration;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};

use taskhub_core::config::auth::AuthConfig;
use taskhub_core::error::AppError;

use crate::clock::{Clock, SystemClock};
use crate::error::AuthError;

use super::claims::Claims;

/// Signs and verifies the time-bounded identity claims carried in bearer
/// tokens.
///
/// The codec is deliberately stateless: any number of service instances
/// configured with the same secret can validate each other's tokens
/// without shared storage. The flip side is that issued tokens cannot be
/// revoked before they expire.
///
/// Expiry is not delegated to the JWT library; it is checked against the
/// injected [`Clock`] so that validation is deterministic under test.
#[derive(Clone)]
pub struct TokenCodec {
    /// HMAC-SHA256 signing key (raw UTF-8 bytes of the configured secret).
    encoding_key: EncodingKey,
    /// Verification key derived from the same secret.
    decoding_key: DecodingKey,
    /// Signature-only validation; expiry is checked via `clock`.
    validation: Validation,
    /// Token time-to-live.
    ttl: Duration,
    /// Source of "now" for issuance and expiry checks.
    clock: Arc<dyn Clock>,
}

impl std::fmt::Debug for TokenCodec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenCodec")
            .field("ttl", &self.ttl)
            .finish()
    }
}

impl TokenCodec {
    /// Creates a codec from auth configuration using the system clock.
    ///
    /// Fails with a configuration error when the secret is empty; this is
    /// a fatal startup condition, never a per-request error.
    pub fn new(config: &AuthConfig) -> Result<Self, AppError> {
        Self::with_clock(config, Arc::new(SystemClock))
    }

    /// Creates a codec with an explicit clock. Tests use this to pin or
    /// rewind time.
    pub fn with_clock(config: &AuthConfig, clock: Arc<dyn Clock>) -> Result<Self, AppError> {
        if config.jwt_secret.trim().is_empty() {
            return Err(AppError::configuration(
                "auth.jwt_secret must not be empty",
            ));
        }

        let mut validation = Validation::new(Algorithm::HS256);
        // Expiry is enforced in `verify` through the injected clock.
        validation.validate_exp = false;
        validation.required_spec_claims = HashSet::new();

        Ok(Self {
            encoding_key: EncodingKey::from_secret(config.jwt_secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(config.jwt_secret.as_bytes()),
            validation,
            ttl: Duration::minutes(config.jwt_ttl_minutes as i64),
            clock,
        })
    }

    /// Issues a signed token for `subject` with `iat = now` and
    /// `exp = now + ttl`.
    pub fn issue(&self, subject: &str) -> Result<String, AppError> {
        let now = self.clock.now();
        let claims = Claims {
            sub: subject.to_string(),
            iat: now.timestamp(),
            exp: (now + self.ttl).timestamp(),
        };

        encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| AppError::with_source(
                taskhub_core::ErrorKind::Internal,
                "Failed to sign token",
                e,
            ))
    }

    /// Decodes a token and checks it against the caller-asserted subject.
    ///
    /// Returns the claims when the signature verifies, the subject matches,
    /// and the expiry is strictly in the future. The error carries which
    /// check failed — for logging only, never for the client.
    pub fn verify(&self, token: &str, expected_subject: &str) -> Result<Claims, AuthError> {
        let claims = self.decode(token)?;

        if claims.sub != expected_subject {
            return Err(AuthError::SubjectMismatch);
        }

        if claims.is_expired_at(self.clock.now()) {
            return Err(AuthError::TokenExpired);
        }

        Ok(claims)
    }

    /// Fail-closed boolean form of [`verify`](Self::verify): false on any
    /// failure, true only for a fully valid token for `expected_subject`.
    pub fn validate(&self, token: &str, expected_subject: &str) -> bool {
        self.verify(token, expected_subject).is_ok()
    }

    /// Decodes a token and returns its subject without checking expiry or
    /// matching it against an asserted identity.
    ///
    /// The request gate uses this to learn which subject to look up before
    /// it can call [`verify`](Self::verify).
    pub fn extract_subject(&self, token: &str) -> Result<String, AuthError> {
        Ok(self.decode(token)?.sub)
    }

    /// Signature-checked decode. Expiry is deliberately not checked here.
    fn decode(&self, token: &str) -> Result<Claims, AuthError> {
        decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(AuthError::TokenDecode)
    }

    /// The configured token time-to-live.
    pub fn ttl(&self) -> Duration {
        self.ttl
    }
}
