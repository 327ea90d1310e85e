//! Orchestrates the authenticator and the token codec into the login
//! use case.

use std::sync::Arc;

use crate::credentials::Authenticator;
use crate::error::AuthError;
use crate::jwt::TokenCodec;

/// Result of a successful login.
#[derive(Debug, Clone)]
pub struct IssuedToken {
    /// The signed bearer token.
    pub token: String,
    /// The authenticated subject the token was issued for.
    pub subject: String,
}

/// Turns a login request into a token response.
#[derive(Debug, Clone)]
pub struct SessionIssuer {
    authenticator: Arc<Authenticator>,
    codec: Arc<TokenCodec>,
}

impl SessionIssuer {
    /// Creates an issuer over the given authenticator and codec.
    pub fn new(authenticator: Arc<Authenticator>, codec: Arc<TokenCodec>) -> Self {
        Self {
            authenticator,
            codec,
        }
    }

    /// Authenticates the pair and issues a token for the resulting
    /// identity. Credential failures propagate untouched; no persistence,
    /// no other side effects.
    pub fn login(&self, username: &str, password: &str) -> Result<IssuedToken, AuthError> {
        let identity = self.authenticator.authenticate(username, password)?;

        let token = self.codec.issue(&identity.subject).map_err(|e| {
            // Signing only fails on an internal fault; still fail closed.
            tracing::error!(error = %e, "Token issuance failed after successful login");
            AuthError::InvalidCredentials
        })?;

        tracing::info!(subject = %identity.subject, "Login succeeded, token issued");

        Ok(IssuedToken {
            token,
            subject: identity.subject,
        })
    }
}
