//! Authentication failure taxonomy.
//!
//! The variants exist for logging and tests; clients only ever see a
//! single opaque unauthorized outcome (see the `From<AuthError>` impl).

use thiserror::Error;

use taskhub_core::error::AppError;

/// Why an authentication attempt or token check failed.
#[derive(Debug, Error)]
pub enum AuthError {
    /// The submitted username/password pair did not match the configured
    /// credential. Deliberately does not say which part was wrong.
    #[error("invalid username or password")]
    InvalidCredentials,
    /// The token could not be decoded or its signature did not verify.
    #[error("token rejected: {0}")]
    TokenDecode(#[source] jsonwebtoken::errors::Error),
    /// The token decoded cleanly but its expiry has passed.
    #[error("token expired")]
    TokenExpired,
    /// The token's subject differs from the identity the caller asserted.
    #[error("token subject mismatch")]
    SubjectMismatch,
}

impl AuthError {
    /// Stable name for structured logging.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::InvalidCredentials => "invalid_credentials",
            Self::TokenDecode(_) => "token_decode",
            Self::TokenExpired => "token_expired",
            Self::SubjectMismatch => "subject_mismatch",
        }
    }
}

/// Collapse every auth failure into the same client-visible 401. The
/// message must not reveal which check failed.
impl From<AuthError> for AppError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::InvalidCredentials => {
                AppError::authentication("Invalid username or password")
            }
            AuthError::TokenDecode(_) | AuthError::TokenExpired | AuthError::SubjectMismatch => {
                AppError::authentication("Unauthorized")
            }
        }
    }
}
