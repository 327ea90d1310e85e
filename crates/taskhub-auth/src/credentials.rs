//! The single configured credential and the authenticator that checks
//! login attempts against it.

use taskhub_core::config::auth::AuthConfig;
use taskhub_core::error::AppError;

use crate::error::AuthError;
use crate::password::PasswordHasher;

/// The one account this service knows about. Built once at startup from
/// configuration; immutable for the process lifetime.
#[derive(Debug, Clone)]
pub struct Credential {
    /// Login name.
    pub username: String,
    /// Argon2id PHC hash of the password.
    pub password_hash: String,
    /// Roles granted to the account.
    pub roles: Vec<String>,
}

impl Credential {
    /// Builds the credential from configuration.
    ///
    /// A pre-hashed password (`auth.password_hash`) is taken as-is;
    /// otherwise the plaintext `auth.password` is hashed here. Missing
    /// both is a fatal startup condition.
    pub fn from_config(config: &AuthConfig, hasher: &PasswordHasher) -> Result<Self, AppError> {
        if config.username.trim().is_empty() {
            return Err(AppError::configuration("auth.username must not be empty"));
        }

        let password_hash = match &config.password_hash {
            Some(hash) if !hash.trim().is_empty() => hash.clone(),
            _ if !config.password.is_empty() => hasher.hash(&config.password)?,
            _ => {
                return Err(AppError::configuration(
                    "either auth.password or auth.password_hash must be set",
                ));
            }
        };

        Ok(Self {
            username: config.username.clone(),
            password_hash,
            roles: config.roles.clone(),
        })
    }
}

/// Identity produced by a successful credential check. Transient; never
/// persisted.
#[derive(Debug, Clone)]
pub struct Identity {
    /// The authenticated username.
    pub subject: String,
    /// Roles carried over from the credential.
    pub roles: Vec<String>,
}

/// Verifies username/password pairs against the configured [`Credential`].
#[derive(Debug, Clone)]
pub struct Authenticator {
    credential: Credential,
    hasher: PasswordHasher,
}

impl Authenticator {
    /// Creates an authenticator over the given credential.
    pub fn new(credential: Credential, hasher: PasswordHasher) -> Self {
        Self { credential, hasher }
    }

    /// Checks the submitted pair and returns the identity on success.
    ///
    /// Unknown username, wrong password, and internal verification errors
    /// all collapse to [`AuthError::InvalidCredentials`]; nothing reveals
    /// which part failed.
    pub fn authenticate(&self, username: &str, password: &str) -> Result<Identity, AuthError> {
        if username != self.credential.username {
            return Err(AuthError::InvalidCredentials);
        }

        match self.hasher.verify(password, &self.credential.password_hash) {
            Ok(true) => Ok(Identity {
                subject: self.credential.username.clone(),
                roles: self.credential.roles.clone(),
            }),
            Ok(false) => Err(AuthError::InvalidCredentials),
            Err(e) => {
                // Fail closed on any internal error during verification.
                tracing::warn!(error = %e, "Password verification errored; rejecting login");
                Err(AuthError::InvalidCredentials)
            }
        }
    }

    /// Whether `subject` names the configured account. The request gate
    /// re-checks this after extracting a subject from a token.
    pub fn is_known_subject(&self, subject: &str) -> bool {
        subject == self.credential.username
    }
}
