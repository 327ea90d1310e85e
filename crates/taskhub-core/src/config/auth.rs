//! Authentication configuration.
//!
//! TaskHub runs with exactly one configured account. The credential and
//! the signing secret are read once at startup and are immutable for the
//! process lifetime.

use serde::{Deserialize, Serialize};

/// Authentication and credential configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Secret key for JWT signing (HMAC-SHA256). The raw UTF-8 bytes are
    /// used as key material. An empty secret aborts startup.
    #[serde(default)]
    pub jwt_secret: String,
    /// Token TTL in minutes.
    #[serde(default = "default_ttl_minutes")]
    pub jwt_ttl_minutes: u64,
    /// Username of the single configured account.
    #[serde(default = "default_username")]
    pub username: String,
    /// Plaintext password of the account; hashed with Argon2id at startup.
    /// Ignored when `password_hash` is set.
    #[serde(default)]
    pub password: String,
    /// Pre-hashed password (PHC string). Takes precedence over `password`.
    #[serde(default)]
    pub password_hash: Option<String>,
    /// Roles granted to the account.
    #[serde(default = "default_roles")]
    pub roles: Vec<String>,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt_secret: String::new(),
            jwt_ttl_minutes: default_ttl_minutes(),
            username: default_username(),
            password: String::new(),
            password_hash: None,
            roles: default_roles(),
        }
    }
}

fn default_ttl_minutes() -> u64 {
    60
}

fn default_username() -> String {
    "admin".to_string()
}

fn default_roles() -> Vec<String> {
    vec!["USER".to_string()]
}
