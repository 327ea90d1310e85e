//! JWT claims structure embedded in every issued token.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Claim set encoded inside a token before signing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject — the authenticated username.
    pub sub: String,
    /// Issued-at timestamp (seconds since epoch).
    pub iat: i64,
    /// Expiration timestamp (seconds since epoch).
    pub exp: i64,
}

impl Claims {
    /// Whether this claim set is expired at the given instant.
    ///
    /// Expiry is strict: a token whose `exp` equals `now` is expired.
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        self.exp <= now.timestamp()
    }
}
