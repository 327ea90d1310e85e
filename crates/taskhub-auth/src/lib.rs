//! Stateless token-based authentication for TaskHub.
//!
//! The crate is organized around four pieces:
//!
//! - [`jwt::TokenCodec`] — signs and verifies time-bounded identity claims.
//! - [`credentials::Authenticator`] — checks a username/password pair
//!   against the single configured account.
//! - [`session::SessionIssuer`] — the login use case: authenticate, then
//!   issue a token.
//! - [`error::AuthError`] — the internal failure taxonomy; every variant
//!   collapses to the same opaque unauthorized outcome at the API boundary.
//!
//! Token validity is determined entirely by cryptographic verification of
//! the token's contents; there is no session table and no revocation list.

pub mod clock;
pub mod credentials;
pub mod error;
pub mod jwt;
pub mod password;
pub mod session;

pub use clock::{Clock, SystemClock};
pub use credentials::{Authenticator, Credential, Identity};
pub use error::AuthError;
pub use jwt::TokenCodec;
pub use session::SessionIssuer;
