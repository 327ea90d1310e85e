//! Login use case: credentials in, signed token out.

pub mod issuer;

pub use issuer::{IssuedToken, SessionIssuer};
