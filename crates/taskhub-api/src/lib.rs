//! HTTP API layer for TaskHub.
//!
//! The request gate (`middleware::auth`) authenticates bearer tokens for
//! every route; handlers of protected routes additionally require the
//! [`extractors::AuthenticatedUser`] extractor, which rejects requests
//! the gate passed through unauthenticated.

pub mod app;
pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use app::{build_app, build_state, run_server};
pub use state::AppState;
