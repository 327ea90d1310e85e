//! Core building blocks shared by every TaskHub crate: configuration
//! schemas, the unified error type, pagination, and domain events.

pub mod config;
pub mod error;
pub mod events;
pub mod result;
pub mod types;

pub use error::{AppError, ErrorKind};
pub use result::AppResult;
