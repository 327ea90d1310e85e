//! Domain events emitted by TaskHub operations.
//!
//! Events are handed to the configured task event publisher after the
//! corresponding write has been persisted. Publishing is best-effort and
//! never fails the originating request.

pub mod task;

pub use task::{TaskEvent, TaskEventKind};
