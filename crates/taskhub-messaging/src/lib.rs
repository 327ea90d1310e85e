//! Outbound task event publishing.
//!
//! Publishing is strictly best-effort: failures are logged and never
//! propagate into the request that triggered the event.

pub mod publisher;

pub use publisher::{NoopPublisher, SqsPublisher, TaskEventPublisher, build_publisher};
