//! Domain entities for TaskHub.

pub mod task;

pub use task::{Task, TaskStatus};
