//! Task use cases.

pub mod task;

pub use task::TaskService;
