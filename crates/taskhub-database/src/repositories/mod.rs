//! Repository implementations.

pub mod task;

pub use task::TaskRepository;
