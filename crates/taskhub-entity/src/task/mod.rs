//! Task entity and related types.

pub mod model;
pub mod status;

pub use model::{NewTask, Task, TaskPatch, UpdateTask};
pub use status::TaskStatus;
