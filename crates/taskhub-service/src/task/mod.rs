//! Task service.

pub mod service;

pub use service::TaskService;
