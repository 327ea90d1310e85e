pub mod auth;
pub mod cors;
pub mod logging;

pub use auth::request_gate;
pub use cors::build_cors_layer;
pub use logging::request_logging;
