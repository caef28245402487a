//! HTTP request handlers for API endpoints.

pub mod exposure;
pub mod health;

pub use exposure::exposure_handler;
pub use health::health_handler;
