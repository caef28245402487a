//! Application layer services implementing business logic.
//!
//! Services consume repository traits and provide a clean API for HTTP
//! handlers and the command-line tool.
//!
//! # Available Services
//!
//! - [`services::exposure_service::ExposureService`] - Postcode exposure checks

pub mod services;
