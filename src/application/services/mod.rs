//! Business logic services for the application layer.

pub mod exposure_service;

pub use exposure_service::ExposureService;
