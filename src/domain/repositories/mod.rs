//! Repository trait definitions for the domain layer.
//!
//! Traits define the data access contract; implementations live in
//! `crate::infrastructure`. Mock implementations are generated via `mockall`
//! for unit tests.

pub mod exposure_repository;

pub use exposure_repository::ExposureRepository;

#[cfg(test)]
pub use exposure_repository::MockExposureRepository;
