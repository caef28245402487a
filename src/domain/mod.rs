//! Domain layer containing the exposure classification logic.
//!
//! # Architecture
//!
//! - [`entities`] - Site records, postcodes, tier partitioning and severity levels
//! - [`repositories`] - Data access trait definitions
//!
//! # Check Flow
//!
//! 1. Raw input is parsed into an [`entities::Postcode`]; invalid input is dropped
//! 2. An [`repositories::ExposureRepository`] returns the raw site records
//! 3. [`entities::partition`] splits them into tiers and dedupes by title
//! 4. [`entities::SeverityLevel::select`] picks the banner to show
//!
//! The domain layer has no dependencies on infrastructure or presentation layers.

pub mod entities;
pub mod repositories;
