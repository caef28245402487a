//! Core domain entities for the exposure check.
//!
//! # Entity Types
//!
//! - [`SiteRecord`] - One exposure site advice record from the dataset
//! - [`PartitionedSites`] - Records split into Tier 1 and Tier 2, deduplicated by title
//! - [`Postcode`] - A validated Victorian postcode
//! - [`SeverityLevel`] - Display state picked from an ordered decision table
//! - [`ExposureReport`] - Result of checking a postcode
//!
//! Everything here is pure and synchronous; fetching and rendering live in
//! the infrastructure and presentation layers.

pub mod partitioned_sites;
pub mod postcode;
pub mod report;
pub mod severity;
pub mod site_record;

pub use partitioned_sites::{PartitionedSites, partition};
pub use postcode::{Postcode, PostcodeError};
pub use report::{ExposureReport, TierSection};
pub use severity::{LevelStyle, SeverityLevel};
pub use site_record::SiteRecord;
