//! Repository trait for exposure site lookups.

use crate::domain::entities::{Postcode, SiteRecord};
use crate::error::AppError;
use async_trait::async_trait;

/// Read-only source of exposure site records.
///
/// # Implementations
///
/// - [`crate::infrastructure::datastore::DatastoreExposureRepository`] - Victorian
///   Government open data (CKAN `datastore_search`)
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ExposureRepository: Send + Sync {
    /// Fetches Tier 1 and Tier 2 advice records for a postcode.
    ///
    /// Records are returned in dataset order and may contain duplicates.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Upstream`] when the dataset cannot be reached or
    /// its response cannot be decoded.
    async fn find_by_postcode(&self, postcode: &Postcode) -> Result<Vec<SiteRecord>, AppError>;
}
