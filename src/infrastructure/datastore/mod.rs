//! Victorian Government open data integration.
//!
//! - [`DatastoreExposureRepository`] - reqwest client for CKAN `datastore_search`
//! - [`envelope`] - Response wire format

mod datastore_repository;
pub mod envelope;

pub use datastore_repository::{
    ADVICE_TITLE_FILTER, DATASET_FIELDS, DatastoreExposureRepository, FetchError,
};
