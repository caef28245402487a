//! Exposure repository backed by the Victorian Government open data portal.

use async_trait::async_trait;
use serde_json::json;
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};
use url::Url;

use super::envelope::{DatastoreEnvelope, DatastoreStatus};
use crate::domain::entities::{Postcode, SiteRecord};
use crate::domain::repositories::ExposureRepository;
use crate::error::AppError;

/// Columns requested from the dataset.
pub const DATASET_FIELDS: &str =
    "Site_title,Site_streetaddress,Exposure_date_dtm,Exposure_time,Advice_title";

/// Advice title filter; the full-text query matches both `Tier 1` and `Tier 2`.
pub const ADVICE_TITLE_FILTER: &str = "Tier ";

/// Errors from talking to the dataset.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("Invalid dataset URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Dataset returned HTTP {0}")]
    Status(u16),

    #[error("Dataset reported an unsuccessful query")]
    Unsuccessful,

    #[error("Malformed dataset response: {0}")]
    Decode(#[from] serde_json::Error),
}

/// CKAN `datastore_search` client for the exposure site resource.
///
/// Issues a single GET per lookup. There is no caching and no retry: a
/// failed request is reported to the caller as-is.
#[derive(Clone)]
pub struct DatastoreExposureRepository {
    client: reqwest::Client,
    base_url: Url,
    resource_id: String,
}

impl DatastoreExposureRepository {
    /// Creates a new repository.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::InvalidUrl`] if `base_url` does not parse and
    /// [`FetchError::Transport`] if the HTTP client cannot be built.
    pub fn new(
        base_url: &str,
        resource_id: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, FetchError> {
        let base_url = Url::parse(base_url)?;
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!(
                env!("CARGO_PKG_NAME"),
                "/",
                env!("CARGO_PKG_VERSION")
            ))
            .build()?;

        Ok(Self {
            client,
            base_url,
            resource_id: resource_id.into(),
        })
    }

    /// Builds the `datastore_search` URL for a postcode.
    pub fn query_url(&self, postcode: &Postcode) -> Url {
        let q = json!({
            "Site_postcode": postcode.as_str(),
            "Advice_title": ADVICE_TITLE_FILTER,
        });

        let mut url = self.base_url.clone();
        url.query_pairs_mut()
            .append_pair("resource_id", &self.resource_id)
            .append_pair("q", &q.to_string())
            .append_pair("fields", DATASET_FIELDS);
        url
    }

    /// Performs the request and decodes the envelope.
    pub async fn fetch(&self, postcode: &Postcode) -> Result<Vec<SiteRecord>, FetchError> {
        let url = self.query_url(postcode);
        debug!("Fetching exposure sites: {}", url);

        let response = self.client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }

        let body = response.text().await?;
        let outcome: DatastoreStatus = serde_json::from_str(&body)?;
        if !outcome.success {
            return Err(FetchError::Unsuccessful);
        }

        let envelope: DatastoreEnvelope = serde_json::from_str(&body)?;
        Ok(envelope
            .result
            .records
            .into_iter()
            .map(SiteRecord::from)
            .collect())
    }
}

#[async_trait]
impl ExposureRepository for DatastoreExposureRepository {
    async fn find_by_postcode(&self, postcode: &Postcode) -> Result<Vec<SiteRecord>, AppError> {
        let start = Instant::now();

        match self.fetch(postcode).await {
            Ok(records) => {
                info!(
                    postcode = %postcode,
                    records = records.len(),
                    elapsed_ms = start.elapsed().as_millis() as u64,
                    "Fetched exposure sites"
                );
                Ok(records)
            }
            Err(e) => {
                warn!(postcode = %postcode, error = %e, "Exposure site fetch failed");
                Err(e.into())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn repository() -> DatastoreExposureRepository {
        DatastoreExposureRepository::new(
            "https://discover.data.vic.gov.au/api/3/action/datastore_search",
            "afb52611-6061-4a2b-9110-74c920bede77",
            Duration::from_secs(5),
        )
        .unwrap()
    }

    #[test]
    fn test_query_url_parameters() {
        let postcode = Postcode::parse("3068").unwrap();
        let url = repository().query_url(&postcode);

        assert_eq!(url.host_str(), Some("discover.data.vic.gov.au"));
        assert_eq!(url.path(), "/api/3/action/datastore_search");

        let pairs: Vec<(String, String)> = url.query_pairs().into_owned().collect();
        assert_eq!(pairs.len(), 3);
        assert_eq!(pairs[0].0, "resource_id");
        assert_eq!(pairs[0].1, "afb52611-6061-4a2b-9110-74c920bede77");
        assert_eq!(pairs[2].0, "fields");
        assert_eq!(pairs[2].1, DATASET_FIELDS);

        assert_eq!(pairs[1].0, "q");
        let q: serde_json::Value = serde_json::from_str(&pairs[1].1).unwrap();
        assert_eq!(q["Site_postcode"], "3068");
        assert_eq!(q["Advice_title"], "Tier ");
    }

    #[test]
    fn test_invalid_base_url() {
        let result =
            DatastoreExposureRepository::new("not a url", "id", Duration::from_secs(5));
        assert!(matches!(result, Err(FetchError::InvalidUrl(_))));
    }
}
