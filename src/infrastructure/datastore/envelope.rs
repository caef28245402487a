//! Wire format of the CKAN `datastore_search` response.

use serde::Deserialize;
use serde_with::{DefaultOnNull, serde_as};

use crate::domain::entities::SiteRecord;

/// Status flag of any CKAN action response.
///
/// Read before the full envelope: a failed query carries an `error` object
/// and no `result`.
#[derive(Debug, Deserialize)]
pub struct DatastoreStatus {
    pub success: bool,
}

/// Top-level `datastore_search` response of a successful query.
///
/// ```json
/// { "success": true, "result": { "records": [ ... ] } }
/// ```
///
/// `result` and `records` are required. A response without them is
/// malformed, not an empty result.
#[derive(Debug, Deserialize)]
pub struct DatastoreEnvelope {
    pub success: bool,
    pub result: DatastoreResult,
}

#[derive(Debug, Deserialize)]
pub struct DatastoreResult {
    pub records: Vec<RawSiteRecord>,
}

/// One record as published, keyed by the dataset's column names.
///
/// `Site_title` and `Advice_title` are required: partitioning and
/// deduplication depend on them. The descriptive columns are sometimes
/// published as `null` and decode to an empty string.
#[serde_as]
#[derive(Debug, Deserialize)]
pub struct RawSiteRecord {
    #[serde(rename = "Site_title")]
    pub site_title: String,

    #[serde_as(as = "DefaultOnNull")]
    #[serde(rename = "Site_streetaddress", default)]
    pub site_streetaddress: String,

    #[serde_as(as = "DefaultOnNull")]
    #[serde(rename = "Exposure_date_dtm", default)]
    pub exposure_date_dtm: String,

    #[serde_as(as = "DefaultOnNull")]
    #[serde(rename = "Exposure_time", default)]
    pub exposure_time: String,

    #[serde(rename = "Advice_title")]
    pub advice_title: String,
}

impl From<RawSiteRecord> for SiteRecord {
    fn from(raw: RawSiteRecord) -> Self {
        SiteRecord {
            title: raw.site_title,
            street_address: raw.site_streetaddress,
            exposure_date: raw.exposure_date_dtm,
            exposure_time: raw.exposure_time,
            advice_title: raw.advice_title,
        }
    }
}
