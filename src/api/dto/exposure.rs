//! DTOs for the exposure check endpoint.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::config::DATASET_PAGE_URL;
use crate::domain::entities::postcode::VIC_POSTCODE_REGEX;
use crate::domain::entities::{ExposureReport, LevelStyle, SiteRecord};

/// Path parameters for `GET /api/exposures/{postcode}`.
#[derive(Debug, Deserialize, Validate)]
pub struct PostcodePath {
    #[validate(regex(
        path = *VIC_POSTCODE_REGEX,
        code = "postcode",
        message = "Postcode must be four digits starting with 3"
    ))]
    pub postcode: String,
}

/// Exposure check result.
#[derive(Debug, Serialize)]
pub struct ExposureResponse {
    pub postcode: String,
    /// One of `high_risk`, `moderate_risk`, `no_risk`.
    pub level: &'static str,
    pub banner: Banner,
    pub summary: String,
    pub tier_one: Vec<SiteItem>,
    pub tier_two: Vec<SiteItem>,
    pub fetched_at: DateTime<Utc>,
    pub source: &'static str,
}

/// Banner presentation for the selected level.
#[derive(Debug, Serialize)]
pub struct Banner {
    pub heading: &'static str,
    pub background_color: &'static str,
    pub text_color: &'static str,
    pub text_shadow_color: &'static str,
}

/// A single exposure site.
#[derive(Debug, Serialize)]
pub struct SiteItem {
    pub title: String,
    pub street_address: String,
    pub exposure_date: String,
    pub exposure_time: String,
    pub advice_title: String,
    /// Pre-formatted `"{title} | {street_address}"`.
    pub line: String,
}

impl From<LevelStyle> for Banner {
    fn from(style: LevelStyle) -> Self {
        Self {
            heading: style.heading,
            background_color: style.background_color,
            text_color: style.text_color,
            text_shadow_color: style.text_shadow_color,
        }
    }
}

impl From<&SiteRecord> for SiteItem {
    fn from(site: &SiteRecord) -> Self {
        Self {
            title: site.title.clone(),
            street_address: site.street_address.clone(),
            exposure_date: site.exposure_date.clone(),
            exposure_time: site.exposure_time.clone(),
            advice_title: site.advice_title.clone(),
            line: site.display_line(),
        }
    }
}

impl From<&ExposureReport> for ExposureResponse {
    fn from(report: &ExposureReport) -> Self {
        Self {
            postcode: report.postcode.to_string(),
            level: report.level.as_str(),
            banner: report.level.style().into(),
            summary: report.summary(),
            tier_one: report.sites.tier_one.iter().map(SiteItem::from).collect(),
            tier_two: report.sites.tier_two.iter().map(SiteItem::from).collect(),
            fetched_at: report.fetched_at,
            source: DATASET_PAGE_URL,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{PartitionedSites, Postcode, SeverityLevel};

    #[test]
    fn test_postcode_path_validation() {
        let valid = PostcodePath {
            postcode: "3068".to_string(),
        };
        assert!(valid.validate().is_ok());

        let invalid = PostcodePath {
            postcode: "2000".to_string(),
        };
        let errors = invalid.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("postcode"));
    }

    #[test]
    fn test_response_from_report() {
        let sites = PartitionedSites {
            tier_one: vec![],
            tier_two: vec![SiteRecord::new(
                "Coles Northcote",
                "Northcote Plaza",
                "2021-08-14",
                "1:00pm",
                "Tier 2 - Get tested urgently",
            )],
        };
        let report = ExposureReport::new(
            Postcode::parse("3070").unwrap(),
            SeverityLevel::ModerateRisk,
            sites,
        );

        let response = ExposureResponse::from(&report);
        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(json["postcode"], "3070");
        assert_eq!(json["level"], "moderate_risk");
        assert_eq!(json["banner"]["heading"], "U R A BIT FXXK");
        assert_eq!(json["banner"]["background_color"], "orange");
        assert_eq!(json["summary"], "Only Tier 2 Sites in postcode 3070");
        assert_eq!(json["tier_one"].as_array().unwrap().len(), 0);
        assert_eq!(
            json["tier_two"][0]["line"],
            "Coles Northcote | Northcote Plaza"
        );
    }
}
