//! Exposure check service.

use std::sync::Arc;

use serde_json::json;
use tracing::debug;

use crate::domain::entities::{ExposureReport, Postcode, SeverityLevel, partition};
use crate::domain::repositories::ExposureRepository;
use crate::error::AppError;

/// Service that turns a postcode into an [`ExposureReport`].
///
/// Fetches raw records, partitions them into tiers and selects the
/// severity level. Performs exactly one repository call per check.
pub struct ExposureService {
    repository: Arc<dyn ExposureRepository>,
}

impl ExposureService {
    /// Creates a new exposure service.
    pub fn new(repository: Arc<dyn ExposureRepository>) -> Self {
        Self { repository }
    }

    /// Checks a postcode against the exposure site dataset.
    ///
    /// # Errors
    ///
    /// Propagates [`AppError::Upstream`] from the repository.
    pub async fn check(&self, postcode: &Postcode) -> Result<ExposureReport, AppError> {
        let records = self.repository.find_by_postcode(postcode).await?;
        let sites = partition(&records);

        // Data is present, so one of the data rows always matches.
        let level = SeverityLevel::select(Some(&sites), Some(postcode)).ok_or_else(|| {
            AppError::internal(
                "No severity level matched",
                json!({ "postcode": postcode.as_str() }),
            )
        })?;

        debug!(
            postcode = %postcode,
            raw = records.len(),
            tier_one = sites.tier_one.len(),
            tier_two = sites.tier_two.len(),
            level = level.as_str(),
            "Classified exposure sites"
        );

        Ok(ExposureReport::new(postcode.clone(), level, sites))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::SiteRecord;
    use crate::domain::repositories::MockExposureRepository;

    fn site(title: &str, advice: &str) -> SiteRecord {
        SiteRecord::new(title, "1 Test St", "2021-08-14", "10:00am", advice)
    }

    fn postcode() -> Postcode {
        Postcode::parse("3068").unwrap()
    }

    #[tokio::test]
    async fn test_check_high_risk() {
        let mut mock_repo = MockExposureRepository::new();
        mock_repo
            .expect_find_by_postcode()
            .withf(|p| p.as_str() == "3068")
            .times(1)
            .returning(|_| {
                Ok(vec![
                    site("A", "Tier 1 xyz"),
                    site("A", "Tier 1 abc"),
                    site("B", "Tier 2"),
                ])
            });

        let service = ExposureService::new(Arc::new(mock_repo));
        let report = service.check(&postcode()).await.unwrap();

        assert_eq!(report.level, SeverityLevel::HighRisk);
        assert_eq!(report.sites.tier_one, vec![site("A", "Tier 1 xyz")]);
        assert_eq!(report.sites.tier_two, vec![site("B", "Tier 2")]);
        assert_eq!(report.postcode.as_str(), "3068");
    }

    #[tokio::test]
    async fn test_check_moderate_risk() {
        let mut mock_repo = MockExposureRepository::new();
        mock_repo
            .expect_find_by_postcode()
            .times(1)
            .returning(|_| Ok(vec![site("B", "Tier 2"), site("B", "Tier 2")]));

        let service = ExposureService::new(Arc::new(mock_repo));
        let report = service.check(&postcode()).await.unwrap();

        assert_eq!(report.level, SeverityLevel::ModerateRisk);
        assert_eq!(report.sites.tier_two.len(), 1);
    }

    #[tokio::test]
    async fn test_check_no_risk_on_empty_result() {
        let mut mock_repo = MockExposureRepository::new();
        mock_repo
            .expect_find_by_postcode()
            .times(1)
            .returning(|_| Ok(vec![]));

        let service = ExposureService::new(Arc::new(mock_repo));
        let report = service.check(&postcode()).await.unwrap();

        assert_eq!(report.level, SeverityLevel::NoRisk);
        assert!(report.sites.is_empty());
    }

    #[tokio::test]
    async fn test_check_propagates_upstream_error() {
        let mut mock_repo = MockExposureRepository::new();
        mock_repo
            .expect_find_by_postcode()
            .times(1)
            .returning(|_| Err(AppError::upstream("down", json!({}))));

        let service = ExposureService::new(Arc::new(mock_repo));
        let result = service.check(&postcode()).await;

        assert!(matches!(result, Err(AppError::Upstream { .. })));
    }
}
