//! Exposure site record as published by the dataset.

/// A single exposure site advice record.
///
/// Values are taken verbatim from the upstream dataset. `advice_title`
/// carries the tier as a free-text prefix (`"Tier 1 ..."`, `"Tier 2 ..."`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteRecord {
    pub title: String,
    pub street_address: String,
    pub exposure_date: String,
    pub exposure_time: String,
    pub advice_title: String,
}

impl SiteRecord {
    /// Creates a new SiteRecord instance.
    pub fn new(
        title: impl Into<String>,
        street_address: impl Into<String>,
        exposure_date: impl Into<String>,
        exposure_time: impl Into<String>,
        advice_title: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            street_address: street_address.into(),
            exposure_date: exposure_date.into(),
            exposure_time: exposure_time.into(),
            advice_title: advice_title.into(),
        }
    }

    /// Line shown in site lists: `"{title} | {street_address}"`.
    pub fn display_line(&self) -> String {
        format!("{} | {}", self.title, self.street_address)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_line() {
        let record = SiteRecord::new(
            "Woolworths Abbotsford",
            "Victoria Gardens, 620 Victoria Street",
            "2021-08-14",
            "10:00am - 11:00am",
            "Tier 1 - Get tested immediately",
        );

        assert_eq!(
            record.display_line(),
            "Woolworths Abbotsford | Victoria Gardens, 620 Victoria Street"
        );
    }
}
