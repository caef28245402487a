//! Exposure check result for a postcode.

use chrono::{DateTime, Utc};

use super::{PartitionedSites, Postcode, SeverityLevel, SiteRecord};

/// Outcome of checking one postcode against the dataset.
#[derive(Debug, Clone)]
pub struct ExposureReport {
    pub postcode: Postcode,
    pub level: SeverityLevel,
    pub sites: PartitionedSites,
    pub fetched_at: DateTime<Utc>,
}

/// A labelled list of sites shown under the banner.
#[derive(Debug, Clone, Copy)]
pub struct TierSection<'a> {
    pub label: &'static str,
    pub sites: &'a [SiteRecord],
}

impl ExposureReport {
    pub fn new(postcode: Postcode, level: SeverityLevel, sites: PartitionedSites) -> Self {
        Self {
            postcode,
            level,
            sites,
            fetched_at: Utc::now(),
        }
    }

    pub fn summary(&self) -> String {
        summary_line(self.level, &self.postcode, Some(&self.sites))
    }

    pub fn sections(&self) -> Vec<TierSection<'_>> {
        sections(self.level, &self.sites)
    }
}

/// One-line description shown under the banner.
pub fn summary_line(
    level: SeverityLevel,
    postcode: &Postcode,
    sites: Option<&PartitionedSites>,
) -> String {
    match level {
        SeverityLevel::Loading => format!("Checking exposure sites in postcode {postcode}"),
        SeverityLevel::HighRisk => {
            if sites.is_some_and(|s| !s.tier_two.is_empty()) {
                format!("There are Tier 1 (and 2) Sites in postcode {postcode}")
            } else {
                format!("There are Tier 1 Sites in postcode {postcode}")
            }
        }
        SeverityLevel::ModerateRisk => format!("Only Tier 2 Sites in postcode {postcode}"),
        SeverityLevel::NoRisk => format!("No Tier 1/2 Sites in postcode {postcode}"),
    }
}

/// Site lists to render for a level.
///
/// High risk lists tier one, then tier two when it has entries. Moderate
/// risk lists tier two. Other levels list nothing.
pub fn sections(level: SeverityLevel, sites: &PartitionedSites) -> Vec<TierSection<'_>> {
    let tier_one = TierSection {
        label: "Tier One",
        sites: &sites.tier_one,
    };
    let tier_two = TierSection {
        label: "Tier Two",
        sites: &sites.tier_two,
    };

    match level {
        SeverityLevel::HighRisk if sites.tier_two.is_empty() => vec![tier_one],
        SeverityLevel::HighRisk => vec![tier_one, tier_two],
        SeverityLevel::ModerateRisk => vec![tier_two],
        SeverityLevel::Loading | SeverityLevel::NoRisk => Vec::new(),
    }
}
