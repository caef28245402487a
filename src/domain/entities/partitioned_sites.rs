//! Tier partitioning of exposure site records.

use std::collections::HashSet;

use super::SiteRecord;

pub const TIER_ONE_PREFIX: &str = "Tier 1";
pub const TIER_TWO_PREFIX: &str = "Tier 2";

/// Exposure sites split into the two advice tiers.
///
/// Within each tier no two records share a `title`; records keep the order
/// in which they first appeared in the source list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PartitionedSites {
    pub tier_one: Vec<SiteRecord>,
    pub tier_two: Vec<SiteRecord>,
}

impl PartitionedSites {
    /// Returns true if neither tier has any sites.
    pub fn is_empty(&self) -> bool {
        self.tier_one.is_empty() && self.tier_two.is_empty()
    }

    /// Total number of sites across both tiers.
    pub fn len(&self) -> usize {
        self.tier_one.len() + self.tier_two.len()
    }
}

/// Splits records into tier one and tier two, deduplicated by title.
///
/// The two prefix filters are applied independently; a record whose advice
/// title matched both prefixes would land in both tiers. Records matching
/// neither are dropped. Empty input yields two empty tiers.
pub fn partition(records: &[SiteRecord]) -> PartitionedSites {
    let tier_one = dedupe_by_title(
        records
            .iter()
            .filter(|r| r.advice_title.starts_with(TIER_ONE_PREFIX)),
    );
    let tier_two = dedupe_by_title(
        records
            .iter()
            .filter(|r| r.advice_title.starts_with(TIER_TWO_PREFIX)),
    );

    PartitionedSites { tier_one, tier_two }
}

/// Keeps the first record for each distinct title, preserving order.
fn dedupe_by_title<'a>(records: impl Iterator<Item = &'a SiteRecord>) -> Vec<SiteRecord> {
    let mut seen = HashSet::new();
    records
        .filter(|r| seen.insert(r.title.as_str()))
        .cloned()
        .collect()
}
