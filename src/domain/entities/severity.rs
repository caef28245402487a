//! Severity levels and the ordered table that selects them.

use super::{PartitionedSites, Postcode};

/// Banner presentation attached to a [`SeverityLevel`].
///
/// Plain data for renderers; nothing in the domain layer interprets it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LevelStyle {
    pub heading: &'static str,
    pub background_color: &'static str,
    pub text_color: &'static str,
    pub text_shadow_color: &'static str,
}

/// Display state derived from the postcode and the fetched sites.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SeverityLevel {
    /// A postcode was entered but no data has arrived.
    Loading,
    /// At least one Tier 1 site.
    HighRisk,
    /// Only Tier 2 sites.
    ModerateRisk,
    /// No Tier 1 or Tier 2 sites.
    NoRisk,
}

impl SeverityLevel {
    /// Levels in decision-table order. [`SeverityLevel::select`] returns the
    /// first entry whose condition holds.
    pub const TABLE: [SeverityLevel; 4] = [
        SeverityLevel::Loading,
        SeverityLevel::HighRisk,
        SeverityLevel::ModerateRisk,
        SeverityLevel::NoRisk,
    ];

    /// Picks the active level, or `None` when there is neither a postcode
    /// nor data (only the input control should be shown).
    pub fn select(
        data: Option<&PartitionedSites>,
        postcode: Option<&Postcode>,
    ) -> Option<SeverityLevel> {
        Self::TABLE
            .into_iter()
            .find(|level| level.is_active(data, postcode))
    }

    fn is_active(self, data: Option<&PartitionedSites>, postcode: Option<&Postcode>) -> bool {
        match self {
            SeverityLevel::Loading => postcode.is_some() && data.is_none(),
            SeverityLevel::HighRisk => data.is_some_and(|d| !d.tier_one.is_empty()),
            SeverityLevel::ModerateRisk => {
                data.is_some_and(|d| d.tier_one.is_empty() && !d.tier_two.is_empty())
            }
            SeverityLevel::NoRisk => data.is_some_and(|d| d.is_empty()),
        }
    }

    pub fn style(self) -> LevelStyle {
        match self {
            SeverityLevel::Loading => LevelStyle {
                heading: "Loading...",
                background_color: "lightgrey",
                text_color: "black",
                text_shadow_color: "white",
            },
            SeverityLevel::HighRisk => LevelStyle {
                heading: "U R FXXK",
                background_color: "red",
                text_color: "black",
                text_shadow_color: "grey",
            },
            SeverityLevel::ModerateRisk => LevelStyle {
                heading: "U R A BIT FXXK",
                background_color: "orange",
                text_color: "white",
                text_shadow_color: "black",
            },
            SeverityLevel::NoRisk => LevelStyle {
                heading: "U R NOT FXXK",
                background_color: "green",
                text_color: "white",
                text_shadow_color: "black",
            },
        }
    }

    /// Stable identifier used in JSON output.
    pub fn as_str(self) -> &'static str {
        match self {
            SeverityLevel::Loading => "loading",
            SeverityLevel::HighRisk => "high_risk",
            SeverityLevel::ModerateRisk => "moderate_risk",
            SeverityLevel::NoRisk => "no_risk",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::SiteRecord;

    fn site(title: &str, advice: &str) -> SiteRecord {
        SiteRecord::new(title, "1 Test St", "2021-08-14", "10:00am", advice)
    }

    fn sites(tier_one: usize, tier_two: usize) -> PartitionedSites {
        PartitionedSites {
            tier_one: (0..tier_one)
                .map(|i| site(&format!("One {i}"), "Tier 1"))
                .collect(),
            tier_two: (0..tier_two)
                .map(|i| site(&format!("Two {i}"), "Tier 2"))
                .collect(),
        }
    }

    fn postcode() -> Postcode {
        Postcode::parse("3068").unwrap()
    }

    #[test]
    fn test_select_loading() {
        assert_eq!(
            SeverityLevel::select(None, Some(&postcode())),
            Some(SeverityLevel::Loading)
        );
    }

    #[test]
    fn test_select_high_risk() {
        let data = sites(1, 0);
        assert_eq!(
            SeverityLevel::select(Some(&data), Some(&postcode())),
            Some(SeverityLevel::HighRisk)
        );

        let data = sites(2, 3);
        assert_eq!(
            SeverityLevel::select(Some(&data), Some(&postcode())),
            Some(SeverityLevel::HighRisk)
        );
    }

    #[test]
    fn test_select_moderate_risk() {
        let data = sites(0, 1);
        assert_eq!(
            SeverityLevel::select(Some(&data), Some(&postcode())),
            Some(SeverityLevel::ModerateRisk)
        );
    }

    #[test]
    fn test_select_no_risk() {
        let data = sites(0, 0);
        assert_eq!(
            SeverityLevel::select(Some(&data), Some(&postcode())),
            Some(SeverityLevel::NoRisk)
        );
    }

    #[test]
    fn test_select_nothing_without_postcode_or_data() {
        assert_eq!(SeverityLevel::select(None, None), None);
    }

    #[test]
    fn test_select_data_without_postcode() {
        // Rows 2-4 only look at the data.
        let data = sites(0, 2);
        assert_eq!(
            SeverityLevel::select(Some(&data), None),
            Some(SeverityLevel::ModerateRisk)
        );
    }

    #[test]
    fn test_exactly_one_level_active() {
        let pc = postcode();
        let cases = [
            (None, Some(&pc)),
            (Some(sites(1, 0)), Some(&pc)),
            (Some(sites(1, 1)), Some(&pc)),
            (Some(sites(0, 1)), Some(&pc)),
            (Some(sites(0, 0)), Some(&pc)),
        ];

        for (data, postcode) in cases {
            let active = SeverityLevel::TABLE
                .iter()
                .filter(|l| l.is_active(data.as_ref(), postcode))
                .count();
            assert_eq!(active, 1);
        }
    }

    #[test]
    fn test_styles() {
        assert_eq!(SeverityLevel::HighRisk.style().background_color, "red");
        assert_eq!(SeverityLevel::ModerateRisk.style().background_color, "orange");
        assert_eq!(SeverityLevel::NoRisk.style().background_color, "green");
        assert_eq!(SeverityLevel::NoRisk.style().heading, "U R NOT FXXK");
    }
}
