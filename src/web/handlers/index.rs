//! Postcode check page handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Query, State},
    response::IntoResponse,
};
use serde::Deserialize;
use serde_with::{NoneAsEmptyString, serde_as};
use tracing::warn;

use crate::config::DATASET_PAGE_URL;
use crate::domain::entities::report::{sections, summary_line};
use crate::domain::entities::{
    ExposureReport, LevelStyle, PartitionedSites, Postcode, SeverityLevel,
};
use crate::state::AppState;

const DATASET_UNAVAILABLE: &str =
    "The exposure site dataset could not be reached. Try again shortly.";

/// Query parameters for `GET /`.
#[serde_as]
#[derive(Debug, Default, Deserialize)]
pub struct IndexQuery {
    #[serde_as(as = "NoneAsEmptyString")]
    #[serde(default)]
    pub postcode: Option<String>,
}

/// Template for the postcode check page.
///
/// Renders `templates/index.html`. `result` is `None` until a valid
/// postcode has been submitted, in which case only the input form is shown.
#[derive(Template, WebTemplate)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub input: String,
    pub result: Option<ResultView>,
}

/// Banner, summary and site lists for a checked postcode.
pub struct ResultView {
    pub postcode: String,
    pub banner: LevelStyle,
    pub summary: String,
    pub sections: Vec<SectionView>,
    pub notice: Option<&'static str>,
    pub source_url: &'static str,
}

pub struct SectionView {
    pub label: &'static str,
    pub lines: Vec<String>,
}

impl ResultView {
    fn render(
        level: SeverityLevel,
        postcode: &Postcode,
        sites: Option<&PartitionedSites>,
        notice: Option<&'static str>,
    ) -> Self {
        let section_views: Vec<SectionView> = sites
            .map(|s| {
                sections(level, s)
                    .into_iter()
                    .map(|section| SectionView {
                        label: section.label,
                        lines: section.sites.iter().map(|r| r.display_line()).collect(),
                    })
                    .collect()
            })
            .unwrap_or_default();

        Self {
            postcode: postcode.to_string(),
            banner: level.style(),
            summary: summary_line(level, postcode, sites),
            sections: section_views,
            notice,
            source_url: DATASET_PAGE_URL,
        }
    }

    fn from_report(report: &ExposureReport) -> Self {
        Self::render(report.level, &report.postcode, Some(&report.sites), None)
    }
}

/// Renders the postcode check page.
///
/// # Endpoint
///
/// `GET /?postcode=3068`
///
/// # Behavior
///
/// - Missing, empty or invalid postcode: input form only, no error shown
/// - Valid postcode: one dataset query, then banner and site lists
/// - Dataset unavailable: the loading banner with a notice, since no data
///   has arrived for the postcode
///
/// # Template
///
/// Uses `templates/index.html` for server-side rendering.
pub async fn index_handler(
    State(state): State<AppState>,
    Query(query): Query<IndexQuery>,
) -> impl IntoResponse {
    let input = query.postcode.unwrap_or_default();

    let Ok(postcode) = Postcode::parse(&input) else {
        return IndexTemplate {
            input,
            result: None,
        };
    };

    let result = match state.exposure_service.check(&postcode).await {
        Ok(report) => Some(ResultView::from_report(&report)),
        Err(e) => {
            warn!(postcode = %postcode, error = %e, "Rendering page without exposure data");
            SeverityLevel::select(None, Some(&postcode))
                .map(|level| ResultView::render(level, &postcode, None, Some(DATASET_UNAVAILABLE)))
        }
    };

    IndexTemplate { input, result }
}
