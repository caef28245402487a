//! Handler for postcode exposure checks.

use axum::{
    Json,
    extract::{Path, State},
};
use validator::Validate;

use crate::api::dto::exposure::{ExposureResponse, PostcodePath};
use crate::domain::entities::Postcode;
use crate::error::AppError;
use crate::state::AppState;

/// Checks a postcode for Tier 1 and Tier 2 exposure sites.
///
/// # Endpoint
///
/// `GET /api/exposures/{postcode}`
///
/// # Response
///
/// ```json
/// {
///   "postcode": "3068",
///   "level": "high_risk",
///   "banner": {
///     "heading": "U R FXXK",
///     "background_color": "red",
///     "text_color": "black",
///     "text_shadow_color": "grey"
///   },
///   "summary": "There are Tier 1 Sites in postcode 3068",
///   "tier_one": [
///     {
///       "title": "Woolworths Abbotsford",
///       "street_address": "620 Victoria Street",
///       "exposure_date": "2021-08-14",
///       "exposure_time": "10:00am - 11:00am",
///       "advice_title": "Tier 1 - Get tested immediately",
///       "line": "Woolworths Abbotsford | 620 Victoria Street"
///     }
///   ],
///   "tier_two": [],
///   "fetched_at": "2021-08-15T01:02:03Z",
///   "source": "https://discover.data.vic.gov.au/dataset/..."
/// }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request if the postcode is not `3NNN`.
/// Returns 502 Bad Gateway if the dataset cannot be queried.
pub async fn exposure_handler(
    State(state): State<AppState>,
    Path(params): Path<PostcodePath>,
) -> Result<Json<ExposureResponse>, AppError> {
    params.validate()?;
    let postcode = Postcode::parse(&params.postcode)?;

    let report = state.exposure_service.check(&postcode).await?;

    Ok(Json(ExposureResponse::from(&report)))
}
