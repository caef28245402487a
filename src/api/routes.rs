//! API route configuration.

use crate::api::handlers::exposure_handler;
use crate::state::AppState;
use axum::{Router, routing::get};

/// Public API routes.
///
/// # Endpoints
///
/// - `GET /exposures/{postcode}` - Exposure check for a Victorian postcode
pub fn routes() -> Router<AppState> {
    Router::new().route("/exposures/{postcode}", get(exposure_handler))
}
