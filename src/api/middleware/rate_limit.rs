//! Per-client rate limiting using the token bucket algorithm.
//!
//! Every checked postcode costs one upstream request, so the limiter keeps a
//! single client from hammering the public dataset through this service.

use axum::Router;
use std::sync::Arc;
use tower_governor::{
    GovernorLayer,
    governor::GovernorConfigBuilder,
    key_extractor::SmartIpKeyExtractor,
};

use crate::state::AppState;

/// Sustained requests per second per client.
pub const PER_SECOND: u64 = 1;

/// Requests a client may burst before being throttled.
pub const BURST_SIZE: u32 = 20;

/// Wraps `router` in a per-IP rate limiter.
///
/// Requests exceeding the limit receive `429 Too Many Requests`.
///
/// # Key Extraction
///
/// - `behind_proxy = false`: socket peer address (requires
///   `into_make_service_with_connect_info`)
/// - `behind_proxy = true`: `X-Forwarded-For` / `X-Real-IP` / `Forwarded`
///   headers, falling back to the peer address
pub fn apply(router: Router<AppState>, behind_proxy: bool) -> Router<AppState> {
    let mut builder = GovernorConfigBuilder::default();
    builder.per_second(PER_SECOND).burst_size(BURST_SIZE);

    if behind_proxy {
        match builder.key_extractor(SmartIpKeyExtractor).finish() {
            Some(conf) => router.layer(GovernorLayer::new(Arc::new(conf))),
            None => disabled(router),
        }
    } else {
        match builder.finish() {
            Some(conf) => router.layer(GovernorLayer::new(Arc::new(conf))),
            None => disabled(router),
        }
    }
}

fn disabled(router: Router<AppState>) -> Router<AppState> {
    tracing::warn!("Invalid rate limit settings, rate limiting disabled");
    router
}
