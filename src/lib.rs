//! # Exposure Check
//!
//! Checks a Victorian postcode against the Victorian Government COVID-19
//! exposure site dataset and reports a color-coded severity level with the
//! matching sites.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Postcode validation, tier partitioning and
//!   severity level selection (pure, synchronous)
//! - **Application Layer** ([`application`]) - The exposure check service
//! - **Infrastructure Layer** ([`infrastructure`]) - Dataset HTTP client
//! - **API Layer** ([`api`]) - JSON endpoint, DTOs and middleware
//! - **Web Layer** ([`web`]) - Server-rendered postcode page
//!
//! ## Severity Levels
//!
//! | Condition | Level |
//! |---|---|
//! | postcode entered, no data yet | Loading |
//! | any Tier 1 site | High risk |
//! | only Tier 2 sites | Moderate risk |
//! | no Tier 1/2 sites | No risk |
//!
//! ## Quick Start
//!
//! ```bash
//! cargo run
//! # open http://localhost:3000/?postcode=3068
//!
//! cargo run --bin exposure-check -- 3068
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;

pub mod config;
pub mod server;

pub mod routes;
pub mod web;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::ExposureService;
    pub use crate::domain::entities::{
        ExposureReport, PartitionedSites, Postcode, SeverityLevel, SiteRecord, partition,
    };
    pub use crate::domain::repositories::ExposureRepository;
    pub use crate::error::AppError;
    pub use crate::state::AppState;
}
