//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server starts.
//!
//! ## Optional Variables
//!
//! - `LISTEN` - Bind address (default: `0.0.0.0:3000`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//! - `DATASET_BASE_URL` - CKAN `datastore_search` endpoint
//!   (default: Victorian Government open data portal)
//! - `DATASET_RESOURCE_ID` - Exposure site resource id
//! - `FETCH_TIMEOUT_SECONDS` - Upstream request timeout (default: 15, range: 1-120)
//! - `BEHIND_PROXY` - Read client IP from forwarding headers for rate limiting

use anyhow::Result;
use std::env;
use std::time::Duration;

pub const DEFAULT_DATASET_BASE_URL: &str =
    "https://discover.data.vic.gov.au/api/3/action/datastore_search";

pub const DEFAULT_DATASET_RESOURCE_ID: &str = "afb52611-6061-4a2b-9110-74c920bede77";

/// Public page for the dataset, linked from rendered results.
pub const DATASET_PAGE_URL: &str = "https://discover.data.vic.gov.au/dataset/all-victorian-sars-cov-2-covid-19-current-exposure-sites/resource/afb52611-6061-4a2b-9110-74c920bede77";

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: String,
    pub log_level: String,
    pub log_format: String,
    pub dataset_base_url: String,
    pub dataset_resource_id: String,
    /// Upper bound on a single upstream request, in seconds.
    pub fetch_timeout_seconds: u64,
    /// When true, rate limiting reads client IP from X-Forwarded-For / X-Real-IP headers.
    /// Enable only when the service is behind a trusted reverse proxy.
    pub behind_proxy: bool,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// Every variable has a default, so this only fails on values that
    /// cannot be parsed.
    pub fn from_env() -> Result<Self> {
        let listen_addr = env::var("LISTEN").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        let dataset_base_url =
            env::var("DATASET_BASE_URL").unwrap_or_else(|_| DEFAULT_DATASET_BASE_URL.to_string());
        let dataset_resource_id = env::var("DATASET_RESOURCE_ID")
            .unwrap_or_else(|_| DEFAULT_DATASET_RESOURCE_ID.to_string());

        let fetch_timeout_seconds = match env::var("FETCH_TIMEOUT_SECONDS") {
            Ok(v) => v
                .parse()
                .map_err(|_| anyhow::anyhow!("FETCH_TIMEOUT_SECONDS must be a number, got '{v}'"))?,
            Err(_) => 15,
        };

        let behind_proxy = env::var("BEHIND_PROXY")
            .map(|v| v.eq_ignore_ascii_case("true") || v == "1")
            .unwrap_or(false);

        Ok(Self {
            listen_addr,
            log_level,
            log_format,
            dataset_base_url,
            dataset_resource_id,
            fetch_timeout_seconds,
            behind_proxy,
        })
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `log_format` is not `text` or `json`
    /// - `listen_addr` is invalid
    /// - `dataset_base_url` is not an http(s) URL
    /// - `dataset_resource_id` is empty
    /// - `fetch_timeout_seconds` is outside 1-120
    pub fn validate(&self) -> Result<()> {
        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if !self.listen_addr.contains(':') {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        match url::Url::parse(&self.dataset_base_url) {
            Ok(u) if u.scheme() == "http" || u.scheme() == "https" => {}
            _ => anyhow::bail!(
                "DATASET_BASE_URL must be an http(s) URL, got '{}'",
                self.dataset_base_url
            ),
        }

        if self.dataset_resource_id.trim().is_empty() {
            anyhow::bail!("DATASET_RESOURCE_ID must not be empty");
        }

        if !(1..=120).contains(&self.fetch_timeout_seconds) {
            anyhow::bail!(
                "FETCH_TIMEOUT_SECONDS must be between 1 and 120, got {}",
                self.fetch_timeout_seconds
            );
        }

        Ok(())
    }

    pub fn fetch_timeout(&self) -> Duration {
        Duration::from_secs(self.fetch_timeout_seconds)
    }

    /// Prints configuration summary.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Dataset: {}", self.dataset_base_url);
        tracing::info!("  Resource: {}", self.dataset_resource_id);
        tracing::info!("  Fetch timeout: {}s", self.fetch_timeout_seconds);
        tracing::info!("  Behind proxy: {}", self.behind_proxy);
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
    }
}

/// Loads and validates configuration from environment variables.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}
