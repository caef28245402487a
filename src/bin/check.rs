//! Command-line exposure check.
//!
//! Queries the dataset for one postcode and prints the severity banner and
//! matching sites to the terminal.
//!
//! # Usage
//!
//! ```bash
//! # Check a postcode
//! cargo run --bin exposure-check -- 3068
//!
//! # Prompt for the postcode
//! cargo run --bin exposure-check
//!
//! # Machine-readable output
//! cargo run --bin exposure-check -- 3068 --json
//! ```
//!
//! # Environment Variables
//!
//! - `DATASET_BASE_URL`, `DATASET_RESOURCE_ID`, `FETCH_TIMEOUT_SECONDS`:
//!   same as the server (see [`exposure_check::config`])
//! - `RUST_LOG`: log filter for stderr diagnostics (default: `warn`)

use exposure_check::api::dto::exposure::ExposureResponse;
use exposure_check::application::services::ExposureService;
use exposure_check::config::{Config, DATASET_PAGE_URL};
use exposure_check::domain::entities::postcode::is_valid;
use exposure_check::domain::entities::{ExposureReport, Postcode};
use exposure_check::infrastructure::datastore::DatastoreExposureRepository;

use anyhow::{Context, Result};
use clap::Parser;
use colored::*;
use dialoguer::Input;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

/// Check a Victorian postcode for COVID-19 exposure sites.
#[derive(Parser)]
#[command(name = "exposure-check")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Victorian postcode, e.g. 3068 (prompted for if omitted)
    postcode: Option<String>,

    /// Print the JSON report instead of the banner
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();

    let config = Config::from_env()?;
    config.validate()?;

    let input = match cli.postcode {
        Some(p) => p,
        None => prompt_postcode()?,
    };

    let postcode = Postcode::parse(&input)?;

    let repository = DatastoreExposureRepository::new(
        &config.dataset_base_url,
        config.dataset_resource_id.clone(),
        config.fetch_timeout(),
    )
    .context("Failed to build dataset client")?;
    let service = ExposureService::new(Arc::new(repository));

    let report = service
        .check(&postcode)
        .await
        .with_context(|| format!("Failed to check postcode {postcode}"))?;

    if cli.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&ExposureResponse::from(&report))?
        );
    } else {
        print_report(&report);
    }

    Ok(())
}

/// Asks for a postcode until a valid one is entered.
fn prompt_postcode() -> Result<String> {
    let input: String = Input::new()
        .with_prompt("Enter your Victorian postcode")
        .validate_with(|s: &String| -> Result<(), &'static str> {
            if is_valid(s) {
                Ok(())
            } else {
                Err("Postcode must be four digits starting with 3")
            }
        })
        .interact_text()?;

    Ok(input)
}

fn print_report(report: &ExposureReport) {
    let style = report.level.style();

    println!();
    println!(
        "{}",
        format!("  {}  ", style.heading)
            .as_str()
            .color(terminal_color(style.text_color))
            .on_color(terminal_color(style.background_color))
            .bold()
    );
    println!("{}", report.summary().as_str().bold());

    for section in report.sections() {
        println!();
        println!("{}", section.label.underline());
        for site in section.sites {
            println!("  {}", site.display_line());
        }
    }

    println!();
    println!("{} {}", "Data from".dimmed(), DATASET_PAGE_URL.dimmed());
}

/// Maps banner CSS color names onto terminal colors.
fn terminal_color(css: &str) -> Color {
    match css {
        "red" => Color::Red,
        "orange" => Color::TrueColor {
            r: 255,
            g: 165,
            b: 0,
        },
        "green" => Color::Green,
        "black" => Color::Black,
        "grey" => Color::BrightBlack,
        "lightgrey" => Color::TrueColor {
            r: 211,
            g: 211,
            b: 211,
        },
        _ => Color::White,
    }
}
