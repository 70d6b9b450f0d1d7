//! NearStop CLI
//!
//! Command-line interface for lookups and server checks.

#![allow(clippy::print_stdout, clippy::print_stderr)]

use std::sync::Arc;

use application::{ApplicationError, NearestStopService, StopLookup};
use clap::{Parser, Subcommand};
use domain::PlaceQuery;
use infrastructure::{AppConfig, EnvSecretStore, GeocodingAdapter, TransitAdapter};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// NearStop CLI
#[derive(Parser)]
#[command(name = "nearstop-cli")]
#[command(author, version, about = "Find the MBTA stop nearest to a place", long_about = None)]
struct Cli {
    /// Verbosity level
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Configuration file (extension optional)
    #[arg(short, long, default_value = "config", global = true)]
    config: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Find the nearest stop to a place, in-process
    ///
    /// Example: nearstop-cli lookup "Boston Common"
    Lookup {
        /// Place name
        place: String,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Resolve a place to coordinates only
    Geocode {
        /// Place name
        place: String,
    },

    /// Show the readiness report of a running server
    Status {
        /// Server URL
        #[arg(short, long, default_value = "http://localhost:3000")]
        url: String,
    },

    /// Check server health (exit code 0 when ready)
    Health {
        /// Server URL
        #[arg(short, long, default_value = "http://localhost:3000")]
        url: String,
    },
}

/// Determine log filter level from verbosity count
const fn log_filter_from_verbosity(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Format endpoint URL
fn endpoint_url(base_url: &str, path: &str) -> String {
    format!("{}{path}", base_url.trim_end_matches('/'))
}

/// Load configuration and build the lookup pipeline
async fn build_service(config_path: &str) -> anyhow::Result<NearestStopService> {
    let mut config = AppConfig::load_from(config_path)?;
    if let Err(errors) = config.validate() {
        anyhow::bail!("Invalid configuration: {}", errors.join("; "));
    }
    config.resolve_secrets(&EnvSecretStore::new()).await;

    let geocoder = GeocodingAdapter::new(&config.mapbox.to_client_config())?;
    let stop_locator = TransitAdapter::new(&config.mbta.to_client_config())?;

    Ok(NearestStopService::new(
        Arc::new(geocoder),
        Arc::new(stop_locator),
    ))
}

/// One-line summary of a lookup
fn format_lookup(lookup: &StopLookup) -> String {
    format!(
        "{} → {} ({})",
        lookup.place,
        lookup.stop.name,
        lookup.stop.wheelchair_accessible.label()
    )
}

/// Error line for a failed command
fn failure_message(err: &ApplicationError) -> String {
    format!("❌ {err}")
}

/// Report a failure on stderr, keeping stdout clean for `--json` output
fn fail(err: &ApplicationError) -> ! {
    eprintln!("{}", failure_message(err));
    std::process::exit(1);
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Set up logging based on verbosity
    let filter = log_filter_from_verbosity(cli.verbose);

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(filter))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match cli.command {
        Commands::Lookup { place, json } => {
            let service = build_service(&cli.config).await?;

            match service.find_nearest_stop(&place).await {
                Ok(lookup) if json => println!("{}", serde_json::to_string_pretty(&lookup)?),
                Ok(lookup) => {
                    println!("🚏 {}", format_lookup(&lookup));
                    println!("   📍 {}", lookup.location);
                },
                Err(e) => fail(&e),
            }
        },

        Commands::Geocode { place } => {
            let service = build_service(&cli.config).await?;

            let place = match PlaceQuery::parse(&place) {
                Ok(place) => place,
                Err(e) => fail(&ApplicationError::from(e)),
            };

            match service.geocode(&place).await {
                Ok(location) => println!("📍 {place}: {location}"),
                Err(e) => fail(&e),
            }
        },

        Commands::Status { url } => {
            let resp = reqwest::Client::new()
                .get(endpoint_url(&url, "/ready"))
                .send()
                .await?
                .json::<serde_json::Value>()
                .await?;

            println!("📊 Server Status:");
            println!("{}", serde_json::to_string_pretty(&resp)?);
        },

        Commands::Health { url } => {
            match reqwest::Client::new()
                .get(endpoint_url(&url, "/ready"))
                .send()
                .await
            {
                Ok(resp) if resp.status().is_success() => {
                    println!("✅ Healthy");
                },
                Ok(resp) => {
                    eprintln!("❌ Unhealthy: HTTP {}", resp.status());
                    std::process::exit(1);
                },
                Err(e) => {
                    eprintln!("❌ Unhealthy: {e}");
                    std::process::exit(1);
                },
            }
        },
    }

    Ok(())
}
