//! Tempo CLI
//!
//! Looks up a city and prints its current weather and 7-day forecast.

#![allow(clippy::print_stdout, clippy::print_stderr)]

mod render;

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use application::{SearchError, SearchService, SearchState};
use clap::Parser;
use infrastructure::{AppConfig, ForecastAdapter, GeocodingAdapter};
use tracing::{debug, info};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Tempo CLI
#[derive(Debug, Parser)]
#[command(name = "tempo")]
#[command(author, version, about = "Current weather and 7-day forecast for a city", long_about = None)]
struct Cli {
    /// Verbosity level
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Print the result as JSON
    #[arg(long)]
    json: bool,

    /// Emit logs as JSON lines
    #[arg(long)]
    log_json: bool,

    /// Configuration file (defaults to ./tempo.toml when present)
    #[arg(short, long, env = "TEMPO_CONFIG")]
    config: Option<PathBuf>,

    /// City to look up, e.g. `tempo São Paulo`
    city: Vec<String>,
}

impl Cli {
    fn query(&self) -> String {
        self.city.join(" ")
    }
}

/// Map verbosity level to a log filter string
const fn log_filter_from_verbosity(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

fn init_tracing(cli: &Cli) {
    // RUST_LOG wins over -v
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(log_filter_from_verbosity(cli.verbose)));

    let registry = tracing_subscriber::registry().with(filter);
    if cli.log_json {
        registry
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}

fn build_service(config: AppConfig) -> anyhow::Result<SearchService> {
    let location =
        GeocodingAdapter::with_config(config.geocoding).context("Failed to create geocoder")?;
    let forecast =
        ForecastAdapter::with_config(config.forecast).context("Failed to create forecast client")?;
    Ok(SearchService::new(Arc::new(location), Arc::new(forecast)))
}

fn report_error(err: &SearchError, json: bool) -> anyhow::Result<()> {
    if json {
        println!("{}", render::render_error_json(err)?);
    } else {
        eprintln!("❌ {}", err.user_message());
    }
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli);

    let config = match &cli.config {
        Some(path) => AppConfig::load_from(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => AppConfig::load().context("Failed to load config")?,
    };
    debug!(?config, "Configuration loaded");

    let service = build_service(config)?;
    let query = cli.query();
    info!(%query, "Searching");

    let mut state = SearchState::new();
    state.begin();
    state.complete(service.search(&query).await);

    if let Some(err) = &state.error {
        report_error(err, cli.json)?;
        std::process::exit(1);
    }

    if let Some(weather) = &state.display {
        if cli.json {
            println!("{}", render::render_json(weather)?);
        } else {
            println!("{}", render::render_text(weather));
        }
    }

    Ok(())
}
