//! Contour generation CLI.
//!
//! Fetches an elevation grid around a center point from Open Topo Data,
//! runs the contouring pipeline, and writes the result as JSON on stdout.
//! Logs go to stderr so the JSON stream stays clean for piping.

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use contour_engine::{ContourConfig, ContourGenerator};
use elevation_client::{ClientConfig, OpenTopoDataClient};

#[derive(Parser, Debug)]
#[command(name = "contour-cli")]
#[command(about = "Generate elevation contour lines around a point")]
struct Args {
    /// Center latitude in decimal degrees
    latitude: f64,

    /// Center longitude in decimal degrees
    longitude: f64,

    /// Elevation interval between contour levels, in meters
    #[arg(short, long, env = "CONTOUR_INTERVAL", default_value = "10")]
    interval: f64,

    /// Sampling footprint side length in kilometers
    #[arg(long, env = "CONTOUR_GRID_SIZE_KM", default_value = "2")]
    size_km: f64,

    /// Sample points per grid side
    #[arg(long, env = "CONTOUR_GRID_POINTS", default_value = "12")]
    grid_points: usize,

    /// Elevation dataset (srtm30m, srtm90m, aster30m)
    #[arg(short, long, env = "CONTOUR_DATASET", default_value = "srtm30m")]
    dataset: String,

    /// Elevation API base URL
    #[arg(long, env = "ELEVATION_API_URL")]
    api_url: Option<String>,

    /// Log level
    #[arg(long, default_value = "info")]
    log_level: String,

    /// Pretty-print the JSON output
    #[arg(long)]
    pretty: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment from .env file if present
    dotenvy::dotenv().ok();

    let args = Args::parse();

    let level = match args.log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(true)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    let config = ContourConfig {
        contour_interval: args.interval,
        grid_size_km: args.size_km,
        grid_points: args.grid_points,
        dataset: args.dataset.clone(),
    };
    config
        .validate()
        .map_err(|e| anyhow::anyhow!("invalid configuration: {e}"))?;

    let mut client_config = ClientConfig::default();
    if let Some(url) = &args.api_url {
        client_config.base_url = url.trim_end_matches('/').to_string();
    }
    let client = OpenTopoDataClient::new(client_config)
        .context("failed to build elevation client")?;

    info!(
        latitude = args.latitude,
        longitude = args.longitude,
        interval = args.interval,
        dataset = %args.dataset,
        "starting contour generation"
    );

    let generator = ContourGenerator::new(client);
    let output = generator
        .generate_contours(args.latitude, args.longitude, &config)
        .await
        .context("contour generation failed")?;

    info!(
        contours = output.contour_lines.len(),
        levels = output.statistics.distinct_levels.len(),
        "contour generation complete"
    );

    let json = if args.pretty {
        serde_json::to_string_pretty(&output)?
    } else {
        serde_json::to_string(&output)?
    };
    println!("{json}");

    Ok(())
}
