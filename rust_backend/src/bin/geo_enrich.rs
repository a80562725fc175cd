//! Geo-weather enrichment CLI
//!
//! Reads restaurant and weather CSV files, attaches the average temperature
//! of each restaurant's geohash bucket, writes the result as CSV and prints
//! a JSON run report to stdout.
//!
//! # Usage
//!
//! ```bash
//! geo-enrich restaurants.csv weather.csv enriched.csv [geo_weather.toml]
//! ```
//!
//! Without a config argument, `geo_weather.toml` is looked up in the
//! standard locations and the built-in defaults are used if none exists.
//!
//! # Environment Variables
//!
//! - `RUST_LOG`: Log filter directives, e.g. `debug` or `geo_weather=debug` (default: info)

use std::env;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use geo_weather::config::{ConfigError, PipelineConfig};
use geo_weather::io::{file_checksum, write_csv};
use geo_weather::preprocessing::{EnrichmentPipeline, EnrichmentStats, ValidationResult};

#[derive(Debug, Serialize)]
struct InputReport {
    path: PathBuf,
    sha256: String,
}

#[derive(Debug, Serialize)]
struct RunReport {
    generated_at: DateTime<Utc>,
    restaurants: InputReport,
    weather: InputReport,
    output: PathBuf,
    config: PipelineConfig,
    stats: EnrichmentStats,
    restaurant_validation: ValidationResult,
    weather_validation: ValidationResult,
}

fn load_config(path: Option<&String>) -> Result<PipelineConfig> {
    match path {
        Some(path) => PipelineConfig::from_file(path).context("Failed to load configuration"),
        None => match PipelineConfig::from_default_location() {
            Ok(config) => Ok(config),
            Err(ConfigError::NotFound) => {
                info!("No configuration file found, using defaults");
                Ok(PipelineConfig::default())
            }
            Err(e) => Err(e).context("Failed to load configuration"),
        },
    }
}

fn input_report(path: &Path) -> Result<InputReport> {
    Ok(InputReport {
        path: path.to_path_buf(),
        sha256: file_checksum(path)?,
    })
}

fn main() -> Result<()> {
    FmtSubscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = env::args().collect();
    if args.len() < 4 || args.len() > 5 {
        eprintln!(
            "Usage: {} <restaurants.csv> <weather.csv> <output.csv> [config.toml]",
            args.first().map(String::as_str).unwrap_or("geo-enrich")
        );
        std::process::exit(2);
    }

    let restaurants_path = Path::new(&args[1]);
    let weather_path = Path::new(&args[2]);
    let output_path = Path::new(&args[3]);
    let config = load_config(args.get(4))?;

    info!(
        "Enriching {} with {} (bucket precision {})",
        restaurants_path.display(),
        weather_path.display(),
        config.geohash.precision
    );

    let pipeline = EnrichmentPipeline::with_config(config.clone());
    let mut result = pipeline.run_files(restaurants_path, weather_path)?;

    write_csv(&mut result.dataframe, output_path)?;

    let report = RunReport {
        generated_at: Utc::now(),
        restaurants: input_report(restaurants_path)?,
        weather: input_report(weather_path)?,
        output: output_path.to_path_buf(),
        config,
        stats: result.stats,
        restaurant_validation: result.restaurant_validation,
        weather_validation: result.weather_validation,
    };
    println!("{}", serde_json::to_string_pretty(&report)?);

    info!(
        "Done: {} matched, {} without weather",
        report.stats.matched, report.stats.unmatched
    );
    Ok(())
}
