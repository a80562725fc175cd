//! Pipeline configuration file support.
//!
//! This module reads the enrichment pipeline settings from TOML. Every
//! section and key is optional; missing values fall back to the defaults
//! the pipeline has always used (`lat`/`lng` columns, 4-character buckets).

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::geohash::{BUCKET_PRECISION, MAX_PRECISION};
use crate::transformations::DuplicateKeyPolicy;

/// Error type for configuration loading
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error("No geo_weather.toml found in standard locations")]
    NotFound,
}

/// Pipeline configuration from file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PipelineConfig {
    #[serde(default)]
    pub geohash: GeohashSettings,
    #[serde(default)]
    pub defaults: DefaultCoordinates,
    #[serde(default)]
    pub columns: ColumnNames,
    #[serde(default)]
    pub join: JoinSettings,
}

/// Geohash bucketing settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeohashSettings {
    #[serde(default = "default_precision")]
    pub precision: usize,
}

/// Coordinates substituted for missing values.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DefaultCoordinates {
    #[serde(default)]
    pub latitude: f64,
    #[serde(default)]
    pub longitude: f64,
}

/// Column names used by the pipeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnNames {
    #[serde(default = "default_latitude_column")]
    pub latitude: String,
    #[serde(default = "default_longitude_column")]
    pub longitude: String,
    #[serde(default = "default_bucket_column")]
    pub bucket: String,
    #[serde(default = "default_name_column")]
    pub name: String,
    #[serde(default = "default_temperature_column")]
    pub temperature: String,
    #[serde(default = "default_average_temperature_column")]
    pub average_temperature: String,
}

/// Join settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct JoinSettings {
    #[serde(default)]
    pub duplicates: DuplicateKeyPolicy,
}

fn default_precision() -> usize {
    BUCKET_PRECISION
}

fn default_latitude_column() -> String {
    "lat".to_string()
}

fn default_longitude_column() -> String {
    "lng".to_string()
}

fn default_bucket_column() -> String {
    "geohash".to_string()
}

fn default_name_column() -> String {
    "name".to_string()
}

fn default_temperature_column() -> String {
    "avg_tmpr_c".to_string()
}

fn default_average_temperature_column() -> String {
    "avg_temp".to_string()
}

impl Default for GeohashSettings {
    fn default() -> Self {
        Self {
            precision: default_precision(),
        }
    }
}

impl Default for ColumnNames {
    fn default() -> Self {
        Self {
            latitude: default_latitude_column(),
            longitude: default_longitude_column(),
            bucket: default_bucket_column(),
            name: default_name_column(),
            temperature: default_temperature_column(),
            average_temperature: default_average_temperature_column(),
        }
    }
}

impl PipelineConfig {
    /// Load pipeline configuration from a TOML file.
    ///
    /// # Arguments
    /// * `path` - Path to the configuration file
    ///
    /// # Returns
    /// * `Ok(PipelineConfig)` if the file was read, parsed and validated
    /// * `Err(ConfigError)` otherwise
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        Self::from_toml_str(&content)
    }

    /// Parse and validate configuration from a TOML string.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: PipelineConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load pipeline configuration from the default location.
    ///
    /// Searches for `geo_weather.toml` in:
    /// 1. Current directory
    /// 2. `rust_backend/` directory
    /// 3. Parent directory
    pub fn from_default_location() -> Result<Self, ConfigError> {
        let search_paths = [
            PathBuf::from("geo_weather.toml"),
            PathBuf::from("rust_backend/geo_weather.toml"),
            PathBuf::from("../geo_weather.toml"),
        ];

        for path in search_paths {
            if path.exists() {
                log::info!("Loading pipeline configuration from {}", path.display());
                return Self::from_file(&path);
            }
        }

        Err(ConfigError::NotFound)
    }

    /// Check value ranges that serde cannot express.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let precision = self.geohash.precision;
        if precision == 0 || precision > MAX_PRECISION {
            return Err(ConfigError::Invalid(format!(
                "geohash.precision must be between 1 and {}, got {}",
                MAX_PRECISION, precision
            )));
        }

        let DefaultCoordinates { latitude, longitude } = self.defaults;
        if !(-90.0..=90.0).contains(&latitude) {
            return Err(ConfigError::Invalid(format!(
                "defaults.latitude must be within [-90, 90], got {}",
                latitude
            )));
        }
        if !(-180.0..=180.0).contains(&longitude) {
            return Err(ConfigError::Invalid(format!(
                "defaults.longitude must be within [-180, 180], got {}",
                longitude
            )));
        }

        Ok(())
    }
}
