use anyhow::{bail, Context, Result};
use polars::prelude::*;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::config::PipelineConfig;
use crate::io::loaders::DatasetLoader;
use crate::preprocessing::validator::{InputValidator, ValidationResult};
use crate::transformations::{
    count_missing_coordinates, fill_missing_coordinates, left_join_on_bucket, mean_by_bucket,
    remove_missing_coordinates, with_bucket_column,
};

/// Row counts collected while enriching
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EnrichmentStats {
    pub restaurants: usize,
    pub filled_coordinates: usize,
    pub weather_rows: usize,
    pub weather_buckets: usize,
    pub matched: usize,
    pub unmatched: usize,
}

/// Result of an enrichment run
pub struct EnrichmentResult {
    pub dataframe: DataFrame,
    pub aggregated_weather: DataFrame,
    pub restaurant_validation: ValidationResult,
    pub weather_validation: ValidationResult,
    pub stats: EnrichmentStats,
}

/// Restaurant/weather enrichment pipeline
pub struct EnrichmentPipeline {
    config: PipelineConfig,
}

impl EnrichmentPipeline {
    /// Create a new pipeline with default configuration
    pub fn new() -> Self {
        Self {
            config: PipelineConfig::default(),
        }
    }

    /// Create a pipeline with custom configuration
    pub fn with_config(config: PipelineConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Attach average weather to each restaurant.
    ///
    /// # Steps
    /// 1. Validate both inputs (missing columns abort the run)
    /// 2. Fill missing restaurant coordinates with the configured defaults
    /// 3. Bucket restaurants and weather measurements by geohash
    /// 4. Drop weather rows without a bucket and average temperature per bucket
    /// 5. Left join restaurants onto the per-bucket averages
    pub fn run(&self, restaurants: &DataFrame, weather: &DataFrame) -> Result<EnrichmentResult> {
        let columns = &self.config.columns;
        let precision = self.config.geohash.precision;

        // Step 1: Validate
        let restaurant_validation = InputValidator::validate_restaurants(restaurants, columns);
        let weather_validation = InputValidator::validate_weather(weather, columns);
        for warning in restaurant_validation.warnings.iter().chain(&weather_validation.warnings) {
            log::warn!("{}", warning);
        }
        if !restaurant_validation.is_valid {
            bail!("Invalid restaurant data: {}", restaurant_validation.errors.join("; "));
        }
        if !weather_validation.is_valid {
            bail!("Invalid weather data: {}", weather_validation.errors.join("; "));
        }

        // Step 2: Fill missing restaurant coordinates
        let filled_coordinates =
            count_missing_coordinates(restaurants, &columns.latitude, &columns.longitude)?;
        let restaurants = fill_missing_coordinates(
            restaurants,
            &columns.latitude,
            &columns.longitude,
            self.config.defaults.latitude,
            self.config.defaults.longitude,
        )
        .context("Failed to fill missing restaurant coordinates")?;
        log::info!("Filled coordinates for {} restaurants", filled_coordinates);

        // Step 3: Bucket both sides
        let restaurants = with_bucket_column(
            &restaurants,
            &columns.latitude,
            &columns.longitude,
            &columns.bucket,
            precision,
        )
        .context("Failed to bucket restaurants")?;
        let weather = with_bucket_column(
            weather,
            &columns.latitude,
            &columns.longitude,
            &columns.bucket,
            precision,
        )
        .context("Failed to bucket weather measurements")?;

        // Step 4: Average temperature per bucket
        let bucketed_weather = weather.filter(&weather.column(&columns.bucket)?.is_not_null())?;
        let aggregated_weather = mean_by_bucket(
            &bucketed_weather,
            &columns.bucket,
            &columns.temperature,
            &columns.average_temperature,
        )
        .context("Failed to aggregate weather by bucket")?;
        log::info!(
            "Aggregated {} weather rows into {} buckets",
            bucketed_weather.height(),
            aggregated_weather.height()
        );

        // Step 5: Join
        let dataframe = left_join_on_bucket(
            &restaurants,
            &aggregated_weather,
            &columns.bucket,
            self.config.join.duplicates,
        )
        .context("Failed to join restaurants with weather")?;

        let unmatched = dataframe.column(&columns.average_temperature)?.null_count();
        if unmatched > 0 {
            log::warn!("{} restaurants have no weather data in their bucket", unmatched);
        }

        let stats = EnrichmentStats {
            restaurants: restaurants.height(),
            filled_coordinates,
            weather_rows: weather.height(),
            weather_buckets: aggregated_weather.height(),
            matched: dataframe.height() - unmatched,
            unmatched,
        };

        Ok(EnrichmentResult {
            dataframe,
            aggregated_weather,
            restaurant_validation,
            weather_validation,
            stats,
        })
    }

    /// Load both inputs from CSV files and run the pipeline
    pub fn run_files(
        &self,
        restaurants_path: &Path,
        weather_path: &Path,
    ) -> Result<EnrichmentResult> {
        let columns = &self.config.columns;

        let restaurants = DatasetLoader::load_restaurants(restaurants_path, columns)
            .context("Failed to load restaurants")?;
        let weather =
            DatasetLoader::load_weather(weather_path, columns).context("Failed to load weather")?;

        self.run(&restaurants.dataframe, &weather.dataframe)
    }
}

impl Default for EnrichmentPipeline {
    fn default() -> Self {
        Self::new()
    }
}

/// Drop restaurants whose coordinates are missing instead of filling them
pub fn drop_unlocated(df: &DataFrame, config: &PipelineConfig) -> Result<DataFrame> {
    remove_missing_coordinates(df, &config.columns.latitude, &config.columns.longitude)
        .context("Failed to drop rows with missing coordinates")
}

/// Convenience function to enrich with default configuration
pub fn enrich(restaurants: &DataFrame, weather: &DataFrame) -> Result<EnrichmentResult> {
    EnrichmentPipeline::new().run(restaurants, weather)
}
