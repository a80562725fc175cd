//! Row-level records for the restaurant/weather enrichment.
//!
//! The pipeline itself works on Polars DataFrames; these structs are the
//! typed view of a single row, used to build inputs and read results.

use polars::prelude::*;
use serde::{Deserialize, Serialize};

use crate::config::ColumnNames;

/// A latitude/longitude pair where either side may be missing.
///
/// # Examples
///
/// ```
/// use geo_weather::core::domain::CoordinateRecord;
///
/// let record = CoordinateRecord::new(Some(37.7749), None);
/// assert!(!record.is_complete());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct CoordinateRecord {
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

impl CoordinateRecord {
    pub fn new(latitude: Option<f64>, longitude: Option<f64>) -> Self {
        Self { latitude, longitude }
    }

    /// Both coordinates are present.
    pub fn is_complete(&self) -> bool {
        self.latitude.is_some() && self.longitude.is_some()
    }
}

/// A raw restaurant row before bucketing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Restaurant {
    pub name: String,
    pub coordinates: CoordinateRecord,
}

/// A raw weather measurement at a point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherMeasurement {
    pub coordinates: CoordinateRecord,
    pub temperature_c: f64,
}

/// Average temperature observed in one bucket.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherObservation {
    pub bucket_id: String,
    pub average_temperature: f64,
}

/// A restaurant already assigned to a bucket.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RestaurantRecord {
    pub name: String,
    pub bucket_id: String,
}

/// A restaurant with the weather of its bucket, if any was observed.
///
/// The name stays `None` when the input row had no name; such rows are kept.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JoinedRecord {
    pub name: Option<String>,
    pub average_temperature: Option<f64>,
}

/// Build a `lat`/`lng` style DataFrame from coordinate records
pub fn coordinates_to_dataframe(
    records: &[CoordinateRecord],
    columns: &ColumnNames,
) -> PolarsResult<DataFrame> {
    let lat: Vec<Option<f64>> = records.iter().map(|r| r.latitude).collect();
    let lng: Vec<Option<f64>> = records.iter().map(|r| r.longitude).collect();

    DataFrame::new(vec![
        Series::new(columns.latitude.as_str().into(), lat).into(),
        Series::new(columns.longitude.as_str().into(), lng).into(),
    ])
}

/// Build the raw restaurant DataFrame (`name`, `lat`, `lng`)
pub fn restaurants_to_dataframe(
    restaurants: &[Restaurant],
    columns: &ColumnNames,
) -> PolarsResult<DataFrame> {
    let names: Vec<&str> = restaurants.iter().map(|r| r.name.as_str()).collect();
    let lat: Vec<Option<f64>> = restaurants.iter().map(|r| r.coordinates.latitude).collect();
    let lng: Vec<Option<f64>> = restaurants.iter().map(|r| r.coordinates.longitude).collect();

    DataFrame::new(vec![
        Series::new(columns.name.as_str().into(), names).into(),
        Series::new(columns.latitude.as_str().into(), lat).into(),
        Series::new(columns.longitude.as_str().into(), lng).into(),
    ])
}

/// Build the raw weather DataFrame (`lat`, `lng`, `avg_tmpr_c`)
pub fn weather_to_dataframe(
    measurements: &[WeatherMeasurement],
    columns: &ColumnNames,
) -> PolarsResult<DataFrame> {
    let lat: Vec<Option<f64>> = measurements.iter().map(|m| m.coordinates.latitude).collect();
    let lng: Vec<Option<f64>> = measurements.iter().map(|m| m.coordinates.longitude).collect();
    let temps: Vec<f64> = measurements.iter().map(|m| m.temperature_c).collect();

    DataFrame::new(vec![
        Series::new(columns.latitude.as_str().into(), lat).into(),
        Series::new(columns.longitude.as_str().into(), lng).into(),
        Series::new(columns.temperature.as_str().into(), temps).into(),
    ])
}

/// Build an already-bucketed restaurant DataFrame (`name`, `geohash`)
pub fn restaurant_records_to_dataframe(
    records: &[RestaurantRecord],
    columns: &ColumnNames,
) -> PolarsResult<DataFrame> {
    let names: Vec<&str> = records.iter().map(|r| r.name.as_str()).collect();
    let buckets: Vec<&str> = records.iter().map(|r| r.bucket_id.as_str()).collect();

    DataFrame::new(vec![
        Series::new(columns.name.as_str().into(), names).into(),
        Series::new(columns.bucket.as_str().into(), buckets).into(),
    ])
}

/// Build an aggregated weather DataFrame (`geohash`, `avg_temp`)
pub fn observations_to_dataframe(
    observations: &[WeatherObservation],
    columns: &ColumnNames,
) -> PolarsResult<DataFrame> {
    let buckets: Vec<&str> = observations.iter().map(|o| o.bucket_id.as_str()).collect();
    let temps: Vec<f64> = observations.iter().map(|o| o.average_temperature).collect();

    DataFrame::new(vec![
        Series::new(columns.bucket.as_str().into(), buckets).into(),
        Series::new(columns.average_temperature.as_str().into(), temps).into(),
    ])
}

/// Read joined rows back out of an enriched DataFrame
pub fn dataframe_to_joined_records(
    df: &DataFrame,
    columns: &ColumnNames,
) -> PolarsResult<Vec<JoinedRecord>> {
    let names = df.column(&columns.name)?.str()?;
    let temps = df
        .column(&columns.average_temperature)?
        .cast(&DataType::Float64)?;
    let temps = temps.f64()?;

    let records = names
        .into_iter()
        .zip(temps.into_iter())
        .map(|(name, average_temperature)| JoinedRecord {
            name: name.map(str::to_string),
            average_temperature,
        })
        .collect();

    Ok(records)
}

/// Read per-bucket averages back out of an aggregated DataFrame
pub fn dataframe_to_observations(
    df: &DataFrame,
    columns: &ColumnNames,
) -> PolarsResult<Vec<WeatherObservation>> {
    let buckets = df.column(&columns.bucket)?.str()?;
    let temps = df
        .column(&columns.average_temperature)?
        .cast(&DataType::Float64)?;
    let temps = temps.f64()?;

    let observations = buckets
        .into_iter()
        .zip(temps.into_iter())
        .filter_map(|(bucket, temp)| {
            Some(WeatherObservation {
                bucket_id: bucket?.to_string(),
                average_temperature: temp?,
            })
        })
        .collect();

    Ok(observations)
}
