//! Python bindings for the geohash bucketing UDF.
//!
//! Built only with the `python` feature. The functions mirror
//! [`crate::geohash::bucket_id`]: missing or invalid coordinates give `None`
//! instead of raising.
//!
//! # Python API
//!
//! ```text
//! >>> import geo_weather
//! >>> geo_weather.geohash_4(37.7749, -122.4194)
//! '9q8y'
//! >>> geo_weather.geohash_bucket(37.7749, -122.4194, precision=6)
//! '9q8yyk'
//! >>> geo_weather.geohash_4(None, None) is None
//! True
//! ```

use pyo3::prelude::*;

use crate::geohash::{self, BUCKET_PRECISION};

/// Four-character geohash bucket, or None for missing/invalid coordinates
#[pyfunction]
#[pyo3(signature = (lat, lng))]
pub fn geohash_4(lat: Option<f64>, lng: Option<f64>) -> Option<String> {
    geohash::geohash_4(lat, lng)
}

/// Geohash bucket of the given precision, or None for missing/invalid coordinates
#[pyfunction]
#[pyo3(signature = (lat, lng, precision=BUCKET_PRECISION))]
pub fn geohash_bucket(lat: Option<f64>, lng: Option<f64>, precision: usize) -> Option<String> {
    geohash::bucket_id(lat, lng, precision)
}

/// Full geohash encoding; raises ValueError on invalid input
#[pyfunction]
#[pyo3(signature = (lat, lng, precision=geohash::MAX_PRECISION))]
pub fn geohash_encode(lat: f64, lng: f64, precision: usize) -> PyResult<String> {
    geohash::encode(lat, lng, precision)
        .map_err(|e| pyo3::exceptions::PyValueError::new_err(e.to_string()))
}

/// Geo-weather Python module
#[pymodule]
fn geo_weather(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(geohash_4, m)?)?;
    m.add_function(wrap_pyfunction!(geohash_bucket, m)?)?;
    m.add_function(wrap_pyfunction!(geohash_encode, m)?)?;
    Ok(())
}
