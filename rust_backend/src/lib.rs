//! Geohash bucketing and weather enrichment over Polars DataFrames.
//!
//! Restaurants and weather measurements are assigned to coarse geohash
//! buckets; the mean temperature of each bucket is then attached to every
//! restaurant in it with a left-outer join.
//!
//! # Example
//!
//! ```
//! use geo_weather::preprocessing::enrich;
//! use polars::prelude::*;
//!
//! # fn main() -> anyhow::Result<()> {
//! let restaurants = df!(
//!     "name" => ["A", "B"],
//!     "lat" => [Some(48.8566), None],
//!     "lng" => [Some(2.3522), None],
//! )?;
//! let weather = df!(
//!     "lat" => [48.86, 48.85],
//!     "lng" => [2.35, 2.36],
//!     "avg_tmpr_c" => [10.0, 20.0],
//! )?;
//!
//! let result = enrich(&restaurants, &weather)?;
//! assert_eq!(result.stats.matched, 1);
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod core;
pub mod geohash;
pub mod io;
pub mod preprocessing;
pub mod transformations;

#[cfg(feature = "python")]
pub mod python;
