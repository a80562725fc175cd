//! DataFrame transformations for the enrichment pipeline.
//!
//! Each operation takes a borrowed Polars `DataFrame` and returns a new one,
//! leaving its input untouched.
//!
//! # Modules
//!
//! - [`cleaning`]: Fill or drop missing coordinates, validate schemas
//! - [`bucketing`]: Per-row geohash bucket column
//! - [`aggregation`]: Mean of a numeric column per bucket
//! - [`joining`]: Left-outer join on the bucket key
//!
//! # Example
//!
//! ```no_run
//! use geo_weather::transformations::{fill_missing_coordinates, with_bucket_column};
//! use polars::prelude::*;
//!
//! # fn example(df: DataFrame) -> Result<(), PolarsError> {
//! let filled = fill_missing_coordinates(&df, "lat", "lng", 0.0, 0.0)?;
//! let bucketed = with_bucket_column(&filled, "lat", "lng", "geohash", 4)?;
//! # Ok(())
//! # }
//! ```

pub mod aggregation;
pub mod bucketing;
pub mod cleaning;
pub mod joining;

pub use aggregation::mean_by_bucket;
pub use bucketing::with_bucket_column;
pub use cleaning::{
    count_missing_coordinates, fill_missing_coordinates, remove_missing_coordinates,
    validate_schema,
};
pub use joining::{left_join_on_bucket, DuplicateKeyPolicy};
