//! Geohash encoding for coarse spatial bucketing.
//!
//! A geohash interleaves longitude and latitude bits from recursive
//! range subdivision and writes them in a base-32 alphabet. Points that
//! share a prefix lie in the same cell, so a truncated hash works as a
//! grouping key for nearby locations.
//!
//! # Example
//!
//! ```
//! use geo_weather::geohash::{bucket_id, decode_bbox};
//!
//! let bucket = bucket_id(Some(48.8566), Some(2.3522), 4).unwrap();
//! assert_eq!(bucket, "u09t");
//! assert!(decode_bbox(&bucket).unwrap().contains(48.8566, 2.3522));
//! ```

pub mod encoder;

pub use encoder::{
    bucket_id, decode_bbox, encode, geohash_4, BoundingBox, GeohashError, BASE32,
    BUCKET_PRECISION, MAX_PRECISION,
};
