use serde::{Deserialize, Serialize};

/// Geohash base-32 alphabet (no `a`, `i`, `l`, `o`).
pub const BASE32: &[u8; 32] = b"0123456789bcdefghjkmnpqrstuvwxyz";

/// Longest geohash the encoder will produce.
pub const MAX_PRECISION: usize = 12;

/// Length of the bucket ids used for spatial grouping.
pub const BUCKET_PRECISION: usize = 4;

/// Errors raised while encoding or decoding a geohash.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GeohashError {
    #[error("Latitude out of range: {0} (expected -90..=90)")]
    InvalidLatitude(f64),

    #[error("Longitude out of range: {0} (expected -180..=180)")]
    InvalidLongitude(f64),

    #[error("Invalid precision: {0} (expected 1..={MAX_PRECISION})")]
    InvalidPrecision(usize),

    #[error("Invalid geohash character: {0:?}")]
    InvalidCharacter(char),
}

/// Rectangular cell covered by a geohash.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub min_lat: f64,
    pub max_lat: f64,
    pub min_lng: f64,
    pub max_lng: f64,
}

impl BoundingBox {
    /// Center point of the cell as `(lat, lng)`.
    pub fn center(&self) -> (f64, f64) {
        (
            (self.min_lat + self.max_lat) / 2.0,
            (self.min_lng + self.max_lng) / 2.0,
        )
    }

    /// Whether the point lies inside the cell (edges included).
    pub fn contains(&self, lat: f64, lng: f64) -> bool {
        (self.min_lat..=self.max_lat).contains(&lat) && (self.min_lng..=self.max_lng).contains(&lng)
    }
}

fn check_precision(precision: usize) -> Result<(), GeohashError> {
    if precision == 0 || precision > MAX_PRECISION {
        return Err(GeohashError::InvalidPrecision(precision));
    }
    Ok(())
}

/// Encode a coordinate pair into a geohash of `precision` characters.
///
/// Bits alternate between longitude and latitude, starting with longitude.
/// A value strictly above the midpoint of the current interval selects the
/// upper half; a value on the midpoint stays in the lower half.
///
/// # Examples
///
/// ```
/// use geo_weather::geohash::encode;
///
/// assert_eq!(encode(57.64911, 10.40744, 11).unwrap(), "u4pruydqqvj");
/// assert!(encode(91.0, 0.0, 4).is_err());
/// ```
pub fn encode(lat: f64, lng: f64, precision: usize) -> Result<String, GeohashError> {
    // NaN fails both range checks
    if !(-90.0..=90.0).contains(&lat) {
        return Err(GeohashError::InvalidLatitude(lat));
    }
    if !(-180.0..=180.0).contains(&lng) {
        return Err(GeohashError::InvalidLongitude(lng));
    }
    check_precision(precision)?;

    let (mut lat_lo, mut lat_hi) = (-90.0_f64, 90.0_f64);
    let (mut lng_lo, mut lng_hi) = (-180.0_f64, 180.0_f64);

    let mut hash = String::with_capacity(precision);
    let mut even = true;
    let mut bits = 0;
    let mut index = 0usize;

    while hash.len() < precision {
        if even {
            let mid = (lng_lo + lng_hi) / 2.0;
            if lng > mid {
                index = (index << 1) | 1;
                lng_lo = mid;
            } else {
                index <<= 1;
                lng_hi = mid;
            }
        } else {
            let mid = (lat_lo + lat_hi) / 2.0;
            if lat > mid {
                index = (index << 1) | 1;
                lat_lo = mid;
            } else {
                index <<= 1;
                lat_hi = mid;
            }
        }
        even = !even;

        bits += 1;
        if bits == 5 {
            hash.push(BASE32[index] as char);
            bits = 0;
            index = 0;
        }
    }

    Ok(hash)
}

/// Decode a geohash into the bounding box of its cell.
pub fn decode_bbox(hash: &str) -> Result<BoundingBox, GeohashError> {
    check_precision(hash.chars().count())?;

    let (mut lat_lo, mut lat_hi) = (-90.0_f64, 90.0_f64);
    let (mut lng_lo, mut lng_hi) = (-180.0_f64, 180.0_f64);
    let mut even = true;

    for c in hash.chars() {
        let value = BASE32
            .iter()
            .position(|&b| b as char == c.to_ascii_lowercase())
            .ok_or(GeohashError::InvalidCharacter(c))?;

        for shift in (0..5).rev() {
            let bit = (value >> shift) & 1;
            if even {
                let mid = (lng_lo + lng_hi) / 2.0;
                if bit == 1 {
                    lng_lo = mid;
                } else {
                    lng_hi = mid;
                }
            } else {
                let mid = (lat_lo + lat_hi) / 2.0;
                if bit == 1 {
                    lat_lo = mid;
                } else {
                    lat_hi = mid;
                }
            }
            even = !even;
        }
    }

    Ok(BoundingBox {
        min_lat: lat_lo,
        max_lat: lat_hi,
        min_lng: lng_lo,
        max_lng: lng_hi,
    })
}

/// Compute the location bucket id for a possibly-missing coordinate pair.
///
/// Returns `None` when either coordinate is missing or the encoder rejects
/// the input. Encoder errors are logged and swallowed, never propagated.
pub fn bucket_id(lat: Option<f64>, lng: Option<f64>, precision: usize) -> Option<String> {
    let (lat, lng) = (lat?, lng?);
    let truncated = check_precision(precision)
        .and_then(|_| encode(lat, lng, MAX_PRECISION))
        .map(|hash| hash[..precision].to_string());
    match truncated {
        Ok(hash) => Some(hash),
        Err(e) => {
            log::debug!("Cannot bucket ({}, {}): {}", lat, lng, e);
            None
        }
    }
}

/// Four-character bucket id, the grouping key used by the enrichment pipeline.
///
/// # Examples
///
/// ```
/// use geo_weather::geohash::geohash_4;
///
/// assert_eq!(geohash_4(Some(37.7749), Some(-122.4194)).as_deref(), Some("9q8y"));
/// assert_eq!(geohash_4(None, None), None);
/// ```
pub fn geohash_4(lat: Option<f64>, lng: Option<f64>) -> Option<String> {
    bucket_id(lat, lng, BUCKET_PRECISION)
}
