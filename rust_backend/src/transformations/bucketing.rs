use polars::prelude::*;

use crate::geohash::bucket_id;

/// Add a geohash bucket column computed row by row from two coordinate columns.
///
/// Coordinate columns are read as `Float64`. Rows with a missing coordinate,
/// or coordinates the encoder rejects, get a null bucket. An existing column
/// named `bucket_col` is replaced.
pub fn with_bucket_column(
    df: &DataFrame,
    lat_col: &str,
    lng_col: &str,
    bucket_col: &str,
    precision: usize,
) -> PolarsResult<DataFrame> {
    let lat = df.column(lat_col)?.cast(&DataType::Float64)?;
    let lng = df.column(lng_col)?.cast(&DataType::Float64)?;

    let buckets: StringChunked = lat
        .f64()?
        .into_iter()
        .zip(lng.f64()?.into_iter())
        .map(|(lat, lng)| bucket_id(lat, lng, precision))
        .collect();

    let mut out = df.clone();
    out.with_column(buckets.with_name(bucket_col.into()).into_series())?;
    Ok(out)
}
