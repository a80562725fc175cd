#![allow(dead_code)]

use std::collections::HashMap;
use std::io::Write;

use polars::prelude::*;
use tempfile::NamedTempFile;

/// Collect `key -> value` pairs from two columns, like a dict comprehension
/// over the collected rows. Values are read as `Float64`.
pub fn float_by_key(df: &DataFrame, key: &str, value: &str) -> HashMap<String, Option<f64>> {
    let keys = df.column(key).expect("key column").str().expect("string keys").clone();
    let values = df
        .column(value)
        .expect("value column")
        .cast(&DataType::Float64)
        .expect("numeric values");
    let values = values.f64().expect("f64 values");

    keys.into_iter()
        .zip(values.into_iter())
        .map(|(k, v)| (k.expect("non-null key").to_string(), v))
        .collect()
}

/// Read a `Float64` column into a vector
pub fn floats(df: &DataFrame, name: &str) -> Vec<Option<f64>> {
    df.column(name)
        .expect("column")
        .cast(&DataType::Float64)
        .expect("numeric column")
        .f64()
        .expect("f64 column")
        .into_iter()
        .collect()
}

/// Write CSV content to a temp file that lives as long as the handle
pub fn temp_csv(content: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(".csv")
        .tempfile()
        .expect("temp file");
    file.write_all(content.as_bytes()).expect("write temp csv");
    file.flush().expect("flush temp csv");
    file
}

pub const RESTAURANTS_CSV: &str = "\
name,lat,lng
Le Marais,48.8566,2.3522
Mission,37.7749,-122.4194
Unknown,,
Atlantis,95.0,0.0
";

pub const WEATHER_CSV: &str = "\
lat,lng,avg_tmpr_c
48.86,2.35,10
48.85,2.36,20
37.77,-122.42,16
,,40
";
