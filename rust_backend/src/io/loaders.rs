use anyhow::{Context, Result};
use polars::prelude::*;
use std::fs::File;
use std::path::Path;

use crate::config::ColumnNames;

/// Which input a file holds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatasetKind {
    Restaurants,
    Weather,
}

/// Result of loading an input dataset
#[derive(Debug)]
pub struct DatasetLoadResult {
    pub dataframe: DataFrame,
    pub kind: DatasetKind,
    pub num_rows: usize,
}

impl DatasetLoadResult {
    pub fn new(dataframe: DataFrame, kind: DatasetKind) -> Self {
        let num_rows = dataframe.height();
        Self {
            dataframe,
            kind,
            num_rows,
        }
    }
}

/// Read a CSV file with a header row into a DataFrame
pub fn read_csv(path: &Path) -> Result<DataFrame> {
    CsvReadOptions::default()
        .with_has_header(true)
        .try_into_reader_with_file_path(Some(path.into()))
        .with_context(|| format!("Failed to open CSV file: {}", path.display()))?
        .finish()
        .with_context(|| format!("Failed to parse CSV file: {}", path.display()))
}

/// Cast the given columns to the expected types where they exist.
///
/// CSV inference reads `1` as an integer and an all-empty column as null,
/// so numeric columns are forced to `Float64` and text columns to `String`.
fn cast_columns(
    df: DataFrame,
    float_columns: &[&str],
    string_columns: &[&str],
) -> Result<DataFrame> {
    let mut lazy_df = df.clone().lazy();

    for &name in float_columns {
        if df.column(name).is_ok() {
            lazy_df = lazy_df.with_column(col(name).cast(DataType::Float64));
        }
    }
    for &name in string_columns {
        if df.column(name).is_ok() {
            lazy_df = lazy_df.with_column(col(name).cast(DataType::String));
        }
    }

    lazy_df
        .collect()
        .context("Failed to cast columns to expected types")
}

/// Unified interface for loading the pipeline inputs
pub struct DatasetLoader;

impl DatasetLoader {
    /// Load restaurants (`name`, `lat`, `lng`) from a CSV file
    pub fn load_restaurants(path: &Path, columns: &ColumnNames) -> Result<DatasetLoadResult> {
        let df = read_csv(path)?;
        let df = cast_columns(
            df,
            &[columns.latitude.as_str(), columns.longitude.as_str()],
            &[columns.name.as_str()],
        )?;

        log::info!("Loaded {} restaurants from {}", df.height(), path.display());
        Ok(DatasetLoadResult::new(df, DatasetKind::Restaurants))
    }

    /// Load weather measurements (`lat`, `lng`, `avg_tmpr_c`) from a CSV file
    pub fn load_weather(path: &Path, columns: &ColumnNames) -> Result<DatasetLoadResult> {
        let df = read_csv(path)?;
        let df = cast_columns(
            df,
            &[
                columns.latitude.as_str(),
                columns.longitude.as_str(),
                columns.temperature.as_str(),
            ],
            &[],
        )?;

        log::info!("Loaded {} weather rows from {}", df.height(), path.display());
        Ok(DatasetLoadResult::new(df, DatasetKind::Weather))
    }
}

/// Write a DataFrame to a CSV file with a header row
pub fn write_csv(df: &mut DataFrame, path: &Path) -> Result<()> {
    let mut file = File::create(path)
        .with_context(|| format!("Failed to create output file: {}", path.display()))?;

    CsvWriter::new(&mut file)
        .include_header(true)
        .finish(df)
        .with_context(|| format!("Failed to write CSV file: {}", path.display()))?;

    log::info!("Wrote {} rows to {}", df.height(), path.display());
    Ok(())
}
