//! Input and output for the enrichment pipeline.
//!
//! This module loads restaurant and weather CSV files into DataFrames with
//! the column types the transformations expect, writes results back out,
//! and fingerprints input files.
//!
//! # Example
//!
//! ```no_run
//! use geo_weather::config::ColumnNames;
//! use geo_weather::io::DatasetLoader;
//! use std::path::Path;
//!
//! let path = Path::new("restaurants.csv");
//! let result = DatasetLoader::load_restaurants(path, &ColumnNames::default())
//!     .expect("Failed to load");
//! println!("Loaded {} restaurants", result.num_rows);
//! ```

pub mod checksum;
pub mod loaders;


pub use checksum::{calculate_checksum, file_checksum};
pub use loaders::{read_csv, write_csv, DatasetKind, DatasetLoadResult, DatasetLoader};
