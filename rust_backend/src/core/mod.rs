//! Core domain models for restaurant/weather enrichment.
//!
//! This module defines the typed row records exchanged with the pipeline and
//! the conversions between them and Polars DataFrames.

pub mod domain;
