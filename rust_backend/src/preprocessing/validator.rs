//! Input validation with error and warning reporting.
//!
//! This module checks restaurant and weather DataFrames before enrichment:
//! required columns, missing coordinates, coordinates outside the valid
//! latitude/longitude ranges, and missing temperature readings.

use polars::prelude::*;
use serde::{Deserialize, Serialize};

use crate::config::ColumnNames;
use crate::transformations::validate_schema;

/// How many offending values are listed individually before summarizing.
const MAX_LISTED: usize = 5;

/// Validation result with categorized issues and statistics.
///
/// Errors make `is_valid` false, while warnings are informational and
/// don't fail validation.
///
/// # Examples
///
/// ```
/// use geo_weather::preprocessing::validator::ValidationResult;
///
/// let mut result = ValidationResult::new();
/// assert!(result.is_valid);
///
/// result.add_warning("2 rows have missing coordinates".to_string());
/// assert!(result.is_valid);
///
/// result.add_error("Missing required column: lat".to_string());
/// assert!(!result.is_valid);
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ValidationResult {
    pub is_valid: bool,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
    pub stats: ValidationStats,
}

/// Summary statistics computed during validation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ValidationStats {
    pub total_rows: usize,
    pub missing_coordinates: usize,
    pub invalid_coordinates: usize,
    pub missing_values: usize,
}

impl ValidationResult {
    /// Creates a new validation result with valid status and empty error/warning lists.
    pub fn new() -> Self {
        Self {
            is_valid: true,
            ..Default::default()
        }
    }

    /// Adds a critical error and marks the result as invalid.
    pub fn add_error(&mut self, error: String) {
        self.is_valid = false;
        self.errors.push(error);
    }

    /// Adds a non-critical warning without invalidating the result.
    pub fn add_warning(&mut self, warning: String) {
        self.warnings.push(warning);
    }
}

/// Validator for enrichment inputs.
pub struct InputValidator;

impl InputValidator {
    /// Validates a restaurant DataFrame (`name`, `lat`, `lng`).
    ///
    /// Missing coordinates are only a warning: the pipeline fills them.
    pub fn validate_restaurants(df: &DataFrame, columns: &ColumnNames) -> ValidationResult {
        let mut result = ValidationResult::new();
        result.stats.total_rows = df.height();

        Self::check_required(
            df,
            &[columns.name.as_str(), columns.latitude.as_str(), columns.longitude.as_str()],
            &mut result,
        );
        if !result.is_valid {
            return result;
        }

        Self::check_coordinates(df, columns, &mut result);
        result
    }

    /// Validates a weather DataFrame (`lat`, `lng`, `avg_tmpr_c`).
    pub fn validate_weather(df: &DataFrame, columns: &ColumnNames) -> ValidationResult {
        let mut result = ValidationResult::new();
        result.stats.total_rows = df.height();

        Self::check_required(
            df,
            &[
                columns.latitude.as_str(),
                columns.longitude.as_str(),
                columns.temperature.as_str(),
            ],
            &mut result,
        );
        if !result.is_valid {
            return result;
        }

        Self::check_coordinates(df, columns, &mut result);

        if let Ok(temperature) = df.column(&columns.temperature) {
            result.stats.missing_values = temperature.null_count();
            if result.stats.missing_values > 0 {
                result.add_warning(format!(
                    "{} rows have no '{}' value",
                    result.stats.missing_values, columns.temperature
                ));
            }
        }

        result
    }

    fn check_required(df: &DataFrame, required: &[&str], result: &mut ValidationResult) {
        let (_, issues) = validate_schema(df, required, None);
        for issue in issues {
            result.add_error(issue);
        }

        if result.is_valid && df.height() == 0 {
            result.add_warning("Dataset is empty".to_string());
        }
    }

    fn check_coordinates(df: &DataFrame, columns: &ColumnNames, result: &mut ValidationResult) {
        let lat = df
            .column(&columns.latitude)
            .and_then(|c| c.cast(&DataType::Float64));
        let lng = df
            .column(&columns.longitude)
            .and_then(|c| c.cast(&DataType::Float64));

        let (lat, lng) = match (lat, lng) {
            (Ok(lat), Ok(lng)) => (lat, lng),
            (Err(e), _) | (_, Err(e)) => {
                result.add_error(format!("Coordinate columns are not numeric: {}", e));
                return;
            }
        };
        let (Ok(lat), Ok(lng)) = (lat.f64(), lng.f64()) else {
            result.add_error("Coordinate columns are not numeric".to_string());
            return;
        };

        for (row, (lat, lng)) in lat.into_iter().zip(lng.into_iter()).enumerate() {
            match (lat, lng) {
                (Some(lat), Some(lng)) => {
                    if !(-90.0..=90.0).contains(&lat) || !(-180.0..=180.0).contains(&lng) {
                        result.stats.invalid_coordinates += 1;
                        if result.stats.invalid_coordinates <= MAX_LISTED {
                            result.add_warning(format!(
                                "Row {} has out-of-range coordinates: ({}, {})",
                                row, lat, lng
                            ));
                        }
                    }
                }
                _ => result.stats.missing_coordinates += 1,
            }
        }

        if result.stats.invalid_coordinates > MAX_LISTED {
            result.add_warning(format!(
                "Total out-of-range coordinates: {} (showing first {})",
                result.stats.invalid_coordinates, MAX_LISTED
            ));
        }
        if result.stats.missing_coordinates > 0 {
            result.add_warning(format!(
                "{} rows have missing coordinates",
                result.stats.missing_coordinates
            ));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_restaurants_ok() {
        let df = df!(
            "name" => ["A", "B"],
            "lat" => [1.0, 2.0],
            "lng" => [3.0, 4.0],
        )
        .unwrap();

        let result = InputValidator::validate_restaurants(&df, &ColumnNames::default());
        assert!(result.is_valid);
        assert!(result.warnings.is_empty());
        assert_eq!(result.stats.total_rows, 2);
    }

    #[test]
    fn test_validate_restaurants_missing_column() {
        let df = df!("name" => ["A"], "lat" => [1.0]).unwrap();

        let result = InputValidator::validate_restaurants(&df, &ColumnNames::default());
        assert!(!result.is_valid);
        assert_eq!(result.errors, vec!["Missing required column: lng".to_string()]);
    }

    #[test]
    fn test_validate_restaurants_coordinate_warnings() {
        let df = df!(
            "name" => ["A", "B", "C"],
            "lat" => [None, Some(95.0), Some(1.0)],
            "lng" => [None, Some(0.0), Some(1.0)],
        )
        .unwrap();

        let result = InputValidator::validate_restaurants(&df, &ColumnNames::default());
        assert!(result.is_valid);
        assert_eq!(result.stats.missing_coordinates, 1);
        assert_eq!(result.stats.invalid_coordinates, 1);
        assert_eq!(result.warnings.len(), 2);
    }

    #[test]
    fn test_validate_many_invalid_coordinates_is_summarized() {
        let lat: Vec<f64> = vec![100.0; 8];
        let lng: Vec<f64> = vec![0.0; 8];
        let df = df!("lat" => lat, "lng" => lng, "avg_tmpr_c" => vec![1.0; 8]).unwrap();

        let result = InputValidator::validate_weather(&df, &ColumnNames::default());
        assert_eq!(result.stats.invalid_coordinates, 8);
        assert_eq!(result.warnings.len(), MAX_LISTED + 1);
    }

    #[test]
    fn test_validate_weather_missing_temperatures() {
        let df = df!(
            "lat" => [1.0, 2.0],
            "lng" => [1.0, 2.0],
            "avg_tmpr_c" => [Some(10.0), None],
        )
        .unwrap();

        let result = InputValidator::validate_weather(&df, &ColumnNames::default());
        assert!(result.is_valid);
        assert_eq!(result.stats.missing_values, 1);
    }

    #[test]
    fn test_validate_non_numeric_coordinates() {
        let df = df!(
            "name" => ["A"],
            "lat" => ["north"],
            "lng" => ["east"],
        )
        .unwrap();

        let result = InputValidator::validate_restaurants(&df, &ColumnNames::default());
        // Strings that don't parse cast to null rather than failing
        assert!(result.is_valid);
        assert_eq!(result.stats.missing_coordinates, 1);
    }

    #[test]
    fn test_validate_empty_dataset() {
        let df = df!(
            "lat" => Vec::<f64>::new(),
            "lng" => Vec::<f64>::new(),
            "avg_tmpr_c" => Vec::<f64>::new(),
        )
        .unwrap();

        let result = InputValidator::validate_weather(&df, &ColumnNames::default());
        assert!(result.is_valid);
        assert_eq!(result.warnings, vec!["Dataset is empty".to_string()]);
    }
}
