use polars::prelude::*;

fn fill_with(name: &str, default: f64) -> Expr {
    // Unparseable values cast to null and are filled like missing ones
    let value = col(name).cast(DataType::Float64);
    when(value.clone().is_null())
        .then(lit(default))
        .otherwise(value)
        .alias(name)
}

fn as_float(df: &DataFrame, name: &str) -> PolarsResult<Column> {
    df.column(name)?.cast(&DataType::Float64)
}

/// Replace missing coordinates with default values.
///
/// Missing latitudes become `default_lat` and missing longitudes become
/// `default_lng`; present values pass through unchanged. Both columns come
/// out as `Float64`. Running it again on filled data changes nothing.
pub fn fill_missing_coordinates(
    df: &DataFrame,
    lat_col: &str,
    lng_col: &str,
    default_lat: f64,
    default_lng: f64,
) -> PolarsResult<DataFrame> {
    df.clone()
        .lazy()
        .with_columns([fill_with(lat_col, default_lat), fill_with(lng_col, default_lng)])
        .collect()
}

/// Count rows where latitude or longitude is missing or not a number
pub fn count_missing_coordinates(
    df: &DataFrame,
    lat_col: &str,
    lng_col: &str,
) -> PolarsResult<usize> {
    let lat_missing = as_float(df, lat_col)?.is_null();
    let lng_missing = as_float(df, lng_col)?.is_null();

    let mask = &lat_missing | &lng_missing;
    Ok(mask.num_trues())
}

/// Remove rows with missing coordinates (latitude or longitude)
pub fn remove_missing_coordinates(
    df: &DataFrame,
    lat_col: &str,
    lng_col: &str,
) -> PolarsResult<DataFrame> {
    let lat_not_null = as_float(df, lat_col)?.is_not_null();
    let lng_not_null = as_float(df, lng_col)?.is_not_null();

    let mask = &lat_not_null & &lng_not_null;
    df.filter(&mask)
}

/// Validate DataFrame schema (required columns and data types)
pub fn validate_schema(
    df: &DataFrame,
    required_columns: &[&str],
    expected_dtypes: Option<&[(&str, DataType)]>,
) -> (bool, Vec<String>) {
    let mut issues: Vec<String> = Vec::new();

    for name in required_columns {
        if df.column(name).is_err() {
            issues.push(format!("Missing required column: {}", name));
        }
    }

    if let Some(dtypes) = expected_dtypes {
        for (name, expected_dtype) in dtypes {
            if let Ok(column) = df.column(name) {
                let actual_dtype = column.dtype();
                if actual_dtype != expected_dtype {
                    issues.push(format!(
                        "Column '{}' has incorrect type: expected {:?}, got {:?}",
                        name, expected_dtype, actual_dtype
                    ));
                }
            }
        }
    }

    (issues.is_empty(), issues)
}
