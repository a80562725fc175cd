use polars::prelude::*;

/// Mean of `value_col` per distinct `key_col`, written to `output_col`.
///
/// Values are averaged as `Float64`. The result has one row per distinct
/// key, sorted by key. Rows with a null key form their own group.
pub fn mean_by_bucket(
    df: &DataFrame,
    key_col: &str,
    value_col: &str,
    output_col: &str,
) -> PolarsResult<DataFrame> {
    df.clone()
        .lazy()
        .group_by([col(key_col)])
        .agg([col(value_col).cast(DataType::Float64).mean().alias(output_col)])
        .sort([key_col], SortMultipleOptions::default())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn weather() -> DataFrame {
        df!(
            "geohash" => ["abcd", "abcd", "efgh"],
            "avg_tmpr_c" => [10i64, 20, 30],
        )
        .unwrap()
    }

    #[test]
    fn test_mean_by_bucket() {
        let agg = mean_by_bucket(&weather(), "geohash", "avg_tmpr_c", "avg_temp").unwrap();
        assert_eq!(agg.height(), 2);

        let keys: Vec<Option<&str>> =
            agg.column("geohash").unwrap().str().unwrap().into_iter().collect();
        let means: Vec<Option<f64>> =
            agg.column("avg_temp").unwrap().f64().unwrap().into_iter().collect();
        assert_eq!(keys, vec![Some("abcd"), Some("efgh")]);
        assert_eq!(means, vec![Some(15.0), Some(30.0)]);
    }

    #[test]
    fn test_mean_by_bucket_ignores_null_values() {
        let df = df!(
            "geohash" => ["abcd", "abcd", "abcd"],
            "avg_tmpr_c" => [Some(10.0), None, Some(14.0)],
        )
        .unwrap();

        let agg = mean_by_bucket(&df, "geohash", "avg_tmpr_c", "avg_temp").unwrap();
        assert_eq!(agg.column("avg_temp").unwrap().f64().unwrap().get(0), Some(12.0));
    }

    #[test]
    fn test_mean_by_bucket_missing_value_column() {
        assert!(mean_by_bucket(&weather(), "geohash", "missing", "avg_temp").is_err());
    }
}
