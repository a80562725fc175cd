//! Behavior of the four transformation contracts on small fixtures.

mod support;

use geo_weather::geohash::{geohash_4, BASE32};
use geo_weather::transformations::{
    fill_missing_coordinates, left_join_on_bucket, mean_by_bucket, with_bucket_column,
    DuplicateKeyPolicy,
};
use polars::prelude::*;

use support::{float_by_key, floats};

#[test]
fn test_geohash_udf_valid() {
    let df = df!("lat" => [37.7749], "lng" => [-122.4194]).unwrap();
    let df = with_bucket_column(&df, "lat", "lng", "hash", 4).unwrap();

    let hash = df.column("hash").unwrap().str().unwrap().get(0).unwrap();
    assert_eq!(hash.len(), 4);
    assert!(hash.bytes().all(|b| BASE32.contains(&b)));
}

#[test]
fn test_geohash_udf_none() {
    let df = df!(
        "lat" => [None::<f64>],
        "lng" => [None::<f64>],
    )
    .unwrap();
    let df = with_bucket_column(&df, "lat", "lng", "hash", 4).unwrap();

    assert_eq!(df.column("hash").unwrap().str().unwrap().get(0), None);
}

#[test]
fn test_geohash_udf_partial_coordinates() {
    assert_eq!(geohash_4(Some(37.7749), None), None);
    assert_eq!(geohash_4(None, Some(-122.4194)), None);
}

#[test]
fn test_fill_missing_coordinates() {
    let df = df!(
        "lat" => [None, Some(1.0)],
        "lng" => [None, Some(2.0)],
    )
    .unwrap();

    let fixed = fill_missing_coordinates(&df, "lat", "lng", 10.0, 20.0).unwrap();
    assert_eq!(floats(&fixed, "lat"), vec![Some(10.0), Some(1.0)]);
    assert_eq!(floats(&fixed, "lng"), vec![Some(20.0), Some(2.0)]);
}

#[test]
fn test_fill_missing_coordinates_is_idempotent() {
    let df = df!(
        "lat" => [None, Some(1.0), Some(-3.5)],
        "lng" => [Some(7.0), None, Some(2.0)],
    )
    .unwrap();

    let once = fill_missing_coordinates(&df, "lat", "lng", 10.0, 20.0).unwrap();
    let twice = fill_missing_coordinates(&once, "lat", "lng", 10.0, 20.0).unwrap();
    assert!(once.equals_missing(&twice));
}

#[test]
fn test_aggregate_weather() {
    let df = df!(
        "geohash" => ["abcd", "abcd", "efgh"],
        "avg_tmpr_c" => [10i64, 20, 30],
    )
    .unwrap();

    let agg = mean_by_bucket(&df, "geohash", "avg_tmpr_c", "avg_temp").unwrap();
    let result = float_by_key(&agg, "geohash", "avg_temp");
    assert_eq!(result.len(), 2);
    assert_eq!(result["abcd"], Some(15.0));
    assert_eq!(result["efgh"], Some(30.0));
}

#[test]
fn test_join_restaurant_weather() {
    let rest = df!(
        "name" => ["A", "B", "C"],
        "geohash" => ["abcd", "efgh", "ijkl"],
    )
    .unwrap();
    let weather = df!(
        "geohash" => ["abcd", "efgh"],
        "avg_temp" => [15i64, 30],
    )
    .unwrap();

    let joined =
        left_join_on_bucket(&rest, &weather, "geohash", DuplicateKeyPolicy::FanOut).unwrap();
    let rows = float_by_key(&joined, "name", "avg_temp");
    assert_eq!(rows["A"], Some(15.0));
    assert_eq!(rows["B"], Some(30.0));
    assert_eq!(rows["C"], None);
}

#[test]
fn test_join_drops_unmatched_right_rows() {
    let rest = df!("name" => ["A"], "geohash" => ["abcd"]).unwrap();
    let weather = df!(
        "geohash" => ["abcd", "zzzz"],
        "avg_temp" => [15.0, 99.0],
    )
    .unwrap();

    let joined =
        left_join_on_bucket(&rest, &weather, "geohash", DuplicateKeyPolicy::FanOut).unwrap();
    assert_eq!(joined.height(), 1);
}

#[test]
fn test_bucket_aggregate_join_chain() {
    let weather = df!(
        "lat" => [48.86, 48.85, 37.77],
        "lng" => [2.35, 2.36, -122.42],
        "avg_tmpr_c" => [10.0, 20.0, 16.0],
    )
    .unwrap();
    let restaurants = df!(
        "name" => ["Paris", "SF"],
        "lat" => [48.8566, 37.7749],
        "lng" => [2.3522, -122.4194],
    )
    .unwrap();

    let weather = with_bucket_column(&weather, "lat", "lng", "geohash", 4).unwrap();
    let agg = mean_by_bucket(&weather, "geohash", "avg_tmpr_c", "avg_temp").unwrap();
    let restaurants = with_bucket_column(&restaurants, "lat", "lng", "geohash", 4).unwrap();
    let joined =
        left_join_on_bucket(&restaurants, &agg, "geohash", DuplicateKeyPolicy::Reject).unwrap();

    let rows = float_by_key(&joined, "name", "avg_temp");
    assert_eq!(rows["Paris"], Some(15.0));
    assert_eq!(rows["SF"], Some(16.0));
}
