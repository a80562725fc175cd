use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use geo_weather::geohash::{encode, geohash_4};
use geo_weather::transformations::with_bucket_column;
use polars::prelude::*;

fn bench_encode(c: &mut Criterion) {
    let mut group = c.benchmark_group("geohash_encode");

    for precision in [4usize, 8, 12] {
        group.bench_with_input(BenchmarkId::new("encode", precision), &precision, |b, &p| {
            b.iter(|| encode(black_box(37.7749), black_box(-122.4194), p));
        });
    }

    group.bench_function("geohash_4", |b| {
        b.iter(|| {
            for i in 0..1000 {
                let lat = -80.0 + (i as f64 * 0.16);
                black_box(geohash_4(black_box(Some(lat)), black_box(Some(lat * 2.0))));
            }
        });
    });

    group.finish();
}

fn bench_bucket_column(c: &mut Criterion) {
    let mut group = c.benchmark_group("bucket_column");

    for rows in [1_000usize, 100_000] {
        let lat: Vec<Option<f64>> = (0..rows)
            .map(|i| if i % 50 == 0 { None } else { Some(-89.0 + (i % 178) as f64) })
            .collect();
        let lng: Vec<f64> = (0..rows).map(|i| -179.0 + (i % 358) as f64).collect();
        let df = df!("lat" => lat, "lng" => lng).expect("benchmark frame");

        group.bench_with_input(BenchmarkId::new("with_bucket_column", rows), &df, |b, df| {
            b.iter(|| with_bucket_column(black_box(df), "lat", "lng", "geohash", 4));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_encode, bench_bucket_column);
criterion_main!(benches);
