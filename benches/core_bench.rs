use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use glam::DVec2;
use gtt_map_editor::core::projection::from_lon_lat;
use gtt_map_editor::{
    read_features, write_feature_collection, CollectionMode, Coordinate, Feature,
    FeatureCollection, Geometry,
};
use std::hint::black_box;

fn build_synthetic_collection(feature_count: usize) -> FeatureCollection {
    let features = (0..feature_count)
        .map(|index| {
            let column = (index % 100) as f64 * 0.01;
            let row = (index / 100) as f64 * 0.01;
            let coords = (0..8)
                .map(|i| {
                    let p = from_lon_lat(135.0 + column + i as f64 * 0.001, 34.0 + row);
                    Coordinate::with_z(p.x, p.y, i as f64)
                })
                .collect();
            Feature::new(Geometry::LineString(coords)).with_property("id", index as u64)
        })
        .collect();
    FeatureCollection::from_features(CollectionMode::Multi, features)
}

fn bench_extent_and_hit_test(c: &mut Criterion) {
    let mut group = c.benchmark_group("collection_queries");

    for &feature_count in &[1_000usize, 10_000usize] {
        let collection = build_synthetic_collection(feature_count);
        let cursor = from_lon_lat(135.5, 34.5);

        group.bench_with_input(
            BenchmarkId::new("extent", feature_count),
            &collection,
            |b, collection| b.iter(|| black_box(collection.extent())),
        );

        group.bench_with_input(
            BenchmarkId::new("hit_test", feature_count),
            &collection,
            |b, collection| {
                b.iter(|| black_box(collection.hit_test(black_box(cursor), 50.0)))
            },
        );

        group.bench_with_input(
            BenchmarkId::new("nearest_vertex", feature_count),
            &collection,
            |b, collection| {
                b.iter(|| {
                    black_box(collection.nearest_vertex(black_box(cursor + DVec2::ONE), 50.0))
                })
            },
        );
    }

    group.finish();
}

fn bench_geojson_io(c: &mut Criterion) {
    let collection = build_synthetic_collection(1_000);
    let text = write_feature_collection(collection.features(), true)
        .expect("Serialisierung fehlgeschlagen");

    c.bench_function("geojson_write_1000", |b| {
        b.iter(|| {
            black_box(
                write_feature_collection(black_box(collection.features()), true)
                    .expect("Serialisierung fehlgeschlagen"),
            )
        })
    });

    c.bench_function("geojson_read_1000", |b| {
        b.iter(|| black_box(read_features(black_box(&text)).expect("Parsen fehlgeschlagen")))
    });
}

criterion_group!(benches, bench_extent_and_hit_test, bench_geojson_io);
criterion_main!(benches);
