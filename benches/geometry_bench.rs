//! Benchmarks for room extraction and collision resolution
//!
//! Run with: cargo bench --bench geometry_bench

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use glam::{IVec2, Vec3};
use scene_geometry::core::GeometryConfig;
use scene_geometry::room::{CanvasBounds, GridSegment, RoomTopologyExtractor};
use scene_geometry::spatial::{CollisionFilter, CollisionResolver, Dimensions};
use scene_geometry::SceneObjectRef;

/// `n` x `n` block of rooms, each `size` cells wide
fn room_grid(n: i32, size: i32) -> Vec<GridSegment> {
    let extent = n * size;
    let mut segments = Vec::new();
    for i in 0..=n {
        let at = i * size;
        segments.push(GridSegment::wall(IVec2::new(0, at), IVec2::new(extent, at)).unwrap());
        segments.push(GridSegment::wall(IVec2::new(at, 0), IVec2::new(at, extent)).unwrap());
    }
    segments
}

fn bench_extract(c: &mut Criterion) {
    let mut group = c.benchmark_group("room_extract");
    let extractor = RoomTopologyExtractor::with_config(GeometryConfig::default());

    for n in [2, 4, 8] {
        let segments = room_grid(n, 5);
        let cells = (n * 5 + 2) as u32;
        let canvas = CanvasBounds::new(cells, cells);

        group.bench_with_input(BenchmarkId::from_parameter(n * n), &segments, |b, segments| {
            b.iter(|| {
                extractor
                    .extract(black_box(segments), 20.0, canvas)
                    .unwrap()
            })
        });
    }

    group.finish();
}

fn bench_collision(c: &mut Criterion) {
    let mut group = c.benchmark_group("collision_resolve");
    let resolver = CollisionResolver::with_config(GeometryConfig::default());
    let dims = Dimensions::new(2.0, 2.0, 2.0);

    for count in [10, 100, 500] {
        let scene: Vec<SceneObjectRef> = (0..count)
            .map(|i| {
                let x = (i % 25) as f32 * 3.0;
                let z = (i / 25) as f32 * 3.0;
                SceneObjectRef::new(format!("obj_{i}"), "cube", Vec3::new(x, 0.0, z))
            })
            .collect();

        group.bench_with_input(BenchmarkId::new("clear", count), &scene, |b, scene| {
            b.iter(|| {
                resolver.resolve(
                    black_box(Vec3::new(-50.0, 0.0, -50.0)),
                    dims,
                    scene,
                    CollisionFilter::new(),
                )
            })
        });

        // Lands inside the first obstacle and must search outward
        group.bench_with_input(BenchmarkId::new("blocked", count), &scene, |b, scene| {
            b.iter(|| resolver.resolve(black_box(Vec3::ZERO), dims, scene, CollisionFilter::new()))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_extract, bench_collision);
criterion_main!(benches);
