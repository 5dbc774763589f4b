use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use glam::Vec2;
use sketch_studio::app::tools::shape_from_curves::CurveGraph;
use sketch_studio::app::tools::SnappingCursor;
use sketch_studio::shared::geometry::closest_point_on_curves;
use sketch_studio::{LayeredScene, PointObject, Shape, Tolerance};
use std::hint::black_box;

/// Gitternetz aus horizontalen und vertikalen Linien mit Punkten an jeder Kreuzung.
fn build_grid_scene(lines_per_axis: usize) -> LayeredScene {
    let mut scene = LayeredScene::new();
    let extent = lines_per_axis as f32;

    for index in 0..lines_per_axis {
        let offset = index as f32 + 0.5;
        scene.add_to_main(Shape::line(Vec2::new(0.0, offset), Vec2::new(extent, offset)));
        scene.add_to_main(Shape::line(Vec2::new(offset, 0.0), Vec2::new(offset, extent)));
    }

    for column in 0..lines_per_axis {
        for row in 0..lines_per_axis {
            let position = Vec2::new(column as f32 + 0.5, row as f32 + 0.5);
            scene.add_to_main(PointObject::new(position));
        }
    }

    scene
}

fn build_query_points(count: usize, extent: f32) -> Vec<Vec2> {
    (0..count)
        .map(|i| {
            let x = ((i * 13) % 1000) as f32 / 1000.0 * extent + 0.07;
            let y = ((i * 7) % 1000) as f32 / 1000.0 * extent + 0.13;
            Vec2::new(x, y)
        })
        .collect()
}

fn build_zigzag_curves(curve_count: usize, points_per_curve: usize) -> Vec<Vec<Vec2>> {
    (0..curve_count)
        .map(|curve| {
            (0..points_per_curve)
                .map(|i| {
                    let x = i as f32 * 0.25;
                    let y = curve as f32 + if i % 2 == 0 { 0.0 } else { 0.3 };
                    Vec2::new(x, y)
                })
                .collect()
        })
        .collect()
}

fn bench_closest_point(c: &mut Criterion) {
    let mut group = c.benchmark_group("closest_point");

    for &curve_count in &[16usize, 256usize] {
        let curves = build_zigzag_curves(curve_count, 64);
        let query_points = build_query_points(256, 16.0);

        group.bench_with_input(
            BenchmarkId::new("curves_batch", curve_count),
            &curves,
            |b, curves| {
                b.iter(|| {
                    let mut total = 0.0f32;
                    for point in &query_points {
                        if let Some(hit) = closest_point_on_curves(black_box(*point), curves) {
                            total += hit.distance;
                        }
                    }
                    black_box(total)
                })
            },
        );
    }

    group.finish();
}

fn bench_cursor_resolve(c: &mut Criterion) {
    let mut group = c.benchmark_group("cursor_resolve");

    for &lines in &[10usize, 40usize] {
        let scene = build_grid_scene(lines);
        let query_points = build_query_points(256, lines as f32);

        group.bench_with_input(
            BenchmarkId::new("free_snap", lines),
            &scene,
            |b, scene| {
                let mut cursor = SnappingCursor::new();
                cursor.align_to_grid = false;
                cursor.snap_to_points = false;
                b.iter(|| {
                    let mut sum = Vec2::ZERO;
                    for point in &query_points {
                        sum += cursor.resolve_scene_position(black_box(*point), scene);
                    }
                    black_box(sum)
                })
            },
        );
    }

    group.finish();
}

fn bench_incident_discovery(c: &mut Criterion) {
    let mut group = c.benchmark_group("incident_discovery");

    for &lines in &[10usize, 40usize] {
        let scene = build_grid_scene(lines);
        let graph = CurveGraph::from_scene(&scene, Tolerance::CURVE_ADJACENCY);
        let anchor = Vec2::new(lines as f32 / 2.0 + 0.5, lines as f32 / 2.0 + 0.5);

        group.bench_with_input(
            BenchmarkId::new("incident_paths", lines),
            &graph,
            |b, graph| b.iter(|| black_box(graph.incident_paths(black_box(anchor)).len())),
        );

        group.bench_function(BenchmarkId::new("graph_build", lines), |b| {
            b.iter(|| {
                black_box(CurveGraph::from_scene(black_box(&scene), Tolerance::CURVE_ADJACENCY).curve_count())
            })
        });
    }

    group.finish();
}

criterion_group!(
    core_benches,
    bench_closest_point,
    bench_cursor_resolve,
    bench_incident_discovery
);
criterion_main!(core_benches);
