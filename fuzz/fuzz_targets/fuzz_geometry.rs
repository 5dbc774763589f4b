#![no_main]

use glam::Vec2;
use libfuzzer_sys::fuzz_target;
use sketch_studio::shared::geometry::{
    closest_point_on_curves, closest_point_on_segment, point_at_distance, polyline_length,
    segment_intersection,
};

fn decode_points(data: &[u8]) -> Vec<Vec2> {
    data.chunks_exact(8)
        .map(|chunk| {
            let x = f32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
            let y = f32::from_le_bytes([chunk[4], chunk[5], chunk[6], chunk[7]]);
            Vec2::new(x, y)
        })
        .filter(|p| p.is_finite() && p.abs().max_element() < 1e6)
        .collect()
}

fuzz_target!(|data: &[u8]| {
    let points = decode_points(data);
    if points.len() < 4 {
        return;
    }

    let projection = closest_point_on_segment(points[0], points[1], points[2]);
    assert!((0.0..=1.0).contains(&projection.t));

    if let Some(hit) = segment_intersection(points[0], points[1], points[2], points[3]) {
        assert!(hit.is_finite());
    }

    let curve = &points[1..];
    if let Some(hit) = closest_point_on_curves(points[0], &[curve]) {
        let length = polyline_length(curve);
        assert!(hit.distance_along <= length * (1.0 + 1e-5) + 1e-3);
    }

    let target = points[0].x;
    if let Some(placement) = point_at_distance(curve, target) {
        assert!(placement.distance >= 0.0);
        assert!(placement.distance <= placement.total_length);
    }
});
