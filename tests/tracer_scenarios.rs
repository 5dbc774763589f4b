use approx::assert_relative_eq;
use glam::Vec2;
use sketch_studio::app::tools::shape_from_curves::{CurveGraph, Orientation, PathEnd};
use sketch_studio::{LayeredScene, PointObject, Shape, Tolerance};
use std::f32::consts::TAU;

fn ring(center: Vec2, radius: f32, segments: usize) -> Vec<Vec2> {
    let mut points: Vec<Vec2> = (0..segments)
        .map(|i| {
            let angle = TAU * i as f32 / segments as f32;
            center + Vec2::new(angle.cos(), angle.sin()) * radius
        })
        .collect();
    points.push(points[0]);
    points
}

#[test]
fn test_square_trace_never_jumps_to_crossing_circle() {
    let mut scene = LayeredScene::new();
    let square = scene.add_to_main(
        Shape::polyline(vec![
            Vec2::new(-1.0, -1.0),
            Vec2::new(1.0, -1.0),
            Vec2::new(1.0, 1.0),
            Vec2::new(-1.0, 1.0),
            Vec2::new(-1.0, -1.0),
        ])
        .expect("Quadrat erwartet"),
    );
    scene.add_to_main(Shape::polyline(ring(Vec2::ZERO, 1.2, 40)).expect("Kreis erwartet"));
    let anchor = Vec2::new(0.0, -1.0);
    scene.add_to_main(PointObject::new(anchor));

    let graph = CurveGraph::from_scene(&scene, Tolerance::CURVE_ADJACENCY);
    let paths = graph.incident_paths(anchor);

    assert_eq!(paths.len(), 2);
    for path in &paths {
        assert_eq!(path.shape(), square);
        assert_eq!(path.end(), PathEnd::AtPoint);
        assert_relative_eq!(path.far_end().x, anchor.x, epsilon = 1e-4);
        assert_relative_eq!(path.far_end().y, anchor.y, epsilon = 1e-4);
        for point in path.points() {
            assert_relative_eq!(point.abs().max_element(), 1.0, epsilon = 1e-4);
        }
    }
    let orientations: Vec<Orientation> = paths.iter().map(|p| p.orientation()).collect();
    assert!(orientations.contains(&Orientation::Forward));
    assert!(orientations.contains(&Orientation::Reversed));
}

#[test]
fn test_circle_point_offers_both_directions_around() {
    let mut scene = LayeredScene::new();
    let circle = ring(Vec2::new(3.0, 1.0), 1.5, 36);
    let anchor = circle[9];
    scene.add_to_main(Shape::polyline(circle).expect("Kreis erwartet"));
    scene.add_to_main(PointObject::new(anchor));

    let graph = CurveGraph::from_scene(&scene, Tolerance::CURVE_ADJACENCY);
    let candidates = graph.candidates(anchor, None);

    assert_eq!(candidates.len(), 2);
    for candidate in &candidates {
        assert_eq!(candidate.points().len(), 37);
        assert!(Tolerance::CURVE_ADJACENCY.contains(candidate.far_end().distance(anchor)));
    }
}

#[test]
fn test_y_junction_legs_end_in_dead_ends() {
    let junction = Vec2::new(0.5, 0.5);
    let tips = [
        Vec2::new(0.5, 2.0),
        Vec2::new(-1.0, -0.5),
        Vec2::new(2.0, -0.5),
    ];
    let mut scene = LayeredScene::new();
    for tip in tips {
        scene.add_to_main(Shape::line(junction, tip));
    }
    scene.add_to_main(PointObject::new(junction));

    let graph = CurveGraph::from_scene(&scene, Tolerance::CURVE_ADJACENCY);
    let legs = graph.candidates(junction, None);

    assert_eq!(legs.len(), 3);
    for leg in &legs {
        assert_eq!(leg.start(), junction);
        assert_eq!(leg.end(), PathEnd::OpenEnd);
        assert!(tips.contains(&leg.far_end()));

        let onward = graph.candidates(leg.far_end(), Some(leg));
        assert!(onward.is_empty(), "Sackgasse erwartet");
    }
}
