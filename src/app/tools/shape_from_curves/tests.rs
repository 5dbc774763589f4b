use super::super::{SketchTool, ToolContext, ToolError};
use super::{PathEnd, ShapeFromCurvesTool, TracerPhase};
use crate::core::{Camera2D, LayeredScene, PointObject, Shape};
use crate::shared::Tolerance;
use glam::Vec2;
use std::f32::consts::TAU;

const VIEWPORT: Vec2 = Vec2::new(800.0, 600.0);

fn move_to(tool: &mut ShapeFromCurvesTool, scene: &mut LayeredScene, world: Vec2) {
    let camera = Camera2D::new();
    let ctx = ToolContext::new(scene, &camera, VIEWPORT);
    let commands = tool
        .on_pointer_move(ctx.to_screen(world), &ctx)
        .expect("Bewegung ohne Fehler erwartet");
    scene.apply_all(commands);
}

fn click_at(tool: &mut ShapeFromCurvesTool, scene: &mut LayeredScene, world: Vec2) {
    let camera = Camera2D::new();
    let ctx = ToolContext::new(scene, &camera, VIEWPORT);
    let commands = tool
        .on_pointer_down(ctx.to_screen(world), &ctx)
        .expect("Klick ohne Fehler erwartet");
    scene.apply_all(commands);
}

fn triangle_scene() -> (LayeredScene, [Vec2; 3]) {
    let a = Vec2::ZERO;
    let b = Vec2::new(2.0, 0.0);
    let c = Vec2::new(1.0, 2.0);
    let mut scene = LayeredScene::new();
    scene.add_to_main(Shape::line(a, b));
    scene.add_to_main(Shape::line(b, c));
    scene.add_to_main(Shape::line(c, a));
    for p in [a, b, c] {
        scene.add_to_main(PointObject::new(p));
    }
    (scene, [a, b, c])
}

fn circle_scene() -> (LayeredScene, Vec2) {
    let mut ring: Vec<Vec2> = (0..24)
        .map(|i| {
            let angle = TAU * i as f32 / 24.0;
            Vec2::new(angle.cos(), angle.sin())
        })
        .collect();
    ring.push(ring[0]);
    let anchor = ring[6];
    let mut scene = LayeredScene::new();
    scene.add_to_main(Shape::polyline(ring).expect("Kreis erwartet"));
    scene.add_to_main(PointObject::new(anchor));
    (scene, anchor)
}

// ── Vollständiger Ablauf ──

#[test]
fn test_triangle_trace_closes_filled_polygon() {
    let (mut scene, [a, b, c]) = triangle_scene();
    let mut tool = ShapeFromCurvesTool::new();

    move_to(&mut tool, &mut scene, a + Vec2::new(0.05, 0.05));
    assert_eq!(scene.front_len(), 1, "Punkt-Hover erwartet");

    click_at(&mut tool, &mut scene, a + Vec2::new(0.05, 0.05));
    assert!(tool.has_pending_input());
    assert_eq!(tool.candidates().len(), 2);
    assert_eq!(scene.front_len(), 1, "nur Ursprungs-Marker erwartet");

    move_to(&mut tool, &mut scene, Vec2::new(1.0, 0.05));
    assert_eq!(scene.front_len(), 3);
    click_at(&mut tool, &mut scene, Vec2::new(1.0, 0.05));
    assert_eq!(tool.committed().len(), 1);
    assert_eq!(tool.candidates().len(), 1);
    assert_eq!(tool.candidates()[0].far_end(), c);

    move_to(&mut tool, &mut scene, (b + c) * 0.5);
    click_at(&mut tool, &mut scene, (b + c) * 0.5);
    assert_eq!(tool.committed().len(), 2);

    move_to(&mut tool, &mut scene, (c + a) * 0.5);
    click_at(&mut tool, &mut scene, (c + a) * 0.5);

    assert!(matches!(tool.phase(), TracerPhase::Idle { .. }));
    assert_eq!(scene.front_len(), 0, "alle Highlights entfernt");
    assert_eq!(scene.shapes().count(), 4);
    let (_, polygon) = scene.shapes().last().expect("Polygon erwartet");
    assert!(polygon.style.fill);
    assert_eq!(polygon.curve(0), Some(vec![a, b, c, a]));
}

#[test]
fn test_circle_candidate_closes_immediately() {
    let (mut scene, anchor) = circle_scene();
    let mut tool = ShapeFromCurvesTool::new();

    scene.apply_all(tool.start_at(anchor, &scene));
    assert_eq!(tool.candidates().len(), 2);
    for candidate in tool.candidates() {
        assert!(Tolerance::CURVE_ADJACENCY.contains(candidate.far_end().distance(anchor)));
        assert_eq!(candidate.end(), PathEnd::AtPoint);
    }

    let commands = tool.commit_candidate(1, &scene).expect("Schließen erwartet");
    scene.apply_all(commands);

    assert!(!tool.has_pending_input());
    assert_eq!(scene.front_len(), 0);
    let (_, polygon) = scene.shapes().last().expect("Polygon erwartet");
    assert!(polygon.style.fill);
    assert_eq!(polygon.point_count(), 25);
    assert!(polygon.is_curve_closed(0, Tolerance::CURVE_ADJACENCY));
}

// ── Fehler und Sonderfälle ──

#[test]
fn test_commit_without_session_or_candidates_fails() {
    let mut scene = LayeredScene::new();
    let mut tool = ShapeFromCurvesTool::new();
    assert_eq!(
        tool.commit_candidate(0, &scene),
        Err(ToolError::NoCandidates)
    );

    scene.add_to_main(PointObject::new(Vec2::new(3.0, 3.0)));
    scene.apply_all(tool.start_at(Vec2::new(3.0, 3.0), &scene));
    assert_eq!(
        tool.commit_candidate(0, &scene),
        Err(ToolError::NoCandidates)
    );
}

#[test]
fn test_commit_out_of_range_reports_count() {
    let (mut scene, anchor) = circle_scene();
    let mut tool = ShapeFromCurvesTool::new();
    scene.apply_all(tool.start_at(anchor, &scene));

    assert_eq!(
        tool.commit_candidate(5, &scene),
        Err(ToolError::CandidateOutOfRange { index: 5, count: 2 })
    );
    assert!(tool.has_pending_input());
}

#[test]
fn test_dead_end_commit_keeps_session() {
    let junction = Vec2::ZERO;
    let mut scene = LayeredScene::new();
    scene.add_to_main(Shape::line(junction, Vec2::new(0.0, 2.0)));
    scene.add_to_main(Shape::line(junction, Vec2::new(2.0, -1.0)));
    scene.add_to_main(Shape::line(Vec2::new(-2.0, -1.0), junction));
    scene.add_to_main(PointObject::new(junction));
    let mut tool = ShapeFromCurvesTool::new();

    scene.apply_all(tool.start_at(junction, &scene));
    assert_eq!(tool.candidates().len(), 3);
    assert!(tool.candidates().iter().all(|c| c.end() == PathEnd::OpenEnd));

    let commands = tool.commit_candidate(0, &scene).expect("Sackgasse erlaubt");
    scene.apply_all(commands);
    assert!(tool.has_pending_input());
    assert!(tool.candidates().is_empty());
    assert!(scene.front_len() > 0);

    scene.apply_all(tool.quit());
    assert_eq!(scene.front_len(), 0);
    assert!(matches!(tool.phase(), TracerPhase::Idle { .. }));
}

#[test]
fn test_click_away_from_points_does_nothing() {
    let (mut scene, _) = triangle_scene();
    let mut tool = ShapeFromCurvesTool::new();

    click_at(&mut tool, &mut scene, Vec2::new(5.0, 5.0));
    assert!(!tool.has_pending_input());
    assert_eq!(scene.front_len(), 0);
}

#[test]
fn test_pointer_leave_clears_hover_only() {
    let (mut scene, [a, _, _]) = triangle_scene();
    let mut tool = ShapeFromCurvesTool::new();
    click_at(&mut tool, &mut scene, a);
    move_to(&mut tool, &mut scene, Vec2::new(1.0, 0.05));
    assert_eq!(scene.front_len(), 3);

    scene.apply_all(tool.on_pointer_leave());
    assert_eq!(scene.front_len(), 1, "Ursprungs-Marker bleibt");
    assert!(tool.has_pending_input());
}

#[test]
fn test_hover_updates_only_on_change() {
    let (mut scene, [a, _, _]) = triangle_scene();
    let mut tool = ShapeFromCurvesTool::new();
    click_at(&mut tool, &mut scene, a);

    let camera = Camera2D::new();
    move_to(&mut tool, &mut scene, Vec2::new(1.0, 0.05));
    let ctx = ToolContext::new(&scene, &camera, VIEWPORT);
    let again = tool
        .on_pointer_move(ctx.to_screen(Vec2::new(1.1, 0.04)), &ctx)
        .expect("Bewegung ohne Fehler erwartet");
    assert!(again.is_empty());
}

#[test]
fn test_idle_hover_and_start_pick_nearest_point() {
    let mut scene = LayeredScene::new();
    scene.add_to_main(Shape::line(Vec2::new(2.0, 3.0), Vec2::new(4.0, 3.0)));
    let far = Vec2::new(3.15, 3.0);
    let near = Vec2::new(3.01, 3.0);
    scene.add_to_main(PointObject::new(far));
    scene.add_to_main(PointObject::new(near));
    let mut tool = ShapeFromCurvesTool::new();

    move_to(&mut tool, &mut scene, Vec2::new(3.0, 3.0));
    match tool.phase() {
        TracerPhase::Idle { hovered_point } => assert_eq!(*hovered_point, Some(near)),
        other => panic!("Leerlauf erwartet, erhalten: {other:?}"),
    }

    click_at(&mut tool, &mut scene, Vec2::new(3.0, 3.0));
    match tool.phase() {
        TracerPhase::Extending(session) => assert_eq!(session.origin, near),
        other => panic!("Sitzung erwartet, erhalten: {other:?}"),
    }
}
