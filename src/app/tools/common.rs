//! Gemeinsame Hilfsfunktionen für Werkzeuge: Shape-Picking und Schnittpunkt-Suche.

use glam::Vec2;

use crate::core::{LayeredScene, ObjectId};
use crate::shared::geometry::{
    closest_point_on_curves, distance_to_segment, segment_intersection, CurveHit,
};

/// Shape unter dem Zeiger mit seinen Kurven in Welt-Koordinaten.
#[derive(Debug, Clone)]
pub struct ShapeHit {
    /// ID des Shapes
    pub id: ObjectId,
    /// Alle Teilkurven des Shapes
    pub curves: Vec<Vec<Vec2>>,
}

/// Liegt irgendein Segment der Kurve strikt näher als `threshold`?
pub fn curve_is_near(curve: &[Vec2], pos: Vec2, threshold: f32) -> bool {
    curve
        .windows(2)
        .any(|w| distance_to_segment(pos, w[0], w[1]) < threshold)
}

/// Shapes, deren Kurven unter dem Zeiger liegen, in Speicherreihenfolge.
pub fn shapes_under_pointer(scene: &LayeredScene, pos: Vec2, threshold: f32) -> Vec<ShapeHit> {
    scene
        .shapes()
        .filter_map(|(id, shape)| {
            let curves = shape.curves();
            curves
                .iter()
                .any(|curve| curve_is_near(curve, pos, threshold))
                .then_some(ShapeHit { id, curves })
        })
        .collect()
}

/// Global nächster Kurvenpunkt über alle getroffenen Shapes.
///
/// Bei Gleichstand gewinnt das zuerst gespeicherte Shape.
pub fn closest_on_shapes(hits: &[ShapeHit], pos: Vec2) -> Option<(ObjectId, CurveHit)> {
    let mut best: Option<(ObjectId, CurveHit)> = None;
    for hit in hits {
        let Some(candidate) = closest_point_on_curves(pos, &hit.curves) else {
            continue;
        };
        if best.is_none_or(|(_, current)| candidate.distance < current.distance) {
            best = Some((hit.id, candidate));
        }
    }
    best
}

/// Erster Schnittpunkt zweier naher Kurven verschiedener Shapes.
///
/// Reihenfolge: Kurvenpaar, dann Segment der ersten, dann Segment der zweiten
/// Kurve. Berücksichtigt nur Segmente strikt näher als `proximity`. Kurven
/// desselben Shapes werden nie gegeneinander getestet.
pub fn first_intersection(hits: &[ShapeHit], pos: Vec2, proximity: f32) -> Option<Vec2> {
    let near_curves: Vec<(usize, &[Vec2])> = hits
        .iter()
        .enumerate()
        .flat_map(|(shape_idx, hit)| {
            hit.curves
                .iter()
                .filter(|curve| curve_is_near(curve, pos, proximity))
                .map(move |curve| (shape_idx, curve.as_slice()))
        })
        .collect();

    if near_curves.len() < 2 {
        return None;
    }

    let near_segments = |curve: &'_ [Vec2]| -> Vec<(Vec2, Vec2)> {
        curve
            .windows(2)
            .filter(|w| distance_to_segment(pos, w[0], w[1]) < proximity)
            .map(|w| (w[0], w[1]))
            .collect()
    };

    for (i, &(shape_a, curve_a)) in near_curves.iter().enumerate() {
        for &(shape_b, curve_b) in near_curves.iter().skip(i + 1) {
            if shape_a == shape_b {
                continue;
            }
            let segments_b = near_segments(curve_b);
            for (a1, a2) in near_segments(curve_a) {
                for &(b1, b2) in &segments_b {
                    if let Some(point) = segment_intersection(a1, a2, b1, b2) {
                        return Some(point);
                    }
                }
            }
        }
    }
    None
}
