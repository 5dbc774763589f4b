//! Zustandslose Geometrie-Abfragen auf Polylinien.
//!
//! Layer-neutral: wird vom Snapping-Cursor, vom Kurven-Graph-Tracer und vom
//! Punkt-auf-Kurve-Tool gleichermaßen genutzt. Degenerierte Fälle (leere Eingaben,
//! parallele Segmente) liefern `None` statt eines Fehlers.

use glam::Vec2;

use super::Tolerance;

/// Projektion eines Punkts auf ein Segment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SegmentProjection {
    /// Nächster Punkt auf dem Segment (auf die Enden geklemmt)
    pub point: Vec2,
    /// Segment-Parameter in [0, 1]
    pub t: f32,
    /// Euklidische Distanz Query → `point`
    pub distance: f32,
}

/// Treffer einer Nächster-Punkt-Suche über mehrere Teilkurven.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurveHit {
    /// Nächster Punkt auf irgendeinem Segment
    pub point: Vec2,
    /// Index der Teilkurve, die den Punkt enthält
    pub curve_index: usize,
    /// Bogenlänge vom Start der Teilkurve bis `point`
    pub distance_along: f32,
    /// Euklidische Distanz Query → `point`
    pub distance: f32,
}

/// Ergebnis einer Platzierung per Bogenlänge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArcLengthPlacement {
    /// Platzierte Position
    pub position: Vec2,
    /// Tatsächlich erreichte Distanz (auf [0, Gesamtlänge] geklemmt)
    pub distance: f32,
    /// Gesamtlänge der Kurve
    pub total_length: f32,
}

/// Nächster Punkt auf dem Segment `a → b`, geklemmt (keine Verlängerung als Gerade).
pub fn closest_point_on_segment(query: Vec2, a: Vec2, b: Vec2) -> SegmentProjection {
    let ab = b - a;
    let length_sq = ab.length_squared();
    let t = if length_sq > 0.0 {
        ((query - a).dot(ab) / length_sq).clamp(0.0, 1.0)
    } else {
        0.0
    };
    let point = a + ab * t;
    SegmentProjection {
        point,
        t,
        distance: point.distance(query),
    }
}

/// Distanz eines Punkts zum Segment `a → b`.
pub fn distance_to_segment(query: Vec2, a: Vec2, b: Vec2) -> f32 {
    closest_point_on_segment(query, a, b).distance
}

/// Nächster Punkt über alle Segmente aller Teilkurven.
///
/// Bei Gleichstand gewinnt die zuerst gespeicherte Teilkurve (bzw. das erste
/// Segment). Teilkurven mit weniger als zwei Punkten tragen nichts bei.
pub fn closest_point_on_curves<C: AsRef<[Vec2]>>(query: Vec2, curves: &[C]) -> Option<CurveHit> {
    let mut best: Option<CurveHit> = None;
    for (curve_index, curve) in curves.iter().enumerate() {
        let mut travelled = 0.0f32;
        for segment in curve.as_ref().windows(2) {
            let projection = closest_point_on_segment(query, segment[0], segment[1]);
            let segment_length = segment[0].distance(segment[1]);
            let is_better = best.is_none_or(|hit| projection.distance < hit.distance);
            if is_better {
                best = Some(CurveHit {
                    point: projection.point,
                    curve_index,
                    distance_along: travelled + segment_length * projection.t,
                    distance: projection.distance,
                });
            }
            travelled += segment_length;
        }
    }
    best
}

/// Löst das lineare 2×2-System
///
/// ```text
/// [ a b ]   [ x ]   [ e ]
/// [ c d ] * [ y ] = [ f ]
/// ```
///
/// `None` bei exakt verschwindender Determinante.
pub fn solve_2x2(a: f32, b: f32, c: f32, d: f32, e: f32, f: f32) -> Option<(f32, f32)> {
    let determinant = a * d - b * c;
    if determinant == 0.0 {
        return None;
    }
    Some(((d * e - b * f) / determinant, (a * f - c * e) / determinant))
}

/// Schnittpunkt der Segmente `p1 → p2` und `q1 → q2`.
///
/// Parallele/kollineare Segmente (Determinante exakt 0) werden nicht aufgelöst.
/// Liegen `s` oder `t` außerhalb von [0, 1], schneiden sich nur die Geraden.
pub fn segment_intersection(p1: Vec2, p2: Vec2, q1: Vec2, q2: Vec2) -> Option<Vec2> {
    let p_dir = p2 - p1;
    let q_dir_neg = q1 - q2;
    let offset = q1 - p1;
    let (s, t) = solve_2x2(p_dir.x, q_dir_neg.x, p_dir.y, q_dir_neg.y, offset.x, offset.y)?;
    if !(0.0..=1.0).contains(&s) || !(0.0..=1.0).contains(&t) {
        return None;
    }
    Some(p1.lerp(p2, s))
}

/// Nähe-Test zweier Positionen gegen eine Toleranz der passenden Klasse.
pub fn is_within(a: Vec2, b: Vec2, tolerance: Tolerance) -> bool {
    tolerance.contains(a.distance(b))
}

/// Länge einer Polylinie.
pub fn polyline_length(points: &[Vec2]) -> f32 {
    points.windows(2).map(|w| w[0].distance(w[1])).sum()
}

/// Platziert einen Punkt in Bogenlänge `target` entlang der Polylinie.
///
/// Läuft die Segmente ab, bis die aufsummierte Länge das Ziel überschreiten würde,
/// und interpoliert im letzten Segment. Ziele außerhalb von [0, Gesamtlänge] werden
/// geklemmt. `None` nur bei leerer Polylinie.
pub fn point_at_distance(points: &[Vec2], target: f32) -> Option<ArcLengthPlacement> {
    let last = *points.last()?;
    let total_length = polyline_length(points);
    let target = if target.is_nan() {
        0.0
    } else {
        target.clamp(0.0, total_length)
    };

    let mut travelled = 0.0f32;
    for segment in points.windows(2) {
        let segment_length = segment[0].distance(segment[1]);
        if travelled + segment_length > target {
            let fraction = if segment_length > f32::EPSILON {
                (target - travelled) / segment_length
            } else {
                0.0
            };
            return Some(ArcLengthPlacement {
                position: segment[0].lerp(segment[1], fraction),
                distance: target,
                total_length,
            });
        }
        travelled += segment_length;
    }

    Some(ArcLengthPlacement {
        position: last,
        distance: target,
        total_length,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn closest_point_is_clamped_to_segment_ends() {
        let a = Vec2::new(0.0, 0.0);
        let b = Vec2::new(2.0, 0.0);
        let length = a.distance(b);

        for query in [
            Vec2::new(-3.0, 1.0),
            Vec2::new(5.0, -2.0),
            Vec2::new(1.0, 4.0),
            Vec2::new(2.0, 0.0),
        ] {
            let projection = closest_point_on_segment(query, a, b);
            assert!((0.0..=1.0).contains(&projection.t));
            assert!(projection.point.distance(a) <= length + 1e-6);
            assert!(projection.point.distance(b) <= length + 1e-6);
            assert_relative_eq!(projection.point.y, 0.0);
        }

        let before = closest_point_on_segment(Vec2::new(-3.0, 1.0), a, b);
        assert_eq!(before.point, a);
        let after = closest_point_on_segment(Vec2::new(5.0, -2.0), a, b);
        assert_eq!(after.point, b);
    }

    #[test]
    fn degenerate_segment_projects_onto_its_point() {
        let p = Vec2::new(1.0, 1.0);
        let projection = closest_point_on_segment(Vec2::new(2.0, 1.0), p, p);
        assert_eq!(projection.point, p);
        assert_relative_eq!(projection.distance, 1.0);
    }

    #[test]
    fn closest_point_on_curves_reports_arc_length() {
        let curves = vec![
            vec![Vec2::new(0.0, 0.0), Vec2::new(1.0, 0.0), Vec2::new(1.0, 1.0)],
            vec![Vec2::new(5.0, 5.0), Vec2::new(6.0, 5.0)],
        ];
        let hit = closest_point_on_curves(Vec2::new(1.3, 0.5), &curves).expect("Treffer erwartet");

        assert_eq!(hit.curve_index, 0);
        assert_relative_eq!(hit.point.x, 1.0);
        assert_relative_eq!(hit.point.y, 0.5);
        assert_relative_eq!(hit.distance_along, 1.5);
        assert_relative_eq!(hit.distance, 0.3, epsilon = 1e-6);
    }

    #[test]
    fn closest_point_tie_prefers_first_curve() {
        let curves = vec![
            vec![Vec2::new(-1.0, 1.0), Vec2::new(1.0, 1.0)],
            vec![Vec2::new(-1.0, -1.0), Vec2::new(1.0, -1.0)],
        ];
        let hit = closest_point_on_curves(Vec2::ZERO, &curves).expect("Treffer erwartet");
        assert_eq!(hit.curve_index, 0);
    }

    #[test]
    fn closest_point_on_empty_input_is_none() {
        let curves: Vec<Vec<Vec2>> = Vec::new();
        assert!(closest_point_on_curves(Vec2::ZERO, &curves).is_none());
        assert!(closest_point_on_curves(Vec2::ZERO, &[vec![Vec2::ONE]]).is_none());
    }

    #[test]
    fn crossing_segments_intersect_with_parameters_in_range() {
        let p1 = Vec2::new(0.0, 0.0);
        let p2 = Vec2::new(2.0, 2.0);
        let q1 = Vec2::new(0.0, 2.0);
        let q2 = Vec2::new(2.0, 0.0);

        let hit = segment_intersection(p1, p2, q1, q2).expect("Schnittpunkt erwartet");
        assert_relative_eq!(hit.x, 1.0);
        assert_relative_eq!(hit.y, 1.0);

        let (s, t) = solve_2x2(2.0, -2.0, 2.0, 2.0, 0.0, 2.0).expect("Lösung erwartet");
        assert!((0.0..=1.0).contains(&s));
        assert!((0.0..=1.0).contains(&t));
    }

    #[test]
    fn parallel_segments_have_no_intersection() {
        let direction = Vec2::new(1.5, 0.5);
        let p1 = Vec2::new(0.0, 0.0);
        let q1 = Vec2::new(0.0, 1.0);
        assert!(segment_intersection(p1, p1 + direction, q1, q1 + direction).is_none());

        // kollinear und überlappend: ebenfalls nicht aufgelöst
        assert!(segment_intersection(p1, p1 + direction, p1, p1 + direction * 2.0).is_none());
    }

    #[test]
    fn intersection_outside_segments_is_rejected() {
        let p1 = Vec2::new(0.0, 0.0);
        let p2 = Vec2::new(1.0, 0.0);
        let q1 = Vec2::new(3.0, -1.0);
        let q2 = Vec2::new(3.0, 1.0);
        assert!(segment_intersection(p1, p2, q1, q2).is_none());
    }

    #[test]
    fn point_at_distance_interpolates_inside_segment() {
        let points = [Vec2::new(0.0, 0.0), Vec2::new(2.0, 0.0), Vec2::new(2.0, 3.0)];
        let placement = point_at_distance(&points, 3.0).expect("Platzierung erwartet");

        assert_relative_eq!(placement.position.x, 2.0);
        assert_relative_eq!(placement.position.y, 1.0);
        assert_relative_eq!(placement.distance, 3.0);
        assert_relative_eq!(placement.total_length, 5.0);
    }

    #[test]
    fn point_at_distance_clamps_to_curve_end() {
        let points = [Vec2::new(0.0, 0.0), Vec2::new(2.0, 0.0), Vec2::new(2.0, 3.0)];
        let placement = point_at_distance(&points, 42.0).expect("Platzierung erwartet");

        assert_eq!(placement.position, Vec2::new(2.0, 3.0));
        assert_relative_eq!(placement.distance, placement.total_length);

        let start = point_at_distance(&points, -1.0).expect("Platzierung erwartet");
        assert_eq!(start.position, Vec2::ZERO);
        assert_relative_eq!(start.distance, 0.0);
    }

    #[test]
    fn point_at_distance_on_empty_polyline_is_none() {
        assert!(point_at_distance(&[], 1.0).is_none());
    }

    #[test]
    fn proximity_uses_supplied_tolerance_class() {
        let a = Vec2::new(0.0, 0.0);
        let b = Vec2::new(0.1, 0.0);
        assert!(is_within(a, b, Tolerance::INTERACTIVE));
        assert!(!is_within(a, b, Tolerance::CURVE_ADJACENCY));
    }
}
