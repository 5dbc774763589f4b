//! Kurven-Graph: Inzidenz-Suche an einem Anker und Verlängerung über
//! gemeinsame Kurven-Endpunkte bis zum nächsten Standalone-Punkt.
//!
//! Alle Koinzidenz-Tests verwenden durchgängig die strikte Kurven-Toleranz.

use glam::Vec2;

use crate::core::{LayeredScene, ObjectId};
use crate::shared::geometry::distance_to_segment;
use crate::shared::Tolerance;

/// Laufrichtung entlang der Abtastpunkte einer Kurve.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    /// Mit aufsteigenden Indizes (+1)
    Forward,
    /// Mit absteigenden Indizes (−1)
    Reversed,
}

impl Orientation {
    /// Vorzeichen der Laufrichtung.
    pub fn sign(self) -> i8 {
        match self {
            Orientation::Forward => 1,
            Orientation::Reversed => -1,
        }
    }
}

/// Wie ein Pfad endet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathEnd {
    /// An einem Standalone-Punkt oder nach einem vollen Umlauf am Anker
    AtPoint,
    /// An einem natürlichen Kurvenende ohne Anschluss
    OpenEnd,
}

/// Kandidaten-Pfad vom Anker bis zum nächsten Halt.
///
/// Enthält immer mindestens zwei Punkte.
#[derive(Debug, Clone, PartialEq)]
pub struct TracedPath {
    points: Vec<Vec2>,
    shape: ObjectId,
    curve_index: usize,
    orientation: Orientation,
    end: PathEnd,
}

impl TracedPath {
    /// Punkte vom Anker bis zum fernen Ende.
    pub fn points(&self) -> &[Vec2] {
        &self.points
    }

    /// Shape, dem der Pfad zuletzt folgt.
    pub fn shape(&self) -> ObjectId {
        self.shape
    }

    /// Teilkurve, der der Pfad zuletzt folgt.
    pub fn curve_index(&self) -> usize {
        self.curve_index
    }

    /// Laufrichtung auf der zuletzt verfolgten Kurve.
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Art des fernen Endes.
    pub fn end(&self) -> PathEnd {
        self.end
    }

    /// Anker-Punkt (erster Punkt).
    pub fn start(&self) -> Vec2 {
        self.points[0]
    }

    /// Fernes Ende (letzter Punkt).
    pub fn far_end(&self) -> Vec2 {
        self.points[self.points.len() - 1]
    }

    /// Kleinste Distanz eines Punkts zu irgendeinem Segment des Pfads.
    pub fn distance_to(&self, pos: Vec2) -> f32 {
        self.points
            .windows(2)
            .map(|w| distance_to_segment(pos, w[0], w[1]))
            .fold(f32::INFINITY, f32::min)
    }
}

/// Fügt `point` an, sofern er nicht mit dem letzten Punkt zusammenfällt.
pub fn push_distinct(points: &mut Vec<Vec2>, point: Vec2, tolerance: Tolerance) {
    match points.last() {
        Some(last) if tolerance.contains(last.distance(point)) => {}
        _ => points.push(point),
    }
}

/// Fügt einen Halt-Punkt exakt an; fällt er mit dem letzten Punkt zusammen,
/// ersetzt er diesen.
fn push_stop(points: &mut Vec<Vec2>, stop: Vec2, tolerance: Tolerance) {
    match points.last_mut() {
        Some(last) if tolerance.contains(last.distance(stop)) => *last = stop,
        _ => points.push(stop),
    }
}

/// Verkettet bestätigte Pfade zu einem geschlossenen Umriss.
///
/// Der erste Punkt jedes Folgepfads entfällt; fallen Anfang und Ende
/// zusammen, wird das Ende exakt auf den Anfang gesetzt.
pub fn assemble_outline(paths: &[TracedPath], tolerance: Tolerance) -> Vec<Vec2> {
    let mut outline: Vec<Vec2> = Vec::new();
    for (i, path) in paths.iter().enumerate() {
        let skip = usize::from(i > 0);
        for point in path.points.iter().skip(skip) {
            push_distinct(&mut outline, *point, tolerance);
        }
    }
    if outline.len() > 1 {
        let first = outline[0];
        let last_index = outline.len() - 1;
        if tolerance.contains(outline[last_index].distance(first)) {
            outline[last_index] = first;
        }
    }
    outline
}

#[derive(Debug, Clone)]
struct GraphCurve {
    shape: ObjectId,
    curve_index: usize,
    points: Vec<Vec2>,
    closed: bool,
}

impl GraphCurve {
    fn head(&self) -> Vec2 {
        self.points[0]
    }

    fn tail(&self) -> Vec2 {
        self.points[self.points.len() - 1]
    }
}

/// Momentaufnahme aller Kurven und Standalone-Punkte des Haupt-Layers.
#[derive(Debug, Clone)]
pub struct CurveGraph {
    curves: Vec<GraphCurve>,
    stops: Vec<Vec2>,
    tolerance: Tolerance,
}

impl CurveGraph {
    /// Baut den Graphen aus der Szene (Speicherreihenfolge bleibt erhalten).
    pub fn from_scene(scene: &LayeredScene, tolerance: Tolerance) -> Self {
        let curves = scene
            .shapes()
            .flat_map(|(shape_id, shape)| {
                shape
                    .curves()
                    .into_iter()
                    .enumerate()
                    .filter(|(_, points)| points.len() >= 2)
                    .map(move |(curve_index, points)| GraphCurve {
                        shape: shape_id,
                        curve_index,
                        closed: tolerance.contains(points[0].distance(points[points.len() - 1])),
                        points,
                    })
            })
            .collect();
        let stops = scene.points().map(|(_, position)| position).collect();
        Self {
            curves,
            stops,
            tolerance,
        }
    }

    /// Anzahl der Kurven im Graphen.
    pub fn curve_count(&self) -> usize {
        self.curves.len()
    }

    /// Kandidaten am Anker, ohne unmittelbares Zurücklaufen auf `previous`.
    pub fn candidates(&self, anchor: Vec2, previous: Option<&TracedPath>) -> Vec<TracedPath> {
        let back_vertex = previous
            .filter(|path| path.points.len() >= 2)
            .map(|path| path.points[path.points.len() - 2]);

        self.incident_paths(anchor)
            .into_iter()
            .filter(|candidate| match back_vertex {
                Some(vertex) => !self.tolerance.contains(candidate.points[1].distance(vertex)),
                None => true,
            })
            .collect()
    }

    /// Alle Pfade, die vom Anker ausgehen (0, 1 oder 2 je berührter Kurve).
    pub fn incident_paths(&self, anchor: Vec2) -> Vec<TracedPath> {
        let mut paths = Vec::new();
        for (index, curve) in self.curves.iter().enumerate() {
            let points = &curve.points;
            let Some(segment) = points
                .windows(2)
                .position(|w| self.tolerance.contains(distance_to_segment(anchor, w[0], w[1])))
            else {
                continue;
            };

            for orientation in [Orientation::Reversed, Orientation::Forward] {
                let walk = self.discovery_walk(curve, anchor, segment, orientation);
                if walk.len() < 2 {
                    continue;
                }
                let (points, stopped) = self.truncate_at_stop(walk, anchor);
                let path = TracedPath {
                    points,
                    shape: curve.shape,
                    curve_index: curve.curve_index,
                    orientation,
                    end: if stopped || curve.closed {
                        PathEnd::AtPoint
                    } else {
                        PathEnd::OpenEnd
                    },
                };
                let path = match path.end {
                    PathEnd::OpenEnd => self.extend(path, index),
                    PathEnd::AtPoint => path,
                };
                if path.points.len() >= 2 {
                    paths.push(path);
                }
            }
        }
        log::debug!(
            "Kurven-Tracer: {} Kandidaten am Anker ({:.4}, {:.4})",
            paths.len(),
            anchor.x,
            anchor.y
        );
        paths
    }

    /// Punktfolge vom Anker in eine Richtung; geschlossene Kurven laufen
    /// über die Naht weiter bis zurück zum Anker.
    fn discovery_walk(
        &self,
        curve: &GraphCurve,
        anchor: Vec2,
        segment: usize,
        orientation: Orientation,
    ) -> Vec<Vec2> {
        let points = &curve.points;
        let last = points.len() - 1;
        let tol = self.tolerance;
        let mut walk = vec![anchor];

        match orientation {
            Orientation::Reversed => {
                for k in (0..=segment).rev() {
                    push_distinct(&mut walk, points[k], tol);
                }
                if curve.closed {
                    for k in (segment + 1..last).rev() {
                        push_distinct(&mut walk, points[k], tol);
                    }
                }
            }
            Orientation::Forward => {
                for point in &points[segment + 1..] {
                    push_distinct(&mut walk, *point, tol);
                }
                if curve.closed {
                    for point in &points[1..=segment] {
                        push_distinct(&mut walk, *point, tol);
                    }
                }
            }
        }

        if curve.closed && walk.len() > 1 {
            push_distinct(&mut walk, anchor, tol);
        }
        walk
    }

    /// Schneidet den Lauf am ersten Standalone-Punkt ab.
    ///
    /// Auf dem ersten Segment zählen Punkte am Startpunkt `origin` nicht.
    /// Liegen mehrere Punkte auf demselben Segment, gewinnt der zum
    /// Segmentanfang nächste.
    fn truncate_at_stop(&self, walk: Vec<Vec2>, origin: Vec2) -> (Vec<Vec2>, bool) {
        let tol = self.tolerance;
        for (k, segment) in walk.windows(2).enumerate() {
            let (a, b) = (segment[0], segment[1]);
            let stop = self
                .stops
                .iter()
                .filter(|stop| tol.contains(distance_to_segment(**stop, a, b)))
                .filter(|stop| k > 0 || !tol.contains(stop.distance(origin)))
                .min_by(|x, y| x.distance(a).total_cmp(&y.distance(a)));

            if let Some(&stop) = stop {
                let mut points = walk[..=k].to_vec();
                if points.len() > 1 {
                    push_stop(&mut points, stop, tol);
                } else {
                    points.push(stop);
                }
                return (points, true);
            }
        }
        (walk, false)
    }

    /// Verlängert ein offenes Ende über Kurven mit passendem Endpunkt.
    ///
    /// Jede Kurve kommt höchstens einmal im Pfad vor, auch die Startkurve.
    fn extend(&self, mut path: TracedPath, start: usize) -> TracedPath {
        let tol = self.tolerance;
        let mut visited: Vec<usize> = vec![start];

        while path.end == PathEnd::OpenEnd {
            let far = path.far_end();
            let next = self.curves.iter().enumerate().find_map(|(index, curve)| {
                if visited.contains(&index) {
                    return None;
                }
                let head = tol.contains(curve.head().distance(far));
                let tail = tol.contains(curve.tail().distance(far));
                match (head, tail) {
                    (true, true) => Some((index, path.orientation)),
                    (true, false) => Some((index, Orientation::Forward)),
                    (false, true) => Some((index, Orientation::Reversed)),
                    (false, false) => None,
                }
            });
            let Some((index, orientation)) = next else {
                break;
            };
            visited.push(index);

            let curve = &self.curves[index];
            let mut walk = vec![far];
            let samples: Box<dyn Iterator<Item = &Vec2>> = match orientation {
                Orientation::Forward => Box::new(curve.points.iter().skip(1)),
                Orientation::Reversed => Box::new(curve.points.iter().rev().skip(1)),
            };
            for point in samples {
                push_distinct(&mut walk, *point, tol);
            }

            let (walk, stopped) = self.truncate_at_stop(walk, far);
            path.points.extend(walk.into_iter().skip(1));
            path.shape = curve.shape;
            path.curve_index = curve.curve_index;
            path.orientation = orientation;
            if stopped {
                path.end = PathEnd::AtPoint;
            }
            log::debug!(
                "Kurven-Tracer: Pfad über Kurve {} von Shape {} verlängert",
                curve.curve_index,
                curve.shape
            );
        }
        path
    }
}

/// Index des Kandidaten mit dem nächsten Segment.
///
/// Ein Kandidat genau auf der Hover-Schwelle zählt noch als getroffen.
pub fn hovered_candidate(candidates: &[TracedPath], pos: Vec2, tolerance: Tolerance) -> Option<usize> {
    let mut best: Option<(usize, f32)> = None;
    for (index, candidate) in candidates.iter().enumerate() {
        let distance = candidate.distance_to(pos);
        if !tolerance.reaches(distance) {
            continue;
        }
        if best.is_none_or(|(_, current)| distance < current) {
            best = Some((index, distance));
        }
    }
    best.map(|(index, _)| index)
}
