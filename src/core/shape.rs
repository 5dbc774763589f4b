//! Shapes: eine oder mehrere abgetastete Kurven in einem flachen Punkt-Array.

use glam::{Affine2, Vec2};

use super::SceneError;
use crate::shared::options::SHAPE_STROKE_WIDTH;
use crate::shared::Tolerance;

/// Inklusiver Index-Bereich einer Teilkurve im Punkt-Array.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurveRange {
    /// Erster Punkt-Index
    pub start: usize,
    /// Letzter Punkt-Index (inklusiv)
    pub end: usize,
}

impl CurveRange {
    /// Erstellt einen neuen Bereich (ohne Validierung).
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Anzahl der Punkte im Bereich.
    pub fn point_count(&self) -> usize {
        (self.end + 1).saturating_sub(self.start)
    }
}

/// Darstellungs-Attribute eines Shapes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShapeStyle {
    /// Gefüllte Fläche (geschlossene Polygone)
    pub fill: bool,
    /// Linienstärke in Szenen-Einheiten
    pub stroke_width: f32,
    /// Zusätzliche Skalierung (Highlights)
    pub scale: f32,
}

impl Default for ShapeStyle {
    fn default() -> Self {
        Self {
            fill: false,
            stroke_width: SHAPE_STROKE_WIDTH,
            scale: 1.0,
        }
    }
}

/// Shape mit lokalem Punkt-Array, Kurvenbereichen und Transformation lokal → Welt.
#[derive(Debug, Clone, PartialEq)]
pub struct Shape {
    points: Vec<Vec2>,
    curve_ranges: Vec<CurveRange>,
    /// Transformation lokal → Welt
    pub transform: Affine2,
    /// Darstellungs-Attribute
    pub style: ShapeStyle,
}

impl Shape {
    /// Erstellt ein Shape und prüft alle Kurvenbereiche.
    ///
    /// Jeder Bereich muss `start < end` erfüllen und innerhalb des Punkt-Arrays liegen.
    pub fn new(points: Vec<Vec2>, curve_ranges: Vec<CurveRange>) -> Result<Self, SceneError> {
        if points.is_empty() {
            return Err(SceneError::EmptyShape);
        }
        if curve_ranges.is_empty() {
            return Err(SceneError::NoCurves);
        }
        for (index, range) in curve_ranges.iter().enumerate() {
            if range.start >= range.end || range.end >= points.len() {
                return Err(SceneError::InvalidCurveRange {
                    index,
                    start: range.start,
                    end: range.end,
                    point_count: points.len(),
                });
            }
        }
        Ok(Self {
            points,
            curve_ranges,
            transform: Affine2::IDENTITY,
            style: ShapeStyle::default(),
        })
    }

    /// Offene Polylinie aus einer Kurve.
    pub fn polyline(points: Vec<Vec2>) -> Result<Self, SceneError> {
        let end = points.len().saturating_sub(1);
        Self::new(points, vec![CurveRange::new(0, end)])
    }

    /// Geschlossenes, gefülltes Polygon. Der Ring wird geschlossen, falls nötig.
    pub fn polygon(mut points: Vec<Vec2>) -> Result<Self, SceneError> {
        if let (Some(&first), Some(&last)) = (points.first(), points.last()) {
            if points.len() > 1 && first != last {
                points.push(first);
            }
        }
        let mut shape = Self::polyline(points)?;
        shape.style.fill = true;
        Ok(shape)
    }

    /// Gerade Linie aus zwei Punkten.
    pub fn line(start: Vec2, end: Vec2) -> Self {
        Self {
            points: vec![start, end],
            curve_ranges: vec![CurveRange::new(0, 1)],
            transform: Affine2::IDENTITY,
            style: ShapeStyle::default(),
        }
    }

    /// Mehrere Kurven zu einem Shape zusammenfassen.
    pub fn from_curves(curves: Vec<Vec<Vec2>>) -> Result<Self, SceneError> {
        let mut points = Vec::new();
        let mut ranges = Vec::with_capacity(curves.len());
        for curve in curves {
            let start = points.len();
            let count = curve.len();
            points.extend(curve);
            ranges.push(CurveRange::new(start, (start + count).saturating_sub(1)));
        }
        Self::new(points, ranges)
    }

    /// Setzt die Transformation lokal → Welt.
    pub fn with_transform(mut self, transform: Affine2) -> Self {
        self.transform = transform;
        self
    }

    /// Setzt die Darstellungs-Attribute.
    pub fn with_style(mut self, style: ShapeStyle) -> Self {
        self.style = style;
        self
    }

    /// Anzahl der Punkte (alle Kurven).
    pub fn point_count(&self) -> usize {
        self.points.len()
    }

    /// Lokale Punkte ohne Transformation.
    pub fn local_points(&self) -> &[Vec2] {
        &self.points
    }

    /// Kurvenbereiche im Punkt-Array.
    pub fn curve_ranges(&self) -> &[CurveRange] {
        &self.curve_ranges
    }

    /// Anzahl der Teilkurven.
    pub fn curve_count(&self) -> usize {
        self.curve_ranges.len()
    }

    /// Alle Punkte in Welt-Koordinaten.
    pub fn world_points(&self) -> Vec<Vec2> {
        self.points
            .iter()
            .map(|p| self.transform.transform_point2(*p))
            .collect()
    }

    /// Achsenparallele Bounding-Box in Welt-Koordinaten als (min, max).
    pub fn bounds(&self) -> (Vec2, Vec2) {
        self.points.iter().fold(
            (Vec2::splat(f32::INFINITY), Vec2::splat(f32::NEG_INFINITY)),
            |(lo, hi), p| {
                let world = self.transform.transform_point2(*p);
                (lo.min(world), hi.max(world))
            },
        )
    }

    /// Teilkurve `index` in Welt-Koordinaten.
    pub fn curve(&self, index: usize) -> Option<Vec<Vec2>> {
        let range = self.curve_ranges.get(index)?;
        Some(
            self.points[range.start..=range.end]
                .iter()
                .map(|p| self.transform.transform_point2(*p))
                .collect(),
        )
    }

    /// Alle Teilkurven in Welt-Koordinaten, in Speicherreihenfolge.
    pub fn curves(&self) -> Vec<Vec<Vec2>> {
        (0..self.curve_count())
            .filter_map(|index| self.curve(index))
            .collect()
    }

    /// Geschlossen, wenn erster und letzter Punkt innerhalb der Toleranz liegen.
    pub fn is_curve_closed(&self, index: usize, tolerance: Tolerance) -> bool {
        self.curve_ranges.get(index).is_some_and(|range| {
            let first = self.points[range.start];
            let last = self.points[range.end];
            tolerance.contains(first.distance(last))
        })
    }
}
