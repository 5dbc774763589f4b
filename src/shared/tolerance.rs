//! Toleranzklassen für "gleicher Punkt"-Vergleiche.
//!
//! Es gibt genau zwei Klassen, die nicht vermischt werden dürfen:
//! - `Adjacency`: strikte Kurven-Koinzidenz (≈1e-4), nur im Kurven-Graph-Tracer
//! - `Proximity`: lockere Interaktions-Nähe (≈0.2), nur für Snapping und Hover
//!
//! Jeder Algorithmus erhält die Klasse als Wert und verwendet sie durchgängig.

use super::options::{CURVE_ADJACENCY_EPSILON, SNAP_PROXIMITY};

/// Toleranz für Positionsvergleiche, getaggt mit ihrer Klasse.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Tolerance {
    /// Strikte Koinzidenz zweier Kurvenpunkte (Kurven-Graph)
    Adjacency(f32),
    /// Interaktive Nähe zum Mauszeiger (Snapping, Hover)
    Proximity(f32),
}

impl Tolerance {
    /// Standard-Toleranz für Kurven-Koinzidenz.
    pub const CURVE_ADJACENCY: Tolerance = Tolerance::Adjacency(CURVE_ADJACENCY_EPSILON);
    /// Standard-Toleranz für interaktives Snapping.
    pub const INTERACTIVE: Tolerance = Tolerance::Proximity(SNAP_PROXIMITY);

    /// Gibt den Schwellwert in Welteinheiten zurück.
    pub fn value(self) -> f32 {
        match self {
            Tolerance::Adjacency(v) | Tolerance::Proximity(v) => v,
        }
    }

    /// `true` wenn die Distanz strikt unterhalb des Schwellwerts liegt.
    pub fn contains(self, distance: f32) -> bool {
        distance < self.value()
    }

    /// `true` wenn die Distanz den Schwellwert nicht überschreitet (Hover).
    pub fn reaches(self, distance: f32) -> bool {
        distance <= self.value()
    }

    /// Ist dies die strikte Kurven-Klasse?
    pub fn is_adjacency(self) -> bool {
        matches!(self, Tolerance::Adjacency(_))
    }
}
