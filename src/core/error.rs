//! Fehlertypen der Szenen-Datenmodelle.

use thiserror::Error;

/// Fehler beim Aufbau von Shapes.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SceneError {
    /// Shape ohne Punkte
    #[error("Shape enthält keine Punkte")]
    EmptyShape,

    /// Shape ohne Teilkurven
    #[error("Shape enthält keine Kurven")]
    NoCurves,

    /// Kurvenbereich verletzt `start < end < Punktanzahl`
    #[error("ungültiger Kurvenbereich #{index}: [{start}, {end}] bei {point_count} Punkten")]
    InvalidCurveRange {
        /// Index der Teilkurve
        index: usize,
        /// Erster Punkt-Index (inklusiv)
        start: usize,
        /// Letzter Punkt-Index (inklusiv)
        end: usize,
        /// Anzahl Punkte im Shape
        point_count: usize,
    },
}
