//! State-Definitionen und Platzierungs-Logik des Punkt-auf-Kurve-Tools.

use glam::Vec2;

use super::super::{HighlightSet, SnappingCursor, ToolError};
use crate::core::{ObjectId, PointObject, SceneCommand};
use crate::shared::geometry::{
    closest_point_on_curves, point_at_distance, polyline_length, ArcLengthPlacement,
};
use crate::shared::options::{HIGHLIGHT_SCALE, HIGHLIGHT_STROKE_WIDTH};

/// Modi des Punkt-auf-Kurve-Tools
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlacementMode {
    /// Kurve unter dem Zeiger wählen
    SelectCurve,
    /// Punkt entlang der gewählten Kurve positionieren
    PositionPoint,
}

/// Aktuell hervorgehobene Teilkurve.
#[derive(Debug, Clone, PartialEq)]
pub struct HighlightedCurve {
    /// Shape der Kurve
    pub shape: ObjectId,
    /// Teilkurve im Shape
    pub curve_index: usize,
    /// Abtastpunkte in Welt-Koordinaten
    pub points: Vec<Vec2>,
    /// Gesamtlänge
    pub length: f32,
}

impl HighlightedCurve {
    /// Erfasst eine Teilkurve samt Länge.
    pub fn new(shape: ObjectId, curve_index: usize, points: Vec<Vec2>) -> Self {
        let length = polyline_length(&points);
        Self {
            shape,
            curve_index,
            points,
            length,
        }
    }

    /// Projiziert eine Position auf die Kurve.
    pub fn project(&self, pos: Vec2) -> Option<ArcLengthPlacement> {
        let hit = closest_point_on_curves(pos, std::slice::from_ref(&self.points))?;
        Some(ArcLengthPlacement {
            position: hit.point,
            distance: hit.distance_along,
            total_length: self.length,
        })
    }
}

/// Punkt-auf-Kurve-Tool
pub struct PointOnCurveTool {
    pub(crate) cursor: SnappingCursor,
    pub(crate) mode: PlacementMode,
    pub(crate) curve: Option<HighlightedCurve>,
    /// Highlight der gewählten Kurve
    pub(crate) curve_highlight: HighlightSet,
    /// Positions-Marker im Positionierungs-Modus
    pub(crate) marker: HighlightSet,
    pub(crate) readout: Option<ArcLengthPlacement>,
    pub(crate) highlight_scale: f32,
    pub(crate) highlight_stroke_width: f32,
}

impl PointOnCurveTool {
    /// Erstellt ein neues Tool im Kurvenwahl-Modus.
    pub fn new() -> Self {
        Self {
            cursor: SnappingCursor::new(),
            mode: PlacementMode::SelectCurve,
            curve: None,
            curve_highlight: HighlightSet::new(),
            marker: HighlightSet::new(),
            readout: None,
            highlight_scale: HIGHLIGHT_SCALE,
            highlight_stroke_width: HIGHLIGHT_STROKE_WIDTH,
        }
    }

    /// Aktueller Modus.
    pub fn mode(&self) -> PlacementMode {
        self.mode
    }

    /// Aktuell hervorgehobene Kurve.
    pub fn highlighted_curve(&self) -> Option<&HighlightedCurve> {
        self.curve.as_ref()
    }

    /// Ersetzt die hervorgehobene Kurve (oder entfernt sie).
    pub(crate) fn set_curve(&mut self, curve: Option<HighlightedCurve>) -> Vec<SceneCommand> {
        let mut commands = self.curve_highlight.clear();
        if let Some(curve) = &curve {
            commands.extend(
                self.curve_highlight
                    .add_polyline(&curve.points, self.highlight_stroke_width),
            );
        }
        self.curve = curve;
        commands
    }

    /// Aktualisiert Anzeige und Marker.
    pub(crate) fn show_placement(&mut self, placement: ArcLengthPlacement) -> Vec<SceneCommand> {
        let mut commands = self.marker.clear();
        commands.push(
            self.marker
                .add_point(placement.position, self.highlight_scale),
        );
        self.readout = Some(placement);
        commands
    }

    /// Übernimmt einen Punkt an `position` und kehrt zur Kurvenwahl zurück.
    pub(crate) fn commit_point(&mut self, position: Vec2) -> Vec<SceneCommand> {
        let mut commands = self.reset();
        commands.push(SceneCommand::AddToMainLayer {
            id: ObjectId::new(),
            object: PointObject::new(position).into(),
        });
        log::info!(
            "Punkt auf Kurve gesetzt bei ({:.3}, {:.3})",
            position.x,
            position.y
        );
        commands
    }

    /// Setzt den Positions-Marker in Bogenlänge `distance` auf die gewählte Kurve.
    ///
    /// Distanzen außerhalb der Kurvenlänge werden geklemmt. Der Punkt entsteht
    /// erst beim nächsten Klick.
    pub fn place(&mut self, distance: f32) -> Result<Vec<SceneCommand>, ToolError> {
        if self.mode != PlacementMode::PositionPoint {
            return Err(ToolError::NotPositioning);
        }
        let curve = self.curve.as_ref().ok_or(ToolError::NoHighlightedCurve)?;
        let placement =
            point_at_distance(&curve.points, distance).ok_or(ToolError::NoHighlightedCurve)?;
        log::debug!(
            "Platzierung: Ziel {:.3}, erreicht {:.3} von {:.3}",
            distance,
            placement.distance,
            placement.total_length
        );
        Ok(self.show_placement(placement))
    }

    /// Entfernt alle Highlights und kehrt zur Kurvenwahl zurück.
    pub(crate) fn reset(&mut self) -> Vec<SceneCommand> {
        let mut commands = self.marker.clear();
        commands.extend(self.curve_highlight.clear());
        self.curve = None;
        self.mode = PlacementMode::SelectCurve;
        commands
    }
}

impl Default for PointOnCurveTool {
    fn default() -> Self {
        Self::new()
    }
}
