//! State-Definitionen, Konstruktor und Commit-Logik des Kurven-Tracers.

use glam::Vec2;

use super::super::{HighlightSet, SnappingCursor, ToolError};
use super::tracer::{assemble_outline, CurveGraph, TracedPath};
use crate::core::{LayeredScene, ObjectId, SceneCommand, Shape};
use crate::shared::options::{
    HIGHLIGHT_SCALE, HIGHLIGHT_STROKE_WIDTH, HOVER_THRESHOLD, SHAPE_STROKE_WIDTH,
};
use crate::shared::Tolerance;

/// Laufende Tracing-Sitzung.
#[derive(Debug, Clone)]
pub struct TracingSession {
    /// Ursprungs-Anker (Schließen, wenn ein Pfad hierher zurückführt)
    pub origin: Vec2,
    /// Aktueller Anker (fernes Ende des zuletzt übernommenen Pfads)
    pub anchor: Vec2,
    /// Bereits übernommene Pfade in Reihenfolge
    pub committed: Vec<TracedPath>,
    /// Kandidaten am aktuellen Anker
    pub candidates: Vec<TracedPath>,
    /// Index des hervorgehobenen Kandidaten
    pub hovered: Option<usize>,
}

/// Phasen des Kurven-Tracers
#[derive(Debug, Clone)]
pub enum TracerPhase {
    /// Kein Anker gewählt; ggf. Punkt unter dem Zeiger hervorgehoben
    Idle {
        /// Hervorgehobener Standalone-Punkt
        hovered_point: Option<Vec2>,
    },
    /// Sitzung läuft
    Extending(TracingSession),
}

/// Kurven-Graph-Tracer
pub struct ShapeFromCurvesTool {
    pub(crate) cursor: SnappingCursor,
    pub(crate) phase: TracerPhase,
    /// Hover-Highlights (Punkt im Leerlauf bzw. Kandidat in der Sitzung)
    pub(crate) hover_highlights: HighlightSet,
    /// Highlights der Sitzung (Ursprung, übernommene Pfade)
    pub(crate) session_highlights: HighlightSet,
    pub(crate) adjacency: Tolerance,
    pub(crate) point_pick: Tolerance,
    pub(crate) hover: Tolerance,
    pub(crate) highlight_scale: f32,
    pub(crate) highlight_stroke_width: f32,
    pub(crate) stroke_width: f32,
}

impl ShapeFromCurvesTool {
    /// Erstellt einen neuen Tracer im Leerlauf.
    pub fn new() -> Self {
        Self {
            cursor: SnappingCursor::new(),
            phase: TracerPhase::Idle {
                hovered_point: None,
            },
            hover_highlights: HighlightSet::new(),
            session_highlights: HighlightSet::new(),
            adjacency: Tolerance::CURVE_ADJACENCY,
            point_pick: Tolerance::INTERACTIVE,
            hover: Tolerance::Proximity(HOVER_THRESHOLD),
            highlight_scale: HIGHLIGHT_SCALE,
            highlight_stroke_width: HIGHLIGHT_STROKE_WIDTH,
            stroke_width: SHAPE_STROKE_WIDTH,
        }
    }

    /// Aktuelle Phase.
    pub fn phase(&self) -> &TracerPhase {
        &self.phase
    }

    /// Kandidaten am aktuellen Anker (leer im Leerlauf).
    pub fn candidates(&self) -> &[TracedPath] {
        match &self.phase {
            TracerPhase::Extending(session) => &session.candidates,
            TracerPhase::Idle { .. } => &[],
        }
    }

    /// Bereits übernommene Pfade (leer im Leerlauf).
    pub fn committed(&self) -> &[TracedPath] {
        match &self.phase {
            TracerPhase::Extending(session) => &session.committed,
            TracerPhase::Idle { .. } => &[],
        }
    }

    /// Startet eine Sitzung an `anchor` und sammelt die ersten Kandidaten.
    pub fn start_at(&mut self, anchor: Vec2, scene: &LayeredScene) -> Vec<SceneCommand> {
        let graph = CurveGraph::from_scene(scene, self.adjacency);
        let candidates = graph.candidates(anchor, None);
        log::info!(
            "Kurven-Tracer gestartet: {} Kurven, {} Kandidaten",
            graph.curve_count(),
            candidates.len()
        );

        let mut commands = self.hover_highlights.clear();
        commands.push(
            self.session_highlights
                .add_point(anchor, self.highlight_scale),
        );
        self.phase = TracerPhase::Extending(TracingSession {
            origin: anchor,
            anchor,
            committed: Vec::new(),
            candidates,
            hovered: None,
        });
        commands
    }

    /// Übernimmt den Kandidaten `index`.
    ///
    /// Führt er zum Ursprung zurück, wird der Umriss als gefülltes Polygon
    /// in den Haupt-Layer übernommen und die Sitzung beendet. Sonst wird sein
    /// fernes Ende zum neuen Anker (auch an einem offenen Ende).
    pub fn commit_candidate(
        &mut self,
        index: usize,
        scene: &LayeredScene,
    ) -> Result<Vec<SceneCommand>, ToolError> {
        let TracerPhase::Extending(session) = &mut self.phase else {
            return Err(ToolError::NoCandidates);
        };
        let count = session.candidates.len();
        if count == 0 {
            return Err(ToolError::NoCandidates);
        }
        if index >= count {
            return Err(ToolError::CandidateOutOfRange { index, count });
        }
        let chosen = session.candidates[index].clone();
        let far_end = chosen.far_end();

        if self.adjacency.contains(far_end.distance(session.origin)) {
            let mut paths = session.committed.clone();
            paths.push(chosen);
            let outline = assemble_outline(&paths, self.adjacency);
            let mut polygon = Shape::polygon(outline)?;
            polygon.style.stroke_width = self.stroke_width;

            let mut commands = self.hover_highlights.clear();
            commands.extend(self.session_highlights.clear());
            commands.push(SceneCommand::AddToMainLayer {
                id: ObjectId::new(),
                object: polygon.into(),
            });
            log::info!("Kurven-Tracer: Fläche aus {} Pfaden geschlossen", paths.len());
            self.phase = TracerPhase::Idle {
                hovered_point: None,
            };
            return Ok(commands);
        }

        let graph = CurveGraph::from_scene(scene, self.adjacency);
        let candidates = graph.candidates(far_end, Some(&chosen));
        if candidates.is_empty() {
            log::debug!("Kurven-Tracer: Sackgasse bei ({:.4}, {:.4})", far_end.x, far_end.y);
        }

        let mut commands = self.hover_highlights.clear();
        commands.extend(
            self.session_highlights
                .add_polyline(chosen.points(), self.highlight_stroke_width),
        );
        commands.push(
            self.session_highlights
                .add_point(far_end, self.highlight_scale),
        );
        session.anchor = far_end;
        session.committed.push(chosen);
        session.candidates = candidates;
        session.hovered = None;
        Ok(commands)
    }

    /// Bricht die Sitzung ab und entfernt alle Highlights.
    pub(crate) fn reset(&mut self) -> Vec<SceneCommand> {
        let mut commands = self.hover_highlights.clear();
        commands.extend(self.session_highlights.clear());
        self.phase = TracerPhase::Idle {
            hovered_point: None,
        };
        commands
    }
}

impl Default for ShapeFromCurvesTool {
    fn default() -> Self {
        Self::new()
    }
}
