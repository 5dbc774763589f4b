//! Auswahl, Rahmen-Geometrie und Zieh-Gesten des Auswahl-Tools.

use glam::{Affine2, Vec2};

use super::super::cursor::align_to_grid;
use super::super::{HighlightSet, SnappingCursor};
use crate::core::{ObjectId, SceneCommand, SceneObject};
use crate::shared::options::{
    HIGHLIGHT_SCALE, HIGHLIGHT_STROKE_WIDTH, SELECT_FRAME_PADDING, SELECT_MOVE_STEP,
    SELECT_ROTATOR_RADIUS, SELECT_ROTATOR_STEM, SELECT_SCALE_STEP,
};
use crate::shared::transform::{
    heading, rotation_about, rotation_angle, round_to_step, round_to_whole_degrees, scale_about,
    uniform_scale,
};
use crate::shared::Tolerance;

/// Griffe des Auswahlrahmens
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameHandle {
    /// Dreh-Griff über der Oberkante
    Rotate,
    /// Eck-Griff
    Scale,
}

/// Auswahlrahmen in Welt-Koordinaten.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SelectionFrame {
    /// Mitte der Bounding-Box (Zentrum für Drehen und Skalieren)
    pub center: Vec2,
    /// Gepolsterte Ecken, gegen den Uhrzeigersinn ab unten links
    pub corners: [Vec2; 4],
    /// Dreh-Griff; `None` für Objekte ohne Drehung/Skalierung (Punkte)
    pub rotator: Option<Vec2>,
}

impl SelectionFrame {
    /// Rahmen um eine Bounding-Box.
    pub fn around(bounds: (Vec2, Vec2), with_handles: bool) -> Self {
        let (lo, hi) = bounds;
        let center = (lo + hi) * 0.5;
        let lo = lo - Vec2::splat(SELECT_FRAME_PADDING);
        let hi = hi + Vec2::splat(SELECT_FRAME_PADDING);
        let rotator = with_handles.then(|| {
            Vec2::new(center.x, hi.y + SELECT_ROTATOR_STEM + SELECT_ROTATOR_RADIUS)
        });
        Self {
            center,
            corners: [lo, Vec2::new(hi.x, lo.y), hi, Vec2::new(lo.x, hi.y)],
            rotator,
        }
    }

    /// Mitte der Oberkante (Fuß des Dreh-Stiels).
    pub fn top_center(&self) -> Vec2 {
        (self.corners[2] + self.corners[3]) * 0.5
    }

    /// Griff unter dem Zeiger. Der Dreh-Griff hat Vorrang.
    pub fn handle_at(&self, pos: Vec2, tolerance: Tolerance) -> Option<FrameHandle> {
        let rotator = self.rotator?;
        if tolerance.contains(pos.distance(rotator)) {
            return Some(FrameHandle::Rotate);
        }
        self.corners
            .iter()
            .any(|corner| tolerance.contains(pos.distance(*corner)))
            .then_some(FrameHandle::Scale)
    }
}

/// Laufende Zieh-Geste mit ihren Startwerten.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DragGesture {
    /// Verschieben ab der Greif-Position
    Move {
        /// Szenen-Position beim Drücken
        grab: Vec2,
    },
    /// Drehen um `center`
    Rotate {
        /// Drehzentrum
        center: Vec2,
        /// Winkel Zentrum → Greif-Position
        grab_angle: f32,
    },
    /// Skalieren um `center`
    Scale {
        /// Skalierzentrum
        center: Vec2,
        /// Abstand Zentrum → Greif-Position
        grab_distance: f32,
    },
}

/// Zieh-Geste samt Objekt-Zustand beim Drücken.
#[derive(Debug, Clone)]
pub(crate) struct ActiveDrag {
    pub(crate) gesture: DragGesture,
    pub(crate) original: SceneObject,
}

/// Auswahl-Tool
pub struct SelectTool {
    pub(crate) cursor: SnappingCursor,
    pub(crate) selected: Option<ObjectId>,
    pub(crate) frame: Option<SelectionFrame>,
    pub(crate) frame_highlight: HighlightSet,
    pub(crate) drag: Option<ActiveDrag>,
    pub(crate) highlight_scale: f32,
    pub(crate) highlight_stroke_width: f32,
}

impl SelectTool {
    /// Erstellt ein neues Tool ohne Auswahl.
    pub fn new() -> Self {
        Self {
            cursor: SnappingCursor::new(),
            selected: None,
            frame: None,
            frame_highlight: HighlightSet::new(),
            drag: None,
            highlight_scale: HIGHLIGHT_SCALE,
            highlight_stroke_width: HIGHLIGHT_STROKE_WIDTH,
        }
    }

    /// Aktuell gewähltes Objekt.
    pub fn selected(&self) -> Option<ObjectId> {
        self.selected
    }

    /// Aktueller Auswahlrahmen.
    pub fn frame(&self) -> Option<&SelectionFrame> {
        self.frame.as_ref()
    }

    /// Laufende Zieh-Geste.
    pub fn gesture(&self) -> Option<DragGesture> {
        self.drag.as_ref().map(|drag| drag.gesture)
    }

    /// Wählt `id` und zeichnet den Rahmen um `object`.
    pub(crate) fn select(&mut self, id: ObjectId, object: &SceneObject) -> Vec<SceneCommand> {
        log::debug!("{} {} gewählt", object.kind_name(), id);
        self.selected = Some(id);
        self.show_frame(object)
    }

    /// Hebt die Auswahl auf.
    pub(crate) fn deselect(&mut self) -> Vec<SceneCommand> {
        self.selected = None;
        self.frame = None;
        self.drag = None;
        self.frame_highlight.clear()
    }

    /// Zeichnet den Rahmen neu.
    pub(crate) fn show_frame(&mut self, object: &SceneObject) -> Vec<SceneCommand> {
        let mut commands = self.frame_highlight.clear();
        let Some(bounds) = object.bounds() else {
            self.frame = None;
            return commands;
        };
        let frame = SelectionFrame::around(bounds, object.as_shape().is_some());

        let mut outline = frame.corners.to_vec();
        outline.push(frame.corners[0]);
        commands.extend(
            self.frame_highlight
                .add_polyline(&outline, self.highlight_stroke_width),
        );
        if let Some(rotator) = frame.rotator {
            let stem_end = rotator - Vec2::Y * SELECT_ROTATOR_RADIUS;
            commands.extend(
                self.frame_highlight
                    .add_polyline(&[frame.top_center(), stem_end], self.highlight_stroke_width),
            );
            commands.push(self.frame_highlight.add_point(rotator, self.highlight_scale));
            for corner in frame.corners {
                commands.push(self.frame_highlight.add_point(corner, self.highlight_scale));
            }
        }
        self.frame = Some(frame);
        commands
    }

    /// Startet eine Geste auf dem Objekt-Zustand `original`.
    pub(crate) fn begin_drag(&mut self, gesture: DragGesture, original: SceneObject) {
        log::debug!("Zieh-Geste gestartet: {:?}", gesture);
        self.drag = Some(ActiveDrag { gesture, original });
    }

    /// Objekt nach der laufenden Geste bis zur Position `pos`.
    ///
    /// Jeder Schritt rechnet vom Zustand beim Drücken aus, Rundungen summieren sich nicht.
    pub(crate) fn dragged_object(&self, pos: Vec2) -> Option<SceneObject> {
        let drag = self.drag.as_ref()?;
        let transform = match drag.gesture {
            DragGesture::Move { grab } => {
                Affine2::from_translation(align_to_grid(pos - grab, SELECT_MOVE_STEP))
            }
            DragGesture::Rotate { center, grab_angle } => {
                let base = rotation_angle(&drag.original.as_shape()?.transform);
                let target = round_to_whole_degrees(base + heading(center, pos) - grab_angle);
                rotation_about(center, target - base)
            }
            DragGesture::Scale {
                center,
                grab_distance,
            } => {
                let base = uniform_scale(&drag.original.as_shape()?.transform);
                if base <= f32::EPSILON || grab_distance <= f32::EPSILON {
                    return None;
                }
                let raw = pos.distance(center) / grab_distance * base;
                let target = round_to_step(raw, SELECT_SCALE_STEP).max(SELECT_SCALE_STEP);
                scale_about(center, target / base)
            }
        };
        Some(drag.original.transformed(transform))
    }

    /// Entfernt das gewählte Objekt aus der Szene.
    pub(crate) fn delete_selected(&mut self) -> Vec<SceneCommand> {
        let Some(id) = self.selected else {
            return Vec::new();
        };
        let mut commands = self.deselect();
        commands.push(SceneCommand::RemoveFromMainLayer { id });
        log::info!("Objekt {} gelöscht", id);
        commands
    }
}

impl Default for SelectTool {
    fn default() -> Self {
        Self::new()
    }
}
