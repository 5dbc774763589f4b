//! Phasen und Highlights des Dreh-um-Punkt-Tools.

use glam::Vec2;

use super::super::{HighlightSet, SnappingCursor};
use crate::core::{ObjectId, SceneCommand, Shape};
use crate::shared::options::{HIGHLIGHT_SCALE, HIGHLIGHT_STROKE_WIDTH, ROTATE_ARM_MIN_LENGTH};
use crate::shared::transform::rotation_about;

/// Phasen des Dreh-um-Punkt-Tools
#[derive(Debug, Clone, PartialEq)]
pub enum RotatePhase {
    /// Shape unter dem Zeiger anklicken
    PickShape,
    /// Standalone-Punkt als Drehpunkt anklicken
    PickPivot {
        /// Gewähltes Shape
        shape: ObjectId,
    },
    /// Arm sichtbar, wartet auf Greifen
    Armed {
        /// Gewähltes Shape
        shape: ObjectId,
        /// Drehpunkt
        pivot: Vec2,
        /// Ende des Arms
        handle: Vec2,
    },
    /// Arm wird gezogen
    Rotating {
        /// Gewähltes Shape
        shape: ObjectId,
        /// Drehpunkt
        pivot: Vec2,
        /// Länge des Arms
        arm_length: f32,
        /// Arm-Winkel beim Greifen
        start_angle: f32,
        /// Aktueller Arm-Winkel
        angle: f32,
        /// Shape beim Greifen
        original: Shape,
    },
}

/// Dreh-um-Punkt-Tool
pub struct RotateAboutPointTool {
    pub(crate) cursor: SnappingCursor,
    pub(crate) phase: RotatePhase,
    /// Umriss des gewählten Shapes
    pub(crate) outline: HighlightSet,
    /// Drehpunkt, Arm und Griff
    pub(crate) arm: HighlightSet,
    pub(crate) highlight_scale: f32,
    pub(crate) highlight_stroke_width: f32,
}

/// Arm-Ende: Shape-Mitte, mindestens `ROTATE_ARM_MIN_LENGTH` vom Drehpunkt entfernt.
pub(crate) fn arm_handle(pivot: Vec2, shape: &Shape) -> Vec2 {
    let (lo, hi) = shape.bounds();
    let offset = (lo + hi) * 0.5 - pivot;
    if offset.length() >= ROTATE_ARM_MIN_LENGTH {
        return pivot + offset;
    }
    let direction = offset.try_normalize().unwrap_or(Vec2::X);
    pivot + direction * ROTATE_ARM_MIN_LENGTH
}

impl RotateAboutPointTool {
    /// Erstellt ein neues Tool in der Shape-Wahl.
    pub fn new() -> Self {
        Self {
            cursor: SnappingCursor::new(),
            phase: RotatePhase::PickShape,
            outline: HighlightSet::new(),
            arm: HighlightSet::new(),
            highlight_scale: HIGHLIGHT_SCALE,
            highlight_stroke_width: HIGHLIGHT_STROKE_WIDTH,
        }
    }

    /// Aktuelle Phase.
    pub fn phase(&self) -> &RotatePhase {
        &self.phase
    }

    /// Zeichnet den Umriss aller Teilkurven neu.
    pub(crate) fn show_outline(&mut self, shape: &Shape) -> Vec<SceneCommand> {
        let mut commands = self.outline.clear();
        for curve in shape.curves() {
            commands.extend(
                self.outline
                    .add_polyline(&curve, self.highlight_stroke_width),
            );
        }
        commands
    }

    /// Zeichnet Drehpunkt, Arm und Griff neu.
    pub(crate) fn show_arm(&mut self, pivot: Vec2, handle: Vec2) -> Vec<SceneCommand> {
        let mut commands = self.arm.clear();
        commands.push(self.arm.add_point(pivot, self.highlight_scale));
        commands.extend(
            self.arm
                .add_polyline(&[pivot, handle], self.highlight_stroke_width),
        );
        commands.push(self.arm.add_point(handle, self.highlight_scale));
        commands
    }

    /// Dreht das gegriffene Shape auf den Arm-Winkel `angle`.
    ///
    /// Liefert Shape und neues Arm-Ende; `None` außerhalb der Dreh-Phase.
    pub(crate) fn rotate_to(&mut self, angle: f32) -> Option<(ObjectId, Shape, Vec2)> {
        let RotatePhase::Rotating {
            shape,
            pivot,
            arm_length,
            start_angle,
            angle: current,
            original,
        } = &mut self.phase
        else {
            return None;
        };
        *current = angle;
        let transform = rotation_about(*pivot, angle - *start_angle) * original.transform;
        let rotated = original.clone().with_transform(transform);
        let handle = *pivot + Vec2::from_angle(angle) * *arm_length;
        Some((*shape, rotated, handle))
    }

    /// Entfernt alle Highlights und kehrt zur Shape-Wahl zurück.
    pub(crate) fn reset(&mut self) -> Vec<SceneCommand> {
        let mut commands = self.arm.clear();
        commands.extend(self.outline.clear());
        self.phase = RotatePhase::PickShape;
        commands
    }
}

impl Default for RotateAboutPointTool {
    fn default() -> Self {
        Self::new()
    }
}
