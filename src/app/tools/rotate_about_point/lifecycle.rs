//! SketchTool-Implementierung des Dreh-um-Punkt-Tools.

use glam::Vec2;

use super::super::common::shapes_under_pointer;
use super::super::{SketchTool, SnappingCursor, ToolContext, ToolError};
use super::state::{arm_handle, RotateAboutPointTool, RotatePhase};
use crate::core::SceneCommand;
use crate::shared::geometry::distance_to_segment;
use crate::shared::transform::heading;
use crate::shared::{EditorOptions, Tolerance};

impl SketchTool for RotateAboutPointTool {
    fn name(&self) -> &str {
        "Um Punkt drehen"
    }

    fn status_text(&self) -> &str {
        match self.phase {
            RotatePhase::PickShape => "Shape anklicken",
            RotatePhase::PickPivot { .. } => "Drehpunkt anklicken",
            RotatePhase::Armed { .. } => "Arm greifen und ziehen",
            RotatePhase::Rotating { .. } => "Loslassen beendet die Drehung",
        }
    }

    fn on_pointer_move(
        &mut self,
        screen_pos: Vec2,
        ctx: &ToolContext,
    ) -> Result<Vec<SceneCommand>, ToolError> {
        self.cursor.update(screen_pos, ctx);
        let RotatePhase::Rotating { pivot, .. } = self.phase else {
            return Ok(Vec::new());
        };
        let angle = heading(pivot, self.cursor.raw_position);
        let Some((id, rotated, handle)) = self.rotate_to(angle) else {
            return Ok(Vec::new());
        };

        let mut commands = self.show_outline(&rotated);
        commands.extend(self.show_arm(pivot, handle));
        commands.push(SceneCommand::AddToMainLayer {
            id,
            object: rotated.into(),
        });
        Ok(commands)
    }

    fn on_pointer_down(
        &mut self,
        screen_pos: Vec2,
        ctx: &ToolContext,
    ) -> Result<Vec<SceneCommand>, ToolError> {
        self.cursor.update(screen_pos, ctx);
        let pos = self.cursor.raw_position;
        let pick = Tolerance::Proximity(self.cursor.pick_threshold());

        match self.phase.clone() {
            RotatePhase::PickShape => {
                let Some(hit) = shapes_under_pointer(ctx.scene, pos, pick.value()).pop() else {
                    return Ok(Vec::new());
                };
                let Some(shape) = ctx.scene.shape(hit.id) else {
                    return Ok(Vec::new());
                };
                let commands = self.show_outline(shape);
                self.phase = RotatePhase::PickPivot { shape: hit.id };
                Ok(commands)
            }
            RotatePhase::PickPivot { shape } => {
                let Some(pivot) = ctx.scene.nearest_point_within(pos, pick.value()) else {
                    return Ok(Vec::new());
                };
                let Some(target) = ctx.scene.shape(shape) else {
                    log::warn!("Shape {} nicht mehr vorhanden", shape);
                    return Ok(self.reset());
                };
                let handle = arm_handle(pivot.position, target);
                let commands = self.show_arm(pivot.position, handle);
                self.phase = RotatePhase::Armed {
                    shape,
                    pivot: pivot.position,
                    handle,
                };
                Ok(commands)
            }
            RotatePhase::Armed {
                shape,
                pivot,
                handle,
            } => {
                if !pick.contains(distance_to_segment(pos, pivot, handle)) {
                    return Ok(Vec::new());
                }
                let Some(original) = ctx.scene.shape(shape).cloned() else {
                    log::warn!("Shape {} nicht mehr vorhanden", shape);
                    return Ok(self.reset());
                };
                let start_angle = heading(pivot, handle);
                self.phase = RotatePhase::Rotating {
                    shape,
                    pivot,
                    arm_length: pivot.distance(handle),
                    start_angle,
                    angle: start_angle,
                    original,
                };
                Ok(Vec::new())
            }
            RotatePhase::Rotating { .. } => Ok(Vec::new()),
        }
    }

    fn on_pointer_up(
        &mut self,
        _screen_pos: Vec2,
        _ctx: &ToolContext,
    ) -> Result<Vec<SceneCommand>, ToolError> {
        if let RotatePhase::Rotating {
            shape,
            pivot,
            arm_length,
            start_angle,
            angle,
            ..
        } = self.phase
        {
            log::info!(
                "Shape {} um {:.2}° gedreht",
                shape,
                (angle - start_angle).to_degrees()
            );
            self.phase = RotatePhase::Armed {
                shape,
                pivot,
                handle: pivot + Vec2::from_angle(angle) * arm_length,
            };
        }
        Ok(Vec::new())
    }

    fn quit(&mut self) -> Vec<SceneCommand> {
        self.reset()
    }

    fn cursor(&self) -> &SnappingCursor {
        &self.cursor
    }

    fn cursor_mut(&mut self) -> &mut SnappingCursor {
        &mut self.cursor
    }

    fn has_pending_input(&self) -> bool {
        self.phase != RotatePhase::PickShape
    }

    fn apply_options(&mut self, options: &EditorOptions) {
        self.cursor.apply_options(options);
        self.highlight_scale = options.highlight_scale;
        self.highlight_stroke_width = options.highlight_stroke_width;
    }
}
