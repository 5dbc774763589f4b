//! SketchTool-Implementierung des Auswahl-Tools.

use glam::Vec2;

use super::super::common::shapes_under_pointer;
use super::super::{Key, SketchTool, SnappingCursor, ToolContext, ToolError};
use super::state::{DragGesture, FrameHandle, SelectTool};
use crate::core::{LayeredScene, ObjectId, SceneCommand};
use crate::shared::transform::heading;
use crate::shared::{EditorOptions, Tolerance};

/// Nächster Punkt im Pick-Radius, sonst das oberste (zuletzt gespeicherte) Shape.
fn pick_object(scene: &LayeredScene, pos: Vec2, threshold: f32) -> Option<ObjectId> {
    if let Some(hit) = scene.nearest_point_within(pos, threshold) {
        return Some(hit.id);
    }
    shapes_under_pointer(scene, pos, threshold)
        .pop()
        .map(|hit| hit.id)
}

impl SketchTool for SelectTool {
    fn name(&self) -> &str {
        "Auswahl"
    }

    fn status_text(&self) -> &str {
        match (&self.selected, &self.drag) {
            (None, _) => "Objekt anklicken",
            (Some(_), None) => "Ziehen verschiebt, Griffe drehen und skalieren, Entfernen löscht",
            (Some(_), Some(_)) => "Loslassen beendet die Transformation",
        }
    }

    fn on_pointer_move(
        &mut self,
        screen_pos: Vec2,
        ctx: &ToolContext,
    ) -> Result<Vec<SceneCommand>, ToolError> {
        self.cursor.update(screen_pos, ctx);
        let (Some(id), Some(updated)) = (
            self.selected,
            self.dragged_object(self.cursor.raw_position),
        ) else {
            return Ok(Vec::new());
        };
        if ctx.scene.main_object(id) == Some(&updated) {
            return Ok(Vec::new());
        }

        let mut commands = self.show_frame(&updated);
        commands.push(SceneCommand::AddToMainLayer {
            id,
            object: updated,
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

        // Griffe der bestehenden Auswahl
        let selected_object = self
            .selected
            .and_then(|id| ctx.scene.main_object(id))
            .cloned();
        if let (Some(frame), Some(object)) = (self.frame, selected_object) {
            if let Some(handle) = frame.handle_at(pos, pick) {
                let gesture = match handle {
                    FrameHandle::Rotate => DragGesture::Rotate {
                        center: frame.center,
                        grab_angle: heading(frame.center, pos),
                    },
                    FrameHandle::Scale => DragGesture::Scale {
                        center: frame.center,
                        grab_distance: pos.distance(frame.center),
                    },
                };
                self.begin_drag(gesture, object);
                return Ok(Vec::new());
            }
        }

        let Some((id, object)) = pick_object(ctx.scene, pos, pick.value())
            .and_then(|id| ctx.scene.main_object(id).map(|object| (id, object.clone())))
        else {
            return Ok(self.deselect());
        };
        let commands = if self.selected == Some(id) {
            Vec::new()
        } else {
            self.select(id, &object)
        };
        self.begin_drag(DragGesture::Move { grab: pos }, object);
        Ok(commands)
    }

    fn on_pointer_up(
        &mut self,
        _screen_pos: Vec2,
        _ctx: &ToolContext,
    ) -> Result<Vec<SceneCommand>, ToolError> {
        if self.drag.take().is_some() {
            log::debug!("Zieh-Geste beendet");
        }
        Ok(Vec::new())
    }

    fn on_key_down(&mut self, key: &Key) -> Vec<SceneCommand> {
        self.cursor.on_key_down(key);
        match key {
            Key::Delete => self.delete_selected(),
            _ => Vec::new(),
        }
    }

    fn quit(&mut self) -> Vec<SceneCommand> {
        self.deselect()
    }

    fn cursor(&self) -> &SnappingCursor {
        &self.cursor
    }

    fn cursor_mut(&mut self) -> &mut SnappingCursor {
        &mut self.cursor
    }

    fn has_pending_input(&self) -> bool {
        self.drag.is_some()
    }

    fn apply_options(&mut self, options: &EditorOptions) {
        self.cursor.apply_options(options);
        self.highlight_scale = options.highlight_scale;
        self.highlight_stroke_width = options.highlight_stroke_width;
    }
}
