//! Punkt-Tool: ein Klick platziert einen Standalone-Punkt an der Cursor-Position.

use glam::Vec2;

use super::{SketchTool, SnappingCursor, ToolContext, ToolError};
use crate::core::{ObjectId, PointObject, SceneCommand};

/// Punkt-Tool
pub struct PointTool {
    cursor: SnappingCursor,
}

impl PointTool {
    /// Erstellt ein neues Punkt-Tool mit Standard-Cursor.
    pub fn new() -> Self {
        Self {
            cursor: SnappingCursor::new(),
        }
    }
}

impl Default for PointTool {
    fn default() -> Self {
        Self::new()
    }
}

impl SketchTool for PointTool {
    fn name(&self) -> &str {
        "Punkt"
    }

    fn status_text(&self) -> &str {
        "Klicken, um einen Punkt zu setzen"
    }

    fn on_pointer_move(
        &mut self,
        screen_pos: Vec2,
        ctx: &ToolContext,
    ) -> Result<Vec<SceneCommand>, ToolError> {
        self.cursor.update(screen_pos, ctx);
        Ok(Vec::new())
    }

    fn on_pointer_down(
        &mut self,
        screen_pos: Vec2,
        ctx: &ToolContext,
    ) -> Result<Vec<SceneCommand>, ToolError> {
        let position = self.cursor.update(screen_pos, ctx);
        log::debug!("Punkt gesetzt bei ({:.3}, {:.3})", position.x, position.y);
        Ok(vec![SceneCommand::AddToMainLayer {
            id: ObjectId::new(),
            object: PointObject::new(position).into(),
        }])
    }

    fn quit(&mut self) -> Vec<SceneCommand> {
        Vec::new()
    }

    fn cursor(&self) -> &SnappingCursor {
        &self.cursor
    }

    fn cursor_mut(&mut self) -> &mut SnappingCursor {
        &mut self.cursor
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Camera2D, LayeredScene, SceneObject};
    use approx::assert_relative_eq;

    #[test]
    fn test_click_adds_grid_aligned_point() {
        let scene = LayeredScene::new();
        let camera = Camera2D::new();
        let ctx = ToolContext::new(&scene, &camera, Vec2::new(800.0, 600.0));
        let mut tool = PointTool::new();

        let commands = tool
            .on_pointer_down(ctx.to_screen(Vec2::new(0.93, -0.41)), &ctx)
            .expect("Befehle erwartet");

        assert_eq!(commands.len(), 1);
        let SceneCommand::AddToMainLayer {
            object: SceneObject::Point(point),
            ..
        } = &commands[0]
        else {
            panic!("Punkt im Haupt-Layer erwartet");
        };
        assert_relative_eq!(point.position.x, 1.0, epsilon = 1e-5);
        assert_relative_eq!(point.position.y, -0.4, epsilon = 1e-5);
        assert!(tool.quit().is_empty());
    }
}
