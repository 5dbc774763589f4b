//! Linien-Tool: erster Klick setzt den Start, eine Vorschau-Linie folgt dem
//! Cursor im Front-Layer, zweiter Klick übernimmt die Linie in den Haupt-Layer.

use glam::Vec2;

use super::{HighlightSet, SketchTool, SnappingCursor, ToolContext, ToolError};
use crate::core::{ObjectId, SceneCommand, Shape, ShapeStyle};
use crate::shared::options::{HIGHLIGHT_STROKE_WIDTH, SHAPE_STROKE_WIDTH};
use crate::shared::{EditorOptions, Tolerance};

/// Linien-Tool
pub struct LineTool {
    cursor: SnappingCursor,
    start: Option<Vec2>,
    preview: HighlightSet,
    preview_stroke_width: f32,
    stroke_width: f32,
    adjacency: Tolerance,
}

impl LineTool {
    /// Erstellt ein neues Linien-Tool.
    pub fn new() -> Self {
        Self {
            cursor: SnappingCursor::new(),
            start: None,
            preview: HighlightSet::new(),
            preview_stroke_width: HIGHLIGHT_STROKE_WIDTH,
            stroke_width: SHAPE_STROKE_WIDTH,
            adjacency: Tolerance::CURVE_ADJACENCY,
        }
    }
}

impl Default for LineTool {
    fn default() -> Self {
        Self::new()
    }
}

impl SketchTool for LineTool {
    fn name(&self) -> &str {
        "Linie"
    }

    fn status_text(&self) -> &str {
        match self.start {
            None => "Startpunkt klicken",
            Some(_) => "Endpunkt klicken",
        }
    }

    fn on_pointer_move(
        &mut self,
        screen_pos: Vec2,
        ctx: &ToolContext,
    ) -> Result<Vec<SceneCommand>, ToolError> {
        let position = self.cursor.update(screen_pos, ctx);
        let Some(start) = self.start else {
            return Ok(Vec::new());
        };
        let mut commands = self.preview.clear();
        commands.extend(
            self.preview
                .add_polyline(&[start, position], self.preview_stroke_width),
        );
        Ok(commands)
    }

    fn on_pointer_down(
        &mut self,
        screen_pos: Vec2,
        ctx: &ToolContext,
    ) -> Result<Vec<SceneCommand>, ToolError> {
        let position = self.cursor.update(screen_pos, ctx);
        let Some(start) = self.start else {
            self.start = Some(position);
            return Ok(Vec::new());
        };
        if self.adjacency.contains(start.distance(position)) {
            return Ok(Vec::new());
        }

        let mut commands = self.preview.clear();
        let line = Shape::line(start, position).with_style(ShapeStyle {
            stroke_width: self.stroke_width,
            ..ShapeStyle::default()
        });
        commands.push(SceneCommand::AddToMainLayer {
            id: ObjectId::new(),
            object: line.into(),
        });
        self.start = None;
        log::info!("Linie erstellt: Länge {:.3}", start.distance(position));
        Ok(commands)
    }

    fn quit(&mut self) -> Vec<SceneCommand> {
        self.start = None;
        self.preview.clear()
    }

    fn cursor(&self) -> &SnappingCursor {
        &self.cursor
    }

    fn cursor_mut(&mut self) -> &mut SnappingCursor {
        &mut self.cursor
    }

    fn has_pending_input(&self) -> bool {
        self.start.is_some()
    }

    fn apply_options(&mut self, options: &EditorOptions) {
        self.cursor.apply_options(options);
        self.preview_stroke_width = options.highlight_stroke_width;
        self.stroke_width = options.shape_stroke_width;
        self.adjacency = options.adjacency_tolerance();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Camera2D, LayeredScene};

    #[test]
    fn test_tool_click_flow() {
        let mut scene = LayeredScene::new();
        let camera = Camera2D::new();
        let viewport = Vec2::new(800.0, 600.0);
        let mut tool = LineTool::new();

        let ctx = ToolContext::new(&scene, &camera, viewport);
        let first = ctx.to_screen(Vec2::new(0.0, 0.0));
        let second = ctx.to_screen(Vec2::new(1.0, 0.0));
        assert!(tool.on_pointer_down(first, &ctx).expect("ok").is_empty());
        assert!(tool.has_pending_input());

        let preview = tool.on_pointer_move(second, &ctx).expect("ok");
        assert_eq!(preview.len(), 1);
        scene.apply_all(preview);
        assert_eq!(scene.front_len(), 1);

        let ctx = ToolContext::new(&scene, &camera, viewport);
        let commands = tool.on_pointer_down(second, &ctx).expect("ok");
        scene.apply_all(commands);

        assert_eq!(scene.front_len(), 0);
        assert_eq!(scene.shapes().count(), 1);
        assert!(!tool.has_pending_input());
        let (_, line) = scene.shapes().next().expect("Linie erwartet");
        assert_eq!(line.curve(0).map(|c| c.len()), Some(2));
    }

    #[test]
    fn test_zero_length_click_is_ignored() {
        let scene = LayeredScene::new();
        let camera = Camera2D::new();
        let ctx = ToolContext::new(&scene, &camera, Vec2::new(800.0, 600.0));
        let mut tool = LineTool::new();
        let p = ctx.to_screen(Vec2::new(0.4, 0.4));

        tool.on_pointer_down(p, &ctx).expect("ok");
        assert!(tool.on_pointer_down(p, &ctx).expect("ok").is_empty());
        assert!(tool.has_pending_input());
    }

    #[test]
    fn test_quit_removes_preview() {
        let mut scene = LayeredScene::new();
        let camera = Camera2D::new();
        let viewport = Vec2::new(800.0, 600.0);
        let mut tool = LineTool::new();
        let ctx = ToolContext::new(&scene, &camera, viewport);

        tool.on_pointer_down(ctx.to_screen(Vec2::ZERO), &ctx).expect("ok");
        let preview = tool
            .on_pointer_move(ctx.to_screen(Vec2::new(0.6, 0.2)), &ctx)
            .expect("ok");
        scene.apply_all(preview);

        scene.apply_all(tool.quit());
        assert_eq!(scene.front_len(), 0);
        assert!(!tool.has_pending_input());
    }
}
