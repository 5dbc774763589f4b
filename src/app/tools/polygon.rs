//! Polygon-Tool: Klicks setzen Eckpunkte, ein Vorschau-Slot im Front-Layer folgt
//! dem Cursor. Ein Klick auf den ersten Eckpunkt schließt das Polygon.

use glam::Vec2;

use super::{HighlightSet, SketchTool, SnappingCursor, ToolContext, ToolError};
use crate::core::{ObjectId, PointObject, SceneCommand, Shape};
use crate::shared::options::{HIGHLIGHT_STROKE_WIDTH, SHAPE_STROKE_WIDTH};
use crate::shared::{EditorOptions, Tolerance};

/// Polygon-Tool
pub struct PolygonTool {
    cursor: SnappingCursor,
    /// Gesetzte Eckpunkte (als Punkte im Haupt-Layer)
    vertices: Vec<(ObjectId, Vec2)>,
    /// Ausstehende Vorschau (höchstens ein Objekt)
    pending_preview: HighlightSet,
    preview_stroke_width: f32,
    stroke_width: f32,
    adjacency: Tolerance,
}

impl PolygonTool {
    /// Erstellt ein neues Polygon-Tool.
    pub fn new() -> Self {
        Self {
            cursor: SnappingCursor::new(),
            vertices: Vec::new(),
            pending_preview: HighlightSet::new(),
            preview_stroke_width: HIGHLIGHT_STROKE_WIDTH,
            stroke_width: SHAPE_STROKE_WIDTH,
            adjacency: Tolerance::CURVE_ADJACENCY,
        }
    }

    /// Anzahl gesetzter Eckpunkte.
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    fn refresh_preview(&mut self, cursor_pos: Vec2) -> Vec<SceneCommand> {
        let mut commands = self.pending_preview.clear();
        if self.vertices.is_empty() {
            return commands;
        }
        let mut outline: Vec<Vec2> = self.vertices.iter().map(|(_, p)| *p).collect();
        outline.push(cursor_pos);
        commands.extend(
            self.pending_preview
                .add_polyline(&outline, self.preview_stroke_width),
        );
        commands
    }

    fn close(&mut self) -> Result<Vec<SceneCommand>, ToolError> {
        let points: Vec<Vec2> = self.vertices.iter().map(|(_, p)| *p).collect();
        let mut polygon = Shape::polygon(points)?;
        polygon.style.stroke_width = self.stroke_width;

        let mut commands = self.pending_preview.clear();
        commands.extend(
            self.vertices
                .drain(..)
                .map(|(id, _)| SceneCommand::RemoveFromMainLayer { id }),
        );
        commands.push(SceneCommand::AddToMainLayer {
            id: ObjectId::new(),
            object: polygon.into(),
        });
        log::info!("Polygon geschlossen");
        Ok(commands)
    }
}

impl Default for PolygonTool {
    fn default() -> Self {
        Self::new()
    }
}

impl SketchTool for PolygonTool {
    fn name(&self) -> &str {
        "Polygon"
    }

    fn status_text(&self) -> &str {
        match self.vertices.len() {
            0 => "Ersten Eckpunkt klicken",
            1 | 2 => "Weiteren Eckpunkt klicken",
            _ => "Eckpunkt klicken oder ersten Punkt zum Schließen",
        }
    }

    fn on_pointer_move(
        &mut self,
        screen_pos: Vec2,
        ctx: &ToolContext,
    ) -> Result<Vec<SceneCommand>, ToolError> {
        let position = self.cursor.update(screen_pos, ctx);
        if self.vertices.is_empty() {
            return Ok(Vec::new());
        }
        Ok(self.refresh_preview(position))
    }

    fn on_pointer_down(
        &mut self,
        screen_pos: Vec2,
        ctx: &ToolContext,
    ) -> Result<Vec<SceneCommand>, ToolError> {
        let position = self.cursor.update(screen_pos, ctx);

        if let Some(&(_, first)) = self.vertices.first() {
            if self.vertices.len() >= 3 && self.adjacency.contains(first.distance(position)) {
                return self.close();
            }
        }
        if let Some(&(_, last)) = self.vertices.last() {
            if self.adjacency.contains(last.distance(position)) {
                return Ok(Vec::new());
            }
        }

        let id = ObjectId::new();
        self.vertices.push((id, position));
        let mut commands = vec![SceneCommand::AddToMainLayer {
            id,
            object: PointObject::new(position).into(),
        }];
        commands.extend(self.refresh_preview(position));
        Ok(commands)
    }

    fn quit(&mut self) -> Vec<SceneCommand> {
        let mut commands = self.pending_preview.clear();
        commands.extend(
            self.vertices
                .drain(..)
                .map(|(id, _)| SceneCommand::RemoveFromMainLayer { id }),
        );
        commands
    }

    fn cursor(&self) -> &SnappingCursor {
        &self.cursor
    }

    fn cursor_mut(&mut self) -> &mut SnappingCursor {
        &mut self.cursor
    }

    fn has_pending_input(&self) -> bool {
        !self.vertices.is_empty()
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

    const VIEWPORT: Vec2 = Vec2::new(800.0, 600.0);

    fn click(tool: &mut PolygonTool, scene: &mut LayeredScene, camera: &Camera2D, world: Vec2) {
        let ctx = ToolContext::new(scene, camera, VIEWPORT);
        let commands = tool
            .on_pointer_down(ctx.to_screen(world), &ctx)
            .expect("Befehle erwartet");
        scene.apply_all(commands);
    }

    #[test]
    fn test_click_on_first_vertex_closes_polygon() {
        let mut scene = LayeredScene::new();
        let camera = Camera2D::new();
        let mut tool = PolygonTool::new();

        for p in [Vec2::ZERO, Vec2::new(1.0, 0.0), Vec2::new(1.0, 1.0)] {
            click(&mut tool, &mut scene, &camera, p);
        }
        assert_eq!(tool.vertex_count(), 3);
        assert_eq!(scene.points().count(), 3);
        assert_eq!(scene.front_len(), 1);

        click(&mut tool, &mut scene, &camera, Vec2::ZERO);

        assert_eq!(tool.vertex_count(), 0);
        assert_eq!(scene.points().count(), 0);
        assert_eq!(scene.front_len(), 0);
        let (_, polygon) = scene.shapes().next().expect("Polygon erwartet");
        assert!(polygon.style.fill);
        assert_eq!(polygon.point_count(), 4);
        assert!(polygon.is_curve_closed(0, Tolerance::CURVE_ADJACENCY));
    }

    #[test]
    fn test_first_vertex_needs_three_corners_to_close() {
        let mut scene = LayeredScene::new();
        let camera = Camera2D::new();
        let mut tool = PolygonTool::new();

        click(&mut tool, &mut scene, &camera, Vec2::ZERO);
        click(&mut tool, &mut scene, &camera, Vec2::new(1.0, 0.0));
        click(&mut tool, &mut scene, &camera, Vec2::ZERO);

        assert_eq!(tool.vertex_count(), 3);
        assert_eq!(scene.shapes().count(), 0);
    }

    #[test]
    fn test_preview_follows_cursor_in_front_layer() {
        let mut scene = LayeredScene::new();
        let camera = Camera2D::new();
        let mut tool = PolygonTool::new();
        click(&mut tool, &mut scene, &camera, Vec2::ZERO);

        for target in [Vec2::new(0.4, 0.0), Vec2::new(0.8, 0.2)] {
            let ctx = ToolContext::new(&scene, &camera, VIEWPORT);
            let commands = tool
                .on_pointer_move(ctx.to_screen(target), &ctx)
                .expect("Befehle erwartet");
            scene.apply_all(commands);
            assert_eq!(scene.front_len(), 1);
        }
        assert_eq!(scene.main_len(), 1);
    }

    #[test]
    fn test_quit_removes_vertices_and_preview() {
        let mut scene = LayeredScene::new();
        let camera = Camera2D::new();
        let mut tool = PolygonTool::new();
        click(&mut tool, &mut scene, &camera, Vec2::ZERO);
        click(&mut tool, &mut scene, &camera, Vec2::new(1.0, 0.0));

        scene.apply_all(tool.quit());

        assert_eq!(scene.main_len(), 0);
        assert_eq!(scene.front_len(), 0);
        assert!(!tool.has_pending_input());
    }
}
