//! SketchTool-Implementierung des Kurven-Tracers.

use glam::Vec2;

use super::super::{SketchTool, SnappingCursor, ToolContext, ToolError};
use super::state::{ShapeFromCurvesTool, TracerPhase};
use super::tracer::hovered_candidate;
use crate::core::SceneCommand;
use crate::shared::EditorOptions;

impl SketchTool for ShapeFromCurvesTool {
    fn name(&self) -> &str {
        "Fläche aus Kurven"
    }

    fn status_text(&self) -> &str {
        match &self.phase {
            TracerPhase::Idle { .. } => "Startpunkt auf einer Kurve klicken",
            TracerPhase::Extending(session) if session.candidates.is_empty() => {
                "Sackgasse, Escape bricht ab"
            }
            TracerPhase::Extending(_) => "Pfad wählen und klicken",
        }
    }

    fn on_pointer_move(
        &mut self,
        screen_pos: Vec2,
        ctx: &ToolContext,
    ) -> Result<Vec<SceneCommand>, ToolError> {
        self.cursor.update(screen_pos, ctx);
        let pos = self.cursor.raw_position;

        match &mut self.phase {
            TracerPhase::Idle { hovered_point } => {
                let hit = ctx
                    .scene
                    .nearest_point_within(pos, self.point_pick.value())
                    .map(|m| m.position);
                if hit == *hovered_point {
                    return Ok(Vec::new());
                }
                *hovered_point = hit;
                let mut commands = self.hover_highlights.clear();
                if let Some(point) = hit {
                    commands.push(self.hover_highlights.add_point(point, self.highlight_scale));
                }
                Ok(commands)
            }
            TracerPhase::Extending(session) => {
                let hovered = hovered_candidate(&session.candidates, pos, self.hover);
                if hovered == session.hovered {
                    return Ok(Vec::new());
                }
                session.hovered = hovered;
                let mut commands = self.hover_highlights.clear();
                if let Some(candidate) = hovered.and_then(|i| session.candidates.get(i)) {
                    commands.extend(
                        self.hover_highlights
                            .add_polyline(candidate.points(), self.highlight_stroke_width),
                    );
                    commands.push(
                        self.hover_highlights
                            .add_point(candidate.far_end(), self.highlight_scale),
                    );
                }
                Ok(commands)
            }
        }
    }

    fn on_pointer_down(
        &mut self,
        screen_pos: Vec2,
        ctx: &ToolContext,
    ) -> Result<Vec<SceneCommand>, ToolError> {
        self.cursor.update(screen_pos, ctx);
        let pos = self.cursor.raw_position;

        let TracerPhase::Extending(session) = &self.phase else {
            return match ctx.scene.nearest_point_within(pos, self.point_pick.value()) {
                Some(hit) => Ok(self.start_at(hit.position, ctx.scene)),
                None => Ok(Vec::new()),
            };
        };
        let hovered = session.hovered;
        match hovered {
            Some(index) => self.commit_candidate(index, ctx.scene),
            None => Ok(Vec::new()),
        }
    }

    fn on_pointer_leave(&mut self) -> Vec<SceneCommand> {
        match &mut self.phase {
            TracerPhase::Idle { hovered_point } => *hovered_point = None,
            TracerPhase::Extending(session) => session.hovered = None,
        }
        self.hover_highlights.clear()
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
        matches!(self.phase, TracerPhase::Extending(_))
    }

    fn apply_options(&mut self, options: &EditorOptions) {
        self.cursor.apply_options(options);
        self.adjacency = options.adjacency_tolerance();
        self.point_pick = options.snap_tolerance();
        self.hover = options.hover_tolerance();
        self.highlight_scale = options.highlight_scale;
        self.highlight_stroke_width = options.highlight_stroke_width;
        self.stroke_width = options.shape_stroke_width;
    }
}
