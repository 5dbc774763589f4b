//! SketchTool-Implementierung des Punkt-auf-Kurve-Tools.

use glam::Vec2;

use super::super::common::shapes_under_pointer;
use super::super::{SketchTool, SnappingCursor, ToolContext, ToolError};
use super::state::{HighlightedCurve, PlacementMode, PointOnCurveTool};
use crate::core::SceneCommand;
use crate::shared::geometry::{closest_point_on_curves, ArcLengthPlacement};
use crate::shared::EditorOptions;

impl SketchTool for PointOnCurveTool {
    fn name(&self) -> &str {
        "Punkt auf Kurve"
    }

    fn status_text(&self) -> &str {
        match self.mode {
            PlacementMode::SelectCurve => "Kurve wählen",
            PlacementMode::PositionPoint => "Position klicken oder Distanz eingeben",
        }
    }

    fn on_pointer_move(
        &mut self,
        screen_pos: Vec2,
        ctx: &ToolContext,
    ) -> Result<Vec<SceneCommand>, ToolError> {
        self.cursor.update(screen_pos, ctx);
        let pos = self.cursor.raw_position;

        match self.mode {
            PlacementMode::SelectCurve => {
                let hits = shapes_under_pointer(ctx.scene, pos, self.cursor.pick_threshold());
                let picked = hits.into_iter().next().and_then(|hit| {
                    let curve_hit = closest_point_on_curves(pos, &hit.curves)?;
                    let points = hit.curves.into_iter().nth(curve_hit.curve_index)?;
                    Some(HighlightedCurve::new(hit.id, curve_hit.curve_index, points))
                });

                let unchanged = match (&picked, &self.curve) {
                    (Some(new), Some(old)) => {
                        new.shape == old.shape && new.curve_index == old.curve_index
                    }
                    (None, None) => true,
                    _ => false,
                };
                if unchanged {
                    return Ok(Vec::new());
                }
                if let Some(curve) = &picked {
                    log::debug!(
                        "Kurve {} von Shape {} gewählt, Länge {:.3}",
                        curve.curve_index,
                        curve.shape,
                        curve.length
                    );
                }
                Ok(self.set_curve(picked))
            }
            PlacementMode::PositionPoint => {
                let Some(placement) = self.curve.as_ref().and_then(|c| c.project(pos)) else {
                    return Err(ToolError::NoHighlightedCurve);
                };
                Ok(self.show_placement(placement))
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

        match self.mode {
            PlacementMode::SelectCurve => {
                let Some(curve) = &self.curve else {
                    return Ok(Vec::new());
                };
                let placement = curve.project(pos);
                self.mode = PlacementMode::PositionPoint;
                Ok(placement
                    .map(|p| self.show_placement(p))
                    .unwrap_or_default())
            }
            PlacementMode::PositionPoint => {
                let placement = match self.readout {
                    Some(shown) => shown,
                    None => self
                        .curve
                        .as_ref()
                        .and_then(|c| c.project(pos))
                        .ok_or(ToolError::NoHighlightedCurve)?,
                };
                Ok(self.commit_point(placement.position))
            }
        }
    }

    fn on_pointer_leave(&mut self) -> Vec<SceneCommand> {
        match self.mode {
            PlacementMode::SelectCurve => self.set_curve(None),
            PlacementMode::PositionPoint => Vec::new(),
        }
    }

    fn quit(&mut self) -> Vec<SceneCommand> {
        self.readout = None;
        self.reset()
    }

    fn cursor(&self) -> &SnappingCursor {
        &self.cursor
    }

    fn cursor_mut(&mut self) -> &mut SnappingCursor {
        &mut self.cursor
    }

    fn has_pending_input(&self) -> bool {
        self.mode == PlacementMode::PositionPoint
    }

    fn apply_options(&mut self, options: &EditorOptions) {
        self.cursor.apply_options(options);
        self.highlight_scale = options.highlight_scale;
        self.highlight_stroke_width = options.highlight_stroke_width;
    }

    fn place_at_distance(&mut self, distance: f32) -> Result<Vec<SceneCommand>, ToolError> {
        self.place(distance)
    }

    fn placement_readout(&self) -> Option<ArcLengthPlacement> {
        self.readout
    }
}
