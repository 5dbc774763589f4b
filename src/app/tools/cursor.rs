//! Snapping-Cursor: löst eine rohe Zeigerposition in eine Szenen-Koordinate auf.
//!
//! Zwei Achsen: Grid-Alignment oder freies Snapping. Im freien Modus gilt die
//! feste Reihenfolge Punkt → Schnittpunkt → Kurve → rohe Position. Jeder Schalter
//! überspringt nur seine Stufe; die Reihenfolge bleibt erhalten.

use glam::Vec2;

use super::common::{closest_on_shapes, first_intersection, shapes_under_pointer};
use super::{Key, ToolContext};
use crate::core::{LayeredScene, ObjectId};
use crate::shared::options::{
    GRID_SPACING, INTERSECTION_PROXIMITY, PICK_THRESHOLD, SNAP_PROXIMITY,
};
use crate::shared::EditorOptions;

/// Welche Stufe die letzte Auflösung bestimmt hat.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SnapKind {
    /// Auf das Raster gerundet
    Grid,
    /// Auf einen existierenden Punkt eingerastet
    Point(ObjectId),
    /// Auf einen Schnittpunkt zweier Shapes eingerastet
    Intersection,
    /// Auf den nächsten Kurvenpunkt eingerastet
    Curve {
        /// Getroffenes Shape
        shape: ObjectId,
        /// Teilkurve im Shape
        curve_index: usize,
    },
    /// Keine Stufe hat gegriffen
    Free,
}

/// Rundet jede Achse unabhängig auf das nächste Vielfache von `spacing`.
pub fn align_to_grid(position: Vec2, spacing: f32) -> Vec2 {
    if spacing <= 0.0 {
        return position;
    }
    (position / spacing).round() * spacing
}

/// Cursor-Zustand eines Werkzeugs.
#[derive(Debug, Clone)]
pub struct SnappingCursor {
    /// Aufgelöste Szenen-Position
    pub position: Vec2,
    /// Rohe Szenen-Position vor dem Snapping
    pub raw_position: Vec2,
    /// Letzte Screen-Position
    pub screen_position: Vec2,
    /// Grid-Alignment aktiv (hat Vorrang vor freiem Snapping)
    pub align_to_grid: bool,
    /// Punkt-Fang aktiv
    pub snap_to_points: bool,
    /// Kurven-Fang aktiv
    pub snap_to_curves: bool,
    /// Schnittpunkt-Fang aktiv
    pub snap_to_intersections: bool,
    /// Ergebnis der letzten Auflösung
    pub snap: SnapKind,
    grid_spacing: f32,
    snap_proximity: f32,
    intersection_proximity: f32,
    pick_threshold: f32,
    /// Grid-Alignment laut Optionen (Zustand nach dem Loslassen von Umschalt)
    grid_preference: bool,
    shift_held: bool,
}

impl Default for SnappingCursor {
    fn default() -> Self {
        Self::new()
    }
}

impl SnappingCursor {
    /// Cursor mit Standardwerten (Grid aktiv, alle Fang-Stufen aktiv).
    pub fn new() -> Self {
        Self {
            position: Vec2::ZERO,
            raw_position: Vec2::ZERO,
            screen_position: Vec2::ZERO,
            align_to_grid: true,
            snap_to_points: true,
            snap_to_curves: true,
            snap_to_intersections: true,
            snap: SnapKind::Free,
            grid_spacing: GRID_SPACING,
            snap_proximity: SNAP_PROXIMITY,
            intersection_proximity: INTERSECTION_PROXIMITY,
            pick_threshold: PICK_THRESHOLD,
            grid_preference: true,
            shift_held: false,
        }
    }

    /// Cursor mit Werten aus den Optionen.
    pub fn from_options(options: &EditorOptions) -> Self {
        let mut cursor = Self::new();
        cursor.apply_options(options);
        cursor
    }

    /// Übernimmt Rasterweite, Toleranzen und Schalter.
    ///
    /// Bei gehaltener Umschalt-Taste bleibt das Grid aus.
    pub fn apply_options(&mut self, options: &EditorOptions) {
        self.grid_spacing = options.grid_spacing;
        self.snap_proximity = options.snap_proximity;
        self.intersection_proximity = options.intersection_proximity;
        self.pick_threshold = options.pick_threshold;
        self.snap_to_points = options.snap_to_points;
        self.snap_to_curves = options.snap_to_curves;
        self.snap_to_intersections = options.snap_to_intersections;
        self.grid_preference = options.align_to_grid;
        self.align_to_grid = self.grid_preference && !self.shift_held;
    }

    /// Pick-Schwelle für "Shape unter dem Zeiger".
    pub fn pick_threshold(&self) -> f32 {
        self.pick_threshold
    }

    /// Verarbeitet eine Zeigerbewegung und gibt die aufgelöste Position zurück.
    pub fn update(&mut self, screen_pos: Vec2, ctx: &ToolContext) -> Vec2 {
        self.screen_position = screen_pos;
        self.resolve_scene_position(ctx.to_scene(screen_pos), ctx.scene)
    }

    /// Löst eine rohe Szenen-Position auf.
    pub fn resolve_scene_position(&mut self, raw: Vec2, scene: &LayeredScene) -> Vec2 {
        self.raw_position = raw;
        let (position, snap) = if self.align_to_grid {
            (align_to_grid(raw, self.grid_spacing), SnapKind::Grid)
        } else {
            self.free_snap(raw, scene)
        };
        self.position = position;
        self.snap = snap;
        position
    }

    fn free_snap(&self, raw: Vec2, scene: &LayeredScene) -> (Vec2, SnapKind) {
        if self.snap_to_points {
            if let Some(hit) = scene.first_point_within(raw, self.snap_proximity) {
                return (hit.position, SnapKind::Point(hit.id));
            }
        }

        if !self.snap_to_intersections && !self.snap_to_curves {
            return (raw, SnapKind::Free);
        }
        let hits = shapes_under_pointer(scene, raw, self.pick_threshold);

        if self.snap_to_intersections {
            if let Some(point) = first_intersection(&hits, raw, self.intersection_proximity) {
                return (point, SnapKind::Intersection);
            }
        }

        if self.snap_to_curves {
            if let Some((shape, hit)) = closest_on_shapes(&hits, raw) {
                return (
                    hit.point,
                    SnapKind::Curve {
                        shape,
                        curve_index: hit.curve_index,
                    },
                );
            }
        }

        (raw, SnapKind::Free)
    }

    /// Umschalt gedrückt: Grid-Alignment aus, solange die Taste gehalten wird.
    pub fn on_key_down(&mut self, key: &Key) {
        if *key == Key::Shift {
            self.shift_held = true;
            self.align_to_grid = false;
        }
    }

    /// Umschalt losgelassen: Grid-Alignment laut Optionen wiederherstellen.
    pub fn on_key_up(&mut self, key: &Key) {
        if *key == Key::Shift && self.shift_held {
            self.shift_held = false;
            self.align_to_grid = self.grid_preference;
        }
    }
}
