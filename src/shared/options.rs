//! Zentrale Konfiguration für den Sketch-Studio Editor.
//!
//! `EditorOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use serde::{Deserialize, Serialize};

// ── Kamera ──────────────────────────────────────────────────────────

/// Sichtbare Welt-Halbhöhe bei Zoom 1.0 (Szenen-Einheiten).
pub const CAMERA_BASE_WORLD_EXTENT: f32 = 4.0;
/// Minimaler Zoom-Faktor.
pub const CAMERA_ZOOM_MIN: f32 = 0.05;
/// Maximaler Zoom-Faktor.
pub const CAMERA_ZOOM_MAX: f32 = 50.0;
/// Zoom-Schritt bei Mausrad-Scroll.
pub const CAMERA_SCROLL_ZOOM_STEP: f32 = 1.1;

// ── Raster & Snapping ───────────────────────────────────────────────

/// Rasterweite für Grid-Alignment.
pub const GRID_SPACING: f32 = 0.2;
/// Fang-Radius für existierende Punkte.
pub const SNAP_PROXIMITY: f32 = 0.2;
/// Nähe, ab der Segmente zweier Shapes auf Schnittpunkte geprüft werden.
pub const INTERSECTION_PROXIMITY: f32 = 0.2;
/// Pick-Schwelle: Shapes, deren Kurven näher am Zeiger liegen, gelten als "unter dem Zeiger".
pub const PICK_THRESHOLD: f32 = 0.2;
/// Hover-Schwelle für Kandidaten-Pfade im Kurven-Tracer.
pub const HOVER_THRESHOLD: f32 = 0.2;
/// Strikte Koinzidenz-Toleranz für Kurven-Endpunkte.
pub const CURVE_ADJACENCY_EPSILON: f32 = 1e-4;

// ── Auswahl & Transformation ────────────────────────────────────────

/// Rasterweite beim Verschieben der Auswahl.
pub const SELECT_MOVE_STEP: f32 = 0.1;
/// Schrittweite beim Skalieren der Auswahl (zugleich minimale Skalierung).
pub const SELECT_SCALE_STEP: f32 = 0.1;
/// Abstand des Auswahlrahmens zur Bounding-Box.
pub const SELECT_FRAME_PADDING: f32 = 0.2;
/// Länge des Stiels zwischen Rahmen-Oberkante und Dreh-Griff.
pub const SELECT_ROTATOR_STEM: f32 = 0.32;
/// Radius des Dreh-Griffs.
pub const SELECT_ROTATOR_RADIUS: f32 = 0.11;
/// Mindestlänge des Dreh-Arms bei Drehung um einen Punkt.
pub const ROTATE_ARM_MIN_LENGTH: f32 = 0.5;

// ── Highlights ──────────────────────────────────────────────────────

/// Skalierung hervorgehobener Punkte.
pub const HIGHLIGHT_SCALE: f32 = 1.3;
/// Linienstärke hervorgehobener Kurven.
pub const HIGHLIGHT_STROKE_WIDTH: f32 = 0.06;
/// Standard-Linienstärke neu erzeugter Shapes.
pub const SHAPE_STROKE_WIDTH: f32 = 0.03;

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit änderbaren Editor-Optionen.
/// Wird als `sketch_studio_editor.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct EditorOptions {
    // ── Raster ──────────────────────────────────────────────────
    /// Rasterweite in Szenen-Einheiten
    pub grid_spacing: f32,
    /// Cursor startet im Grid-Modus (Shift schaltet temporär ab)
    pub align_to_grid: bool,

    // ── Snapping ────────────────────────────────────────────────
    /// Fang-Radius für existierende Punkte
    pub snap_proximity: f32,
    /// Nähe-Schwelle für Schnittpunkt-Tests
    pub intersection_proximity: f32,
    /// Pick-Schwelle für "Shape unter dem Zeiger"
    pub pick_threshold: f32,
    /// Auf existierende Punkte einrasten
    pub snap_to_points: bool,
    /// Auf Kurven einrasten
    pub snap_to_curves: bool,
    /// Auf Kurven-Schnittpunkte einrasten
    pub snap_to_intersections: bool,

    // ── Kurven-Tracer ───────────────────────────────────────────
    /// Hover-Schwelle für Kandidaten-Pfade
    pub hover_threshold: f32,
    /// Koinzidenz-Toleranz für Kurven-Endpunkte
    pub curve_adjacency_epsilon: f32,

    // ── Highlights ──────────────────────────────────────────────
    /// Skalierung hervorgehobener Punkte
    pub highlight_scale: f32,
    /// Linienstärke hervorgehobener Kurven
    pub highlight_stroke_width: f32,
    /// Linienstärke neu erzeugter Shapes
    pub shape_stroke_width: f32,

    // ── Kamera ──────────────────────────────────────────────────
    /// Minimaler Zoom-Faktor
    pub camera_zoom_min: f32,
    /// Maximaler Zoom-Faktor
    pub camera_zoom_max: f32,
    /// Zoom-Schritt bei Mausrad-Scroll
    pub camera_scroll_zoom_step: f32,
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            grid_spacing: GRID_SPACING,
            align_to_grid: true,

            snap_proximity: SNAP_PROXIMITY,
            intersection_proximity: INTERSECTION_PROXIMITY,
            pick_threshold: PICK_THRESHOLD,
            snap_to_points: true,
            snap_to_curves: true,
            snap_to_intersections: true,

            hover_threshold: HOVER_THRESHOLD,
            curve_adjacency_epsilon: CURVE_ADJACENCY_EPSILON,

            highlight_scale: HIGHLIGHT_SCALE,
            highlight_stroke_width: HIGHLIGHT_STROKE_WIDTH,
            shape_stroke_width: SHAPE_STROKE_WIDTH,

            camera_zoom_min: CAMERA_ZOOM_MIN,
            camera_zoom_max: CAMERA_ZOOM_MAX,
            camera_scroll_zoom_step: CAMERA_SCROLL_ZOOM_STEP,
        }
    }
}

impl EditorOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("sketch_studio_editor"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("sketch_studio_editor.toml")
    }

    /// Toleranz für interaktives Punkt-Snapping.
    pub fn snap_tolerance(&self) -> super::Tolerance {
        super::Tolerance::Proximity(self.snap_proximity)
    }

    /// Toleranz für Hover-Tests auf Kandidaten-Pfaden.
    pub fn hover_tolerance(&self) -> super::Tolerance {
        super::Tolerance::Proximity(self.hover_threshold)
    }

    /// Toleranz für Kurven-Koinzidenz im Tracer.
    pub fn adjacency_tolerance(&self) -> super::Tolerance {
        super::Tolerance::Adjacency(self.curve_adjacency_epsilon)
    }
}
