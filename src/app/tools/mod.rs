//! Trait-basiertes Werkzeug-System des Sketch-Editors.
//!
//! Jedes Werkzeug implementiert den `SketchTool`-Trait und wird beim
//! `ToolManager` registriert. Werkzeuge lesen die Szene nur und liefern
//! `SceneCommand`s als reine Daten; angewendet werden diese zentral im Handler.

/// Gemeinsame Hilfsfunktionen (Shape-Picking, Schnittpunkt-Suche).
pub mod common;
/// Snapping-Cursor mit Grid-, Punkt-, Schnittpunkt- und Kurven-Fang.
pub mod cursor;
/// Besitz temporärer Highlight-Objekte im Front-Layer.
pub mod highlight;
/// Linien-Tool: zwei Klicks, Vorschau im Front-Layer.
pub mod line;
/// Punkt-Tool: ein Klick platziert einen Standalone-Punkt.
pub mod point;
/// Drehen eines Shapes um einen Standalone-Punkt.
pub mod rotate_about_point;
/// Auswahl-Tool: Verschieben, Drehen, Skalieren und Löschen.
pub mod select;
/// Punkt-auf-Kurve-Tool mit Bogenlängen-Platzierung.
pub mod point_on_curve;
/// Polygon-Tool mit Vorschau-Slot.
pub mod polygon;
/// Kurven-Graph-Tracer: neue Flächen aus bestehenden Kurven.
pub mod shape_from_curves;
/// SketchTool-Trait: Schnittstelle für alle Werkzeuge.
mod sketch_tool;

pub use cursor::{SnapKind, SnappingCursor};
pub use highlight::HighlightSet;
pub use sketch_tool::SketchTool;

use glam::Vec2;
use thiserror::Error;

use crate::app::state::EditorTool;
use crate::core::{Camera2D, LayeredScene, SceneCommand, SceneError};
use crate::shared::EditorOptions;

// ── Typen ────────────────────────────────────────────────────────

/// Tastatur-Eingabe, soweit die Werkzeuge sie unterscheiden.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Key {
    /// Umschalt: Grid-Alignment abschalten, solange gedrückt
    Shift,
    /// Escape: Werkzeug beenden
    Escape,
    /// Entfernen/Backspace: Auswahl löschen
    Delete,
    /// Alle anderen Tasten (Name wie vom Host geliefert)
    Other(String),
}

/// Read-only Sicht auf Szene und Ansicht für ein einzelnes Ereignis.
pub struct ToolContext<'a> {
    /// Aktuelle Szene
    pub scene: &'a LayeredScene,
    /// Kamera der Ansicht
    pub camera: &'a Camera2D,
    /// Viewport-Größe in Pixel
    pub viewport_size: Vec2,
}

impl<'a> ToolContext<'a> {
    /// Erstellt einen neuen Kontext.
    pub fn new(scene: &'a LayeredScene, camera: &'a Camera2D, viewport_size: Vec2) -> Self {
        Self {
            scene,
            camera,
            viewport_size,
        }
    }

    /// Rechnet eine Screen-Position in Szenen-Koordinaten um.
    pub fn to_scene(&self, screen_pos: Vec2) -> Vec2 {
        self.camera.screen_to_world(screen_pos, self.viewport_size)
    }

    /// Rechnet eine Szenen-Position in Screen-Koordinaten um.
    pub fn to_screen(&self, scene_pos: Vec2) -> Vec2 {
        self.camera.world_to_screen(scene_pos, self.viewport_size)
    }
}

/// Programmierfehler in der Werkzeug-Ablaufsteuerung.
///
/// Beendet die laufende Interaktion; der Controller entfernt alle Highlights.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ToolError {
    /// Erweitern ohne Kandidaten-Pfade
    #[error("keine Kandidaten-Pfade zum Erweitern vorhanden")]
    NoCandidates,

    /// Kandidaten-Index außerhalb der aktuellen Liste
    #[error("Kandidat {index} existiert nicht ({count} Kandidaten)")]
    CandidateOutOfRange {
        /// Angefragter Index
        index: usize,
        /// Anzahl verfügbarer Kandidaten
        count: usize,
    },

    /// Platzierung außerhalb des Positionierungs-Modus
    #[error("Platzierung ist nur im Positionierungs-Modus möglich")]
    NotPositioning,

    /// Platzierung ohne hervorgehobene Kurve
    #[error("keine Kurve hervorgehoben")]
    NoHighlightedCurve,

    /// Werkzeug kennt die Operation nicht
    #[error("{tool} unterstützt keine Distanz-Platzierung")]
    Unsupported {
        /// Name des Werkzeugs
        tool: &'static str,
    },

    /// Ungültige Geometrie beim Erzeugen eines Shapes
    #[error(transparent)]
    Scene(#[from] SceneError),
}

// ── ToolManager ──────────────────────────────────────────────────

/// Verwaltet registrierte Werkzeuge und den aktiven Tool-Index.
pub struct ToolManager {
    tools: Vec<Box<dyn SketchTool>>,
    active_index: Option<usize>,
}

impl Default for ToolManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ToolManager {
    /// Erstellt einen neuen ToolManager mit vorregistrierten Standard-Tools.
    ///
    /// Die Registrierungsreihenfolge entspricht `EditorTool::index()`.
    pub fn new() -> Self {
        let mut manager = Self {
            tools: Vec::new(),
            active_index: None,
        };
        manager.register(Box::new(point::PointTool::new()));
        manager.register(Box::new(line::LineTool::new()));
        manager.register(Box::new(polygon::PolygonTool::new()));
        manager.register(Box::new(shape_from_curves::ShapeFromCurvesTool::new()));
        manager.register(Box::new(point_on_curve::PointOnCurveTool::new()));
        manager.register(Box::new(select::SelectTool::new()));
        manager.register(Box::new(rotate_about_point::RotateAboutPointTool::new()));
        manager
    }

    /// Registriert ein neues Werkzeug.
    pub fn register(&mut self, tool: Box<dyn SketchTool>) {
        self.tools.push(tool);
    }

    /// Gibt die Anzahl registrierter Tools zurück.
    pub fn tool_count(&self) -> usize {
        self.tools.len()
    }

    /// Gibt Name und Index aller registrierten Tools zurück.
    pub fn tool_names(&self) -> Vec<(usize, &str)> {
        self.tools
            .iter()
            .enumerate()
            .map(|(i, t)| (i, t.name()))
            .collect()
    }

    /// Setzt das aktive Werkzeug per Index.
    ///
    /// Das bisher aktive Werkzeug wird beendet; seine Entfern-Befehle werden
    /// zurückgegeben und müssen vom Aufrufer angewendet werden.
    pub fn set_active(&mut self, index: usize) -> Vec<SceneCommand> {
        if index >= self.tools.len() {
            log::warn!("Werkzeug-Index {} nicht registriert", index);
            return Vec::new();
        }
        let mut commands = Vec::new();
        if let Some(old) = self.active_index {
            if old != index {
                commands = self.tools[old].quit();
            }
        }
        self.active_index = Some(index);
        commands
    }

    /// Aktiviert ein Werkzeug per Enum.
    pub fn set_active_tool(&mut self, tool: EditorTool) -> Vec<SceneCommand> {
        self.set_active(tool.index())
    }

    /// Gibt den Index des aktiven Tools zurück.
    pub fn active_index(&self) -> Option<usize> {
        self.active_index
    }

    /// Gibt eine Referenz auf das aktive Tool zurück.
    pub fn active_tool(&self) -> Option<&dyn SketchTool> {
        let i = self.active_index?;
        self.tools.get(i).map(|tool| tool.as_ref())
    }

    /// Gibt eine mutable Referenz auf das aktive Tool zurück.
    pub fn active_tool_mut(&mut self) -> Option<&mut (dyn SketchTool + 'static)> {
        let i = self.active_index?;
        self.tools.get_mut(i).map(|tool| tool.as_mut())
    }

    /// Beendet das aktive Werkzeug (bleibt aktiv, aber ohne laufende Interaktion).
    pub fn quit_active(&mut self) -> Vec<SceneCommand> {
        self.active_tool_mut()
            .map(|tool| tool.quit())
            .unwrap_or_default()
    }

    /// Überträgt Optionen auf alle registrierten Werkzeuge.
    pub fn apply_options(&mut self, options: &EditorOptions) {
        for tool in &mut self.tools {
            tool.apply_options(options);
        }
    }
}
