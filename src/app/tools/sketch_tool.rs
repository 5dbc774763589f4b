//! SketchTool-Trait: Schnittstelle für alle Werkzeuge.

use glam::Vec2;

use super::{Key, SnappingCursor, ToolContext, ToolError};
use crate::core::SceneCommand;
use crate::shared::geometry::ArcLengthPlacement;
use crate::shared::EditorOptions;

/// Schnittstelle für alle Werkzeuge (Punkt, Linie, Polygon, Kurven-Tracer, …).
///
/// Werkzeuge sind zustandsbehaftet (Klick-Phasen) und besitzen ihren eigenen
/// Snapping-Cursor. Alle Szenen-Änderungen werden als `SceneCommand`s
/// zurückgegeben; zu jedem hinzugefügten Highlight liefert `quit` das Entfernen.
pub trait SketchTool {
    /// Anzeigename für die Werkzeugleiste
    fn name(&self) -> &str;

    /// Statustext (z.B. "Startpunkt klicken")
    fn status_text(&self) -> &str;

    /// Zeigerbewegung verarbeiten.
    fn on_pointer_move(
        &mut self,
        screen_pos: Vec2,
        ctx: &ToolContext,
    ) -> Result<Vec<SceneCommand>, ToolError>;

    /// Klick verarbeiten.
    fn on_pointer_down(
        &mut self,
        screen_pos: Vec2,
        ctx: &ToolContext,
    ) -> Result<Vec<SceneCommand>, ToolError>;

    /// Maustaste losgelassen (Ende eines Zieh-Vorgangs).
    fn on_pointer_up(
        &mut self,
        _screen_pos: Vec2,
        _ctx: &ToolContext,
    ) -> Result<Vec<SceneCommand>, ToolError> {
        Ok(Vec::new())
    }

    /// Zeiger betritt den Viewport.
    fn on_pointer_enter(&mut self) -> Vec<SceneCommand> {
        Vec::new()
    }

    /// Zeiger verlässt den Viewport.
    fn on_pointer_leave(&mut self) -> Vec<SceneCommand> {
        Vec::new()
    }

    /// Taste gedrückt. Werkzeuge mit Tasten-Aktionen (Löschen) liefern Befehle.
    fn on_key_down(&mut self, key: &Key) -> Vec<SceneCommand> {
        self.cursor_mut().on_key_down(key);
        Vec::new()
    }

    /// Taste losgelassen.
    fn on_key_up(&mut self, key: &Key) {
        self.cursor_mut().on_key_up(key);
    }

    /// Interaktion abbrechen: entfernt alle eigenen Highlights, erzeugt nichts.
    fn quit(&mut self) -> Vec<SceneCommand>;

    /// Aktueller Cursor-Zustand
    fn cursor(&self) -> &SnappingCursor;

    /// Mutabler Cursor-Zustand
    fn cursor_mut(&mut self) -> &mut SnappingCursor;

    /// Hat das Werkzeug angefangene Eingaben?
    fn has_pending_input(&self) -> bool {
        false
    }

    /// Optionen übernehmen (Snapping, Toleranzen, Highlights).
    fn apply_options(&mut self, options: &EditorOptions) {
        self.cursor_mut().apply_options(options);
    }

    /// Punkt in fester Bogenlänge auf der hervorgehobenen Kurve platzieren.
    fn place_at_distance(&mut self, _distance: f32) -> Result<Vec<SceneCommand>, ToolError> {
        Err(ToolError::Unsupported { tool: "Werkzeug" })
    }

    /// Letzte Platzierungs-Anzeige (Position, Distanz, Gesamtlänge)
    fn placement_readout(&self) -> Option<ArcLengthPlacement> {
        None
    }
}
