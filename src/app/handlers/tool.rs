//! Handler für Werkzeug-Ereignisse (Zeiger, Tasten, Abbruch, Platzierung).
//!
//! Ein `ToolError` beendet die laufende Interaktion: das Werkzeug wird
//! beendet, seine Highlights entfernt und der Fehler an den Host gereicht.

use anyhow::Context;
use glam::Vec2;

use crate::app::state::EditorTool;
use crate::app::tools::{Key, SketchTool, ToolContext, ToolError};
use crate::app::use_cases;
use crate::app::AppState;
use crate::core::SceneCommand;

/// Führt ein Ereignis auf dem aktiven Werkzeug aus und wendet das Ergebnis an.
fn run_active_tool<F>(state: &mut AppState, event: &str, run: F) -> anyhow::Result<()>
where
    F: FnOnce(&mut (dyn SketchTool + 'static), &ToolContext) -> Result<Vec<SceneCommand>, ToolError>,
{
    let viewport = state.view.viewport();
    let result = {
        let Some(tool) = state.editor.tool_manager.active_tool_mut() else {
            return Ok(());
        };
        let ctx = ToolContext::new(&state.scene, &state.view.camera, viewport);
        run(tool, &ctx)
    };

    match result {
        Ok(commands) => {
            use_cases::scene::apply_commands(state, commands);
            use_cases::tool::refresh_ui(state);
            Ok(())
        }
        Err(err) => {
            use_cases::tool::abort_interaction(state, &err);
            Err(err).with_context(|| format!("Werkzeug-Ereignis '{}' abgebrochen", event))
        }
    }
}

/// Zeigerbewegung an das aktive Werkzeug.
pub fn pointer_move(state: &mut AppState, screen_pos: Vec2) -> anyhow::Result<()> {
    state.ui.pointer_inside = true;
    state.ui.pointer_screen_position = Some(screen_pos);
    run_active_tool(state, "pointer_move", |tool, ctx| {
        tool.on_pointer_move(screen_pos, ctx)
    })
}

/// Klick an das aktive Werkzeug.
pub fn pointer_down(state: &mut AppState, screen_pos: Vec2) -> anyhow::Result<()> {
    run_active_tool(state, "pointer_down", |tool, ctx| {
        tool.on_pointer_down(screen_pos, ctx)
    })
}

/// Loslassen der Maustaste an das aktive Werkzeug.
pub fn pointer_up(state: &mut AppState, screen_pos: Vec2) -> anyhow::Result<()> {
    run_active_tool(state, "pointer_up", |tool, ctx| {
        tool.on_pointer_up(screen_pos, ctx)
    })
}

/// Zeiger betritt den Viewport.
pub fn pointer_enter(state: &mut AppState) {
    state.ui.pointer_inside = true;
    let commands = state
        .editor
        .tool_manager
        .active_tool_mut()
        .map(|tool| tool.on_pointer_enter())
        .unwrap_or_default();
    use_cases::scene::apply_commands(state, commands);
}

/// Zeiger verlässt den Viewport: Hover-Highlights verschwinden.
pub fn pointer_leave(state: &mut AppState) {
    state.ui.pointer_inside = false;
    state.ui.pointer_screen_position = None;
    state.ui.cursor_position = None;
    state.ui.snap = None;
    let commands = state
        .editor
        .tool_manager
        .active_tool_mut()
        .map(|tool| tool.on_pointer_leave())
        .unwrap_or_default();
    use_cases::scene::apply_commands(state, commands);
}

/// Taste gedrückt. Befehle des Werkzeugs (z.B. Löschen) werden angewendet.
pub fn key_down(state: &mut AppState, key: &Key) -> anyhow::Result<()> {
    run_active_tool(state, "key_down", |tool, _ctx| Ok(tool.on_key_down(key)))
}

/// Taste losgelassen.
pub fn key_up(state: &mut AppState, key: &Key) {
    if let Some(tool) = state.editor.tool_manager.active_tool_mut() {
        tool.on_key_up(key);
    }
}

/// Beendet die laufende Interaktion des aktiven Werkzeugs.
pub fn cancel(state: &mut AppState) {
    use_cases::tool::quit_active(state);
}

/// Wechselt das aktive Werkzeug.
pub fn select(state: &mut AppState, tool: EditorTool) {
    use_cases::tool::select_tool(state, tool);
}

/// Platziert einen Punkt in Bogenlänge auf der hervorgehobenen Kurve.
pub fn place_at_distance(state: &mut AppState, distance: f32) -> anyhow::Result<()> {
    run_active_tool(state, "place_at_distance", |tool, _ctx| {
        tool.place_at_distance(distance)
    })
}
