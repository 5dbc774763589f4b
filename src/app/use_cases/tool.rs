//! Use-Case-Funktionen für Werkzeugwechsel, Abbruch und UI-Rückmeldung.

use crate::app::state::EditorTool;
use crate::app::tools::ToolError;
use crate::app::AppState;

use super::scene::apply_commands;

/// Überträgt Cursor, Fang-Stufe, Platzierungs-Anzeige und Status in den UI-State.
pub fn refresh_ui(state: &mut AppState) {
    let Some(tool) = state.editor.tool_manager.active_tool() else {
        return;
    };
    let cursor = tool.cursor();
    if state.ui.pointer_inside {
        state.ui.cursor_position = Some(cursor.position);
        state.ui.snap = Some(cursor.snap);
    }
    state.ui.placement_readout = tool.placement_readout();
    state.ui.status_text = tool.status_text().to_owned();
}

/// Wechselt das aktive Werkzeug; das bisherige wird beendet.
pub fn select_tool(state: &mut AppState, tool: EditorTool) {
    let commands = state.editor.tool_manager.set_active_tool(tool);
    apply_commands(state, commands);
    state.editor.active_tool = tool;
    state.editor.tool_manager.apply_options(&state.options);
    state.ui.placement_readout = None;
    refresh_ui(state);
    log::info!("Werkzeug gewechselt: {:?}", tool);
}

/// Beendet die laufende Interaktion des aktiven Werkzeugs.
pub fn quit_active(state: &mut AppState) {
    let commands = state.editor.tool_manager.quit_active();
    apply_commands(state, commands);
    state.ui.placement_readout = None;
    refresh_ui(state);
}

/// Bricht nach einem Werkzeug-Fehler ab: Werkzeug beenden, Highlights entfernen.
pub fn abort_interaction(state: &mut AppState, error: &ToolError) {
    log::warn!("Werkzeug-Interaktion abgebrochen: {}", error);
    quit_active(state);
    state.ui.status_message = Some(error.to_string());
}
