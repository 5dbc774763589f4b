//! Use-Case-Funktionen für Editor-Optionen.

use crate::app::AppState;
use crate::shared::EditorOptions;

/// Übernimmt Optionen in den State und überträgt sie auf alle Werkzeuge.
pub fn apply(state: &mut AppState, options: EditorOptions) {
    state.editor.tool_manager.apply_options(&options);
    state.options = options;
    log::info!("Optionen übernommen");
}
