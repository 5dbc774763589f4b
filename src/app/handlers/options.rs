//! Handler für Editor-Optionen.

use crate::app::use_cases;
use crate::app::AppState;
use crate::shared::EditorOptions;

/// Übernimmt neue Optionen, überträgt sie auf alle Werkzeuge und persistiert sie.
pub fn apply_options(state: &mut AppState, options: EditorOptions) -> anyhow::Result<()> {
    use_cases::options::apply(state, options);
    let path = EditorOptions::config_path();
    state.options.save_to_file(&path)
}

/// Setzt Optionen auf Standardwerte zurück und persistiert sie.
pub fn reset_options(state: &mut AppState) -> anyhow::Result<()> {
    use_cases::options::apply(state, EditorOptions::default());
    let path = EditorOptions::config_path();
    state.options.save_to_file(&path)
}
