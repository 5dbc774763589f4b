use crate::app::CommandLog;
use crate::core::LayeredScene;
use crate::shared::EditorOptions;

use super::{EditorToolState, UiState, ViewState};

/// Hauptzustand der Anwendung
pub struct AppState {
    /// Szene mit Haupt- und Front-Layer
    pub scene: LayeredScene,
    /// View-State
    pub view: ViewState,
    /// UI-State
    pub ui: UiState,
    /// Editor-Werkzeug-State
    pub editor: EditorToolState,
    /// Verlauf ausgeführter Commands
    pub command_log: CommandLog,
    /// Laufzeit-Optionen (Raster, Toleranzen, Highlights)
    pub options: EditorOptions,
}

impl AppState {
    /// Erstellt einen neuen, leeren App-State mit Standard-Optionen.
    pub fn new() -> Self {
        Self::with_options(EditorOptions::default())
    }

    /// Erstellt einen leeren App-State und überträgt `options` auf alle Werkzeuge.
    pub fn with_options(options: EditorOptions) -> Self {
        let mut editor = EditorToolState::new();
        editor.tool_manager.apply_options(&options);
        Self {
            scene: LayeredScene::new(),
            view: ViewState::new(),
            ui: UiState::new(),
            editor,
            command_log: CommandLog::new(),
            options,
        }
    }

    /// Anzahl der Objekte im Haupt-Layer (für UI-Anzeige)
    pub fn object_count(&self) -> usize {
        self.scene.main_len()
    }

    /// Anzahl der Highlights im Front-Layer
    pub fn highlight_count(&self) -> usize {
        self.scene.front_len()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
