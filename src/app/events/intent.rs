use glam::Vec2;

use super::super::state::EditorTool;
use crate::app::tools::Key;
use crate::shared::EditorOptions;

/// App-Intent und App-Command Events.
/// Intents sind Eingaben aus UI/System ohne direkte Mutationslogik.
#[derive(Debug, Clone)]
pub enum AppIntent {
    /// Zeiger im Viewport bewegt (Screen-Pixel)
    PointerMoved { screen_pos: Vec2 },
    /// Primärtaste im Viewport gedrückt (Screen-Pixel)
    PointerPressed { screen_pos: Vec2 },
    /// Primärtaste im Viewport losgelassen (Screen-Pixel)
    PointerReleased { screen_pos: Vec2 },
    /// Zeiger betritt den Viewport
    PointerEntered,
    /// Zeiger verlässt den Viewport
    PointerLeft,
    /// Taste gedrückt
    KeyPressed { key: Key },
    /// Taste losgelassen
    KeyReleased { key: Key },
    /// Laufende Werkzeug-Interaktion abbrechen
    CancelRequested,
    /// Editor-Werkzeug wechseln
    SetEditorToolRequested { tool: EditorTool },
    /// Distanz für das Punkt-auf-Kurve-Tool eingegeben
    PlacementDistanceEntered { distance: f32 },
    /// Kamera auf Standard zurücksetzen
    ResetCameraRequested,
    /// Viewport-Größe hat sich geändert
    ViewportResized { size: [f32; 2] },
    /// Ansicht mit gehaltener Pan-Taste gezogen (Screen-Pixel)
    ViewDragged { screen_delta: Vec2 },
    /// Mausrad im Viewport (positive Schritte zoomen hinein)
    WheelScrolled { steps: f32, screen_pos: Vec2 },
    /// Optionen wurden geändert
    OptionsChanged { options: EditorOptions },
    /// Optionen auf Standardwerte zurücksetzen
    ResetOptionsRequested,
}
