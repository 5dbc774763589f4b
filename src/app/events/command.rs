use glam::Vec2;

use super::super::state::EditorTool;
use crate::app::tools::Key;
use crate::shared::EditorOptions;

/// Commands sind mutierende Schritte, die zentral ausgeführt werden.
#[derive(Debug, Clone)]
pub enum AppCommand {
    /// Editor-Werkzeug wechseln
    SetEditorTool { tool: EditorTool },
    /// Zeigerbewegung an das aktive Werkzeug
    ToolPointerMove { screen_pos: Vec2 },
    /// Klick an das aktive Werkzeug
    ToolPointerDown { screen_pos: Vec2 },
    /// Loslassen an das aktive Werkzeug
    ToolPointerUp { screen_pos: Vec2 },
    /// Zeiger betritt den Viewport
    ToolPointerEnter,
    /// Zeiger verlässt den Viewport
    ToolPointerLeave,
    /// Taste gedrückt (Cursor und Tasten-Aktionen des aktiven Werkzeugs)
    ToolKeyDown { key: Key },
    /// Taste losgelassen
    ToolKeyUp { key: Key },
    /// Aktives Werkzeug beenden (Highlights entfernen)
    ToolCancel,
    /// Punkt in Bogenlänge auf der hervorgehobenen Kurve platzieren
    PlaceAtDistance { distance: f32 },
    /// Kamera zurücksetzen
    ResetView,
    /// Viewport-Größe setzen
    SetViewportSize { size: [f32; 2] },
    /// Ansicht um ein Screen-Delta verschieben
    PanView { screen_delta: Vec2 },
    /// Zoomen, optional um eine Pixel-Position
    ZoomView {
        factor: f32,
        focus_screen: Option<Vec2>,
    },
    /// Optionen übernehmen und speichern
    ApplyOptions { options: EditorOptions },
    /// Optionen auf Standard zurücksetzen und speichern
    ResetOptions,
}
