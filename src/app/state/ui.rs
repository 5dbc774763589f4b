use glam::Vec2;

use crate::app::tools::SnapKind;
use crate::shared::geometry::ArcLengthPlacement;

/// UI-bezogener Anwendungszustand (Ausgaben an den Host)
#[derive(Debug, Clone, Default)]
pub struct UiState {
    /// Aufgelöste Cursor-Position (None außerhalb des Viewports)
    pub cursor_position: Option<Vec2>,
    /// Welche Fang-Stufe die Cursor-Position bestimmt hat
    pub snap: Option<SnapKind>,
    /// Anzeige des Punkt-auf-Kurve-Tools (Position, Distanz, Gesamtlänge)
    pub placement_readout: Option<ArcLengthPlacement>,
    /// Letzte Zeigerposition in Screen-Pixeln
    pub pointer_screen_position: Option<Vec2>,
    /// Zeiger befindet sich im Viewport
    pub pointer_inside: bool,
    /// Statustext des aktiven Werkzeugs
    pub status_text: String,
    /// Temporäre Statusnachricht (z.B. abgebrochene Interaktion)
    pub status_message: Option<String>,
}

impl UiState {
    /// Erstellt den Standard-UI-Zustand.
    pub fn new() -> Self {
        Self::default()
    }
}
