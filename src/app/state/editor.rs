use crate::app::tools::ToolManager;

/// Aktives Editor-Werkzeug
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditorTool {
    /// Standard: Standalone-Punkte setzen
    #[default]
    Point,
    /// Gerade Linien zeichnen
    Line,
    /// Polygone aus Eckpunkten
    Polygon,
    /// Neue Flächen aus bestehenden Kurven
    ShapeFromCurves,
    /// Punkt in fester Bogenlänge auf einer Kurve
    PointOnCurve,
    /// Objekte wählen, verschieben, drehen, skalieren, löschen
    Select,
    /// Shape um einen Standalone-Punkt drehen
    RotateAboutPoint,
}

impl EditorTool {
    /// Alle Werkzeuge in Registrierungsreihenfolge.
    pub const ALL: [EditorTool; 7] = [
        EditorTool::Point,
        EditorTool::Line,
        EditorTool::Polygon,
        EditorTool::ShapeFromCurves,
        EditorTool::PointOnCurve,
        EditorTool::Select,
        EditorTool::RotateAboutPoint,
    ];

    /// Index im `ToolManager`.
    pub fn index(self) -> usize {
        match self {
            EditorTool::Point => 0,
            EditorTool::Line => 1,
            EditorTool::Polygon => 2,
            EditorTool::ShapeFromCurves => 3,
            EditorTool::PointOnCurve => 4,
            EditorTool::Select => 5,
            EditorTool::RotateAboutPoint => 6,
        }
    }
}

/// Zustand des aktuellen Editor-Werkzeugs
pub struct EditorToolState {
    /// Aktives Werkzeug
    pub active_tool: EditorTool,
    /// Werkzeug-Manager (Punkt, Linie, Polygon, Kurven-Tracer, …)
    pub tool_manager: ToolManager,
}

impl Default for EditorToolState {
    fn default() -> Self {
        Self::new()
    }
}

impl EditorToolState {
    /// Erstellt den Standard-Werkzeugzustand (Punkt-Tool aktiv).
    pub fn new() -> Self {
        let mut tool_manager = ToolManager::new();
        tool_manager.set_active_tool(EditorTool::default());
        Self {
            active_tool: EditorTool::default(),
            tool_manager,
        }
    }
}
