//! Auswahl-Tool: wählt ein Objekt und transformiert es per Ziehen.
//!
//! **Wählen:** Ein Klick wählt den nächsten Standalone-Punkt im Pick-Radius,
//! sonst das oberste Shape unter dem Zeiger. Um die Auswahl liegt ein
//! gepolsterter Rahmen mit Dreh-Griff und Eck-Griffen (nur Shapes).
//! **Ziehen:** Verschieben in 0.1-Schritten, Drehen um die Rahmenmitte in
//! ganzen Grad, Skalieren in 0.1-Schritten (mindestens 0.1).
//! Entfernen löscht die Auswahl.
//!
//! Aufgeteilt in:
//! - `state`     : Auswahl, Rahmen-Geometrie, Zieh-Gesten
//! - `lifecycle` : SketchTool-Implementierung

mod lifecycle;
mod state;

pub use state::{DragGesture, FrameHandle, SelectTool, SelectionFrame};
