//! Punkt-auf-Kurve-Tool: platziert einen Standalone-Punkt entlang einer Kurve.
//!
//! **Kurve wählen:** Die nächste Teilkurve des ersten Shapes unter dem Zeiger
//! wird hervorgehoben; ein Klick wechselt in den Positionierungs-Modus.
//! **Positionieren:** Der Zeiger wird auf die Kurve projiziert, die Anzeige
//! liefert (Position, Bogenlänge, Gesamtlänge). Ein Klick oder eine eingegebene
//! Distanz setzt den Punkt und kehrt zur Kurvenwahl zurück.
//!
//! Aufgeteilt in:
//! - `state`     : Modi, hervorgehobene Kurve, Konstruktor, Platzierung
//! - `lifecycle` : SketchTool-Implementierung

mod lifecycle;
mod state;

pub use state::{HighlightedCurve, PlacementMode, PointOnCurveTool};
