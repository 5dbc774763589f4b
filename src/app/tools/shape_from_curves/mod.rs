//! Kurven-Graph-Tracer: erzeugt neue Flächen aus bestehenden Kurven.
//!
//! **Ablauf:** Im Leerlauf wird der Standalone-Punkt unter dem Zeiger
//! hervorgehoben. Ein Klick darauf startet eine Sitzung: alle Kurven, die den
//! Anker berühren, liefern Kandidaten-Pfade bis zum nächsten Standalone-Punkt
//! (oder verlängert über gemeinsame Endpunkte bis zu einem offenen Ende).
//! Der Kandidat unter dem Zeiger wird hervorgehoben; ein Klick übernimmt ihn.
//! Endet der übernommene Pfad am Ursprungs-Anker, wird der geschlossene Umriss
//! als gefülltes Polygon in den Haupt-Layer übernommen.
//!
//! Aufgeteilt in:
//! - `state`     : Phasen, Sitzung, Konstruktor, Commit-Logik
//! - `lifecycle` : SketchTool-Implementierung
//! - `tracer`    : Kurven-Graph, Inzidenz-Suche, Verlängerung

mod lifecycle;
mod state;
pub mod tracer;

pub use state::{ShapeFromCurvesTool, TracerPhase, TracingSession};
pub use tracer::{CurveGraph, Orientation, PathEnd, TracedPath};

#[cfg(test)]
mod tests;
