//! Drehen eines Shapes um einen Standalone-Punkt.
//!
//! Ablauf: Shape anklicken, Drehpunkt anklicken, dann den Arm vom Drehpunkt
//! zur Shape-Mitte greifen und ziehen. Der Drehwinkel folgt dem Zeiger ohne
//! Rundung. Loslassen behält die Drehung und lässt den Arm greifbar.
//!
//! Aufgeteilt in:
//! - `state`     : Phasen, Highlights, Drehung
//! - `lifecycle` : SketchTool-Implementierung

mod lifecycle;
mod state;

pub use state::{RotateAboutPointTool, RotatePhase};
