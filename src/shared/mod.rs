//! Geteilte Typen für layer-übergreifende Verträge.
//!
//! Enthält Konfiguration, Toleranzklassen und die zustandslose Geometrie,
//! die von `core` und `app` gleichermaßen genutzt werden.

pub mod geometry;
pub mod options;
mod tolerance;
pub mod transform;

pub use options::EditorOptions;
pub use options::{CURVE_ADJACENCY_EPSILON, GRID_SPACING, SNAP_PROXIMITY};
pub use tolerance::Tolerance;
