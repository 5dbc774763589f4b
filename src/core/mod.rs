//! Core-Domänentypen: Szenen-Objekte, Shapes, geschichtete Szene, Kamera, Spatial-Index.

pub mod camera;
mod error;
pub mod object;
pub mod scene;
pub mod shape;
pub mod spatial;

pub use camera::Camera2D;
pub use error::SceneError;
pub use object::{ObjectId, PointObject, SceneObject, TextObject};
pub use scene::{LayeredScene, SceneCommand};
pub use shape::{CurveRange, Shape, ShapeStyle};
pub use spatial::{PointIndex, PointMatch};
