//! Sketch-Studio Editor Library.
//! Snapping-Cursor, Kurven-Graph-Tracer und Zeichenwerkzeuge eines 2D-Vektor-Editors.

pub mod app;
pub mod core;
pub mod shared;

pub use app::{
    AppCommand, AppController, AppIntent, AppState, EditorTool, EditorToolState, Key, UiState,
    ViewState,
};
pub use core::{
    Camera2D, CurveRange, LayeredScene, ObjectId, PointIndex, PointMatch, PointObject,
    SceneCommand, SceneError, SceneObject, Shape, ShapeStyle, TextObject,
};
pub use shared::{EditorOptions, Tolerance};
