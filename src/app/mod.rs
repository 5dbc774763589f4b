//! Application-Layer: Controller, State, Events, Werkzeuge und Use-Cases.

pub mod command_log;
pub mod controller;
pub mod events;
pub mod handlers;
mod intent_mapping;
/// Application State und Controller
///
/// Dieses Modul verwaltet den Zustand der Anwendung (Szene, View, Werkzeuge).
pub mod state;
pub mod tools;
pub mod use_cases;

pub use crate::core::Camera2D;
pub use command_log::CommandLog;
pub use controller::AppController;
pub use events::{AppCommand, AppIntent};
pub use state::{AppState, EditorTool, EditorToolState, UiState, ViewState};
pub use tools::Key;
