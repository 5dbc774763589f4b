//! Handler für Ansichtsänderungen.
//!
//! Nach jeder Kamera-Änderung liegt unter dem Zeiger eine andere
//! Szenen-Position; das aktive Werkzeug erhält die letzte Zeigerposition erneut.

use glam::Vec2;

use super::tool;
use crate::app::use_cases;
use crate::app::AppState;

fn resync_pointer(state: &mut AppState) -> anyhow::Result<()> {
    match state.ui.pointer_screen_position {
        Some(screen_pos) if state.ui.pointer_inside => tool::pointer_move(state, screen_pos),
        _ => Ok(()),
    }
}

/// Neue Viewport-Größe.
pub fn resize(state: &mut AppState, size: [f32; 2]) -> anyhow::Result<()> {
    use_cases::view::resize(state, size);
    resync_pointer(state)
}

/// Ansicht per Zeiger verschieben.
pub fn drag(state: &mut AppState, screen_delta: Vec2) -> anyhow::Result<()> {
    use_cases::view::drag(state, screen_delta);
    resync_pointer(state)
}

/// Zoom, optional um eine Pixel-Position.
pub fn zoom(state: &mut AppState, factor: f32, focus_screen: Option<Vec2>) -> anyhow::Result<()> {
    use_cases::view::zoom(state, factor, focus_screen);
    resync_pointer(state)
}

/// Kamera zurücksetzen.
pub fn reset(state: &mut AppState) -> anyhow::Result<()> {
    use_cases::view::reset(state);
    resync_pointer(state)
}
