//! Use-Cases der Ansicht: Viewport-Größe und Kamera, angesteuert in Screen-Pixeln.

use glam::Vec2;

use crate::app::AppState;
use crate::core::Camera2D;

/// Übernimmt die neue Viewport-Größe.
pub fn resize(state: &mut AppState, size: [f32; 2]) {
    state.view.viewport_size = size;
    log::debug!("Viewport: {:.0} x {:.0} px", size[0], size[1]);
}

/// Kamera auf Ursprung und Zoom 1.0.
pub fn reset(state: &mut AppState) {
    state.view.camera = Camera2D::new();
}

/// Verschiebt die Ansicht so, dass der Inhalt dem Zeiger um `screen_delta` folgt.
pub fn drag(state: &mut AppState, screen_delta: Vec2) {
    let world_per_pixel = state
        .view
        .camera
        .world_per_pixel(state.view.viewport().y);
    // Screen-Y zeigt nach unten, Szenen-Y nach oben
    let delta = Vec2::new(-screen_delta.x, screen_delta.y) * world_per_pixel;
    state.view.camera.pan(delta);
}

/// Zoomt um `factor` innerhalb der Options-Grenzen.
///
/// Mit `focus_screen` bleibt der Szenenpunkt unter dieser Pixel-Position stehen.
pub fn zoom(state: &mut AppState, factor: f32, focus_screen: Option<Vec2>) {
    let viewport = state.view.viewport();
    let focus = focus_screen.map(|screen| (screen, state.view.camera.screen_to_world(screen, viewport)));

    state.view.camera.zoom_by_clamped(
        factor,
        state.options.camera_zoom_min,
        state.options.camera_zoom_max,
    );

    if let Some((screen, before)) = focus {
        let after = state.view.camera.screen_to_world(screen, viewport);
        state.view.camera.pan(before - after);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn sized_state() -> AppState {
        let mut state = AppState::new();
        resize(&mut state, [800.0, 600.0]);
        state
    }

    #[test]
    fn drag_moves_content_with_pointer() {
        let mut state = sized_state();
        let viewport = state.view.viewport();
        let grab = Vec2::new(300.0, 200.0);
        let grabbed = state.view.camera.screen_to_world(grab, viewport);

        let delta = Vec2::new(75.0, -30.0);
        drag(&mut state, delta);

        let under_pointer = state.view.camera.screen_to_world(grab + delta, viewport);
        assert_relative_eq!(under_pointer.x, grabbed.x, epsilon = 1e-4);
        assert_relative_eq!(under_pointer.y, grabbed.y, epsilon = 1e-4);
    }

    #[test]
    fn zoom_keeps_scene_point_under_focus() {
        let mut state = sized_state();
        let viewport = state.view.viewport();
        let focus = Vec2::new(620.0, 140.0);
        let before = state.view.camera.screen_to_world(focus, viewport);

        zoom(&mut state, 2.5, Some(focus));

        assert_relative_eq!(state.view.camera.zoom, 2.5);
        let after = state.view.camera.screen_to_world(focus, viewport);
        assert_relative_eq!(after.x, before.x, epsilon = 1e-4);
        assert_relative_eq!(after.y, before.y, epsilon = 1e-4);
    }

    #[test]
    fn zoom_respects_option_limits() {
        let mut state = sized_state();
        state.options.camera_zoom_max = 3.0;

        zoom(&mut state, 10.0, None);
        assert_relative_eq!(state.view.camera.zoom, 3.0);
        assert_eq!(state.view.camera.position, Vec2::ZERO);

        reset(&mut state);
        assert_relative_eq!(state.view.camera.zoom, 1.0);
    }
}
