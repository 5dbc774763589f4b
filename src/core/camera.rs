//! 2D-Kamera für Pan und Zoom.

use glam::Vec2;

use crate::shared::options::{CAMERA_BASE_WORLD_EXTENT, CAMERA_ZOOM_MAX, CAMERA_ZOOM_MIN};

/// 2D-Kamera mit Pan und Zoom
#[derive(Debug, Clone)]
pub struct Camera2D {
    /// Position der Kamera in Welt-Koordinaten
    pub position: Vec2,
    /// Zoom-Level (1.0 = normal, 2.0 = doppelt so groß)
    pub zoom: f32,
}

impl Camera2D {
    /// Sichtbare Welt-Halbhöhe bei Zoom 1.0.
    pub const BASE_WORLD_EXTENT: f32 = CAMERA_BASE_WORLD_EXTENT;
    /// Minimaler Zoom-Faktor.
    pub const ZOOM_MIN: f32 = CAMERA_ZOOM_MIN;
    /// Maximaler Zoom-Faktor.
    pub const ZOOM_MAX: f32 = CAMERA_ZOOM_MAX;

    /// Erstellt eine neue Kamera
    pub fn new() -> Self {
        Self {
            position: Vec2::ZERO,
            zoom: 1.0,
        }
    }

    /// Zentriert die Kamera auf einen Punkt
    pub fn look_at(&mut self, target: Vec2) {
        self.position = target;
    }

    /// Verschiebt die Kamera (Pan)
    pub fn pan(&mut self, delta: Vec2) {
        self.position += delta;
    }

    /// Ändert den Zoom-Level
    pub fn zoom_by(&mut self, factor: f32) {
        self.zoom_by_clamped(factor, Self::ZOOM_MIN, Self::ZOOM_MAX);
    }

    /// Ändert den Zoom-Level innerhalb konfigurierbarer Grenzen.
    pub fn zoom_by_clamped(&mut self, factor: f32, min: f32, max: f32) {
        self.zoom = (self.zoom * factor).clamp(min.min(max), max.max(min));
    }

    /// Konvertiert Screen-Koordinaten (Ursprung oben links, Y nach unten)
    /// zu Szenen-Koordinaten (Y nach oben).
    pub fn screen_to_world(&self, screen_pos: Vec2, screen_size: Vec2) -> Vec2 {
        let size = screen_size.max(Vec2::ONE);
        let ndc = Vec2::new(
            screen_pos.x / size.x * 2.0 - 1.0,
            -(screen_pos.y / size.y * 2.0 - 1.0),
        );
        let aspect = size.x / size.y;
        Vec2::new(
            ndc.x * Self::BASE_WORLD_EXTENT * aspect / self.zoom,
            ndc.y * Self::BASE_WORLD_EXTENT / self.zoom,
        ) + self.position
    }

    /// Umkehrung von [`Camera2D::screen_to_world`].
    pub fn world_to_screen(&self, world_pos: Vec2, screen_size: Vec2) -> Vec2 {
        let size = screen_size.max(Vec2::ONE);
        let aspect = size.x / size.y;
        let rel = (world_pos - self.position) * self.zoom / Self::BASE_WORLD_EXTENT;
        let ndc = Vec2::new(rel.x / aspect, rel.y);
        Vec2::new((ndc.x + 1.0) * 0.5 * size.x, (1.0 - ndc.y) * 0.5 * size.y)
    }

    /// Berechnet den Umrechnungsfaktor von Screen-Pixeln zu Welt-Einheiten.
    pub fn world_per_pixel(&self, viewport_height: f32) -> f32 {
        2.0 * Self::BASE_WORLD_EXTENT / (self.zoom * viewport_height.max(1.0))
    }
}

impl Default for Camera2D {
    fn default() -> Self {
        Self::new()
    }
}
