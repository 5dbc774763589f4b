//! Affine Hilfen für interaktives Verschieben, Drehen und Skalieren.
//!
//! Alle Drehungen und Skalierungen wirken um einen Welt-Punkt und werden
//! links an die bestehende Transformation multipliziert.

use glam::{Affine2, Vec2};

/// Drehung um `pivot` (Radiant, gegen den Uhrzeigersinn).
pub fn rotation_about(pivot: Vec2, angle: f32) -> Affine2 {
    Affine2::from_translation(pivot)
        * Affine2::from_angle(angle)
        * Affine2::from_translation(-pivot)
}

/// Gleichmäßige Skalierung um `center`.
pub fn scale_about(center: Vec2, factor: f32) -> Affine2 {
    Affine2::from_translation(center)
        * Affine2::from_scale(Vec2::splat(factor))
        * Affine2::from_translation(-center)
}

/// Drehwinkel der Transformation (Richtung der lokalen x-Achse).
pub fn rotation_angle(transform: &Affine2) -> f32 {
    let x_axis = transform.matrix2.x_axis;
    x_axis.y.atan2(x_axis.x)
}

/// Skalierung der Transformation entlang der lokalen x-Achse.
pub fn uniform_scale(transform: &Affine2) -> f32 {
    transform.matrix2.x_axis.length()
}

/// Rundet auf ein Vielfaches von `step`.
pub fn round_to_step(value: f32, step: f32) -> f32 {
    if step <= 0.0 {
        return value;
    }
    (value / step).round() * step
}

/// Rundet einen Winkel auf ganze Grad.
pub fn round_to_whole_degrees(angle: f32) -> f32 {
    angle.to_degrees().round().to_radians()
}

/// Richtungswinkel von `from` nach `to`.
pub fn heading(from: Vec2, to: Vec2) -> f32 {
    let d = to - from;
    d.y.atan2(d.x)
}
