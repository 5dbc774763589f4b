//! Besitz temporärer Highlight-Objekte im Front-Layer.
//!
//! Jedes Werkzeug hält eigene `HighlightSet`s. Jedes `add_*` erzeugt genau einen
//! `AddToFrontLayer`-Befehl und merkt sich die ID; `clear` liefert die passenden
//! `RemoveFromFrontLayer`-Befehle.

use glam::Vec2;

use crate::core::{ObjectId, PointObject, SceneCommand, SceneObject, Shape, ShapeStyle};

/// Menge der aktuell sichtbaren, eigenen Highlights.
#[derive(Debug, Default)]
pub struct HighlightSet {
    ids: Vec<ObjectId>,
}

impl HighlightSet {
    /// Erstellt eine leere Menge.
    pub fn new() -> Self {
        Self::default()
    }

    /// Fügt ein beliebiges Objekt als Highlight hinzu.
    pub fn add(&mut self, object: SceneObject) -> SceneCommand {
        let id = ObjectId::new();
        self.ids.push(id);
        SceneCommand::AddToFrontLayer { id, object }
    }

    /// Vergrößerter Punkt als Highlight.
    pub fn add_point(&mut self, position: Vec2, scale: f32) -> SceneCommand {
        self.add(PointObject::highlighted(position, scale).into())
    }

    /// Polylinie als Highlight. `None` bei weniger als zwei Punkten.
    pub fn add_polyline(&mut self, points: &[Vec2], stroke_width: f32) -> Option<SceneCommand> {
        let shape = Shape::polyline(points.to_vec()).ok()?.with_style(ShapeStyle {
            fill: false,
            stroke_width,
            scale: 1.0,
        });
        Some(self.add(shape.into()))
    }

    /// Entfernt alle Highlights.
    pub fn clear(&mut self) -> Vec<SceneCommand> {
        self.ids
            .drain(..)
            .map(|id| SceneCommand::RemoveFromFrontLayer { id })
            .collect()
    }

    /// Anzahl sichtbarer Highlights.
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Keine Highlights sichtbar?
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_add_has_matching_remove() {
        let mut set = HighlightSet::new();
        let a = set.add_point(Vec2::ZERO, 1.3);
        let b = set
            .add_polyline(&[Vec2::ZERO, Vec2::X], 0.05)
            .expect("Polylinie erwartet");
        assert_eq!(set.len(), 2);

        let removed = set.clear();
        assert_eq!(
            removed,
            vec![
                SceneCommand::RemoveFromFrontLayer { id: a.id() },
                SceneCommand::RemoveFromFrontLayer { id: b.id() },
            ]
        );
        assert!(set.is_empty());
        assert!(set.clear().is_empty());
    }

    #[test]
    fn degenerate_polyline_adds_nothing() {
        let mut set = HighlightSet::new();
        assert!(set.add_polyline(&[Vec2::ONE], 0.05).is_none());
        assert!(set.is_empty());
    }
}
