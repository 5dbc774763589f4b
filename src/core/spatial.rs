//! Spatial-Index (KD-Tree) für schnelle Punkt-Abfragen.

use glam::Vec2;
use kiddo::{KdTree, SquaredEuclidean};

use super::ObjectId;

/// Ergebnis einer Distanzabfrage gegen den Punkt-Index.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointMatch {
    /// ID des gefundenen Punkts
    pub id: ObjectId,
    /// Position des Punkts
    pub position: Vec2,
    /// Euklidische Distanz zum Suchpunkt
    pub distance: f32,
    /// Rang in der Speicherreihenfolge des Layers
    pub rank: usize,
}

/// Read-only Index über alle Standalone-Punkte des Haupt-Layers.
///
/// Einträge behalten ihren Rang in der Speicherreihenfolge, damit Abfragen
/// "erster Treffer" statt "nächster Treffer" beantworten können.
#[derive(Debug, Clone)]
pub struct PointIndex {
    tree: KdTree<f64, 2>,
    entries: Vec<(ObjectId, Vec2)>,
}

impl PointIndex {
    /// Erstellt einen leeren Index.
    pub fn empty() -> Self {
        Self {
            tree: (&Vec::<[f64; 2]>::new()).into(),
            entries: Vec::new(),
        }
    }

    /// Baut einen neuen Index; die Iterationsreihenfolge bestimmt den Rang.
    pub fn from_points(points: impl IntoIterator<Item = (ObjectId, Vec2)>) -> Self {
        let entries: Vec<(ObjectId, Vec2)> = points.into_iter().collect();
        let coords: Vec<[f64; 2]> = entries
            .iter()
            .map(|(_, p)| [p.x as f64, p.y as f64])
            .collect();
        let tree: KdTree<f64, 2> = (&coords).into();
        Self { tree, entries }
    }

    /// Gibt die Anzahl indexierter Punkte zurück.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Gibt `true` zurück, wenn keine Punkte im Index liegen.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Findet den nächsten Punkt zur gegebenen Weltposition.
    pub fn nearest(&self, query: Vec2) -> Option<PointMatch> {
        if self.is_empty() {
            return None;
        }

        let result = self
            .tree
            .nearest_one::<SquaredEuclidean>(&[query.x as f64, query.y as f64]);
        self.entry_match(result.item as usize, result.distance)
    }

    /// Erster Punkt in Speicherreihenfolge mit Distanz strikt kleiner `radius`.
    ///
    /// Keine Distanz-Rangfolge: ein weiter entfernter, früher gespeicherter Punkt
    /// gewinnt gegen einen näheren, später gespeicherten.
    pub fn first_within(&self, query: Vec2, radius: f32) -> Option<PointMatch> {
        if self.is_empty() || radius <= 0.0 {
            return None;
        }

        let radius_sq = (radius as f64) * (radius as f64);
        self.tree
            .within::<SquaredEuclidean>(&[query.x as f64, query.y as f64], radius_sq)
            .into_iter()
            .filter(|entry| entry.distance < radius_sq)
            .min_by_key(|entry| entry.item)
            .and_then(|entry| self.entry_match(entry.item as usize, entry.distance))
    }

    fn entry_match(&self, rank: usize, distance_sq: f64) -> Option<PointMatch> {
        let (id, position) = *self.entries.get(rank)?;
        Some(PointMatch {
            id,
            position,
            distance: (distance_sq as f32).sqrt(),
            rank,
        })
    }
}

impl Default for PointIndex {
    fn default() -> Self {
        Self::empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_points() -> Vec<(ObjectId, Vec2)> {
        vec![
            (ObjectId::new(), Vec2::new(0.0, 0.0)),
            (ObjectId::new(), Vec2::new(10.0, 0.0)),
            (ObjectId::new(), Vec2::new(4.0, 3.0)),
        ]
    }

    #[test]
    fn nearest_returns_expected_point() {
        let points = sample_points();
        let index = PointIndex::from_points(points.clone());
        let nearest = index
            .nearest(Vec2::new(3.9, 2.9))
            .expect("Treffer erwartet");

        assert_eq!(nearest.id, points[2].0);
        assert!(nearest.distance < 0.2);
    }

    #[test]
    fn first_within_prefers_storage_order_over_distance() {
        let first = ObjectId::new();
        let second = ObjectId::new();
        let index = PointIndex::from_points(vec![
            (first, Vec2::new(0.15, 0.0)),
            (second, Vec2::new(0.01, 0.0)),
        ]);

        let hit = index
            .first_within(Vec2::ZERO, 0.2)
            .expect("Treffer erwartet");
        assert_eq!(hit.id, first);
        assert_eq!(hit.rank, 0);
    }

    #[test]
    fn first_within_is_strict() {
        let index = PointIndex::from_points(vec![(ObjectId::new(), Vec2::new(0.5, 0.0))]);
        assert!(index.first_within(Vec2::ZERO, 0.5).is_none());
        assert!(index.first_within(Vec2::ZERO, 0.51).is_some());
    }

    #[test]
    fn empty_index_has_no_entries() {
        let index = PointIndex::empty();

        assert!(index.is_empty());
        assert_eq!(index.len(), 0);
        assert!(index.nearest(Vec2::ZERO).is_none());
        assert!(index.first_within(Vec2::ZERO, 1.0).is_none());
    }
}
