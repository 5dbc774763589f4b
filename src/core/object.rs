//! Szenen-Objekte: Punkte, Shapes und Texte mit stabiler Identität.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use glam::{Affine2, Vec2};

use super::Shape;

static NEXT_OBJECT_ID: AtomicU64 = AtomicU64::new(1);

/// Eindeutige Identität eines Szenen-Objekts.
///
/// Zwei Punkte an derselben Position sind verschiedene Objekte.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObjectId(u64);

impl ObjectId {
    /// Vergibt eine neue, prozessweit eindeutige ID.
    #[allow(clippy::new_without_default)]
    pub fn new() -> Self {
        Self(NEXT_OBJECT_ID.fetch_add(1, Ordering::Relaxed))
    }

    /// Roh-Wert der ID.
    pub fn raw(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Einzelner Punkt der Szene.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointObject {
    /// Position in Welt-Koordinaten
    pub position: Vec2,
    /// Darstellungs-Skalierung (1.0 = normal)
    pub scale: f32,
}

impl PointObject {
    /// Normaler Punkt.
    pub fn new(position: Vec2) -> Self {
        Self {
            position,
            scale: 1.0,
        }
    }

    /// Vergrößerter Highlight-Punkt.
    pub fn highlighted(position: Vec2, scale: f32) -> Self {
        Self { position, scale }
    }
}

/// Text-Objekt ohne Kurven-Geometrie.
#[derive(Debug, Clone, PartialEq)]
pub struct TextObject {
    /// Inhalt
    pub content: String,
    /// Anker-Position
    pub position: Vec2,
}

/// Geschlossene Menge der Objektarten einer Szene.
#[derive(Debug, Clone, PartialEq)]
pub enum SceneObject {
    /// Standalone-Punkt
    Point(PointObject),
    /// Shape mit Kurven
    Shape(Shape),
    /// Text (trägt keine Kurven bei)
    Text(TextObject),
}

impl SceneObject {
    /// Abgetastete Kurven in Welt-Koordinaten. Punkte und Texte liefern keine.
    pub fn sampled_curves(&self) -> Vec<Vec<Vec2>> {
        match self {
            SceneObject::Shape(shape) => shape.curves(),
            SceneObject::Point(_) | SceneObject::Text(_) => Vec::new(),
        }
    }

    /// Position, falls das Objekt ein Punkt ist.
    pub fn as_point(&self) -> Option<Vec2> {
        match self {
            SceneObject::Point(point) => Some(point.position),
            _ => None,
        }
    }

    /// Shape-Referenz, falls vorhanden.
    pub fn as_shape(&self) -> Option<&Shape> {
        match self {
            SceneObject::Shape(shape) => Some(shape),
            _ => None,
        }
    }

    /// Bounding-Box in Welt-Koordinaten. Punkte liefern eine leere Box, Texte `None`.
    pub fn bounds(&self) -> Option<(Vec2, Vec2)> {
        match self {
            SceneObject::Point(point) => Some((point.position, point.position)),
            SceneObject::Shape(shape) => Some(shape.bounds()),
            SceneObject::Text(_) => None,
        }
    }

    /// Kopie mit vorangestellter Welt-Transformation.
    ///
    /// Shapes übernehmen `transform * alt`, Punkte und Texte verschieben ihre Position.
    pub fn transformed(&self, transform: Affine2) -> SceneObject {
        match self {
            SceneObject::Point(point) => SceneObject::Point(PointObject {
                position: transform.transform_point2(point.position),
                ..*point
            }),
            SceneObject::Shape(shape) => {
                let combined = transform * shape.transform;
                SceneObject::Shape(shape.clone().with_transform(combined))
            }
            SceneObject::Text(text) => SceneObject::Text(TextObject {
                content: text.content.clone(),
                position: transform.transform_point2(text.position),
            }),
        }
    }

    /// Kurzname für Log-Ausgaben.
    pub fn kind_name(&self) -> &'static str {
        match self {
            SceneObject::Point(_) => "Punkt",
            SceneObject::Shape(_) => "Shape",
            SceneObject::Text(_) => "Text",
        }
    }
}

impl From<PointObject> for SceneObject {
    fn from(point: PointObject) -> Self {
        SceneObject::Point(point)
    }
}

impl From<Shape> for SceneObject {
    fn from(shape: Shape) -> Self {
        SceneObject::Shape(shape)
    }
}
