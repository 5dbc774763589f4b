//! Geschichtete Szene: Haupt-Layer (Dokument) und Front-Layer (temporäre Highlights).
//!
//! Tools lesen die Szene nur und liefern `SceneCommand`s; angewendet werden diese
//! zentral über [`LayeredScene::apply`].

use glam::Vec2;
use indexmap::IndexMap;

use super::{ObjectId, PointIndex, PointMatch, SceneObject, Shape};

/// Explizite Mutation eines Layers.
#[derive(Debug, Clone, PartialEq)]
pub enum SceneCommand {
    /// Objekt in den Front-Layer (Highlights, Vorschauen) einfügen
    AddToFrontLayer {
        /// Objekt-ID
        id: ObjectId,
        /// Einzufügendes Objekt
        object: SceneObject,
    },
    /// Objekt aus dem Front-Layer entfernen
    RemoveFromFrontLayer {
        /// Objekt-ID
        id: ObjectId,
    },
    /// Objekt in den Haupt-Layer einfügen
    AddToMainLayer {
        /// Objekt-ID
        id: ObjectId,
        /// Einzufügendes Objekt
        object: SceneObject,
    },
    /// Objekt aus dem Haupt-Layer entfernen
    RemoveFromMainLayer {
        /// Objekt-ID
        id: ObjectId,
    },
}

impl SceneCommand {
    /// ID des betroffenen Objekts.
    pub fn id(&self) -> ObjectId {
        match self {
            SceneCommand::AddToFrontLayer { id, .. }
            | SceneCommand::RemoveFromFrontLayer { id }
            | SceneCommand::AddToMainLayer { id, .. }
            | SceneCommand::RemoveFromMainLayer { id } => *id,
        }
    }
}

/// Szene mit geordnetem Haupt- und Front-Layer.
#[derive(Debug, Clone, Default)]
pub struct LayeredScene {
    main: IndexMap<ObjectId, SceneObject>,
    front: IndexMap<ObjectId, SceneObject>,
    point_index: PointIndex,
}

impl LayeredScene {
    /// Erstellt eine leere Szene.
    pub fn new() -> Self {
        Self::default()
    }

    /// Fügt ein Objekt mit frischer ID in den Haupt-Layer ein.
    pub fn add_to_main(&mut self, object: impl Into<SceneObject>) -> ObjectId {
        let id = ObjectId::new();
        self.apply(SceneCommand::AddToMainLayer {
            id,
            object: object.into(),
        });
        id
    }

    /// Wendet einen Befehl an. Entfernen unbekannter IDs wird ignoriert.
    ///
    /// `AddToMainLayer` mit bekannter ID ersetzt das Objekt, ohne die
    /// Speicherreihenfolge zu ändern.
    pub fn apply(&mut self, command: SceneCommand) {
        match command {
            SceneCommand::AddToFrontLayer { id, object } => {
                self.front.insert(id, object);
            }
            SceneCommand::RemoveFromFrontLayer { id } => {
                if self.front.shift_remove(&id).is_none() {
                    log::warn!("Front-Layer: unbekanntes Objekt {} nicht entfernt", id);
                }
            }
            SceneCommand::AddToMainLayer { id, object } => {
                // Bekannte ID: Objekt wird an seiner Position ersetzt
                let is_point = object.as_point().is_some();
                let replaced_point = self
                    .main
                    .insert(id, object)
                    .is_some_and(|old| old.as_point().is_some());
                if is_point || replaced_point {
                    self.rebuild_point_index();
                }
            }
            SceneCommand::RemoveFromMainLayer { id } => match self.main.shift_remove(&id) {
                Some(object) => {
                    if object.as_point().is_some() {
                        self.rebuild_point_index();
                    }
                }
                None => log::warn!("Haupt-Layer: unbekanntes Objekt {} nicht entfernt", id),
            },
        }
    }

    /// Wendet mehrere Befehle in Reihenfolge an.
    pub fn apply_all(&mut self, commands: impl IntoIterator<Item = SceneCommand>) {
        for command in commands {
            self.apply(command);
        }
    }

    /// Objekt im Haupt-Layer.
    pub fn main_object(&self, id: ObjectId) -> Option<&SceneObject> {
        self.main.get(&id)
    }

    /// Objekt im Front-Layer.
    pub fn front_object(&self, id: ObjectId) -> Option<&SceneObject> {
        self.front.get(&id)
    }

    /// Haupt-Layer in Speicherreihenfolge.
    pub fn main_objects(&self) -> impl Iterator<Item = (ObjectId, &SceneObject)> {
        self.main.iter().map(|(id, object)| (*id, object))
    }

    /// Front-Layer in Speicherreihenfolge.
    pub fn front_objects(&self) -> impl Iterator<Item = (ObjectId, &SceneObject)> {
        self.front.iter().map(|(id, object)| (*id, object))
    }

    /// Alle Shapes des Haupt-Layers in Speicherreihenfolge.
    pub fn shapes(&self) -> impl Iterator<Item = (ObjectId, &Shape)> {
        self.main
            .iter()
            .filter_map(|(id, object)| object.as_shape().map(|shape| (*id, shape)))
    }

    /// Alle Standalone-Punkte des Haupt-Layers in Speicherreihenfolge.
    pub fn points(&self) -> impl Iterator<Item = (ObjectId, Vec2)> + '_ {
        self.main
            .iter()
            .filter_map(|(id, object)| object.as_point().map(|position| (*id, position)))
    }

    /// Shape per ID.
    pub fn shape(&self, id: ObjectId) -> Option<&Shape> {
        self.main.get(&id).and_then(SceneObject::as_shape)
    }

    /// Erster Standalone-Punkt (Speicherreihenfolge) mit Distanz < `radius`.
    pub fn first_point_within(&self, query: Vec2, radius: f32) -> Option<PointMatch> {
        self.point_index.first_within(query, radius)
    }

    /// Nächster Standalone-Punkt mit Distanz < `radius`.
    pub fn nearest_point_within(&self, query: Vec2, radius: f32) -> Option<PointMatch> {
        self.point_index
            .nearest(query)
            .filter(|hit| hit.distance < radius)
    }

    /// KD-Index über die Standalone-Punkte.
    pub fn point_index(&self) -> &PointIndex {
        &self.point_index
    }

    /// Anzahl Objekte im Haupt-Layer.
    pub fn main_len(&self) -> usize {
        self.main.len()
    }

    /// Anzahl Objekte im Front-Layer.
    pub fn front_len(&self) -> usize {
        self.front.len()
    }

    fn rebuild_point_index(&mut self) {
        self.point_index = PointIndex::from_points(self.points());
    }
}
