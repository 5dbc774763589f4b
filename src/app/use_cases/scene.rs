//! Use-Case-Funktionen für Szenen-Änderungen.

use crate::app::AppState;
use crate::core::{ObjectId, SceneCommand, SceneObject};

/// Wendet Werkzeug-Befehle in Reihenfolge auf die Szene an.
pub fn apply_commands(state: &mut AppState, commands: Vec<SceneCommand>) {
    if commands.is_empty() {
        return;
    }
    log::debug!("{} Szenen-Befehle anwenden", commands.len());
    state.scene.apply_all(commands);
}

/// Fügt ein Objekt in den Haupt-Layer ein (z.B. beim Laden durch den Host).
pub fn add_object(state: &mut AppState, object: impl Into<SceneObject>) -> ObjectId {
    state.scene.add_to_main(object)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::PointObject;
    use glam::Vec2;

    #[test]
    fn commands_are_applied_in_order() {
        let mut state = AppState::new();
        let id = ObjectId::new();

        apply_commands(
            &mut state,
            vec![
                SceneCommand::AddToFrontLayer {
                    id,
                    object: PointObject::new(Vec2::ZERO).into(),
                },
                SceneCommand::RemoveFromFrontLayer { id },
            ],
        );

        assert_eq!(state.highlight_count(), 0);
    }

    #[test]
    fn add_object_lands_in_main_layer() {
        let mut state = AppState::new();
        let id = add_object(&mut state, PointObject::new(Vec2::ONE));
        assert!(state.scene.main_object(id).is_some());
        assert_eq!(state.object_count(), 1);
    }
}
