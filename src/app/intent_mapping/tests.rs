use crate::app::tools::Key;
use crate::app::{AppCommand, AppIntent, AppState, EditorTool};
use glam::Vec2;

use super::map_intent_to_commands;

#[test]
fn escape_maps_to_tool_cancel() {
    let state = AppState::new();

    let commands = map_intent_to_commands(&state, AppIntent::KeyPressed { key: Key::Escape });

    assert_eq!(commands.len(), 1);
    assert!(matches!(commands[0], AppCommand::ToolCancel));
}

#[test]
fn escape_release_maps_to_nothing() {
    let state = AppState::new();

    let commands = map_intent_to_commands(&state, AppIntent::KeyReleased { key: Key::Escape });

    assert!(commands.is_empty());
}

#[test]
fn shift_is_forwarded_to_tool() {
    let state = AppState::new();

    let down = map_intent_to_commands(&state, AppIntent::KeyPressed { key: Key::Shift });
    let up = map_intent_to_commands(&state, AppIntent::KeyReleased { key: Key::Shift });

    assert!(matches!(
        down.as_slice(),
        [AppCommand::ToolKeyDown { key: Key::Shift }]
    ));
    assert!(matches!(
        up.as_slice(),
        [AppCommand::ToolKeyUp { key: Key::Shift }]
    ));
}

#[test]
fn pointer_pressed_maps_to_tool_pointer_down() {
    let state = AppState::new();
    let screen_pos = Vec2::new(120.0, 80.0);

    let commands = map_intent_to_commands(&state, AppIntent::PointerPressed { screen_pos });

    assert_eq!(commands.len(), 1);
    assert!(matches!(
        commands[0],
        AppCommand::ToolPointerDown { screen_pos: p } if p == screen_pos
    ));
}

#[test]
fn set_editor_tool_requested_maps_to_command() {
    let state = AppState::new();

    let commands = map_intent_to_commands(
        &state,
        AppIntent::SetEditorToolRequested {
            tool: EditorTool::ShapeFromCurves,
        },
    );

    assert_eq!(commands.len(), 1);
    assert!(matches!(
        commands[0],
        AppCommand::SetEditorTool {
            tool: EditorTool::ShapeFromCurves
        }
    ));
}

#[test]
fn placement_distance_maps_to_place_command() {
    let state = AppState::new();

    let commands =
        map_intent_to_commands(&state, AppIntent::PlacementDistanceEntered { distance: 1.5 });

    assert!(matches!(
        commands.as_slice(),
        [AppCommand::PlaceAtDistance { distance }] if *distance == 1.5
    ));
}

#[test]
fn pointer_released_maps_to_tool_pointer_up() {
    let state = AppState::new();
    let screen_pos = Vec2::new(40.0, 30.0);

    let commands = map_intent_to_commands(&state, AppIntent::PointerReleased { screen_pos });

    assert!(matches!(
        commands.as_slice(),
        [AppCommand::ToolPointerUp { screen_pos: p }] if *p == screen_pos
    ));
}

#[test]
fn wheel_steps_compound_zoom_factor_around_pointer() {
    let state = AppState::new();
    let screen_pos = Vec2::new(200.0, 150.0);
    let step = state.options.camera_scroll_zoom_step;

    let commands =
        map_intent_to_commands(&state, AppIntent::WheelScrolled { steps: 2.0, screen_pos });

    match commands.as_slice() {
        [AppCommand::ZoomView {
            factor,
            focus_screen,
        }] => {
            assert!((factor - step * step).abs() < 1e-5);
            assert_eq!(*focus_screen, Some(screen_pos));
        }
        other => panic!("ZoomView erwartet, erhalten: {:?}", other),
    }
}

#[test]
fn delete_key_reaches_active_tool() {
    let state = AppState::new();

    let commands = map_intent_to_commands(&state, AppIntent::KeyPressed { key: Key::Delete });

    assert!(matches!(
        commands.as_slice(),
        [AppCommand::ToolKeyDown { key: Key::Delete }]
    ));
}
