//! Mapping von UI-Intents auf mutierende App-Commands.

use super::tools::Key;
use super::{AppCommand, AppIntent, AppState};

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
pub fn map_intent_to_commands(state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    let has_active_tool = state.editor.tool_manager.active_index().is_some();

    match intent {
        AppIntent::PointerMoved { screen_pos } if has_active_tool => {
            vec![AppCommand::ToolPointerMove { screen_pos }]
        }
        AppIntent::PointerPressed { screen_pos } if has_active_tool => {
            vec![AppCommand::ToolPointerDown { screen_pos }]
        }
        AppIntent::PointerReleased { screen_pos } if has_active_tool => {
            vec![AppCommand::ToolPointerUp { screen_pos }]
        }
        AppIntent::PointerMoved { .. }
        | AppIntent::PointerPressed { .. }
        | AppIntent::PointerReleased { .. } => Vec::new(),
        AppIntent::PointerEntered => vec![AppCommand::ToolPointerEnter],
        AppIntent::PointerLeft => vec![AppCommand::ToolPointerLeave],
        AppIntent::KeyPressed { key: Key::Escape } => vec![AppCommand::ToolCancel],
        AppIntent::KeyPressed { key } => vec![AppCommand::ToolKeyDown { key }],
        AppIntent::KeyReleased { key: Key::Escape } => Vec::new(),
        AppIntent::KeyReleased { key } => vec![AppCommand::ToolKeyUp { key }],
        AppIntent::CancelRequested => vec![AppCommand::ToolCancel],
        AppIntent::SetEditorToolRequested { tool } => vec![AppCommand::SetEditorTool { tool }],
        AppIntent::PlacementDistanceEntered { distance } => {
            vec![AppCommand::PlaceAtDistance { distance }]
        }
        AppIntent::ResetCameraRequested => vec![AppCommand::ResetView],
        AppIntent::ViewportResized { size } => vec![AppCommand::SetViewportSize { size }],
        AppIntent::ViewDragged { screen_delta } => vec![AppCommand::PanView { screen_delta }],
        AppIntent::WheelScrolled { steps, screen_pos } => vec![AppCommand::ZoomView {
            factor: state.options.camera_scroll_zoom_step.powf(steps),
            focus_screen: Some(screen_pos),
        }],
        AppIntent::OptionsChanged { options } => vec![AppCommand::ApplyOptions { options }],
        AppIntent::ResetOptionsRequested => vec![AppCommand::ResetOptions],
    }
}

#[cfg(test)]
mod tests;
