//! Application Controller für zentrale Event-Verarbeitung.

use super::{AppCommand, AppIntent, AppState};

/// Orchestriert UI-Events und Use-Cases auf den AppState.
#[derive(Default)]
pub struct AppController;

impl AppController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    ///
    /// Bricht beim ersten fehlgeschlagenen Command ab; ein Werkzeug-Fehler hat
    /// die Interaktion zu diesem Zeitpunkt bereits beendet.
    pub fn handle_intent(&mut self, state: &mut AppState, intent: AppIntent) -> anyhow::Result<()> {
        let commands = self.map_intent_to_commands(state, intent);
        for command in commands {
            self.handle_command(state, command)?;
        }

        Ok(())
    }

    fn map_intent_to_commands(&self, state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
        super::intent_mapping::map_intent_to_commands(state, intent)
    }

    /// Führt mutierende Commands auf dem AppState aus.
    /// Dispatcht an Feature-Handler in `handlers/`.
    pub fn handle_command(
        &mut self,
        state: &mut AppState,
        command: AppCommand,
    ) -> anyhow::Result<()> {
        state.command_log.record(&command);
        use super::handlers;

        match command {
            // === Werkzeuge ===
            AppCommand::SetEditorTool { tool } => handlers::tool::select(state, tool),
            AppCommand::ToolPointerMove { screen_pos } => {
                handlers::tool::pointer_move(state, screen_pos)?
            }
            AppCommand::ToolPointerDown { screen_pos } => {
                handlers::tool::pointer_down(state, screen_pos)?
            }
            AppCommand::ToolPointerUp { screen_pos } => {
                handlers::tool::pointer_up(state, screen_pos)?
            }
            AppCommand::ToolPointerEnter => handlers::tool::pointer_enter(state),
            AppCommand::ToolPointerLeave => handlers::tool::pointer_leave(state),
            AppCommand::ToolKeyDown { key } => handlers::tool::key_down(state, &key)?,
            AppCommand::ToolKeyUp { key } => handlers::tool::key_up(state, &key),
            AppCommand::ToolCancel => handlers::tool::cancel(state),
            AppCommand::PlaceAtDistance { distance } => {
                handlers::tool::place_at_distance(state, distance)?
            }

            // === Ansicht ===
            AppCommand::ResetView => handlers::view::reset(state)?,
            AppCommand::SetViewportSize { size } => handlers::view::resize(state, size)?,
            AppCommand::PanView { screen_delta } => handlers::view::drag(state, screen_delta)?,
            AppCommand::ZoomView {
                factor,
                focus_screen,
            } => handlers::view::zoom(state, factor, focus_screen)?,

            // === Optionen ===
            AppCommand::ApplyOptions { options } => {
                handlers::options::apply_options(state, options)?
            }
            AppCommand::ResetOptions => handlers::options::reset_options(state)?,
        }

        Ok(())
    }
}
