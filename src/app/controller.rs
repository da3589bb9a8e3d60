//! Application Controller für zentrale Event-Verarbeitung.

use super::render_scene;
use super::{AppCommand, AppIntent, AppState};
use crate::shared::GridScene;

/// Orchestriert UI-Events und Use-Cases auf den AppState.
#[derive(Default)]
pub struct AppController;

impl AppController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
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
        state.command_log.record(state.editor.current_floor, &command);
        use super::handlers;

        match command {
            // === Platzierung ===
            AppCommand::ClickCell { pos } => handlers::editing::click_cell(state, pos),
            AppCommand::SetFloor { floor } => handlers::editing::set_floor(state, floor),
            AppCommand::SetTool { tool } => handlers::editing::set_tool(state, tool),
            AppCommand::ChoosePoleEndFloor { end_floor } => {
                handlers::editing::choose_pole_end_floor(state, end_floor)
            }
            AppCommand::CancelPlacement => handlers::editing::cancel_placement(state),
            AppCommand::ResetLayout => handlers::editing::reset_layout(state),

            // === Export ===
            AppCommand::RequestSaveExportDialog { file } => {
                handlers::export::request_save_dialog(state, file)
            }
            AppCommand::SaveExportFile { file, path } => {
                handlers::export::save_file(state, file, path)?
            }
            AppCommand::RequestExportDirDialog => handlers::export::request_dir_dialog(state),
            AppCommand::ExportAllToDir { path } => handlers::export::export_all(state, path)?,
            AppCommand::CopyExportToClipboard { file } => {
                handlers::export::copy_to_clipboard(state, file)
            }

            // === Dialoge & Anwendungssteuerung ===
            AppCommand::DismissRejectionNotice => handlers::dialog::dismiss_rejection(state),
            AppCommand::OpenResetConfirm => handlers::dialog::open_reset_confirm(state),
            AppCommand::CloseResetConfirm => handlers::dialog::close_reset_confirm(state),
            AppCommand::OpenOptionsDialog => handlers::dialog::open_options_dialog(state),
            AppCommand::CloseOptionsDialog => handlers::dialog::close_options_dialog(state),
            AppCommand::ApplyOptions { options } => {
                handlers::dialog::apply_options(state, options)?
            }
            AppCommand::ResetOptions => handlers::dialog::reset_options(state)?,
            AppCommand::ClearStatusMessage => handlers::dialog::clear_status_message(state),
            AppCommand::RequestExit => handlers::dialog::request_exit(state),
        }

        Ok(())
    }

    /// Baut die Raster-Szene des aktuellen Stockwerks aus dem AppState.
    pub fn build_grid_scene(&self, state: &AppState) -> GridScene {
        render_scene::build(state)
    }
}
