//! Mapping von UI-Intents auf mutierende App-Commands.

use super::{AppCommand, AppIntent, AppState};
use crate::core::FLOOR_COUNT;

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
pub fn map_intent_to_commands(state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    match intent {
        AppIntent::CellClicked { pos } => {
            // Modale Fenster blockieren das Raster
            if state.ui.has_modal() {
                return Vec::new();
            }
            vec![AppCommand::ClickCell { pos }]
        }
        AppIntent::FloorSelected { floor } => vec![AppCommand::SetFloor { floor }],
        AppIntent::FloorStepRequested { delta } => {
            let target = i16::from(state.editor.current_floor) + i16::from(delta);
            if (0..i16::from(FLOOR_COUNT)).contains(&target) {
                vec![AppCommand::SetFloor {
                    floor: target as u8,
                }]
            } else {
                Vec::new()
            }
        }
        AppIntent::ToolToggled { tool } => {
            let next = if state.editor.selected_tool == Some(tool) {
                None
            } else {
                Some(tool)
            };
            vec![AppCommand::SetTool { tool: next }]
        }
        AppIntent::ToolSelectionCleared => vec![AppCommand::SetTool { tool: None }],
        AppIntent::PoleEndFloorChosen { end_floor } => {
            vec![AppCommand::ChoosePoleEndFloor { end_floor }]
        }
        AppIntent::PlacementCancelRequested => vec![AppCommand::CancelPlacement],
        AppIntent::RejectionNoticeDismissed => vec![AppCommand::DismissRejectionNotice],
        AppIntent::ResetRequested => {
            if state.options.confirm_reset {
                vec![AppCommand::OpenResetConfirm]
            } else {
                vec![AppCommand::ResetLayout]
            }
        }
        AppIntent::ResetConfirmed => vec![AppCommand::ResetLayout, AppCommand::CloseResetConfirm],
        AppIntent::ResetCancelled => vec![AppCommand::CloseResetConfirm],
        AppIntent::ExportDownloadRequested { file } => {
            vec![AppCommand::RequestSaveExportDialog { file }]
        }
        AppIntent::ExportSavePathSelected { file, path } => {
            vec![AppCommand::SaveExportFile { file, path }]
        }
        AppIntent::ExportAllRequested => vec![AppCommand::RequestExportDirDialog],
        AppIntent::ExportDirSelected { path } => vec![AppCommand::ExportAllToDir { path }],
        AppIntent::ExportCopyRequested { file } => {
            vec![AppCommand::CopyExportToClipboard { file }]
        }
        AppIntent::OpenOptionsDialogRequested => vec![AppCommand::OpenOptionsDialog],
        AppIntent::CloseOptionsDialogRequested => vec![AppCommand::CloseOptionsDialog],
        AppIntent::OptionsChanged { options } => vec![AppCommand::ApplyOptions { options }],
        AppIntent::ResetOptionsRequested => vec![AppCommand::ResetOptions],
        AppIntent::StatusMessageDismissed => vec![AppCommand::ClearStatusMessage],
        AppIntent::ExitRequested => vec![AppCommand::RequestExit],
    }
}

#[cfg(test)]
mod tests;
