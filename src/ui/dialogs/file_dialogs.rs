use crate::app::{AppIntent, UiState};
use crate::shared::EditorOptions;

fn path_to_ui_string(path: &std::path::Path) -> String {
    path.to_string_lossy().into_owned()
}

/// Verarbeitet ausstehende Datei-Dialoge und gibt AppIntents zurück.
pub fn handle_file_dialogs(ui_state: &mut UiState, options: &EditorOptions) -> Vec<AppIntent> {
    let mut events = Vec::new();

    // Speichern-Dialog für eine einzelne Exportdatei
    if let Some(file) = ui_state.pending_save_dialog.take() {
        let mut dialog = rfd::FileDialog::new()
            .add_filter("Maze Config", &["txt"])
            .set_file_name(file.file_name());
        if let Some(dir) = &options.last_export_dir {
            dialog = dialog.set_directory(dir);
        }

        if let Some(path) = dialog.save_file() {
            events.push(AppIntent::ExportSavePathSelected {
                file,
                path: path_to_ui_string(&path),
            });
        }
    }

    // Ordner-Dialog für "Download All"
    if ui_state.show_export_dir_dialog {
        ui_state.show_export_dir_dialog = false;

        let mut dialog = rfd::FileDialog::new();
        if let Some(dir) = &options.last_export_dir {
            dialog = dialog.set_directory(dir);
        }

        if let Some(path) = dialog.pick_folder() {
            events.push(AppIntent::ExportDirSelected {
                path: path_to_ui_string(&path),
            });
        }
    }

    events
}
