//! Handler für Export, Download und Zwischenablage.

use crate::app::use_cases;
use crate::app::AppState;
use crate::export::ExportFile;

/// Öffnet den Speichern-Dialog für eine Exportdatei.
pub fn request_save_dialog(state: &mut AppState, file: ExportFile) {
    state.ui.pending_save_dialog = Some(file);
}

/// Schreibt eine Exportdatei an den gewählten Pfad.
pub fn save_file(state: &mut AppState, file: ExportFile, path: String) -> anyhow::Result<()> {
    use_cases::export::save_export_file(state, file, &path)
}

/// Öffnet den Ordner-Dialog für den Gesamtexport.
pub fn request_dir_dialog(state: &mut AppState) {
    state.ui.show_export_dir_dialog = true;
}

/// Schreibt alle Exportdateien in den gewählten Ordner.
pub fn export_all(state: &mut AppState, path: String) -> anyhow::Result<()> {
    use_cases::export::export_all_to_dir(state, &path)
}

/// Merkt den Dateiinhalt für die Zwischenablage vor.
pub fn copy_to_clipboard(state: &mut AppState, file: ExportFile) {
    use_cases::export::queue_clipboard_copy(state, file);
}
