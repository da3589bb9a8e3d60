//! Handler für Dialog-State und Anwendungssteuerung.

use crate::app::AppState;
use crate::shared::EditorOptions;

/// Markiert die Anwendung zum Beenden im nächsten Frame.
pub fn request_exit(state: &mut AppState) {
    state.should_exit = true;
}

/// Schließt die Ablehnungs-Meldung.
pub fn dismiss_rejection(state: &mut AppState) {
    state.ui.rejection_notice = None;
}

/// Öffnet die Rückfrage vor dem Zurücksetzen.
pub fn open_reset_confirm(state: &mut AppState) {
    state.ui.show_reset_confirm = true;
}

/// Schließt die Rückfrage vor dem Zurücksetzen.
pub fn close_reset_confirm(state: &mut AppState) {
    state.ui.show_reset_confirm = false;
}

/// Öffnet den Optionen-Dialog.
pub fn open_options_dialog(state: &mut AppState) {
    state.show_options_dialog = true;
}

/// Schließt den Optionen-Dialog.
pub fn close_options_dialog(state: &mut AppState) {
    state.show_options_dialog = false;
}

/// Übernimmt neue Optionen und persistiert sie in der Konfigurationsdatei.
pub fn apply_options(state: &mut AppState, options: EditorOptions) -> anyhow::Result<()> {
    state.options = options;
    let path = EditorOptions::config_path();
    state.options.save_to_file(&path)
}

/// Setzt Optionen auf Standardwerte zurück und persistiert sie.
pub fn reset_options(state: &mut AppState) -> anyhow::Result<()> {
    state.options = EditorOptions::default();
    let path = EditorOptions::config_path();
    state.options.save_to_file(&path)
}

/// Entfernt die Statusmeldung.
pub fn clear_status_message(state: &mut AppState) {
    state.ui.status_message = None;
}
