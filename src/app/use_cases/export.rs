//! Use-Case-Funktionen für den Export.
//! Alle Dateisystem-Operationen (I/O) sind hier zentralisiert.

use crate::app::AppState;
use crate::export::{write_all_to_dir, ExportFile};
use crate::shared::EditorOptions;
use anyhow::Context;
use std::path::Path;

/// Schreibt eine einzelne Exportdatei an den gewählten Pfad.
pub fn save_export_file(state: &mut AppState, file: ExportFile, path: &str) -> anyhow::Result<()> {
    let content = file.render(&state.layout);
    std::fs::write(path, content)
        .with_context(|| format!("{} konnte nicht nach {} geschrieben werden", file.file_name(), path))?;

    remember_export_dir(state, Path::new(path).parent());
    log::info!("{} gespeichert: {}", file.file_name(), path);
    state.ui.status_message = Some(format!("{} gespeichert", file.file_name()));
    Ok(())
}

/// Schreibt alle vier Exportdateien in den Ordner.
pub fn export_all_to_dir(state: &mut AppState, dir: &str) -> anyhow::Result<()> {
    let dir_path = Path::new(dir);
    write_all_to_dir(dir_path, &state.layout)?;

    remember_export_dir(state, Some(dir_path));
    state.ui.status_message = Some(format!("Alle Dateien exportiert nach {}", dir));
    Ok(())
}

/// Merkt den Dateiinhalt für die Zwischenablage vor (Kopieren erfolgt im UI-Frame).
pub fn queue_clipboard_copy(state: &mut AppState, file: ExportFile) {
    let content = file.render(&state.layout);
    log::debug!("{} für Zwischenablage vorgemerkt ({} Bytes)", file.file_name(), content.len());
    state.ui.clipboard_request = Some((file, content));
}

/// Merkt den Export-Ordner in der Optionen-Datei.
///
/// Speicherfehler werden nur geloggt, der Export selbst ist bereits erfolgt.
fn remember_export_dir(state: &mut AppState, dir: Option<&Path>) {
    let config_path = EditorOptions::config_path();
    if let Err(e) = store_export_dir(&mut state.options, dir, &config_path) {
        log::warn!("Export-Ordner konnte nicht gespeichert werden: {:#}", e);
    }
}

/// Setzt `last_export_dir` und schreibt die Optionen nur bei einer Änderung.
fn store_export_dir(
    options: &mut EditorOptions,
    dir: Option<&Path>,
    config_path: &Path,
) -> anyhow::Result<bool> {
    let Some(dir) = dir.filter(|d| !d.as_os_str().is_empty()) else {
        return Ok(false);
    };
    let dir = dir.to_string_lossy().into_owned();
    if options.last_export_dir.as_deref() == Some(dir.as_str()) {
        return Ok(false);
    }

    options.last_export_dir = Some(dir);
    options.save_to_file(config_path)?;
    Ok(true)
}
