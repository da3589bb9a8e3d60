use crate::app::CommandLog;
use crate::core::MazeLayout;
use crate::shared::EditorOptions;

use super::{EditorToolState, UiState};

/// Hauptzustand der Anwendung (eine Editier-Sitzung)
pub struct AppState {
    /// Alle platzierten Elemente inklusive Spieler
    pub layout: MazeLayout,
    /// Stockwerk, Werkzeug und laufende Platzierung
    pub editor: EditorToolState,
    /// UI-State
    pub ui: UiState,
    /// Verlauf ausgeführter Commands
    pub command_log: CommandLog,
    /// Laufzeit-Optionen (Farben, Größen)
    pub options: EditorOptions,
    /// Ob der Options-Dialog angezeigt wird
    pub show_options_dialog: bool,
    /// Signalisiert dem Host (eframe), die Anwendung kontrolliert zu beenden
    pub should_exit: bool,
}

impl AppState {
    /// Erstellt eine neue Sitzung mit den drei Startspielern
    pub fn new() -> Self {
        Self {
            layout: MazeLayout::with_seed_players(),
            editor: EditorToolState::new(),
            ui: UiState::new(),
            command_log: CommandLog::new(),
            options: EditorOptions::default(),
            show_options_dialog: false,
            should_exit: false,
        }
    }

    /// Gibt die Anzahl aller Elemente zurück (für UI-Anzeige)
    pub fn element_count(&self) -> usize {
        self.layout.len()
    }

    /// Gibt das aktuell angezeigte Stockwerk zurück.
    pub fn current_floor(&self) -> u8 {
        self.editor.current_floor
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
