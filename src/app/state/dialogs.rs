use crate::export::ExportFile;

/// Anzeigedauer des "Kopiert"-Hinweises in Sekunden.
pub const COPIED_INDICATOR_SECONDS: f64 = 2.0;

/// Hinweis, dass eine Exportdatei in die Zwischenablage kopiert wurde.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CopiedIndicator {
    /// Kopierte Datei
    pub file: ExportFile,
    /// UI-Zeitpunkt des Kopierens (egui-Zeit in Sekunden)
    pub since: f64,
}

/// UI-bezogener Anwendungszustand
#[derive(Debug, Default)]
pub struct UiState {
    /// Modale Meldung einer abgelehnten Platzierung
    pub rejection_notice: Option<String>,
    /// Ob die Rückfrage "Layout zurücksetzen" angezeigt wird
    pub show_reset_confirm: bool,
    /// Ob der Speichern-Dialog für eine einzelne Exportdatei geöffnet werden soll
    pub pending_save_dialog: Option<ExportFile>,
    /// Ob der Ordner-Dialog für "Download All" geöffnet werden soll
    pub show_export_dir_dialog: bool,
    /// Text, der im nächsten Frame in die Zwischenablage kopiert wird
    pub clipboard_request: Option<(ExportFile, String)>,
    /// Aktiver "Kopiert"-Hinweis
    pub copied_indicator: Option<CopiedIndicator>,
    /// Temporäre Statusnachricht (z.B. Export-Ergebnis)
    pub status_message: Option<String>,
}

impl UiState {
    /// Erstellt den Standard-UI-Zustand (alle Dialoge geschlossen).
    pub fn new() -> Self {
        Self::default()
    }

    /// Gibt `true` zurück, wenn ein modales Fenster Eingaben im Raster blockiert.
    pub fn has_modal(&self) -> bool {
        self.rejection_notice.is_some() || self.show_reset_confirm
    }

    /// Markiert die Datei als kopiert (Zeitpunkt aus der UI-Uhr).
    pub fn mark_copied(&mut self, file: ExportFile, now: f64) {
        self.copied_indicator = Some(CopiedIndicator { file, since: now });
    }

    /// Blendet den "Kopiert"-Hinweis nach Ablauf der Anzeigedauer aus.
    pub fn expire_copied_indicator(&mut self, now: f64) {
        if let Some(indicator) = self.copied_indicator {
            if now - indicator.since >= COPIED_INDICATOR_SECONDS {
                self.copied_indicator = None;
            }
        }
    }

    /// Gibt `true` zurück, solange die Datei als kopiert angezeigt wird.
    pub fn is_copied(&self, file: ExportFile) -> bool {
        self.copied_indicator.is_some_and(|i| i.file == file)
    }
}
