use crate::app::tools::PlacementTool;
use crate::core::GridPos;
use crate::export::ExportFile;
use crate::shared::EditorOptions;

/// App-Commands.
/// Commands sind mutierende Schritte, die vom Controller ausgeführt werden.
#[derive(Debug, Clone)]
pub enum AppCommand {
    /// Zellklick durch Lösch-Vorrang und Platzierungs-Zustandsmaschine leiten
    ClickCell { pos: GridPos },
    /// Stockwerk setzen
    SetFloor { floor: u8 },
    /// Werkzeug setzen (None = keins)
    SetTool { tool: Option<PlacementTool> },
    /// Wartende Stange mit End-Stockwerk abschließen
    ChoosePoleEndFloor { end_floor: u8 },
    /// Laufende Platzierung verwerfen
    CancelPlacement,
    /// Ablehnungs-Meldung schließen
    DismissRejectionNotice,
    /// Rückfrage "Zurücksetzen" öffnen
    OpenResetConfirm,
    /// Rückfrage "Zurücksetzen" schließen
    CloseResetConfirm,
    /// Layout, Stockwerk, Werkzeug und Platzierung zurücksetzen
    ResetLayout,
    /// Speichern-Dialog für eine Exportdatei anfordern
    RequestSaveExportDialog { file: ExportFile },
    /// Exportdatei unter Pfad speichern
    SaveExportFile { file: ExportFile, path: String },
    /// Ordner-Dialog für den Gesamtexport anfordern
    RequestExportDirDialog,
    /// Alle Exportdateien in den Ordner schreiben
    ExportAllToDir { path: String },
    /// Exportdatei für die Zwischenablage vormerken
    CopyExportToClipboard { file: ExportFile },
    /// Options-Dialog öffnen
    OpenOptionsDialog,
    /// Options-Dialog schließen
    CloseOptionsDialog,
    /// Optionen übernehmen und speichern
    ApplyOptions { options: EditorOptions },
    /// Optionen auf Standard zurücksetzen und speichern
    ResetOptions,
    /// Statusnachricht löschen
    ClearStatusMessage,
    /// Anwendung beenden
    RequestExit,
}
