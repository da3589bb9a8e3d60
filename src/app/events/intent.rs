use crate::app::tools::PlacementTool;
use crate::core::GridPos;
use crate::export::ExportFile;
use crate::shared::EditorOptions;

/// App-Intent Events.
/// Intents sind Eingaben aus UI/System ohne direkte Mutationslogik.
#[derive(Debug, Clone)]
pub enum AppIntent {
    /// Zelle im Raster des aktuellen Stockwerks angeklickt
    CellClicked { pos: GridPos },
    /// Stockwerk im Stockwerk-Wähler gewählt
    FloorSelected { floor: u8 },
    /// Ein Stockwerk nach oben (+1) oder unten (-1) wechseln
    FloorStepRequested { delta: i8 },
    /// Palettenknopf gedrückt (erneuter Druck hebt die Auswahl auf)
    ToolToggled { tool: PlacementTool },
    /// Werkzeugauswahl aufheben
    ToolSelectionCleared,
    /// End-Stockwerk im Stangen-Dialog gewählt
    PoleEndFloorChosen { end_floor: u8 },
    /// Laufende Platzierung abbrechen (Button, Esc oder Stangen-Dialog)
    PlacementCancelRequested,
    /// Ablehnungs-Meldung bestätigt
    RejectionNoticeDismissed,
    /// Layout auf Startbelegung zurücksetzen
    ResetRequested,
    /// Rückfrage "Zurücksetzen" bestätigt
    ResetConfirmed,
    /// Rückfrage "Zurücksetzen" abgebrochen
    ResetCancelled,
    /// Einzelne Exportdatei herunterladen (öffnet Speichern-Dialog)
    ExportDownloadRequested { file: ExportFile },
    /// Speicherpfad für eine Exportdatei gewählt
    ExportSavePathSelected { file: ExportFile, path: String },
    /// Alle Exportdateien herunterladen (öffnet Ordner-Dialog)
    ExportAllRequested,
    /// Zielordner für alle Exportdateien gewählt
    ExportDirSelected { path: String },
    /// Exportdatei in die Zwischenablage kopieren
    ExportCopyRequested { file: ExportFile },
    /// Options-Dialog öffnen
    OpenOptionsDialogRequested,
    /// Options-Dialog schließen
    CloseOptionsDialogRequested,
    /// Optionen wurden im Dialog geändert
    OptionsChanged { options: EditorOptions },
    /// Optionen auf Standardwerte zurücksetzen
    ResetOptionsRequested,
    /// Statusnachricht ausblenden
    StatusMessageDismissed,
    /// Anwendung beenden
    ExitRequested,
}
