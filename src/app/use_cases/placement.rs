//! Use-Case-Funktionen für das Platzieren und Entfernen von Elementen.

use crate::app::tools::PlacementOutcome;
use crate::app::AppState;
use crate::core::GridPos;

/// Verarbeitet einen Klick auf eine Zelle des aktuellen Stockwerks.
///
/// Belegte Zellen werden geleert, sonst entscheidet die Platzierungs-
/// Zustandsmaschine mit dem gewählten Werkzeug.
pub fn click_cell(state: &mut AppState, pos: GridPos) {
    let floor = state.editor.current_floor;
    let tool = state.editor.selected_tool;
    let outcome = state
        .editor
        .placement
        .on_cell_click(tool, floor, pos, &mut state.layout);
    report_outcome(state, outcome);
}

/// Schließt die wartende Stange mit dem gewählten End-Stockwerk ab.
pub fn choose_pole_end_floor(state: &mut AppState, end_floor: u8) {
    let outcome = state
        .editor
        .placement
        .choose_pole_end_floor(end_floor, &mut state.layout);
    report_outcome(state, outcome);
}

/// Verwirft die laufende Platzierung ohne die Element-Liste zu ändern.
pub fn cancel(state: &mut AppState) {
    let outcome = state.editor.placement.cancel();
    report_outcome(state, outcome);
}

/// Setzt Elemente, Stockwerk, Werkzeug und Platzierung auf den Sitzungsstart zurück.
pub fn reset_session(state: &mut AppState) {
    state.layout.reset();
    state.editor.set_tool(None);
    state.editor.placement.cancel();
    state.editor.set_floor(0);
    state.ui.rejection_notice = None;
    state.ui.status_message = Some("Layout zurückgesetzt".to_string());
    log::info!("Layout auf Startbelegung zurückgesetzt");
}

/// Protokolliert ein Ergebnis und macht Ablehnungen als Meldung sichtbar.
fn report_outcome(state: &mut AppState, outcome: PlacementOutcome) {
    match outcome {
        PlacementOutcome::Ignored => {}
        PlacementOutcome::Started => {
            log::debug!("Platzierung gestartet: {:?}", state.editor.placement);
        }
        PlacementOutcome::Committed(id) => {
            log::info!("Element {} hinzugefügt ({} gesamt)", id, state.layout.len());
        }
        PlacementOutcome::Removed(element) => {
            log::info!(
                "Element {} ({}) auf Floor {} entfernt",
                element.id,
                element.element_type(),
                element.floor + 1
            );
        }
        PlacementOutcome::Rejected(reason) => {
            log::warn!("Platzierung abgelehnt: {}", reason);
            state.ui.rejection_notice = Some(reason.to_string());
        }
        PlacementOutcome::Cancelled => {
            log::info!("Platzierung abgebrochen");
        }
    }
}
