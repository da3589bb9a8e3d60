//! Handler für Platzierung, Stockwerk- und Werkzeugwahl.

use crate::app::tools::PlacementTool;
use crate::app::use_cases;
use crate::app::AppState;
use crate::core::GridPos;

/// Leitet einen Zellklick an den Platzierungs-Use-Case weiter.
pub fn click_cell(state: &mut AppState, pos: GridPos) {
    use_cases::placement::click_cell(state, pos);
}

/// Wechselt das angezeigte Stockwerk.
pub fn set_floor(state: &mut AppState, floor: u8) {
    if state.editor.set_floor(floor) {
        log::info!("Stockwerk: {}", floor + 1);
    } else {
        log::warn!("Ungültiges Stockwerk {} ignoriert", floor);
    }
}

/// Aktiviert ein Werkzeug (oder keins) und verwirft eine laufende Platzierung.
pub fn set_tool(state: &mut AppState, tool: Option<PlacementTool>) {
    state.editor.set_tool(tool);
    log::info!("Werkzeug: {:?}", tool);
}

/// Schließt eine wartende Stange mit dem gewählten End-Stockwerk ab.
pub fn choose_pole_end_floor(state: &mut AppState, end_floor: u8) {
    use_cases::placement::choose_pole_end_floor(state, end_floor);
}

/// Bricht eine laufende Platzierung ab.
pub fn cancel_placement(state: &mut AppState) {
    use_cases::placement::cancel(state);
}

/// Stellt die Startbelegung der Sitzung wieder her.
pub fn reset_layout(state: &mut AppState) {
    use_cases::placement::reset_session(state);
}
