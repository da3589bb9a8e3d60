use crate::app::tools::{PlacementState, PlacementTool};
use crate::core::grid::is_valid_floor;

/// Zustand von Stockwerk, Werkzeug und laufender Platzierung
#[derive(Debug, Default)]
pub struct EditorToolState {
    /// Angezeigtes Stockwerk (0–2)
    pub current_floor: u8,
    /// Gewähltes Werkzeug (None = nur Löschen per Klick)
    pub selected_tool: Option<PlacementTool>,
    /// Laufende mehrschrittige Platzierung
    pub placement: PlacementState,
}

impl EditorToolState {
    /// Erstellt den Startzustand (Floor 1, kein Werkzeug, keine Platzierung).
    pub fn new() -> Self {
        Self {
            current_floor: 0,
            selected_tool: None,
            placement: PlacementState::Idle,
        }
    }

    /// Wechselt das Stockwerk. Ungültige Indizes werden ignoriert.
    ///
    /// Eine laufende Platzierung bleibt erhalten (Treppen enden auf einem anderen Stockwerk).
    pub fn set_floor(&mut self, floor: u8) -> bool {
        if !is_valid_floor(floor) {
            return false;
        }
        self.current_floor = floor;
        true
    }

    /// Setzt das Werkzeug und verwirft eine laufende Platzierung des vorherigen.
    pub fn set_tool(&mut self, tool: Option<PlacementTool>) {
        if self.selected_tool != tool {
            self.placement = PlacementState::Idle;
        }
        self.selected_tool = tool;
    }
}
