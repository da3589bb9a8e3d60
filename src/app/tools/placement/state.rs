//! Zustands- und Ergebnis-Typen der Platzierung.

use crate::core::{ElementId, GridPos, MazeElement, PlacementRejection};

/// Laufende Platzierung. Höchstens eine ist gleichzeitig aktiv.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlacementState {
    /// Keine Platzierung aktiv
    #[default]
    Idle,
    /// Wand-Startpunkt gesetzt, wartet auf den Endpunkt
    WallPending { start: GridPos },
    /// Treppen-Start gesetzt (inkl. Stockwerk), wartet auf das Ende auf einem anderen Stockwerk
    StairPending { start: GridPos, floor: u8 },
    /// Stangen-Position gesetzt, Dialog für das End-Stockwerk ist offen
    PolePendingFloorChoice { pos: GridPos, floor: u8 },
}

impl PlacementState {
    /// Gibt `true` zurück, wenn eine Platzierung auf Eingaben wartet.
    pub fn is_pending(&self) -> bool {
        !matches!(self, PlacementState::Idle)
    }

    /// Gibt `true` zurück, solange der End-Stockwerk-Dialog der Stange offen ist.
    pub fn is_pole_dialog_open(&self) -> bool {
        matches!(self, PlacementState::PolePendingFloorChoice { .. })
    }

    /// Startpunkt einer laufenden Wand.
    pub fn wall_start(&self) -> Option<GridPos> {
        match *self {
            PlacementState::WallPending { start } => Some(start),
            _ => None,
        }
    }

    /// Startpunkt und Stockwerk einer laufenden Treppe.
    pub fn stair_start(&self) -> Option<(GridPos, u8)> {
        match *self {
            PlacementState::StairPending { start, floor } => Some((start, floor)),
            _ => None,
        }
    }

    /// Position und Stockwerk einer Stange, die auf die End-Stockwerk-Wahl wartet.
    pub fn pole_position(&self) -> Option<(GridPos, u8)> {
        match *self {
            PlacementState::PolePendingFloorChoice { pos, floor } => Some((pos, floor)),
            _ => None,
        }
    }
}

/// Ergebnis eines Schritts der Zustandsmaschine.
#[derive(Debug, Clone, PartialEq)]
pub enum PlacementOutcome {
    /// Eingabe hatte keine Wirkung
    Ignored,
    /// Erster Schritt einer mehrschrittigen Platzierung registriert
    Started,
    /// Neues Element wurde in die Element-Liste übernommen
    Committed(ElementId),
    /// Das angeklickte Element wurde entfernt
    Removed(MazeElement),
    /// Eingabe abgelehnt; Zustand unverändert
    Rejected(PlacementRejection),
    /// Laufende Platzierung verworfen
    Cancelled,
}
