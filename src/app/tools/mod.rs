//! Platzierungs-Werkzeuge der Element-Palette.
//!
//! Die Palette bietet vier Werkzeuge an. Mehrschrittige Platzierungen
//! (Wand, Treppe, Stange) laufen über die `PlacementState`-Zustandsmaschine.

/// Zustandsmaschine für laufende Platzierungen.
pub mod placement;

pub use placement::{PlacementOutcome, PlacementState};

use crate::core::ElementType;

/// Auswählbares Platzierungs-Werkzeug. Spieler werden nicht über Werkzeuge erzeugt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlacementTool {
    Stair,
    Pole,
    Wall,
    Flag,
}

impl PlacementTool {
    /// Alle Werkzeuge in Palettenreihenfolge.
    pub const ALL: [PlacementTool; 4] = [
        PlacementTool::Stair,
        PlacementTool::Pole,
        PlacementTool::Wall,
        PlacementTool::Flag,
    ];

    /// Element-Typ, den das Werkzeug erzeugt.
    pub fn element_type(self) -> ElementType {
        match self {
            PlacementTool::Stair => ElementType::Stair,
            PlacementTool::Pole => ElementType::Pole,
            PlacementTool::Wall => ElementType::Wall,
            PlacementTool::Flag => ElementType::Flag,
        }
    }

    /// Beschriftung in der Palette.
    pub fn label(self) -> &'static str {
        match self {
            PlacementTool::Stair => "Stairs",
            PlacementTool::Pole => "Poles",
            PlacementTool::Wall => "Walls",
            PlacementTool::Flag => "Flag",
        }
    }

    /// Kurzbeschreibung in der Palette.
    pub fn description(self) -> &'static str {
        match self {
            PlacementTool::Stair => "Connect floors",
            PlacementTool::Pole => "Vertical connections",
            PlacementTool::Wall => "Block movement",
            PlacementTool::Flag => "Goal position",
        }
    }

    /// Tastenkürzel (1–4).
    pub fn shortcut(self) -> char {
        match self {
            PlacementTool::Stair => '1',
            PlacementTool::Pole => '2',
            PlacementTool::Wall => '3',
            PlacementTool::Flag => '4',
        }
    }
}
