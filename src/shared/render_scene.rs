//! Raster-Szene als expliziter Übergabevertrag zwischen App und UI.
//!
//! Lebt im shared-Modul, da `app` sie baut und `ui` sie zeichnet.

use crate::core::{GridPos, PlayerType};

/// Was in einer Zelle angezeigt wird.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellContent {
    /// Laufender Treppen-Start auf einem anderen Stockwerk
    StairAnchor { start_floor: u8 },
    /// Zelle liegt auf einem Wandsegment
    Wall,
    /// Stange führt durch dieses Stockwerk
    Pole { end_floor: u8 },
    /// Treppen-Start, führt nach `end_floor`
    StairStart { end_floor: u8 },
    /// Treppen-Ende, kommt von `start_floor`
    StairEnd { start_floor: u8 },
    Flag,
    Player(PlayerType),
}

impl CellContent {
    /// Kurzer Zelltext (Stockwerke 1-basiert).
    pub fn label(&self) -> String {
        match *self {
            CellContent::StairAnchor { start_floor } => format!("S F{}", start_floor + 1),
            CellContent::Wall => "▇".to_string(),
            CellContent::Pole { end_floor } => format!("|{}", end_floor + 1),
            CellContent::StairStart { end_floor } => format!("S↗{}", end_floor + 1),
            CellContent::StairEnd { start_floor } => format!("S↙{}", start_floor + 1),
            CellContent::Flag => "⚑".to_string(),
            CellContent::Player(player_type) => player_type.letter().to_string(),
        }
    }
}

/// Hervorhebung einer Zelle, nach Priorität aufgelöst.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CellStyle {
    #[default]
    Empty,
    /// Unzugänglicher Bereich
    Inaccessible,
    /// Zelle belegt ein Element (klickbar zum Löschen)
    Occupied,
    /// Startpunkt der laufenden Wand/Treppe auf diesem Stockwerk
    PendingAnchor,
    /// Startpunkt der laufenden Treppe auf einem anderen Stockwerk
    StairAnchorOtherFloor,
}

/// Darstellung einer einzelnen Zelle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CellView {
    pub content: Option<CellContent>,
    pub style: CellStyle,
}

/// Read-only Daten für einen Frame des Rasters.
#[derive(Debug, Clone)]
pub struct GridScene {
    /// Angezeigtes Stockwerk
    pub floor: u8,
    /// Breite in Zellen
    pub width: i32,
    /// Höhe in Zellen
    pub height: i32,
    /// Zellen zeilenweise (`y * width + x`)
    pub cells: Vec<CellView>,
}

impl GridScene {
    /// Liefert die Zelle an `pos`, sofern im Raster.
    pub fn cell(&self, pos: GridPos) -> Option<&CellView> {
        if pos.x < 0 || pos.y < 0 || pos.x >= self.width || pos.y >= self.height {
            return None;
        }
        self.cells.get((pos.y * self.width + pos.x) as usize)
    }
}
