//! Writer für die Textdateien der Spiel-Engine.
//!
//! Eine Zeile pro Element, Felder kommagetrennt, Koordinaten 0-basiert.
//! Zeilen werden mit `\n` verbunden, ohne abschließenden Zeilenumbruch.

use crate::core::{ElementKind, ElementType, MazeLayout};
use anyhow::{Context, Result};
use std::path::Path;

/// Eine der vier Exportdateien.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExportFile {
    Stairs,
    Poles,
    Walls,
    Flag,
}

impl ExportFile {
    /// Alle Dateien in Anzeigereihenfolge.
    pub const ALL: [ExportFile; 4] = [
        ExportFile::Stairs,
        ExportFile::Poles,
        ExportFile::Walls,
        ExportFile::Flag,
    ];

    /// Dateiname für Download und Ordner-Export.
    pub fn file_name(self) -> &'static str {
        match self {
            ExportFile::Stairs => "stairs.txt",
            ExportFile::Poles => "poles.txt",
            ExportFile::Walls => "walls.txt",
            ExportFile::Flag => "flag.txt",
        }
    }

    /// Feldreihenfolge einer Zeile.
    pub fn format_description(self) -> &'static str {
        match self {
            ExportFile::Stairs => "floor,x,y,end_floor,end_x,end_y",
            ExportFile::Poles => "start_floor,end_floor,x,y",
            ExportFile::Walls => "floor,start_x,start_y,end_x,end_y",
            ExportFile::Flag => "floor,x,y",
        }
    }

    /// Anzahl der Felder pro Zeile.
    pub fn field_count(self) -> usize {
        match self {
            ExportFile::Stairs => 6,
            ExportFile::Poles => 4,
            ExportFile::Walls => 5,
            ExportFile::Flag => 3,
        }
    }

    /// Element-Typ, der in diese Datei exportiert wird.
    pub fn element_type(self) -> ElementType {
        match self {
            ExportFile::Stairs => ElementType::Stair,
            ExportFile::Poles => ElementType::Pole,
            ExportFile::Walls => ElementType::Wall,
            ExportFile::Flag => ElementType::Flag,
        }
    }

    /// Erzeugt den Dateiinhalt aus der Element-Liste.
    pub fn render(self, layout: &MazeLayout) -> String {
        match self {
            ExportFile::Stairs => write_stairs(layout),
            ExportFile::Poles => write_poles(layout),
            ExportFile::Walls => write_walls(layout),
            ExportFile::Flag => write_flag(layout),
        }
    }
}

/// `floor,x,y,end_floor,end_x,end_y` je Treppe.
pub fn write_stairs(layout: &MazeLayout) -> String {
    layout
        .elements_of_type(ElementType::Stair)
        .filter_map(|el| match el.kind {
            ElementKind::Stair { end_floor, end } => Some(format!(
                "{},{},{},{},{},{}",
                el.floor, el.pos.x, el.pos.y, end_floor, end.x, end.y
            )),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// `start_floor,end_floor,x,y` je Stange.
pub fn write_poles(layout: &MazeLayout) -> String {
    layout
        .elements_of_type(ElementType::Pole)
        .filter_map(|el| match el.kind {
            ElementKind::Pole { end_floor } => Some(format!(
                "{},{},{},{}",
                el.floor, end_floor, el.pos.x, el.pos.y
            )),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// `floor,start_x,start_y,end_x,end_y` je Wand.
pub fn write_walls(layout: &MazeLayout) -> String {
    layout
        .elements_of_type(ElementType::Wall)
        .filter_map(|el| match el.kind {
            ElementKind::Wall { end } => Some(format!(
                "{},{},{},{},{}",
                el.floor, el.pos.x, el.pos.y, end.x, end.y
            )),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// `floor,x,y` der ersten Flagge, sonst leer.
pub fn write_flag(layout: &MazeLayout) -> String {
    layout
        .first_flag()
        .map(|flag| format!("{},{},{}", flag.floor, flag.pos.x, flag.pos.y))
        .unwrap_or_default()
}

/// Schreibt alle vier Dateien in das Verzeichnis.
pub fn write_all_to_dir(dir: &Path, layout: &MazeLayout) -> Result<()> {
    for file in ExportFile::ALL {
        let path = dir.join(file.file_name());
        std::fs::write(&path, file.render(layout))
            .with_context(|| format!("Export nach {} fehlgeschlagen", path.display()))?;
    }
    log::info!("Alle Exportdateien geschrieben nach: {}", dir.display());
    Ok(())
}
