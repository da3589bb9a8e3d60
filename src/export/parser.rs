//! Parser für die exportierten Textdateien (Rücklesen und Import).

use super::writer::ExportFile;
use crate::core::validation::validate_element;
use crate::core::{
    ElementIdGenerator, ElementType, GridPos, MazeElement, PlacementRejection, FLOOR_COUNT,
};

/// Fehler beim Einlesen einer Exportdatei.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ExportParseError {
    #[error("Zeile {line}: {found} Felder gefunden, {expected} erwartet")]
    FieldCount {
        line: usize,
        expected: usize,
        found: usize,
    },
    #[error("Zeile {line}: '{value}' ist keine Ganzzahl")]
    InvalidNumber { line: usize, value: String },
    #[error("Zeile {line}: Stockwerk {value} außerhalb des gültigen Bereichs")]
    FloorOutOfRange { line: usize, value: i32 },
    #[error("Zeile {line}: {reason}")]
    InvalidElement {
        line: usize,
        reason: PlacementRejection,
    },
}

/// Liest kommagetrennte Ganzzahl-Zeilen mit fester Feldanzahl.
///
/// Leerzeilen werden übersprungen; Zeilennummern im Fehler sind 1-basiert.
pub fn parse_records(text: &str, expected: usize) -> Result<Vec<Vec<i32>>, ExportParseError> {
    let mut records = Vec::new();

    for (index, raw_line) in text.lines().enumerate() {
        let line = raw_line.trim();
        if line.is_empty() {
            continue;
        }
        let line_no = index + 1;

        let fields: Vec<&str> = line.split(',').map(str::trim).collect();
        if fields.len() != expected {
            return Err(ExportParseError::FieldCount {
                line: line_no,
                expected,
                found: fields.len(),
            });
        }

        let record = fields
            .iter()
            .map(|value| {
                value
                    .parse::<i32>()
                    .map_err(|_| ExportParseError::InvalidNumber {
                        line: line_no,
                        value: (*value).to_string(),
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;
        records.push(record);
    }

    Ok(records)
}

/// Liest eine der vier Exportdateien mit der passenden Feldanzahl.
pub fn parse_file(file: ExportFile, text: &str) -> Result<Vec<Vec<i32>>, ExportParseError> {
    parse_records(text, file.field_count())
}

/// Stairs-Zeilen `floor,x,y,end_floor,end_x,end_y` als Treppen.
pub fn parse_stairs(
    text: &str,
    ids: &mut ElementIdGenerator,
) -> Result<Vec<MazeElement>, ExportParseError> {
    rebuild(ExportFile::Stairs, text, |line, r| {
        Ok(MazeElement::stair(
            ids.next_id(ElementType::Stair),
            floor_field(line, r[0])?,
            GridPos::new(r[1], r[2]),
            floor_field(line, r[3])?,
            GridPos::new(r[4], r[5]),
        ))
    })
}

/// Poles-Zeilen `start_floor,end_floor,x,y` als Stangen.
pub fn parse_poles(
    text: &str,
    ids: &mut ElementIdGenerator,
) -> Result<Vec<MazeElement>, ExportParseError> {
    rebuild(ExportFile::Poles, text, |line, r| {
        Ok(MazeElement::pole(
            ids.next_id(ElementType::Pole),
            floor_field(line, r[0])?,
            GridPos::new(r[2], r[3]),
            floor_field(line, r[1])?,
        ))
    })
}

/// Walls-Zeilen `floor,start_x,start_y,end_x,end_y` als Wände.
pub fn parse_walls(
    text: &str,
    ids: &mut ElementIdGenerator,
) -> Result<Vec<MazeElement>, ExportParseError> {
    rebuild(ExportFile::Walls, text, |line, r| {
        Ok(MazeElement::wall(
            ids.next_id(ElementType::Wall),
            floor_field(line, r[0])?,
            GridPos::new(r[1], r[2]),
            GridPos::new(r[3], r[4]),
        ))
    })
}

/// Flag-Zeile `floor,x,y`; eine leere Datei bedeutet keine Flagge.
pub fn parse_flag(
    text: &str,
    ids: &mut ElementIdGenerator,
) -> Result<Option<MazeElement>, ExportParseError> {
    let flags = rebuild(ExportFile::Flag, text, |line, r| {
        Ok(MazeElement::flag(
            ids.next_id(ElementType::Flag),
            floor_field(line, r[0])?,
            GridPos::new(r[1], r[2]),
        ))
    })?;
    Ok(flags.into_iter().next())
}

fn rebuild(
    file: ExportFile,
    text: &str,
    mut build: impl FnMut(usize, &[i32]) -> Result<MazeElement, ExportParseError>,
) -> Result<Vec<MazeElement>, ExportParseError> {
    parse_file(file, text)?
        .iter()
        .enumerate()
        .map(|(index, record)| {
            let line = index + 1;
            let element = build(line, record)?;
            validate_element(&element)
                .map_err(|reason| ExportParseError::InvalidElement { line, reason })?;
            Ok(element)
        })
        .collect()
}

// Zeilennummer zählt nur Datensätze (Leerzeilen werden übersprungen).
fn floor_field(line: usize, value: i32) -> Result<u8, ExportParseError> {
    u8::try_from(value)
        .ok()
        .filter(|floor| *floor < FLOOR_COUNT)
        .ok_or(ExportParseError::FloorOutOfRange { line, value })
}
