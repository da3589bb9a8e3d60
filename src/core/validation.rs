//! Reine Prüffunktionen für Platzierungen und Element-Invarianten.
//!
//! Keine Seiteneffekte: jede Funktion liefert entweder `bool` oder ein
//! `Result` mit einer `PlacementRejection`, deren `Display` die Meldung für
//! den Benutzer enthält.

use super::element::{ElementKind, MazeElement};
use super::grid::{inaccessible_areas, is_valid_floor, GridPos, FLOOR_COUNT, TOP_FLOOR};

/// Grund für eine abgelehnte Platzierung.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum PlacementRejection {
    #[error("Position {pos} is outside the grid!")]
    OutOfBounds { pos: GridPos },
    #[error("Position {pos} is in an inaccessible area of Floor {}!", .floor + 1)]
    Inaccessible { floor: u8, pos: GridPos },
    #[error("Floor {} does not exist!", .floor + 1)]
    UnknownFloor { floor: u8 },
    #[error("Wall end position cannot be the same as the start position!")]
    WallZeroLength,
    #[error("Walls can only be placed horizontally or vertically, not diagonally!")]
    WallDiagonal,
    #[error("Stairs cannot start and end on the same floor! Please select a position on a different floor.")]
    StairSameFloor,
    #[error("Poles cannot be placed on Floor {} as there are no floors above to extend to!", .floor + 1)]
    PoleOnTopFloor { floor: u8 },
    #[error("Poles must end above Floor {}. Floor {} is not above it!", .floor + 1, .end_floor + 1)]
    PoleEndFloorNotAbove { floor: u8, end_floor: u8 },
}

/// Gibt `true` zurück, wenn die Zelle in einem unzugänglichen Bereich des Stockwerks liegt.
pub fn is_inaccessible(floor: u8, pos: GridPos) -> bool {
    inaccessible_areas(floor).iter().any(|area| area.contains(pos))
}

/// Prüft eine einzelne angeklickte Zelle für ein neues Element.
pub fn validate_cell(floor: u8, pos: GridPos) -> Result<(), PlacementRejection> {
    if !is_valid_floor(floor) {
        return Err(PlacementRejection::UnknownFloor { floor });
    }
    if !pos.in_bounds() {
        return Err(PlacementRejection::OutOfBounds { pos });
    }
    if is_inaccessible(floor, pos) {
        return Err(PlacementRejection::Inaccessible { floor, pos });
    }
    Ok(())
}

/// Gibt `true` zurück, wenn das Wandsegment gültig ist (waagerecht oder senkrecht, Länge > 0).
pub fn is_valid_wall_segment(start: GridPos, end: GridPos) -> bool {
    validate_wall_segment(start, end).is_ok()
}

/// Prüft ein Wandsegment mit Ablehnungsgrund.
pub fn validate_wall_segment(start: GridPos, end: GridPos) -> Result<(), PlacementRejection> {
    if start == end {
        return Err(PlacementRejection::WallZeroLength);
    }
    if start.x != end.x && start.y != end.y {
        return Err(PlacementRejection::WallDiagonal);
    }
    Ok(())
}

/// Stangen brauchen mindestens ein Stockwerk darüber.
pub fn can_place_pole(floor: u8) -> bool {
    floor < TOP_FLOOR
}

/// Prüft den Startpunkt einer Stange.
pub fn validate_pole_start(floor: u8) -> Result<(), PlacementRejection> {
    if !is_valid_floor(floor) {
        return Err(PlacementRejection::UnknownFloor { floor });
    }
    if !can_place_pole(floor) {
        return Err(PlacementRejection::PoleOnTopFloor { floor });
    }
    Ok(())
}

/// Mögliche End-Stockwerke einer Stange: alle Stockwerke strikt oberhalb, aufsteigend.
pub fn available_pole_end_floors(start_floor: u8) -> Vec<u8> {
    (start_floor.saturating_add(1)..FLOOR_COUNT).collect()
}

/// Prüft das gewählte End-Stockwerk einer Stange.
pub fn validate_pole_end_floor(start_floor: u8, end_floor: u8) -> Result<(), PlacementRejection> {
    if !is_valid_floor(end_floor) {
        return Err(PlacementRejection::UnknownFloor { floor: end_floor });
    }
    if end_floor <= start_floor {
        return Err(PlacementRejection::PoleEndFloorNotAbove {
            floor: start_floor,
            end_floor,
        });
    }
    Ok(())
}

/// Treppen müssen auf einem anderen Stockwerk enden (beide Richtungen erlaubt).
pub fn validate_stair_floors(start_floor: u8, end_floor: u8) -> Result<(), PlacementRejection> {
    if !is_valid_floor(end_floor) {
        return Err(PlacementRejection::UnknownFloor { floor: end_floor });
    }
    if start_floor == end_floor {
        return Err(PlacementRejection::StairSameFloor);
    }
    Ok(())
}

/// Prüft die Varianten-Invarianten eines vollständigen Elements.
///
/// Unzugängliche Bereiche werden hier nicht geprüft, sie gelten nur für
/// neu angeklickte Zellen.
pub fn validate_element(element: &MazeElement) -> Result<(), PlacementRejection> {
    if !is_valid_floor(element.floor) {
        return Err(PlacementRejection::UnknownFloor {
            floor: element.floor,
        });
    }
    if !element.pos.in_bounds() {
        return Err(PlacementRejection::OutOfBounds { pos: element.pos });
    }
    match element.kind {
        ElementKind::Stair { end_floor, end } => {
            validate_stair_floors(element.floor, end_floor)?;
            if !end.in_bounds() {
                return Err(PlacementRejection::OutOfBounds { pos: end });
            }
        }
        ElementKind::Pole { end_floor } => {
            validate_pole_start(element.floor)?;
            validate_pole_end_floor(element.floor, end_floor)?;
        }
        ElementKind::Wall { end } => {
            if !end.in_bounds() {
                return Err(PlacementRejection::OutOfBounds { pos: end });
            }
            validate_wall_segment(element.pos, end)?;
        }
        ElementKind::Flag | ElementKind::Player { .. } => {}
    }
    Ok(())
}
