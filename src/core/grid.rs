//! Raster-Geometrie: Abmessungen, Stockwerke und unzugängliche Bereiche.

use std::fmt;

/// Breite eines Stockwerks in Zellen.
pub const GRID_WIDTH: i32 = 25;
/// Höhe eines Stockwerks in Zellen.
pub const GRID_HEIGHT: i32 = 10;
/// Anzahl der Stockwerke (Index 0 = unten, 2 = oben).
pub const FLOOR_COUNT: u8 = 3;
/// Index des obersten Stockwerks.
pub const TOP_FLOOR: u8 = FLOOR_COUNT - 1;

/// Ganzzahlige Zellkoordinate (0-basiert) innerhalb eines Stockwerks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct GridPos {
    /// Spalte
    pub x: i32,
    /// Zeile
    pub y: i32,
}

impl GridPos {
    /// Erstellt eine neue Zellkoordinate.
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Gibt `true` zurück, wenn die Koordinate innerhalb des Rasters liegt.
    pub fn in_bounds(self) -> bool {
        (0..GRID_WIDTH).contains(&self.x) && (0..GRID_HEIGHT).contains(&self.y)
    }
}

impl fmt::Display for GridPos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Achsenparalleles Rechteck mit inklusiven Grenzen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InaccessibleArea {
    pub x1: i32,
    pub y1: i32,
    pub x2: i32,
    pub y2: i32,
}

impl InaccessibleArea {
    const fn new(x1: i32, y1: i32, x2: i32, y2: i32) -> Self {
        Self { x1, y1, x2, y2 }
    }

    /// Prüft, ob die Zelle innerhalb des Rechtecks liegt (Grenzen inklusive).
    pub fn contains(&self, pos: GridPos) -> bool {
        pos.x >= self.x1 && pos.x <= self.x2 && pos.y >= self.y1 && pos.y <= self.y2
    }
}

const FLOOR_0_AREAS: &[InaccessibleArea] = &[InaccessibleArea::new(8, 6, 16, 9)];
const FLOOR_1_AREAS: &[InaccessibleArea] = &[InaccessibleArea::new(8, 0, 16, 6)];
// Linkes Rechteck reicht laut Level-Vorgabe bis y = 10 (eine Zeile über das Raster hinaus).
const FLOOR_2_AREAS: &[InaccessibleArea] = &[
    InaccessibleArea::new(0, 0, 7, 10),
    InaccessibleArea::new(17, 0, 24, 9),
];

/// Liefert die unzugänglichen Bereiche eines Stockwerks.
///
/// Unbekannte Stockwerke haben keine Bereiche.
pub fn inaccessible_areas(floor: u8) -> &'static [InaccessibleArea] {
    match floor {
        0 => FLOOR_0_AREAS,
        1 => FLOOR_1_AREAS,
        2 => FLOOR_2_AREAS,
        _ => &[],
    }
}

/// Gibt `true` zurück, wenn `floor` ein gültiger Stockwerk-Index ist.
pub fn is_valid_floor(floor: u8) -> bool {
    floor < FLOOR_COUNT
}

/// Anzeigename eines Stockwerks (1-basiert, wie im Spiel).
pub fn floor_label(floor: u8) -> String {
    format!("Floor {}", floor + 1)
}

/// Kurzbeschreibung eines Stockwerks für den Stockwerk-Wähler.
pub fn floor_description(floor: u8) -> &'static str {
    match floor {
        0 => "Players start here",
        1 => "Middle level",
        2 => "Top level",
        _ => "",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn area_bounds_are_inclusive() {
        let area = InaccessibleArea::new(8, 6, 16, 9);
        assert!(area.contains(GridPos::new(8, 6)));
        assert!(area.contains(GridPos::new(16, 9)));
        assert!(!area.contains(GridPos::new(7, 6)));
        assert!(!area.contains(GridPos::new(16, 5)));
    }

    #[test]
    fn floors_have_distinct_areas() {
        assert_eq!(inaccessible_areas(0).len(), 1);
        assert_eq!(inaccessible_areas(1).len(), 1);
        assert_eq!(inaccessible_areas(2).len(), 2);
        assert!(inaccessible_areas(3).is_empty());
    }

    #[test]
    fn in_bounds_matches_grid_size() {
        assert!(GridPos::new(0, 0).in_bounds());
        assert!(GridPos::new(24, 9).in_bounds());
        assert!(!GridPos::new(25, 0).in_bounds());
        assert!(!GridPos::new(0, 10).in_bounds());
        assert!(!GridPos::new(-1, 3).in_bounds());
    }
}
