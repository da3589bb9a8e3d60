//! Level-Elemente: Treppen, Stangen, Wände, Flagge und Spieler.

use super::grid::GridPos;
use std::fmt;

/// Eindeutige Element-ID innerhalb einer Sitzung (z.B. `wall-1718000000123456`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementId(String);

impl ElementId {
    /// Erstellt eine ID aus einer beliebigen Zeichenkette.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Liefert die ID als `&str`.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Typ-Tag eines Elements ohne variantenspezifische Felder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementType {
    Stair,
    Pole,
    Wall,
    Flag,
    Player,
}

impl ElementType {
    /// Kleingeschriebener Name, wird als ID-Präfix verwendet.
    pub fn name(self) -> &'static str {
        match self {
            ElementType::Stair => "stair",
            ElementType::Pole => "pole",
            ElementType::Wall => "wall",
            ElementType::Flag => "flag",
            ElementType::Player => "player",
        }
    }
}

impl fmt::Display for ElementType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Spielfigur-Kennung der vorbelegten Spieler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlayerType {
    A,
    B,
    C,
}

impl PlayerType {
    /// Buchstabe der Spielfigur.
    pub fn letter(self) -> &'static str {
        match self {
            PlayerType::A => "A",
            PlayerType::B => "B",
            PlayerType::C => "C",
        }
    }
}

/// Variantenspezifische Felder eines Elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementKind {
    /// Treppe zu einer Zelle auf einem anderen Stockwerk
    Stair { end_floor: u8, end: GridPos },
    /// Stange nach oben bis `end_floor` (gleiche Zelle)
    Pole { end_floor: u8 },
    /// Gerades Wandsegment auf demselben Stockwerk
    Wall { end: GridPos },
    /// Zielmarkierung
    Flag,
    /// Vorbelegter Spieler
    Player { player_type: PlayerType },
}

impl ElementKind {
    /// Typ-Tag dieser Variante.
    pub fn element_type(&self) -> ElementType {
        match self {
            ElementKind::Stair { .. } => ElementType::Stair,
            ElementKind::Pole { .. } => ElementType::Pole,
            ElementKind::Wall { .. } => ElementType::Wall,
            ElementKind::Flag => ElementType::Flag,
            ElementKind::Player { .. } => ElementType::Player,
        }
    }
}

/// Ein platziertes Element des Levels.
#[derive(Debug, Clone)]
pub struct MazeElement {
    /// Eindeutige ID
    pub id: ElementId,
    /// Stockwerk der (Start-)Position
    pub floor: u8,
    /// (Start-)Position
    pub pos: GridPos,
    /// Variantenspezifische Daten
    pub kind: ElementKind,
}

impl PartialEq for MazeElement {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for MazeElement {}

impl MazeElement {
    /// Erstellt ein Element aus bereits validierten Feldern.
    pub fn new(id: ElementId, floor: u8, pos: GridPos, kind: ElementKind) -> Self {
        Self {
            id,
            floor,
            pos,
            kind,
        }
    }

    /// Treppe von `(floor, pos)` nach `(end_floor, end)`.
    pub fn stair(id: ElementId, floor: u8, pos: GridPos, end_floor: u8, end: GridPos) -> Self {
        Self::new(id, floor, pos, ElementKind::Stair { end_floor, end })
    }

    /// Stange von `floor` bis `end_floor` an `pos`.
    pub fn pole(id: ElementId, floor: u8, pos: GridPos, end_floor: u8) -> Self {
        Self::new(id, floor, pos, ElementKind::Pole { end_floor })
    }

    /// Wand von `pos` bis `end` auf `floor`.
    pub fn wall(id: ElementId, floor: u8, pos: GridPos, end: GridPos) -> Self {
        Self::new(id, floor, pos, ElementKind::Wall { end })
    }

    /// Flagge an `pos` auf `floor`.
    pub fn flag(id: ElementId, floor: u8, pos: GridPos) -> Self {
        Self::new(id, floor, pos, ElementKind::Flag)
    }

    /// Spieler an `pos` auf `floor`.
    pub fn player(id: ElementId, floor: u8, pos: GridPos, player_type: PlayerType) -> Self {
        Self::new(id, floor, pos, ElementKind::Player { player_type })
    }

    /// Typ-Tag des Elements.
    pub fn element_type(&self) -> ElementType {
        self.kind.element_type()
    }

    /// End-Stockwerk für Treppen und Stangen.
    pub fn end_floor(&self) -> Option<u8> {
        match self.kind {
            ElementKind::Stair { end_floor, .. } | ElementKind::Pole { end_floor } => {
                Some(end_floor)
            }
            _ => None,
        }
    }

    /// Prüft, ob das Element die Zelle belegt.
    ///
    /// Belegt sind die Startposition auf dem eigenen Stockwerk und bei Treppen
    /// zusätzlich die Endposition auf dem End-Stockwerk.
    pub fn occupies(&self, floor: u8, pos: GridPos) -> bool {
        if self.floor == floor && self.pos == pos {
            return true;
        }
        matches!(
            self.kind,
            ElementKind::Stair { end_floor, end } if end_floor == floor && end == pos
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stair_occupies_start_and_end_cells() {
        let stair = MazeElement::stair(
            ElementId::new("stair-1"),
            0,
            GridPos::new(5, 5),
            1,
            GridPos::new(3, 4),
        );
        assert!(stair.occupies(0, GridPos::new(5, 5)));
        assert!(stair.occupies(1, GridPos::new(3, 4)));
        assert!(!stair.occupies(1, GridPos::new(5, 5)));
        assert!(!stair.occupies(0, GridPos::new(3, 4)));
    }

    #[test]
    fn wall_end_does_not_count_as_occupied() {
        let wall = MazeElement::wall(
            ElementId::new("wall-1"),
            0,
            GridPos::new(2, 3),
            GridPos::new(2, 7),
        );
        assert!(wall.occupies(0, GridPos::new(2, 3)));
        assert!(!wall.occupies(0, GridPos::new(2, 7)));
    }

    #[test]
    fn equality_is_by_id() {
        let a = MazeElement::flag(ElementId::new("flag-1"), 0, GridPos::new(1, 1));
        let b = MazeElement::flag(ElementId::new("flag-1"), 2, GridPos::new(9, 9));
        let c = MazeElement::flag(ElementId::new("flag-2"), 0, GridPos::new(1, 1));
        assert_eq!(a, b);
        assert_ne!(a, c);
    }
}
