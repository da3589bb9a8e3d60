//! Die zentrale Element-Liste des Levels (Element-Store).

use super::element::{ElementId, ElementKind, ElementType, MazeElement, PlayerType};
use super::grid::GridPos;
use super::validation::{validate_element, PlacementRejection};
use std::time::{SystemTime, UNIX_EPOCH};

/// Fehler bei direkten Mutationen der Element-Liste.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LayoutError {
    #[error("Element {0} existiert nicht")]
    UnknownElement(ElementId),
    #[error("Änderung an {id} verletzt eine Element-Regel: {reason}")]
    InvalidElement {
        id: ElementId,
        reason: PlacementRejection,
    },
}

/// Teil-Änderung eines Elements; `None`-Felder bleiben unverändert.
#[derive(Debug, Clone, Default)]
pub struct ElementPatch {
    pub floor: Option<u8>,
    pub pos: Option<GridPos>,
    pub kind: Option<ElementKind>,
}

/// Erzeugt IDs aus Typname + Zeitstempel in Mikrosekunden.
///
/// Der Zeitstempel wächst streng monoton, auch wenn die Uhr steht oder zurückspringt.
#[derive(Debug, Default, Clone)]
pub struct ElementIdGenerator {
    last_stamp: u128,
}

impl ElementIdGenerator {
    /// Liefert die nächste eindeutige ID für den Typ.
    pub fn next_id(&mut self, element_type: ElementType) -> ElementId {
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_micros())
            .unwrap_or(0);
        self.last_stamp = now.max(self.last_stamp + 1);
        ElementId::new(format!("{}-{}", element_type.name(), self.last_stamp))
    }
}

/// Startpositionen der drei Spieler (alle auf Floor 1).
const SEED_PLAYERS: [(PlayerType, i32, i32); 3] = [
    (PlayerType::A, 8, 9),
    (PlayerType::B, 12, 6),
    (PlayerType::C, 16, 9),
];

/// Geordnete Liste aller Elemente einer Sitzung.
#[derive(Debug, Clone, Default)]
pub struct MazeLayout {
    elements: Vec<MazeElement>,
    ids: ElementIdGenerator,
}

impl MazeLayout {
    /// Erstellt eine leere Liste ohne Spieler.
    pub fn new() -> Self {
        Self::default()
    }

    /// Erstellt die Startbelegung mit den drei Spielern.
    pub fn with_seed_players() -> Self {
        let mut layout = Self::new();
        layout.elements = seed_players();
        layout
    }

    /// Setzt auf die Startbelegung zurück. Der ID-Zähler bleibt erhalten.
    pub fn reset(&mut self) {
        self.elements = seed_players();
    }

    /// Erzeugt eine neue, sitzungsweit eindeutige ID.
    pub fn next_id(&mut self, element_type: ElementType) -> ElementId {
        self.ids.next_id(element_type)
    }

    /// Hängt ein Element an (keine Duplikat- oder Überlappungsprüfung).
    pub fn add(&mut self, element: MazeElement) -> ElementId {
        let id = element.id.clone();
        self.elements.push(element);
        id
    }

    /// Entfernt das Element mit der ID.
    pub fn remove(&mut self, id: &ElementId) -> Option<MazeElement> {
        let index = self.elements.iter().position(|el| &el.id == id)?;
        Some(self.elements.remove(index))
    }

    /// Übernimmt eine Teil-Änderung, sofern das Ergebnis gültig bleibt.
    pub fn update(&mut self, id: &ElementId, patch: ElementPatch) -> Result<(), LayoutError> {
        let element = self
            .elements
            .iter_mut()
            .find(|el| &el.id == id)
            .ok_or_else(|| LayoutError::UnknownElement(id.clone()))?;

        let mut merged = element.clone();
        if let Some(floor) = patch.floor {
            merged.floor = floor;
        }
        if let Some(pos) = patch.pos {
            merged.pos = pos;
        }
        if let Some(kind) = patch.kind {
            merged.kind = kind;
        }

        validate_element(&merged).map_err(|reason| LayoutError::InvalidElement {
            id: id.clone(),
            reason,
        })?;

        *element = merged;
        Ok(())
    }

    /// Sucht das erste Element, das die Zelle auf dem Stockwerk belegt
    /// (Startposition oder Treppen-Ende).
    pub fn find_at(&self, floor: u8, pos: GridPos) -> Option<&MazeElement> {
        self.elements.iter().find(|el| el.occupies(floor, pos))
    }

    /// Sucht ein Element per ID.
    pub fn get(&self, id: &ElementId) -> Option<&MazeElement> {
        self.elements.iter().find(|el| &el.id == id)
    }

    /// Alle Elemente in Einfügereihenfolge.
    pub fn elements(&self) -> &[MazeElement] {
        &self.elements
    }

    /// Alle Elemente eines Typs in Einfügereihenfolge.
    pub fn elements_of_type(&self, element_type: ElementType) -> impl Iterator<Item = &MazeElement> {
        self.elements
            .iter()
            .filter(move |el| el.element_type() == element_type)
    }

    /// Anzahl der Elemente eines Typs.
    pub fn count(&self, element_type: ElementType) -> usize {
        self.elements_of_type(element_type).count()
    }

    /// Die erste Flagge (nur diese wird exportiert).
    pub fn first_flag(&self) -> Option<&MazeElement> {
        self.elements_of_type(ElementType::Flag).next()
    }

    /// Gesamtzahl der Elemente inklusive Spieler.
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Gibt `true` zurück, wenn keine Elemente vorhanden sind.
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}

fn seed_players() -> Vec<MazeElement> {
    SEED_PLAYERS
        .iter()
        .map(|&(player_type, x, y)| {
            MazeElement::player(
                ElementId::new(format!("player-{}", player_type.letter())),
                0,
                GridPos::new(x, y),
                player_type,
            )
        })
        .collect()
}
