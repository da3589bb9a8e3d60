//! Core-Domänentypen: Raster, Elemente, Element-Liste und Prüfregeln.

pub mod element;
pub mod grid;
pub mod maze_layout;
pub mod validation;

pub use element::{ElementId, ElementKind, ElementType, MazeElement, PlayerType};
pub use grid::{
    floor_description, floor_label, inaccessible_areas, GridPos, InaccessibleArea, FLOOR_COUNT,
    GRID_HEIGHT, GRID_WIDTH, TOP_FLOOR,
};
pub use maze_layout::{ElementIdGenerator, ElementPatch, LayoutError, MazeLayout};
pub use validation::PlacementRejection;
