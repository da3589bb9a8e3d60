//! Maze-Config-Editor Library.
//! Core-Funktionalität als Library exportiert für Tests und Wiederverwendung.

pub mod app;
pub mod core;
pub mod export;
pub mod shared;
pub mod ui;

pub use app::{
    AppCommand, AppController, AppIntent, AppState, EditorToolState, PlacementOutcome,
    PlacementState, PlacementTool, UiState,
};
pub use core::{
    ElementId, ElementKind, ElementType, GridPos, MazeElement, MazeLayout, PlacementRejection,
    PlayerType,
};
pub use export::{parse_file, ExportFile, ExportParseError};
pub use shared::{EditorOptions, GridScene};
