//! Application-Layer: Controller, State, Events und Use-Cases.

pub mod command_log;
pub mod controller;
pub mod events;
pub mod handlers;
mod intent_mapping;
pub mod render_scene;
/// Application State und Controller
///
/// Dieses Modul verwaltet den Zustand der Anwendung (Element-Liste, Werkzeug, Dialoge).
pub mod state;
pub mod tools;
pub mod use_cases;

pub use command_log::{CommandLog, LoggedCommand};
pub use controller::AppController;
pub use events::{AppCommand, AppIntent};
pub use render_scene::build as build_grid_scene;
pub use state::{AppState, EditorToolState, UiState};
pub use tools::{PlacementOutcome, PlacementState, PlacementTool};
