//! Application State: zentrale Datenhaltung.

mod app_state;
mod dialogs;
mod editor;

pub use app_state::AppState;
pub use dialogs::{CopiedIndicator, UiState, COPIED_INDICATOR_SECONDS};
pub use editor::EditorToolState;
