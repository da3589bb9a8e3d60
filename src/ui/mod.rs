//! UI-Komponenten: Menü, Palette, Raster, Export-Panel, Dialoge.

pub mod dialogs;
pub mod export_panel;
pub mod floor_selector;
pub mod grid;
mod keyboard;
/// UI-Layer mit egui
///
/// Dieses Modul implementiert alle UI-Komponenten (Menüs, Panels, Dialogs).
/// Keyboard-Shortcuts sind in ein eigenes Modul extrahiert.
pub mod menu;
pub mod options_dialog;
pub mod palette;
pub mod status;

pub use dialogs::{
    handle_file_dialogs, show_pole_end_floor_dialog, show_rejection_notice, show_reset_confirm,
};
pub use export_panel::render_export_panel;
pub use floor_selector::render_floor_selector;
pub use grid::render_grid_panel;
pub use menu::render_menu;
pub use options_dialog::show_options_dialog;
pub use palette::render_palette;
pub use status::render_status_bar;
