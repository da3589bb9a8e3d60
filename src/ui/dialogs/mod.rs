//! Datei-Dialoge und modale Fenster.

mod file_dialogs;
mod pole_end_floor;
mod rejection_notice;
mod reset_confirm;

pub use file_dialogs::handle_file_dialogs;
pub use pole_end_floor::show_pole_end_floor_dialog;
pub use rejection_notice::show_rejection_notice;
pub use reset_confirm::show_reset_confirm;
