//! Top-Menü (File, Edit, Floor).

use crate::app::{AppIntent, AppState};
use crate::core::{floor_label, FLOOR_COUNT};

/// Rendert die Menü-Leiste
pub fn render_menu(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
        egui::MenuBar::new().ui(ui, |ui| {
            ui.menu_button("File", |ui| {
                if ui.button("Download All Files...").clicked() {
                    events.push(AppIntent::ExportAllRequested);
                    ui.close();
                }

                ui.separator();

                if ui.button("Reset Layout...").clicked() {
                    events.push(AppIntent::ResetRequested);
                    ui.close();
                }

                ui.separator();

                if ui.button("Exit").clicked() {
                    events.push(AppIntent::ExitRequested);
                    ui.close();
                }
            });

            ui.menu_button("Edit", |ui| {
                if ui
                    .add_enabled(
                        state.editor.placement.is_pending(),
                        egui::Button::new("Cancel placement (Esc)"),
                    )
                    .clicked()
                {
                    events.push(AppIntent::PlacementCancelRequested);
                    ui.close();
                }

                if ui
                    .add_enabled(
                        state.editor.selected_tool.is_some(),
                        egui::Button::new("Clear Selection"),
                    )
                    .clicked()
                {
                    events.push(AppIntent::ToolSelectionCleared);
                    ui.close();
                }

                ui.separator();

                if ui.button("Optionen...").clicked() {
                    events.push(AppIntent::OpenOptionsDialogRequested);
                    ui.close();
                }
            });

            ui.menu_button("Floor", |ui| {
                for floor in 0..FLOOR_COUNT {
                    let selected = state.editor.current_floor == floor;
                    if ui.radio(selected, floor_label(floor)).clicked() {
                        events.push(AppIntent::FloorSelected { floor });
                        ui.close();
                    }
                }

                ui.separator();
                ui.weak("PageUp / PageDown wechselt das Stockwerk");
            });
        });
    });

    events
}
