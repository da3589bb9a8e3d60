use crate::app::{AppIntent, AppState};
use crate::core::floor_label;
use crate::core::validation::available_pole_end_floors;

/// Zeigt die Auswahl des End-Stockwerks einer Stange als modales Fenster.
pub fn show_pole_end_floor_dialog(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    let Some((pos, floor)) = state.editor.placement.pole_position() else {
        return events;
    };

    egui::Window::new("Select Pole Ending Floor")
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.set_min_width(280.0);
            ui.label(format!(
                "Position: Row {}, Column {} on {}",
                pos.y + 1,
                pos.x + 1,
                floor_label(floor)
            ));
            ui.label("Choose ending floor (must be above current floor):");
            ui.add_space(6.0);

            ui.horizontal(|ui| {
                for end_floor in available_pole_end_floors(floor) {
                    if ui.button(floor_label(end_floor)).clicked() {
                        events.push(AppIntent::PoleEndFloorChosen { end_floor });
                    }
                }
            });

            ui.add_space(6.0);
            if ui
                .add(egui::Button::new("Cancel").min_size(egui::vec2(ui.available_width(), 0.0)))
                .clicked()
            {
                events.push(AppIntent::PlacementCancelRequested);
            }
        });

    events
}
