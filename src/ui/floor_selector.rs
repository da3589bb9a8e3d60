//! Stockwerk-Wähler über dem Raster.

use crate::app::{AppIntent, AppState};
use crate::core::{floor_description, floor_label, FLOOR_COUNT};

/// Rendert die Stockwerk-Knöpfe und gibt erzeugte Events zurück.
pub fn render_floor_selector(ui: &mut egui::Ui, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();
    let current = state.editor.current_floor;

    ui.horizontal(|ui| {
        ui.label("Floor:");
        for floor in 0..FLOOR_COUNT {
            let button = egui::Button::new(floor_label(floor)).selected(current == floor);
            if ui
                .add(button)
                .on_hover_text(floor_description(floor))
                .clicked()
                && floor != current
            {
                events.push(AppIntent::FloorSelected { floor });
            }
        }
        ui.separator();
        ui.weak(floor_description(current));
    });

    events
}
