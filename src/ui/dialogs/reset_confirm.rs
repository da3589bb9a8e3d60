use crate::app::{AppIntent, UiState};

/// Zeigt die Rückfrage vor dem Zurücksetzen des Layouts.
pub fn show_reset_confirm(ctx: &egui::Context, ui_state: &UiState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    if !ui_state.show_reset_confirm {
        return events;
    }

    egui::Window::new("Layout zurücksetzen")
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(8.0);
                ui.label("Alle platzierten Elemente werden entfernt.");
                ui.label("Die drei Spieler bleiben auf ihren Startpositionen.");
                ui.add_space(10.0);

                ui.horizontal(|ui| {
                    if ui.button("Zurücksetzen").clicked() {
                        events.push(AppIntent::ResetConfirmed);
                    }
                    if ui.button("Abbrechen").clicked() {
                        events.push(AppIntent::ResetCancelled);
                    }
                });
            });
        });

    events
}
