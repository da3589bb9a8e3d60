use crate::app::{AppIntent, UiState};

/// Zeigt die Meldung einer abgelehnten Platzierung, bis sie bestätigt wird.
pub fn show_rejection_notice(ctx: &egui::Context, ui_state: &UiState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    let Some(message) = &ui_state.rejection_notice else {
        return events;
    };

    egui::Window::new("Platzierung nicht möglich")
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(8.0);
                ui.label(egui::RichText::new(format!("⚠ {}", message)).color(egui::Color32::YELLOW));
                ui.add_space(10.0);
                if ui.button("OK").clicked() {
                    events.push(AppIntent::RejectionNoticeDismissed);
                }
            });
        });

    events
}
