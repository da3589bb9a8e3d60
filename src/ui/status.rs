//! Status-Bar am unteren Bildschirmrand.

use crate::app::{AppIntent, AppState, PlacementState};
use crate::core::floor_label;

/// Rendert die Status-Bar
pub fn render_status_bar(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.label(format!("Elements: {}", state.element_count()));

            ui.separator();

            ui.label(floor_label(state.current_floor()));

            ui.separator();

            let tool_name = state
                .editor
                .selected_tool
                .map(|tool| tool.label())
                .unwrap_or("None");
            ui.label(format!("Tool: {}", tool_name));

            ui.separator();

            let placement = match state.editor.placement {
                PlacementState::Idle => "Idle".to_string(),
                PlacementState::WallPending { start } => format!("Wall from {}", start),
                PlacementState::StairPending { start, floor } => {
                    format!("Stair from {} on {}", start, floor_label(floor))
                }
                PlacementState::PolePendingFloorChoice { pos, .. } => {
                    format!("Pole at {}: choose end floor", pos)
                }
            };
            ui.label(format!("Placement: {}", placement));

            // Statusnachricht (z.B. Export-Ergebnis)
            if let Some(ref msg) = state.ui.status_message {
                ui.separator();
                ui.label(egui::RichText::new(format!("ℹ {}", msg)).color(egui::Color32::YELLOW));
                if ui.small_button("✖").clicked() {
                    events.push(AppIntent::StatusMessageDismissed);
                }
            }
        });
    });

    events
}
