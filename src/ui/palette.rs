//! Element-Palette: Werkzeugauswahl und Spieler-Übersicht.

use crate::app::{AppIntent, AppState, PlacementTool};
use crate::core::{floor_label, ElementKind, ElementType};

/// Rendert die Palette im linken Seitenpanel und gibt erzeugte Events zurück.
pub fn render_palette(ui: &mut egui::Ui, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();
    let selected = state.editor.selected_tool;

    ui.heading("Elements");
    ui.add_space(4.0);

    for tool in PlacementTool::ALL {
        let text = format!(
            "{}  ({})\n{}",
            tool.label(),
            tool.shortcut(),
            tool.description()
        );
        let button = egui::Button::new(text)
            .selected(selected == Some(tool))
            .min_size(egui::vec2(ui.available_width(), 40.0));
        if ui.add(button).clicked() {
            events.push(AppIntent::ToolToggled { tool });
        }
    }

    ui.add_space(6.0);
    ui.separator();

    if ui
        .add_enabled(
            selected.is_some(),
            egui::Button::new("Clear Selection").min_size(egui::vec2(ui.available_width(), 0.0)),
        )
        .clicked()
    {
        events.push(AppIntent::ToolSelectionCleared);
    }

    ui.add_space(8.0);
    ui.label(egui::RichText::new("Players:").strong());
    for player in state.layout.elements_of_type(ElementType::Player) {
        if let ElementKind::Player { player_type } = player.kind {
            ui.small(format!(
                "• {}: {} on {}",
                player_type.letter(),
                player.pos,
                floor_label(player.floor)
            ));
        }
    }

    events
}
