//! Keyboard-Shortcuts für das Raster.
//!
//! Verarbeitet globale Tastenkombinationen und mappt sie auf `AppIntent`s.

use crate::app::{AppIntent, PlacementTool};

/// Verarbeitet Keyboard-Shortcuts und gibt AppIntents zurück.
pub(super) fn collect_keyboard_intents(
    ui: &egui::Ui,
    selected_tool: Option<PlacementTool>,
    placement_pending: bool,
) -> Vec<AppIntent> {
    let mut events = Vec::new();

    let (key_escape_pressed, key_page_up_pressed, key_page_down_pressed) = ui.input(|i| {
        (
            i.key_pressed(egui::Key::Escape),
            i.key_pressed(egui::Key::PageUp),
            i.key_pressed(egui::Key::PageDown),
        )
    });

    if key_escape_pressed {
        if placement_pending {
            // Laufende Platzierung abbrechen
            events.push(AppIntent::PlacementCancelRequested);
        } else if selected_tool.is_some() {
            events.push(AppIntent::ToolSelectionCleared);
        }
    }

    if key_page_up_pressed {
        events.push(AppIntent::FloorStepRequested { delta: 1 });
    }
    if key_page_down_pressed {
        events.push(AppIntent::FloorStepRequested { delta: -1 });
    }

    // Werkzeugwahl 1–4 (ohne Modifier)
    let (modifiers, tool_keys) = ui.input(|i| {
        (
            i.modifiers,
            [
                i.key_pressed(egui::Key::Num1),
                i.key_pressed(egui::Key::Num2),
                i.key_pressed(egui::Key::Num3),
                i.key_pressed(egui::Key::Num4),
            ],
        )
    });

    if !modifiers.any() {
        for (tool, pressed) in PlacementTool::ALL.into_iter().zip(tool_keys) {
            if pressed {
                events.push(AppIntent::ToolToggled { tool });
            }
        }
    }

    events
}

#[cfg(test)]
mod tests;
