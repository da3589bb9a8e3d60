//! Optionen-Dialog für Zellgröße, Farben und Verhalten.

use crate::app::{AppIntent, AppState};
use crate::shared::options::{CELL_SIZE_MAX_PX, CELL_SIZE_MIN_PX};

/// Zeigt den Options-Dialog und gibt erzeugte Events zurück.
pub fn show_options_dialog(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    if !state.show_options_dialog {
        return events;
    }

    // Arbeitskopie der Optionen für Live-Bearbeitung
    let mut opts = state.options.clone();
    let mut changed = false;

    egui::Window::new("Optionen")
        .collapsible(true)
        .resizable(true)
        .default_width(340.0)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            // ── Raster ──────────────────────────────────────────
            ui.collapsing("Raster", |ui| {
                ui.horizontal(|ui| {
                    ui.label("Zellgröße (px):");
                    changed |= ui
                        .add(
                            egui::DragValue::new(&mut opts.cell_size_px)
                                .range(CELL_SIZE_MIN_PX..=CELL_SIZE_MAX_PX)
                                .speed(0.5),
                        )
                        .changed();
                });
                changed |= ui
                    .checkbox(&mut opts.show_cell_tooltips, "Zell-Tooltips anzeigen")
                    .changed();
            });

            // ── Farben ──────────────────────────────────────────
            ui.collapsing("Farben", |ui| {
                changed |= color_edit(ui, "Frei:", &mut opts.cell_color_empty);
                changed |= color_edit(ui, "Unzugänglich:", &mut opts.cell_color_inaccessible);
                changed |= color_edit(ui, "Belegt:", &mut opts.cell_color_occupied);
                changed |= color_edit(ui, "Startpunkt:", &mut opts.cell_color_pending);
                changed |= color_edit(ui, "Treppe (anderes Stockwerk):", &mut opts.cell_color_stair_anchor);
                changed |= color_edit(ui, "Rasterlinien:", &mut opts.grid_line_color);
            });

            // ── Verhalten ───────────────────────────────────────
            ui.collapsing("Verhalten", |ui| {
                changed |= ui
                    .checkbox(&mut opts.confirm_reset, "Vor dem Zurücksetzen nachfragen")
                    .changed();
            });

            ui.separator();

            ui.horizontal(|ui| {
                if ui.button("Standardwerte").clicked() {
                    events.push(AppIntent::ResetOptionsRequested);
                }
                if ui.button("Schließen").clicked() {
                    events.push(AppIntent::CloseOptionsDialogRequested);
                }
            });
        });

    // Änderungen sofort anwenden (Live-Preview)
    if changed {
        events.push(AppIntent::OptionsChanged { options: opts });
    }

    events
}

/// Hilfsfunktion: Farb-Editor für [f32; 4] mit Alpha.
fn color_edit(ui: &mut egui::Ui, label: &str, color: &mut [f32; 4]) -> bool {
    let mut changed = false;
    ui.horizontal(|ui| {
        ui.label(label);
        let mut c = egui::Color32::from_rgba_unmultiplied(
            (color[0] * 255.0) as u8,
            (color[1] * 255.0) as u8,
            (color[2] * 255.0) as u8,
            (color[3] * 255.0) as u8,
        );
        if ui.color_edit_button_srgba(&mut c).changed() {
            color[0] = c.r() as f32 / 255.0;
            color[1] = c.g() as f32 / 255.0;
            color[2] = c.b() as f32 / 255.0;
            color[3] = c.a() as f32 / 255.0;
            changed = true;
        }
    });
    changed
}
