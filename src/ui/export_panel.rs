//! Export-Panel: Elementzähler, Dateivorschau, Kopieren und Herunterladen.

use crate::app::{AppIntent, AppState};
use crate::core::ElementType;
use crate::export::ExportFile;

/// Rendert das Export-Panel im rechten Seitenpanel und gibt erzeugte Events zurück.
pub fn render_export_panel(ui: &mut egui::Ui, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    ui.heading("Export Configuration");
    ui.add_space(4.0);

    egui::Grid::new("element_counts")
        .num_columns(2)
        .striped(true)
        .show(ui, |ui| {
            for (label, element_type) in [
                ("Stairs:", ElementType::Stair),
                ("Poles:", ElementType::Pole),
                ("Walls:", ElementType::Wall),
                ("Flags:", ElementType::Flag),
            ] {
                ui.label(label);
                ui.label(egui::RichText::new(state.layout.count(element_type).to_string()).strong());
                ui.end_row();
            }
        });

    ui.separator();

    egui::ScrollArea::vertical()
        .max_height((ui.available_height() - 150.0).max(120.0))
        .show(ui, |ui| {
            for file in ExportFile::ALL {
                render_file_block(ui, state, file, &mut events);
                ui.add_space(6.0);
            }
        });

    ui.separator();

    if ui
        .add(egui::Button::new("Download All Files").min_size(egui::vec2(ui.available_width(), 28.0)))
        .clicked()
    {
        events.push(AppIntent::ExportAllRequested);
    }

    ui.add_space(6.0);
    ui.label(egui::RichText::new("File Formats:").small().strong());
    for file in ExportFile::ALL {
        ui.small(format!("• {}: {}", file.file_name(), file.format_description()));
    }

    events
}

/// Vorschau einer Datei mit Kopieren-/Herunterladen-Knöpfen.
fn render_file_block(
    ui: &mut egui::Ui,
    state: &AppState,
    file: ExportFile,
    events: &mut Vec<AppIntent>,
) {
    let content = file.render(&state.layout);

    ui.horizontal(|ui| {
        ui.label(egui::RichText::new(file.file_name()).strong());
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.small_button("Download").clicked() {
                events.push(AppIntent::ExportDownloadRequested { file });
            }
            let copy_label = if state.ui.is_copied(file) { "✔ Copied" } else { "Copy" };
            if ui.small_button(copy_label).clicked() {
                events.push(AppIntent::ExportCopyRequested { file });
            }
        });
    });
    ui.small(file.format_description());

    let preview = if content.is_empty() { "(empty)" } else { content.as_str() };
    egui::Frame::group(ui.style()).show(ui, |ui| {
        egui::ScrollArea::vertical()
            .id_salt(file.file_name())
            .max_height(80.0)
            .show(ui, |ui| {
                ui.label(egui::RichText::new(preview).monospace().small());
            });
    });
}
