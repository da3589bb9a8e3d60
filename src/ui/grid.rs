//! Raster-Ansicht des aktuellen Stockwerks (egui-Painter).

use crate::app::{AppIntent, AppState, PlacementState, PlacementTool};
use crate::core::{floor_label, GridPos};
use crate::shared::{CellStyle, EditorOptions, GridScene};

/// Breite der Zeilen-/Spaltenköpfe relativ zur Zellgröße.
const HEADER_FACTOR: f32 = 0.8;

/// Rendert Kopfzeile, Raster und Bedienhinweise und gibt erzeugte Events zurück.
pub fn render_grid_panel(ui: &mut egui::Ui, state: &AppState, scene: &GridScene) -> Vec<AppIntent> {
    let mut events = super::keyboard::collect_keyboard_intents(
        ui,
        state.editor.selected_tool,
        state.editor.placement.is_pending(),
    );

    ui.horizontal(|ui| {
        ui.heading(floor_label(scene.floor));
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if state.editor.placement.is_pending() && ui.button("Cancel placement").clicked() {
                events.push(AppIntent::PlacementCancelRequested);
            }
            if let PlacementState::StairPending { start, floor } = state.editor.placement {
                ui.label(
                    egui::RichText::new(format!(
                        "Stair Start: {} → Row {}, Col {}",
                        floor_label(floor),
                        start.y + 1,
                        start.x + 1
                    ))
                    .color(ui.visuals().selection.bg_fill),
                );
            }
        });
    });

    egui::ScrollArea::both().show(ui, |ui| {
        events.extend(paint_grid(ui, scene, &state.options));
    });

    ui.add_space(6.0);
    for hint in placement_hints(state.editor.selected_tool, &state.editor.placement) {
        ui.small(format!("• {}", hint));
    }

    events
}

/// Zeichnet das Raster und liefert Klick-Events.
fn paint_grid(ui: &mut egui::Ui, scene: &GridScene, options: &EditorOptions) -> Vec<AppIntent> {
    let mut events = Vec::new();
    let cell = options.cell_size_px;
    let header = cell * HEADER_FACTOR;
    let size = egui::vec2(
        header + cell * scene.width as f32,
        header + cell * scene.height as f32,
    );
    let (rect, response) = ui.allocate_exact_size(size, egui::Sense::click());
    let painter = ui.painter_at(rect);
    let origin = rect.min + egui::vec2(header, header);

    let text_color = ui.visuals().text_color();
    let header_font = egui::FontId::monospace(cell * 0.32);
    let cell_font = egui::FontId::proportional(cell * 0.38);
    let grid_stroke = egui::Stroke::new(1.0, to_color32(options.grid_line_color));

    painter.text(
        rect.min + egui::vec2(header, header) * 0.5,
        egui::Align2::CENTER_CENTER,
        "#",
        header_font.clone(),
        text_color,
    );
    for x in 0..scene.width {
        painter.text(
            egui::pos2(origin.x + (x as f32 + 0.5) * cell, rect.min.y + header * 0.5),
            egui::Align2::CENTER_CENTER,
            (x + 1).to_string(),
            header_font.clone(),
            text_color,
        );
    }
    for y in 0..scene.height {
        painter.text(
            egui::pos2(rect.min.x + header * 0.5, origin.y + (y as f32 + 0.5) * cell),
            egui::Align2::CENTER_CENTER,
            (y + 1).to_string(),
            header_font.clone(),
            text_color,
        );
    }

    for y in 0..scene.height {
        for x in 0..scene.width {
            let Some(view) = scene.cell(GridPos::new(x, y)) else {
                continue;
            };
            let cell_rect = egui::Rect::from_min_size(
                origin + egui::vec2(x as f32 * cell, y as f32 * cell),
                egui::vec2(cell, cell),
            );
            painter.rect_filled(cell_rect, 0.0, style_color(view.style, options));
            painter.rect_stroke(cell_rect, 0.0, grid_stroke, egui::StrokeKind::Inside);
            if view.style == CellStyle::StairAnchorOtherFloor {
                painter.rect_stroke(
                    cell_rect.shrink(1.0),
                    2.0,
                    egui::Stroke::new(2.0, egui::Color32::from_rgb(251, 146, 60)),
                    egui::StrokeKind::Inside,
                );
            }
            if let Some(content) = view.content {
                painter.text(
                    cell_rect.center(),
                    egui::Align2::CENTER_CENTER,
                    content.label(),
                    cell_font.clone(),
                    egui::Color32::BLACK,
                );
            }
        }
    }

    if response.clicked() {
        if let Some(pos) = response
            .interact_pointer_pos()
            .and_then(|p| cell_at(origin, cell, p, scene))
        {
            events.push(AppIntent::CellClicked { pos });
        }
    }

    if options.show_cell_tooltips {
        if let Some(pos) = response.hover_pos().and_then(|p| cell_at(origin, cell, p, scene)) {
            response.on_hover_text_at_pointer(format!(
                "Row {}, Column {} ({}, {})",
                pos.y + 1,
                pos.x + 1,
                pos.x,
                pos.y
            ));
        }
    }

    events
}

/// Rechnet eine Bildschirmposition in eine Rasterzelle um.
fn cell_at(origin: egui::Pos2, cell: f32, pointer: egui::Pos2, scene: &GridScene) -> Option<GridPos> {
    let local = pointer - origin;
    if local.x < 0.0 || local.y < 0.0 {
        return None;
    }
    let pos = GridPos::new((local.x / cell) as i32, (local.y / cell) as i32);
    (pos.x < scene.width && pos.y < scene.height).then_some(pos)
}

fn style_color(style: CellStyle, options: &EditorOptions) -> egui::Color32 {
    to_color32(match style {
        CellStyle::Empty => options.cell_color_empty,
        CellStyle::Inaccessible => options.cell_color_inaccessible,
        CellStyle::Occupied => options.cell_color_occupied,
        CellStyle::PendingAnchor => options.cell_color_pending,
        CellStyle::StairAnchorOtherFloor => options.cell_color_stair_anchor,
    })
}

fn to_color32(color: [f32; 4]) -> egui::Color32 {
    egui::Color32::from_rgba_unmultiplied(
        (color[0] * 255.0) as u8,
        (color[1] * 255.0) as u8,
        (color[2] * 255.0) as u8,
        (color[3] * 255.0) as u8,
    )
}

/// Bedienhinweise unter dem Raster, abhängig von Werkzeug und Platzierung.
pub fn placement_hints(
    tool: Option<PlacementTool>,
    placement: &PlacementState,
) -> Vec<&'static str> {
    let mut hints = vec![
        "Click on cells to place selected elements",
        "Click on existing elements to remove them",
        "Dark areas are inaccessible regions",
    ];
    match tool {
        Some(PlacementTool::Wall) => {
            hints.push("Click two points to create a wall (horizontal/vertical only)")
        }
        Some(PlacementTool::Stair) if placement.stair_start().is_some() => {
            hints.push("Click on a different floor to place stair ending position")
        }
        Some(PlacementTool::Stair) => hints.push("Click to place stair starting position"),
        Some(PlacementTool::Pole) => hints.push("Click to place pole, then select height"),
        Some(PlacementTool::Flag) | None => {}
    }
    hints
}
