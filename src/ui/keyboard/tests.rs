use super::*;

fn key_event(key: egui::Key, modifiers: egui::Modifiers) -> egui::Event {
    egui::Event::Key {
        key,
        physical_key: None,
        pressed: true,
        repeat: false,
        modifiers,
    }
}

fn collect_with_key_event(
    event: egui::Event,
    selected_tool: Option<PlacementTool>,
    placement_pending: bool,
) -> Vec<AppIntent> {
    let ctx = egui::Context::default();
    let mut raw_input = egui::RawInput::default();
    if let egui::Event::Key { modifiers, .. } = &event {
        raw_input.modifiers = *modifiers;
    }
    raw_input.events.push(event);

    let mut events = Vec::new();
    let _ = ctx.run(raw_input, |ctx| {
        egui::CentralPanel::default().show(ctx, |ui| {
            events = collect_keyboard_intents(ui, selected_tool, placement_pending);
        });
    });

    events
}

#[test]
fn test_num3_emits_wall_tool_intent() {
    let events = collect_with_key_event(
        key_event(egui::Key::Num3, egui::Modifiers::default()),
        None,
        false,
    );

    assert!(events.iter().any(|event| matches!(
        event,
        AppIntent::ToolToggled {
            tool: PlacementTool::Wall
        }
    )));
}

#[test]
fn test_num1_with_ctrl_is_ignored() {
    let events = collect_with_key_event(
        key_event(egui::Key::Num1, egui::Modifiers::CTRL),
        None,
        false,
    );

    assert!(events.is_empty());
}

#[test]
fn test_escape_cancels_pending_placement() {
    let events = collect_with_key_event(
        key_event(egui::Key::Escape, egui::Modifiers::default()),
        Some(PlacementTool::Wall),
        true,
    );

    assert!(matches!(
        events.as_slice(),
        [AppIntent::PlacementCancelRequested]
    ));
}

#[test]
fn test_escape_without_pending_clears_tool() {
    let events = collect_with_key_event(
        key_event(egui::Key::Escape, egui::Modifiers::default()),
        Some(PlacementTool::Flag),
        false,
    );

    assert!(matches!(events.as_slice(), [AppIntent::ToolSelectionCleared]));
}

#[test]
fn test_page_up_steps_floor_up() {
    let events = collect_with_key_event(
        key_event(egui::Key::PageUp, egui::Modifiers::default()),
        None,
        false,
    );

    assert!(matches!(
        events.as_slice(),
        [AppIntent::FloorStepRequested { delta: 1 }]
    ));
}
