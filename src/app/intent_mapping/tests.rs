use crate::app::tools::PlacementTool;
use crate::app::{AppCommand, AppIntent, AppState};
use crate::core::GridPos;

use super::map_intent_to_commands;

#[test]
fn tool_toggled_selects_and_deselects() {
    let mut state = AppState::new();

    let commands = map_intent_to_commands(
        &state,
        AppIntent::ToolToggled {
            tool: PlacementTool::Wall,
        },
    );
    assert_eq!(commands.len(), 1);
    assert!(matches!(
        commands[0],
        AppCommand::SetTool {
            tool: Some(PlacementTool::Wall)
        }
    ));

    state.editor.selected_tool = Some(PlacementTool::Wall);
    let commands = map_intent_to_commands(
        &state,
        AppIntent::ToolToggled {
            tool: PlacementTool::Wall,
        },
    );
    assert!(matches!(commands[0], AppCommand::SetTool { tool: None }));
}

#[test]
fn floor_step_is_clamped_to_existing_floors() {
    let mut state = AppState::new();

    let down = map_intent_to_commands(&state, AppIntent::FloorStepRequested { delta: -1 });
    assert!(down.is_empty());

    let up = map_intent_to_commands(&state, AppIntent::FloorStepRequested { delta: 1 });
    assert!(matches!(up[0], AppCommand::SetFloor { floor: 1 }));

    state.editor.current_floor = 2;
    let up = map_intent_to_commands(&state, AppIntent::FloorStepRequested { delta: 1 });
    assert!(up.is_empty());
}

#[test]
fn cell_click_is_blocked_by_rejection_notice() {
    let mut state = AppState::new();
    state.ui.rejection_notice = Some("nope".to_string());

    let commands = map_intent_to_commands(
        &state,
        AppIntent::CellClicked {
            pos: GridPos::new(1, 1),
        },
    );
    assert!(commands.is_empty());
}

#[test]
fn reset_respects_confirm_option() {
    let mut state = AppState::new();
    state.options.confirm_reset = true;
    let commands = map_intent_to_commands(&state, AppIntent::ResetRequested);
    assert!(matches!(commands[0], AppCommand::OpenResetConfirm));

    state.options.confirm_reset = false;
    let commands = map_intent_to_commands(&state, AppIntent::ResetRequested);
    assert!(matches!(commands[0], AppCommand::ResetLayout));
}

#[test]
fn reset_confirmed_maps_to_two_commands_in_order() {
    let state = AppState::new();

    let commands = map_intent_to_commands(&state, AppIntent::ResetConfirmed);

    assert_eq!(commands.len(), 2);
    assert!(matches!(commands[0], AppCommand::ResetLayout));
    assert!(matches!(commands[1], AppCommand::CloseResetConfirm));
}
