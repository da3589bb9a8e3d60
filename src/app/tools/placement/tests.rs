use super::{PlacementOutcome, PlacementState};
use crate::app::tools::PlacementTool;
use crate::core::{ElementKind, ElementType, GridPos, MazeLayout, PlacementRejection};

fn committed_kind(layout: &MazeLayout, outcome: &PlacementOutcome) -> (u8, GridPos, ElementKind) {
    let PlacementOutcome::Committed(id) = outcome else {
        panic!("Commit erwartet, erhalten: {outcome:?}");
    };
    let el = layout.get(id).expect("Element sollte existieren");
    (el.floor, el.pos, el.kind)
}

#[test]
fn test_wall_two_click_flow() {
    let mut layout = MazeLayout::new();
    let mut state = PlacementState::Idle;

    let first = state.on_cell_click(Some(PlacementTool::Wall), 0, GridPos::new(2, 3), &mut layout);
    assert_eq!(first, PlacementOutcome::Started);
    assert_eq!(state.wall_start(), Some(GridPos::new(2, 3)));

    let second =
        state.on_cell_click(Some(PlacementTool::Wall), 0, GridPos::new(2, 7), &mut layout);
    assert_eq!(
        committed_kind(&layout, &second),
        (
            0,
            GridPos::new(2, 3),
            ElementKind::Wall {
                end: GridPos::new(2, 7)
            }
        )
    );
    assert_eq!(state, PlacementState::Idle);
}

#[test]
fn test_wall_rejection_keeps_pending_start() {
    let mut layout = MazeLayout::new();
    let mut state = PlacementState::Idle;
    state.on_cell_click(Some(PlacementTool::Wall), 0, GridPos::new(2, 3), &mut layout);

    let same = state.on_cell_click(Some(PlacementTool::Wall), 0, GridPos::new(2, 3), &mut layout);
    // Startzelle ist unbelegt (Pending-Zustand ist kein Element), daher Ablehnung statt Löschen
    assert_eq!(same, PlacementOutcome::Rejected(PlacementRejection::WallZeroLength));

    let diagonal =
        state.on_cell_click(Some(PlacementTool::Wall), 0, GridPos::new(4, 5), &mut layout);
    assert_eq!(diagonal, PlacementOutcome::Rejected(PlacementRejection::WallDiagonal));
    assert_eq!(state.wall_start(), Some(GridPos::new(2, 3)));
    assert!(layout.is_empty());

    // Nächster gültiger Klick ist weiterhin der zweite Punkt derselben Wand
    let ok = state.on_cell_click(Some(PlacementTool::Wall), 0, GridPos::new(6, 3), &mut layout);
    assert!(matches!(ok, PlacementOutcome::Committed(_)));
    assert_eq!(layout.count(ElementType::Wall), 1);
}

#[test]
fn test_stair_across_floors() {
    let mut layout = MazeLayout::new();
    let mut state = PlacementState::Idle;

    state.on_cell_click(Some(PlacementTool::Stair), 0, GridPos::new(5, 5), &mut layout);
    assert_eq!(state.stair_start(), Some((GridPos::new(5, 5), 0)));

    let outcome =
        state.on_cell_click(Some(PlacementTool::Stair), 1, GridPos::new(5, 5), &mut layout);
    assert_eq!(
        committed_kind(&layout, &outcome),
        (
            0,
            GridPos::new(5, 5),
            ElementKind::Stair {
                end_floor: 1,
                end: GridPos::new(5, 5)
            }
        )
    );
    assert_eq!(state, PlacementState::Idle);
}

#[test]
fn test_stair_same_floor_rejected_and_retained() {
    let mut layout = MazeLayout::new();
    let mut state = PlacementState::Idle;

    state.on_cell_click(Some(PlacementTool::Stair), 0, GridPos::new(5, 5), &mut layout);
    let outcome =
        state.on_cell_click(Some(PlacementTool::Stair), 0, GridPos::new(6, 5), &mut layout);

    assert_eq!(outcome, PlacementOutcome::Rejected(PlacementRejection::StairSameFloor));
    assert_eq!(state.stair_start(), Some((GridPos::new(5, 5), 0)));
    assert!(layout.is_empty());
}

#[test]
fn test_stair_can_go_downwards() {
    let mut layout = MazeLayout::new();
    let mut state = PlacementState::Idle;

    state.on_cell_click(Some(PlacementTool::Stair), 2, GridPos::new(12, 5), &mut layout);
    let outcome =
        state.on_cell_click(Some(PlacementTool::Stair), 0, GridPos::new(3, 3), &mut layout);
    let (floor, _, kind) = committed_kind(&layout, &outcome);
    assert_eq!(floor, 2);
    assert!(matches!(kind, ElementKind::Stair { end_floor: 0, .. }));
}

#[test]
fn test_pole_on_top_floor_rejected_without_pending_state() {
    let mut layout = MazeLayout::new();
    let mut state = PlacementState::Idle;

    let outcome =
        state.on_cell_click(Some(PlacementTool::Pole), 2, GridPos::new(12, 5), &mut layout);

    assert_eq!(
        outcome,
        PlacementOutcome::Rejected(PlacementRejection::PoleOnTopFloor { floor: 2 })
    );
    assert_eq!(state, PlacementState::Idle);
}

#[test]
fn test_pole_floor_choice_commits() {
    let mut layout = MazeLayout::new();
    let mut state = PlacementState::Idle;

    let outcome =
        state.on_cell_click(Some(PlacementTool::Pole), 0, GridPos::new(3, 4), &mut layout);
    assert_eq!(outcome, PlacementOutcome::Started);
    assert!(state.is_pole_dialog_open());

    // Zellklicks warten auf die Stockwerk-Wahl
    let ignored =
        state.on_cell_click(Some(PlacementTool::Pole), 0, GridPos::new(4, 4), &mut layout);
    assert_eq!(ignored, PlacementOutcome::Ignored);

    let outcome = state.choose_pole_end_floor(2, &mut layout);
    assert_eq!(
        committed_kind(&layout, &outcome),
        (0, GridPos::new(3, 4), ElementKind::Pole { end_floor: 2 })
    );
    assert_eq!(state, PlacementState::Idle);
}

#[test]
fn test_pole_invalid_end_floor_keeps_dialog_open() {
    let mut layout = MazeLayout::new();
    let mut state = PlacementState::Idle;
    state.on_cell_click(Some(PlacementTool::Pole), 1, GridPos::new(3, 4), &mut layout);

    let outcome = state.choose_pole_end_floor(1, &mut layout);
    assert!(matches!(
        outcome,
        PlacementOutcome::Rejected(PlacementRejection::PoleEndFloorNotAbove { .. })
    ));
    assert!(state.is_pole_dialog_open());
}

#[test]
fn test_choose_end_floor_without_pending_pole_is_ignored() {
    let mut layout = MazeLayout::new();
    let mut state = PlacementState::Idle;
    assert_eq!(
        state.choose_pole_end_floor(1, &mut layout),
        PlacementOutcome::Ignored
    );
    assert!(layout.is_empty());
}

#[test]
fn test_cancel_discards_any_pending_state() {
    let mut layout = MazeLayout::new();

    for tool in [PlacementTool::Wall, PlacementTool::Stair, PlacementTool::Pole] {
        let mut state = PlacementState::Idle;
        state.on_cell_click(Some(tool), 0, GridPos::new(1, 1), &mut layout);
        assert!(state.is_pending());
        assert_eq!(state.cancel(), PlacementOutcome::Cancelled);
        assert_eq!(state, PlacementState::Idle);
    }
    assert!(layout.is_empty());

    let mut idle = PlacementState::Idle;
    assert_eq!(idle.cancel(), PlacementOutcome::Ignored);
}

#[test]
fn test_flag_commits_immediately() {
    let mut layout = MazeLayout::new();
    let mut state = PlacementState::Idle;

    let outcome =
        state.on_cell_click(Some(PlacementTool::Flag), 1, GridPos::new(20, 8), &mut layout);
    assert_eq!(
        committed_kind(&layout, &outcome),
        (1, GridPos::new(20, 8), ElementKind::Flag)
    );
    assert_eq!(state, PlacementState::Idle);
}

#[test]
fn test_no_tool_is_noop() {
    let mut layout = MazeLayout::new();
    let mut state = PlacementState::Idle;
    assert_eq!(
        state.on_cell_click(None, 0, GridPos::new(1, 1), &mut layout),
        PlacementOutcome::Ignored
    );
    assert!(layout.is_empty());
}

#[test]
fn test_inaccessible_cell_rejected() {
    let mut layout = MazeLayout::new();
    let mut state = PlacementState::Idle;

    let outcome =
        state.on_cell_click(Some(PlacementTool::Flag), 0, GridPos::new(10, 8), &mut layout);
    assert!(matches!(
        outcome,
        PlacementOutcome::Rejected(PlacementRejection::Inaccessible { floor: 0, .. })
    ));

    state.on_cell_click(Some(PlacementTool::Wall), 0, GridPos::new(2, 8), &mut layout);
    let outcome =
        state.on_cell_click(Some(PlacementTool::Wall), 0, GridPos::new(9, 8), &mut layout);
    assert!(matches!(outcome, PlacementOutcome::Rejected(_)));
    assert_eq!(state.wall_start(), Some(GridPos::new(2, 8)));
}

#[test]
fn test_occupied_cell_click_removes_even_mid_placement() {
    let mut layout = MazeLayout::with_seed_players();
    let mut state = PlacementState::Idle;

    state.on_cell_click(Some(PlacementTool::Wall), 0, GridPos::new(2, 3), &mut layout);
    // Spieler A steht auf (8, 9)
    let outcome =
        state.on_cell_click(Some(PlacementTool::Wall), 0, GridPos::new(8, 9), &mut layout);

    assert!(matches!(outcome, PlacementOutcome::Removed(ref el) if el.id.as_str() == "player-A"));
    assert_eq!(state.wall_start(), Some(GridPos::new(2, 3)));
    assert_eq!(layout.count(ElementType::Player), 2);
}

#[test]
fn test_deleted_anchor_does_not_invalidate_pending_stair() {
    let mut layout = MazeLayout::new();
    let mut state = PlacementState::Idle;

    // Flagge auf (5, 5), dann Treppen-Start daneben und Löschen der Flagge
    state.on_cell_click(Some(PlacementTool::Flag), 0, GridPos::new(5, 5), &mut layout);
    state.on_cell_click(Some(PlacementTool::Stair), 0, GridPos::new(6, 5), &mut layout);
    let removed =
        state.on_cell_click(Some(PlacementTool::Stair), 0, GridPos::new(5, 5), &mut layout);
    assert!(matches!(removed, PlacementOutcome::Removed(_)));
    assert_eq!(state.stair_start(), Some((GridPos::new(6, 5), 0)));

    let outcome =
        state.on_cell_click(Some(PlacementTool::Stair), 1, GridPos::new(6, 5), &mut layout);
    assert!(matches!(outcome, PlacementOutcome::Committed(_)));
}

#[test]
fn test_stair_end_cell_click_removes_whole_stair() {
    let mut layout = MazeLayout::new();
    let mut state = PlacementState::Idle;

    state.on_cell_click(Some(PlacementTool::Stair), 0, GridPos::new(5, 5), &mut layout);
    state.on_cell_click(Some(PlacementTool::Stair), 1, GridPos::new(3, 2), &mut layout);
    assert_eq!(layout.count(ElementType::Stair), 1);

    let outcome = state.on_cell_click(None, 1, GridPos::new(3, 2), &mut layout);
    assert!(matches!(outcome, PlacementOutcome::Removed(_)));
    assert!(layout.is_empty());
}

#[test]
fn test_wall_start_inaccessible_on_second_click_floor_rejected() {
    let mut layout = MazeLayout::new();
    let mut state = PlacementState::Idle;

    // (12, 2) ist auf Stockwerk 0 frei, auf Stockwerk 1 unzugänglich
    let first =
        state.on_cell_click(Some(PlacementTool::Wall), 0, GridPos::new(12, 2), &mut layout);
    assert_eq!(first, PlacementOutcome::Started);

    let second =
        state.on_cell_click(Some(PlacementTool::Wall), 1, GridPos::new(5, 2), &mut layout);
    assert_eq!(
        second,
        PlacementOutcome::Rejected(PlacementRejection::Inaccessible {
            floor: 1,
            pos: GridPos::new(12, 2)
        })
    );
    assert_eq!(state.wall_start(), Some(GridPos::new(12, 2)));
    assert_eq!(layout.count(ElementType::Wall), 0);

    // Zurück auf Stockwerk 0 lässt sich dieselbe Wand abschließen
    let third =
        state.on_cell_click(Some(PlacementTool::Wall), 0, GridPos::new(5, 2), &mut layout);
    assert!(matches!(third, PlacementOutcome::Committed(_)));
}
