//! Builder für Raster-Szenen aus dem AppState.

use crate::app::AppState;
use crate::core::validation::is_inaccessible;
use crate::core::{ElementKind, GridPos, MazeElement, MazeLayout, GRID_HEIGHT, GRID_WIDTH};
use crate::shared::{CellContent, CellStyle, CellView, GridScene};

/// Baut die Szene des aktuell angezeigten Stockwerks.
pub fn build(state: &AppState) -> GridScene {
    let floor = state.editor.current_floor;
    let placement = &state.editor.placement;
    let stair_start = placement.stair_start();
    let wall_start = placement.wall_start();

    let mut cells = Vec::with_capacity((GRID_WIDTH * GRID_HEIGHT) as usize);
    for y in 0..GRID_HEIGHT {
        for x in 0..GRID_WIDTH {
            let pos = GridPos::new(x, y);
            let occupant = state.layout.find_at(floor, pos);

            let stair_anchor_other_floor = stair_start
                .filter(|&(start, start_floor)| start == pos && start_floor != floor)
                .map(|(_, start_floor)| start_floor);
            let pending_here = wall_start == Some(pos)
                || stair_start == Some((pos, floor));

            let style = if stair_anchor_other_floor.is_some() {
                CellStyle::StairAnchorOtherFloor
            } else if pending_here {
                CellStyle::PendingAnchor
            } else if occupant.is_some() {
                CellStyle::Occupied
            } else if is_inaccessible(floor, pos) {
                CellStyle::Inaccessible
            } else {
                CellStyle::Empty
            };

            let content = match stair_anchor_other_floor {
                Some(start_floor) => Some(CellContent::StairAnchor { start_floor }),
                None => cell_content(&state.layout, floor, pos, occupant),
            };

            cells.push(CellView { content, style });
        }
    }

    GridScene {
        floor,
        width: GRID_WIDTH,
        height: GRID_HEIGHT,
        cells,
    }
}

/// Inhalt einer Zelle: Wandverläufe und Stangen vor dem Element der Zelle.
fn cell_content(
    layout: &MazeLayout,
    floor: u8,
    pos: GridPos,
    occupant: Option<&MazeElement>,
) -> Option<CellContent> {
    if layout
        .elements()
        .iter()
        .any(|el| el.floor == floor && wall_covers(el, pos))
    {
        return Some(CellContent::Wall);
    }

    let pole = layout.elements().iter().find_map(|el| match el.kind {
        ElementKind::Pole { end_floor }
            if el.pos == pos && el.floor <= floor && floor <= end_floor =>
        {
            Some(end_floor)
        }
        _ => None,
    });
    if let Some(end_floor) = pole {
        return Some(CellContent::Pole { end_floor });
    }

    let element = occupant?;
    match element.kind {
        ElementKind::Stair { end_floor, .. } => {
            if element.floor == floor && element.pos == pos {
                Some(CellContent::StairStart { end_floor })
            } else {
                Some(CellContent::StairEnd {
                    start_floor: element.floor,
                })
            }
        }
        ElementKind::Pole { end_floor } => Some(CellContent::Pole { end_floor }),
        ElementKind::Wall { .. } => Some(CellContent::Wall),
        ElementKind::Flag => Some(CellContent::Flag),
        ElementKind::Player { player_type } => Some(CellContent::Player(player_type)),
    }
}

/// Prüft, ob die Zelle auf dem (waagerechten oder senkrechten) Wandsegment liegt.
fn wall_covers(element: &MazeElement, pos: GridPos) -> bool {
    let ElementKind::Wall { end } = element.kind else {
        return false;
    };
    let start = element.pos;
    let horizontal = start.y == pos.y
        && end.y == pos.y
        && pos.x >= start.x.min(end.x)
        && pos.x <= start.x.max(end.x);
    let vertical = start.x == pos.x
        && end.x == pos.x
        && pos.y >= start.y.min(end.y)
        && pos.y <= start.y.max(end.y);
    horizontal || vertical
}
