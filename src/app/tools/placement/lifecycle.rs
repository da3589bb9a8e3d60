//! Übergänge der Platzierungs-Zustandsmaschine.

use super::state::{PlacementOutcome, PlacementState};
use crate::app::tools::PlacementTool;
use crate::core::validation::{
    validate_cell, validate_pole_end_floor, validate_pole_start, validate_stair_floors,
    validate_wall_segment,
};
use crate::core::{ElementType, GridPos, MazeElement, MazeLayout, PlacementRejection};

impl PlacementState {
    /// Verarbeitet einen Klick auf `pos` im aktuell angezeigten Stockwerk `floor`.
    ///
    /// Belegte Zellen haben Vorrang: das Element wird entfernt, der Zustand
    /// bleibt wie er ist (auch wenn eine laufende Platzierung darauf verweist).
    pub fn on_cell_click(
        &mut self,
        tool: Option<PlacementTool>,
        floor: u8,
        pos: GridPos,
        layout: &mut MazeLayout,
    ) -> PlacementOutcome {
        if let Some(id) = layout.find_at(floor, pos).map(|el| el.id.clone()) {
            return match layout.remove(&id) {
                Some(removed) => PlacementOutcome::Removed(removed),
                None => PlacementOutcome::Ignored,
            };
        }

        let Some(tool) = tool else {
            return PlacementOutcome::Ignored;
        };

        // Stangen-Dialog ist modal: weitere Zellklicks warten auf die Stockwerk-Wahl
        if self.is_pole_dialog_open() {
            return PlacementOutcome::Ignored;
        }

        match tool {
            PlacementTool::Pole => self.start_pole(floor, pos),
            PlacementTool::Wall => match *self {
                PlacementState::WallPending { start } => {
                    self.finish_wall(start, floor, pos, layout)
                }
                _ => self.start(PlacementState::WallPending { start: pos }, floor, pos),
            },
            PlacementTool::Stair => match *self {
                PlacementState::StairPending {
                    start,
                    floor: start_floor,
                } => self.finish_stair(start, start_floor, floor, pos, layout),
                _ => self.start(PlacementState::StairPending { start: pos, floor }, floor, pos),
            },
            PlacementTool::Flag => {
                if let Err(reason) = validate_cell(floor, pos) {
                    return PlacementOutcome::Rejected(reason);
                }
                let id = layout.next_id(ElementType::Flag);
                let committed = layout.add(MazeElement::flag(id, floor, pos));
                PlacementOutcome::Committed(committed)
            }
        }
    }

    /// Übernimmt das gewählte End-Stockwerk der wartenden Stange.
    pub fn choose_pole_end_floor(
        &mut self,
        end_floor: u8,
        layout: &mut MazeLayout,
    ) -> PlacementOutcome {
        let PlacementState::PolePendingFloorChoice { pos, floor } = *self else {
            return PlacementOutcome::Ignored;
        };

        if let Err(reason) = validate_pole_end_floor(floor, end_floor) {
            return PlacementOutcome::Rejected(reason);
        }

        let id = layout.next_id(ElementType::Pole);
        let committed = layout.add(MazeElement::pole(id, floor, pos, end_floor));
        *self = PlacementState::Idle;
        PlacementOutcome::Committed(committed)
    }

    /// Verwirft jede laufende Platzierung (inkl. offenem Stangen-Dialog).
    pub fn cancel(&mut self) -> PlacementOutcome {
        if !self.is_pending() {
            return PlacementOutcome::Ignored;
        }
        *self = PlacementState::Idle;
        PlacementOutcome::Cancelled
    }

    fn start(&mut self, next: PlacementState, floor: u8, pos: GridPos) -> PlacementOutcome {
        if let Err(reason) = validate_cell(floor, pos) {
            return PlacementOutcome::Rejected(reason);
        }
        *self = next;
        PlacementOutcome::Started
    }

    fn start_pole(&mut self, floor: u8, pos: GridPos) -> PlacementOutcome {
        if let Err(reason) = validate_pole_start(floor) {
            return PlacementOutcome::Rejected(reason);
        }
        self.start(PlacementState::PolePendingFloorChoice { pos, floor }, floor, pos)
    }

    fn finish_wall(
        &mut self,
        start: GridPos,
        floor: u8,
        end: GridPos,
        layout: &mut MazeLayout,
    ) -> PlacementOutcome {
        // Startzelle erneut prüfen: das Stockwerk kann seit dem ersten Klick gewechselt haben
        if let Err(reason) = check_all([
            validate_wall_segment(start, end),
            validate_cell(floor, start),
            validate_cell(floor, end),
        ]) {
            return PlacementOutcome::Rejected(reason);
        }

        let id = layout.next_id(ElementType::Wall);
        let committed = layout.add(MazeElement::wall(id, floor, start, end));
        *self = PlacementState::Idle;
        PlacementOutcome::Committed(committed)
    }

    fn finish_stair(
        &mut self,
        start: GridPos,
        start_floor: u8,
        end_floor: u8,
        end: GridPos,
        layout: &mut MazeLayout,
    ) -> PlacementOutcome {
        if let Err(reason) = check_all([
            validate_stair_floors(start_floor, end_floor),
            validate_cell(end_floor, end),
        ]) {
            return PlacementOutcome::Rejected(reason);
        }

        let id = layout.next_id(ElementType::Stair);
        let committed = layout.add(MazeElement::stair(id, start_floor, start, end_floor, end));
        *self = PlacementState::Idle;
        PlacementOutcome::Committed(committed)
    }
}

/// Liefert den ersten Fehler in Prüfreihenfolge.
fn check_all<const N: usize>(
    checks: [Result<(), PlacementRejection>; N],
) -> Result<(), PlacementRejection> {
    checks.into_iter().collect()
}
