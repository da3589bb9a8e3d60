//! Zustandsmaschine für mehrschrittige Platzierungen.
//!
//! Zustände: `Idle`, `WallPending`, `StairPending`, `PolePendingFloorChoice`.
//! Eingaben: Zellklick, End-Stockwerk-Wahl für Stangen, Abbrechen.
//! Ein Klick auf eine belegte Zelle entfernt immer das Element dort und
//! lässt den Platzierungszustand unberührt.

mod lifecycle;
mod state;

#[cfg(test)]
mod tests;

pub use state::{PlacementOutcome, PlacementState};
