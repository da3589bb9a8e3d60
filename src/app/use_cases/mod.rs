//! Use-Cases der Anwendung (mutierende Abläufe auf dem AppState).

pub mod export;
pub mod placement;
