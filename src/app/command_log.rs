//! Verlauf der ausgeführten Commands einer Editor-Sitzung.
//!
//! Jeder Eintrag merkt sich das zum Ausführungszeitpunkt angezeigte
//! Stockwerk, damit sich Platzierungs-Abläufe über Stockwerkswechsel
//! hinweg nachvollziehen lassen (Diagnose und Tests).

use std::collections::VecDeque;

use super::AppCommand;

/// Ein geloggter Command mit dem Stockwerk, auf dem er ausgeführt wurde.
#[derive(Debug, Clone)]
pub struct LoggedCommand {
    pub floor: u8,
    pub command: AppCommand,
}

impl LoggedCommand {
    /// `true` für Commands, die das Layout verändern können.
    pub fn touches_layout(&self) -> bool {
        matches!(
            self.command,
            AppCommand::ClickCell { .. }
                | AppCommand::ChoosePoleEndFloor { .. }
                | AppCommand::ResetLayout
        )
    }
}

/// Ringpuffer der letzten ausgeführten Commands.
#[derive(Debug)]
pub struct CommandLog {
    entries: VecDeque<LoggedCommand>,
    capacity: usize,
}

impl Default for CommandLog {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandLog {
    /// Standard-Kapazität, reicht für eine längere Bearbeitungssitzung.
    pub const DEFAULT_CAPACITY: usize = 512;

    pub fn new() -> Self {
        Self::with_capacity(Self::DEFAULT_CAPACITY)
    }

    /// Erstellt ein Log mit eigener Kapazität (mindestens 1).
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Hängt einen Command an; bei voller Kapazität fällt der älteste heraus.
    pub fn record(&mut self, floor: u8, command: &AppCommand) {
        if self.entries.len() == self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(LoggedCommand {
            floor,
            command: command.clone(),
        });
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Commands in Ausführungsreihenfolge.
    pub fn entries(&self) -> impl DoubleEndedIterator<Item = &AppCommand> + '_ {
        self.entries.iter().map(|entry| &entry.command)
    }

    /// Zuletzt ausgeführter Command samt Stockwerk.
    pub fn last(&self) -> Option<&LoggedCommand> {
        self.entries.back()
    }

    /// Nur die layoutverändernden Commands, in Reihenfolge.
    pub fn layout_commands(&self) -> impl Iterator<Item = &LoggedCommand> + '_ {
        self.entries.iter().filter(|entry| entry.touches_layout())
    }

    /// Zellklicks, die auf `floor` ausgeführt wurden.
    pub fn clicks_on_floor(&self, floor: u8) -> usize {
        self.entries
            .iter()
            .filter(|entry| entry.floor == floor && matches!(entry.command, AppCommand::ClickCell { .. }))
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::GridPos;

    #[test]
    fn full_log_evicts_oldest_entry() {
        let mut log = CommandLog::with_capacity(3);
        log.record(0, &AppCommand::CancelPlacement);
        log.record(0, &AppCommand::SetFloor { floor: 1 });
        log.record(1, &AppCommand::ClickCell { pos: GridPos::new(2, 3) });
        log.record(1, &AppCommand::RequestExit);

        assert_eq!(log.len(), 3);
        assert!(matches!(log.entries().next(), Some(AppCommand::SetFloor { floor: 1 })));
        assert!(matches!(log.entries().next_back(), Some(AppCommand::RequestExit)));
    }

    #[test]
    fn layout_commands_keep_their_floor() {
        let mut log = CommandLog::new();
        log.record(0, &AppCommand::ClickCell { pos: GridPos::new(12, 2) });
        log.record(0, &AppCommand::SetFloor { floor: 1 });
        log.record(1, &AppCommand::ClickCell { pos: GridPos::new(5, 2) });
        log.record(1, &AppCommand::ChoosePoleEndFloor { end_floor: 2 });
        log.record(1, &AppCommand::ClearStatusMessage);

        let floors: Vec<u8> = log.layout_commands().map(|entry| entry.floor).collect();
        assert_eq!(floors, vec![0, 1, 1]);
        assert_eq!(log.clicks_on_floor(0), 1);
        assert_eq!(log.clicks_on_floor(1), 1);
        assert_eq!(log.clicks_on_floor(2), 0);
        assert!(matches!(
            log.last(),
            Some(LoggedCommand {
                floor: 1,
                command: AppCommand::ClearStatusMessage
            })
        ));
    }

    #[test]
    fn zero_capacity_is_raised_to_one() {
        let mut log = CommandLog::with_capacity(0);
        log.record(2, &AppCommand::ResetLayout);
        log.record(2, &AppCommand::RequestExit);
        assert_eq!(log.len(), 1);
        assert!(log.last().is_some_and(|entry| !entry.touches_layout()));
    }
}
