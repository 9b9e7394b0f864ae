//! Loaded reminders and where they came from.

use std::path::{Path, PathBuf};
use vetdesk::Reminder;

/// Origin of the currently loaded reminders.
#[derive(Debug, Clone, PartialEq)]
pub enum ReminderSource {
    /// Nothing loaded yet
    None,
    /// Read from a reminders file
    File(PathBuf),
    /// Generated in memory
    Sample { seed: u64 },
}

/// Reminder list state.
///
/// Responsibilities:
/// - Holding the reminder cards in display order
/// - Tracking the source for the status bar
/// - Tracking the selected card
#[derive(Debug, Clone)]
pub struct ReminderState {
    reminders: Vec<Reminder>,
    source: ReminderSource,
    selected_id: Option<u64>,
}

impl Default for ReminderState {
    fn default() -> Self {
        Self::new()
    }
}

impl ReminderState {
    pub fn new() -> Self {
        Self {
            reminders: Vec::new(),
            source: ReminderSource::None,
            selected_id: None,
        }
    }

    /// Replaces the loaded reminders and clears the selection.
    pub fn load(&mut self, reminders: Vec<Reminder>, source: ReminderSource) {
        self.reminders = reminders;
        self.source = source;
        self.selected_id = None;
    }

    pub fn clear(&mut self) {
        self.load(Vec::new(), ReminderSource::None);
    }

    pub fn reminders(&self) -> &[Reminder] {
        &self.reminders
    }

    pub fn len(&self) -> usize {
        self.reminders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.reminders.is_empty()
    }

    pub fn source(&self) -> &ReminderSource {
        &self.source
    }

    /// Path of the loaded file, if the reminders came from one.
    pub fn file_path(&self) -> Option<&Path> {
        match &self.source {
            ReminderSource::File(path) => Some(path),
            _ => None,
        }
    }

    pub fn overdue_count(&self) -> usize {
        self.reminders.iter().filter(|r| r.is_overdue()).count()
    }

    pub fn selected_id(&self) -> Option<u64> {
        self.selected_id
    }

    pub fn selected(&self) -> Option<&Reminder> {
        let id = self.selected_id?;
        self.reminders.iter().find(|r| r.id == id)
    }

    /// Selects a card, or clears the selection if it was already selected.
    pub fn toggle_selection(&mut self, id: u64) {
        self.selected_id = if self.selected_id == Some(id) { None } else { Some(id) };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vetdesk::ReminderGenerator;

    #[test]
    fn test_load_resets_selection() {
        let mut state = ReminderState::new();
        state.load(ReminderGenerator::new(1).generate(5), ReminderSource::Sample { seed: 1 });
        let id = state.reminders()[2].id;
        state.toggle_selection(id);
        assert_eq!(state.selected().map(|r| r.id), Some(id));

        state.load(ReminderGenerator::new(2).generate(5), ReminderSource::Sample { seed: 2 });
        assert_eq!(state.selected_id(), None);
    }

    #[test]
    fn test_toggle_selection_twice_clears() {
        let mut state = ReminderState::new();
        state.toggle_selection(4);
        state.toggle_selection(4);
        assert_eq!(state.selected_id(), None);
    }

    #[test]
    fn test_file_path_only_for_files() {
        let mut state = ReminderState::new();
        assert!(state.file_path().is_none());
        state.load(Vec::new(), ReminderSource::File(PathBuf::from("r.json")));
        assert_eq!(state.file_path(), Some(Path::new("r.json")));
    }
}
