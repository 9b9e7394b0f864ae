//! Application-level coordination and workflow management.
//!
//! Handles reminders loading, settings changes and card selection on behalf
//! of the panels.

use crate::app::AppState;
use crate::io::{AsyncLoader, LoadResult};
use crate::state::{PanelSettings, ReminderSource};
use std::path::PathBuf;

/// Number of reminders produced by "Sample Reminders".
pub const SAMPLE_REMINDER_COUNT: usize = 250;

/// Coordinates application-level operations and workflows.
pub struct ApplicationCoordinator;

impl ApplicationCoordinator {
    /// Initiates asynchronous reminders file loading.
    ///
    /// Immediately clears the current list so the loading indicator shows.
    pub fn open_file(
        state: &mut AppState,
        loader: &mut AsyncLoader,
        path: PathBuf,
        ctx: &egui::Context,
    ) {
        state.reset_reminders();
        loader.start_file_load(path, ctx);
    }

    /// Checks for loading completion and applies results to application state.
    ///
    /// Called once per frame in the update loop.
    /// Returns true if a load operation completed (success or error).
    pub fn check_loading_completion(state: &mut AppState, loader: &mut AsyncLoader) -> bool {
        match loader.check_completion() {
            LoadResult::Success { reminders, path } => {
                tracing::info!(count = reminders.len(), path = %path.display(), "reminders loaded");
                state.load_reminders(reminders, ReminderSource::File(path));
                true
            }
            LoadResult::Error(error_msg) => {
                tracing::error!(error = %error_msg, "failed to load reminders");
                state.reset_reminders();
                state.error_message = Some(format!("Error loading reminders: {}", error_msg));
                true
            }
            LoadResult::None => false,
        }
    }

    /// Generates sample reminders in memory and shows them.
    pub fn open_sample_reminders(state: &mut AppState, loader: &AsyncLoader, seed: u64) {
        let reminders = loader.generate_sample(seed, SAMPLE_REMINDER_COUNT);
        tracing::info!(count = reminders.len(), seed, "generated sample reminders");
        state.load_reminders(reminders, ReminderSource::Sample { seed });
    }

    /// Applies settings edited in the settings window.
    pub fn apply_settings(state: &mut AppState, settings: PanelSettings) {
        if settings.sanitized() == state.settings {
            return;
        }
        tracing::info!(
            visible_count = settings.visible_count,
            buffer = settings.buffer,
            "panel settings changed"
        );
        state.apply_settings(settings);
    }

    /// Handles a click on a reminder card.
    pub fn handle_card_click(state: &mut AppState, reminder_id: u64) {
        state.reminders.toggle_selection(reminder_id);
    }
}
