//! Centralized application state for the VetDesk front office.
//!
//! Composes focused state components that each manage one aspect of the
//! application, so different panels can borrow them independently.

use crate::state::{PanelSettings, ReminderScrollState, ReminderSource, ReminderState};
use vetdesk::{ConfigError, Reminder, REMINDER_CARD_HEIGHT};

/// Main application state composed of focused state components.
pub struct AppState {
    /// Loaded reminders and selection
    pub reminders: ReminderState,

    /// Scroll state of the mounted reminders list
    pub scroll: ReminderScrollState,

    /// Window sizing preferences
    pub settings: PanelSettings,

    /// Draft settings edited in the settings window
    pub settings_draft: PanelSettings,

    /// Whether the settings window is open
    pub settings_open: bool,

    /// Current error message to display (if any)
    pub error_message: Option<String>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    /// Creates a new application state with default settings.
    pub fn new() -> Self {
        Self::with_settings(PanelSettings::default())
    }

    /// Creates a new AppState with settings loaded from storage.
    pub fn with_settings(settings: PanelSettings) -> Self {
        let settings = settings.sanitized();
        let scroll = mount_list(0, &settings).unwrap_or_else(|e| {
            tracing::error!(error = %e, "invalid panel settings, using defaults");
            default_list(0)
        });

        Self {
            reminders: ReminderState::new(),
            scroll,
            settings,
            settings_draft: settings,
            settings_open: false,
            error_message: None,
        }
    }

    // ===== High-Level Coordination Methods =====

    /// Replaces the reminders and remounts the list at the top.
    pub fn load_reminders(&mut self, reminders: Vec<Reminder>, source: ReminderSource) {
        self.reminders.load(reminders, source);
        self.remount_list();
        self.error_message = None;
    }

    /// Clears the loaded reminders, e.g. while a new file is loading.
    pub fn reset_reminders(&mut self) {
        self.reminders.clear();
        self.remount_list();
        self.error_message = None;
    }

    /// Applies new panel settings and remounts the list.
    pub fn apply_settings(&mut self, settings: PanelSettings) {
        self.settings = settings.sanitized();
        self.settings_draft = self.settings;
        self.remount_list();
    }

    fn remount_list(&mut self) {
        let item_count = self.reminders.len();
        self.scroll = match mount_list(item_count, &self.settings) {
            Ok(scroll) => scroll,
            Err(e) => {
                tracing::error!(error = %e, "invalid panel settings, using defaults");
                default_list(item_count)
            }
        };
        tracing::debug!(
            item_count,
            visible_count = self.settings.visible_count,
            buffer = self.settings.buffer,
            "mounted reminders list"
        );
    }
}

fn mount_list(item_count: usize, settings: &PanelSettings) -> Result<ReminderScrollState, ConfigError> {
    ReminderScrollState::new(item_count, REMINDER_CARD_HEIGHT, settings.visible_count, settings.buffer)
}

fn default_list(item_count: usize) -> ReminderScrollState {
    let defaults = PanelSettings::default();
    // Default settings always form a valid configuration
    match mount_list(item_count, &defaults) {
        Ok(scroll) => scroll,
        Err(e) => unreachable!("default panel settings rejected: {e}"),
    }
}
