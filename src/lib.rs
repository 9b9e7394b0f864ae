pub mod windowed_list;
pub mod reminder;

// Export windowed list controller
pub use windowed_list::{
    ConfigError, StepDirection, StepTarget, ViewWindow,
    WindowConfig, WindowedListController, compute_window
};

// Export reminder model and file I/O
pub use reminder::{
    Reminder, ReminderKind, ReminderGenerator, ReminderFile,
    read_reminders, write_reminders,
    REMINDER_CARD_HEIGHT, DEFAULT_VISIBLE_COUNT, DEFAULT_BUFFER, REMINDER_FILE_VERSION
};
