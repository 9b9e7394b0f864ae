//! State management modules for the VetDesk front office.
//!
//! This module contains state-only logic (no UI concerns):
//! - Reminder state (loaded cards, source, selection)
//! - Scroll state (windowed list controller and snap animation)
//! - Panel settings (persisted window sizing)

mod reminder_state;
mod scroll_state;
mod panel_settings;

pub use reminder_state::{ReminderState, ReminderSource};
pub use scroll_state::ReminderScrollState;
pub use panel_settings::{PanelSettings, MAX_BUFFER, MAX_VISIBLE_COUNT, MIN_BUFFER};
