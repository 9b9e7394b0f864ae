//! UI panel rendering subsystem
//!
//! - Header panel (reminders file controls, settings toggle)
//! - Reminders panel (windowed, snap-scrolled card list)
//! - Settings window (window sizing preferences)
//! - Status bar (memory, source, current window)
//! - Panel manager (panel orchestration and layout)

pub mod header;
pub mod reminders_panel;
pub mod settings_window;
pub mod status_bar;
pub mod panel_manager;
