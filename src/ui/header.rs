//! Header panel UI rendering
//!
//! Handles the top bar with reminders file controls and the settings toggle.

use eframe::egui;
use std::path::PathBuf;
use crate::app::AppState;

/// Result of user interaction with the header panel
pub enum HeaderInteraction {
    /// User picked a reminders file to open
    OpenFileRequested(PathBuf),
    /// User asked for freshly generated sample reminders
    SampleRemindersRequested { seed: u64 },
}

/// Renders the application header.
///
/// # Arguments
/// * `ui` - The egui UI context for drawing
/// * `state` - Mutable reference to application state
pub fn render_header(ui: &mut egui::Ui, state: &mut AppState) -> Option<HeaderInteraction> {
    let mut interaction = None;

    ui.horizontal(|ui| {
        ui.heading("VetDesk");
        ui.separator();

        if ui.button("📂 Open Reminders").clicked() {
            let mut dialog = rfd::FileDialog::new()
                .add_filter("Reminders", &["json"]);

            if let Ok(cwd) = std::env::current_dir() {
                dialog = dialog.set_directory(cwd);
            }

            if let Some(path) = dialog.pick_file() {
                interaction = Some(HeaderInteraction::OpenFileRequested(path));
            }
        }

        if ui.button("🐾 Sample Reminders").clicked() {
            interaction = Some(HeaderInteraction::SampleRemindersRequested {
                seed: rand::random(),
            });
        }

        ui.separator();

        if ui.selectable_label(state.settings_open, "⚙ Settings").clicked() {
            state.settings_open = !state.settings_open;
            state.settings_draft = state.settings;
        }
    });

    interaction
}
