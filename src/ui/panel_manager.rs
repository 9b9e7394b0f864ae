//! Panel orchestration and layout management.
//!
//! Coordinates the header, status bar, settings window and reminders panel.

use crate::app::AppState;
use crate::io::AsyncLoader;
use crate::state::PanelSettings;
use crate::ui::{header, reminders_panel, settings_window, status_bar};
use std::path::PathBuf;

/// Result of panel interactions that need to be handled by the application coordinator.
pub enum PanelInteraction {
    /// User requested to open a reminders file
    OpenFileRequested(PathBuf),
    /// User requested sample reminders
    SampleRemindersRequested { seed: u64 },
    /// User applied new panel settings
    SettingsApplied(PanelSettings),
    /// A reminder card was clicked
    CardClicked { reminder_id: u64 },
}

/// Manages the layout and rendering of all UI panels.
pub struct PanelManager;

impl PanelManager {
    /// Renders all panels in the application window.
    ///
    /// Called from the eframe::App::update() implementation.
    pub fn render_all_panels(
        ctx: &egui::Context,
        state: &mut AppState,
        loader: &AsyncLoader,
    ) -> Option<PanelInteraction> {
        let mut interaction: Option<PanelInteraction> = None;

        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            if let Some(header_interaction) = header::render_header(ui, state) {
                interaction = Some(match header_interaction {
                    header::HeaderInteraction::OpenFileRequested(path) => {
                        PanelInteraction::OpenFileRequested(path)
                    }
                    header::HeaderInteraction::SampleRemindersRequested { seed } => {
                        PanelInteraction::SampleRemindersRequested { seed }
                    }
                });
            }
        });

        egui::TopBottomPanel::bottom("status_panel").show(ctx, |ui| {
            status_bar::render_status_bar(ui, state);
        });

        if let Some(settings_window::SettingsApplied(settings)) =
            settings_window::render_settings_window(ctx, state)
        {
            interaction = Some(PanelInteraction::SettingsApplied(settings));
        }

        let reminders_frame = egui::Frame::default()
            .inner_margin(egui::Margin::same(8))
            .fill(ctx.style().visuals.panel_fill);

        egui::CentralPanel::default()
            .frame(reminders_frame)
            .show(ctx, |ui| {
                ui.heading("Reminders");
                ui.separator();

                if let Some(reminders_panel::RemindersPanelInteraction::CardClicked { reminder_id }) =
                    reminders_panel::render_reminders_panel(ui, state, loader)
                {
                    interaction = Some(PanelInteraction::CardClicked { reminder_id });
                }
            });

        interaction
    }
}
