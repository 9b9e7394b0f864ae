//! Reminders panel settings window.

use crate::app::AppState;
use crate::state::{PanelSettings, MAX_BUFFER, MAX_VISIBLE_COUNT, MIN_BUFFER};

/// Settings the user confirmed with "Apply".
pub struct SettingsApplied(pub PanelSettings);

/// Renders the settings window while it is open.
pub fn render_settings_window(ctx: &egui::Context, state: &mut AppState) -> Option<SettingsApplied> {
    if !state.settings_open {
        return None;
    }

    let mut open = state.settings_open;
    let mut applied = None;

    egui::Window::new("Reminders panel")
        .open(&mut open)
        .resizable(false)
        .collapsible(false)
        .show(ctx, |ui| {
            egui::Grid::new("panel_settings_grid")
                .num_columns(2)
                .spacing([12.0, 6.0])
                .show(ui, |ui| {
                    ui.label("Visible cards");
                    ui.add(egui::DragValue::new(&mut state.settings_draft.visible_count)
                        .range(1..=MAX_VISIBLE_COUNT));
                    ui.end_row();

                    ui.label("Buffer cards");
                    ui.add(egui::DragValue::new(&mut state.settings_draft.buffer)
                        .range(MIN_BUFFER..=MAX_BUFFER));
                    ui.end_row();
                });

            ui.label(format!(
                "At most {} cards are laid out at a time.",
                state.settings_draft.visible_count + 2 * state.settings_draft.buffer
            ));

            ui.separator();
            ui.horizontal(|ui| {
                if ui.button("Apply").clicked() {
                    applied = Some(SettingsApplied(state.settings_draft));
                }
                if ui.button("Defaults").clicked() {
                    state.settings_draft = PanelSettings::default();
                }
            });
        });

    state.settings_open = open;
    applied
}
