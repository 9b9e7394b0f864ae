//! Status bar UI rendering
//!
//! Shows memory usage, where the reminders came from, and which cards the
//! windowed list is currently laying out.

use eframe::egui;
use egui::RichText;
use crate::app::AppState;
use crate::state::ReminderSource;
use crate::utils::{format_memory_mb, format_window_summary, get_current_memory_mb};

/// Renders the status panel at the bottom of the window
pub fn render_status_bar(ui: &mut egui::Ui, state: &AppState) {
    ui.horizontal(|ui| {
        let memory_text = format_memory_mb(get_current_memory_mb());
        ui.label(RichText::new(&memory_text).strong());
        ui.label(RichText::new("|").strong());

        let source = match state.reminders.source() {
            ReminderSource::None => {
                ui.label(RichText::new("No reminders loaded").strong());
                return;
            }
            ReminderSource::File(path) => path
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_else(|| path.display().to_string()),
            ReminderSource::Sample { seed } => format!("Sample (seed {})", seed),
        };

        let source_label = ui.label(RichText::new(format!(
            "{} | Reminders: {} | Overdue: {}",
            source,
            state.reminders.len(),
            state.reminders.overdue_count()
        )).strong());
        if let Some(path) = state.reminders.file_path() {
            source_label.on_hover_text(path.display().to_string());
        }

        ui.label(RichText::new("|").strong());
        ui.label(format!(
            "{} | Offset: {:.0}px",
            format_window_summary(&state.scroll.window(), state.reminders.len()),
            state.scroll.offset()
        ));

        if let Some(reminder) = state.reminders.selected() {
            ui.label(RichText::new("|").strong());
            ui.label(RichText::new(format!(
                "Selected: {} - {}",
                reminder.patient_name,
                reminder.kind.label()
            )).color(ui.visuals().hyperlink_color));
        }
    });
}
