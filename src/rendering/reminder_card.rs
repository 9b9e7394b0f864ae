//! Reminder card rendering.
//!
//! Every card occupies exactly one item step of vertical space so the
//! padding computed by the windowed list lines up with what was skipped.

use eframe::egui;
use vetdesk::Reminder;

use crate::rendering::text_utils::truncate_text_to_fit;

/// Gap between the allocated slot and the painted card.
const CARD_MARGIN: f32 = 6.0;
const CARD_PADDING: f32 = 12.0;
const CARD_ROUNDING: f32 = 8.0;

/// Result of user interaction with a reminder card
pub enum ReminderCardInteraction {
    /// Card was clicked
    Clicked { reminder_id: u64 },
}

/// Renders one reminder card at a fixed height.
///
/// # Arguments
/// * `ui` - The egui UI context for drawing
/// * `reminder` - The reminder to show
/// * `height` - Slot height, equal to the list's item step
/// * `is_selected` - Whether the card is currently selected
pub fn render_reminder_card(
    ui: &mut egui::Ui,
    reminder: &Reminder,
    height: f32,
    is_selected: bool,
) -> Option<ReminderCardInteraction> {
    let (slot_rect, response) = ui.allocate_exact_size(
        egui::vec2(ui.available_width(), height),
        egui::Sense::click(),
    );

    if !ui.is_rect_visible(slot_rect) {
        return None;
    }

    let visuals = ui.visuals().clone();
    let card_rect = slot_rect.shrink(CARD_MARGIN);
    let painter = ui.painter();

    let fill = if is_selected {
        visuals.selection.bg_fill
    } else if response.hovered() {
        visuals.widgets.hovered.weak_bg_fill
    } else {
        visuals.faint_bg_color
    };
    let stroke_color = if reminder.is_overdue() {
        visuals.error_fg_color
    } else {
        visuals.widgets.noninteractive.bg_stroke.color
    };

    painter.rect_filled(card_rect, CARD_ROUNDING, fill);
    painter.rect_stroke(
        card_rect,
        CARD_ROUNDING,
        egui::Stroke::new(1.0, stroke_color),
        egui::StrokeKind::Inside,
    );

    let content = card_rect.shrink(CARD_PADDING);
    let text_color = visuals.text_color();
    let weak_color = visuals.weak_text_color();

    // Due label, right-aligned on the title line
    let due_font = egui::FontId::proportional(13.0);
    let due_color = if reminder.is_overdue() {
        visuals.error_fg_color
    } else if reminder.due_in_days <= 7 {
        visuals.warn_fg_color
    } else {
        weak_color
    };
    let due_rect = painter.text(
        content.right_top(),
        egui::Align2::RIGHT_TOP,
        reminder.due_label(),
        due_font,
        due_color,
    );

    let title_font = egui::FontId::proportional(17.0);
    let title = format!("{} ({})", reminder.patient_name, reminder.species);
    let title_width = (due_rect.left() - content.left() - CARD_PADDING).max(0.0);
    painter.text(
        content.left_top(),
        egui::Align2::LEFT_TOP,
        truncate_text_to_fit(&title, title_width, &title_font, painter),
        title_font,
        text_color,
    );

    let body_font = egui::FontId::proportional(14.0);
    let line_height = 22.0;
    let mut y = content.top() + 28.0;

    painter.text(
        egui::pos2(content.left(), y),
        egui::Align2::LEFT_TOP,
        reminder.kind.label(),
        body_font.clone(),
        text_color,
    );
    y += line_height;

    let owner_line = format!("Owner: {}", reminder.owner_name);
    painter.text(
        egui::pos2(content.left(), y),
        egui::Align2::LEFT_TOP,
        truncate_text_to_fit(&owner_line, content.width(), &body_font, painter),
        body_font.clone(),
        weak_color,
    );
    y += line_height;

    if !reminder.note.is_empty() && y + line_height <= content.bottom() + CARD_PADDING {
        painter.text(
            egui::pos2(content.left(), y),
            egui::Align2::LEFT_TOP,
            truncate_text_to_fit(&reminder.note, content.width(), &body_font, painter),
            body_font,
            weak_color,
        );
    }

    if response.clicked() {
        Some(ReminderCardInteraction::Clicked {
            reminder_id: reminder.id,
        })
    } else {
        None
    }
}
