//! Reminders panel UI rendering
//!
//! Hosts the windowed reminders list. Only the cards in the current window
//! are laid out; padding above and below stands in for the rest so the
//! scrollbar reflects the full list. Mouse wheel input is taken away from the
//! scroll area and turned into item-snapped steps.

use crate::app::AppState;
use crate::io::AsyncLoader;
use crate::rendering::reminder_card::{self, ReminderCardInteraction};
use egui::ScrollArea;
use vetdesk::{compute_window, StepDirection, ViewWindow, WindowConfig, REMINDER_CARD_HEIGHT};

/// Result of reminders panel interactions that need to be handled by the application.
pub enum RemindersPanelInteraction {
    /// A reminder card was clicked
    CardClicked { reminder_id: u64 },
}

/// Renders the reminders list with snap-scrolling.
pub fn render_reminders_panel(
    ui: &mut egui::Ui,
    state: &mut AppState,
    loader: &AsyncLoader,
) -> Option<RemindersPanelInteraction> {
    if loader.is_loading() {
        ui.horizontal(|ui| {
            ui.spinner();
            ui.label("Loading reminders...");
        });
        return None;
    }

    if let Some(error) = &state.error_message {
        ui.colored_label(ui.visuals().error_fg_color, error);
        ui.separator();
    }

    if state.reminders.is_empty() {
        ui.label("No reminders loaded. Open a reminders file or generate sample reminders.");
        return None;
    }

    let wheel_direction = take_wheel_step(ui);
    let frame = render_window(ui, state);
    tracing::trace!(
        start = frame.window.start_index,
        end = frame.window.end_index,
        offset = frame.offset,
        viewport = frame.viewport_height,
        "reminders window"
    );

    if let Some(direction) = wheel_direction {
        let target = state.scroll.wheel_step(direction, frame.max_scroll_offset);
        tracing::trace!(?direction, target = target.target_offset, "wheel step");
    }

    if state.scroll.is_animating() {
        ui.ctx().request_repaint();
    }

    frame
        .clicked
        .map(|reminder_id| RemindersPanelInteraction::CardClicked { reminder_id })
}

/// What one frame of the list laid out, in content coordinates.
struct WindowFrame {
    window: ViewWindow,
    offset: f32,
    viewport_height: f32,
    max_scroll_offset: f32,
    clicked: Option<u64>,
}

/// Height of the scroll viewport: exactly `visible_count` cards.
fn viewport_height(config: &WindowConfig) -> f32 {
    config.visible_count() as f32 * config.step()
}

/// Lays out padding plus the window slice and commits the reached offset.
fn render_window(ui: &mut egui::Ui, state: &mut AppState) -> WindowFrame {
    let config = *state.scroll.controller().config();

    // Lay out for the offset the scroll area will be forced to, if animating
    let commanded_offset = state.scroll.begin_frame();
    let window = match commanded_offset {
        Some(offset) => compute_window(&config, offset),
        None => state.scroll.window(),
    };

    let height = viewport_height(&config);
    let mut scroll_area = ScrollArea::vertical()
        .id_salt("reminders_scroll_area")
        .auto_shrink([false, false])
        .max_height(height)
        .min_scrolled_height(height);
    if let Some(offset) = commanded_offset {
        scroll_area = scroll_area.vertical_scroll_offset(offset);
    }

    let reminders = state.reminders.reminders();
    let selected_id = state.reminders.selected_id();

    let output = scroll_area.show(ui, |ui| {
        // Cards must stack with no gaps to match the padding math
        ui.spacing_mut().item_spacing.y = 0.0;

        if window.top_padding > 0.0 {
            ui.add_space(window.top_padding);
        }

        let mut clicked = None;
        for reminder in reminders.get(window.range()).unwrap_or(&[]) {
            let is_selected = selected_id == Some(reminder.id);
            if let Some(ReminderCardInteraction::Clicked { reminder_id }) =
                reminder_card::render_reminder_card(ui, reminder, REMINDER_CARD_HEIGHT, is_selected)
            {
                clicked = Some(reminder_id);
            }
        }

        if window.bottom_padding > 0.0 {
            ui.add_space(window.bottom_padding);
        }

        clicked
    });

    let offset = output.state.offset.y;
    state.scroll.observe_offset(offset);

    WindowFrame {
        window,
        offset,
        viewport_height: output.inner_rect.height(),
        max_scroll_offset: (output.content_size.y - output.inner_rect.height()).max(0.0),
        clicked: output.inner,
    }
}

/// Consumes vertical wheel input over the panel and maps it to one step.
///
/// The smoothed delta is cleared every hovered frame so the scroll area never
/// applies wheel motion of its own; only the raw per-event delta counts.
fn take_wheel_step(ui: &mut egui::Ui) -> Option<StepDirection> {
    if !ui.rect_contains_pointer(ui.max_rect()) {
        return None;
    }
    ui.input_mut(|input| {
        let delta_y = input.raw_scroll_delta.y;
        input.raw_scroll_delta.y = 0.0;
        input.smooth_scroll_delta.y = 0.0;
        StepDirection::from_wheel_delta(delta_y)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{PanelSettings, ReminderSource};
    use vetdesk::ReminderGenerator;

    fn loaded_state(count: usize, settings: PanelSettings) -> AppState {
        let mut state = AppState::with_settings(settings);
        state.load_reminders(ReminderGenerator::default().generate(count), ReminderSource::Sample { seed: 42 });
        state
    }

    /// Runs one headless frame in a window much taller than the list.
    fn run_frame(ctx: &egui::Context, state: &mut AppState) -> WindowFrame {
        let input = egui::RawInput {
            screen_rect: Some(egui::Rect::from_min_size(egui::Pos2::ZERO, egui::vec2(520.0, 900.0))),
            ..Default::default()
        };
        let mut frame = None;
        let _ = ctx.run(input, |ctx| {
            egui::CentralPanel::default().show(ctx, |ui| {
                frame = Some(render_window(ui, state));
            });
        });
        frame.expect("central panel did not run")
    }

    fn assert_viewport_covered(frame: &WindowFrame, item_count: usize) {
        if frame.window.end_index < item_count {
            let rendered_bottom = frame.window.end_index as f32 * REMINDER_CARD_HEIGHT;
            let viewport_bottom = frame.offset + frame.viewport_height;
            assert!(
                viewport_bottom <= rendered_bottom + 0.5,
                "blank band below last card at offset {}: viewport ends at {}, cards end at {}",
                frame.offset,
                viewport_bottom,
                rendered_bottom
            );
        }
    }

    #[test]
    fn test_viewport_height_is_visible_cards() {
        let config = WindowConfig::new(50, REMINDER_CARD_HEIGHT, 3, 1).unwrap();
        assert_eq!(viewport_height(&config), 396.0);
    }

    #[test]
    fn test_window_covers_viewport_at_every_offset() {
        for &(visible, buffer) in &[(1usize, 1usize), (3, 1), (4, 2), (12, 1)] {
            let config = WindowConfig::new(40, REMINDER_CARD_HEIGHT, visible, buffer).unwrap();
            let viewport = viewport_height(&config);
            let max = (config.content_height() - viewport).max(0.0);
            let mut offset = 0.0;
            while offset <= max {
                let window = compute_window(&config, offset);
                if window.end_index < config.item_count() {
                    assert!(
                        offset + viewport <= window.end_index as f32 * config.step(),
                        "visible {} buffer {} offset {}",
                        visible,
                        buffer,
                        offset
                    );
                }
                offset += 17.3;
            }
        }
    }

    #[test]
    fn test_panel_viewport_is_bounded_to_visible_cards() {
        let ctx = egui::Context::default();
        let mut state = loaded_state(50, PanelSettings::default());

        let frame = run_frame(&ctx, &mut state);
        assert!((frame.viewport_height - 396.0).abs() < 0.5);
        assert_eq!(frame.window.range(), 0..4);
        assert_viewport_covered(&frame, 50);
    }

    #[test]
    fn test_animated_step_keeps_viewport_covered() {
        let ctx = egui::Context::default();
        let mut state = loaded_state(50, PanelSettings::default());
        let first = run_frame(&ctx, &mut state);

        state.scroll.wheel_step(StepDirection::Forward, first.max_scroll_offset);
        let mut frames = 0;
        while state.scroll.is_animating() {
            let frame = run_frame(&ctx, &mut state);
            assert_viewport_covered(&frame, 50);
            frames += 1;
            assert!(frames < 100, "animation did not settle");
        }
        assert_eq!(state.scroll.offset(), REMINDER_CARD_HEIGHT);
    }
}
