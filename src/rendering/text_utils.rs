//! Text measurement helpers for card rendering.

use eframe::egui;

const ELLIPSIS: &str = "…";

fn text_width(text: &str, font_id: &egui::FontId, painter: &egui::Painter) -> f32 {
    painter
        .layout_no_wrap(text.to_string(), font_id.clone(), egui::Color32::WHITE)
        .size()
        .x
}

/// Truncates text to fit within `max_width`, appending an ellipsis if cut.
///
/// Returns an empty string when not even the ellipsis fits.
pub fn truncate_text_to_fit(
    text: &str,
    max_width: f32,
    font_id: &egui::FontId,
    painter: &egui::Painter,
) -> String {
    if max_width <= 0.0 {
        return String::new();
    }
    if text_width(text, font_id, painter) <= max_width {
        return text.to_string();
    }

    let available = max_width - text_width(ELLIPSIS, font_id, painter);
    if available <= 0.0 {
        return String::new();
    }

    // Largest prefix length (in chars) that fits: binary search over [0, len)
    let chars: Vec<char> = text.chars().collect();
    let (mut low, mut high) = (0usize, chars.len());
    while low < high {
        let mid = (low + high + 1) / 2;
        let prefix: String = chars[..mid].iter().collect();
        if text_width(&prefix, font_id, painter) <= available {
            low = mid;
        } else {
            high = mid - 1;
        }
    }

    let mut result: String = chars[..low].iter().collect();
    result.push_str(ELLIPSIS);
    result
}
