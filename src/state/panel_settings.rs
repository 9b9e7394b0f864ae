//! Persisted reminders panel preferences.

use serde::{Deserialize, Serialize};
use vetdesk::{DEFAULT_BUFFER, DEFAULT_VISIBLE_COUNT};

/// Largest accepted visible card count.
pub const MAX_VISIBLE_COUNT: usize = 12;

/// Smallest accepted buffer size. The panel viewport is exactly
/// `visible_count` cards tall, so a mid-card offset needs one card of
/// buffer below the visible band to stay covered.
pub const MIN_BUFFER: usize = 1;

/// Largest accepted buffer size.
pub const MAX_BUFFER: usize = 10;

/// Window sizing preferences for the reminders panel.
///
/// Changing these remounts the list, since window configuration is fixed
/// for the life of a mounted list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PanelSettings {
    /// Number of fully visible cards
    pub visible_count: usize,
    /// Cards rendered above/below the visible band
    pub buffer: usize,
}

impl Default for PanelSettings {
    fn default() -> Self {
        Self {
            visible_count: DEFAULT_VISIBLE_COUNT,
            buffer: DEFAULT_BUFFER,
        }
    }
}

impl PanelSettings {
    /// Clamps values loaded from storage or typed by the user into the
    /// supported range.
    pub fn sanitized(self) -> Self {
        Self {
            visible_count: self.visible_count.clamp(1, MAX_VISIBLE_COUNT),
            buffer: self.buffer.clamp(MIN_BUFFER, MAX_BUFFER),
        }
    }
}
