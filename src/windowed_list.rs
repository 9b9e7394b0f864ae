//! Windowed list rendering with snap-scroll synchronization.
//!
//! The controller turns a scroll offset into a bounded render window so a
//! host view only lays out `visible_count + 2 * buffer` items no matter how
//! long the list is. It also proposes item-aligned targets for discrete wheel
//! steps. Proposing a target and committing an offset are separate calls: the
//! host animates toward the target and reports the offsets it actually reaches
//! through [`WindowedListController::set_offset`].
//!
//! # Examples
//! ```
//! use vetdesk::{StepDirection, WindowConfig, WindowedListController};
//!
//! let config = WindowConfig::new(6, 132.0, 3, 1).unwrap();
//! let mut controller = WindowedListController::new(config);
//!
//! let window = controller.set_offset(264.0);
//! assert_eq!(window.range(), 1..6);
//! assert_eq!(window.top_padding, 132.0);
//!
//! controller.set_offset(50.0);
//! let target = controller.step_by(StepDirection::Forward, 396.0);
//! assert_eq!(target.target_offset, 132.0);
//! ```

use std::ops::Range;
use thiserror::Error;

/// Rejected window configuration.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// Item height must be a finite, strictly positive number
    #[error("item step must be finite and greater than zero, got {0}")]
    InvalidStep(f32),

    /// At least one item must be fully visible
    #[error("visible item count must be at least 1")]
    ZeroVisibleCount,
}

/// Construction-time configuration of a windowed list.
///
/// Counts are unsigned, so a negative item count or buffer cannot be expressed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WindowConfig {
    item_count: usize,
    step: f32,
    visible_count: usize,
    buffer: usize,
}

impl WindowConfig {
    /// Validates and builds a configuration.
    ///
    /// # Arguments
    /// * `item_count` - Total number of items in the list
    /// * `step` - Uniform rendered height of one item, in pixels
    /// * `visible_count` - Number of fully visible items
    /// * `buffer` - Extra items rendered above and below the visible band
    pub fn new(
        item_count: usize,
        step: f32,
        visible_count: usize,
        buffer: usize,
    ) -> Result<Self, ConfigError> {
        if !step.is_finite() || step <= 0.0 {
            return Err(ConfigError::InvalidStep(step));
        }
        if visible_count == 0 {
            return Err(ConfigError::ZeroVisibleCount);
        }
        Ok(Self {
            item_count,
            step,
            visible_count,
            buffer,
        })
    }

    pub fn item_count(&self) -> usize {
        self.item_count
    }

    pub fn step(&self) -> f32 {
        self.step
    }

    pub fn visible_count(&self) -> usize {
        self.visible_count
    }

    pub fn buffer(&self) -> usize {
        self.buffer
    }

    /// Upper bound on the number of items a window can hold.
    pub fn max_window_len(&self) -> usize {
        self.visible_count + 2 * self.buffer
    }

    /// Total scrollable height of the full list.
    pub fn content_height(&self) -> f32 {
        self.item_count as f32 * self.step
    }
}

/// The contiguous slice of items to render, with the space standing in for
/// everything before and after it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewWindow {
    /// First rendered item (inclusive)
    pub start_index: usize,
    /// One past the last rendered item
    pub end_index: usize,
    /// Space reserved for the items before `start_index`
    pub top_padding: f32,
    /// Space reserved for the items from `end_index` to the end of the list
    pub bottom_padding: f32,
}

impl ViewWindow {
    /// Index range suitable for slicing the item list.
    pub fn range(&self) -> Range<usize> {
        self.start_index..self.end_index
    }

    /// Number of rendered items.
    pub fn len(&self) -> usize {
        self.end_index - self.start_index
    }

    pub fn is_empty(&self) -> bool {
        self.start_index == self.end_index
    }
}

/// Direction of one discrete wheel step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepDirection {
    /// Toward the start of the list (offset decreases)
    Backward,
    /// Toward the end of the list (offset increases)
    Forward,
}

impl StepDirection {
    /// Maps a vertical wheel delta to a step direction.
    ///
    /// Follows egui's sign convention: a positive delta scrolls content down
    /// to reveal earlier items. Returns `None` for a zero or NaN delta.
    pub fn from_wheel_delta(delta_y: f32) -> Option<Self> {
        if delta_y > 0.0 {
            Some(StepDirection::Backward)
        } else if delta_y < 0.0 {
            Some(StepDirection::Forward)
        } else {
            None
        }
    }

    /// Signed unit value (-1 or +1).
    pub fn signum(self) -> f32 {
        match self {
            StepDirection::Backward => -1.0,
            StepDirection::Forward => 1.0,
        }
    }
}

/// Offset proposed by [`WindowedListController::step_by`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepTarget {
    pub target_offset: f32,
}

/// Owns the canonical scroll offset of one mounted list and derives its
/// render window.
#[derive(Debug, Clone)]
pub struct WindowedListController {
    config: WindowConfig,
    offset: f32,
    window: ViewWindow,
}

impl WindowedListController {
    /// Mounts a controller at offset 0.
    pub fn new(config: WindowConfig) -> Self {
        Self {
            config,
            offset: 0.0,
            window: compute_window(&config, 0.0),
        }
    }

    /// Commits a new scroll offset and returns the recomputed window.
    ///
    /// Out-of-range offsets are accepted: negative and NaN input is stored as
    /// 0, and offsets past the end produce a window clamped to the list.
    pub fn set_offset(&mut self, raw: f32) -> ViewWindow {
        self.offset = if raw.is_nan() { 0.0 } else { raw.max(0.0) };
        self.window = compute_window(&self.config, self.offset);
        self.window
    }

    /// Proposes the item-aligned offset one step away from the current one.
    ///
    /// The target is rounded to the nearest multiple of `step` and clamped to
    /// `[0, max_scrollable_offset]`. The committed offset is left untouched;
    /// the host reports where scrolling actually lands via `set_offset`.
    pub fn step_by(&self, direction: StepDirection, max_scrollable_offset: f32) -> StepTarget {
        let step = self.config.step;
        let max_offset = if max_scrollable_offset.is_nan() {
            0.0
        } else {
            max_scrollable_offset.max(0.0)
        };
        let snapped = ((self.offset + direction.signum() * step) / step).round() * step;
        StepTarget {
            target_offset: snapped.clamp(0.0, max_offset),
        }
    }

    /// Last computed window.
    pub fn current_window(&self) -> ViewWindow {
        self.window
    }

    /// Canonical scroll offset.
    pub fn offset(&self) -> f32 {
        self.offset
    }

    pub fn config(&self) -> &WindowConfig {
        &self.config
    }

    /// Largest offset a viewport of the given height can scroll to.
    pub fn max_scroll_offset(&self, viewport_height: f32) -> f32 {
        (self.config.content_height() - viewport_height).max(0.0)
    }
}

/// Pure window derivation for a configuration and offset.
pub fn compute_window(config: &WindowConfig, offset: f32) -> ViewWindow {
    let item_count = config.item_count;

    // Float-to-int casts saturate, so huge offsets land on item_count.
    let visible_start = ((offset.max(0.0) / config.step).floor() as usize).min(item_count);

    let start_index = visible_start.saturating_sub(config.buffer);
    let end_index = visible_start
        .saturating_add(config.visible_count)
        .saturating_add(config.buffer)
        .min(item_count);

    let window = ViewWindow {
        start_index,
        end_index,
        top_padding: start_index as f32 * config.step,
        bottom_padding: (item_count - end_index) as f32 * config.step,
    };

    debug_assert!(window.start_index <= window.end_index);
    debug_assert!(window.len() <= config.max_window_len());
    debug_assert!(window.top_padding >= 0.0 && window.bottom_padding >= 0.0);

    window
}

#[cfg(test)]
mod tests {
    use super::*;

    fn controller(item_count: usize) -> WindowedListController {
        WindowedListController::new(WindowConfig::new(item_count, 132.0, 3, 1).unwrap())
    }

    #[test]
    fn test_rejects_invalid_config() {
        assert_eq!(WindowConfig::new(6, 0.0, 3, 1), Err(ConfigError::InvalidStep(0.0)));
        assert_eq!(WindowConfig::new(6, -5.0, 3, 1), Err(ConfigError::InvalidStep(-5.0)));
        assert!(matches!(
            WindowConfig::new(6, f32::NAN, 3, 1),
            Err(ConfigError::InvalidStep(_))
        ));
        assert!(WindowConfig::new(6, f32::INFINITY, 3, 1).is_err());
        assert_eq!(WindowConfig::new(6, 132.0, 0, 1), Err(ConfigError::ZeroVisibleCount));
        assert!(WindowConfig::new(0, 132.0, 1, 0).is_ok());
    }

    #[test]
    fn test_window_at_top() {
        let mut c = controller(6);
        let w = c.set_offset(0.0);
        assert_eq!(w.start_index, 0);
        assert_eq!(w.end_index, 4);
        assert_eq!(w.top_padding, 0.0);
        assert_eq!(w.bottom_padding, 264.0);
    }

    #[test]
    fn test_window_at_bottom() {
        let mut c = controller(6);
        let w = c.set_offset(264.0);
        assert_eq!(w.start_index, 1);
        assert_eq!(w.end_index, 6);
        assert_eq!(w.top_padding, 132.0);
        assert_eq!(w.bottom_padding, 0.0);
    }

    #[test]
    fn test_partial_scroll_uses_floor() {
        let mut c = controller(20);
        // 131 px is still inside item 0
        assert_eq!(c.set_offset(131.0).range(), 0..4);
        // One pixel later item 1 becomes the first visible
        assert_eq!(c.set_offset(132.0).range(), 0..5);
        assert_eq!(c.set_offset(400.0).range(), 2..7);
    }

    #[test]
    fn test_empty_list() {
        let mut c = controller(0);
        for offset in [0.0, 10.0, 1_000.0, -3.0] {
            let w = c.set_offset(offset);
            assert_eq!(w.range(), 0..0);
            assert_eq!(w.top_padding, 0.0);
            assert_eq!(w.bottom_padding, 0.0);
        }
    }

    #[test]
    fn test_short_list_renders_everything() {
        let mut c = controller(4);
        let w = c.set_offset(132.0);
        assert_eq!(w.range(), 0..4);
        assert_eq!(w.top_padding + w.bottom_padding, 0.0);
    }

    #[test]
    fn test_out_of_range_offsets_degrade() {
        let mut c = controller(6);
        let w = c.set_offset(-500.0);
        assert_eq!(c.offset(), 0.0);
        assert_eq!(w.range(), 0..4);

        let w = c.set_offset(1_000_000.0);
        assert_eq!(w.range(), 5..6);
        assert_eq!(w.bottom_padding, 0.0);

        let w = c.set_offset(f32::INFINITY);
        assert_eq!(w.end_index, 6);

        c.set_offset(f32::NAN);
        assert_eq!(c.offset(), 0.0);
    }

    #[test]
    fn test_current_window_matches_last_set() {
        let mut c = controller(50);
        assert_eq!(c.current_window().range(), 0..4);
        let w = c.set_offset(1_320.0);
        assert_eq!(c.current_window(), w);
    }

    #[test]
    fn test_step_forward_snaps_to_next_boundary() {
        let mut c = controller(6);
        c.set_offset(50.0);
        let t = c.step_by(StepDirection::Forward, 396.0);
        assert_eq!(t.target_offset, 132.0);
        // Proposing does not commit
        assert_eq!(c.offset(), 50.0);
    }

    #[test]
    fn test_step_backward_clamps_at_zero() {
        let mut c = controller(6);
        c.set_offset(60.0);
        assert_eq!(c.step_by(StepDirection::Backward, 396.0).target_offset, 0.0);
        c.set_offset(0.0);
        assert_eq!(c.step_by(StepDirection::Backward, 396.0).target_offset, 0.0);
    }

    #[test]
    fn test_step_is_stable_at_bottom() {
        let mut c = controller(6);
        let max = c.max_scroll_offset(396.0);
        assert_eq!(max, 396.0);
        c.set_offset(max);
        let first = c.step_by(StepDirection::Forward, max);
        let second = c.step_by(StepDirection::Forward, max);
        assert_eq!(first, second);
        assert_eq!(first.target_offset, 396.0);
    }

    #[test]
    fn test_step_nearest_rounding_can_snap_back() {
        let mut c = controller(20);
        // 200 + 132 = 332 -> 2.52 steps -> rounds to 3
        c.set_offset(200.0);
        assert_eq!(c.step_by(StepDirection::Forward, 5_000.0).target_offset, 396.0);
        // 250 - 132 = 118 -> 0.89 steps -> rounds to 1
        c.set_offset(250.0);
        assert_eq!(c.step_by(StepDirection::Backward, 5_000.0).target_offset, 132.0);
    }

    #[test]
    fn test_step_with_viewport_taller_than_content() {
        let c = controller(2);
        let max = c.max_scroll_offset(1_000.0);
        assert_eq!(max, 0.0);
        assert_eq!(c.step_by(StepDirection::Forward, max).target_offset, 0.0);
        assert_eq!(c.step_by(StepDirection::Forward, -10.0).target_offset, 0.0);
    }

    #[test]
    fn test_wheel_delta_direction() {
        assert_eq!(StepDirection::from_wheel_delta(-40.0), Some(StepDirection::Forward));
        assert_eq!(StepDirection::from_wheel_delta(12.5), Some(StepDirection::Backward));
        assert_eq!(StepDirection::from_wheel_delta(0.0), None);
        assert_eq!(StepDirection::from_wheel_delta(f32::NAN), None);
    }
}
