//! Reminders panel scroll state.
//!
//! Bridges the egui scroll area and the windowed list controller. The scroll
//! area reports the offset it actually reached each frame; wheel steps only
//! propose a snapped target, which `SnapAnimation` eases toward over the
//! following frames.

use vetdesk::{ConfigError, StepDirection, StepTarget, ViewWindow, WindowConfig, WindowedListController};

/// Remaining distance (px) at which an animation lands on its target.
const SETTLE_DISTANCE: f32 = 0.5;

/// Difference (px) between commanded and observed offsets that counts as the
/// user taking over the scrollbar.
const DRIFT_TOLERANCE: f32 = 1.0;

/// Fraction of the remaining distance covered per frame.
const DEFAULT_SNAP_SPEED: f32 = 0.35;

/// Exponential ease toward a pending scroll target.
#[derive(Debug, Clone)]
pub struct SnapAnimation {
    target: Option<f32>,
    speed: f32,
}

impl SnapAnimation {
    pub fn new(speed: f32) -> Self {
        Self {
            target: None,
            speed: speed.clamp(0.05, 1.0),
        }
    }

    /// Replaces any pending target.
    pub fn retarget(&mut self, target: f32) {
        self.target = Some(target);
    }

    pub fn cancel(&mut self) {
        self.target = None;
    }

    pub fn is_animating(&self) -> bool {
        self.target.is_some()
    }

    /// Moves `current` one frame toward the target.
    ///
    /// Returns the offset to command this frame, or `None` when idle. Lands
    /// exactly on the target once within `SETTLE_DISTANCE`.
    pub fn advance(&mut self, current: f32) -> Option<f32> {
        let target = self.target?;
        let next = current + (target - current) * self.speed;
        if (target - next).abs() <= SETTLE_DISTANCE {
            self.target = None;
            Some(target)
        } else {
            Some(next)
        }
    }
}

impl Default for SnapAnimation {
    fn default() -> Self {
        Self::new(DEFAULT_SNAP_SPEED)
    }
}

/// Scroll state of the mounted reminders list.
///
/// Responsibilities:
/// - Owning the controller (canonical offset and current window)
/// - Turning wheel steps into animated, item-aligned scrolls
/// - Dropping stale targets when the user scrolls by other means
#[derive(Debug, Clone)]
pub struct ReminderScrollState {
    controller: WindowedListController,
    animation: SnapAnimation,
    /// Offset forced on the scroll area this frame, if any
    commanded_offset: Option<f32>,
}

impl ReminderScrollState {
    /// Mounts a fresh list at offset 0.
    pub fn new(
        item_count: usize,
        step: f32,
        visible_count: usize,
        buffer: usize,
    ) -> Result<Self, ConfigError> {
        let config = WindowConfig::new(item_count, step, visible_count, buffer)?;
        Ok(Self {
            controller: WindowedListController::new(config),
            animation: SnapAnimation::default(),
            commanded_offset: None,
        })
    }

    pub fn controller(&self) -> &WindowedListController {
        &self.controller
    }

    pub fn window(&self) -> ViewWindow {
        self.controller.current_window()
    }

    pub fn offset(&self) -> f32 {
        self.controller.offset()
    }

    pub fn is_animating(&self) -> bool {
        self.animation.is_animating()
    }

    /// Offset to force on the scroll area before layout, if an animation is
    /// in flight.
    pub fn begin_frame(&mut self) -> Option<f32> {
        self.commanded_offset = self.animation.advance(self.controller.offset());
        self.commanded_offset
    }

    /// Commits the offset the scroll area reached after layout.
    ///
    /// If it differs from what was commanded, the scrollbar was dragged or the
    /// offset was clamped, and the pending target is abandoned.
    pub fn observe_offset(&mut self, observed: f32) -> ViewWindow {
        if let Some(commanded) = self.commanded_offset.take() {
            if (observed - commanded).abs() > DRIFT_TOLERANCE {
                self.animation.cancel();
            }
        }
        self.controller.set_offset(observed)
    }

    /// Proposes and starts animating toward the next snapped offset.
    pub fn wheel_step(&mut self, direction: StepDirection, max_scroll_offset: f32) -> StepTarget {
        let target = self.controller.step_by(direction, max_scroll_offset);
        self.animation.retarget(target.target_offset);
        target
    }
}
