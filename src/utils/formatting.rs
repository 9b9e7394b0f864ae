//! Text formatting utilities for the status bar.

use sysinfo::{System, RefreshKind, ProcessRefreshKind, Pid};
use vetdesk::ViewWindow;

/// Gets the current process memory usage in megabytes.
///
/// Returns 0.0 if the process information cannot be retrieved.
pub fn get_current_memory_mb() -> f64 {
    let mut sys = System::new_with_specifics(
        RefreshKind::new().with_processes(ProcessRefreshKind::new().with_memory())
    );
    sys.refresh_processes_specifics(ProcessRefreshKind::new().with_memory());

    sys.process(Pid::from_u32(std::process::id()))
        .map(|process| process.memory() as f64 / (1024.0 * 1024.0))
        .unwrap_or(0.0)
}

/// Formats memory usage in MB as a human-readable string.
pub fn format_memory_mb(memory_mb: f64) -> String {
    if memory_mb > 1024.0 {
        format!("Memory: {:.2} GB", memory_mb / 1024.0)
    } else {
        format!("Memory: {:.1} MB", memory_mb)
    }
}

/// Describes which cards are rendered, using 1-based positions.
pub fn format_window_summary(window: &ViewWindow, total: usize) -> String {
    if window.is_empty() {
        return format!("Rendering 0 of {}", total);
    }
    format!(
        "Rendering {}-{} of {}",
        window.start_index + 1,
        window.end_index,
        total
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_memory_mb() {
        assert_eq!(format_memory_mb(512.5), "Memory: 512.5 MB");
        assert_eq!(format_memory_mb(2048.0), "Memory: 2.00 GB");
    }

    #[test]
    fn test_format_window_summary() {
        let window = ViewWindow {
            start_index: 1,
            end_index: 6,
            top_padding: 132.0,
            bottom_padding: 0.0,
        };
        assert_eq!(format_window_summary(&window, 6), "Rendering 2-6 of 6");

        let empty = ViewWindow {
            start_index: 0,
            end_index: 0,
            top_padding: 0.0,
            bottom_padding: 0.0,
        };
        assert_eq!(format_window_summary(&empty, 0), "Rendering 0 of 0");
    }
}
