//! Utility modules for the VetDesk front office.

pub mod formatting;

// Re-export commonly used functions
pub use formatting::{format_memory_mb, format_window_summary, get_current_memory_mb};
