//! Rendering subsystem for drawing reminder cards
//!
//! - Reminder card rendering (fixed-height cards painted with egui's painter)
//! - Text utilities (text measurement and truncation)

pub mod reminder_card;
pub mod text_utils;
