//! Asynchronous reminders file loading.
//!
//! This module reads reminders files in background threads,
//! keeping the GUI responsive during file I/O.

use eframe::egui;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use std::sync::mpsc::{channel, Receiver};
use std::thread;
use vetdesk::{Reminder, ReminderGenerator};
use crate::io::LoadingState;

/// Result of a completed loading operation.
pub enum LoadResult {
    /// Loading completed successfully
    Success {
        /// The loaded reminders
        reminders: Vec<Reminder>,
        /// Path to the file that was loaded
        path: PathBuf,
    },
    /// Loading failed with an error
    Error(String),
    /// No loading operation in progress
    None,
}

/// Manages asynchronous loading of reminders files.
///
/// Coordinates a background reader thread with the GUI thread. Results come
/// back through a channel and are picked up once per frame.
pub struct AsyncLoader {
    /// Shared loading state flag
    loading_state: Arc<Mutex<LoadingState>>,

    /// Channel receiver for loading results
    loading_receiver: Option<Receiver<Result<Vec<Reminder>, String>>>,

    /// Path of the file currently being loaded
    pending_load_path: Option<PathBuf>,
}

impl AsyncLoader {
    /// Creates a new async loader with no active loading operation.
    pub fn new() -> Self {
        Self {
            loading_state: Arc::new(Mutex::new(LoadingState::new())),
            loading_receiver: None,
            pending_load_path: None,
        }
    }

    /// Checks if a loading operation is currently in progress.
    pub fn is_loading(&self) -> bool {
        self.loading_state
            .lock()
            .map(|state| state.in_progress)
            .unwrap_or(false)
    }

    /// Starts reading a reminders file in the background.
    ///
    /// Call `check_completion()` once per frame to pick up the result.
    ///
    /// # Arguments
    /// * `path` - Path to the reminders file
    /// * `ctx` - egui context for requesting a repaint when loading completes
    pub fn start_file_load(&mut self, path: PathBuf, ctx: &egui::Context) {
        let (sender, receiver) = channel();
        self.loading_receiver = Some(receiver);
        let generation = begin_load(&self.loading_state);
        self.pending_load_path = Some(path.clone());

        let loading_state = Arc::clone(&self.loading_state);
        let ctx_handle = ctx.clone();

        tracing::info!(path = %path.display(), "loading reminders file");

        thread::spawn(move || {
            let result = vetdesk::read_reminders(&path).map_err(|e| format!("{:#}", e));

            // Receiver may be gone if a newer load replaced it
            let _ = sender.send(result);

            finish_load(&loading_state, generation);
            ctx_handle.request_repaint();
        });
    }

    /// Generates sample reminders in memory (synchronously).
    pub fn generate_sample(&self, seed: u64, count: usize) -> Vec<Reminder> {
        ReminderGenerator::new(seed).generate(count)
    }

    /// Checks if background loading has completed and returns the result if available.
    ///
    /// # Returns
    /// * `LoadResult::Success` - Loading completed successfully
    /// * `LoadResult::Error` - Loading failed with an error
    /// * `LoadResult::None` - No result available (still loading or no operation active)
    pub fn check_completion(&mut self) -> LoadResult {
        let Some(receiver) = &self.loading_receiver else {
            return LoadResult::None;
        };
        let Ok(result) = receiver.try_recv() else {
            return LoadResult::None;
        };

        self.loading_receiver = None;
        let path = self.pending_load_path.take();

        match (result, path) {
            (Ok(reminders), Some(path)) => LoadResult::Success { reminders, path },
            (Ok(_), None) => LoadResult::Error("Loaded reminders without a pending path".to_string()),
            (Err(error_msg), _) => LoadResult::Error(error_msg),
        }
    }
}

impl Default for AsyncLoader {
    fn default() -> Self {
        Self::new()
    }
}

fn begin_load(state: &Mutex<LoadingState>) -> u64 {
    match state.lock() {
        Ok(mut state) => state.begin(),
        Err(poisoned) => poisoned.into_inner().begin(),
    }
}

fn finish_load(state: &Mutex<LoadingState>, generation: u64) {
    if let Ok(mut state) = state.lock() {
        state.finish(generation);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::{Duration, Instant};

    fn wait_for_result(loader: &mut AsyncLoader) -> LoadResult {
        let deadline = Instant::now() + Duration::from_secs(5);
        loop {
            match loader.check_completion() {
                LoadResult::None if Instant::now() < deadline => {
                    thread::sleep(Duration::from_millis(10));
                }
                other => return other,
            }
        }
    }

    #[test]
    fn test_async_loader_creation() {
        let loader = AsyncLoader::new();
        assert!(!loader.is_loading());
    }

    #[test]
    fn test_check_completion_when_idle() {
        let mut loader = AsyncLoader::new();
        assert!(matches!(loader.check_completion(), LoadResult::None));
    }

    #[test]
    fn test_generate_sample() {
        let loader = AsyncLoader::new();
        assert_eq!(loader.generate_sample(42, 12).len(), 12);
    }

    #[test]
    fn test_file_load_round_trip() {
        let path = std::env::temp_dir().join("vetdesk_async_loader_ok.json");
        let reminders = ReminderGenerator::new(3).generate(8);
        vetdesk::write_reminders(&path, &reminders).unwrap();

        let ctx = egui::Context::default();
        let mut loader = AsyncLoader::new();
        loader.start_file_load(path.clone(), &ctx);

        match wait_for_result(&mut loader) {
            LoadResult::Success { reminders: loaded, path: loaded_path } => {
                assert_eq!(loaded, reminders);
                assert_eq!(loaded_path, path);
            }
            _ => panic!("expected successful load"),
        }
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_replaced_load_keeps_loading_flag() {
        let loader = AsyncLoader::new();
        let first = begin_load(&loader.loading_state);
        let _second = begin_load(&loader.loading_state);

        // The first reader thread finishing must not hide the second load
        finish_load(&loader.loading_state, first);
        assert!(loader.is_loading());
    }

    #[test]
    fn test_second_load_wins() {
        let first_path = std::env::temp_dir().join("vetdesk_async_loader_first.json");
        let second_path = std::env::temp_dir().join("vetdesk_async_loader_second.json");
        vetdesk::write_reminders(&first_path, &ReminderGenerator::new(1).generate(4)).unwrap();
        let second = ReminderGenerator::new(2).generate(6);
        vetdesk::write_reminders(&second_path, &second).unwrap();

        let ctx = egui::Context::default();
        let mut loader = AsyncLoader::new();
        loader.start_file_load(first_path.clone(), &ctx);
        loader.start_file_load(second_path.clone(), &ctx);

        match wait_for_result(&mut loader) {
            LoadResult::Success { reminders, path } => {
                assert_eq!(reminders, second);
                assert_eq!(path, second_path);
            }
            _ => panic!("expected successful load"),
        }

        let deadline = Instant::now() + Duration::from_secs(5);
        while loader.is_loading() && Instant::now() < deadline {
            thread::sleep(Duration::from_millis(10));
        }
        assert!(!loader.is_loading());

        let _ = std::fs::remove_file(&first_path);
        let _ = std::fs::remove_file(&second_path);
    }

    #[test]
    fn test_missing_file_reports_error() {
        let path = std::env::temp_dir().join("vetdesk_async_loader_missing.json");
        let _ = std::fs::remove_file(&path);

        let ctx = egui::Context::default();
        let mut loader = AsyncLoader::new();
        loader.start_file_load(path, &ctx);

        match wait_for_result(&mut loader) {
            LoadResult::Error(msg) => assert!(msg.contains("Failed to read reminders file")),
            _ => panic!("expected load error"),
        }
    }
}
