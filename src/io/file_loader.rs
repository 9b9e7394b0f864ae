//! Shared flag for an in-flight reminders file load.

/// Holds the state of an async file loading operation.
///
/// Results come through a channel; only the in-progress flag is shared,
/// wrapped in an `Arc<Mutex<>>` between the GUI and loader threads.
pub struct LoadingState {
    /// True while a reminders file is being read
    pub in_progress: bool,
    /// Incremented by every started load; only the newest may finish
    generation: u64,
}

impl LoadingState {
    pub fn new() -> Self {
        Self {
            in_progress: false,
            generation: 0,
        }
    }

    /// Marks a new load as in progress and returns its generation.
    pub fn begin(&mut self) -> u64 {
        self.generation += 1;
        self.in_progress = true;
        self.generation
    }

    /// Clears the in-progress flag unless a newer load has started since.
    pub fn finish(&mut self, generation: u64) {
        if generation == self.generation {
            self.in_progress = false;
        }
    }
}

impl Default for LoadingState {
    fn default() -> Self {
        Self::new()
    }
}
