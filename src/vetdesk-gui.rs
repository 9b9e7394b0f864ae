//! VetDesk front-office reminders viewer
//!
//! An egui application showing clinic reminder cards in a windowed list:
//! - Only the cards around the viewport are laid out, however long the list
//! - Mouse wheel steps snap to card boundaries with an eased scroll
//! - Reminders files load in the background
//! - Panel sizing preferences persist across sessions
//!
//! The application is built with a modular architecture:
//! - `app/` - Application state management and coordination
//! - `state/` - Reminder, scroll and settings state
//! - `io/` - Background file loading and sample generation
//! - `ui/` - Panel rendering and layout
//! - `rendering/` - Low-level card rendering
//! - `utils/` - Formatting helpers

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use eframe::egui;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod utils;
mod io;
mod app;
mod rendering;
mod ui;
mod state;

use app::{AppState, ApplicationCoordinator, SettingsCoordinator};
use io::AsyncLoader;
use ui::panel_manager::{PanelInteraction, PanelManager};

/// Main application entry point that initializes logging and launches the GUI.
fn main() -> eframe::Result {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Optional reminders file to load on startup
    let initial_file = std::env::args()
        .nth(1)
        .map(PathBuf::from);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([520.0, 640.0])
            .with_title("VetDesk Reminders"),
        ..Default::default()
    };

    eframe::run_native(
        "VetDesk Reminders",
        options,
        Box::new(move |cc| Ok(Box::new(VetDeskApp::new(cc, initial_file)))),
    )
}

/// The main VetDesk application.
///
/// Delegates to coordinators:
/// - `ApplicationCoordinator` handles loading, settings changes and selection
/// - `SettingsCoordinator` handles preference persistence
/// - `PanelManager` handles UI panel layout and rendering
struct VetDeskApp {
    /// Centralized application state
    state: AppState,
    /// Asynchronous file loader
    loader: AsyncLoader,
    /// Optional file to load on first frame
    pending_file_load: Option<PathBuf>,
}

impl VetDeskApp {
    /// Creates the app with panel settings loaded from persistent storage.
    fn new(cc: &eframe::CreationContext, initial_file: Option<PathBuf>) -> Self {
        let settings = SettingsCoordinator::load_panel_settings(cc.storage);
        tracing::info!(
            visible_count = settings.visible_count,
            buffer = settings.buffer,
            "starting VetDesk"
        );

        Self {
            state: AppState::with_settings(settings),
            loader: AsyncLoader::new(),
            pending_file_load: initial_file,
        }
    }

    /// Handles panel interactions by delegating to ApplicationCoordinator.
    fn handle_panel_interaction(&mut self, interaction: PanelInteraction, ctx: &egui::Context) {
        match interaction {
            PanelInteraction::OpenFileRequested(path) => {
                ApplicationCoordinator::open_file(&mut self.state, &mut self.loader, path, ctx);
            }
            PanelInteraction::SampleRemindersRequested { seed } => {
                ApplicationCoordinator::open_sample_reminders(&mut self.state, &self.loader, seed);
            }
            PanelInteraction::SettingsApplied(settings) => {
                ApplicationCoordinator::apply_settings(&mut self.state, settings);
            }
            PanelInteraction::CardClicked { reminder_id } => {
                ApplicationCoordinator::handle_card_click(&mut self.state, reminder_id);
            }
        }
    }
}

impl eframe::App for VetDeskApp {
    /// Called when the app is being shut down - ensures preferences are saved.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        SettingsCoordinator::save_panel_settings(storage, &self.state.settings);
    }

    /// Main update loop:
    /// 1. Check for async loading completion
    /// 2. Load initial file if specified via command line
    /// 3. Render all panels via PanelManager
    /// 4. Handle panel interactions
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        ApplicationCoordinator::check_loading_completion(&mut self.state, &mut self.loader);

        if let Some(path) = self.pending_file_load.take() {
            ApplicationCoordinator::open_file(&mut self.state, &mut self.loader, path, ctx);
        }

        if let Some(interaction) = PanelManager::render_all_panels(ctx, &mut self.state, &self.loader) {
            self.handle_panel_interaction(interaction, ctx);
        }
    }
}
