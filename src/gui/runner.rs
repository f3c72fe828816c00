//! GUI runner - launches the settings window

use std::path::PathBuf;

use anyhow::Result;
use eframe::egui;
use tracing::info;

use super::app::GlobedMenuApp;
use crate::config::FileSettingsStore;

/// Run the settings and server switcher window
pub fn run_gui(config_path: PathBuf) -> Result<()> {
    let store = FileSettingsStore::open(&config_path)?;
    info!("Loaded settings from {}", config_path.display());

    let app = GlobedMenuApp::new(store)?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([620.0, 520.0])
            .with_min_inner_size([480.0, 360.0])
            .with_resizable(true),
        centered: true,
        ..Default::default()
    };

    eframe::run_native("Globed", options, Box::new(|_cc| Ok(Box::new(app))))
        .map_err(|e| anyhow::anyhow!("Failed to run GUI: {}", e))?;

    Ok(())
}
