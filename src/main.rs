// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! PAIDS - Parkinson AI Diagnostic System
//!
//! A desktop application for capturing a patient profile, marking labeled
//! segments on an examination video, reviewing a severity estimate and
//! exporting the session as JSON.

mod app;
mod config;
mod error;
mod io;
mod models;
mod pages;
mod ui;
mod util;

use anyhow::Result;
use app::PaidsApp;
use config::AppConfig;
use std::path::Path;

fn main() -> Result<()> {
    // Initialize logging
    env_logger::init();

    let config = AppConfig::load_or_default(Path::new(config::SETTINGS_FILE));
    log::debug!("Settings: {:?}", config);

    // Configure egui options
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(config.window_size)
            .with_min_inner_size([800.0, 600.0])
            .with_title("PAIDS - Parkinson AI Diagnostic System"),
        ..Default::default()
    };

    // Run the application
    eframe::run_native(
        "PAIDS",
        options,
        Box::new(|_cc| Ok(Box::new(PaidsApp::new(config)))),
    )
    .map_err(|e| anyhow::anyhow!("Application error: {}", e))?;

    Ok(())
}
