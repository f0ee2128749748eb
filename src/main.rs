//! Sample Plotter - newline-delimited numeric data viewer
//!
//! Loads a text file of numbers and plots them against a fixed 1 ms time axis.

mod charts;
mod config;
mod data;
mod gui;

use anyhow::Context;
use eframe::egui;
use gui::SamplePlotterApp;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(config::DEFAULT_LOG_FILTER),
    )
    .init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(config::WINDOW_SIZE)
            .with_min_inner_size(config::WINDOW_MIN_SIZE)
            .with_title(config::WINDOW_TITLE),
        ..Default::default()
    };

    eframe::run_native(
        config::APP_ID,
        options,
        Box::new(|cc| Ok(Box::new(SamplePlotterApp::new(cc)))),
    )
    .map_err(|e| anyhow::anyhow!("{e}"))
    .context("failed to start the plotter window")
}
