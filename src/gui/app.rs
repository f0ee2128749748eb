//! Sample Plotter Main Application
//! Top bar with file controls and the chart viewer below it.

use crate::charts::{ChartPlotter, ChartSurface, NO_DATA_MESSAGE};
use crate::config;
use crate::data::SampleLoader;
use crate::gui::{ChartViewer, ControlPanel, ControlPanelAction, NativeDialogs, Notifier};
use egui::TopBottomPanel;
use std::path::{Path, PathBuf};

const NO_FILE_SELECTED: &str = "No file selected.";
const FILE_NOT_FOUND: &str = "File does not exist.";

/// Main application window. Owns the path field, the chart surface and the
/// channel used for modal notifications.
pub struct SamplePlotterApp<N: Notifier = NativeDialogs> {
    control_panel: ControlPanel,
    chart_surface: ChartSurface,
    notifier: N,
}

impl SamplePlotterApp<NativeDialogs> {
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        Self::with_notifier(NativeDialogs)
    }
}

impl<N: Notifier> SamplePlotterApp<N> {
    pub fn with_notifier(notifier: N) -> Self {
        Self {
            control_panel: ControlPanel::new(),
            chart_surface: ChartSurface::new(),
            notifier,
        }
    }

    /// Open the native file picker and store the chosen path.
    fn handle_browse(&mut self) {
        if let Some(path) = rfd::FileDialog::new()
            .set_title(config::DIALOG_TITLE)
            .add_filter(config::FILE_FILTER_NAME, &config::FILE_FILTER_EXTENSIONS)
            .pick_file()
        {
            self.set_file_path(&path);
        }
    }

    pub fn set_file_path(&mut self, path: &Path) {
        log::debug!("selected {}", path.display());
        self.control_panel.file_path = path.display().to_string();
    }

    /// Validate the path, load the file and draw it. On any failure the
    /// current chart stays as it was.
    pub fn load_and_plot(&mut self) -> bool {
        let path_text = self.control_panel.file_path.trim();
        if path_text.is_empty() {
            self.warn(NO_FILE_SELECTED);
            return false;
        }

        let path = PathBuf::from(path_text);
        if !path.exists() {
            self.warn(FILE_NOT_FOUND);
            return false;
        }

        let report = match SampleLoader::load_file(&path) {
            Ok(report) => report,
            Err(e) => {
                let message = format!("Failed to read file: {e}");
                self.control_panel.set_status(&message);
                self.notifier.error(&message);
                return false;
            }
        };

        let summary = report.summary();
        if !ChartPlotter::present(
            Some(report.values),
            &mut self.chart_surface,
            &mut self.notifier,
        ) {
            self.control_panel.set_status(NO_DATA_MESSAGE);
            return false;
        }

        self.control_panel.set_status(&summary);
        true
    }

    fn warn(&mut self, message: &str) {
        self.control_panel.set_status(message);
        self.notifier.warning(message);
    }
}

impl<N: Notifier> eframe::App for SamplePlotterApp<N> {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        TopBottomPanel::top("control_panel").show(ctx, |ui| {
            match self.control_panel.show(ui) {
                ControlPanelAction::Browse => self.handle_browse(),
                ControlPanelAction::Plot => {
                    self.load_and_plot();
                }
                ControlPanelAction::None => {}
            }
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            ChartViewer::show(ui, &self.chart_surface);
        });
    }
}
