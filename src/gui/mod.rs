//! GUI module - User interface components

mod app;
mod chart_viewer;
mod control_panel;
mod dialogs;

pub use app::SamplePlotterApp;
pub use chart_viewer::ChartViewer;
pub use control_panel::{ControlPanel, ControlPanelAction};
#[cfg(test)]
pub use dialogs::RecordingNotifier;
pub use dialogs::{NativeDialogs, Notifier};
