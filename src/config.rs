//! Application constants.

/// Name used by eframe for the native app id.
pub const APP_ID: &str = "Sample Plotter";

pub const WINDOW_TITLE: &str = "Data visualization (1 ms interval)";
pub const WINDOW_SIZE: [f32; 2] = [900.0, 600.0];
pub const WINDOW_MIN_SIZE: [f32; 2] = [600.0, 400.0];

/// File dialog settings
pub const DIALOG_TITLE: &str = "Select a .txt file";
pub const FILE_FILTER_NAME: &str = "Text files";
pub const FILE_FILTER_EXTENSIONS: [&str; 1] = ["txt"];

/// Spacing between consecutive samples, in milliseconds. Fixed.
pub const TIME_INTERVAL_MS: u64 = 1;

/// Default log filter when `RUST_LOG` is not set.
pub const DEFAULT_LOG_FILTER: &str = "warn";
