//! Charts module - line chart construction and rendering

mod plotter;

pub use plotter::{ChartPlotter, ChartSurface, NO_DATA_MESSAGE};
