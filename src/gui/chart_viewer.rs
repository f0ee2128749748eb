//! Chart Viewer Widget
//! Central panel that shows whatever chart the surface currently holds.

use crate::charts::{ChartPlotter, ChartSurface};
use egui::RichText;

pub struct ChartViewer;

impl ChartViewer {
    pub fn show(ui: &mut egui::Ui, surface: &ChartSurface) {
        let Some(chart) = surface.chart() else {
            ui.centered_and_justified(|ui| {
                ui.label(RichText::new("No Data").size(20.0));
            });
            return;
        };

        egui::Frame::none()
            .rounding(5.0)
            .stroke(egui::Stroke::new(1.0, ui.visuals().widgets.noninteractive.bg_stroke.color))
            .inner_margin(10.0)
            .show(ui, |ui| {
                ChartPlotter::draw_line_chart(ui, chart, surface.generation());
            });
    }
}
