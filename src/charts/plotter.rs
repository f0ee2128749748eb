//! Chart Plotter Module
//! Turns a sample series into a line chart and draws it with egui_plot.

use crate::data::SampleSeries;
use crate::gui::Notifier;
use egui::{Color32, RichText};
use egui_plot::{HLine, Legend, Line, LineStyle, MarkerShape, Plot, PlotPoints, Points, VLine};

pub const SERIES_COLOR: Color32 = Color32::from_rgb(52, 152, 219); // Blue
const GRID_COLOR: Color32 = Color32::from_rgba_premultiplied(128, 128, 128, 90);

pub const CHART_TITLE: &str = "Data visualization (1 ms per sample)";
pub const X_AXIS_LABEL: &str = "Time (ms)";
pub const Y_AXIS_LABEL: &str = "Value";
pub const SERIES_NAME: &str = "Data";
pub const NO_DATA_MESSAGE: &str = "No data to plot.";

/// Approximate number of dashed grid lines per axis.
const GRID_TARGET_TICKS: usize = 8;

/// A ready-to-draw line chart for one sample series.
#[derive(Debug, Clone)]
pub struct LineChart {
    pub series: SampleSeries,
    pub x_grid: Vec<f64>,
    pub y_grid: Vec<f64>,
}

impl LineChart {
    pub fn new(series: SampleSeries) -> Self {
        let x_grid = finite_range(series.times().iter().map(|&t| t as f64))
            .map(|(lo, hi)| ChartPlotter::nice_ticks(lo, hi, GRID_TARGET_TICKS))
            .unwrap_or_default();
        let y_grid = finite_range(series.values().iter().copied())
            .map(|(lo, hi)| ChartPlotter::nice_ticks(lo, hi, GRID_TARGET_TICKS))
            .unwrap_or_default();

        Self {
            series,
            x_grid,
            y_grid,
        }
    }
}

/// Reusable drawing region. Holds at most one chart.
#[derive(Debug, Default)]
pub struct ChartSurface {
    chart: Option<LineChart>,
    generation: u64,
}

impl ChartSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop whatever chart is currently shown.
    pub fn clear(&mut self) {
        self.chart = None;
    }

    /// Replace the surface contents with `chart`.
    pub fn draw(&mut self, chart: LineChart) {
        self.clear();
        self.chart = Some(chart);
        self.generation += 1;
    }

    pub fn chart(&self) -> Option<&LineChart> {
        self.chart.as_ref()
    }

    /// Bumped on every draw; used to give each chart a fresh plot id.
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

pub struct ChartPlotter;

impl ChartPlotter {
    /// Render `values` onto `surface`. Returns false (after one warning) when
    /// there is nothing to plot, leaving the surface untouched.
    pub fn present(
        values: Option<Vec<f64>>,
        surface: &mut ChartSurface,
        notifier: &mut dyn Notifier,
    ) -> bool {
        let values = match values {
            Some(v) if !v.is_empty() => v,
            _ => {
                notifier.warning(NO_DATA_MESSAGE);
                return false;
            }
        };

        let series = SampleSeries::new(values);
        log::info!("plotting {} samples", series.len());
        surface.draw(LineChart::new(series));
        true
    }

    /// Evenly spaced tick values inside `[min, max]`, with a step of
    /// 1, 2 or 5 times a power of ten.
    pub fn nice_ticks(min: f64, max: f64, target: usize) -> Vec<f64> {
        if !min.is_finite() || !max.is_finite() || target == 0 {
            return Vec::new();
        }
        let (lo, hi) = if max > min {
            (min, max)
        } else {
            (min - 0.5, min + 0.5)
        };

        let raw = (hi - lo) / target as f64;
        let magnitude = 10f64.powf(raw.log10().floor());
        let step = [1.0, 2.0, 5.0, 10.0]
            .iter()
            .map(|m| m * magnitude)
            .find(|&s| s >= raw)
            .unwrap_or(10.0 * magnitude);
        if !(step > 0.0 && step.is_finite()) {
            return Vec::new();
        }

        let start = (lo / step).ceil();
        let end = (hi / step).floor();
        if !start.is_finite() || !end.is_finite() || end - start > (4 * target) as f64 {
            return Vec::new();
        }
        (start as i64..=end as i64).map(|i| i as f64 * step).collect()
    }

    /// Draw the chart: title, line with circle markers, legend, dashed grid.
    pub fn draw_line_chart(ui: &mut egui::Ui, chart: &LineChart, generation: u64) {
        ui.vertical_centered(|ui| {
            ui.label(RichText::new(CHART_TITLE).size(16.0).strong());
        });
        ui.add_space(6.0);

        let points = chart.series.points();

        Plot::new(("line_chart", generation))
            .legend(Legend::default())
            .x_axis_label(X_AXIS_LABEL)
            .y_axis_label(Y_AXIS_LABEL)
            .show_grid(false)
            .allow_scroll(false)
            .show(ui, |plot_ui| {
                for &x in &chart.x_grid {
                    plot_ui.vline(
                        VLine::new(x)
                            .color(GRID_COLOR)
                            .width(1.0)
                            .style(LineStyle::dashed_dense()),
                    );
                }
                for &y in &chart.y_grid {
                    plot_ui.hline(
                        HLine::new(y)
                            .color(GRID_COLOR)
                            .width(1.0)
                            .style(LineStyle::dashed_dense()),
                    );
                }

                plot_ui.line(
                    Line::new(PlotPoints::new(points.clone()))
                        .color(SERIES_COLOR)
                        .width(1.5)
                        .name(SERIES_NAME),
                );
                plot_ui.points(
                    Points::new(PlotPoints::new(points))
                        .shape(MarkerShape::Circle)
                        .filled(true)
                        .radius(3.0)
                        .color(SERIES_COLOR)
                        .name(SERIES_NAME),
                );
            });
    }
}

/// Min and max over the finite items, if any.
fn finite_range(values: impl Iterator<Item = f64>) -> Option<(f64, f64)> {
    values
        .filter(|v| v.is_finite())
        .fold(None, |acc, v| match acc {
            None => Some((v, v)),
            Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gui::RecordingNotifier;

    #[test]
    fn empty_or_absent_series_warns_once_and_draws_nothing() {
        for values in [None, Some(Vec::new())] {
            let mut surface = ChartSurface::new();
            let mut notifier = RecordingNotifier::default();

            assert!(!ChartPlotter::present(values, &mut surface, &mut notifier));
            assert!(surface.chart().is_none());
            assert_eq!(surface.generation(), 0);
            assert_eq!(notifier.warnings, vec![NO_DATA_MESSAGE.to_string()]);
            assert!(notifier.errors.is_empty());
        }
    }

    #[test]
    fn empty_series_keeps_previous_chart() {
        let mut surface = ChartSurface::new();
        let mut notifier = RecordingNotifier::default();
        ChartPlotter::present(Some(vec![1.0]), &mut surface, &mut notifier);
        ChartPlotter::present(Some(Vec::new()), &mut surface, &mut notifier);

        assert_eq!(surface.chart().unwrap().series.values(), &[1.0]);
        assert_eq!(notifier.warnings.len(), 1);
    }

    #[test]
    fn draws_series_against_time_axis() {
        let mut surface = ChartSurface::new();
        let mut notifier = RecordingNotifier::default();

        assert!(ChartPlotter::present(
            Some(vec![1.0, 2.5, 3.0]),
            &mut surface,
            &mut notifier
        ));
        let chart = surface.chart().unwrap();
        assert_eq!(chart.series.times(), &[0, 1, 2]);
        assert_eq!(chart.series.values(), &[1.0, 2.5, 3.0]);
        assert!(notifier.warnings.is_empty());
    }

    #[test]
    fn redraw_replaces_previous_chart() {
        let mut surface = ChartSurface::new();
        let mut notifier = RecordingNotifier::default();

        ChartPlotter::present(Some(vec![5.0, 6.0, 7.0, 8.0]), &mut surface, &mut notifier);
        ChartPlotter::present(Some(vec![1.0, 2.0]), &mut surface, &mut notifier);

        let chart = surface.chart().unwrap();
        assert_eq!(chart.series.values(), &[1.0, 2.0]);
        assert_eq!(chart.series.times(), &[0, 1]);
        assert_eq!(surface.generation(), 2);
    }

    #[test]
    fn nice_ticks_use_round_steps() {
        assert_eq!(
            ChartPlotter::nice_ticks(0.0, 10.0, 5),
            vec![0.0, 2.0, 4.0, 6.0, 8.0, 10.0]
        );
        assert_eq!(
            ChartPlotter::nice_ticks(0.0, 99.0, 8),
            vec![0.0, 20.0, 40.0, 60.0, 80.0]
        );
        assert_eq!(ChartPlotter::nice_ticks(-3.0, 3.0, 3), vec![-2.0, 0.0, 2.0]);
    }

    #[test]
    fn nice_ticks_handle_degenerate_ranges() {
        assert!(!ChartPlotter::nice_ticks(4.0, 4.0, 8).is_empty());
        assert!(ChartPlotter::nice_ticks(f64::NAN, 1.0, 8).is_empty());
        assert!(ChartPlotter::nice_ticks(0.0, 1.0, 0).is_empty());
    }

    #[test]
    fn nice_ticks_reject_unrepresentable_steps() {
        assert!(ChartPlotter::nice_ticks(0.0, 5e-324, 8).is_empty());
        assert!(ChartPlotter::nice_ticks(-1e308, 1e308, 8).is_empty());
        assert!(ChartPlotter::nice_ticks(1e308, 1e308, 8).is_empty());
        assert!(ChartPlotter::nice_ticks(f64::MAX, f64::MAX, 8).is_empty());
    }

    #[test]
    fn nice_ticks_stay_finite_and_bounded() {
        for (lo, hi) in [(0.0, 1e-300), (-1e300, 1e300), (1e15, 1e15 + 1.0), (-7.5, 1e-9)] {
            let ticks = ChartPlotter::nice_ticks(lo, hi, 8);
            assert!(ticks.len() <= 4 * 8 + 1);
            assert!(ticks.iter().all(|t| t.is_finite()));
        }
    }

    #[test]
    fn tiny_or_huge_ranges_still_plot() {
        let mut surface = ChartSurface::new();
        let mut notifier = RecordingNotifier::default();

        assert!(ChartPlotter::present(Some(vec![0.0, 5e-324]), &mut surface, &mut notifier));
        let chart = surface.chart().unwrap();
        assert!(chart.y_grid.is_empty());
        assert!(!chart.x_grid.is_empty());

        assert!(ChartPlotter::present(Some(vec![-1e308, 1e308]), &mut surface, &mut notifier));
        assert!(surface.chart().unwrap().y_grid.iter().all(|y| y.is_finite()));
        assert!(notifier.warnings.is_empty());
    }

    #[test]
    fn grid_ignores_non_finite_values() {
        let chart = LineChart::new(SampleSeries::new(vec![f64::NAN, 1.0, f64::INFINITY, 3.0]));
        assert!(chart.y_grid.iter().all(|y| (1.0..=3.0).contains(y)));
        assert!(!chart.y_grid.is_empty());
        assert!(!chart.x_grid.is_empty());
    }
}
