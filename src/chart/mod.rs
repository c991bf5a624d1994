//! Figure model for grouped benchmark charts: three stacked log-log panels,
//! one line per algorithm, one legend shared by the whole figure.

mod scale;
mod svg;

pub use scale::{LogScale, plottable};
pub use svg::{render_svg, save_svg};

use crate::dataset::Dataset;
use crate::types::{InputClass, Metric};

/// Line colors, cycled in legend order.
pub const PALETTE: [&str; 10] = [
    "#1f77b4", "#ff7f0e", "#2ca02c", "#d62728", "#9467bd", "#8c564b", "#e377c2", "#7f7f7f",
    "#bcbd22", "#17becf",
];

/// Panel order top to bottom.
pub const PANEL_ORDER: [InputClass; 3] = [InputClass::Regular, InputClass::Best, InputClass::Worst];

/// Figure size and margins. Margins are fractions of the figure size
/// measured from the bottom-left corner; `hspace` is the gap between panels
/// as a fraction of one panel's height.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Layout {
    pub width: u32,
    pub height: u32,
    pub top: f64,
    pub bottom: f64,
    pub left: f64,
    pub right: f64,
    pub hspace: f64,
}

impl Default for Layout {
    fn default() -> Self {
        Self { width: 1200, height: 900, top: 0.95, bottom: 0.05, left: 0.06, right: 0.88, hspace: 0.2 }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct LegendEntry {
    pub label: String,
    pub color: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    pub label: String,
    pub color: &'static str,
    pub points: Vec<(f64, f64)>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Panel {
    pub title: String,
    pub y_label: String,
    pub series: Vec<Series>,
    pub x_scale: LogScale,
    pub y_scale: LogScale,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Figure {
    pub layout: Layout,
    pub panels: Vec<Panel>,
    pub legend: Vec<LegendEntry>,
}

impl Figure {
    /// Replace the y-axis label of every panel.
    pub fn set_y_label(&mut self, label: &str) {
        for panel in &mut self.panels {
            panel.y_label = label.to_string();
        }
    }
}

fn build_panel(data: &Dataset, title: String, algos: &[LegendEntry], metric: Metric) -> Panel {
    let mut series = Vec::with_capacity(algos.len());
    for entry in algos {
        let mut points = Vec::new();
        for (chars, y) in data.series(&entry.label, metric) {
            let x = f64::from(chars);
            if plottable(x) && plottable(y) {
                points.push((x, y));
            } else {
                log::debug!("chart: {title}: dropping {}@{chars}={y} (not on a log axis)", entry.label);
            }
        }
        series.push(Series { label: entry.label.clone(), color: entry.color, points });
    }
    let x_scale = LogScale::fit(series.iter().flat_map(|s| s.points.iter().map(|p| p.0)))
        .unwrap_or_default();
    let y_scale = LogScale::fit(series.iter().flat_map(|s| s.points.iter().map(|p| p.1)))
        .unwrap_or_default();
    Panel { title, y_label: metric.axis_label().to_string(), series, x_scale, y_scale }
}

/// Build the three-panel figure for rows at `offset`.
///
/// Algorithm labels and colors come from the whole dataset so every panel
/// and the legend agree even when a panel lacks some algorithm.
pub fn build_figure(data: &Dataset, offset: u8, metric: Metric, layout: Layout) -> Figure {
    let legend: Vec<LegendEntry> = data
        .algorithms()
        .into_iter()
        .enumerate()
        .map(|(i, label)| LegendEntry { label, color: PALETTE[i % PALETTE.len()] })
        .collect();
    let part = data.with_offset(offset).partition_by_input();
    let panels = PANEL_ORDER
        .iter()
        .map(|&input| {
            let title = format!("{} (offset={offset})", input.title());
            build_panel(part.get(input), title, &legend, metric)
        })
        .collect();
    Figure { layout, panels, legend }
}
