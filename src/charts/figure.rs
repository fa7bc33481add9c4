use plotters::style::RGBColor;

use crate::results::{Grouping, Metric, MetricStats, ResultTable};

use super::palette::ColorMap;
use super::scale::AxisRange;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeriesPoint {
    pub size: f64,
    pub stats: MetricStats,
}

impl SeriesPoint {
    fn is_plottable(&self) -> bool {
        let positive = |value: f64| value.is_finite() && value > 0.0;
        positive(self.size) && positive(self.stats.mean)
    }
}

/// One container's line within a panel.
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    pub label: String,
    pub color: RGBColor,
    pub points: Vec<SeriesPoint>,
}

impl Series {
    /// `(size, mean)` pairs a log-log axis can show, in row order.
    #[must_use]
    pub fn line(&self) -> Vec<(f64, f64)> {
        self.points
            .iter()
            .filter(|point| point.is_plottable())
            .map(|point| (point.size, point.stats.mean))
            .collect()
    }

    /// Outline of the confidence band: upper edge left to right, then the lower edge
    /// back. Lower edges are clamped into `y_range` since log axes cannot show them
    /// at or below zero.
    #[must_use]
    pub fn band(&self, y_range: AxisRange) -> Vec<(f64, f64)> {
        let plottable: Vec<&SeriesPoint> = self
            .points
            .iter()
            .filter(|point| point.is_plottable())
            .collect();
        let upper = plottable
            .iter()
            .map(|point| (point.size, y_range.clamp(point.stats.upper())));
        let lower = plottable
            .iter()
            .rev()
            .map(|point| (point.size, y_range.clamp(point.stats.lower())));
        upper.chain(lower).collect()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Panel {
    pub metric: Metric,
    pub series: Vec<Series>,
    pub y_range: AxisRange,
}

impl Panel {
    #[must_use]
    pub const fn title(&self) -> &'static str {
        self.metric.title()
    }
}

/// Everything the renderer draws: one panel per metric, sharing `x_range`.
#[derive(Debug, Clone, PartialEq)]
pub struct Figure {
    pub title: String,
    pub x_range: AxisRange,
    pub panels: Vec<Panel>,
}

/// Lays out the three metric panels for `table`.
#[must_use]
pub fn build_figure(
    table: &ResultTable,
    grouping: &Grouping,
    colors: &ColorMap,
    title: &str,
) -> Figure {
    let x_range = AxisRange::fit_log(grouping.sizes.iter().copied());
    let panels = Metric::ALL
        .iter()
        .map(|&metric| build_panel(table, grouping, colors, metric))
        .collect();

    Figure {
        title: title.to_owned(),
        x_range,
        panels,
    }
}

fn build_panel(
    table: &ResultTable,
    grouping: &Grouping,
    colors: &ColorMap,
    metric: Metric,
) -> Panel {
    let series: Vec<Series> = grouping
        .containers
        .iter()
        .map(|container| Series {
            label: container.clone(),
            color: colors.color_of(container).unwrap_or(plotters::style::BLACK),
            points: table
                .rows_for(container)
                .map(|row| SeriesPoint {
                    size: row.size,
                    stats: row.stats(metric),
                })
                .collect(),
        })
        .collect();

    let y_range = AxisRange::fit_log(series.iter().flat_map(|line| {
        line.points.iter().flat_map(|point| {
            [point.stats.lower(), point.stats.mean, point.stats.upper()]
        })
    }));

    Panel {
        metric,
        series,
        y_range,
    }
}
