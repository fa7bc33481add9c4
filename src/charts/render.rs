use plotters::coord::Shift;
use plotters::coord::cartesian::Cartesian2d;
use plotters::coord::combinators::LogCoord;
use plotters::prelude::*;

use crate::error::ChartError;
use crate::results::Metric;

use super::figure::{Figure, Panel, Series};
use super::scale::{AxisRange, dash_segments, format_tick, log_ticks};

pub const X_LABEL: &str = "Container Size";
pub const Y_LABEL: &str = "Time (ms)";

const FONT_FAMILY: &str = "sans-serif";
const POINTS_PER_INCH: f64 = 72.0;
const MAX_CANVAS_SIDE: f64 = 32_768.0;
const BAND_OPACITY: f64 = 0.18;
const GRID_OPACITY: f64 = 0.5;
const GRID_COLOR: RGBColor = RGBColor(0xb0, 0xb0, 0xb0);

// Sizes below are in typographic points and scale with DPI.
const SUPTITLE_PT: f64 = 16.0;
const TITLE_PT: f64 = 12.0;
const LABEL_PT: f64 = 10.0;
const LINE_PT: f64 = 1.5;
const MARKER_RADIUS_PT: f64 = 3.0;
const GRID_PT: f64 = 0.8;
const DASH_PT: f64 = 3.7;
const DASH_GAP_PT: f64 = 1.6;
const TRIM_PAD_IN: f64 = 0.1;

type LogLogChart<'area, 'buffer> =
    ChartContext<'area, BitMapBackend<'buffer>, Cartesian2d<LogCoord<f64>, LogCoord<f64>>>;

/// Physical figure geometry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FigureStyle {
    pub dpi: u32,
    pub width_in: f64,
    pub height_in: f64,
}

impl FigureStyle {
    /// Canvas size in pixels.
    ///
    /// # Errors
    ///
    /// Returns [`ChartError::CanvasSize`] when either side is not finite, below one
    /// pixel, or larger than the renderer accepts.
    pub fn pixel_size(&self) -> Result<(u32, u32), ChartError> {
        let dpi = f64::from(self.dpi);
        let width = (self.width_in * dpi).round();
        let height = (self.height_in * dpi).round();
        let valid = |side: f64| side.is_finite() && (1.0..=MAX_CANVAS_SIDE).contains(&side);
        if !valid(width) || !valid(height) {
            return Err(ChartError::CanvasSize { width, height });
        }
        Ok((width as u32, height as u32))
    }

    /// Converts a length in points to whole pixels, never less than one.
    #[must_use]
    pub fn px(&self, points: f64) -> u32 {
        let pixels = (points * f64::from(self.dpi) / POINTS_PER_INCH).round();
        if pixels.is_finite() && pixels >= 1.0 {
            pixels.min(MAX_CANVAS_SIDE) as u32
        } else {
            1
        }
    }

    /// Whitespace kept around the content when trimming.
    #[must_use]
    pub fn trim_pad(&self) -> u32 {
        self.px(TRIM_PAD_IN * POINTS_PER_INCH)
    }
}

/// Draws `figure` onto `root`: supertitle on top, one panel per metric side by side.
///
/// # Errors
///
/// Returns [`ChartError::Render`] when plotters fails to draw.
pub fn draw_figure(
    root: &DrawingArea<BitMapBackend<'_>, Shift>,
    figure: &Figure,
    style: &FigureStyle,
) -> Result<(), ChartError> {
    root.fill(&WHITE)?;

    if figure.title.is_empty() {
        return draw_panels(root, figure, style);
    }
    let body = root.titled(&figure.title, (FONT_FAMILY, style.px(SUPTITLE_PT)))?;
    draw_panels(&body, figure, style)
}

fn draw_panels(
    body: &DrawingArea<BitMapBackend<'_>, Shift>,
    figure: &Figure,
    style: &FigureStyle,
) -> Result<(), ChartError> {
    let areas = body.split_evenly((1, Metric::ALL.len()));
    for (area, panel) in areas.iter().zip(&figure.panels) {
        draw_panel(area, panel, figure.x_range, style)?;
    }
    Ok(())
}

fn draw_panel(
    area: &DrawingArea<BitMapBackend<'_>, Shift>,
    panel: &Panel,
    x_range: AxisRange,
    style: &FigureStyle,
) -> Result<(), ChartError> {
    let mut chart = ChartBuilder::on(area)
        .caption(panel.title(), (FONT_FAMILY, style.px(TITLE_PT)))
        .margin(style.px(8.0))
        .x_label_area_size(style.px(36.0))
        .y_label_area_size(style.px(54.0))
        .build_cartesian_2d(
            (x_range.min..x_range.max).log_scale(),
            (panel.y_range.min..panel.y_range.max).log_scale(),
        )?;

    chart
        .configure_mesh()
        .disable_mesh()
        .x_desc(X_LABEL)
        .y_desc(Y_LABEL)
        .label_style((FONT_FAMILY, style.px(LABEL_PT)))
        .axis_desc_style((FONT_FAMILY, style.px(LABEL_PT)))
        .x_label_formatter(&|value| format_tick(*value))
        .y_label_formatter(&|value| format_tick(*value))
        .draw()?;

    draw_grid(&mut chart, x_range, panel.y_range, style)?;

    for series in &panel.series {
        draw_series(&mut chart, series, (x_range, panel.y_range), style)?;
    }

    if !panel.series.is_empty() {
        chart
            .configure_series_labels()
            .position(SeriesLabelPosition::UpperLeft)
            .margin(style.px(6.0))
            .legend_area_size(style.px(20.0))
            .label_font((FONT_FAMILY, style.px(LABEL_PT)))
            .border_style(BLACK.mix(0.3))
            .background_style(WHITE.mix(0.8))
            .draw()?;
    }
    Ok(())
}

/// Dashed grid on every major and minor log tick of both axes.
fn draw_grid(
    chart: &mut LogLogChart<'_, '_>,
    x_range: AxisRange,
    y_range: AxisRange,
    style: &FigureStyle,
) -> Result<(), ChartError> {
    let (width, height) = chart.plotting_area().dim_in_pixel();
    let line_style = GRID_COLOR
        .mix(GRID_OPACITY)
        .stroke_width(style.px(GRID_PT));
    let (dash, gap) = (style.px(DASH_PT), style.px(DASH_GAP_PT));

    let x_ticks = log_ticks(x_range);
    let y_ticks = log_ticks(y_range);
    let vertical = dash_segments(y_range.min, y_range.max, height, dash, gap);
    let horizontal = dash_segments(x_range.min, x_range.max, width, dash, gap);

    let mut lines = Vec::new();
    for &x in x_ticks.major.iter().chain(&x_ticks.minor) {
        lines.extend(
            vertical
                .iter()
                .map(|&(start, end)| PathElement::new(vec![(x, start), (x, end)], line_style)),
        );
    }
    for &y in y_ticks.major.iter().chain(&y_ticks.minor) {
        lines.extend(
            horizontal
                .iter()
                .map(|&(start, end)| PathElement::new(vec![(start, y), (end, y)], line_style)),
        );
    }
    chart.draw_series(lines)?;
    Ok(())
}

/// Confidence band, then the line, then its markers, so the line stays on top.
/// Points outside the fitted axes are pinned to the nearest edge.
fn draw_series(
    chart: &mut LogLogChart<'_, '_>,
    series: &Series,
    (x_range, y_range): (AxisRange, AxisRange),
    style: &FigureStyle,
) -> Result<(), ChartError> {
    let pin = |(x, y): (f64, f64)| (x_range.clamp(x), y_range.clamp(y));
    let color = series.color;
    let line_style = color.stroke_width(style.px(LINE_PT));
    let legend_width = i32::try_from(style.px(20.0)).unwrap_or(20);

    let band: Vec<(f64, f64)> = series.band(y_range).into_iter().map(pin).collect();
    if band.len() > 2 {
        chart.draw_series(std::iter::once(Polygon::new(
            band,
            color.mix(BAND_OPACITY).filled(),
        )))?;
    }

    let line: Vec<(f64, f64)> = series.line().into_iter().map(pin).collect();
    chart
        .draw_series(LineSeries::new(line.iter().copied(), line_style))?
        .label(series.label.as_str())
        .legend(move |(x, y)| {
            PathElement::new(vec![(x, y), (x.saturating_add(legend_width), y)], line_style)
        });

    let radius = style.px(MARKER_RADIUS_PT);
    chart.draw_series(
        line.iter()
            .map(|&point| Circle::new(point, radius, color.filled())),
    )?;
    Ok(())
}
