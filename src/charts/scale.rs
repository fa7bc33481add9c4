//! Log-axis helpers: autoscaled ranges, tick positions, and dash layout.

/// Fraction of the data span added on each side, in log space.
const LOG_MARGIN: f64 = 0.05;
/// Half-width, in decades, given to a range holding a single value.
const SINGLE_VALUE_HALF_SPAN: f64 = 0.5;
/// Widest data span, in decades, an axis is fitted to.
pub const MAX_LOG_SPAN: f64 = 60.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisRange {
    pub min: f64,
    pub max: f64,
}

impl Default for AxisRange {
    fn default() -> Self {
        Self {
            min: 1.0,
            max: 10.0,
        }
    }
}

impl AxisRange {
    /// Fits a log axis around the positive finite `values`; others are ignored.
    /// Data spanning more than [`MAX_LOG_SPAN`] decades is centred on its median
    /// decade and cut to that width; callers clamp points outside the result.
    #[must_use]
    pub fn fit_log<I>(values: I) -> Self
    where
        I: IntoIterator<Item = f64>,
    {
        let mut logs: Vec<f64> = values
            .into_iter()
            .filter(|value| value.is_finite() && *value > 0.0)
            .map(f64::log10)
            .collect();
        logs.sort_by(f64::total_cmp);
        let (Some(&low), Some(&high)) = (logs.first(), logs.last()) else {
            return Self::default();
        };

        let (low, high) = if high - low > MAX_LOG_SPAN {
            let median = logs.get(logs.len() / 2).copied().unwrap_or(low);
            let half = MAX_LOG_SPAN / 2.0;
            (median - half, median + half)
        } else {
            (low, high)
        };
        let span = high - low;
        let (low, high) = if span <= f64::EPSILON {
            (low - SINGLE_VALUE_HALF_SPAN, high + SINGLE_VALUE_HALF_SPAN)
        } else {
            (low - span * LOG_MARGIN, high + span * LOG_MARGIN)
        };
        Self {
            min: 10f64.powf(low),
            max: 10f64.powf(high),
        }
    }

    #[must_use]
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }

    #[must_use]
    pub fn clamp(&self, value: f64) -> f64 {
        if value.is_nan() {
            return self.min;
        }
        value.clamp(self.min, self.max)
    }
}

/// Tick positions inside `range`: powers of ten (`major`) and their 2..9 multiples (`minor`).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LogTicks {
    pub major: Vec<f64>,
    pub minor: Vec<f64>,
}

#[must_use]
pub fn log_ticks(range: AxisRange) -> LogTicks {
    let mut ticks = LogTicks::default();
    if !(range.min > 0.0 && range.max >= range.min && range.max.is_finite()) {
        return ticks;
    }
    let first = range.min.log10().floor() as i32;
    let last = range.max.log10().ceil() as i32;
    for exponent in first..=last {
        let decade = 10f64.powi(exponent);
        for step in 1..=9u8 {
            let value = decade * f64::from(step);
            if !range.contains(value) {
                continue;
            }
            if step == 1 {
                ticks.major.push(value);
            } else {
                ticks.minor.push(value);
            }
        }
    }
    ticks
}

/// Splits the log interval `[low, high]`, drawn over `pixels`, into dash segments of
/// `dash` pixels separated by `gap` pixels. Log spacing maps linearly to pixels, so
/// equal log steps give equal on-screen dashes.
#[must_use]
pub fn dash_segments(low: f64, high: f64, pixels: u32, dash: u32, gap: u32) -> Vec<(f64, f64)> {
    if !(low > 0.0 && high > low) || pixels == 0 {
        return Vec::new();
    }
    let period = dash.saturating_add(gap).max(1);
    let (log_low, log_high) = (low.log10(), high.log10());
    let per_pixel = (log_high - log_low) / f64::from(pixels);

    let mut segments = Vec::new();
    let mut offset = 0u32;
    while offset < pixels {
        let end = offset.saturating_add(dash.max(1)).min(pixels);
        let start_value = 10f64.powf(log_low + per_pixel * f64::from(offset));
        let end_value = 10f64.powf(log_low + per_pixel * f64::from(end));
        segments.push((start_value, end_value.min(high)));
        offset = offset.saturating_add(period);
    }
    segments
}

/// Tick label for a log axis: plain decimals in `[1e-3, 1e4)`, scientific otherwise.
#[must_use]
pub fn format_tick(value: f64) -> String {
    let magnitude = value.abs();
    if magnitude != 0.0 && !(1e-3..1e4).contains(&magnitude) {
        return format!("{:e}", value);
    }
    let rounded = (value * 1e6).round() / 1e6;
    format!("{}", rounded)
}
