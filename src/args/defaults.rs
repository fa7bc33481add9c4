use super::types::PositiveU32;

pub(crate) const DEFAULT_INPUT_PATH: &str = "results.txt";
pub(crate) const DEFAULT_OUTPUT_PATH: &str = "benchmark_blog_plot.png";
pub(crate) const DEFAULT_TITLE: &str = "static_vector vs vector<unique_ptr>";
pub(crate) const DEFAULT_DPI: u32 = 200;
pub(crate) const DEFAULT_WIDTH_IN: f64 = 18.0;
pub(crate) const DEFAULT_HEIGHT_IN: f64 = 5.0;

/// Config filenames picked up from the working directory when `--config` is absent.
pub(crate) const DEFAULT_CONFIG_FILES: [&str; 2] = ["benchplot.toml", "benchplot.json"];

pub(crate) fn default_dpi() -> PositiveU32 {
    PositiveU32::new(DEFAULT_DPI).unwrap_or(PositiveU32::MIN)
}
