use clap::Parser;
use plotters::style::RGBColor;

use super::defaults::{
    DEFAULT_HEIGHT_IN, DEFAULT_INPUT_PATH, DEFAULT_OUTPUT_PATH, DEFAULT_TITLE, DEFAULT_WIDTH_IN,
    default_dpi,
};
use super::parsers::{
    parse_bool_env, parse_color_arg, parse_color_pin, parse_delimiter, parse_positive_f64,
    parse_positive_u32,
};
use super::types::{Delimiter, PositiveU32};

#[derive(Debug, Parser, Clone)]
#[clap(
    version,
    about = "Renders container benchmark results (create/destroy, iterate, access) as log-log comparison charts with confidence bands."
)]
pub struct PlotArgs {
    /// Results file to read (delimited text with a header row)
    #[arg(long, short = 'i', default_value = DEFAULT_INPUT_PATH)]
    pub input: String,

    /// Image file to write; the extension selects the format
    #[arg(long, short = 'o', default_value = DEFAULT_OUTPUT_PATH)]
    pub output: String,

    /// Output resolution in dots per inch
    #[arg(long, default_value_t = default_dpi(), value_parser = parse_positive_u32)]
    pub dpi: PositiveU32,

    /// Supertitle drawn above the three panels
    #[arg(long, default_value = DEFAULT_TITLE)]
    pub title: String,

    /// Figure width in inches
    #[arg(long, default_value_t = DEFAULT_WIDTH_IN, value_parser = parse_positive_f64)]
    pub width: f64,

    /// Figure height in inches
    #[arg(long, default_value_t = DEFAULT_HEIGHT_IN, value_parser = parse_positive_f64)]
    pub height: f64,

    /// Column delimiter of the results file (single character or "tab")
    #[arg(long, default_value_t = Delimiter::COMMA, value_parser = parse_delimiter)]
    pub delimiter: Delimiter,

    /// Container color cycle, comma separated ('#rrggbb' or 'tab:<name>')
    #[arg(long, value_delimiter = ',', value_parser = parse_color_arg)]
    pub palette: Vec<RGBColor>,

    /// Pin one container's color, e.g. 'static_vector=tab:green' (repeatable)
    #[arg(long = "color", value_parser = parse_color_pin)]
    pub colors: Vec<(String, RGBColor)>,

    /// Print the results table before plotting
    #[arg(long)]
    pub summary: bool,

    /// Enable verbose logging (sets log level to debug unless overridden by BENCHPLOT_LOG/RUST_LOG)
    #[arg(long, short = 'v')]
    pub verbose: bool,

    /// Disable color output
    #[arg(long = "no-color", env = "NO_COLOR", value_parser = parse_bool_env)]
    pub no_color: bool,

    /// Path to config file (TOML/JSON). Defaults to ./benchplot.toml or ./benchplot.json if present.
    #[arg(long, short = 'c')]
    pub config: Option<String>,
}
