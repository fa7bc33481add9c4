use std::collections::BTreeMap;

use clap::ArgMatches;
use clap::parser::ValueSource;
use plotters::style::RGBColor;

use crate::args::{PlotArgs, PositiveU32, parse_delimiter};
use crate::charts::parse_color;
use crate::error::{AppError, AppResult, ConfigError, ValidationError};

use super::types::ConfigFile;

/// Applies configuration values to CLI arguments. Values given on the command line win.
///
/// # Errors
///
/// Returns an error when a config value is out of range or cannot be parsed.
pub fn apply_config(args: &mut PlotArgs, matches: &ArgMatches, config: &ConfigFile) -> AppResult<()> {
    if !is_cli(matches, "input")
        && let Some(input) = config.input.clone()
    {
        args.input = input;
    }

    if !is_cli(matches, "output")
        && let Some(output) = config.output.clone()
    {
        args.output = output;
    }

    if !is_cli(matches, "title")
        && let Some(title) = config.title.clone()
    {
        args.title = title;
    }

    if !is_cli(matches, "dpi")
        && let Some(dpi) = config.dpi
    {
        args.dpi = PositiveU32::try_from(dpi).map_err(|err| invalid("dpi", err))?;
    }

    if !is_cli(matches, "width")
        && let Some(width) = config.width
    {
        args.width = ensure_positive_f64(width, "width")?;
    }

    if !is_cli(matches, "height")
        && let Some(height) = config.height
    {
        args.height = ensure_positive_f64(height, "height")?;
    }

    if !is_cli(matches, "delimiter")
        && let Some(delimiter) = config.delimiter.as_deref()
    {
        args.delimiter = parse_delimiter(delimiter).map_err(|err| invalid("delimiter", err))?;
    }

    if !is_cli(matches, "summary")
        && let Some(summary) = config.summary
    {
        args.summary = summary;
    }

    if !is_cli(matches, "no_color")
        && let Some(no_color) = config.no_color
    {
        args.no_color = no_color;
    }

    if !is_cli(matches, "palette")
        && let Some(palette) = config.palette.as_ref()
    {
        args.palette = parse_palette(palette)?;
    }

    if let Some(colors) = config.colors.as_ref() {
        args.colors = merge_pins(colors, std::mem::take(&mut args.colors))?;
    }

    Ok(())
}

fn is_cli(matches: &ArgMatches, name: &str) -> bool {
    matches.value_source(name) == Some(ValueSource::CommandLine)
}

fn invalid(field: &str, source: ValidationError) -> AppError {
    AppError::config(ConfigError::InvalidField {
        field: field.to_owned(),
        source,
    })
}

fn ensure_positive_f64(value: f64, field: &str) -> AppResult<f64> {
    if !value.is_finite() || value <= 0.0 {
        return Err(invalid(field, ValidationError::NotPositive { value }));
    }
    Ok(value)
}

fn parse_palette(entries: &[String]) -> AppResult<Vec<RGBColor>> {
    if entries.is_empty() {
        return Err(AppError::config(ConfigError::EmptyPalette));
    }
    let mut parsed = Vec::with_capacity(entries.len());
    for entry in entries {
        parsed.push(parse_color(entry).map_err(|err| invalid("palette", err))?);
    }
    Ok(parsed)
}

/// Config pins come first so a `--color` for the same label replaces them.
fn merge_pins(
    config: &BTreeMap<String, String>,
    cli: Vec<(String, RGBColor)>,
) -> AppResult<Vec<(String, RGBColor)>> {
    let mut merged = Vec::with_capacity(config.len().saturating_add(cli.len()));
    for (label, color) in config {
        if cli.iter().any(|(pinned, _)| pinned == label) {
            continue;
        }
        let color = parse_color(color).map_err(|err| invalid(&format!("colors.{}", label), err))?;
        merged.push((label.clone(), color));
    }
    merged.extend(cli);
    Ok(merged)
}
