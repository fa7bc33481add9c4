use std::convert::Infallible;

use plotters::style::RGBColor;

use super::types::{Delimiter, PositiveU32};
use crate::charts::parse_color;
use crate::error::ValidationError;

pub(super) fn parse_positive_u32(s: &str) -> Result<PositiveU32, ValidationError> {
    s.parse::<PositiveU32>()
}

pub(crate) fn parse_positive_f64(s: &str) -> Result<f64, ValidationError> {
    let value: f64 = s
        .trim()
        .parse()
        .map_err(|err| ValidationError::InvalidFloat {
            value: s.to_owned(),
            source: err,
        })?;
    if !value.is_finite() || value <= 0.0 {
        return Err(ValidationError::NotPositive { value });
    }
    Ok(value)
}

pub(crate) fn parse_delimiter(s: &str) -> Result<Delimiter, ValidationError> {
    s.parse::<Delimiter>()
}

pub(super) fn parse_color_arg(s: &str) -> Result<RGBColor, ValidationError> {
    parse_color(s)
}

/// Parses `LABEL=COLOR`. Splits on the last `=`, so labels may contain one.
pub(crate) fn parse_color_pin(s: &str) -> Result<(String, RGBColor), ValidationError> {
    let Some((label, color)) = s.rsplit_once('=') else {
        return Err(ValidationError::InvalidColor {
            value: s.to_owned(),
        });
    };
    let label = label.trim();
    if label.is_empty() {
        return Err(ValidationError::InvalidColor {
            value: s.to_owned(),
        });
    }
    Ok((label.to_owned(), parse_color(color)?))
}

/// Any non-empty value other than an explicit "off" word counts as set, as `NO_COLOR` expects.
pub(crate) fn parse_bool_env(s: &str) -> Result<bool, Infallible> {
    let off = matches!(
        s.trim().to_ascii_lowercase().as_str(),
        "" | "0" | "false" | "no" | "n" | "off"
    );
    Ok(!off)
}
