use std::collections::BTreeMap;

use plotters::style::RGBColor;

use crate::error::ValidationError;

/// Matplotlib's `tab10` cycle, in order.
pub const TAB10: [(&str, RGBColor); 10] = [
    ("tab:blue", RGBColor(0x1f, 0x77, 0xb4)),
    ("tab:orange", RGBColor(0xff, 0x7f, 0x0e)),
    ("tab:green", RGBColor(0x2c, 0xa0, 0x2c)),
    ("tab:red", RGBColor(0xd6, 0x27, 0x28)),
    ("tab:purple", RGBColor(0x94, 0x67, 0xbd)),
    ("tab:brown", RGBColor(0x8c, 0x56, 0x4b)),
    ("tab:pink", RGBColor(0xe3, 0x77, 0xc2)),
    ("tab:gray", RGBColor(0x7f, 0x7f, 0x7f)),
    ("tab:olive", RGBColor(0xbc, 0xbd, 0x22)),
    ("tab:cyan", RGBColor(0x17, 0xbe, 0xcf)),
];

/// Parses `#rrggbb`, `rrggbb`, or a `tab:<name>` color.
///
/// # Errors
///
/// Returns [`ValidationError::InvalidColor`] for anything else.
pub fn parse_color(value: &str) -> Result<RGBColor, ValidationError> {
    let trimmed = value.trim();
    let invalid = || ValidationError::InvalidColor {
        value: value.to_owned(),
    };

    if let Some((_, color)) = TAB10
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(trimmed))
    {
        return Ok(*color);
    }

    let hex = trimmed.strip_prefix('#').unwrap_or(trimmed);
    if hex.len() != 6 || !hex.is_ascii() {
        return Err(invalid());
    }
    let channel = |range: std::ops::Range<usize>| {
        hex.get(range)
            .and_then(|digits| u8::from_str_radix(digits, 16).ok())
            .ok_or_else(invalid)
    };
    Ok(RGBColor(channel(0..2)?, channel(2..4)?, channel(4..6)?))
}

/// Color cycle plus per-label overrides.
#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
    cycle: Vec<RGBColor>,
    pinned: BTreeMap<String, RGBColor>,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            cycle: TAB10.iter().map(|(_, color)| *color).collect(),
            pinned: BTreeMap::new(),
        }
    }
}

impl Palette {
    /// Builds a palette; an empty `cycle` falls back to `tab10`.
    #[must_use]
    pub fn new(cycle: Vec<RGBColor>, pinned: BTreeMap<String, RGBColor>) -> Self {
        if cycle.is_empty() {
            return Self {
                pinned,
                ..Self::default()
            };
        }
        Self { cycle, pinned }
    }

    /// Maps each container to a color. Unpinned labels take the cycle entry at
    /// their position, wrapping when there are more containers than colors.
    #[must_use]
    pub fn assign(&self, containers: &[String]) -> ColorMap {
        let entries = containers
            .iter()
            .enumerate()
            .map(|(position, label)| {
                let color = self.pinned.get(label).copied().unwrap_or_else(|| {
                    position
                        .checked_rem(self.cycle.len())
                        .and_then(|slot| self.cycle.get(slot))
                        .copied()
                        .unwrap_or(TAB10[0].1)
                });
                (label.clone(), color)
            })
            .collect();
        ColorMap { entries }
    }

    #[must_use]
    pub fn cycle_len(&self) -> usize {
        self.cycle.len()
    }
}

/// Container label to color, one entry per distinct container.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ColorMap {
    entries: Vec<(String, RGBColor)>,
}

impl ColorMap {
    #[must_use]
    pub fn color_of(&self, label: &str) -> Option<RGBColor> {
        self.entries
            .iter()
            .find(|(entry, _)| entry == label)
            .map(|(_, color)| *color)
    }
}
