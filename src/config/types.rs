use std::collections::BTreeMap;

use serde::Deserialize;

/// Keys accepted in `benchplot.toml` / `benchplot.json`.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    pub input: Option<String>,
    pub output: Option<String>,
    pub dpi: Option<u32>,
    pub title: Option<String>,
    pub delimiter: Option<String>,
    pub width: Option<f64>,
    pub height: Option<f64>,
    pub summary: Option<bool>,
    pub no_color: Option<bool>,
    /// Color cycle handed out to containers in first-seen order.
    pub palette: Option<Vec<String>>,
    /// Fixed colors per container label; these take precedence over the cycle.
    pub colors: Option<BTreeMap<String, String>>,
}
