//! CLI argument types and parsing helpers.
mod cli;
mod defaults;
mod parsers;
mod types;

#[cfg(test)]
pub(crate) mod test_support;

pub use cli::PlotArgs;
pub use types::{Delimiter, PositiveU32};

pub(crate) use defaults::DEFAULT_CONFIG_FILES;
#[cfg(test)]
pub(crate) use defaults::{
    DEFAULT_DPI, DEFAULT_HEIGHT_IN, DEFAULT_INPUT_PATH, DEFAULT_OUTPUT_PATH, DEFAULT_TITLE,
    DEFAULT_WIDTH_IN,
};
pub(crate) use parsers::parse_delimiter;
