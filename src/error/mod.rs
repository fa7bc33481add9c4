mod app;
mod chart;
mod config;
mod results;
mod validation;

#[cfg(test)]
mod test_support;

pub use app::{AppError, AppResult};
pub use chart::ChartError;
pub use config::ConfigError;
pub use results::ResultsError;
pub use validation::ValidationError;
