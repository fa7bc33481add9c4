use thiserror::Error;

use super::{ChartError, ConfigError, ResultsError, ValidationError};

#[derive(Debug, Error)]
pub enum AppError {
    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
    #[error("CLI error: {source}")]
    Clap {
        #[from]
        source: clap::Error,
    },
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("Results error: {0}")]
    Results(#[from] ResultsError),
    #[error("Chart error: {0}")]
    Chart(#[from] ChartError),
}

pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    #[cfg(test)]
    pub fn validation<E>(error: E) -> Self
    where
        E: Into<ValidationError>,
    {
        error.into().into()
    }

    pub fn config<E>(error: E) -> Self
    where
        E: Into<ConfigError>,
    {
        error.into().into()
    }

    pub fn results<E>(error: E) -> Self
    where
        E: Into<ResultsError>,
    {
        error.into().into()
    }

    #[cfg(test)]
    pub fn chart<E>(error: E) -> Self
    where
        E: Into<ChartError>,
    {
        error.into().into()
    }
}
