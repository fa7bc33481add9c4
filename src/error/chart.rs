use plotters::prelude::{BitMapBackend, DrawingAreaErrorKind, DrawingBackend};
use std::path::PathBuf;
use thiserror::Error;

type PlottersError = DrawingAreaErrorKind<<BitMapBackend<'static> as DrawingBackend>::ErrorType>;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("Plotting error: {source}")]
    Render {
        #[from]
        source: PlottersError,
    },
    #[error("Failed to create output directory '{path}': {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to write chart '{path}': {message}")]
    Write { path: PathBuf, message: String },
    #[error("Figure size {width}x{height} px is out of range.")]
    CanvasSize { width: f64, height: f64 },
    #[cfg(test)]
    #[error("Test expectation failed: {message}")]
    TestExpectation { message: &'static str },
    #[cfg(test)]
    #[error("Test expectation failed: {message}: {value}")]
    TestExpectationValue {
        message: &'static str,
        value: String,
    },
}
