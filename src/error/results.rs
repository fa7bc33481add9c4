use std::path::PathBuf;
use thiserror::Error;

/// Failures while turning a results file into a [`crate::results::ResultTable`].
#[derive(Debug, Error)]
pub enum ResultsError {
    #[error("Failed to open results file '{path}': {source}")]
    FileAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Results file '{path}' is missing column(s): {}", columns.join(", "))]
    MissingColumns { path: PathBuf, columns: Vec<String> },
    #[error("Results file '{path}' line {line}: invalid {column} value '{value}'.")]
    InvalidNumber {
        path: PathBuf,
        line: u64,
        column: &'static str,
        value: String,
    },
    #[error("Results file '{path}' line {line}: missing {column} value.")]
    MissingValue {
        path: PathBuf,
        line: u64,
        column: &'static str,
    },
    #[error("Malformed results file '{path}': {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
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
