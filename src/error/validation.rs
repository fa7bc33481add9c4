use thiserror::Error;

#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Invalid number: {source}")]
    InvalidNumber {
        #[source]
        source: std::num::ParseIntError,
    },
    #[error("Invalid number '{value}': {source}")]
    InvalidFloat {
        value: String,
        #[source]
        source: std::num::ParseFloatError,
    },
    #[error("Value must be >= {min}.")]
    ValueTooSmall { min: u64 },
    #[error("Value must be a finite number > 0, got {value}.")]
    NotPositive { value: f64 },
    #[error("Invalid color '{value}'. Use '#rrggbb' or a 'tab:<name>' color.")]
    InvalidColor { value: String },
    #[error("Invalid delimiter '{value}'. Use a single ASCII character or 'tab'.")]
    InvalidDelimiter { value: String },
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
