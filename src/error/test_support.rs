use super::{AppError, ChartError, ConfigError, ResultsError, ValidationError};

impl From<&'static str> for ValidationError {
    fn from(message: &'static str) -> Self {
        ValidationError::TestExpectation { message }
    }
}

impl From<String> for ValidationError {
    fn from(value: String) -> Self {
        ValidationError::TestExpectationValue {
            message: "Test expectation failed",
            value,
        }
    }
}

impl From<&'static str> for ConfigError {
    fn from(message: &'static str) -> Self {
        ConfigError::TestExpectation { message }
    }
}

impl From<String> for ConfigError {
    fn from(value: String) -> Self {
        ConfigError::TestExpectationValue {
            message: "Test expectation failed",
            value,
        }
    }
}

impl From<&'static str> for ResultsError {
    fn from(message: &'static str) -> Self {
        ResultsError::TestExpectation { message }
    }
}

impl From<String> for ResultsError {
    fn from(value: String) -> Self {
        ResultsError::TestExpectationValue {
            message: "Test expectation failed",
            value,
        }
    }
}

impl From<&'static str> for ChartError {
    fn from(message: &'static str) -> Self {
        ChartError::TestExpectation { message }
    }
}

impl From<String> for ChartError {
    fn from(value: String) -> Self {
        ChartError::TestExpectationValue {
            message: "Test expectation failed",
            value,
        }
    }
}

impl From<&'static str> for AppError {
    fn from(message: &'static str) -> Self {
        AppError::chart(message)
    }
}
