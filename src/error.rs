// src/error.rs
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("insufficient data: need at least {required} entries, got {actual}")]
    InsufficientData { required: usize, actual: usize },

    #[error("invalid input: {0}")]
    InputParse(String),

    #[error("entry count {requested} outside acceptable range [{min}, {max}]")]
    InvalidSelection {
        requested: usize,
        min: usize,
        max: usize,
    },

    #[error("invalid smoothing period: {0}")]
    InvalidPeriod(usize),

    #[error("misaligned series: {0}")]
    MisalignedSeries(String),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("chart rendering failed: {0}")]
    Render(String),
}

impl AppError {
    /// Process exit code for the failure kind. All load-time failures share
    /// one code so callers see a single "invalid input" status.
    pub fn exit_code(&self) -> i32 {
        match self {
            AppError::InsufficientData { .. } => 1,
            AppError::InputParse(_) => 1,
            AppError::InvalidSelection { .. } => 2,
            AppError::InvalidPeriod(_) => 1,
            AppError::MisalignedSeries(_) => 1,
            AppError::Config(_) => 1,
            AppError::Render(_) => 3,
        }
    }
}

impl From<csv::Error> for AppError {
    fn from(err: csv::Error) -> Self {
        AppError::InputParse(err.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::InputParse(err.to_string())
    }
}

impl From<chrono::ParseError> for AppError {
    fn from(err: chrono::ParseError) -> Self {
        AppError::InputParse(format!("date parsing error: {}", err))
    }
}

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        AppError::Config(err.to_string())
    }
}

// Convenience type alias for Result
pub type Result<T> = std::result::Result<T, AppError>;
