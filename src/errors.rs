use thiserror::Error;

/// Error type that captures dashboard loading and validation failures.
#[derive(Debug, Error)]
pub enum DashboardError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("weekly spending must contain 7 days, found {0}")]
    InvalidWeek(usize),
    #[error("weekday {0} appears more than once in weekly spending")]
    DuplicateDay(String),
    #[error("{field} must not be negative (got {value})")]
    NegativeAmount { field: String, value: f64 },
    #[error("{field} must be a finite number")]
    NonFiniteAmount { field: String },
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
    #[error("palette `{0}` needs at least one colour")]
    EmptyPalette(&'static str),
    #[error("Configuration error: {0}")]
    Config(String),
}

pub type DashboardResult<T> = Result<T, DashboardError>;
