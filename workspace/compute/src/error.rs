use chrono::NaiveDate;
use thiserror::Error;

/// Validation errors raised before any state change or network call.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Custom range whose start lies after its end
    #[error("Start date {start} cannot be after end date {end}")]
    InvalidCustomRange { start: NaiveDate, end: NaiveDate },

    /// Custom range selected without both bounds
    #[error("Custom date range requires both a start and an end date")]
    MissingCustomBounds,

    /// Prediction requested while an axis is still set to the wildcard
    #[error("Select a specific {field} to request a prediction")]
    WildcardSelection { field: &'static str },
}

/// Type alias for Result with ValidationError
pub type Result<T> = std::result::Result<T, ValidationError>;
