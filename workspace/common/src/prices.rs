use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Historical price observation as returned by `GET /api/prices/history`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PricePoint {
    pub date: NaiveDate,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    pub commodity: String,
    pub location: String,
}

impl PricePoint {
    pub fn new(
        date: NaiveDate,
        price: Decimal,
        commodity: impl Into<String>,
        location: impl Into<String>,
    ) -> Self {
        Self {
            date,
            price,
            commodity: commodity.into(),
            location: location.into(),
        }
    }
}

/// Forecast returned by `POST /api/predict`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PredictionPoint {
    pub date: NaiveDate,
    #[serde(with = "rust_decimal::serde::float")]
    pub predicted_price: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub confidence_min: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub confidence_max: Decimal,
    pub commodity: String,
    pub location: String,
}

impl PredictionPoint {
    /// Key used to de-duplicate predictions: (date, commodity, location).
    pub fn key(&self) -> (NaiveDate, &str, &str) {
        (self.date, self.commodity.as_str(), self.location.as_str())
    }

    /// Returns `true` when both points forecast the same day, commodity and location.
    pub fn same_target(&self, other: &PredictionPoint) -> bool {
        self.key() == other.key()
    }
}

/// Request body for the prediction endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PredictionRequest {
    /// Target day, serialized as an ISO calendar date (`YYYY-MM-DD`).
    pub date: NaiveDate,
    pub commodity: String,
    pub location: String,
}

/// Error body returned by the backend on non-2xx responses.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ErrorResponse {
    pub error: String,
}
