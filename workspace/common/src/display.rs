use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A filtered, display-ready record handed to the chart renderer.
///
/// Historical rows carry `price`; predicted rows carry `predicted_price` and the
/// confidence bounds. Fields that do not apply are `None`, never zero.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DisplayRow {
    pub date: NaiveDate,
    #[serde(
        default,
        with = "rust_decimal::serde::float_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub price: Option<Decimal>,
    #[serde(
        default,
        with = "rust_decimal::serde::float_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub predicted_price: Option<Decimal>,
    #[serde(
        default,
        with = "rust_decimal::serde::float_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub confidence_min: Option<Decimal>,
    #[serde(
        default,
        with = "rust_decimal::serde::float_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub confidence_max: Option<Decimal>,
    pub commodity: String,
    pub location: String,
}

impl DisplayRow {
    pub fn is_historical(&self) -> bool {
        self.price.is_some()
    }

    pub fn is_predicted(&self) -> bool {
        self.predicted_price.is_some()
    }

    /// Confidence interval, when both bounds are present.
    pub fn confidence(&self) -> Option<(Decimal, Decimal)> {
        self.confidence_min.zip(self.confidence_max)
    }
}

/// Headline card for one commodity at one location.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PriceSummary {
    pub commodity: String,
    pub location: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub latest_price: Decimal,
    pub as_of: NaiveDate,
    /// Change against the previous observation, in percent (two decimal places).
    #[serde(
        default,
        with = "rust_decimal::serde::float_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub change_percent: Option<Decimal>,
}
