use chrono::NaiveDate;
use rust_decimal::Decimal;

use common::{PredictionPoint, PricePoint};

pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

pub fn parse_date(value: &str) -> NaiveDate {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").unwrap()
}

pub fn price(day: &str, amount: i64, commodity: &str, location: &str) -> PricePoint {
    PricePoint::new(parse_date(day), Decimal::from(amount), commodity, location)
}

pub fn prediction(
    day: &str,
    predicted: i64,
    min: i64,
    max: i64,
    commodity: &str,
    location: &str,
) -> PredictionPoint {
    PredictionPoint {
        date: parse_date(day),
        predicted_price: Decimal::from(predicted),
        confidence_min: Decimal::from(min),
        confidence_max: Decimal::from(max),
        commodity: commodity.to_string(),
        location: location.to_string(),
    }
}

/// Weekly observations for the three demo series.
pub fn sample_history() -> Vec<PricePoint> {
    vec![
        price("2023-01-01", 100, "Wheat", "North Farm"),
        price("2023-01-08", 105, "Wheat", "North Farm"),
        price("2023-01-15", 110, "Wheat", "North Farm"),
        price("2023-01-22", 108, "Wheat", "North Farm"),
        price("2023-01-29", 112, "Wheat", "North Farm"),
        price("2023-02-05", 115, "Wheat", "North Farm"),
        price("2023-01-01", 200, "Corn", "South Farm"),
        price("2023-01-08", 202, "Corn", "South Farm"),
        price("2023-01-15", 198, "Corn", "South Farm"),
        price("2023-01-22", 205, "Corn", "South Farm"),
        price("2023-01-29", 210, "Corn", "South Farm"),
        price("2023-02-05", 208, "Corn", "South Farm"),
        price("2023-01-01", 150, "Soybeans", "East Farm"),
        price("2023-01-08", 155, "Soybeans", "East Farm"),
        price("2023-01-15", 152, "Soybeans", "East Farm"),
        price("2023-01-22", 158, "Soybeans", "East Farm"),
    ]
}

pub fn sample_predictions() -> Vec<PredictionPoint> {
    vec![
        prediction("2023-02-12", 118, 115, 121, "Wheat", "North Farm"),
        prediction("2023-02-19", 120, 117, 123, "Wheat", "North Farm"),
        prediction("2023-02-12", 212, 209, 215, "Corn", "South Farm"),
        prediction("2023-02-19", 215, 210, 220, "Corn", "South Farm"),
    ]
}
