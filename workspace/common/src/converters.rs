//! Converter functions turning backend records into display rows
//!
//! Both historical and predicted records end up as [`DisplayRow`]s so the
//! filtering stage and the chart renderer can treat them uniformly.

use crate::display::DisplayRow;
use crate::prices::{PredictionPoint, PricePoint};

impl From<&PricePoint> for DisplayRow {
    fn from(point: &PricePoint) -> Self {
        DisplayRow {
            date: point.date,
            price: Some(point.price),
            predicted_price: None,
            confidence_min: None,
            confidence_max: None,
            commodity: point.commodity.clone(),
            location: point.location.clone(),
        }
    }
}

impl From<&PredictionPoint> for DisplayRow {
    fn from(point: &PredictionPoint) -> Self {
        DisplayRow {
            date: point.date,
            price: None,
            predicted_price: Some(point.predicted_price),
            confidence_min: Some(point.confidence_min),
            confidence_max: Some(point.confidence_max),
            commodity: point.commodity.clone(),
            location: point.location.clone(),
        }
    }
}

/// Concatenates historical rows followed by predicted rows, preserving the
/// relative order of each source.
pub fn rows_from_sources(history: &[PricePoint], predictions: &[PredictionPoint]) -> Vec<DisplayRow> {
    tracing::trace!(
        historical = history.len(),
        predicted = predictions.len(),
        "Converting sources to display rows"
    );

    history
        .iter()
        .map(DisplayRow::from)
        .chain(predictions.iter().map(DisplayRow::from))
        .collect()
}
