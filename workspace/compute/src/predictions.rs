use chrono::{Days, NaiveDate};
use common::{FilterSelection, PredictionPoint, PredictionRequest};
use tracing::{debug, warn};

use crate::error::{Result, ValidationError};

/// Predictions target this many calendar days after today.
pub const PREDICTION_HORIZON_DAYS: u64 = 7;

/// Day a prediction requested on `today` is made for.
pub fn prediction_target_date(today: NaiveDate) -> NaiveDate {
    today
        .checked_add_days(Days::new(PREDICTION_HORIZON_DAYS))
        .unwrap_or(NaiveDate::MAX)
}

/// Builds the request body for a prediction, rejecting wildcard selections.
pub fn prediction_request(selection: &FilterSelection, today: NaiveDate) -> Result<PredictionRequest> {
    if selection.is_any_commodity() {
        warn!("Prediction requested without a specific commodity");
        return Err(ValidationError::WildcardSelection { field: "commodity" });
    }
    if selection.is_any_location() {
        warn!("Prediction requested without a specific location");
        return Err(ValidationError::WildcardSelection { field: "location" });
    }

    Ok(PredictionRequest {
        date: prediction_target_date(today),
        commodity: selection.commodity.clone(),
        location: selection.location.clone(),
    })
}

/// Appends `point` unless a prediction for the same (date, commodity, location)
/// is already present. Returns `true` when the point was added.
///
/// An existing prediction is never replaced.
pub fn merge_prediction(predictions: &mut Vec<PredictionPoint>, point: PredictionPoint) -> bool {
    if predictions.iter().any(|existing| existing.same_target(&point)) {
        debug!(
            date = %point.date,
            commodity = %point.commodity,
            location = %point.location,
            "Discarding duplicate prediction"
        );
        return false;
    }

    predictions.push(point);
    true
}
