use async_trait::async_trait;
use common::{PredictionPoint, PredictionRequest};
use tracing::{info, instrument, warn};

use super::{ApiClient, ApiError};

/// Source of single-point price forecasts.
#[async_trait]
pub trait PredictionProvider: Send + Sync {
    async fn predict(&self, request: &PredictionRequest) -> Result<PredictionPoint, ApiError>;
}

#[async_trait]
impl PredictionProvider for ApiClient {
    #[instrument(skip(self), fields(date = %request.date, commodity = %request.commodity, location = %request.location))]
    async fn predict(&self, request: &PredictionRequest) -> Result<PredictionPoint, ApiError> {
        let url = self.settings().predict_url();
        let point: PredictionPoint = self.post(&url, request).await?;
        check_confidence(&point)?;

        info!(
            "Prediction for {} at {} on {}: {}",
            point.commodity, point.location, point.date, point.predicted_price
        );
        Ok(point)
    }
}

fn check_confidence(point: &PredictionPoint) -> Result<(), ApiError> {
    if point.confidence_min > point.confidence_max {
        warn!(
            "Confidence bounds out of order: {} > {}",
            point.confidence_min, point.confidence_max
        );
        return Err(ApiError::Malformed(format!(
            "confidence_min {} exceeds confidence_max {}",
            point.confidence_min, point.confidence_max
        )));
    }
    Ok(())
}
