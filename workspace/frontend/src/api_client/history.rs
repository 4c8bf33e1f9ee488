use async_trait::async_trait;
use common::PricePoint;
use tracing::{debug, instrument};

use super::{ApiClient, ApiError};

/// Source of historical price observations.
#[async_trait]
pub trait HistoryProvider: Send + Sync {
    async fn fetch_history(&self) -> Result<Vec<PricePoint>, ApiError>;
}

#[async_trait]
impl HistoryProvider for ApiClient {
    /// GET the full price history. An empty array is a valid response.
    #[instrument(skip(self))]
    async fn fetch_history(&self) -> Result<Vec<PricePoint>, ApiError> {
        let url = self.settings().history_url();
        let points: Vec<PricePoint> = self.get(&url).await?;
        debug!("Fetched {} historical price points", points.len());
        Ok(points)
    }
}
