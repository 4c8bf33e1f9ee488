use anyhow::Result;
use common::FilterSelection;
use tracing::info;

use super::CommandContext;

/// Requests a single prediction and returns the forecast as JSON.
pub async fn predict(ctx: &CommandContext, commodity: &str, location: &str) -> Result<String> {
    let selection = FilterSelection {
        commodity: commodity.to_string(),
        location: location.to_string(),
        ..Default::default()
    };

    let outcome = ctx.dashboard().request_prediction(&selection).await?;
    let point = outcome.point();
    info!(
        "Predicted {} at {} on {}: {} ({} - {})",
        point.commodity,
        point.location,
        point.date,
        point.predicted_price,
        point.confidence_min,
        point.confidence_max
    );
    Ok(serde_json::to_string_pretty(point)?)
}
