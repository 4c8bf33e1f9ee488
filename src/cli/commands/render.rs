use anyhow::Result;
use common::ChartType;
use frontend::render_page;
use tracing::{debug, warn};

use super::{CommandContext, FilterArgs};

/// Loads the dashboard and renders it as an HTML page.
///
/// Failures end up on the page (error box or validation banner) instead of
/// aborting the render.
pub async fn render(
    ctx: &CommandContext,
    filters: &FilterArgs,
    chart: ChartType,
    predict: bool,
) -> Result<String> {
    let dashboard = ctx.dashboard();

    if let Err(e) = dashboard.load_history().await {
        warn!("Rendering without fresh history: {}", e);
    }
    if let Err(e) = dashboard.set_filter(filters.to_update()).await {
        warn!("Ignoring filters: {}", e);
    }
    dashboard.set_chart_type(chart).await;

    if predict {
        match dashboard.predict_current().await {
            Ok(outcome) => debug!("Prediction outcome: {:?}", outcome),
            Err(e) => warn!("Prediction failed: {}", e),
        }
    }

    Ok(render_page(&dashboard.snapshot()))
}
