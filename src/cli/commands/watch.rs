use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use common::ChartType;
use frontend::render_page;
use tokio::time::{interval, MissedTickBehavior};
use tracing::{info, warn};

use super::{CommandContext, FilterArgs};

/// Keeps `output` up to date by refreshing the price history every `period`.
///
/// A failed refresh keeps the previous data and the page shows the error.
/// Stops after `count` writes when given, otherwise runs until interrupted.
/// Returns the number of pages written.
pub async fn watch(
    ctx: &CommandContext,
    filters: &FilterArgs,
    chart: ChartType,
    period: Duration,
    count: Option<u32>,
    output: &Path,
) -> Result<u32> {
    let dashboard = ctx.dashboard();
    if let Err(e) = dashboard.set_filter(filters.to_update()).await {
        warn!("Ignoring filters: {}", e);
    }
    dashboard.set_chart_type(chart).await;

    let mut ticker = interval(period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    let mut written = 0;
    loop {
        ticker.tick().await;
        if let Err(e) = dashboard.refresh().await {
            warn!("Refresh failed, keeping previous data: {}", e);
        }

        tokio::fs::write(output, render_page(&dashboard.snapshot()))
            .await
            .with_context(|| format!("Failed to write {}", output.display()))?;
        written += 1;
        info!("Dashboard written to {} (update {})", output.display(), written);

        if count.is_some_and(|max| written >= max) {
            return Ok(written);
        }
    }
}
