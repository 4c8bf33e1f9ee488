use anyhow::Result;
use tracing::info;

use super::{CommandContext, FilterArgs};

/// Loads history, applies the filters and returns the display rows as JSON.
pub async fn rows(ctx: &CommandContext, filters: &FilterArgs) -> Result<String> {
    let dashboard = ctx.dashboard();
    dashboard.load_history().await?;
    dashboard.set_filter(filters.to_update()).await?;

    let snapshot = dashboard.snapshot();
    info!("{} rows match the selected filters", snapshot.rows.len());
    Ok(serde_json::to_string_pretty(&snapshot.rows)?)
}
