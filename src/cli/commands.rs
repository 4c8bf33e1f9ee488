pub mod predict;
pub mod render;
pub mod rows;
pub mod watch;

use std::sync::Arc;

use chrono::NaiveDate;
use clap::builder::PossibleValuesParser;
use clap::Args;
use common::{DateRange, FilterUpdate, COMMODITIES, LOCATIONS};
use compute::Clock;
use frontend::{ApiClient, Dashboard};

pub use predict::predict;
pub use render::render;
pub use rows::rows;
pub use watch::watch;

/// Shared by every command: the API client and the clock.
pub struct CommandContext {
    pub client: ApiClient,
    pub clock: Arc<dyn Clock>,
}

impl CommandContext {
    pub fn dashboard(&self) -> Dashboard {
        Dashboard::with_client(self.client.clone(), self.clock.clone())
    }
}

/// Display filters accepted by `render`, `rows` and `watch`.
#[derive(Args, Debug, Clone, Default)]
pub struct FilterArgs {
    /// Commodity to show, or "All"
    #[arg(long, value_parser = PossibleValuesParser::new(COMMODITIES))]
    pub commodity: Option<String>,

    /// Location to show, or "All"
    #[arg(long, value_parser = PossibleValuesParser::new(LOCATIONS))]
    pub location: Option<String>,

    /// Date range: all, last7, last30, last90 or custom
    #[arg(long)]
    pub range: Option<DateRange>,

    /// First day of a custom range (YYYY-MM-DD)
    #[arg(long)]
    pub start: Option<NaiveDate>,

    /// Last day of a custom range (YYYY-MM-DD)
    #[arg(long)]
    pub end: Option<NaiveDate>,

    /// Case-insensitive text matched against the commodity name
    #[arg(long)]
    pub search: Option<String>,
}

impl FilterArgs {
    /// Partial update for the dashboard; bounds without `--range` imply a custom range.
    pub fn to_update(&self) -> FilterUpdate {
        let date_range = match (self.range, self.start.or(self.end)) {
            (Some(range), _) => Some(range),
            (None, Some(_)) => Some(DateRange::Custom),
            (None, None) => None,
        };

        FilterUpdate {
            commodity: self.commodity.clone(),
            location: self.location.clone(),
            date_range,
            custom_start: self.start,
            custom_end: self.end,
            search_text: self.search.clone(),
        }
    }
}
