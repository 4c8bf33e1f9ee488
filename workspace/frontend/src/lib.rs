//! Dashboard controller, HTTP providers and HTML rendering for commodity prices.

pub mod api_client;
pub mod dashboard;
pub mod settings;

#[cfg(test)]
mod testing;

pub use api_client::{ApiClient, ApiError, HistoryProvider, PredictionProvider};
pub use dashboard::view::render_page;
pub use dashboard::{ChartView, Dashboard, DashboardError, DashboardSnapshot, PredictionOutcome};
pub use settings::AppSettings;
