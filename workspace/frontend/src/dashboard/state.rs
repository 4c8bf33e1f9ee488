use chrono::NaiveDate;
use common::{ChartType, DisplayRow, FilterSelection, PredictionPoint, PriceSummary, PricePoint};
use compute::{derive_display_rows, latest_prices};
use serde::Serialize;

/// Mutable dashboard data, only ever touched under the dashboard lock.
#[derive(Debug, Default)]
pub(crate) struct DashboardState {
    pub historical: Vec<PricePoint>,
    pub predicted: Vec<PredictionPoint>,
    pub selection: FilterSelection,
    pub chart_type: ChartType,
    pub history_error: Option<String>,
    pub prediction_error: Option<String>,
    pub validation: Option<String>,
    pub rows: Vec<DisplayRow>,
    pub summaries: Vec<PriceSummary>,
    pending: usize,
    revision: u64,
}

impl DashboardState {
    pub fn begin_operation(&mut self) {
        self.pending += 1;
    }

    pub fn end_operation(&mut self) {
        self.pending = self.pending.saturating_sub(1);
    }

    pub fn is_loading(&self) -> bool {
        self.pending > 0
    }

    pub fn replace_history(&mut self, points: Vec<PricePoint>) {
        self.summaries = latest_prices(&points);
        self.historical = points;
    }

    /// Re-derives the display rows from the current data and selection.
    pub fn recompute(&mut self, today: NaiveDate) {
        self.rows = derive_display_rows(&self.historical, &self.predicted, &self.selection, today);
    }

    /// Freezes the current state into a new revision.
    pub fn snapshot(&mut self) -> DashboardSnapshot {
        self.revision += 1;
        DashboardSnapshot {
            revision: self.revision,
            selection: self.selection.clone(),
            chart_type: self.chart_type,
            rows: self.rows.clone(),
            historical: self.historical.clone(),
            predicted: self.predicted.clone(),
            summaries: self.summaries.clone(),
            loading: self.is_loading(),
            error: self.history_error.clone().or_else(|| self.prediction_error.clone()),
            validation: self.validation.clone(),
        }
    }
}

/// Immutable view of the dashboard published to observers.
///
/// Every snapshot is internally consistent: `rows` is always derived from the
/// `historical`, `predicted` and `selection` carried alongside it.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSnapshot {
    /// Increases by one with every published change.
    pub revision: u64,
    pub selection: FilterSelection,
    pub chart_type: ChartType,
    pub rows: Vec<DisplayRow>,
    pub historical: Vec<PricePoint>,
    pub predicted: Vec<PredictionPoint>,
    pub summaries: Vec<PriceSummary>,
    pub loading: bool,
    /// Network failure shown in place of the chart. A failed history load
    /// takes precedence over a failed prediction.
    pub error: Option<String>,
    /// Last rejected filter or prediction input, shown next to the filters.
    pub validation: Option<String>,
}

impl Default for DashboardSnapshot {
    fn default() -> Self {
        DashboardState::default().snapshot()
    }
}
