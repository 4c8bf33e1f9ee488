pub mod chart;
pub mod stats;
pub mod state;
pub mod view;

use std::sync::Arc;

use common::{ChartType, FilterSelection, FilterUpdate, PredictionPoint};
use compute::{apply_update, merge_prediction, prediction_request, Clock, ValidationError};
use thiserror::Error;
use tokio::sync::{watch, Mutex};
use tracing::{debug, error, info, instrument, warn};

use crate::api_client::{ApiClient, ApiError, HistoryProvider, PredictionProvider};

pub use chart::ChartView;
pub use state::DashboardSnapshot;
use state::DashboardState;

pub const GENERIC_PREDICTION_ERROR: &str = "Failed to get prediction. Please try again.";

/// Failures surfaced by dashboard operations. None of them is fatal.
#[derive(Debug, Error)]
pub enum DashboardError {
    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("Network failure: {0}")]
    Network(#[from] ApiError),
}

/// Result of a successful prediction request.
#[derive(Debug, Clone, PartialEq)]
pub enum PredictionOutcome {
    /// The point was appended to the predicted data.
    Added(PredictionPoint),
    /// A prediction for the same date, commodity and location already existed.
    Duplicate(PredictionPoint),
}

impl PredictionOutcome {
    pub fn point(&self) -> &PredictionPoint {
        match self {
            PredictionOutcome::Added(point) | PredictionOutcome::Duplicate(point) => point,
        }
    }
}

/// Owns the dashboard state and applies every user action to it.
///
/// Network calls run outside the state lock; their results are applied,
/// the display rows recomputed and a snapshot published inside one critical
/// section.
pub struct Dashboard {
    history: Arc<dyn HistoryProvider>,
    predictions: Arc<dyn PredictionProvider>,
    clock: Arc<dyn Clock>,
    state: Mutex<DashboardState>,
    updates: watch::Sender<Arc<DashboardSnapshot>>,
}

impl Dashboard {
    pub fn new(
        history: Arc<dyn HistoryProvider>,
        predictions: Arc<dyn PredictionProvider>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        let mut state = DashboardState::default();
        let (updates, _) = watch::channel(Arc::new(state.snapshot()));

        Self {
            history,
            predictions,
            clock,
            state: Mutex::new(state),
            updates,
        }
    }

    /// Dashboard backed by a single HTTP client for both endpoints.
    pub fn with_client(client: ApiClient, clock: Arc<dyn Clock>) -> Self {
        let client = Arc::new(client);
        Self::new(client.clone(), client, clock)
    }

    /// Latest published snapshot.
    pub fn snapshot(&self) -> Arc<DashboardSnapshot> {
        self.updates.borrow().clone()
    }

    /// Receiver notified on every published change.
    pub fn subscribe(&self) -> watch::Receiver<Arc<DashboardSnapshot>> {
        self.updates.subscribe()
    }

    fn publish(&self, state: &mut DashboardState) {
        let snapshot = state.snapshot();
        debug!(
            revision = snapshot.revision,
            rows = snapshot.rows.len(),
            loading = snapshot.loading,
            "Publishing dashboard snapshot"
        );
        self.updates.send_replace(Arc::new(snapshot));
    }

    /// Fetches the full price history, replacing the resident data on success.
    ///
    /// On failure the previous history is kept and an error message is set.
    /// Returns the number of points loaded.
    #[instrument(skip(self))]
    pub async fn load_history(&self) -> Result<usize, DashboardError> {
        {
            let mut state = self.state.lock().await;
            state.begin_operation();
            state.history_error = None;
            self.publish(&mut state);
        }

        let result = self.history.fetch_history().await;

        let mut state = self.state.lock().await;
        state.end_operation();
        let outcome = match result {
            Ok(points) => {
                let count = points.len();
                info!("Loaded {} historical price points", count);
                state.replace_history(points);
                Ok(count)
            }
            Err(err) => {
                error!("Failed to load price history: {}", err);
                state.history_error = Some(format!("Failed to load price history: {}", err));
                Err(DashboardError::Network(err))
            }
        };
        state.recompute(self.clock.today());
        self.publish(&mut state);
        outcome
    }

    /// Reloads the history on user request.
    pub async fn refresh(&self) -> Result<usize, DashboardError> {
        info!("Manual refresh requested");
        self.load_history().await
    }

    /// Requests a forecast one week out for the selection's commodity and location.
    ///
    /// Wildcard selections are rejected without a network call. A returned
    /// point whose (date, commodity, location) is already present is discarded.
    #[instrument(skip(self, selection), fields(commodity = %selection.commodity, location = %selection.location))]
    pub async fn request_prediction(
        &self,
        selection: &FilterSelection,
    ) -> Result<PredictionOutcome, DashboardError> {
        let request = match prediction_request(selection, self.clock.today()) {
            Ok(request) => request,
            Err(err) => {
                let mut state = self.state.lock().await;
                state.validation = Some(err.to_string());
                self.publish(&mut state);
                return Err(err.into());
            }
        };

        {
            let mut state = self.state.lock().await;
            state.begin_operation();
            state.validation = None;
            self.publish(&mut state);
        }

        let result = self.predictions.predict(&request).await;

        let mut state = self.state.lock().await;
        state.end_operation();
        let outcome = match result {
            Ok(point) => {
                state.prediction_error = None;
                if merge_prediction(&mut state.predicted, point.clone()) {
                    info!("Added prediction for {} at {} on {}", point.commodity, point.location, point.date);
                    state.recompute(self.clock.today());
                    Ok(PredictionOutcome::Added(point))
                } else {
                    Ok(PredictionOutcome::Duplicate(point))
                }
            }
            Err(err) => {
                error!("Prediction request failed: {}", err);
                let message = err
                    .provider_message()
                    .map(str::to_string)
                    .unwrap_or_else(|| GENERIC_PREDICTION_ERROR.to_string());
                state.prediction_error = Some(message);
                Err(DashboardError::Network(err))
            }
        };
        self.publish(&mut state);
        outcome
    }

    /// Requests a prediction for whatever is currently selected.
    pub async fn predict_current(&self) -> Result<PredictionOutcome, DashboardError> {
        let selection = self.state.lock().await.selection.clone();
        self.request_prediction(&selection).await
    }

    /// Merges a partial filter update and recomputes the display rows.
    ///
    /// A rejected update leaves the selection unchanged and records the
    /// validation message in the snapshot.
    #[instrument(skip(self))]
    pub async fn set_filter(&self, update: FilterUpdate) -> Result<FilterSelection, DashboardError> {
        let mut state = self.state.lock().await;

        match apply_update(&state.selection, update) {
            Ok(selection) => {
                state.selection = selection.clone();
                state.validation = None;
                state.recompute(self.clock.today());
                self.publish(&mut state);
                Ok(selection)
            }
            Err(err) => {
                warn!("Filter update rejected: {}", err);
                state.validation = Some(err.to_string());
                self.publish(&mut state);
                Err(err.into())
            }
        }
    }

    pub async fn set_chart_type(&self, chart_type: ChartType) {
        let mut state = self.state.lock().await;
        if state.chart_type != chart_type {
            debug!("Chart type changed to {}", chart_type);
            state.chart_type = chart_type;
            self.publish(&mut state);
        }
    }
}
