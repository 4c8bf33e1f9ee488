//! Pure derivation logic behind the price dashboard: filter selection
//! handling, display-row derivation, prediction merging and summary cards.

pub mod clock;
pub mod error;
pub mod filter;
pub mod predictions;
pub mod selection;
pub mod summary;

#[cfg(test)]
mod testing;

use std::sync::Arc;

use chrono::NaiveDate;

pub use clock::{Clock, FixedClock, SystemClock};
pub use error::{Result, ValidationError};
pub use filter::{FilterPipeline, RowFilter, derive_display_rows};
pub use predictions::{PREDICTION_HORIZON_DAYS, merge_prediction, prediction_request, prediction_target_date};
pub use selection::{apply_update, validate_selection};
pub use summary::latest_prices;

/// Returns the clock used by the dashboard.
///
/// A provided date pins "today" (useful for reproducible renders); otherwise
/// the local calendar date is used.
pub fn default_clock(today: Option<NaiveDate>) -> Arc<dyn Clock> {
    match today {
        Some(day) => Arc::new(FixedClock(day)),
        None => Arc::new(SystemClock),
    }
}
