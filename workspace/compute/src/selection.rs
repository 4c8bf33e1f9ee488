use common::{DateRange, FilterSelection, FilterUpdate};
use tracing::{debug, instrument, warn};

use crate::error::{Result, ValidationError};

/// Merges a partial update into the current selection.
///
/// Any date range other than `Custom` drops the custom bounds. The merged
/// selection is validated before being returned; on error the caller keeps
/// its current selection untouched.
#[instrument(level = "debug", skip(current))]
pub fn apply_update(current: &FilterSelection, update: FilterUpdate) -> Result<FilterSelection> {
    let mut next = current.clone();

    if let Some(commodity) = update.commodity {
        next.commodity = commodity;
    }
    if let Some(location) = update.location {
        next.location = location;
    }
    if let Some(date_range) = update.date_range {
        next.date_range = date_range;
    }
    if let Some(start) = update.custom_start {
        next.custom_start = Some(start);
    }
    if let Some(end) = update.custom_end {
        next.custom_end = Some(end);
    }
    if let Some(text) = update.search_text {
        next.search_text = text;
    }

    if next.date_range != DateRange::Custom {
        next.custom_start = None;
        next.custom_end = None;
    }

    if let Err(err) = validate_selection(&next) {
        warn!(%err, "Rejected filter update");
        return Err(err);
    }

    debug!(?next, "Filter selection updated");
    Ok(next)
}

/// Checks the custom range bounds of a selection.
pub fn validate_selection(selection: &FilterSelection) -> Result<()> {
    if selection.date_range != DateRange::Custom {
        return Ok(());
    }

    match (selection.custom_start, selection.custom_end) {
        (Some(start), Some(end)) if start > end => {
            Err(ValidationError::InvalidCustomRange { start, end })
        }
        (Some(_), Some(_)) => Ok(()),
        _ => Err(ValidationError::MissingCustomBounds),
    }
}
