use chrono::{Days, NaiveDate};
use common::{DateRange, DisplayRow, FilterSelection};
use tracing::{debug, trace};

/// A single stage of the display-row filtering pipeline.
pub trait RowFilter: Send + Sync {
    /// Short name used in trace output.
    fn name(&self) -> &'static str;

    /// Returns `true` when the row survives this stage.
    fn retain(&self, row: &DisplayRow) -> bool;
}

/// Keeps rows whose commodity matches exactly (case-sensitive).
pub struct CommodityFilter {
    commodity: String,
}

impl CommodityFilter {
    pub fn new(commodity: impl Into<String>) -> Self {
        Self {
            commodity: commodity.into(),
        }
    }
}

impl RowFilter for CommodityFilter {
    fn name(&self) -> &'static str {
        "commodity"
    }

    fn retain(&self, row: &DisplayRow) -> bool {
        row.commodity == self.commodity
    }
}

/// Keeps rows whose location matches exactly (case-sensitive).
pub struct LocationFilter {
    location: String,
}

impl LocationFilter {
    pub fn new(location: impl Into<String>) -> Self {
        Self {
            location: location.into(),
        }
    }
}

impl RowFilter for LocationFilter {
    fn name(&self) -> &'static str {
        "location"
    }

    fn retain(&self, row: &DisplayRow) -> bool {
        row.location == self.location
    }
}

/// Keeps rows whose commodity contains the search text, ignoring case.
pub struct SearchFilter {
    needle: String,
}

impl SearchFilter {
    pub fn new(text: &str) -> Self {
        Self {
            needle: text.to_lowercase(),
        }
    }
}

impl RowFilter for SearchFilter {
    fn name(&self) -> &'static str {
        "search"
    }

    fn retain(&self, row: &DisplayRow) -> bool {
        row.commodity.to_lowercase().contains(&self.needle)
    }
}

/// "Last N days" window. Only historical rows are narrowed; predicted rows pass.
pub struct RelativeDateFilter {
    cutoff: NaiveDate,
}

impl RelativeDateFilter {
    pub fn new(today: NaiveDate, days: u64) -> Self {
        let cutoff = today.checked_sub_days(Days::new(days)).unwrap_or(NaiveDate::MIN);
        Self { cutoff }
    }

    pub fn cutoff(&self) -> NaiveDate {
        self.cutoff
    }
}

impl RowFilter for RelativeDateFilter {
    fn name(&self) -> &'static str {
        "relative_date"
    }

    fn retain(&self, row: &DisplayRow) -> bool {
        !row.is_historical() || row.date >= self.cutoff
    }
}

/// Inclusive `[start, end]` window applied to every row.
pub struct CustomDateFilter {
    start: NaiveDate,
    end: NaiveDate,
}

impl CustomDateFilter {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }
}

impl RowFilter for CustomDateFilter {
    fn name(&self) -> &'static str {
        "custom_date"
    }

    fn retain(&self, row: &DisplayRow) -> bool {
        row.date >= self.start && row.date <= self.end
    }
}

/// Ordered list of filters applied to the concatenated rows.
pub struct FilterPipeline {
    filters: Vec<Box<dyn RowFilter>>,
}

impl FilterPipeline {
    pub fn new(filters: Vec<Box<dyn RowFilter>>) -> Self {
        Self { filters }
    }

    /// Builds the pipeline for a selection, evaluating relative ranges against `today`.
    pub fn from_selection(selection: &FilterSelection, today: NaiveDate) -> Self {
        let mut filters: Vec<Box<dyn RowFilter>> = Vec::new();

        if !selection.is_any_commodity() {
            filters.push(Box::new(CommodityFilter::new(selection.commodity.as_str())));
        }
        if !selection.is_any_location() {
            filters.push(Box::new(LocationFilter::new(selection.location.as_str())));
        }
        if !selection.search_text.is_empty() {
            filters.push(Box::new(SearchFilter::new(&selection.search_text)));
        }

        match selection.date_range {
            DateRange::All => {}
            DateRange::Last7 | DateRange::Last30 | DateRange::Last90 => {
                if let Some(days) = selection.date_range.lookback_days() {
                    filters.push(Box::new(RelativeDateFilter::new(today, days)));
                }
            }
            DateRange::Custom => {
                // Bounds are enforced by `validate_selection`; an incomplete
                // custom range restricts nothing.
                if let (Some(start), Some(end)) = (selection.custom_start, selection.custom_end) {
                    filters.push(Box::new(CustomDateFilter::new(start, end)));
                }
            }
        }

        Self::new(filters)
    }

    pub fn len(&self) -> usize {
        self.filters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    /// Runs every stage in order and returns the surviving rows.
    pub fn apply(&self, mut rows: Vec<DisplayRow>) -> Vec<DisplayRow> {
        for filter in &self.filters {
            let before = rows.len();
            rows.retain(|row| filter.retain(row));
            trace!(stage = filter.name(), before, after = rows.len(), "Applied row filter");
        }
        rows
    }
}

/// Computes the display rows for the given data and selection.
///
/// Historical rows come first, then predicted rows; after filtering the rows
/// are stably sorted by date so ties keep that relative order.
pub fn derive_display_rows(
    history: &[common::PricePoint],
    predictions: &[common::PredictionPoint],
    selection: &FilterSelection,
    today: NaiveDate,
) -> Vec<DisplayRow> {
    let rows = common::converters::rows_from_sources(history, predictions);
    let total = rows.len();

    let pipeline = FilterPipeline::from_selection(selection, today);
    let mut rows = pipeline.apply(rows);
    rows.sort_by_key(|row| row.date);

    debug!(
        total,
        displayed = rows.len(),
        stages = pipeline.len(),
        "Derived display rows"
    );
    rows
}
