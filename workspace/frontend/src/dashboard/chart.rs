use common::{ChartType, DisplayRow, FilterSelection};
use html_escape::encode_text;
use plotly::common::{DashType, HoverInfo, Line, Marker, Mode, Title};
use plotly::layout::{Axis, BarMode};
use plotly::{Bar, Layout, Plot, Scatter};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use tracing::trace;

use super::state::DashboardSnapshot;

pub const HISTORICAL_SERIES: &str = "Historical Price";
pub const PREDICTED_SERIES: &str = "Predicted Price";
pub const CONFIDENCE_MIN_SERIES: &str = "Confidence Min";
pub const CONFIDENCE_MAX_SERIES: &str = "Confidence Max";

const HISTORICAL_COLOR: &str = "#38BDF8";
const PREDICTED_COLOR: &str = "#F97316";
const CONFIDENCE_COLOR: &str = "#94A3B8";
const CHART_HEIGHT: usize = 450;

/// What the chart area shows, in priority order: loading, error, empty, chart.
#[derive(Debug, Clone, PartialEq)]
pub enum ChartView<'a> {
    Loading,
    Error(&'a str),
    Empty,
    Populated {
        chart_type: ChartType,
        rows: &'a [DisplayRow],
    },
}

impl<'a> ChartView<'a> {
    pub fn new(
        loading: bool,
        error: Option<&'a str>,
        chart_type: ChartType,
        rows: &'a [DisplayRow],
    ) -> Self {
        if loading {
            ChartView::Loading
        } else if let Some(message) = error {
            ChartView::Error(message)
        } else if rows.is_empty() {
            ChartView::Empty
        } else {
            ChartView::Populated { chart_type, rows }
        }
    }

    pub fn from_snapshot(snapshot: &'a DashboardSnapshot) -> Self {
        Self::new(
            snapshot.loading,
            snapshot.error.as_deref(),
            snapshot.chart_type,
            &snapshot.rows,
        )
    }
}

/// "Price Trends: Wheat in North Farm", with wildcards spelled out.
pub fn chart_title(selection: &FilterSelection) -> String {
    let commodity = if selection.is_any_commodity() {
        "All Commodities"
    } else {
        selection.commodity.as_str()
    };

    if selection.is_any_location() {
        format!("Price Trends: {}", commodity)
    } else {
        format!("Price Trends: {} in {}", commodity, selection.location)
    }
}

/// Tooltip lines for one point. Lines that do not apply to the row are omitted.
pub fn tooltip_lines(row: &DisplayRow) -> Vec<String> {
    let mut lines = vec![format!("Date: {}", row.date)];

    if let Some(price) = row.price {
        lines.push(format!("Price: ${}", price.normalize()));
    }
    if let Some(predicted) = row.predicted_price {
        lines.push(format!("Predicted: ${:.2}", predicted));
    }
    if let Some((min, max)) = row.confidence() {
        lines.push(format!("Confidence: ${:.2} - ${:.2}", min, max));
    }

    lines.push(format!("Commodity: {}", row.commodity));
    lines.push(format!("Location: {}", row.location));
    lines
}

/// Hover text as plotly expects it: escaped lines joined by `<br>`.
pub fn tooltip_text(row: &DisplayRow) -> String {
    tooltip_lines(row)
        .iter()
        .map(|line| encode_text(line).into_owned())
        .collect::<Vec<_>>()
        .join("<br>")
}

fn to_f64(value: Decimal) -> f64 {
    value.to_f64().unwrap_or(f64::NAN)
}

struct Series {
    dates: Vec<String>,
    values: Vec<f64>,
    hover: Vec<String>,
}

impl Series {
    fn collect(rows: &[DisplayRow], value: impl Fn(&DisplayRow) -> Option<Decimal>) -> Self {
        let mut series = Series {
            dates: Vec::new(),
            values: Vec::new(),
            hover: Vec::new(),
        };
        for row in rows {
            if let Some(v) = value(row) {
                series.dates.push(row.date.to_string());
                series.values.push(to_f64(v));
                series.hover.push(tooltip_text(row));
            }
        }
        series
    }
}

/// Builds the price chart for the given rows.
///
/// Both price series are always present (possibly empty). Line mode adds
/// dotted confidence traces when any row carries an interval.
pub fn build_plot(rows: &[DisplayRow], chart_type: ChartType, title: &str) -> Plot {
    let historical = Series::collect(rows, |r| r.price);
    let predicted = Series::collect(rows, |r| r.predicted_price);
    trace!(
        historical = historical.values.len(),
        predicted = predicted.values.len(),
        "Building {} chart",
        chart_type
    );

    let mut plot = Plot::new();
    let mut layout = Layout::new()
        .title(Title::with_text(title))
        .x_axis(Axis::new().title(Title::with_text("Date")))
        .y_axis(Axis::new().title(Title::with_text("Price")))
        .height(CHART_HEIGHT);

    match chart_type {
        ChartType::Line => {
            plot.add_trace(
                Scatter::new(historical.dates, historical.values)
                    .name(HISTORICAL_SERIES)
                    .mode(Mode::LinesMarkers)
                    .line(Line::new().color(HISTORICAL_COLOR).width(2.0))
                    .hover_text_array(historical.hover)
                    .hover_info(HoverInfo::Text),
            );
            plot.add_trace(
                Scatter::new(predicted.dates, predicted.values)
                    .name(PREDICTED_SERIES)
                    .mode(Mode::LinesMarkers)
                    .line(Line::new().color(PREDICTED_COLOR).width(2.0).dash(DashType::Dash))
                    .hover_text_array(predicted.hover)
                    .hover_info(HoverInfo::Text),
            );

            if rows.iter().any(|r| r.confidence().is_some()) {
                let bounds: [(&str, fn(&DisplayRow) -> Option<Decimal>); 2] = [
                    (CONFIDENCE_MIN_SERIES, |r| r.confidence_min),
                    (CONFIDENCE_MAX_SERIES, |r| r.confidence_max),
                ];
                for (name, bound) in bounds {
                    let series = Series::collect(rows, bound);
                    plot.add_trace(
                        Scatter::new(series.dates, series.values)
                            .name(name)
                            .mode(Mode::Lines)
                            .line(Line::new().color(CONFIDENCE_COLOR).width(1.0).dash(DashType::Dot))
                            .hover_info(HoverInfo::Skip),
                    );
                }
            }
        }
        ChartType::Bar => {
            plot.add_trace(
                Bar::new(historical.dates, historical.values)
                    .name(HISTORICAL_SERIES)
                    .marker(Marker::new().color(HISTORICAL_COLOR))
                    .hover_text_array(historical.hover)
                    .hover_info(HoverInfo::Text),
            );
            plot.add_trace(
                Bar::new(predicted.dates, predicted.values)
                    .name(PREDICTED_SERIES)
                    .marker(Marker::new().color(PREDICTED_COLOR))
                    .hover_text_array(predicted.hover)
                    .hover_info(HoverInfo::Text),
            );
            layout = layout.bar_mode(BarMode::Group);
        }
    }

    plot.set_layout(layout);
    plot
}
