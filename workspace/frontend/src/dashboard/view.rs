use std::fmt::Write;

use common::FilterSelection;
use html_escape::encode_text;
use tracing::debug;

use super::chart::{build_plot, chart_title, ChartView};
use super::state::DashboardSnapshot;
use super::stats::render_summary_cards;

pub const PAGE_TITLE: &str = "Commodity Price Tracker";
pub const LOADING_MESSAGE: &str = "Loading price data...";
pub const NO_DATA_MESSAGE: &str = "No data available for the selected filters.";
pub const NO_DATA_HINT: &str = "Try adjusting your commodity, location, or date range selections.";

const PLOTLY_JS: &str = "https://cdn.plot.ly/plotly-2.12.1.min.js";
const CHART_DIV_ID: &str = "price-chart";

fn render_filters(selection: &FilterSelection) -> String {
    let mut items = vec![
        ("Commodity", selection.commodity.clone()),
        ("Location", selection.location.clone()),
        ("Date Range", selection.date_range.label().to_string()),
    ];
    if let (Some(start), Some(end)) = (selection.custom_start, selection.custom_end) {
        items.push(("Custom", format!("{} to {}", start, end)));
    }
    if !selection.search_text.is_empty() {
        items.push(("Search", selection.search_text.clone()));
    }

    let mut html = String::from("<ul class=\"filters\">\n");
    for (label, value) in items {
        let _ = writeln!(html, "  <li><strong>{}:</strong> {}</li>", label, encode_text(&value));
    }
    html.push_str("</ul>\n");
    html
}

/// Markup for the chart area only.
pub fn render_chart(snapshot: &DashboardSnapshot) -> String {
    match ChartView::from_snapshot(snapshot) {
        ChartView::Loading => format!("<div class=\"loading\">{}</div>\n", LOADING_MESSAGE),
        ChartView::Error(message) => format!(
            "<div class=\"alert alert-error\">{}</div>\n",
            encode_text(message)
        ),
        ChartView::Empty => format!(
            "<div class=\"no-data\"><p>{}</p><p>{}</p></div>\n",
            NO_DATA_MESSAGE, NO_DATA_HINT
        ),
        ChartView::Populated { chart_type, rows } => {
            let plot = build_plot(rows, chart_type, &chart_title(&snapshot.selection));
            plot.to_inline_html(Some(CHART_DIV_ID))
        }
    }
}

/// Standalone HTML document for a snapshot.
pub fn render_page(snapshot: &DashboardSnapshot) -> String {
    debug!(
        revision = snapshot.revision,
        rows = snapshot.rows.len(),
        "Rendering dashboard page"
    );

    let mut html = String::new();
    let _ = write!(
        html,
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <title>{title}</title>\n<script src=\"{js}\"></script>\n</head>\n<body>\n\
         <header><h1>{title}</h1></header>\n",
        title = PAGE_TITLE,
        js = PLOTLY_JS,
    );

    html.push_str("<section class=\"filters-panel\">\n");
    html.push_str(&render_filters(&snapshot.selection));
    if let Some(message) = &snapshot.validation {
        let _ = writeln!(
            html,
            "<div class=\"alert alert-warning\">{}</div>",
            encode_text(message)
        );
    }
    html.push_str("</section>\n");

    let _ = write!(
        html,
        "<section class=\"chart-panel\">\n<h2>{}</h2>\n{}</section>\n",
        encode_text(&chart_title(&snapshot.selection)),
        render_chart(snapshot),
    );

    html.push_str("<section class=\"summary-panel\">\n");
    html.push_str(&render_summary_cards(&snapshot.summaries));
    html.push_str("</section>\n</body>\n</html>\n");
    html
}
