use std::fmt::Write;

use common::PriceSummary;
use rust_decimal::Decimal;

use html_escape::encode_text;

/// "+2.68%", "-0.95%" or "n/a" when there is nothing to compare against.
pub fn format_change(change: Option<Decimal>) -> String {
    match change {
        Some(pct) if pct.is_sign_negative() && !pct.is_zero() => format!("{:.2}%", pct),
        Some(pct) => format!("+{:.2}%", pct.abs()),
        None => "n/a".to_string(),
    }
}

fn change_class(change: Option<Decimal>) -> &'static str {
    match change {
        Some(pct) if pct > Decimal::ZERO => "text-success",
        Some(pct) if pct < Decimal::ZERO => "text-error",
        _ => "text-neutral",
    }
}

/// One stat card per commodity and location.
pub fn render_summary_cards(summaries: &[PriceSummary]) -> String {
    if summaries.is_empty() {
        return String::new();
    }

    let mut html = String::from("<div class=\"grid grid-cols-1 md:grid-cols-3 gap-4 mb-6\">\n");
    for summary in summaries {
        let _ = write!(
            html,
            "  <div class=\"stats shadow bg-base-100\">\n    <div class=\"stat\">\n      \
             <div class=\"stat-title\">{} ({})</div>\n      \
             <div class=\"stat-value\">${:.2}</div>\n      \
             <div class=\"stat-desc {}\">{} since previous, as of {}</div>\n    </div>\n  </div>\n",
            encode_text(&summary.commodity),
            encode_text(&summary.location),
            summary.latest_price,
            change_class(summary.change_percent),
            format_change(summary.change_percent),
            summary.as_of,
        );
    }
    html.push_str("</div>\n");
    html
}
