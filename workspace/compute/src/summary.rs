use std::collections::BTreeMap;

use common::{PriceSummary, PricePoint};
use rust_decimal::Decimal;
use tracing::debug;

/// Latest price per (commodity, location), with the change against the
/// observation before it.
///
/// Results are ordered by commodity, then location. The change is `None` when
/// there is only one observation or the previous price is zero.
pub fn latest_prices(history: &[PricePoint]) -> Vec<PriceSummary> {
    let mut groups: BTreeMap<(&str, &str), Vec<&PricePoint>> = BTreeMap::new();
    for point in history {
        groups
            .entry((point.commodity.as_str(), point.location.as_str()))
            .or_default()
            .push(point);
    }

    let summaries: Vec<PriceSummary> = groups
        .into_iter()
        .filter_map(|((commodity, location), mut points)| {
            points.sort_by_key(|p| p.date);
            let latest = points.pop()?;
            let change_percent = points.last().and_then(|previous| {
                percent_change(previous.price, latest.price)
            });

            Some(PriceSummary {
                commodity: commodity.to_string(),
                location: location.to_string(),
                latest_price: latest.price,
                as_of: latest.date,
                change_percent,
            })
        })
        .collect();

    debug!(cards = summaries.len(), "Computed price summaries");
    summaries
}

/// Percentage change from `previous` to `current`, rounded to two decimal places.
pub fn percent_change(previous: Decimal, current: Decimal) -> Option<Decimal> {
    if previous.is_zero() {
        return None;
    }
    let change = (current - previous) / previous * Decimal::ONE_HUNDRED;
    Some(change.round_dp(2))
}
