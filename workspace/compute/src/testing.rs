pub mod helpers;
pub mod scenario_custom_search;
pub mod scenario_last_thirty_days;
pub mod scenario_wheat;

pub use scenario_custom_search::ScenarioCustomSearch;
pub use scenario_last_thirty_days::ScenarioLastThirtyDays;
pub use scenario_wheat::ScenarioWheat;

use chrono::NaiveDate;
use rust_decimal::Decimal;

use common::{DisplayRow, FilterSelection, PredictionPoint, PricePoint};

use crate::filter::derive_display_rows;

/// Expected rows of a scenario in the following schema
/// (date, commodity, historical price, predicted price)
pub type AssertResult = Vec<(NaiveDate, &'static str, Option<Decimal>, Option<Decimal>)>;

/// Prepared test scenario.
pub struct TestScenario {
    pub history: Vec<PricePoint>,
    pub predictions: Vec<PredictionPoint>,
    pub selection: FilterSelection,
    pub today: NaiveDate,
    pub expected: AssertResult,
}

/// Trait for building test scenarios.
pub trait TestScenarioBuilder {
    fn get_scenario(&self) -> TestScenario;
}

/// Derives the display rows of a scenario and compares them with its expectation.
pub fn run_and_assert_scenario(builder: &dyn TestScenarioBuilder) -> Vec<DisplayRow> {
    let scenario = builder.get_scenario();

    let rows = derive_display_rows(
        &scenario.history,
        &scenario.predictions,
        &scenario.selection,
        scenario.today,
    );

    let actual: Vec<(NaiveDate, &str, Option<Decimal>, Option<Decimal>)> = rows
        .iter()
        .map(|r| (r.date, r.commodity.as_str(), r.price, r.predicted_price))
        .collect();
    assert_eq!(actual, scenario.expected, "derived rows differ from expectation");

    rows
}
