use rust_decimal::Decimal;

use common::{FilterSelection, FilterUpdate};

use super::helpers::*;
use crate::testing::{TestScenario, TestScenarioBuilder};

/// Lower-case search combined with a custom window that spans a prediction.
pub struct ScenarioCustomSearch {}

impl ScenarioCustomSearch {
    pub fn new() -> Self {
        Self {}
    }
}

impl TestScenarioBuilder for ScenarioCustomSearch {
    fn get_scenario(&self) -> TestScenario {
        let selection = crate::selection::apply_update(
            &FilterSelection::default(),
            FilterUpdate::new()
                .search_text("whe")
                .custom_range(date(2023, 1, 29), date(2023, 2, 12)),
        )
        .unwrap();

        TestScenario {
            history: sample_history(),
            predictions: sample_predictions(),
            selection,
            today: date(2023, 2, 6),
            expected: vec![
                (date(2023, 1, 29), "Wheat", Some(Decimal::from(112)), None),
                (date(2023, 2, 5), "Wheat", Some(Decimal::from(115)), None),
                (date(2023, 2, 12), "Wheat", None, Some(Decimal::from(118))),
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::run_and_assert_scenario;

    #[test]
    fn test_scenario_custom_search() {
        run_and_assert_scenario(&ScenarioCustomSearch::new());
    }
}
