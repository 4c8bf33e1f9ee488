use rust_decimal::Decimal;

use common::{FilterSelection, FilterUpdate};

use super::helpers::*;
use crate::testing::{TestScenario, TestScenarioBuilder};

/// One Wheat observation, no predictions, commodity filter only.
pub struct ScenarioWheat {}

impl ScenarioWheat {
    pub fn new() -> Self {
        Self {}
    }
}

impl TestScenarioBuilder for ScenarioWheat {
    fn get_scenario(&self) -> TestScenario {
        let selection = crate::selection::apply_update(
            &FilterSelection::default(),
            FilterUpdate::new().commodity("Wheat"),
        )
        .unwrap();

        TestScenario {
            history: vec![price("2023-01-01", 100, "Wheat", "North Farm")],
            predictions: vec![],
            selection,
            today: date(2023, 2, 6),
            expected: vec![(date(2023, 1, 1), "Wheat", Some(Decimal::from(100)), None)],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::run_and_assert_scenario;

    #[test]
    fn test_scenario_wheat() {
        let rows = run_and_assert_scenario(&ScenarioWheat::new());

        assert_eq!(rows[0].location, "North Farm");
        assert_eq!(rows[0].confidence(), None);
    }
}
