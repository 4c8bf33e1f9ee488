use rust_decimal::Decimal;

use common::{DateRange, FilterSelection, FilterUpdate};

use super::helpers::*;
use crate::testing::{TestScenario, TestScenarioBuilder};

/// Corn over the last 30 days of the demo data; predictions are not narrowed.
pub struct ScenarioLastThirtyDays {}

impl ScenarioLastThirtyDays {
    pub fn new() -> Self {
        Self {}
    }
}

impl TestScenarioBuilder for ScenarioLastThirtyDays {
    fn get_scenario(&self) -> TestScenario {
        let selection = crate::selection::apply_update(
            &FilterSelection::default(),
            FilterUpdate::new()
                .commodity("Corn")
                .date_range(DateRange::Last30),
        )
        .unwrap();

        let corn = |day: u32, month: u32, amount: i64| {
            (date(2023, month, day), "Corn", Some(Decimal::from(amount)), None::<Decimal>)
        };
        let predicted = |day: u32, amount: i64| {
            (date(2023, 2, day), "Corn", None::<Decimal>, Some(Decimal::from(amount)))
        };

        TestScenario {
            history: sample_history(),
            predictions: sample_predictions(),
            selection,
            // Cutoff 2023-01-07 drops the 2023-01-01 observation
            today: date(2023, 2, 6),
            expected: vec![
                corn(8, 1, 202),
                corn(15, 1, 198),
                corn(22, 1, 205),
                corn(29, 1, 210),
                corn(5, 2, 208),
                predicted(12, 212),
                predicted(19, 215),
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::run_and_assert_scenario;

    #[test]
    fn test_scenario_last_thirty_days() {
        run_and_assert_scenario(&ScenarioLastThirtyDays::new());
    }

    #[test]
    fn test_scenario_last_thirty_days_much_later() {
        // A year later nothing historical is recent, only predictions remain
        let mut scenario = ScenarioLastThirtyDays::new().get_scenario();
        scenario.today = date(2024, 2, 6);

        let rows = crate::filter::derive_display_rows(
            &scenario.history,
            &scenario.predictions,
            &scenario.selection,
            scenario.today,
        );
        assert_eq!(rows.len(), 2);
        assert!(rows.iter().all(|r| r.is_predicted()));
    }
}
