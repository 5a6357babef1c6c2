use itertools::{Itertools, MinMaxResult};
use serde::{Deserialize, Serialize};
use strum::Display;
use tracing::warn;

use crate::domain::{MainpowerConfig, PhaseId};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PhaseOverload {
    pub has_overload: bool,
    pub overloaded_phase_ids: Vec<PhaseId>,
}

/// Legs whose load exceeds their capacity. Overload is a warning, never a reject.
pub fn check_phase_overload(config: &MainpowerConfig) -> PhaseOverload {
    let overloaded_phase_ids: Vec<PhaseId> = config
        .phases
        .iter()
        .filter(|phase| phase.is_overloaded())
        .map(|phase| phase.id)
        .collect();

    for phase in config.phases.iter().filter(|p| p.is_overloaded()) {
        warn!(
            phase = %phase.id,
            load_amps = phase.current_load,
            max_amps = phase.max_amps,
            "phase overloaded"
        );
    }

    PhaseOverload {
        has_overload: !overloaded_phase_ids.is_empty(),
        overloaded_phase_ids,
    }
}

/// Spread between the most and least loaded leg, in percentage points of
/// capacity. Lower is better; a single leg or none scores 0.
pub fn calculate_balance_quality(config: &MainpowerConfig) -> f64 {
    match config
        .phases
        .iter()
        .map(|phase| phase.load_percent())
        .minmax_by(|a, b| a.total_cmp(b))
    {
        MinMaxResult::NoElements | MinMaxResult::OneElement(_) => 0.0,
        MinMaxResult::MinMax(min, max) => max - min,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
pub enum BalanceLabel {
    Excellent,
    Good,
    Fair,
    Unbalanced,
}

impl BalanceLabel {
    pub fn from_quality(points: f64) -> Self {
        if points <= 10.0 {
            BalanceLabel::Excellent
        } else if points <= 25.0 {
            BalanceLabel::Good
        } else if points <= 40.0 {
            BalanceLabel::Fair
        } else {
            BalanceLabel::Unbalanced
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::SystemType;
    use rstest::rstest;

    fn config_with_loads(loads: &[(f64, f64)]) -> MainpowerConfig {
        let mut config = MainpowerConfig::new(SystemType::ThreePhase, 12, None);
        config.phases.truncate(loads.len());
        for (phase, &(load, max)) in config.phases.iter_mut().zip(loads) {
            phase.current_load = load;
            phase.max_amps = max;
        }
        config
    }

    #[test]
    fn test_overload_detection() {
        let config = config_with_loads(&[(70.0, 63.0), (63.0, 63.0), (10.0, 63.0)]);
        let result = check_phase_overload(&config);
        assert!(result.has_overload);
        assert_eq!(result.overloaded_phase_ids, vec![PhaseId::A]);

        let fine = config_with_loads(&[(10.0, 63.0), (20.0, 63.0)]);
        assert!(!check_phase_overload(&fine).has_overload);
    }

    #[test]
    fn test_quality_zero_for_equal_ratios() {
        let config = config_with_loads(&[(20.0, 40.0), (10.0, 20.0), (50.0, 100.0)]);
        assert_eq!(calculate_balance_quality(&config), 0.0);
    }

    #[test]
    fn test_quality_spread() {
        let config = config_with_loads(&[(50.0, 100.0), (20.0, 100.0), (35.0, 100.0)]);
        assert!((calculate_balance_quality(&config) - 30.0).abs() < 1e-9);
    }

    #[test]
    fn test_quality_single_or_no_phase() {
        assert_eq!(calculate_balance_quality(&config_with_loads(&[(40.0, 63.0)])), 0.0);
        assert_eq!(calculate_balance_quality(&config_with_loads(&[])), 0.0);
    }

    #[test]
    fn test_quality_zero_capacity_is_not_finite() {
        let config = config_with_loads(&[(10.0, 0.0), (10.0, 63.0)]);
        assert!(!calculate_balance_quality(&config).is_finite());
    }

    #[rstest]
    #[case(0.0, BalanceLabel::Excellent)]
    #[case(10.0, BalanceLabel::Excellent)]
    #[case(10.01, BalanceLabel::Good)]
    #[case(25.0, BalanceLabel::Good)]
    #[case(40.0, BalanceLabel::Fair)]
    #[case(40.5, BalanceLabel::Unbalanced)]
    #[case(f64::NAN, BalanceLabel::Unbalanced)]
    fn test_balance_label(#[case] points: f64, #[case] expected: BalanceLabel) {
        assert_eq!(BalanceLabel::from_quality(points), expected);
    }
}
