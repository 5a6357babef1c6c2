//! # Electrical Unit Calculator
//!
//! Converts equipment ratings into load figures for a single line, a
//! circuit and a whole plan. Everything here is plain arithmetic over
//! simplified single-phase-equivalent values:
//!
//! - `watts = equipment.watts × quantity`
//! - `va    = watts / pf`
//! - `amps  = watts / (V_system × pf)`
//!
//! A missing or zero power factor counts as 1. Circuits carry no voltage of
//! their own; the caller always supplies the system voltage.

use serde::{Deserialize, Serialize};
use std::iter::Sum;
use std::ops::Add;

use crate::domain::{CalculationItem, Port};

/// Active power, apparent power and current of a load
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct LoadMetrics {
    pub watts: f64,
    pub va: f64,
    pub amps: f64,
}

impl LoadMetrics {
    pub fn zero() -> Self {
        Self::default()
    }
}

impl Add for LoadMetrics {
    type Output = LoadMetrics;

    fn add(self, rhs: LoadMetrics) -> LoadMetrics {
        LoadMetrics {
            watts: self.watts + rhs.watts,
            va: self.va + rhs.va,
            amps: self.amps + rhs.amps,
        }
    }
}

impl Sum for LoadMetrics {
    fn sum<I: Iterator<Item = LoadMetrics>>(iter: I) -> LoadMetrics {
        iter.fold(LoadMetrics::zero(), Add::add)
    }
}

/// Load of one calculation line at the given system voltage
pub fn item_load(item: &CalculationItem, system_voltage: f64) -> LoadMetrics {
    if item.quantity == 0 {
        return LoadMetrics::zero();
    }
    let pf = item.equipment.effective_power_factor();
    let watts = item.equipment.watts * f64::from(item.quantity);
    let amps = if system_voltage > 0.0 {
        watts / (system_voltage * pf)
    } else {
        0.0
    };
    LoadMetrics {
        watts,
        va: watts / pf,
        amps,
    }
}

pub fn port_totals(port: &Port, system_voltage: f64) -> LoadMetrics {
    port.items
        .iter()
        .map(|item| item_load(item, system_voltage))
        .sum()
}

pub fn aggregate_totals(ports: &[Port], system_voltage: f64) -> LoadMetrics {
    ports
        .iter()
        .map(|port| port_totals(port, system_voltage))
        .sum()
}

/// Current used for breaker sizing in the quick calculator.
///
/// Three-phase systems simply split the single-phase-equivalent current
/// evenly over the three legs.
pub fn per_phase_amps(total_amps: f64, three_phase: bool) -> f64 {
    if three_phase {
        total_amps / 3.0
    } else {
        total_amps
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::circuit::fixtures::port_with_amps;
    use crate::domain::equipment::fixtures::equipment;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_item_load_with_power_factor() {
        let item = CalculationItem::new(equipment("mh", 1200.0, 220.0, Some(0.8)), 2);
        let load = item_load(&item, 220.0);
        assert_eq!(load.watts, 2400.0);
        assert!(approx(load.va, 3000.0));
        assert!(approx(load.amps, 2400.0 / (220.0 * 0.8)));
    }

    #[test]
    fn test_zero_quantity_is_zero_load() {
        let item = CalculationItem::new(equipment("mh", 1200.0, 220.0, Some(0.8)), 0);
        assert_eq!(item_load(&item, 220.0), LoadMetrics::zero());
    }

    #[test]
    fn test_zero_power_factor_treated_as_unity() {
        let item = CalculationItem::new(equipment("amp", 500.0, 127.0, Some(0.0)), 1);
        let load = item_load(&item, 127.0);
        assert!(load.va.is_finite());
        assert!(load.amps.is_finite());
        assert_eq!(load.va, 500.0);
    }

    #[test]
    fn test_zero_system_voltage_does_not_overflow() {
        let item = CalculationItem::new(equipment("amp", 500.0, 127.0, None), 1);
        assert_eq!(item_load(&item, 0.0).amps, 0.0);
    }

    #[test]
    fn test_port_and_aggregate_totals() {
        let ports = vec![port_with_amps("p1", 10.0), port_with_amps("p2", 2.5)];
        let p1 = port_totals(&ports[0], 100.0);
        assert_eq!(p1.watts, 1000.0);
        assert!(approx(p1.amps, 10.0));

        let total = aggregate_totals(&ports, 100.0);
        assert_eq!(total.watts, 1250.0);
        assert!(approx(total.amps, 12.5));
        assert!(approx(total.va, 1250.0));
    }

    #[test]
    fn test_port_voltage_comes_from_caller() {
        let port = port_with_amps("p1", 10.0);
        assert!(approx(port_totals(&port, 200.0).amps, 5.0));
    }

    #[test]
    fn test_per_phase_amps() {
        assert_eq!(per_phase_amps(30.0, true), 10.0);
        assert_eq!(per_phase_amps(30.0, false), 30.0);
    }
}
