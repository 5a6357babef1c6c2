//! Property tests for the load calculator and the phase balancer.

use proptest::prelude::*;
use std::collections::HashSet;

use load_planner::balancer::{balance_phases, calculate_balance_quality, update_phase_loads};
use load_planner::domain::{
    CalculationItem, Equipment, EquipmentCategory, EquipmentStatus, MainpowerConfig, Port, SystemType,
    VoltageRating,
};
use load_planner::electrical::{item_load, port_totals};

fn equipment(id: String, watts: f64, pf: Option<f64>) -> Equipment {
    Equipment {
        id,
        name: "Fixture".to_string(),
        brand: String::new(),
        model: String::new(),
        category: EquipmentCategory::Other,
        watts,
        voltage: VoltageRating::Volts(220.0),
        amperes: 0.0,
        power_factor: pf,
        quantity_owned: 0,
        status: EquipmentStatus::Active,
    }
}

fn port(id: String, lines: Vec<(f64, u32)>) -> Port {
    let items = lines
        .into_iter()
        .enumerate()
        .map(|(i, (watts, qty))| CalculationItem::new(equipment(format!("{}-{}", id, i), watts, None), qty))
        .collect();
    Port {
        id: id.clone(),
        name: id,
        abbreviation: "P".to_string(),
        color: String::new(),
        breaker_amps: 32.0,
        items,
    }
}

fn ports_strategy() -> impl Strategy<Value = Vec<Port>> {
    prop::collection::vec(prop::collection::vec((0.0f64..5000.0, 0u32..8), 0..4), 0..24).prop_map(|circuits| {
        circuits
            .into_iter()
            .enumerate()
            .map(|(i, lines)| port(format!("p{}", i), lines))
            .collect()
    })
}

fn system_type_strategy() -> impl Strategy<Value = SystemType> {
    prop_oneof![
        Just(SystemType::Single),
        Just(SystemType::TwoPhase),
        Just(SystemType::ThreePhase)
    ]
}

proptest! {
    #[test]
    fn single_unit_amps_match_formula(watts in 1.0f64..10000.0, volts in 90.0f64..480.0, pf in 0.05f64..=1.0) {
        let item = CalculationItem::new(equipment("e".to_string(), watts, Some(pf)), 1);
        let load = item_load(&item, volts);
        prop_assert!((load.amps - watts / (volts * pf)).abs() < 1e-9);

        let none = CalculationItem::new(equipment("e".to_string(), watts, Some(pf)), 0);
        let zero = item_load(&none, volts);
        prop_assert_eq!((zero.watts, zero.va, zero.amps), (0.0, 0.0, 0.0));
    }

    #[test]
    fn port_watts_are_order_independent(lines in prop::collection::vec((0.0f64..5000.0, 0u32..8), 0..10)) {
        let forward = port("p".to_string(), lines.clone());
        let mut reversed = forward.clone();
        reversed.items.reverse();

        let expected: f64 = lines.iter().map(|(w, q)| w * f64::from(*q)).sum();
        let a = port_totals(&forward, 220.0).watts;
        let b = port_totals(&reversed, 220.0).watts;
        prop_assert!((a - expected).abs() < 1e-6);
        prop_assert!((a - b).abs() < 1e-6);
    }

    #[test]
    fn balancing_covers_every_port_exactly_once(ports in ports_strategy(), system_type in system_type_strategy()) {
        let config = MainpowerConfig::new(system_type, 24, None);
        let balanced = balance_phases(&ports, 220.0, &config);

        let assigned: Vec<&String> = balanced.phases.iter().flat_map(|p| p.port_ids.iter()).collect();
        let unique: HashSet<&String> = assigned.iter().copied().collect();
        prop_assert_eq!(assigned.len(), unique.len());

        let expected: HashSet<&String> = ports.iter().map(|p| &p.id).collect();
        prop_assert_eq!(unique, expected);
        prop_assert!(balanced.check_assignment(&ports).is_ok());
    }

    #[test]
    fn balancing_is_idempotent(ports in ports_strategy(), system_type in system_type_strategy()) {
        let config = MainpowerConfig::new(system_type, 24, None);
        let once = balance_phases(&ports, 220.0, &config);
        let twice = balance_phases(&ports, 220.0, &once);
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn cached_loads_match_recomputed_loads(ports in ports_strategy(), system_type in system_type_strategy()) {
        let config = MainpowerConfig::new(system_type, 24, None);
        let balanced = balance_phases(&ports, 220.0, &config);
        let refreshed = update_phase_loads(&balanced, &ports, 220.0);
        for (a, b) in balanced.phases.iter().zip(refreshed.phases.iter()) {
            prop_assert!((a.current_load - b.current_load).abs() < 1e-6);
            prop_assert_eq!(&a.port_ids, &b.port_ids);
        }
    }

    #[test]
    fn equal_ratios_score_zero(ratio in 0.0f64..2.0, caps in prop::collection::vec(1.0f64..200.0, 1..4)) {
        let mut config = MainpowerConfig::new(SystemType::ThreePhase, 12, None);
        config.phases.truncate(caps.len());
        for (phase, cap) in config.phases.iter_mut().zip(&caps) {
            phase.max_amps = *cap;
            phase.current_load = cap * ratio;
        }
        prop_assert!(calculate_balance_quality(&config).abs() < 1e-9);
    }
}
