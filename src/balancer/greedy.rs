use itertools::Itertools;
use ordered_float::OrderedFloat;
use std::cmp::Reverse;
use tracing::{debug, info, warn};

use super::{BalanceStrategy, PortLoad};
use crate::domain::{MainpowerConfig, PhaseConfig, Port};
use crate::electrical::load::port_totals;

/// Largest-load-first greedy balancing (LPT scheduling).
///
/// Circuits are taken heaviest first and each one goes to the leg with the
/// lowest running load; ties go to the earlier leg. Equal loads keep their
/// input order, so re-running on the same input yields the same assignment.
#[derive(Debug, Clone, Copy, Default)]
pub struct LargestLoadFirst;

impl BalanceStrategy for LargestLoadFirst {
    fn assign(&self, loads: &[PortLoad], mut phases: Vec<PhaseConfig>) -> Vec<PhaseConfig> {
        let mut ordered: Vec<&PortLoad> = loads.iter().collect();
        // stable sort
        ordered.sort_by_key(|load| Reverse(OrderedFloat(load.amps)));

        for load in ordered {
            let Some(idx) = least_loaded(&phases) else {
                warn!(port = %load.port_id, "no phases to assign circuit to");
                continue;
            };
            let phase = &mut phases[idx];
            phase.current_load += load.amps;
            phase.port_ids.push(load.port_id.clone());
            debug!(port = %load.port_id, amps = load.amps, phase = %phase.id, "assigned circuit");
        }
        phases
    }

    fn name(&self) -> &'static str {
        "largest-load-first"
    }
}

/// Index of the first leg with the minimum running load
pub(crate) fn least_loaded(phases: &[PhaseConfig]) -> Option<usize> {
    phases
        .iter()
        .position_min_by_key(|phase| OrderedFloat(phase.current_load))
}

pub fn calculate_port_load(port: &Port, voltage: f64) -> f64 {
    port_totals(port, voltage).amps
}

pub fn port_loads(ports: &[Port], voltage: f64) -> Vec<PortLoad> {
    ports
        .iter()
        .map(|port| PortLoad {
            port_id: port.id.clone(),
            amps: calculate_port_load(port, voltage),
        })
        .collect()
}

/// Reassigns every circuit with [`LargestLoadFirst`].
pub fn balance_phases(ports: &[Port], voltage: f64, config: &MainpowerConfig) -> MainpowerConfig {
    balance_with(&LargestLoadFirst, ports, voltage, config)
}

/// Reassigns every circuit with the given strategy.
///
/// Leg ids, colors and capacities carry over from `config`; the result always
/// has `auto_balance` set.
pub fn balance_with(
    strategy: &dyn BalanceStrategy,
    ports: &[Port],
    voltage: f64,
    config: &MainpowerConfig,
) -> MainpowerConfig {
    let loads = port_loads(ports, voltage);
    let cleared = config.phases.iter().map(PhaseConfig::cleared).collect();
    let phases = strategy.assign(&loads, cleared);

    let summary: Vec<_> = phases.iter().map(|p| (p.id, p.current_load)).collect();
    info!(
        strategy = strategy.name(),
        circuits = loads.len(),
        loads = ?summary,
        "rebalanced phases"
    );

    MainpowerConfig {
        phases,
        auto_balance: true,
        ..config.clone()
    }
}

/// Recomputes every leg's load from the circuits already assigned to it.
pub fn update_phase_loads(config: &MainpowerConfig, ports: &[Port], voltage: f64) -> MainpowerConfig {
    let phases = config
        .phases
        .iter()
        .map(|phase| {
            let current_load = ports
                .iter()
                .filter(|port| phase.holds(&port.id))
                .map(|port| calculate_port_load(port, voltage))
                .sum();
            PhaseConfig {
                current_load,
                ..phase.clone()
            }
        })
        .collect();

    MainpowerConfig {
        phases,
        ..config.clone()
    }
}
