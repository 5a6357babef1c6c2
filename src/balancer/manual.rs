use tracing::{debug, warn};

use super::greedy::{balance_phases, calculate_port_load, least_loaded, update_phase_loads};
use crate::domain::{MainpowerConfig, PhaseId, Port};
use crate::error::{DistributionError, Result};

/// Moves one circuit to `target`, as a drag-and-drop would.
///
/// The move is refused when `target` already holds its share of channels
/// (`total_ports / phase count`); `config` is never modified. A successful
/// move turns automatic balancing off so the placement sticks.
pub fn move_port(
    config: &MainpowerConfig,
    ports: &[Port],
    voltage: f64,
    port_id: &str,
    target: PhaseId,
) -> Result<MainpowerConfig> {
    let target_phase = config
        .phase(target)
        .ok_or(DistributionError::PhaseNotFound(target))?;

    let source = config.phase_of(port_id);
    if source.is_none() && !ports.iter().any(|port| port.id == port_id) {
        return Err(DistributionError::PortNotFound(port_id.to_string()));
    }
    if source == Some(target) {
        return Ok(config.clone());
    }

    let capacity = config.channel_capacity();
    if target_phase.port_ids.len() >= capacity {
        warn!(
            port = port_id,
            phase = %target,
            capacity,
            "move rejected, phase channel capacity reached"
        );
        return Err(DistributionError::ChannelCapacityExceeded {
            phase: target,
            capacity,
        });
    }

    let mut moved = config.clone();
    for phase in moved.phases.iter_mut() {
        phase.port_ids.retain(|id| id != port_id);
        if phase.id == target {
            phase.port_ids.push(port_id.to_string());
        }
    }
    moved.auto_balance = false;
    debug!(port = port_id, from = ?source, to = %target, "moved circuit");

    Ok(update_phase_loads(&moved, ports, voltage))
}

/// Brings the leg assignment in line with a changed circuit list.
///
/// With automatic balancing everything is reassigned. Otherwise deleted
/// circuits are dropped, existing placements stay, and new circuits go to
/// the least loaded leg.
pub fn sync_ports(config: &MainpowerConfig, ports: &[Port], voltage: f64) -> MainpowerConfig {
    if config.auto_balance {
        return balance_phases(ports, voltage, config);
    }

    let mut synced = config.clone();
    for phase in synced.phases.iter_mut() {
        phase
            .port_ids
            .retain(|id| ports.iter().any(|port| &port.id == id));
    }
    let mut synced = update_phase_loads(&synced, ports, voltage);

    let unplaced: Vec<&Port> = ports
        .iter()
        .filter(|port| synced.phase_of(&port.id).is_none())
        .collect();
    for port in unplaced {
        let Some(idx) = least_loaded(&synced.phases) else {
            break;
        };
        let phase = &mut synced.phases[idx];
        phase.current_load += calculate_port_load(port, voltage);
        phase.port_ids.push(port.id.clone());
        debug!(port = %port.id, phase = %phase.id, "placed new circuit");
    }

    if synced.is_under_provisioned(ports.len()) {
        warn!(
            total_ports = synced.total_ports,
            circuits = ports.len(),
            "more circuits than panel channels"
        );
    }
    synced
}
