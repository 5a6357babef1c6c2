use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, IntoEnumIterator};

use crate::balancer::limits::phase_max_amps;
use crate::error::{DistributionError, Result};

use super::Port;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Display, EnumIter)]
pub enum PhaseId {
    A,
    B,
    C,
}

impl PhaseId {
    /// Default display color of each leg
    pub fn default_color(&self) -> &'static str {
        match self {
            PhaseId::A => "#ef4444",
            PhaseId::B => "#3b82f6",
            PhaseId::C => "#eab308",
        }
    }
}

/// Supply topology of the mainpower panel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum SystemType {
    Single,
    TwoPhase,
    #[default]
    ThreePhase,
}

impl SystemType {
    pub fn phase_count(&self) -> usize {
        match self {
            SystemType::Single => 1,
            SystemType::TwoPhase => 2,
            SystemType::ThreePhase => 3,
        }
    }
}

/// Optional generator feeding the panel
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratorConfig {
    pub enabled: bool,
    #[serde(rename = "powerKVA", alias = "powerKva")]
    pub power_kva: f64,
    #[serde(default)]
    pub is_three_phase: bool,
    pub voltage: f64,
}

/// One leg of the supply and the circuits hanging off it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PhaseConfig {
    pub id: PhaseId,
    pub color: String,
    pub max_amps: f64,
    /// Cached sum of the assigned circuits' current (A)
    #[serde(default)]
    pub current_load: f64,
    #[serde(default)]
    pub port_ids: Vec<String>,
}

impl PhaseConfig {
    pub fn new(id: PhaseId, max_amps: f64) -> Self {
        Self {
            id,
            color: id.default_color().to_string(),
            max_amps,
            current_load: 0.0,
            port_ids: Vec::new(),
        }
    }

    /// Load as a percentage of capacity. Not guarded against `max_amps == 0`.
    pub fn load_percent(&self) -> f64 {
        self.current_load / self.max_amps * 100.0
    }

    pub fn is_overloaded(&self) -> bool {
        self.current_load > self.max_amps
    }

    pub fn holds(&self, port_id: &str) -> bool {
        self.port_ids.iter().any(|id| id == port_id)
    }

    /// Same leg with no circuits and no load
    pub fn cleared(&self) -> Self {
        Self {
            current_load: 0.0,
            port_ids: Vec::new(),
            ..self.clone()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MainpowerConfig {
    pub enabled: bool,
    pub system_type: SystemType,
    /// Channel count of the panel
    pub total_ports: usize,
    pub phases: Vec<PhaseConfig>,
    #[serde(default)]
    pub auto_balance: bool,
}

impl MainpowerConfig {
    /// Enabled panel with empty legs sized from the generator, or the fixed fallback
    pub fn new(system_type: SystemType, total_ports: usize, generator: Option<&GeneratorConfig>) -> Self {
        let max_amps = phase_max_amps(system_type, generator);
        let phases = PhaseId::iter()
            .take(system_type.phase_count())
            .map(|id| PhaseConfig::new(id, max_amps))
            .collect();
        Self {
            enabled: true,
            system_type,
            total_ports,
            phases,
            auto_balance: true,
        }
    }

    pub fn phase(&self, id: PhaseId) -> Option<&PhaseConfig> {
        self.phases.iter().find(|p| p.id == id)
    }

    pub fn phase_of(&self, port_id: &str) -> Option<PhaseId> {
        self.phases.iter().find(|p| p.holds(port_id)).map(|p| p.id)
    }

    /// Even per-phase share of the panel's channels
    pub fn channel_capacity(&self) -> usize {
        match self.phases.len() {
            0 => 0,
            n => self.total_ports / n,
        }
    }

    pub fn is_under_provisioned(&self, port_count: usize) -> bool {
        self.total_ports < port_count
    }

    /// Verifies that no circuit sits on two legs and, when the panel is
    /// enabled, that the legs cover exactly the given circuits.
    pub fn check_assignment(&self, ports: &[Port]) -> Result<()> {
        let mut seen: Vec<&str> = Vec::new();
        for id in self.phases.iter().flat_map(|p| p.port_ids.iter()) {
            if seen.contains(&id.as_str()) {
                return Err(DistributionError::DuplicateAssignment(id.clone()));
            }
            seen.push(id);
        }

        if !self.enabled {
            return Ok(());
        }

        let missing: Vec<String> = ports
            .iter()
            .filter(|port| !seen.contains(&port.id.as_str()))
            .map(|port| port.id.clone())
            .collect();
        let unknown: Vec<String> = seen
            .iter()
            .filter(|id| !ports.iter().any(|port| port.id == **id))
            .map(|id| id.to_string())
            .collect();

        if missing.is_empty() && unknown.is_empty() {
            Ok(())
        } else {
            Err(DistributionError::AssignmentMismatch { missing, unknown })
        }
    }
}
