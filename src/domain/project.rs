use serde::{Deserialize, Serialize};

use super::{GeneratorConfig, MainpowerConfig, Port};
use crate::electrical::load::aggregate_totals;

/// A power plan for one event.
///
/// `total_watts` and `total_amperes` are snapshots taken when the project is
/// saved; they are not kept in sync with `ports`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DistributionProject {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    pub voltage_system: f64,
    #[serde(default)]
    pub ports: Vec<Port>,
    #[serde(default)]
    pub generator: Option<GeneratorConfig>,
    #[serde(default)]
    pub mainpower: Option<MainpowerConfig>,
    #[serde(default)]
    pub total_watts: f64,
    #[serde(default)]
    pub total_amperes: f64,
}

impl DistributionProject {
    pub fn with_snapshot_totals(&self) -> Self {
        let totals = aggregate_totals(&self.ports, self.voltage_system);
        Self {
            total_watts: totals.watts,
            total_amperes: totals.amps,
            ..self.clone()
        }
    }

    /// Generator settings, only when the generator is switched on
    pub fn active_generator(&self) -> Option<&GeneratorConfig> {
        self.generator.as_ref().filter(|g| g.enabled)
    }
}
