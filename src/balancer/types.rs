use serde::{Deserialize, Serialize};

use crate::domain::PhaseConfig;

/// Current drawn by one circuit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortLoad {
    pub port_id: String,
    pub amps: f64,
}

/// Assigns circuits to the legs of a panel.
///
/// `phases` arrive cleared (no circuits, zero load) and keep their order;
/// implementations fill in `port_ids` and `current_load`.
pub trait BalanceStrategy: Send + Sync {
    fn assign(&self, loads: &[PortLoad], phases: Vec<PhaseConfig>) -> Vec<PhaseConfig>;

    fn name(&self) -> &'static str;
}
