//! Load report for a distribution project: per-circuit figures, per-leg
//! loads and everything worth warning the technician about.

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{info, warn};

use crate::balancer::{calculate_balance_quality, update_phase_loads, BalanceLabel};
use crate::domain::{DistributionProject, MainpowerConfig, PhaseId, SystemType};
use crate::electrical::{
    aggregate_totals, cable_specs, per_phase_amps, port_totals, recommend_conductor, CableSpec,
    ConductorParams, ConductorRecommendation, LoadMetrics,
};

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CircuitReport {
    pub port_id: String,
    pub name: String,
    pub abbreviation: String,
    pub phase: Option<PhaseId>,
    pub totals: LoadMetrics,
    pub breaker_amps: f64,
    pub breaker_utilization_percent: f64,
    pub breaker_overloaded: bool,
    pub cable: CableSpec,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PhaseReport {
    pub id: PhaseId,
    pub max_amps: f64,
    pub current_load: f64,
    pub load_percent: f64,
    pub overloaded: bool,
    pub circuit_count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum ReportWarning {
    #[serde(rename_all = "camelCase")]
    UnderProvisioned { total_ports: usize, circuits: usize },
    #[serde(rename_all = "camelCase")]
    PhaseOverloaded { phase: PhaseId, load_amps: f64, max_amps: f64 },
    #[serde(rename_all = "camelCase")]
    BreakerOverloaded { port_id: String, load_amps: f64, breaker_amps: f64 },
    AssignmentInvalid { message: String },
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoadReport {
    pub generated_at: DateTime<Utc>,
    pub voltage: f64,
    pub totals: LoadMetrics,
    /// Breaker-sizing current of the main feed
    pub feed_amps: f64,
    pub feed_conductor: Option<ConductorRecommendation>,
    pub circuits: Vec<CircuitReport>,
    pub phases: Vec<PhaseReport>,
    pub balance_quality: Option<f64>,
    pub balance_label: Option<BalanceLabel>,
    pub warnings: Vec<ReportWarning>,
}

impl LoadReport {
    pub fn build(project: &DistributionProject, params: &ConductorParams) -> Self {
        let voltage = project.voltage_system;
        let totals = aggregate_totals(&project.ports, voltage);
        let mut warnings = Vec::new();

        // phase loads are recomputed so a stale cache never reaches the report
        let mainpower: Option<MainpowerConfig> = project
            .mainpower
            .as_ref()
            .filter(|m| m.enabled)
            .map(|m| update_phase_loads(m, &project.ports, voltage));

        let circuits: Vec<CircuitReport> = project
            .ports
            .iter()
            .map(|port| {
                let load = port_totals(port, voltage);
                let breaker_overloaded = load.amps > port.breaker_amps;
                if breaker_overloaded {
                    warnings.push(ReportWarning::BreakerOverloaded {
                        port_id: port.id.clone(),
                        load_amps: load.amps,
                        breaker_amps: port.breaker_amps,
                    });
                }
                CircuitReport {
                    port_id: port.id.clone(),
                    name: port.name.clone(),
                    abbreviation: port.abbreviation.clone(),
                    phase: mainpower.as_ref().and_then(|m| m.phase_of(&port.id)),
                    totals: load,
                    breaker_amps: port.breaker_amps,
                    breaker_utilization_percent: load.amps / port.breaker_amps * 100.0,
                    breaker_overloaded,
                    cable: cable_specs(load.amps),
                }
            })
            .collect();

        let (phases, balance_quality) = match &mainpower {
            Some(config) => {
                if let Err(e) = config.check_assignment(&project.ports) {
                    warnings.push(ReportWarning::AssignmentInvalid {
                        message: e.to_string(),
                    });
                }
                if config.is_under_provisioned(project.ports.len()) {
                    warnings.push(ReportWarning::UnderProvisioned {
                        total_ports: config.total_ports,
                        circuits: project.ports.len(),
                    });
                }
                let phases: Vec<PhaseReport> = config
                    .phases
                    .iter()
                    .map(|phase| {
                        if phase.is_overloaded() {
                            warnings.push(ReportWarning::PhaseOverloaded {
                                phase: phase.id,
                                load_amps: phase.current_load,
                                max_amps: phase.max_amps,
                            });
                        }
                        PhaseReport {
                            id: phase.id,
                            max_amps: phase.max_amps,
                            current_load: phase.current_load,
                            load_percent: phase.load_percent(),
                            overloaded: phase.is_overloaded(),
                            circuit_count: phase.port_ids.len(),
                        }
                    })
                    .collect();
                (phases, Some(calculate_balance_quality(config)))
            }
            None => (Vec::new(), None),
        };

        let phase_count = match &mainpower {
            Some(config) => config.system_type.phase_count(),
            None if project.active_generator().is_some_and(|g| g.is_three_phase) => {
                SystemType::ThreePhase.phase_count()
            }
            None => SystemType::Single.phase_count(),
        };
        let feed_amps = per_phase_amps(totals.amps, phase_count == 3);

        if !warnings.is_empty() {
            warn!(project = %project.id, warnings = warnings.len(), "load report has warnings");
        }
        info!(
            project = %project.id,
            circuits = circuits.len(),
            total_watts = totals.watts,
            total_amps = totals.amps,
            "built load report"
        );

        Self {
            generated_at: Utc::now(),
            voltage,
            totals,
            feed_amps,
            feed_conductor: recommend_conductor(feed_amps, voltage, phase_count, params),
            circuits,
            phases,
            balance_quality,
            balance_label: balance_quality.map(BalanceLabel::from_quality),
            warnings,
        }
    }
}
