use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use super::{error::ApiError, response::ApiResponse, AppState};
use crate::balancer::{
    balance_phases, calculate_balance_quality, check_phase_overload, move_port, sync_ports,
    update_phase_loads, BalanceLabel, PhaseOverload,
};
use crate::domain::{GeneratorConfig, MainpowerConfig, PhaseId, Port, SystemType};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LimitsRequest {
    pub system_type: SystemType,
    pub total_ports: usize,
    #[serde(default)]
    pub generator: Option<GeneratorConfig>,
}

/// Panel configuration plus the circuits it feeds
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PhasesRequest {
    pub config: MainpowerConfig,
    pub ports: Vec<Port>,
    #[serde(default)]
    pub voltage: Option<f64>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoveRequest {
    pub config: MainpowerConfig,
    pub ports: Vec<Port>,
    #[serde(default)]
    pub voltage: Option<f64>,
    pub port_id: String,
    pub target_phase: PhaseId,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusRequest {
    pub config: MainpowerConfig,
    #[serde(default)]
    pub circuit_count: Option<usize>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PhaseStatus {
    pub overload: PhaseOverload,
    pub balance_quality: f64,
    pub balance_label: BalanceLabel,
    pub channel_capacity: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub under_provisioned: Option<bool>,
}

type ConfigResult = Result<Json<ApiResponse<MainpowerConfig>>, ApiError>;

/// POST /api/v1/phases/limits - Fresh panel sized from the generator
pub async fn limits(Json(request): Json<LimitsRequest>) -> ConfigResult {
    let config = MainpowerConfig::new(request.system_type, request.total_ports, request.generator.as_ref());
    Ok(Json(ApiResponse::success(config)))
}

/// POST /api/v1/phases/balance - Reassign every circuit
pub async fn balance(State(state): State<AppState>, Json(request): Json<PhasesRequest>) -> ConfigResult {
    let voltage = request.voltage.unwrap_or(state.cfg.electrical.default_voltage);
    let config = balance_phases(&request.ports, voltage, &request.config);
    Ok(Json(ApiResponse::success(config)))
}

/// POST /api/v1/phases/update - Refresh loads, keep assignment
pub async fn update(State(state): State<AppState>, Json(request): Json<PhasesRequest>) -> ConfigResult {
    let voltage = request.voltage.unwrap_or(state.cfg.electrical.default_voltage);
    let config = update_phase_loads(&request.config, &request.ports, voltage);
    Ok(Json(ApiResponse::success(config)))
}

/// POST /api/v1/phases/move - Manual reassignment of one circuit
pub async fn move_circuit(State(state): State<AppState>, Json(request): Json<MoveRequest>) -> ConfigResult {
    let voltage = request.voltage.unwrap_or(state.cfg.electrical.default_voltage);
    let config = move_port(
        &request.config,
        &request.ports,
        voltage,
        &request.port_id,
        request.target_phase,
    )?;
    Ok(Json(ApiResponse::success(config)))
}

/// POST /api/v1/phases/sync - Follow a changed circuit list
pub async fn sync(State(state): State<AppState>, Json(request): Json<PhasesRequest>) -> ConfigResult {
    let voltage = request.voltage.unwrap_or(state.cfg.electrical.default_voltage);
    let config = sync_ports(&request.config, &request.ports, voltage);
    Ok(Json(ApiResponse::success(config)))
}

/// POST /api/v1/phases/status - Overload and balance figures
pub async fn status(Json(request): Json<StatusRequest>) -> Result<Json<ApiResponse<PhaseStatus>>, ApiError> {
    let config = &request.config;
    let balance_quality = calculate_balance_quality(config);
    Ok(Json(ApiResponse::success(PhaseStatus {
        overload: check_phase_overload(config),
        balance_quality,
        balance_label: BalanceLabel::from_quality(balance_quality),
        channel_capacity: config.channel_capacity(),
        under_provisioned: request.circuit_count.map(|n| config.is_under_provisioned(n)),
    })))
}
