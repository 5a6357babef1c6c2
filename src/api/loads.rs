use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use super::{error::ApiError, response::ApiResponse, AppState};
use crate::domain::Port;
use crate::electrical::{aggregate_totals, per_phase_amps, port_totals, LoadMetrics};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TotalsRequest {
    #[serde(default)]
    pub voltage: Option<f64>,
    pub ports: Vec<Port>,
    #[serde(default)]
    pub three_phase: bool,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PortTotals {
    pub port_id: String,
    pub totals: LoadMetrics,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TotalsResponse {
    pub voltage: f64,
    pub ports: Vec<PortTotals>,
    pub total: LoadMetrics,
    pub per_phase_amps: f64,
}

/// POST /api/v1/loads/totals - Circuit and plan totals
pub async fn totals(
    State(state): State<AppState>,
    Json(request): Json<TotalsRequest>,
) -> Result<Json<ApiResponse<TotalsResponse>>, ApiError> {
    let voltage = request.voltage.unwrap_or(state.cfg.electrical.default_voltage);
    let ports = request
        .ports
        .iter()
        .map(|port| PortTotals {
            port_id: port.id.clone(),
            totals: port_totals(port, voltage),
        })
        .collect();
    let total = aggregate_totals(&request.ports, voltage);

    Ok(Json(ApiResponse::success(TotalsResponse {
        voltage,
        ports,
        total,
        per_phase_amps: per_phase_amps(total.amps, request.three_phase),
    })))
}
