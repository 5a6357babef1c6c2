use axum::{extract::State, Json};
use serde::Deserialize;

use super::{error::ApiError, response::ApiResponse, AppState};
use crate::electrical::{cable_specs, recommend_conductor, CableSpec, ConductorRecommendation};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CableSpecsRequest {
    pub current_amps: f64,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConductorRequest {
    pub current_amps: f64,
    #[serde(default)]
    pub voltage: Option<f64>,
    #[serde(default = "single_phase")]
    pub phase_count: usize,
}

fn single_phase() -> usize {
    1
}

/// POST /api/v1/cables/specs - Conductor and connector for a circuit current
pub async fn specs(Json(request): Json<CableSpecsRequest>) -> Result<Json<ApiResponse<CableSpec>>, ApiError> {
    Ok(Json(ApiResponse::success(cable_specs(request.current_amps))))
}

/// POST /api/v1/cables/conductor - Detailed sizing with maximum run length
///
/// `data` is null when there is no current to size for.
pub async fn conductor(
    State(state): State<AppState>,
    Json(request): Json<ConductorRequest>,
) -> Result<Json<ApiResponse<Option<ConductorRecommendation>>>, ApiError> {
    if !(1..=3).contains(&request.phase_count) {
        return Err(ApiError::BadRequest(format!(
            "phaseCount must be 1, 2 or 3 (got {})",
            request.phase_count
        )));
    }
    let voltage = request.voltage.unwrap_or(state.cfg.electrical.default_voltage);
    let recommendation = recommend_conductor(
        request.current_amps,
        voltage,
        request.phase_count,
        &state.cfg.electrical.conductor_params(),
    );
    Ok(Json(ApiResponse::success(recommendation)))
}
