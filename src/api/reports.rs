use axum::{extract::State, Json};
use validator::Validate;

use super::{error::ApiError, response::ApiResponse, AppState};
use crate::balancer::sync_ports;
use crate::domain::DistributionProject;
use crate::report::LoadReport;

fn validate_ports(project: &DistributionProject) -> Result<(), ApiError> {
    for port in &project.ports {
        port.validate()?;
    }
    Ok(())
}

/// POST /api/v1/reports/load - Full load report for a project
pub async fn load_report(
    State(state): State<AppState>,
    Json(project): Json<DistributionProject>,
) -> Result<Json<ApiResponse<LoadReport>>, ApiError> {
    validate_ports(&project)?;
    let report = LoadReport::build(&project, &state.cfg.electrical.conductor_params());
    Ok(Json(ApiResponse::success(report)))
}

/// POST /api/v1/projects/snapshot - Project as it should be saved
///
/// Circuits are validated, the panel assignment follows the circuit list and
/// the totals are captured at this moment.
pub async fn snapshot(
    Json(project): Json<DistributionProject>,
) -> Result<Json<ApiResponse<DistributionProject>>, ApiError> {
    validate_ports(&project)?;

    let mainpower = project
        .mainpower
        .as_ref()
        .map(|config| {
            if config.enabled {
                sync_ports(config, &project.ports, project.voltage_system)
            } else {
                config.clone()
            }
        });
    let saved = DistributionProject {
        mainpower,
        ..project
    }
    .with_snapshot_totals();

    tracing::info!(
        project = %saved.id,
        total_watts = saved.total_watts,
        total_amperes = saved.total_amperes,
        "project snapshot taken"
    );
    Ok(Json(ApiResponse::success(saved)))
}
