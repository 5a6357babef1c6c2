use axum::{
    routing::{get, post},
    Router,
};

use super::{cables, health, loads, phases, reports, voltage, AppState};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/healthz", get(health::healthz))
        .route("/loads/totals", post(loads::totals))
        .route("/cables/specs", post(cables::specs))
        .route("/cables/conductor", post(cables::conductor))
        .route("/voltage/compatibility", post(voltage::compatibility))
        .route("/phases/limits", post(phases::limits))
        .route("/phases/balance", post(phases::balance))
        .route("/phases/update", post(phases::update))
        .route("/phases/move", post(phases::move_circuit))
        .route("/phases/sync", post(phases::sync))
        .route("/phases/status", post(phases::status))
        .route("/reports/load", post(reports::load_report))
        .route("/projects/snapshot", post(reports::snapshot))
        .with_state(state)
}
