use axum::Json;
use serde::{Deserialize, Serialize};

use super::{error::ApiError, response::ApiResponse};
use crate::domain::VoltageRating;
use crate::electrical::{is_compatible, voltage_bucket, VoltageBucket};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompatibilityRequest {
    pub system_voltage: VoltageRating,
    pub equipment_voltage: VoltageRating,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompatibilityResponse {
    pub compatible: bool,
    pub system_bucket: VoltageBucket,
    pub equipment_bucket: VoltageBucket,
    pub system_bucket_code: i8,
    pub equipment_bucket_code: i8,
    /// Human-readable bucket names, e.g. "220V" or "universal"
    pub system_label: String,
    pub equipment_label: String,
}

/// POST /api/v1/voltage/compatibility - Can this equipment go on this supply?
pub async fn compatibility(
    Json(request): Json<CompatibilityRequest>,
) -> Result<Json<ApiResponse<CompatibilityResponse>>, ApiError> {
    let system_bucket = voltage_bucket(&request.system_voltage);
    let equipment_bucket = voltage_bucket(&request.equipment_voltage);

    Ok(Json(ApiResponse::success(CompatibilityResponse {
        compatible: is_compatible(&request.system_voltage, &request.equipment_voltage),
        system_bucket,
        equipment_bucket,
        system_bucket_code: system_bucket.code(),
        equipment_bucket_code: equipment_bucket.code(),
        system_label: system_bucket.to_string(),
        equipment_label: equipment_bucket.to_string(),
    })))
}
