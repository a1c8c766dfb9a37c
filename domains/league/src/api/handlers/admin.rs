//! Liveness handlers

use axum::Json;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct HealthCheckResponse {
    pub server_resp: String,
}

/// **GET /admin/health-check**
pub async fn health_check() -> Json<HealthCheckResponse> {
    Json(HealthCheckResponse {
        server_resp: "running".to_string(),
    })
}
