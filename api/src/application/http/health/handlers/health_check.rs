use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::server::api_entities::response::Response;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    pub status: String,
}

/// Liveness only; does not verify that the classifier or the external
/// model are reachable.
#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    summary = "API health check",
    responses(
        (status = 200, body = HealthResponse)
    ),
)]
pub async fn health_check() -> Response<HealthResponse> {
    Response::OK(HealthResponse {
        status: "healthy".to_string(),
    })
}
