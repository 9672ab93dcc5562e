use axum::Router;
use axum::routing::get;
use utoipa::OpenApi;

use super::handlers::health_check::{__path_health_check, health_check};

#[derive(OpenApi)]
#[openapi(paths(health_check))]
pub struct HealthApiDoc;

pub fn health_routes<S: Clone + Send + Sync + 'static>(root_path: &str) -> Router<S> {
    Router::new().route(&format!("{root_path}/health"), get(health_check))
}
