use std::sync::Arc;

use axum::Router;
use axum::http::header::{ACCEPT, AUTHORIZATION, CONTENT_LENGTH, CONTENT_TYPE};
use axum::http::{HeaderValue, Method};
use foodlens_core::application::{FoodLensService, create_service};
use foodlens_core::domain::common::FoodLensConfig;
use foodlens_core::domain::recognition::ports::FoodRecognitionService;
use tower_http::cors::{Any, CorsLayer};
use tracing::{debug, info_span};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::application::http::health::router::health_routes;
use crate::application::http::predict::router::predict_routes;
use crate::application::http::server::app_state::AppState;
use crate::application::http::server::openapi::ApiDoc;
use crate::args::Args;

pub fn state(args: Arc<Args>) -> Result<AppState<FoodLensService>, anyhow::Error> {
    let config = FoodLensConfig::from(args.as_ref().clone());
    let service = create_service(config)?;

    Ok(AppState::new(args, service))
}

/// Returns the [`Router`] of this application.
pub fn router<S: FoodRecognitionService>(state: AppState<S>) -> Result<Router, anyhow::Error> {
    let trace_layer = tower_http::trace::TraceLayer::new_for_http().make_span_with(
        |request: &axum::extract::Request| {
            let uri: String = request.uri().to_string();
            info_span!("http_request", method = ?request.method(), uri)
        },
    );

    let allowed_origins = &state.args.server.allowed_origins;
    debug!("Allowed origins: {:?}", allowed_origins);

    let methods = [Method::GET, Method::POST, Method::OPTIONS];
    let headers = [AUTHORIZATION, CONTENT_TYPE, CONTENT_LENGTH, ACCEPT];

    // A wildcard origin cannot be combined with credentials.
    let cors = if allowed_origins.iter().any(|origin| origin == "*") {
        CorsLayer::new()
            .allow_methods(methods)
            .allow_headers(headers)
            .allow_origin(Any)
    } else {
        let origins = allowed_origins
            .iter()
            .map(|origin| HeaderValue::from_str(origin))
            .collect::<Result<Vec<_>, _>>()?;

        CorsLayer::new()
            .allow_methods(methods)
            .allow_headers(headers)
            .allow_origin(origins)
            .allow_credentials(true)
    };

    let root_path = state.args.server.root_path.clone();

    let mut openapi = ApiDoc::openapi();
    let mut paths = openapi.paths.clone();
    paths.paths = openapi
        .paths
        .paths
        .into_iter()
        .map(|(path, item)| (format!("{root_path}{path}"), item))
        .collect();
    openapi.paths = paths;

    let api_docs_url = format!("{root_path}/api-docs/openapi.json");

    let router = axum::Router::new()
        .merge(SwaggerUi::new(format!("{root_path}/swagger-ui")).url(api_docs_url, openapi))
        .merge(predict_routes(state.clone()))
        .merge(health_routes(&root_path))
        .layer(trace_layer)
        .layer(cors)
        .with_state(state);

    Ok(router)
}
