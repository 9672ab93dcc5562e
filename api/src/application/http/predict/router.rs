use axum::Router;
use axum::routing::post;
use foodlens_core::domain::recognition::ports::FoodRecognitionService;
use utoipa::OpenApi;

use super::handlers::predict_food::{__path_predict_food, predict_food};
use crate::application::http::server::app_state::AppState;

#[derive(OpenApi)]
#[openapi(paths(predict_food))]
pub struct PredictApiDoc;

pub fn predict_routes<S: FoodRecognitionService>(state: AppState<S>) -> Router<AppState<S>> {
    Router::new().route(
        &format!("{}/predict", state.args.server.root_path),
        post(predict_food::<S>),
    )
}
